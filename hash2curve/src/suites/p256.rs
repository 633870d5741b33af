//! NIST P-256 with SHA-256, see [section 8.2 of RFC9380][p256].
//!
//! `A * B != 0` so the map goes straight onto the curve.
//!
//! [p256]: https://www.rfc-editor.org/rfc/rfc9380.html#name-suites-for-nist-p-256

use ::p256::{AffinePoint, EncodedPoint, FieldElement, ProjectivePoint, Scalar};
use elliptic_curve::{consts::U48, group::cofactor::CofactorGroup, sec1::FromEncodedPoint};
use ff::PrimeField;
use hex_literal::hex;
use sha2::Sha256;

use crate::{
    ConfigError, Curve, Dst, Error, ExpandMsgXmd, FieldArithmetic, NoIsogeny, Result, Suite,
    WeierstrassCurve, field::impl_field_arithmetic,
};

/// Suite ID of the random oracle encoding.
pub const HASH_TO_CURVE_ID: &str = "P256_XMD:SHA-256_SSWU_RO_";
/// Suite ID of the nonuniform encoding.
pub const ENCODE_TO_CURVE_ID: &str = "P256_XMD:SHA-256_SSWU_NU_";

impl_field_arithmetic!(FieldElement, U48);
impl_field_arithmetic!(Scalar, U48);

/// P-256 with `expand_message_xmd` over SHA-256.
pub type NistP256Suite<'a> = Suite<'a, NistP256Curve, ExpandMsgXmd<Sha256>>;

/// Build the P-256 suite for `dst`.
///
/// # Errors
/// If `dst` is empty or longer than 255 bytes.
pub fn suite(dst: &[u8]) -> Result<NistP256Suite<'_>> {
    Suite::new(NistP256Curve::new()?, Dst::new(dst)?)
}

/// The P-256 curve collaborator.
#[derive(Clone, Copy, Debug)]
pub struct NistP256Curve {
    equation: WeierstrassCurve<FieldElement>,
    z: FieldElement,
}

impl NistP256Curve {
    /// `A = -3`, `B` from SEC 2 and `Z = -10`.
    ///
    /// # Errors
    /// [`ConfigError::InvalidConstant`] if `B` does not decode.
    pub fn new() -> Result<Self> {
        let b = Option::<FieldElement>::from(FieldElement::from_repr(
            hex!("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b").into(),
        ))
        .ok_or(Error::from(ConfigError::InvalidConstant))?;

        Ok(Self {
            equation: WeierstrassCurve::new(minus(3), b),
            z: minus(10),
        })
    }
}

fn minus(value: u64) -> FieldElement {
    -<FieldElement as FieldArithmetic>::from_u64(value)
}

impl Curve for NistP256Curve {
    type FieldElement = FieldElement;
    type Scalar = Scalar;
    type Point = ProjectivePoint;
    type Isogeny = NoIsogeny;

    fn equation(&self) -> WeierstrassCurve<FieldElement> {
        self.equation
    }

    fn z(&self) -> FieldElement {
        self.z
    }

    fn isogeny(&self) -> Option<NoIsogeny> {
        None
    }

    fn new_point(&self, x: &FieldElement, y: &FieldElement) -> Result<ProjectivePoint> {
        let encoded = EncodedPoint::from_affine_coordinates(&x.to_repr(), &y.to_repr(), false);
        Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded))
            .map(ProjectivePoint::from)
            .ok_or(Error::Arithmetic)
    }

    fn add_points(&self, p: &ProjectivePoint, q: &ProjectivePoint) -> ProjectivePoint {
        *p + *q
    }

    fn clear_cofactor(&self, p: &ProjectivePoint) -> ProjectivePoint {
        // h = 1
        p.clear_cofactor()
    }
}
