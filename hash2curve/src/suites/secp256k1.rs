//! secp256k1 with SHA-256, see [section 8.7 of RFC9380][k256].
//!
//! secp256k1 has `A = 0`, so points are mapped onto the 3-isogenous curve
//! `E': y^2 = x^3 + A' * x + B'` and pushed forward with the isogeny of
//! [Appendix E.1][iso].
//!
//! [k256]: https://www.rfc-editor.org/rfc/rfc9380.html#name-suites-for-secp256k1
//! [iso]: https://www.rfc-editor.org/rfc/rfc9380.html#name-3-isogeny-map-for-secp256k1

use ::k256::{AffinePoint, EncodedPoint, FieldBytes, FieldElement, ProjectivePoint, Scalar};
use elliptic_curve::{
    consts::U48, generic_array::GenericArray, group::cofactor::CofactorGroup,
    sec1::FromEncodedPoint,
};
use hex_literal::hex;
use sha2::Sha256;
use subtle::{Choice, CtOption};

use crate::{
    ConfigError, Curve, Dst, Error, ExpandMsgXmd, FieldArithmetic, FromOkm, RationalIsogeny,
    Result, Suite, WeierstrassCurve, field::impl_field_arithmetic, reduce_be_bytes,
};

/// Suite ID of the random oracle encoding.
pub const HASH_TO_CURVE_ID: &str = "secp256k1_XMD:SHA-256_SSWU_RO_";
/// Suite ID of the nonuniform encoding.
pub const ENCODE_TO_CURVE_ID: &str = "secp256k1_XMD:SHA-256_SSWU_NU_";

/// The 3-isogeny `E' -> secp256k1`.
pub type Secp256k1Isogeny = RationalIsogeny<FieldElement, 4>;

/// secp256k1 with `expand_message_xmd` over SHA-256.
pub type Secp256k1Suite<'a> = Suite<'a, Secp256k1Curve, ExpandMsgXmd<Sha256>>;

/// Build the secp256k1 suite for `dst`.
///
/// # Errors
/// If `dst` is empty or longer than 255 bytes.
pub fn suite(dst: &[u8]) -> Result<Secp256k1Suite<'_>> {
    Suite::new(Secp256k1Curve::new()?, Dst::new(dst)?)
}

// The field implementation reduces lazily, so every result is normalized.
impl FieldArithmetic for FieldElement {
    fn zero() -> Self {
        FieldElement::ZERO
    }

    fn one() -> Self {
        FieldElement::ONE
    }

    fn from_u64(value: u64) -> Self {
        let mut bytes = FieldBytes::default();
        bytes[24..].copy_from_slice(&value.to_be_bytes());
        // below the modulus
        FieldElement::from_bytes(&bytes).unwrap_or(FieldElement::ZERO)
    }

    fn add(&self, rhs: &Self) -> Self {
        (*self + *rhs).normalize()
    }

    fn sub(&self, rhs: &Self) -> Self {
        (*self + rhs.negate(1)).normalize()
    }

    fn mul(&self, rhs: &Self) -> Self {
        (*self * *rhs).normalize()
    }

    fn square(&self) -> Self {
        FieldElement::square(self).normalize()
    }

    fn neg(&self) -> Self {
        self.negate(1).normalize()
    }

    fn invert(&self) -> CtOption<Self> {
        FieldElement::invert(self).map(|inv| inv.normalize())
    }

    fn sqrt(&self) -> CtOption<Self> {
        FieldElement::sqrt(self).map(|root| root.normalize())
    }

    fn is_zero(&self) -> Choice {
        self.normalizes_to_zero()
    }

    fn sgn0(&self) -> Choice {
        self.normalize().is_odd()
    }
}

impl FromOkm for FieldElement {
    type Length = U48;

    fn from_okm(data: &GenericArray<u8, Self::Length>) -> Self {
        reduce_be_bytes(data)
    }
}

impl_field_arithmetic!(Scalar, U48);

fn field_element(bytes: [u8; 32]) -> Result<FieldElement> {
    Option::<FieldElement>::from(FieldElement::from_bytes(&bytes.into()))
        .map(|fe| fe.normalize())
        .ok_or(Error::from(ConfigError::InvalidConstant))
}

/// The secp256k1 curve collaborator.
#[derive(Clone, Copy, Debug)]
pub struct Secp256k1Curve {
    equation: WeierstrassCurve<FieldElement>,
    z: FieldElement,
    isogeny: Secp256k1Isogeny,
}

impl Secp256k1Curve {
    /// `y^2 = x^3 + 7`, with `Z = -11` on `E'`.
    ///
    /// # Errors
    /// [`ConfigError::InvalidConstant`] if an isogeny constant does not decode.
    pub fn new() -> Result<Self> {
        let zero = FieldElement::ZERO;
        let one = FieldElement::ONE;

        let domain = WeierstrassCurve::new(
            field_element(hex!(
                "3f8731abdd661adca08a5558f0f5d272e953d363cb6f0e5d405447c01a444533"
            ))?,
            FieldElement::from_u64(1771),
        );

        let isogeny = RationalIsogeny::new(
            domain,
            [
                field_element(hex!(
                    "8e38e38e38e38e38e38e38e38e38e38e38e38e38e38e38e38e38e38daaaaa8c7"
                ))?,
                field_element(hex!(
                    "07d3d4c80bc321d5b9f315cea7fd44c5d595d2fc0bf63b92dfff1044f17c6581"
                ))?,
                field_element(hex!(
                    "534c328d23f234e6e2a413deca25caece4506144037c40314ecbd0b53d9dd262"
                ))?,
                field_element(hex!(
                    "8e38e38e38e38e38e38e38e38e38e38e38e38e38e38e38e38e38e38daaaaa88c"
                ))?,
            ],
            [
                field_element(hex!(
                    "d35771193d94918a9ca34ccbb7b640dd86cd409542f8487d9fe6b745781eb49b"
                ))?,
                field_element(hex!(
                    "edadc6f64383dc1df7c4b2d51b54225406d36b641f5e41bbc52a56612a8c6d14"
                ))?,
                one,
                zero,
            ],
            [
                field_element(hex!(
                    "4bda12f684bda12f684bda12f684bda12f684bda12f684bda12f684b8e38e23c"
                ))?,
                field_element(hex!(
                    "c75e0c32d5cb7c0fa9d0a54b12a0a6d5647ab046d686da6fdffc90fc201d71a3"
                ))?,
                field_element(hex!(
                    "29a6194691f91a73715209ef6512e576722830a201be2018a765e85a9ecee931"
                ))?,
                field_element(hex!(
                    "2f684bda12f684bda12f684bda12f684bda12f684bda12f684bda12f38e38d84"
                ))?,
            ],
            [
                field_element(hex!(
                    "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffff93b"
                ))?,
                field_element(hex!(
                    "7a06534bb8bdb49fd5e9e6632722c2989467c1bfc8e8d978dfb425d2685c2573"
                ))?,
                field_element(hex!(
                    "6484aa716545ca2cf3a70c3fa8fe337e0a3d21162f0d6299a7bf8192bfd2a76f"
                ))?,
                one,
            ],
        );

        Ok(Self {
            equation: WeierstrassCurve::new(zero, FieldElement::from_u64(7)),
            z: FieldElement::from_u64(11).neg(),
            isogeny,
        })
    }
}

impl Curve for Secp256k1Curve {
    type FieldElement = FieldElement;
    type Scalar = Scalar;
    type Point = ProjectivePoint;
    type Isogeny = Secp256k1Isogeny;

    fn equation(&self) -> WeierstrassCurve<FieldElement> {
        self.equation
    }

    fn z(&self) -> FieldElement {
        self.z
    }

    fn isogeny(&self) -> Option<Secp256k1Isogeny> {
        Some(self.isogeny)
    }

    fn new_point(&self, x: &FieldElement, y: &FieldElement) -> Result<ProjectivePoint> {
        let encoded = EncodedPoint::from_affine_coordinates(&x.to_bytes(), &y.to_bytes(), false);
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
