//! Curve equations and the curve capabilities used by the orchestrators.

use core::fmt::Debug;

use subtle::Choice;

use crate::{FieldArithmetic, FromOkm, Isogeny, Result};

/// A short Weierstrass equation `y^2 = x^3 + A * x + B`.
#[derive(Clone, Copy, Debug)]
pub struct WeierstrassCurve<F> {
    /// Coefficient `A`.
    pub a: F,
    /// Coefficient `B`.
    pub b: F,
}

impl<F: FieldArithmetic> WeierstrassCurve<F> {
    /// Create the curve `y^2 = x^3 + a * x + b`.
    pub const fn new(a: F, b: F) -> Self {
        Self { a, b }
    }

    /// `g(x) = x^3 + A * x + B`
    pub fn evaluate_rhs(&self, x: &F) -> F {
        x.square().add(&self.a).mul(x).add(&self.b)
    }

    /// Does `(x, y)` satisfy the equation?
    pub fn is_on_curve(&self, x: &F, y: &F) -> Choice {
        y.square().ct_eq(&self.evaluate_rhs(x))
    }

    /// Is `A` or `B` zero? Such curves can't be mapped to directly with
    /// the Simplified SWU method.
    pub fn is_degenerate(&self) -> Choice {
        self.a.is_zero() | self.b.is_zero()
    }
}

/// The curve collaborator of a ciphersuite: the target group, its base field,
/// the map parameters and, for degenerate curves, the isogeny to map through.
pub trait Curve: Debug {
    /// Base field.
    type FieldElement: FieldArithmetic + FromOkm;

    /// Scalar field, for `hash_to_scalar`.
    type Scalar: FromOkm;

    /// Group element in the prime-order subgroup.
    type Point: Copy + Debug;

    /// Isogeny onto this curve, [`NoIsogeny`](crate::NoIsogeny) for curves
    /// mapped to directly.
    type Isogeny: Isogeny<Self::FieldElement> + Debug;

    /// The target curve equation.
    fn equation(&self) -> WeierstrassCurve<Self::FieldElement>;

    /// The non-square `Z` of the curve the map runs on, which is the domain of
    /// [`Curve::isogeny`] when there is one.
    fn z(&self) -> Self::FieldElement;

    /// Isogeny from an auxiliary curve with `A * B != 0`.
    fn isogeny(&self) -> Option<Self::Isogeny>;

    /// Build a point from affine coordinates.
    ///
    /// # Errors
    /// [`Error::Arithmetic`](crate::Error::Arithmetic) if `(x, y)` is not on
    /// the curve.
    fn new_point(&self, x: &Self::FieldElement, y: &Self::FieldElement) -> Result<Self::Point>;

    /// `p + q`
    fn add_points(&self, p: &Self::Point, q: &Self::Point) -> Self::Point;

    /// Move `p` into the prime-order subgroup.
    fn clear_cofactor(&self, p: &Self::Point) -> Self::Point;
}

#[cfg(all(test, feature = "p256"))]
mod tests {
    use super::WeierstrassCurve;
    use crate::FieldArithmetic;
    use ff::{Field, PrimeField};
    use hex_literal::hex;
    use p256::{AffinePoint, FieldElement};

    fn p256_equation() -> WeierstrassCurve<FieldElement> {
        let b = FieldElement::from_repr(
            hex!("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b").into(),
        )
        .unwrap();
        let a = FieldArithmetic::neg(&<FieldElement as FieldArithmetic>::from_u64(3));
        WeierstrassCurve::new(a, b)
    }

    #[test]
    fn generator_is_on_curve() {
        use elliptic_curve::sec1::{Coordinates, ToEncodedPoint};
        let encoded = AffinePoint::GENERATOR.to_encoded_point(false);
        let Coordinates::Uncompressed { x, y } = encoded.coordinates() else {
            panic!("uncompressed point expected");
        };
        let x = FieldElement::from_repr(*x).unwrap();
        let y = FieldElement::from_repr(*y).unwrap();

        let curve = p256_equation();
        assert!(bool::from(curve.is_on_curve(&x, &y)));
        assert!(!bool::from(curve.is_on_curve(&x, &(y + FieldElement::ONE))));
        assert!(!bool::from(curve.is_degenerate()));
    }

    #[test]
    fn degenerate() {
        let curve = WeierstrassCurve::new(FieldElement::ZERO, FieldElement::ONE);
        assert!(bool::from(curve.is_degenerate()));
        let curve = WeierstrassCurve::new(FieldElement::ONE, FieldElement::ZERO);
        assert!(bool::from(curve.is_degenerate()));
    }
}
