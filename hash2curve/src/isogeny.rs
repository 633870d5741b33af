//! Isogenies from an auxiliary curve onto the target curve.
//!
//! Curves with `A == 0` or `B == 0` (e.g. secp256k1) are hashed to by mapping
//! onto an isogenous curve `E'` with `A' * B' != 0` and pushing the result
//! forward, see [Appendix E of RFC9380][iso].
//!
//! [iso]: https://www.rfc-editor.org/rfc/rfc9380.html#name-isogeny-maps-for-suites

use crate::{Error, FieldArithmetic, Result, WeierstrassCurve};

/// A rational map `E' -> E`.
pub trait Isogeny<F> {
    /// The curve `E'` points are mapped from.
    fn domain(&self) -> WeierstrassCurve<F>;

    /// Push the point `(x', y')` on `E'` forward to `E`.
    ///
    /// # Errors
    /// [`Error::Arithmetic`] if a denominator vanishes, i.e. `(x', y')` is in
    /// the kernel.
    fn push(&self, x: &F, y: &F) -> Result<(F, F)>;
}

/// Isogeny given by the four polynomials of
/// `(x, y) = (x_num(x') / x_den(x'), y' * y_num(x') / y_den(x'))`.
///
/// Coefficients are stored in ascending order of degree. Shorter polynomials
/// are padded with zeros.
#[derive(Clone, Copy, Debug)]
pub struct RationalIsogeny<F, const N: usize> {
    domain: WeierstrassCurve<F>,
    x_num: [F; N],
    x_den: [F; N],
    y_num: [F; N],
    y_den: [F; N],
}

impl<F: FieldArithmetic, const N: usize> RationalIsogeny<F, N> {
    /// Create an isogeny from `domain` given its coefficient tables.
    pub const fn new(
        domain: WeierstrassCurve<F>,
        x_num: [F; N],
        x_den: [F; N],
        y_num: [F; N],
        y_den: [F; N],
    ) -> Self {
        Self {
            domain,
            x_num,
            x_den,
            y_num,
            y_den,
        }
    }
}

/// Horner evaluation, highest degree first.
fn evaluate<F: FieldArithmetic>(coefficients: &[F], x: &F) -> F {
    coefficients
        .iter()
        .rev()
        .fold(F::zero(), |acc, k| acc.mul(x).add(k))
}

impl<F: FieldArithmetic, const N: usize> Isogeny<F> for RationalIsogeny<F, N> {
    fn domain(&self) -> WeierstrassCurve<F> {
        self.domain
    }

    fn push(&self, x: &F, y: &F) -> Result<(F, F)> {
        let x_num = evaluate(&self.x_num, x);
        let x_den = evaluate(&self.x_den, x);
        let y_num = evaluate(&self.y_num, x);
        let y_den = evaluate(&self.y_den, x);

        // one inversion for both denominators
        let inv = Option::<F>::from(x_den.mul(&y_den).invert()).ok_or(Error::Arithmetic)?;
        let x_out = x_num.mul(&y_den).mul(&inv);
        let y_out = y.mul(&y_num).mul(&x_den).mul(&inv);
        Ok((x_out, y_out))
    }
}

/// Placeholder for curves which are mapped to directly.
#[derive(Clone, Copy, Debug)]
pub enum NoIsogeny {}

impl<F> Isogeny<F> for NoIsogeny {
    fn domain(&self) -> WeierstrassCurve<F> {
        match *self {}
    }

    fn push(&self, _x: &F, _y: &F) -> Result<(F, F)> {
        match *self {}
    }
}

#[cfg(all(test, feature = "p256"))]
mod tests {
    use super::{Isogeny, RationalIsogeny};
    use crate::{Error, FieldArithmetic, WeierstrassCurve};
    use ff::Field;
    use p256::FieldElement;

    fn fe(value: u64) -> FieldElement {
        <FieldElement as FieldArithmetic>::from_u64(value)
    }

    #[test]
    fn evaluates_rational_functions() {
        // x = (x' + 2) / (x' + 1), y = y' * 3x' / 1
        let iso = RationalIsogeny::new(
            WeierstrassCurve::new(fe(1), fe(1)),
            [fe(2), fe(1), FieldElement::ZERO],
            [fe(1), fe(1), FieldElement::ZERO],
            [FieldElement::ZERO, fe(3), FieldElement::ZERO],
            [fe(1), FieldElement::ZERO, FieldElement::ZERO],
        );

        let (x, y) = iso.push(&fe(3), &fe(5)).unwrap();
        // 5 / 4
        assert_eq!(x * fe(4), fe(5));
        assert_eq!(y, fe(45));
    }

    #[test]
    fn kernel_point_is_rejected() {
        let iso = RationalIsogeny::new(
            WeierstrassCurve::new(fe(1), fe(1)),
            [FieldElement::ZERO, FieldElement::ONE],
            [FieldElement::ZERO, FieldElement::ONE],
            [FieldElement::ONE, FieldElement::ZERO],
            [FieldElement::ONE, FieldElement::ZERO],
        );
        assert_eq!(
            iso.push(&FieldElement::ZERO, &FieldElement::ONE),
            Err(Error::Arithmetic)
        );
    }
}
