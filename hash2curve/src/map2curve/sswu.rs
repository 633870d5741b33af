//! Simplified Shallue-van de Woestijne-Ulas method.
//!
//! <https://www.rfc-editor.org/rfc/rfc9380.html#name-simplified-shallue-van-de-w>

use subtle::Choice;
use tracing::{debug, warn};

use super::MapToCurve;
use crate::{ConfigError, Error, FieldArithmetic, Isogeny, Result, WeierstrassCurve};

/// Simplified SWU map onto a curve with `A * B != 0`.
#[derive(Clone, Copy, Debug)]
pub struct SswuMapper<F> {
    curve: WeierstrassCurve<F>,
    z: F,
    c1: F,
    c2: F,
}

impl<F: FieldArithmetic> SswuMapper<F> {
    /// Create a mapper for `curve` with the non-square `z`.
    ///
    /// # Errors
    /// [`Error::Configuration`] if any of the following does not hold:
    /// - `A != 0` and `B != 0`
    /// - `z` is not a square
    /// - `z != -1`
    /// - `g(B / (z * A))` is a square
    pub fn new(curve: WeierstrassCurve<F>, z: F) -> Result<Self> {
        let mapper = Self::validate(curve, z);
        match &mapper {
            Ok(_) => debug!("SSWU mapper ready"),
            Err(err) => warn!(%err, "curve is not suitable for the SSWU map"),
        }
        mapper
    }

    fn validate(curve: WeierstrassCurve<F>, z: F) -> Result<Self> {
        if bool::from(curve.a.is_zero()) {
            return Err(ConfigError::ZeroA.into());
        }
        if bool::from(curve.b.is_zero()) {
            return Err(ConfigError::ZeroB.into());
        }
        if bool::from(z.is_square()) {
            return Err(ConfigError::SquareZ.into());
        }
        let minus_one = F::one().neg();
        if bool::from(z.ct_eq(&minus_one)) {
            return Err(ConfigError::MinusOneZ.into());
        }

        let c1 = Option::<F>::from(curve.b.neg().div(&curve.a)).ok_or(Error::Arithmetic)?;
        let c2 = Option::<F>::from(minus_one.div(&z)).ok_or(Error::Arithmetic)?;

        // c1 * c2 = B / (Z * A)
        if !bool::from(curve.evaluate_rhs(&c1.mul(&c2)).is_square()) {
            return Err(ConfigError::NonSquareGx.into());
        }

        Ok(Self { curve, z, c1, c2 })
    }

    /// The curve points are mapped onto.
    pub fn curve(&self) -> &WeierstrassCurve<F> {
        &self.curve
    }

    /// `Z`
    pub fn z(&self) -> &F {
        &self.z
    }

    /// `-B / A`
    pub fn c1(&self) -> &F {
        &self.c1
    }

    /// `-1 / Z`
    pub fn c2(&self) -> &F {
        &self.c2
    }

    /// `(true, sqrt(num / den))` if `num / den` is square, otherwise
    /// `(false, sqrt(Z * num / den))`.
    ///
    /// Both roots are always computed.
    ///
    /// # Errors
    /// [`Error::Arithmetic`] if `den` is zero.
    pub fn sqrt_ratio(&self, num: &F, den: &F) -> Result<(Choice, F)> {
        let ratio = Option::<F>::from(num.div(den)).ok_or(Error::Arithmetic)?;

        let root = ratio.sqrt();
        let is_square = root.is_some();
        let z_root = self.z.mul(&ratio).sqrt();

        let y = F::conditional_select(
            &z_root.unwrap_or(F::zero()),
            &root.unwrap_or(F::zero()),
            is_square,
        );
        Ok((is_square, y))
    }
}

impl<F: FieldArithmetic> MapToCurve<F> for SswuMapper<F> {
    /// Straight-line `map_to_curve_simple_swu`, see [section F.2 of RFC9380][F2].
    ///
    /// [F2]: https://www.rfc-editor.org/rfc/rfc9380.html#name-simplified-swu-method-2
    fn map_to_curve(&self, u: &F) -> Result<(F, F)> {
        let WeierstrassCurve { a, b } = self.curve;

        let tv1 = self.z.mul(&u.square()); // Z * u^2
        let tv2 = tv1.square().add(&tv1); // tv1^2 + tv1
        let tv3 = b.mul(&tv2.add(&F::one())); // B * (tv2 + 1)
        let tv4 = a.mul(&F::conditional_select(&self.z, &tv2.neg(), !tv2.is_zero()));

        let tv6 = tv4.square();
        let gx_num = tv3.square().add(&a.mul(&tv6)).mul(&tv3);
        let gx_den = tv6.mul(&tv4);
        let gx_num = gx_num.add(&b.mul(&gx_den));

        let x = tv1.mul(&tv3);
        let (is_gx1_square, y1) = self.sqrt_ratio(&gx_num, &gx_den)?;
        let y = tv1.mul(u).mul(&y1);

        let x = F::conditional_select(&x, &tv3, is_gx1_square);
        let y = F::conditional_select(&y, &y1, is_gx1_square);

        let same_sign = !(u.sgn0() ^ y.sgn0());
        let y = F::conditional_select(&y.neg(), &y, same_sign);

        let x = Option::<F>::from(x.div(&tv4)).ok_or(Error::Arithmetic)?;
        Ok((x, y))
    }
}

/// Simplified SWU onto an isogenous curve followed by the isogeny, for
/// target curves with `A == 0` or `B == 0`.
#[derive(Clone, Copy, Debug)]
pub struct IsogenyAdapter<F, I> {
    inner: SswuMapper<F>,
    isogeny: I,
}

impl<F: FieldArithmetic, I: Isogeny<F>> IsogenyAdapter<F, I> {
    /// Create a mapper onto the domain of `isogeny` with the non-square `z`.
    ///
    /// # Errors
    /// See [`SswuMapper::new`], applied to [`Isogeny::domain`].
    pub fn new(isogeny: I, z: F) -> Result<Self> {
        let inner = SswuMapper::new(isogeny.domain(), z)?;
        Ok(Self { inner, isogeny })
    }

    /// The mapper onto the isogenous curve.
    pub fn inner(&self) -> &SswuMapper<F> {
        &self.inner
    }

    /// The isogeny onto the target curve.
    pub fn isogeny(&self) -> &I {
        &self.isogeny
    }
}

impl<F: FieldArithmetic, I: Isogeny<F>> MapToCurve<F> for IsogenyAdapter<F, I> {
    fn map_to_curve(&self, u: &F) -> Result<(F, F)> {
        let (x, y) = self.inner.map_to_curve(u)?;
        self.isogeny.push(&x, &y)
    }
}

/// The Simplified SWU map for a target curve, direct or through an isogeny.
#[derive(Clone, Copy, Debug)]
pub enum Sswu<F, I> {
    /// The target curve has `A * B != 0`.
    Direct(SswuMapper<F>),
    /// The target curve is reached through an isogeny.
    Isogenous(IsogenyAdapter<F, I>),
}

impl<F: FieldArithmetic, I: Isogeny<F>> Sswu<F, I> {
    /// Map directly onto `curve`.
    ///
    /// # Errors
    /// See [`SswuMapper::new`].
    pub fn new(curve: WeierstrassCurve<F>, z: F) -> Result<Self> {
        SswuMapper::new(curve, z).map(Self::Direct)
    }

    /// Map onto `curve`, through the isogeny returned by `isogeny` if `curve`
    /// has `A == 0` or `B == 0`.
    ///
    /// `isogeny` is only called for such curves, and `z` is then the
    /// constant for the domain of the isogeny.
    ///
    /// # Errors
    /// See [`SswuMapper::new`]. A degenerate curve without an isogeny fails
    /// with [`ConfigError::ZeroA`] or [`ConfigError::ZeroB`].
    pub fn with_isogeny(
        curve: WeierstrassCurve<F>,
        z: F,
        isogeny: impl FnOnce() -> Option<I>,
    ) -> Result<Self> {
        if bool::from(curve.is_degenerate()) {
            if let Some(isogeny) = isogeny() {
                debug!("degenerate curve, mapping through an isogeny");
                return IsogenyAdapter::new(isogeny, z).map(Self::Isogenous);
            }
        }
        Self::new(curve, z)
    }

    /// Is the map going through an isogeny?
    pub fn is_isogenous(&self) -> bool {
        matches!(self, Self::Isogenous(_))
    }
}

impl<F: FieldArithmetic, I: Isogeny<F>> MapToCurve<F> for Sswu<F, I> {
    fn map_to_curve(&self, u: &F) -> Result<(F, F)> {
        match self {
            Self::Direct(mapper) => mapper.map_to_curve(u),
            Self::Isogenous(adapter) => adapter.map_to_curve(u),
        }
    }
}

#[cfg(all(test, feature = "p256"))]
mod tests {
    use super::{MapToCurve, Sswu, SswuMapper};
    use crate::{ConfigError, Error, NoIsogeny, WeierstrassCurve};
    use ff::{Field, PrimeField};
    use hex_literal::hex;
    use p256::FieldElement;
    use proptest::{num::u64::ANY, prelude::ProptestConfig, proptest};

    fn fe(value: u64) -> FieldElement {
        <FieldElement as crate::FieldArithmetic>::from_u64(value)
    }

    fn minus(value: u64) -> FieldElement {
        -fe(value)
    }

    fn p256() -> WeierstrassCurve<FieldElement> {
        let b = FieldElement::from_repr(
            hex!("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b").into(),
        )
        .unwrap();
        WeierstrassCurve::new(minus(3), b)
    }

    #[test]
    fn constants() {
        let curve = p256();
        let mapper = SswuMapper::new(curve, minus(10)).unwrap();
        assert_eq!(*mapper.c1() * curve.a, -curve.b);
        assert_eq!(*mapper.c2() * minus(10), minus(1));
    }

    #[test]
    fn preconditions() {
        let curve = p256();
        let err = |curve, z| SswuMapper::new(curve, z).unwrap_err();

        assert_eq!(
            err(WeierstrassCurve::new(FieldElement::ZERO, curve.b), minus(10)),
            Error::Configuration(ConfigError::ZeroA)
        );
        assert_eq!(
            err(WeierstrassCurve::new(curve.a, FieldElement::ZERO), minus(10)),
            Error::Configuration(ConfigError::ZeroB)
        );
        assert_eq!(err(curve, fe(4)), Error::Configuration(ConfigError::SquareZ));
        assert_eq!(err(curve, FieldElement::ZERO), Error::Configuration(ConfigError::SquareZ));
        // p = 3 mod 4, so -1 is not a square
        assert_eq!(err(curve, minus(1)), Error::Configuration(ConfigError::MinusOneZ));
    }

    #[test]
    fn non_square_gx() {
        let curve = p256();
        let mut rejected = 0;
        for n in 2..100 {
            let z = minus(n);
            match SswuMapper::new(curve, z) {
                Ok(_) => {
                    let x = curve.b * (z * curve.a).invert().unwrap();
                    assert!(bool::from(curve.evaluate_rhs(&x).sqrt().is_some()));
                }
                Err(Error::Configuration(ConfigError::SquareZ)) => {
                    assert!(bool::from(z.sqrt().is_some()));
                }
                Err(Error::Configuration(ConfigError::NonSquareGx)) => {
                    let x = curve.b * (z * curve.a).invert().unwrap();
                    assert!(bool::from(curve.evaluate_rhs(&x).sqrt().is_none()));
                    rejected += 1;
                }
                Err(err) => panic!("unexpected error {err}"),
            }
        }
        assert!(rejected > 0);
    }

    #[test]
    fn zero_maps_to_exceptional_point() {
        let curve = p256();
        let mapper = SswuMapper::new(curve, minus(10)).unwrap();
        let (x, y) = mapper.map_to_curve(&FieldElement::ZERO).unwrap();
        assert_eq!(x, *mapper.c1() * mapper.c2());
        assert!(bool::from(curve.is_on_curve(&x, &y)));
        assert!(!bool::from(y.is_odd()));
    }

    #[test]
    fn sign_and_curve_membership() {
        let curve = p256();
        let mapper = SswuMapper::new(curve, minus(10)).unwrap();

        proptest!(ProptestConfig::with_cases(64), |(a in ANY, b in ANY, c in ANY)| {
            let u = fe(a) * fe(b).square() + fe(c);
            let (x, y) = mapper.map_to_curve(&u).unwrap();
            assert!(bool::from(curve.is_on_curve(&x, &y)));
            assert_eq!(bool::from(u.is_odd()), bool::from(y.is_odd()));

            let (x_neg, y_neg) = mapper.map_to_curve(&-u).unwrap();
            assert_eq!(x_neg, x);
            assert_eq!(y_neg, -y);
        });
    }

    #[test]
    fn sqrt_ratio() {
        let mapper = SswuMapper::new(p256(), minus(10)).unwrap();

        let (is_square, root) = mapper.sqrt_ratio(&fe(18), &fe(2)).unwrap();
        assert!(bool::from(is_square));
        assert_eq!(root.square(), fe(9));

        // -1 is not a square, Z * -1 = 10 is
        let (is_square, root) = mapper.sqrt_ratio(&minus(2), &fe(2)).unwrap();
        assert!(!bool::from(is_square));
        assert_eq!(root.square(), fe(10));

        assert!(matches!(
            mapper.sqrt_ratio(&fe(1), &FieldElement::ZERO),
            Err(Error::Arithmetic)
        ));
    }

    #[test]
    fn selection() {
        let curve = p256();
        let direct = Sswu::<_, NoIsogeny>::with_isogeny(curve, minus(10), || {
            panic!("not degenerate")
        })
        .unwrap();
        assert!(!direct.is_isogenous());

        let degenerate = WeierstrassCurve::new(FieldElement::ZERO, curve.b);
        assert_eq!(
            Sswu::<_, NoIsogeny>::with_isogeny(degenerate, minus(10), || None).unwrap_err(),
            Error::Configuration(ConfigError::ZeroA)
        );
    }
}
