//! Field arithmetic required by the mapping.

use core::fmt::Debug;

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// Arithmetic over a prime field, as needed by `hash_to_field` and the
/// Simplified SWU map.
///
/// Every returned element must be fully reduced, so that [`ConstantTimeEq`]
/// and [`FieldArithmetic::sgn0`] act on canonical values.
pub trait FieldArithmetic:
    Copy + Default + Debug + ConditionallySelectable + ConstantTimeEq
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Embed a small integer.
    fn from_u64(value: u64) -> Self;

    /// `self + rhs`
    fn add(&self, rhs: &Self) -> Self;

    /// `self - rhs`
    fn sub(&self, rhs: &Self) -> Self;

    /// `self * rhs`
    fn mul(&self, rhs: &Self) -> Self;

    /// `self^2`
    fn square(&self) -> Self;

    /// `-self`
    fn neg(&self) -> Self;

    /// Multiplicative inverse, none for zero.
    fn invert(&self) -> CtOption<Self>;

    /// A square root, none if `self` is not a quadratic residue.
    fn sqrt(&self) -> CtOption<Self>;

    /// Is this the additive identity?
    fn is_zero(&self) -> Choice;

    /// Is this a quadratic residue? Zero is a square.
    fn is_square(&self) -> Choice {
        self.sqrt().is_some()
    }

    /// The `sgn0` function of [section 4.1 of RFC9380][sgn0] for `m = 1`,
    /// i.e. the parity of the canonical integer representative.
    ///
    /// [sgn0]: https://www.rfc-editor.org/rfc/rfc9380.html#name-the-sgn0-function
    fn sgn0(&self) -> Choice;

    /// `self / rhs`, none if `rhs` is zero.
    fn div(&self, rhs: &Self) -> CtOption<Self> {
        rhs.invert().map(|inv| self.mul(&inv))
    }
}

/// Interpret `bytes` as a big-endian integer and reduce it into the field.
///
/// Works in 32-bit limbs so that every intermediate embedding stays far below
/// any cryptographic modulus. The number of field operations only depends on
/// `bytes.len()`.
pub fn reduce_be_bytes<F: FieldArithmetic>(bytes: &[u8]) -> F {
    let radix = F::from_u64(1 << 32);

    bytes.rchunks(4).rev().fold(F::zero(), |acc, chunk| {
        let mut limb = [0u8; 4];
        limb[4 - chunk.len()..].copy_from_slice(chunk);
        acc.mul(&radix).add(&F::from_u64(u32::from_be_bytes(limb).into()))
    })
}

/// Implement [`FieldArithmetic`] and [`FromOkm`](crate::FromOkm) for a type
/// implementing [`ff::PrimeField`] whose representation is always reduced.
#[cfg(any(feature = "p256", feature = "k256"))]
macro_rules! impl_field_arithmetic {
    ($fe:ty, $length:ty) => {
        impl $crate::FieldArithmetic for $fe {
            fn zero() -> Self {
                <$fe as ff::Field>::ZERO
            }

            fn one() -> Self {
                <$fe as ff::Field>::ONE
            }

            fn from_u64(value: u64) -> Self {
                <$fe as From<u64>>::from(value)
            }

            fn add(&self, rhs: &Self) -> Self {
                *self + *rhs
            }

            fn sub(&self, rhs: &Self) -> Self {
                *self - *rhs
            }

            fn mul(&self, rhs: &Self) -> Self {
                *self * *rhs
            }

            fn square(&self) -> Self {
                <$fe as ff::Field>::square(self)
            }

            fn neg(&self) -> Self {
                -*self
            }

            fn invert(&self) -> subtle::CtOption<Self> {
                <$fe as ff::Field>::invert(self)
            }

            fn sqrt(&self) -> subtle::CtOption<Self> {
                <$fe as ff::Field>::sqrt(self)
            }

            fn is_zero(&self) -> subtle::Choice {
                <$fe as ff::Field>::is_zero(self)
            }

            fn sgn0(&self) -> subtle::Choice {
                <$fe as ff::PrimeField>::is_odd(self)
            }
        }

        impl $crate::FromOkm for $fe {
            type Length = $length;

            fn from_okm(
                data: &elliptic_curve::generic_array::GenericArray<u8, Self::Length>,
            ) -> Self {
                $crate::reduce_be_bytes(data)
            }
        }
    };
}

#[cfg(any(feature = "p256", feature = "k256"))]
pub(crate) use impl_field_arithmetic;
