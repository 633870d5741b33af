//! Traits for hashing to field elements.
//!
//! <https://www.rfc-editor.org/rfc/rfc9380.html>

mod expand_msg;

use core::marker::PhantomData;

pub use expand_msg::{xmd::*, *};

use elliptic_curve::generic_array::{ArrayLength, GenericArray, typenum::Unsigned};

use crate::{Error, Result};

/// The trait for helping to convert to a field element.
pub trait FromOkm {
    /// The number of bytes needed to convert to a field element, `m * L`.
    type Length: ArrayLength<u8>;

    /// The extension degree `m` of the field. `Length` must be a multiple of
    /// it.
    const EXTENSION_DEGREE: usize = 1;

    /// Convert `m` consecutive chunks of `L` bytes into a field element.
    fn from_okm(data: &GenericArray<u8, Self::Length>) -> Self;
}

/// Convert an arbitrary byte sequence into `N` field elements.
///
/// <https://www.rfc-editor.org/rfc/rfc9380.html#name-hash_to_field-implementatio>
///
/// `len_in_bytes = T::Length * N`
///
/// # Errors
/// See implementors of [`ExpandMsg`] for errors:
/// - [`ExpandMsgXmd`]
pub fn hash_to_field<const N: usize, X, T>(msg: &[&[u8]], dst: &Dst<'_>) -> Result<[T; N]>
where
    X: ExpandMsg,
    T: FromOkm,
{
    debug_assert!(
        T::EXTENSION_DEGREE > 0 && T::Length::USIZE % T::EXTENSION_DEGREE == 0,
        "Length is not a multiple of EXTENSION_DEGREE"
    );
    let len_in_bytes = T::Length::USIZE
        .checked_mul(N)
        .ok_or(Error::Expand(ExpandMsgXmdError::LengthTooLarge))?;
    let mut tmp = GenericArray::<u8, T::Length>::default();
    let mut expander = X::expand_message(msg, dst, len_in_bytes).map_err(Into::into)?;
    Ok(core::array::from_fn(|_| {
        expander.fill_bytes(&mut tmp);
        T::from_okm(&tmp)
    }))
}

/// `hash_to_field` bound to one domain separation tag.
pub struct FieldHasher<'a, T, X> {
    dst: Dst<'a>,
    _marker: PhantomData<(fn() -> T, X)>,
}

impl<'a, T, X> FieldHasher<'a, T, X>
where
    T: FromOkm,
    X: ExpandMsg,
{
    /// Create a hasher for `dst`.
    pub fn new(dst: Dst<'a>) -> Self {
        Self {
            dst,
            _marker: PhantomData,
        }
    }

    /// The domain separation tag.
    pub fn dst(&self) -> &Dst<'a> {
        &self.dst
    }

    /// Hash `msg` to a single element.
    ///
    /// # Errors
    /// See [`hash_to_field`].
    pub fn hash(&self, msg: &[u8]) -> Result<T> {
        let [u] = self.hash_to_field::<1>(&[msg])?;
        Ok(u)
    }

    /// Hash the concatenation of `msg` to `N` elements.
    ///
    /// # Errors
    /// See [`hash_to_field`].
    pub fn hash_to_field<const N: usize>(&self, msg: &[&[u8]]) -> Result<[T; N]> {
        hash_to_field::<N, X, T>(msg, &self.dst)
    }
}

impl<T, X> Clone for FieldHasher<'_, T, X> {
    fn clone(&self) -> Self {
        Self {
            dst: self.dst,
            _marker: PhantomData,
        }
    }
}

impl<T, X> core::fmt::Debug for FieldHasher<'_, T, X> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FieldHasher").field("dst", &self.dst).finish()
    }
}
