//! `expand_message_xmd` based on a hash function.

use core::{fmt, marker::PhantomData};

use digest::{Digest, Output, crypto_common::BlockSizeUser, generic_array::GenericArray};

use super::{Dst, ExpandMsg, Expander};

/// Implements `expand_message_xmd` as described in [section 5.3.1 of RFC9380][xmd].
///
/// # Errors
/// - `len_in_bytes == 0`
/// - `len_in_bytes > u16::MAX`
/// - `len_in_bytes > 255 * HashT::OutputSize`
///
/// Domain separation tag problems are caught earlier, when building the
/// [`Dst`].
///
/// [xmd]: https://www.rfc-editor.org/rfc/rfc9380.html#name-expand_message_xmd
#[derive(Debug)]
pub struct ExpandMsgXmd<HashT>(PhantomData<HashT>);

/// Error type for [`ExpandMsgXmd`] and [`Dst`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpandMsgXmdError {
    /// The domain separation tag is empty.
    EmptyDst,
    /// The domain separation tag is longer than 255 bytes.
    DstTooLong,
    /// An oversized domain separation tag can't be reduced with a hash whose
    /// output is longer than 255 bytes.
    DstHash,
    /// `len_in_bytes` is zero.
    ZeroLength,
    /// `len_in_bytes` exceeds `u16::MAX`.
    LengthTooLarge,
    /// More than 255 hash blocks would be required.
    TooManyBlocks,
}

impl fmt::Display for ExpandMsgXmdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::EmptyDst => "the domain separation tag must not be empty",
            Self::DstTooLong => "the domain separation tag must be at most 255 bytes",
            Self::DstHash => "the hash output is too long to reduce an oversized DST",
            Self::ZeroLength => "at least one byte must be requested",
            Self::LengthTooLarge => "at most 65535 bytes can be requested",
            Self::TooManyBlocks => "at most 255 hash blocks can be produced",
        })
    }
}

impl core::error::Error for ExpandMsgXmdError {}

impl<HashT> ExpandMsg for ExpandMsgXmd<HashT>
where
    HashT: Digest + BlockSizeUser,
{
    type Expander<'dst> = ExpanderXmd<'dst, HashT>;
    type Error = ExpandMsgXmdError;

    fn expand_message<'dst>(
        msg: &[&[u8]],
        dst: &'dst Dst<'dst>,
        len_in_bytes: usize,
    ) -> Result<Self::Expander<'dst>, Self::Error> {
        if len_in_bytes == 0 {
            return Err(ExpandMsgXmdError::ZeroLength);
        }
        let len_in_bytes_u16 =
            u16::try_from(len_in_bytes).map_err(|_| ExpandMsgXmdError::LengthTooLarge)?;

        let b_in_bytes = <HashT as Digest>::output_size();
        let ell = u8::try_from(len_in_bytes.div_ceil(b_in_bytes))
            .map_err(|_| ExpandMsgXmdError::TooManyBlocks)?;

        let b_0 = {
            let mut hash = HashT::new();
            hash.update(GenericArray::<u8, HashT::BlockSize>::default());
            for slice in msg {
                hash.update(slice);
            }
            hash.update(len_in_bytes_u16.to_be_bytes());
            hash.update([0]);
            dst.update_hash(&mut hash);
            hash.finalize()
        };

        let b_vals = {
            let mut hash = HashT::new();
            hash.update(&b_0);
            hash.update([1u8]);
            dst.update_hash(&mut hash);
            hash.finalize()
        };

        Ok(ExpanderXmd {
            b_0,
            b_vals,
            dst,
            index: 1,
            offset: 0,
            ell,
            remaining: len_in_bytes,
        })
    }
}

/// [`Expander`] type for [`ExpandMsgXmd`].
pub struct ExpanderXmd<'a, HashT>
where
    HashT: Digest + BlockSizeUser,
{
    b_0: Output<HashT>,
    b_vals: Output<HashT>,
    dst: &'a Dst<'a>,
    index: u8,
    offset: usize,
    ell: u8,
    remaining: usize,
}

impl<HashT> ExpanderXmd<'_, HashT>
where
    HashT: Digest + BlockSizeUser,
{
    /// Compute `b_(i + 1) = H(strxor(b_0, b_i) || I2OSP(i + 1, 1) || DST_prime)`.
    fn next(&mut self) -> bool {
        if self.index < self.ell {
            self.index += 1;
            self.offset = 0;
            // b_0 XOR b_(idx - 1)
            let mut tmp = Output::<HashT>::default();
            self.b_0
                .iter()
                .zip(&self.b_vals[..])
                .enumerate()
                .for_each(|(j, (b0val, bi1val))| tmp[j] = b0val ^ bi1val);
            let mut b_vals = HashT::new();
            b_vals.update(tmp);
            b_vals.update([self.index]);
            self.dst.update_hash(&mut b_vals);
            self.b_vals = b_vals.finalize();
            true
        } else {
            false
        }
    }
}

impl<HashT> Expander for ExpanderXmd<'_, HashT>
where
    HashT: Digest + BlockSizeUser,
{
    fn fill_bytes(&mut self, okm: &mut [u8]) {
        for b in okm {
            if self.remaining == 0 {
                return;
            }
            if self.offset == self.b_vals.len() && !self.next() {
                return;
            }
            *b = self.b_vals[self.offset];
            self.offset += 1;
            self.remaining -= 1;
        }
    }

    fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<HashT> fmt::Debug for ExpanderXmd<'_, HashT>
where
    HashT: Digest + BlockSizeUser,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpanderXmd")
            .field("index", &self.index)
            .field("ell", &self.ell)
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}
