//! `expand_message` interface for `hash_to_field`.

pub(super) mod xmd;

use core::fmt;

use digest::Digest;

use xmd::ExpandMsgXmdError;

/// Salt when the DST is too long
const OVERSIZE_DST_SALT: &[u8] = b"H2C-OVERSIZE-DST-";
/// Maximum domain separation tag length
pub const MAX_DST_LEN: usize = 255;

/// Trait for types implementing expand_message interface for `hash_to_field`.
///
/// # Errors
/// See implementors of [`ExpandMsg`] for errors.
pub trait ExpandMsg {
    /// Type holding data for the [`Expander`].
    type Expander<'dst>: Expander + Sized;
    /// Error returned by [`ExpandMsg::expand_message`].
    type Error: core::error::Error + Into<crate::Error>;

    /// Expands `msg` to the required number of bytes.
    ///
    /// `msg` is processed as the concatenation of its slices. Returns an
    /// expander that can be used to call `fill_bytes` until enough bytes have
    /// been consumed.
    fn expand_message<'dst>(
        msg: &[&[u8]],
        dst: &'dst Dst<'dst>,
        len_in_bytes: usize,
    ) -> Result<Self::Expander<'dst>, Self::Error>;
}

/// Expander that, call `fill_bytes` until enough bytes have been consumed.
pub trait Expander {
    /// Fill the slice with the next expanded bytes.
    ///
    /// Once all `len_in_bytes` bytes have been produced the remainder of
    /// `okm` is left untouched.
    fn fill_bytes(&mut self, okm: &mut [u8]);

    /// Number of bytes which can still be read.
    fn remaining(&self) -> usize;
}

/// The domain separation tag.
///
/// Holds between 1 and [`MAX_DST_LEN`] bytes. Longer tags have to be reduced
/// first, see [`Dst::with_oversize`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Dst<'a>(Repr<'a>);

#[derive(Clone, Copy, PartialEq, Eq)]
enum Repr<'a> {
    /// <= 255
    Borrowed(&'a [u8]),
    /// > 255, replaced by `H("H2C-OVERSIZE-DST-" || DST)`
    Hashed { bytes: [u8; MAX_DST_LEN], len: u8 },
}

impl<'a> Dst<'a> {
    /// Validate a domain separation tag.
    ///
    /// # Errors
    /// - [`ExpandMsgXmdError::EmptyDst`] if `dst` is empty.
    /// - [`ExpandMsgXmdError::DstTooLong`] if `dst` is longer than 255 bytes.
    pub fn new(dst: &'a [u8]) -> Result<Self, ExpandMsgXmdError> {
        // https://www.rfc-editor.org/rfc/rfc9380.html#section-3.1-4.2
        if dst.is_empty() {
            Err(ExpandMsgXmdError::EmptyDst)
        } else if dst.len() > MAX_DST_LEN {
            Err(ExpandMsgXmdError::DstTooLong)
        } else {
            Ok(Self(Repr::Borrowed(dst)))
        }
    }

    /// Like [`Dst::new`], but tags longer than 255 bytes are reduced with
    /// `HashT` as described in [section 5.3.3 of RFC9380][dst].
    ///
    /// [dst]: https://www.rfc-editor.org/rfc/rfc9380.html#name-using-dsts-longer-than-255-
    ///
    /// # Errors
    /// - [`ExpandMsgXmdError::EmptyDst`] if `dst` is empty.
    /// - [`ExpandMsgXmdError::DstHash`] if the output of `HashT` is itself
    ///   longer than 255 bytes.
    pub fn with_oversize<HashT: Digest>(dst: &'a [u8]) -> Result<Self, ExpandMsgXmdError> {
        if dst.len() <= MAX_DST_LEN {
            return Self::new(dst);
        }

        let output_size = <HashT as Digest>::output_size();
        let len = u8::try_from(output_size).map_err(|_| ExpandMsgXmdError::DstHash)?;

        let mut hash = HashT::new();
        hash.update(OVERSIZE_DST_SALT);
        hash.update(dst);

        let mut bytes = [0u8; MAX_DST_LEN];
        bytes[..output_size].copy_from_slice(&hash.finalize());
        Ok(Self(Repr::Hashed { bytes, len }))
    }

    /// The tag bytes as they enter `DST_prime`.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.0 {
            Repr::Borrowed(dst) => dst,
            Repr::Hashed { bytes, len } => &bytes[..usize::from(*len)],
        }
    }

    /// `I2OSP(len(DST), 1)`.
    pub fn len(&self) -> u8 {
        match &self.0 {
            // Can't truncate because it's checked on creation.
            Repr::Borrowed(dst) => dst.len() as u8,
            Repr::Hashed { len, .. } => *len,
        }
    }

    /// Always `false`: empty tags are rejected on creation.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Absorb `DST_prime = DST || I2OSP(len(DST), 1)` into `hash`.
    pub(crate) fn update_hash<HashT: Digest>(&self, hash: &mut HashT) {
        hash.update(self.as_bytes());
        hash.update([self.len()]);
    }
}

impl fmt::Debug for Dst<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.0 {
            Repr::Borrowed(_) => "Borrowed",
            Repr::Hashed { .. } => "Hashed",
        };
        f.debug_struct("Dst")
            .field("kind", &kind)
            .field("bytes", &self.as_bytes())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{Dst, ExpandMsgXmdError, MAX_DST_LEN};
    use sha2::{Sha256, Sha512};

    #[test]
    fn dst_bounds() {
        assert_eq!(Dst::new(b""), Err(ExpandMsgXmdError::EmptyDst));
        assert_eq!(
            Dst::new(&[0x42; MAX_DST_LEN + 1]),
            Err(ExpandMsgXmdError::DstTooLong)
        );

        let dst = Dst::new(&[0x42; MAX_DST_LEN]).unwrap();
        assert_eq!(dst.len(), 255);
        assert_eq!(dst.as_bytes(), &[0x42; MAX_DST_LEN][..]);
    }

    #[test]
    fn short_dst_is_not_hashed() {
        let dst = Dst::with_oversize::<Sha256>(b"QUUX-V01-CS02").unwrap();
        assert_eq!(dst, Dst::new(b"QUUX-V01-CS02").unwrap());
    }

    #[test]
    fn oversize_dst_is_hashed() {
        let long = [b'1'; 300];

        let dst = Dst::with_oversize::<Sha256>(&long).unwrap();
        assert_eq!(dst.len(), 32);

        let dst = Dst::with_oversize::<Sha512>(&long).unwrap();
        assert_eq!(dst.len(), 64);
        assert_eq!(Dst::with_oversize::<Sha512>(b""), Err(ExpandMsgXmdError::EmptyDst));
    }
}
