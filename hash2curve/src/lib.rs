#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::unwrap_used,
    clippy::mod_module_files,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused,
    unused_attributes,
    unused_imports,
    unused_mut,
    unused_must_use
)]

mod curve;
mod error;
mod field;
mod group_digest;
mod hash2field;
mod isogeny;
mod map2curve;

pub mod suites;

pub use curve::*;
pub use error::*;
pub use field::{FieldArithmetic, reduce_be_bytes};
pub use group_digest::*;
pub use hash2field::*;
pub use isogeny::*;
pub use map2curve::*;

/// Computes the hash to curve routine.
/// See [`HashToCurve`] for more details.
///
/// # Errors
///
/// When the chosen [`ExpandMsg`] implementation returns an error. See
/// [`ExpandMsgXmdError`] for examples.
pub fn hash_from_bytes<C, X>(suite: &Suite<'_, C, X>, msg: &[&[u8]]) -> Result<C::Point>
where
    C: Curve,
    X: ExpandMsg,
{
    suite.hash_to_curve().hash_slices(msg)
}

/// Computes the encode to curve routine.
/// See [`EncodeToCurve`] for more details.
///
/// # Errors
///
/// When the chosen [`ExpandMsg`] implementation returns an error. See
/// [`ExpandMsgXmdError`] for examples.
pub fn encode_from_bytes<C, X>(suite: &Suite<'_, C, X>, msg: &[&[u8]]) -> Result<C::Point>
where
    C: Curve,
    X: ExpandMsg,
{
    suite.encode_to_curve().hash_slices(msg)
}

/// Computes the hash to field routine according to
/// <https://www.rfc-editor.org/rfc/rfc9380.html#section-5-4>
/// and returns a scalar.
///
/// For the `expand_message` call, `len_in_bytes = <S as FromOkm>::Length`.
///
/// # Errors
///
/// When the chosen [`ExpandMsg`] implementation returns an error. See
/// [`ExpandMsgXmdError`] for examples.
pub fn hash_to_scalar<X, S>(msg: &[&[u8]], dst: &Dst<'_>) -> Result<S>
where
    X: ExpandMsg,
    S: FromOkm,
{
    let [u] = hash_to_field::<1, X, S>(msg, dst)?;
    Ok(u)
}
