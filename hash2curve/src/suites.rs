//! Ciphersuites from [section 8 of RFC9380][suites].
//!
//! [suites]: https://www.rfc-editor.org/rfc/rfc9380.html#name-suites-for-hashing

#[cfg(feature = "p256")]
pub mod p256;
#[cfg(feature = "k256")]
pub mod secp256k1;
