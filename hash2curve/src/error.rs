//! Error types.

use core::fmt;

use crate::ExpandMsgXmdError;

/// Error type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The ciphersuite or mapper configuration is unusable.
    Configuration(ConfigError),
    /// `expand_message` rejected its inputs.
    Expand(ExpandMsgXmdError),
    /// A field or curve operation failed, e.g. inverting zero or building a
    /// point which is not on the curve.
    Arithmetic,
}

/// Reasons a mapper or ciphersuite cannot be constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The curve coefficient `A` is zero.
    ZeroA,
    /// The curve coefficient `B` is zero.
    ZeroB,
    /// `Z` is a square in the field.
    SquareZ,
    /// `Z == -1`.
    MinusOneZ,
    /// `g(B / (Z * A))` is not a square.
    NonSquareGx,
    /// A curve or isogeny constant is not a canonical field element.
    InvalidConstant,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(err) => write!(f, "invalid configuration: {err}"),
            Self::Expand(err) => write!(f, "expand_message failed: {err}"),
            Self::Arithmetic => f.write_str("field or curve arithmetic error"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ZeroA => "curve coefficient A is zero",
            Self::ZeroB => "curve coefficient B is zero",
            Self::SquareZ => "Z is a square",
            Self::MinusOneZ => "Z is -1",
            Self::NonSquareGx => "g(B / (Z * A)) is not a square",
            Self::InvalidConstant => "constant is not a canonical field element",
        })
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Expand(err) => Some(err),
            _ => None,
        }
    }
}

impl core::error::Error for ConfigError {}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Configuration(err)
    }
}

impl From<ExpandMsgXmdError> for Error {
    fn from(err: ExpandMsgXmdError) -> Self {
        Self::Expand(err)
    }
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
