use crate::float::FloatClass;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NumericError {
    /// Logarithm of zero, a negative value or a value with the sign bit set.
    #[error("value must be positive non-zero")]
    NonPositive,
    /// Logarithm of an infinity or NaN.
    #[error("value must be positive finite number, got {0}")]
    NonFinite(FloatClass),
    /// The modulus and the value share a factor greater than one.
    #[error("no inverse exists")]
    NoInverse,
}

pub type Result<T> = core::result::Result<T, NumericError>;
