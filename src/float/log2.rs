use crate::bits::{Log2, PowerOfTwo};
use crate::error::{NumericError, Result};
use crate::float::{FloatClass, FloatParts, Ieee754};
use tracing::debug;

fn is_pow2<F: Ieee754>(value: F) -> bool {
    let parts = FloatParts::decode(value);
    if parts.negative {
        return false;
    }
    match parts.class {
        // no implicit leading one, the fraction bits are the whole significand
        FloatClass::Subnormal => parts.mantissa.is_pow2(),
        FloatClass::Normal => parts.mantissa == 0,
        FloatClass::Zero | FloatClass::Infinite | FloatClass::Nan => false,
    }
}

/// Decodes `value` and rejects everything outside (0, +inf).
fn positive_finite<F: Ieee754>(value: F) -> Result<FloatParts> {
    let parts = FloatParts::decode(value);
    if parts.negative || parts.class.is_zero() {
        debug!(bits = parts.bits, class = %parts.class, "log2 of a non-positive float");
        return Err(NumericError::NonPositive);
    }
    if parts.class.is_infinite() || parts.class.is_nan() {
        debug!(bits = parts.bits, class = %parts.class, "log2 of a non-finite float");
        return Err(NumericError::NonFinite(parts.class));
    }
    Ok(parts)
}

fn log2_floor<F: Ieee754>(value: F) -> Result<i32> {
    let parts = positive_finite(value)?;
    if parts.class.is_subnormal() {
        return Ok(parts.mantissa.log2_floor()? - F::SUBNORMAL_SHIFT);
    }
    Ok(parts.exponent as i32 - F::BIAS)
}

fn log2_ceiling<F: Ieee754>(value: F) -> Result<i32> {
    let parts = positive_finite(value)?;
    if parts.class.is_subnormal() {
        return Ok(parts.mantissa.log2_ceiling()? - F::SUBNORMAL_SHIFT);
    }
    let fraction = (parts.mantissa != 0) as i32;
    Ok(parts.exponent as i32 - F::BIAS + fraction)
}

macro_rules! impl_float_log2 {
    ($($f:ty),*) => {$(
        impl PowerOfTwo for $f {
            #[inline]
            fn is_pow2(self) -> bool {
                is_pow2(self)
            }
        }

        impl Log2 for $f {
            #[inline]
            fn log2_floor(self) -> Result<i32> {
                log2_floor(self)
            }

            #[inline]
            fn log2_ceiling(self) -> Result<i32> {
                log2_ceiling(self)
            }
        }
    )*};
}

impl_float_log2!(f32, f64);

#[cfg(feature = "f16")]
impl_float_log2!(half::f16);
