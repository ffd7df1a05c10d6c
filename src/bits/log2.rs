use crate::bits::{Log2, PowerOfTwo, SwarWord};
use crate::error::{NumericError, Result};
use num_traits::PrimInt;
use tracing::debug;

#[inline]
fn is_pow2<T: PrimInt>(value: T) -> bool {
    value > T::zero() && value & (value - T::one()) == T::zero()
}

fn non_positive<T: core::fmt::Display>(value: T) -> NumericError {
    debug!(%value, "log2 of a non-positive integer");
    NumericError::NonPositive
}

/// (W - 1) - clz(v)
fn floor_of<W: SwarWord>(value: W) -> Result<i32> {
    if value.is_zero() {
        return Err(non_positive(value));
    }
    Ok((W::N_BITS - 1 - value.leading_zeros()) as i32)
}

/// W - clz(v - 1), with 1 handled up front so that v - 1 is never zero
/// for a valid input.
fn ceiling_of<W: SwarWord>(value: W) -> Result<i32> {
    if value == W::one() {
        return Ok(0);
    }
    if value.is_zero() {
        return Err(non_positive(value));
    }
    Ok((W::N_BITS - (value - W::one()).leading_zeros()) as i32)
}

macro_rules! impl_integer_log2 {
    ($($u:ty => $s:ty),*) => {$(
        impl PowerOfTwo for $u {
            #[inline]
            fn is_pow2(self) -> bool {
                is_pow2(self)
            }
        }

        impl Log2 for $u {
            #[inline]
            fn log2_floor(self) -> Result<i32> {
                floor_of(self)
            }

            #[inline]
            fn log2_ceiling(self) -> Result<i32> {
                ceiling_of(self)
            }
        }

        impl PowerOfTwo for $s {
            #[inline]
            fn is_pow2(self) -> bool {
                is_pow2(self)
            }
        }

        // A positive signed value has the same bit pattern as its unsigned
        // reinterpretation, so the unsigned kernels apply once the sign is checked.
        impl Log2 for $s {
            fn log2_floor(self) -> Result<i32> {
                if self <= 0 {
                    return Err(non_positive(self));
                }
                floor_of(self as $u)
            }

            fn log2_ceiling(self) -> Result<i32> {
                if self <= 0 {
                    return Err(non_positive(self));
                }
                ceiling_of(self as $u)
            }
        }
    )*};
}

impl_integer_log2!(u8 => i8, u16 => i16, u32 => i32, u64 => i64, u128 => i128);
