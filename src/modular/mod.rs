//! Modular multiplication, exponentiation and inversion.
//!
//! Every method borrows the modulus as its receiver: `m.mod_mul(a, b)` is
//! `(a * b) mod m`. Results are always in `[0, |m|)`, signed operands
//! included. A zero modulus panics the same way integer division by zero does.

mod bigint;
mod inv;
mod pow;
mod wide;

pub use inv::extended_euclid;
pub use pow::square_and_multiply;

use crate::error::Result;
use num_traits::One;

pub trait Modular: Sized + One {
    /// `(a * b) mod self`, computed in an intermediate twice as wide as the
    /// operands so the product never overflows.
    fn mod_mul(&self, a: Self, b: Self) -> Self;

    /// `(multiplier * base^exponent) mod self`.
    ///
    /// A negative exponent raises the modular inverse of `base` instead, and
    /// fails with [`NumericError::NoInverse`](crate::NumericError::NoInverse)
    /// when `base` and the modulus are not coprime. Non-negative exponents
    /// never fail.
    fn mod_pow_with(&self, base: Self, exponent: Self, multiplier: Self) -> Result<Self>;

    /// `base^exponent mod self`
    #[inline]
    fn mod_pow(&self, base: Self, exponent: Self) -> Result<Self> {
        self.mod_pow_with(base, exponent, Self::one())
    }

    /// `x` such that `(num * x) mod self == 1`.
    fn mod_inverse(&self, num: Self) -> Result<Self>;
}

/// Widths whose double-width product is still a primitive.
/// `$c` is a signed type that holds the Bézout coefficients.
macro_rules! impl_modular_unsigned {
    ($($t:ty => $wide:ty, $c:ty);*) => {$(
        impl Modular for $t {
            #[inline]
            fn mod_mul(&self, a: Self, b: Self) -> Self {
                ((a as $wide * b as $wide) % *self as $wide) as $t
            }

            fn mod_pow_with(&self, base: Self, exponent: Self, multiplier: Self) -> Result<Self> {
                Ok(square_and_multiply(self, base, exponent, multiplier))
            }

            fn mod_inverse(&self, num: Self) -> Result<Self> {
                extended_euclid(*self as $c, num as $c).map(|x| x as $t)
            }
        }
    )*};
}

macro_rules! impl_modular_signed {
    ($($t:ty => $wide:ty);*) => {$(
        impl Modular for $t {
            #[inline]
            fn mod_mul(&self, a: Self, b: Self) -> Self {
                (a as $wide * b as $wide).rem_euclid(*self as $wide) as $t
            }

            fn mod_pow_with(&self, base: Self, exponent: Self, multiplier: Self) -> Result<Self> {
                let base = if exponent < 0 {
                    self.mod_inverse(base)?
                } else {
                    base
                };
                // unsigned_abs keeps MIN representable
                Ok(square_and_multiply(self, base, exponent.unsigned_abs(), multiplier))
            }

            fn mod_inverse(&self, num: Self) -> Result<Self> {
                extended_euclid((*self as $wide).abs(), num as $wide).map(|x| x as $t)
            }
        }
    )*};
}

impl_modular_unsigned!(u8 => u16, i16; u16 => u32, i32; u32 => u64, i64; u64 => u128, i128);
impl_modular_signed!(i8 => i16; i16 => i32; i32 => i64; i64 => i128);

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::NumericError;

    #[test]
    fn test_mod_mul_no_overflow() {
        assert_eq!(251u8.mod_mul(250, 249), ((250u32 * 249) % 251) as u8);
        assert_eq!(u64::MAX.mod_mul(u64::MAX - 1, u64::MAX - 1), 1);
        assert_eq!(
            4_294_967_291u32.mod_mul(u32::MAX, u32::MAX),
            ((u32::MAX as u64 * u32::MAX as u64) % 4_294_967_291) as u32
        );
    }

    #[test]
    fn test_mod_mul_signed() {
        assert_eq!(7i32.mod_mul(-3, 2), 1);
        assert_eq!((-7i32).mod_mul(-3, 2), 1);
        assert_eq!(i8::MIN.mod_mul(i8::MIN, i8::MIN), 0);
        assert_eq!(127i8.mod_mul(-128, 3), 124);
    }

    #[test]
    fn test_mod_pow() {
        assert_eq!(17u32.mod_pow(13, 0), Ok(1));
        assert_eq!(1u32.mod_pow(13, 0), Ok(0));
        assert_eq!(1000u16.mod_pow(3, 7), Ok(187));
        assert_eq!(17u8.mod_pow_with(2, 4, 3), Ok(14));
        assert_eq!(17i32.mod_pow(13, -1), 17i32.mod_inverse(13));
        assert_eq!(17i32.mod_pow(13, -2), Ok(17i32.mod_mul(4, 4)));
        assert_eq!(101i8.mod_pow(3, i8::MIN), 101i8.mod_pow(34, 127).map(|x| 101i8.mod_mul(x, 34)));
    }

    #[test]
    fn test_mod_inverse() {
        assert_eq!(7u32.mod_inverse(13), Ok(6));
        assert_eq!(17u8.mod_inverse(13), Ok(4));
        assert_eq!(1u64.mod_inverse(5), Ok(0));
        assert_eq!(10u32.mod_inverse(4), Err(NumericError::NoInverse));
        assert_eq!(10u32.mod_inverse(0), Err(NumericError::NoInverse));
        assert_eq!(7i16.mod_inverse(-1), Ok(6));
        assert_eq!((-7i16).mod_inverse(3), Ok(5));
        assert_eq!(u64::MAX.mod_inverse(u64::MAX - 1), Ok(u64::MAX - 1));
    }
}
