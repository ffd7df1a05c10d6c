//! 128-bit widths. No primitive is wide enough for their products or
//! Bézout coefficients, so both go through `num-bigint`.

use crate::error::Result;
use crate::modular::{extended_euclid, square_and_multiply, Modular};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::Signed;

/// Low 128 bits of `value`; callers only pass values already reduced below
/// a 128-bit modulus.
fn low_u128(value: &BigUint) -> u128 {
    value
        .to_u64_digits()
        .iter()
        .rev()
        .fold(0u128, |acc, &digit| (acc << 64) | digit as u128)
}

impl Modular for u128 {
    fn mod_mul(&self, a: Self, b: Self) -> Self {
        let product = BigUint::from(a) * BigUint::from(b);
        low_u128(&(product % BigUint::from(*self)))
    }

    fn mod_pow_with(&self, base: Self, exponent: Self, multiplier: Self) -> Result<Self> {
        Ok(square_and_multiply(self, base, exponent, multiplier))
    }

    fn mod_inverse(&self, num: Self) -> Result<Self> {
        let inverse = extended_euclid(BigInt::from(*self), BigInt::from(num))?;
        Ok(low_u128(inverse.magnitude()))
    }
}

impl Modular for i128 {
    fn mod_mul(&self, a: Self, b: Self) -> Self {
        let modulus = BigInt::from(*self).abs();
        let product = BigInt::from(a) * BigInt::from(b);
        // non-negative and below 2^127
        low_u128(product.mod_floor(&modulus).magnitude()) as i128
    }

    fn mod_pow_with(&self, base: Self, exponent: Self, multiplier: Self) -> Result<Self> {
        let base = if exponent < 0 {
            self.mod_inverse(base)?
        } else {
            base
        };
        Ok(square_and_multiply(self, base, exponent.unsigned_abs(), multiplier))
    }

    fn mod_inverse(&self, num: Self) -> Result<Self> {
        let inverse = extended_euclid(BigInt::from(*self).abs(), BigInt::from(num))?;
        Ok(low_u128(inverse.magnitude()) as i128)
    }
}
