use crate::error::Result;
use crate::modular::{extended_euclid, square_and_multiply, Modular};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::Signed;

impl Modular for BigUint {
    fn mod_mul(&self, a: Self, b: Self) -> Self {
        a * b % self
    }

    fn mod_pow_with(&self, base: Self, exponent: Self, multiplier: Self) -> Result<Self> {
        Ok(square_and_multiply(self, base, exponent, multiplier))
    }

    fn mod_inverse(&self, num: Self) -> Result<Self> {
        let inverse = extended_euclid(BigInt::from(self.clone()), BigInt::from(num))?;
        Ok(inverse.into_parts().1)
    }
}

impl Modular for BigInt {
    fn mod_mul(&self, a: Self, b: Self) -> Self {
        (a * b).mod_floor(&self.abs())
    }

    fn mod_pow_with(&self, base: Self, exponent: Self, multiplier: Self) -> Result<Self> {
        let base = if exponent.is_negative() {
            self.mod_inverse(base)?
        } else {
            base
        };
        let (_, magnitude) = exponent.into_parts();
        Ok(square_and_multiply(self, base, magnitude, multiplier))
    }

    fn mod_inverse(&self, num: Self) -> Result<Self> {
        extended_euclid(self.abs(), num)
    }
}
