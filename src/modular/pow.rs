use crate::modular::Modular;
use core::ops::Shr;
use num_integer::Integer;

/// Right-to-left binary exponentiation: `(multiplier * base^exponent) mod modulus`.
///
/// The exponent is consumed one bit per round. A set bit folds the current
/// power into the accumulator, and every round squares the power. Both go
/// through [`Modular::mod_mul`], so intermediates never exceed the modulus.
pub fn square_and_multiply<T, E>(modulus: &T, base: T, exponent: E, multiplier: T) -> T
where
    T: Modular + Clone,
    E: Integer + Shr<usize, Output = E>,
{
    let mut acc = modulus.mod_mul(multiplier, T::one());
    let mut base = base;
    let mut exponent = exponent;

    while !exponent.is_zero() {
        if exponent.is_odd() {
            acc = modulus.mod_mul(acc, base.clone());
        }
        exponent = exponent >> 1;
        if !exponent.is_zero() {
            base = modulus.mod_mul(base.clone(), base);
        }
    }

    acc
}
