use crate::error::{NumericError, Result};
use core::fmt::Display;
use core::mem;
use num_integer::Integer;
use num_traits::Signed;
use tracing::debug;

/// Modular inverse by the extended Euclidean algorithm.
///
/// `modulus` must be positive. `C` is a signed type wide enough to hold
/// both inputs, since the Bézout coefficient swings negative between rounds.
///
/// Input: m, n
/// Runs (r, r') from (m, n mod m) and (t, t') from (0, 1), each step
/// replacing (x, x') by (x', x - q * x') with q = r / r'. When r' reaches
/// zero, r is gcd(m, n) and t is the inverse up to a multiple of m.
pub fn extended_euclid<C>(modulus: C, num: C) -> Result<C>
where
    C: Clone + Integer + Signed + Display,
{
    let mut r = modulus.clone();
    let mut next_r = num.mod_floor(&modulus);
    let mut t = C::zero();
    let mut next_t = C::one();

    while !next_r.is_zero() {
        let q = r.div_floor(&next_r);

        let rem = r - q.clone() * next_r.clone();
        r = mem::replace(&mut next_r, rem);

        let coefficient = t - q * next_t.clone();
        t = mem::replace(&mut next_t, coefficient);
    }

    if r > C::one() {
        debug!(%modulus, %num, gcd = %r, "no modular inverse");
        return Err(NumericError::NoInverse);
    }
    if t.is_negative() {
        t = t + modulus;
    }
    Ok(t)
}

#[cfg(test)]
mod test {
    use super::*;
    use num_bigint::{BigInt, RandomBits};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_small() {
        assert_eq!(extended_euclid(7i64, 13), Ok(6));
        assert_eq!(extended_euclid(17i64, 13), Ok(4));
        assert_eq!(extended_euclid(17i64, -13), Ok(13));
        assert_eq!(extended_euclid(2i64, 1), Ok(1));
        assert_eq!(extended_euclid(1i64, 1), Ok(0));
        assert_eq!(extended_euclid(12i64, 8), Err(NumericError::NoInverse));
        assert_eq!(extended_euclid(12i64, 24), Err(NumericError::NoInverse));
    }

    #[test]
    fn test_exhaustive_u8_moduli() {
        for m in 1i16..=255 {
            for n in 0i16..=255 {
                let coprime = n.gcd(&m) == 1;
                match extended_euclid(m, n) {
                    Ok(x) => {
                        assert!(coprime);
                        assert!((0..m).contains(&x));
                        assert_eq!((n as i32 * x as i32).mod_floor(&(m as i32)), 1 % m as i32);
                    }
                    Err(e) => {
                        assert!(!coprime);
                        assert_eq!(e, NumericError::NoInverse);
                    }
                }
            }
        }
    }

    #[test]
    fn test_bigint() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);
        for _ in 0..50 {
            let m: BigInt = prng.sample::<BigInt, _>(RandomBits::new(256)).abs() + 2;
            let n: BigInt = prng.sample(RandomBits::new(512));
            match extended_euclid(m.clone(), n.clone()) {
                Ok(x) => {
                    assert!(!x.is_negative() && x < m);
                    assert_eq!((n * x).mod_floor(&m), BigInt::from(1));
                }
                Err(_) => assert!(n.gcd(&m) > BigInt::from(1)),
            }
        }
    }
}
