//! IEEE-754 binary16/32/64 decomposition.
//!
//! Values are always taken apart through their storage bits (`to_bits`),
//! never through numeric casts, so subnormals, signed zeros, infinities and
//! NaN payloads are seen exactly as encoded.

mod log2;

use strum_macros::{Display, EnumIs, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIs, EnumIter)]
pub enum FloatClass {
    #[strum(serialize = "zero")]
    Zero,
    #[strum(serialize = "subnormal")]
    Subnormal,
    #[strum(serialize = "normal")]
    Normal,
    #[strum(serialize = "infinity")]
    Infinite,
    #[strum(serialize = "NaN")]
    Nan,
}

pub trait Ieee754: Copy {
    const MANTISSA_BITS: u32;
    const EXPONENT_BITS: u32;

    const BIAS: i32 = (1 << (Self::EXPONENT_BITS - 1)) - 1;
    const EXPONENT_MAX: u32 = (1 << Self::EXPONENT_BITS) - 1;
    const MANTISSA_MASK: u64 = (1 << Self::MANTISSA_BITS) - 1;
    const SIGN_SHIFT: u32 = Self::MANTISSA_BITS + Self::EXPONENT_BITS;

    /// A subnormal is `mantissa * 2^-SUBNORMAL_SHIFT`.
    const SUBNORMAL_SHIFT: i32 = Self::BIAS - 1 + Self::MANTISSA_BITS as i32;

    /// Storage bits, zero-extended to 64 bits.
    fn to_bits_u64(self) -> u64;

    #[inline]
    fn parts(self) -> FloatParts {
        FloatParts::decode(self)
    }
}

impl Ieee754 for f32 {
    const MANTISSA_BITS: u32 = 23;
    const EXPONENT_BITS: u32 = 8;

    #[inline]
    fn to_bits_u64(self) -> u64 {
        self.to_bits() as u64
    }
}

impl Ieee754 for f64 {
    const MANTISSA_BITS: u32 = 52;
    const EXPONENT_BITS: u32 = 11;

    #[inline]
    fn to_bits_u64(self) -> u64 {
        self.to_bits()
    }
}

#[cfg(feature = "f16")]
impl Ieee754 for half::f16 {
    const MANTISSA_BITS: u32 = 10;
    const EXPONENT_BITS: u32 = 5;

    #[inline]
    fn to_bits_u64(self) -> u64 {
        self.to_bits() as u64
    }
}

/// The raw fields of a float. `exponent` and `mantissa` are the biased
/// exponent field and the stored fraction bits, without the implicit
/// leading one of normal numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatParts {
    pub bits: u64,
    pub negative: bool,
    pub exponent: u32,
    pub mantissa: u64,
    pub class: FloatClass,
}

impl FloatParts {
    pub fn decode<F: Ieee754>(value: F) -> Self {
        let bits = value.to_bits_u64();
        let negative = (bits >> F::SIGN_SHIFT) & 1 == 1;
        let exponent = ((bits >> F::MANTISSA_BITS) as u32) & F::EXPONENT_MAX;
        let mantissa = bits & F::MANTISSA_MASK;

        let class = match (exponent, mantissa) {
            (0, 0) => FloatClass::Zero,
            (0, _) => FloatClass::Subnormal,
            (e, 0) if e == F::EXPONENT_MAX => FloatClass::Infinite,
            (e, _) if e == F::EXPONENT_MAX => FloatClass::Nan,
            _ => FloatClass::Normal,
        };

        FloatParts {
            bits,
            negative,
            exponent,
            mantissa,
            class,
        }
    }
}
