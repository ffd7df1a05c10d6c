mod log2;
mod swar;

pub use swar::{swar_count, swar_reverse, SwarImpl, SwarWord};

use crate::error::Result;

/// Bit-level operations on the raw two's-complement pattern of an integer.
/// Signed types behave exactly like their unsigned counterpart of the same width.
pub trait BitOps: Copy {
    /// Number of set bits.
    fn bit_count(self) -> u32;

    /// The value with its bit order reversed end-to-end.
    fn bit_reverse(self) -> Self;
}

pub trait PowerOfTwo: Copy {
    /// True iff the value is a positive, exact power of two.
    fn is_pow2(self) -> bool;
}

pub trait Log2: Copy {
    /// ⌊log₂(value)⌋
    fn log2_floor(self) -> Result<i32>;

    /// ⌈log₂(value)⌉
    fn log2_ceiling(self) -> Result<i32>;
}
