use crate::bits::BitOps;
use core::fmt::{Debug, Display};
use num_traits::{AsPrimitive, PrimInt, Unsigned};

/// Mask tables for SWAR ("SIMD within a register") bit tricks on an
/// `N_BITS` wide word.
///
/// Stage `k` works on groups of `2^(k+1)` bits: the mask keeps the low
/// `2^k` bits of every group, so stage 0 is `0x55..`, stage 1 is `0x33..`,
/// stage 2 is `0x0F..` and so on up to the low half of the whole word.
pub struct SwarImpl<const N_BITS: u32> {}

impl<const N_BITS: u32> SwarImpl<N_BITS> {
    pub const N_BITS: u32 = N_BITS;
    pub const STAGES: u32 = N_BITS.trailing_zeros();
    pub const ALL_ONES: u128 = u128::MAX >> (128 - N_BITS);

    // (2^W - 1) / (2^s + 1) is the repeating pattern of s zeros over s ones.
    pub const fn mask(stage: u32) -> u128 {
        Self::ALL_ONES / ((1u128 << (1u32 << stage)) + 1)
    }

    pub const MASKS: [u128; 7] = [
        Self::mask(0),
        Self::mask(1),
        Self::mask(2),
        Self::mask(3),
        Self::mask(4),
        Self::mask(5),
        Self::mask(6),
    ];
}

/// An unsigned machine word the SWAR kernels can run on.
pub trait SwarWord: PrimInt + Unsigned + AsPrimitive<u32> + Display + Debug {
    const N_BITS: u32;
    const STAGES: u32;
    /// `SwarImpl::<N_BITS>::MASKS` narrowed to the word type. Entries past
    /// `STAGES` are never read.
    const MASKS: [Self; 7];
}

macro_rules! impl_swar_word {
    ($($t:ty),*) => {$(
        impl SwarWord for $t {
            const N_BITS: u32 = <$t>::BITS;
            const STAGES: u32 = SwarImpl::<{ <$t>::BITS }>::STAGES;
            const MASKS: [$t; 7] = {
                let m = SwarImpl::<{ <$t>::BITS }>::MASKS;
                [
                    m[0] as $t,
                    m[1] as $t,
                    m[2] as $t,
                    m[3] as $t,
                    m[4] as $t,
                    m[5] as $t,
                    m[6] as $t,
                ]
            };
        }
    )*};
}

impl_swar_word!(u8, u16, u32, u64, u128);

/// Population count: every stage adds neighbouring group counts into a
/// group of twice the size, until one group spans the word.
pub fn swar_count<W: SwarWord>(value: W) -> u32 {
    let mut v = value;
    for stage in 0..W::STAGES {
        let mask = W::MASKS[stage as usize];
        v = (v & mask) + ((v >> (1usize << stage)) & mask);
    }
    v.as_()
}

/// Bit reversal: every stage swaps the two halves of each group.
pub fn swar_reverse<W: SwarWord>(value: W) -> W {
    let mut v = value;
    for stage in 0..W::STAGES {
        let shift = 1usize << stage;
        let mask = W::MASKS[stage as usize];
        v = ((v >> shift) & mask) | ((v & mask) << shift);
    }
    v
}

macro_rules! impl_bit_ops {
    ($($u:ty => $s:ty),*) => {$(
        impl BitOps for $u {
            #[inline]
            fn bit_count(self) -> u32 {
                swar_count(self)
            }

            #[inline]
            fn bit_reverse(self) -> Self {
                swar_reverse(self)
            }
        }

        impl BitOps for $s {
            #[inline]
            fn bit_count(self) -> u32 {
                swar_count(self as $u)
            }

            #[inline]
            fn bit_reverse(self) -> Self {
                swar_reverse(self as $u) as $s
            }
        }
    )*};
}

impl_bit_ops!(u8 => i8, u16 => i16, u32 => i32, u64 => i64, u128 => i128);
