//! Bit tricks, base-2 logarithms and modular arithmetic for every primitive
//! integer width, the IEEE-754 binary16/32/64 formats and `num-bigint`
//! integers.
//!
//! ```
//! use numext::{BitOps, Log2, Modular, PowerOfTwo};
//!
//! assert_eq!(0x11u8.bit_count(), 2);
//! assert_eq!(0x4Bu8.bit_reverse(), 0xD2);
//! assert!(0.25f64.is_pow2());
//! assert_eq!(1000u32.log2_ceiling(), Ok(10));
//! assert_eq!(7u32.mod_inverse(13), Ok(6));
//! ```

pub mod bits;
pub mod error;
pub mod float;
pub mod modular;

pub use bits::{BitOps, Log2, PowerOfTwo};
pub use error::{NumericError, Result};
pub use float::{FloatClass, FloatParts, Ieee754};
pub use modular::Modular;
