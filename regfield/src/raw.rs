//! The raw register word types.

use core::fmt::{Debug, Display};

use num_traits::{PrimInt, Unsigned};

use crate::sealed::Sealed;

/// A fixed-width unsigned integer usable as a register word.
///
/// Implemented for [`u8`], [`u16`], [`u32`], [`u64`], and [`u128`]. `usize`
/// is excluded: its width varies by target, which would make
/// declaration-time width checks unportable.
pub trait RawWord: PrimInt + Unsigned + Debug + Display + Sealed {
    /// The width of the word in bits.
    const BITS: u32;
}

macro_rules! impl_raw_word {
    ($($ty:ty),*) => {$(
        impl Sealed for $ty {}

        impl RawWord for $ty {
            const BITS: u32 = <$ty>::BITS;
        }
    )*};
}
impl_raw_word!(u8, u16, u32, u64, u128);
