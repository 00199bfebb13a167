//! Field descriptors.

use core::fmt::{self, Debug, Display, Formatter};
use core::marker::PhantomData;

use crate::access::{mask, BitAccess, ShiftMask};
use crate::raw::RawWord;

/// A named bit range within a register word.
///
/// A field is described by its name, the bit offset of its least significant
/// bit, its length in bits, and the derived unshifted mask covering `length`
/// low bits. The strategy parameter `S` fixes how [`get`](Self::get) and
/// [`set`](Self::set) physically address bits; it defaults to the
/// shift-and-mask scheme.
///
/// Descriptors are declaration-time artifacts, most conveniently produced by
/// [`registers!`](crate::registers). Accessing a field never fails at
/// runtime: everything that could go wrong is rejected when the descriptor
/// is declared.
pub struct Field<R: RawWord, S = ShiftMask> {
    name: &'static str,
    offset: u32,
    length: u32,
    mask: R,
    strategy: PhantomData<S>,
}

// Manual impls so the strategy parameter picks up no bounds.
impl<R: RawWord, S> Clone for Field<R, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: RawWord, S> Copy for Field<R, S> {}

impl<R: RawWord, S> Debug for Field<R, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("offset", &self.offset)
            .field("length", &self.length)
            .field("mask", &self.mask)
            .finish()
    }
}

impl<R: RawWord, S> Field<R, S> {
    /// The field's name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The bit offset of the field's least significant bit.
    pub const fn offset(&self) -> u32 {
        self.offset
    }

    /// The field's length in bits.
    pub const fn length(&self) -> u32 {
        self.length
    }

    /// The unshifted mask covering the field's `length` low bits.
    pub const fn mask(&self) -> R {
        self.mask
    }

    /// Creates a field descriptor, validating it against the word width.
    ///
    /// This is the fallible counterpart of the `const` constructor `new`,
    /// for descriptors assembled at runtime.
    ///
    /// ```
    /// use regfield::{Field, FieldError};
    ///
    /// assert!(Field::<u16>::checked("mode", 4, 3).is_ok());
    /// assert_eq!(
    ///     Field::<u16>::checked("mode", 14, 3).unwrap_err(),
    ///     FieldError::OutOfRange { offset: 14, length: 3, width: 16 },
    /// );
    /// ```
    pub fn checked(name: &'static str, offset: u32, length: u32) -> Result<Self, FieldError> {
        if length >= R::BITS {
            return Err(FieldError::LengthTooWide {
                length,
                width: R::BITS,
            });
        }
        if offset > R::BITS - length {
            return Err(FieldError::OutOfRange {
                offset,
                length,
                width: R::BITS,
            });
        }
        Ok(Self {
            name,
            offset,
            length,
            mask: mask::<R>(length),
            strategy: PhantomData,
        })
    }
}

impl<R: RawWord, S: BitAccess<R>> Field<R, S> {
    /// Reads the field's value out of `raw`, right-justified.
    #[inline(always)]
    #[must_use]
    pub fn get(&self, raw: R) -> R {
        S::extract(raw, self.offset, self.length)
    }

    /// Returns `raw` with this field replaced by the low bits of `value`.
    ///
    /// Bits of `value` past the field's length are masked off.
    #[inline(always)]
    #[must_use]
    pub fn set(&self, raw: R, value: R) -> R {
        S::insert(raw, self.offset, self.length, value)
    }
}

macro_rules! impl_field_new {
    ($($ty:ty),*) => {$(
        impl<S> Field<$ty, S> {
            /// Creates a field descriptor in a const context.
            ///
            /// # Panics
            ///
            /// Panics unless `length` is less than the word width and
            /// `offset + length` fits within it. In a `const` item the panic
            /// happens during const evaluation, so an invalid descriptor
            /// fails the build:
            ///
            /// ```compile_fail
            /// use regfield::Field;
            ///
            /// // Bits 4..9 do not fit an 8-bit word.
            /// const BAD: Field<u8> = Field::new("bad", 4, 5);
            /// ```
            #[inline(always)]
            #[must_use]
            pub const fn new(name: &'static str, offset: u32, length: u32) -> Self {
                assert!(
                    length < <$ty>::BITS,
                    "field length must be less than the register width"
                );
                assert!(
                    offset <= <$ty>::BITS - length,
                    "field must lie within the register word"
                );
                Self {
                    name,
                    offset,
                    length,
                    mask: if length == 0 { 0 } else { ((1 as $ty) << length) - 1 },
                    strategy: PhantomData,
                }
            }
        }
    )*};
}
impl_field_new!(u8, u16, u32, u64, u128);

/// The error type returned when a field descriptor does not fit its word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// The length equals or exceeds the word width, so no in-word mask
    /// exists for it.
    LengthTooWide {
        /// The requested length in bits.
        length: u32,
        /// The word width in bits.
        width: u32,
    },
    /// The bit range runs past the end of the word.
    OutOfRange {
        /// The requested offset in bits.
        offset: u32,
        /// The requested length in bits.
        length: u32,
        /// The word width in bits.
        width: u32,
    },
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthTooWide { length, width } => {
                write!(
                    f,
                    "field length {length} is out of range for a word of {width} bits"
                )
            }
            Self::OutOfRange {
                offset,
                length,
                width,
            } => {
                write!(
                    f,
                    "field at offset {offset} with length {length} does not fit in {width} bits"
                )
            }
        }
    }
}
