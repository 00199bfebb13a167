//! Convenience re-exports.

#[doc(no_inline)]
pub use crate::{registers, BitAccess, Field, FieldError, RawWord, ShiftMask};
