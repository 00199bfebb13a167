#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![doc = include_str!("../README.md")]

mod access;
mod field;
mod raw;

pub mod doc;
pub mod prelude;

// For macro access via `$crate`.
#[doc(hidden)]
pub mod __private {
    pub use regfield_macros::registers;
}

mod sealed {
    pub trait Sealed {}
}

pub use access::{mask, BitAccess, ShiftMask};
pub use field::{Field, FieldError};
pub use raw::RawWord;

/// Declares registers with named bit fields.
///
/// See the [`doc`] module for an [overview of concepts and terms](doc::overview)
/// and [examples](doc::example).
///
#[doc = include_str!("../syntax.md")]
#[macro_export]
macro_rules! registers {
    ($($tt:tt)*) => {
        $crate::__private::registers! { ($crate, $($tt)*) }
    };
}
