//! An overview of `regfield` concepts and terms.
//!
//! # Registers and Fields
//!
//! The [`registers!`](crate::registers) macro generates register types. A
//! register is declared with a raw word type and a sequence of named bit
//! fields, each covering a half-open bit range `start..end` counted from the
//! least significant bit. Registers are uninhabited types: they carry no data
//! and exist only as namespaces for field descriptors, geometry constants,
//! and accessors over plain integer words.
//!
//! Field values are always exchanged as the register's raw word type,
//! right-justified. Reading a 3-bit field of a `u16` register yields a `u16`
//! in `0..=7`; writing takes the low 3 bits of the given `u16` and ignores
//! the rest.
//!
//! # Raw Words
//!
//! Each register specifies a raw word type, one of [`u8`], [`u16`], [`u32`],
//! [`u64`], or [`u128`]. All raw word types implement
//! [`RawWord`](crate::RawWord). `usize` is not a raw word type because its
//! width varies by target.
//!
//! # Field Descriptors
//!
//! Each field is described by a [`Field`](crate::Field) value recording its
//! name, offset, length, and derived mask. Descriptors are built in `const`
//! context when the register is declared; anything invalid about a field's
//! geometry is a compile error, so accessing a declared field can never fail
//! at runtime.
//!
//! A field's length may be zero. Zero-length fields read as zero and writes
//! through them return the word unchanged.
//!
//! Fields may overlap. Overlapping declarations are a deliberate aliasing
//! tool, for example a whole-byte view alongside per-bit views of the same
//! byte.
//!
//! # Generated Register API
//!
//! Each register generates an uninhabited `enum` with an inherent impl. The
//! impl provides register-wide constants:
//!
//! ```ignore
//! const WIDTH: u32;
//! const FIELDS: &'static [Field<R, S>];
//! ```
//!
//! where `R` is the raw word type and `S` is the register's access strategy.
//! `FIELDS` lists every declared field in declaration order, reserved fields
//! included.
//!
//! Every defined field `f` generates a descriptor constant, three geometry
//! constants, and two accessors:
//!
//! ```ignore
//! const F: Field<R, S>;
//! const F_OFFSET: u32;
//! const F_LENGTH: u32;
//! const F_MASK: R;
//!
//! fn f(raw: R) -> R;
//! fn with_f(raw: R, value: R) -> R;
//! ```
//!
//! where `F` is the field's name upper-cased. Generated items use the
//! visibility specifier from the field declaration.
//!
//! # Reserved Fields
//!
//! A field is _reserved_ if its name starts with an underscore; otherwise it
//! is _defined_. Reserved fields appear in `FIELDS` but generate no constants
//! or accessors of their own.
//!
//! # Access Strategies
//!
//! The [`BitAccess`](crate::BitAccess) trait decides how field bits are
//! physically read and written. Its provided method bodies implement the
//! conventional shift-and-mask scheme, available as
//! [`ShiftMask`](crate::ShiftMask), which every register uses unless its
//! declaration names another implementation with a `via` clause.
//!
//! A strategy is chosen per register at declaration time. The descriptor
//! constants, the `FIELDS` table, and the accessors of a register all route
//! through the same strategy, so there is no way to read a field through one
//! scheme and write it through another.
//!
//! # Declaration Errors
//!
//! The macro rejects, at compile time:
//!
//! * bit ranges with `end` before `start`;
//! * fields as wide as or wider than the register word;
//! * fields extending past the end of the register word;
//! * duplicate field names, including names that collide after upper-casing.
//!
//! Descriptors assembled at runtime go through
//! [`Field::checked`](crate::Field::checked), which reports the same
//! geometry violations as [`FieldError`](crate::FieldError) values.
