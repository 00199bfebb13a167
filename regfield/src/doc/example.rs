//! Example invocations, generated types, and usage.

use crate::prelude::*;

registers! {
    /// An interrupt control register using the default access scheme.
    ///
    /// # Declaration
    ///
    /// ```
    /// # use regfield::prelude::*;
    /// registers! {
    ///     pub register IntCtl: u16 {
    ///         pub enable: 0..1,
    ///         pub priority: 1..4,
    ///         _reserved: 4..14,
    ///         pub pending: 14..15,
    ///         pub masked: 15..16,
    ///     }
    /// }
    /// ```
    ///
    /// # Usage
    ///
    /// ```
    /// use regfield::doc::example::IntCtl;
    ///
    /// let raw: u16 = 0b10_0000000000_011_1;
    /// assert_eq!(IntCtl::enable(raw), 1);
    /// assert_eq!(IntCtl::priority(raw), 0b011);
    /// assert_eq!(IntCtl::pending(raw), 0);
    /// assert_eq!(IntCtl::masked(raw), 1);
    ///
    /// let raw = IntCtl::with_priority(raw, 0b101);
    /// assert_eq!(IntCtl::priority(raw), 0b101);
    ///
    /// assert_eq!(IntCtl::WIDTH, 16);
    /// assert_eq!(IntCtl::FIELDS.len(), 5);
    /// assert_eq!(IntCtl::PRIORITY_OFFSET, 1);
    /// assert_eq!(IntCtl::PRIORITY_LENGTH, 3);
    /// assert_eq!(IntCtl::PRIORITY_MASK, 0b111);
    /// ```
    pub register IntCtl: u16 {
        /// Global interrupt enable.
        pub enable: 0..1,
        /// Minimum priority level that may interrupt.
        pub priority: 1..4,
        _reserved: 4..14,
        pub pending: 14..15,
        pub masked: 15..16,
    }

    /// A coprocessor instruction word whose manual numbers bits from the
    /// most significant end.
    ///
    /// # Declaration
    ///
    /// ```
    /// # use regfield::prelude::*;
    /// # use regfield::doc::example::MsbNumbered;
    /// registers! {
    ///     pub register DspWord: u32 via MsbNumbered {
    ///         pub opcode: 0..6,
    ///         pub operand: 6..30,
    ///         pub flags: 30..32,
    ///     }
    /// }
    /// ```
    ///
    /// # Usage
    ///
    /// ```
    /// use regfield::doc::example::DspWord;
    ///
    /// let raw = DspWord::with_opcode(0, 0b10_1010);
    /// assert_eq!(raw, 0b101010_000000000000000000000000_00);
    /// assert_eq!(DspWord::opcode(raw), 0b10_1010);
    ///
    /// // Descriptors in FIELDS route through the same strategy as the
    /// // accessors.
    /// assert_eq!(DspWord::FIELDS[0].set(0, 1), 1 << 26);
    /// ```
    pub register DspWord: u32 via MsbNumbered {
        pub opcode: 0..6,
        pub operand: 6..30,
        pub flags: 30..32,
    }
}

/// An access strategy that counts field offsets down from the most
/// significant bit, as some chip manuals number them.
pub enum MsbNumbered {}

fn msb_to_lsb<R: RawWord>(offset: u32, length: u32) -> u32 {
    R::BITS - offset - length
}

impl<R: RawWord> BitAccess<R> for MsbNumbered {
    #[inline]
    fn extract(raw: R, offset: u32, length: u32) -> R {
        ShiftMask::extract(raw, msb_to_lsb::<R>(offset, length), length)
    }

    #[inline]
    fn insert(raw: R, offset: u32, length: u32, value: R) -> R {
        ShiftMask::insert(raw, msb_to_lsb::<R>(offset, length), length, value)
    }
}
