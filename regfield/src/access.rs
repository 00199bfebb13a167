//! Bit-level extraction and insertion over raw words.

use crate::raw::RawWord;

/// Returns the unshifted mask covering the low `length` bits of `R`.
///
/// `mask(0)` is `0`. Lengths of `R::BITS` or more saturate to the all-ones
/// word; declared fields never reach that range, but the function stays total
/// so no caller can provoke an oversized shift through it.
///
/// ```
/// assert_eq!(regfield::mask::<u16>(4), 0xf);
/// assert_eq!(regfield::mask::<u16>(0), 0);
/// ```
#[inline]
#[must_use]
pub fn mask<R: RawWord>(length: u32) -> R {
    if length == 0 {
        R::zero()
    } else if length < R::BITS {
        (R::one() << length as usize) - R::one()
    } else {
        R::max_value()
    }
}

/// How field bits are physically read from and written into a raw word.
///
/// The provided method bodies implement the conventional shift-and-mask
/// scheme, available out of the box as [`ShiftMask`]. A register declared
/// with a `via` clause routes every field constant and accessor through the
/// named implementation instead; the choice is fixed at declaration time and
/// monomorphic, never a per-call dispatch. Implementors may override either
/// method or both, e.g. for hardware that addresses bits per storage word.
pub trait BitAccess<R: RawWord> {
    /// Extracts `length` bits of `raw` starting at bit `offset`,
    /// right-justified.
    ///
    /// Bits of `raw` outside `[offset, offset + length)` never influence the
    /// result.
    #[inline]
    #[must_use]
    fn extract(raw: R, offset: u32, length: u32) -> R {
        if length == 0 {
            // An empty field may sit at offset == R::BITS, past any legal shift.
            return R::zero();
        }
        (raw >> offset as usize) & mask::<R>(length)
    }

    /// Returns `raw` with `length` bits at `offset` replaced by the low bits
    /// of `value`.
    ///
    /// Bits of `value` past `length` are masked off; all bits of `raw`
    /// outside the field are preserved.
    #[inline]
    #[must_use]
    fn insert(raw: R, offset: u32, length: u32, value: R) -> R {
        if length == 0 {
            return raw;
        }
        let mask = mask::<R>(length);
        (raw & !(mask << offset as usize)) | ((value & mask) << offset as usize)
    }
}

/// The default shift-and-mask access scheme.
pub enum ShiftMask {}

impl<R: RawWord> BitAccess<R> for ShiftMask {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_formula() {
        assert_eq!(mask::<u8>(0), 0);
        assert_eq!(mask::<u8>(1), 0b1);
        assert_eq!(mask::<u8>(7), 0b0111_1111);
        assert_eq!(mask::<u16>(12), 0x0fff);
        assert_eq!(mask::<u128>(127), u128::MAX >> 1);
    }

    #[test]
    fn mask_saturates_at_the_word_width() {
        assert_eq!(mask::<u8>(8), u8::MAX);
        assert_eq!(mask::<u8>(200), u8::MAX);
    }

    #[test]
    fn mask_matches_the_formula_for_every_length() {
        for length in 0..u32::BITS {
            assert_eq!(mask::<u32>(length), ((1u64 << length) - 1) as u32);
        }
    }

    #[test]
    fn extract_is_right_justified() {
        assert_eq!(ShiftMask::extract(0xab00u16, 8, 8), 0xab);
        assert_eq!(ShiftMask::extract(0b0110_0000u8, 5, 2), 0b11);
    }

    #[test]
    fn insert_then_extract() {
        let raw = ShiftMask::insert(0u32, 12, 8, 0x5a);
        assert_eq!(raw, 0x0005_a000);
        assert_eq!(ShiftMask::extract(raw, 12, 8), 0x5a);
    }

    #[test]
    fn zero_length_at_the_word_boundary() {
        assert_eq!(ShiftMask::extract(0xffffu16, 16, 0), 0);
        assert_eq!(ShiftMask::insert(0xffffu16, 16, 0, 0xffff), 0xffff);
    }
}
