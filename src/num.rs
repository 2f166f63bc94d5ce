//! Numeric conversions without `core::fmt`.
//!
//! Formatting machinery is expensive in code size on small targets, and
//! float formatting is often missing from the platform's C runtime
//! entirely. These routines extract digits by hand instead.
//!
//! Every renderer follows the same degradation rules: if the buffer is too
//! small to hold even a glyph it is wiped with `NUL` bytes; otherwise a
//! failed conversion leaves a one-character glyph
//! ([`OUT_OF_RANGE_GLYPH`](crate::OUT_OF_RANGE_GLYPH) or
//! [`NO_ROOM_GLYPH`](crate::NO_ROOM_GLYPH)) in the buffer and the matching
//! [`FormatError`] is returned.

use crate::cstr::NUL;
use crate::cstr::content;
use crate::error::FormatError;
use crate::error::ParseIntError;

/// Largest value [`float_to_string`] renders.
pub const FLOAT_MAX: f32 = 999.0;

/// Enough room for the decimal digits of `u64::MAX`.
const MAX_DIGITS: usize = 20;

mod sealed {
  pub trait Sealed {}
}

/// Unsigned integer widths accepted by the integer conversions.
///
/// Implemented for `u8`, `u16`, `u32`, `u64` and `usize`. The trait is
/// sealed.
pub trait Unsigned: Copy + sealed::Sealed {
  /// Width of the type in bits.
  const BITS: u32;

  #[doc(hidden)]
  const ZERO: Self;

  /// Returns `true` if bit `index` (0 is the least significant) is set.
  fn bit(self, index: u32) -> bool;

  #[doc(hidden)]
  fn checked_push_digit(self, digit: u8) -> Option<Self>;

  #[doc(hidden)]
  fn div_rem_10(self) -> (Self, u8);

  #[doc(hidden)]
  fn is_zero(self) -> bool;
}

macro_rules! impl_unsigned {
  ($($t:ty),* $(,)?) => {
    $(
      impl sealed::Sealed for $t {}

      impl Unsigned for $t {
        const BITS: u32 = <$t>::BITS;
        const ZERO: Self = 0;

        #[inline]
        fn bit(self, index: u32) -> bool {
          index < Self::BITS && (self >> index) & 1 == 1
        }

        #[inline]
        fn checked_push_digit(self, digit: u8) -> Option<Self> {
          self.checked_mul(10)?.checked_add(<$t>::from(digit))
        }

        #[inline]
        fn div_rem_10(self) -> (Self, u8) {
          (self / 10, (self % 10) as u8)
        }

        #[inline]
        fn is_zero(self) -> bool {
          self == 0
        }
      }
    )*
  };
}

impl_unsigned!(u8, u16, u32, u64, usize);

/// Leaves `err`'s glyph and a sentinel at the start of `dest`.
///
/// Callers have already checked that `dest` holds at least two bytes.
fn write_glyph(dest: &mut [u8], err: FormatError) -> FormatError {
  if let Some(glyph) = err.glyph() {
    dest[0] = glyph;
    dest[1] = NUL;
  }
  err
}

/// Wipes a buffer that cannot hold a glyph and its sentinel.
fn too_small(dest: &mut [u8]) -> FormatError {
  dest.fill(NUL);
  FormatError::BufferTooSmall {
    capacity: dest.len(),
  }
}

/// Writes the decimal digits of `value` into `digits`, least significant
/// first, and returns how many were written.
fn extract_digits<T: Unsigned>(
  mut value: T,
  digits: &mut [u8; MAX_DIGITS],
) -> usize {
  let mut count = 0;
  loop {
    let (rest, digit) = value.div_rem_10();
    digits[count] = b'0' + digit;
    count += 1;
    value = rest;
    if value.is_zero() || count == MAX_DIGITS {
      return count;
    }
  }
}

/// Renders `value` with `precision` fractional digits into `dest`.
///
/// `dest.len()` is the capacity, including the sentinel. Values must lie in
/// `0.0..=999.0`; a `precision` of `0` renders the integer part only, with
/// no decimal point. Fractional digits are truncated, not rounded.
///
/// On success returns the length of the rendered string.
///
/// # Errors
///
/// - [`FormatError::BufferTooSmall`] if `dest` holds fewer than 2 bytes. The
///   buffer is filled with `NUL`.
/// - [`FormatError::OutOfRange`] if `value` is negative, NaN or above
///   [`FLOAT_MAX`]. `dest` holds `"<"`.
/// - [`FormatError::NoRoom`] if the integer digits do not fit next to the
///   decimal point, the fraction and the sentinel. `dest` holds `"?"`.
///
/// # Example
///
/// ```rust
/// use nulstr::float_to_string;
///
/// let mut buf = [0u8; 6];
/// assert_eq!(float_to_string(12.34, &mut buf, 2), Ok(5));
/// assert_eq!(&buf, b"12.34\0");
///
/// let mut buf = [0u8; 2];
/// assert_eq!(float_to_string(5.0, &mut buf, 0), Ok(1));
/// assert_eq!(&buf, b"5\0");
/// ```
pub fn float_to_string(
  value: f32,
  dest: &mut [u8],
  precision: u8,
) -> Result<usize, FormatError> {
  let capacity = dest.len();
  if capacity < 2 {
    return Err(too_small(dest));
  }
  if !(0.0..=FLOAT_MAX).contains(&value) {
    return Err(write_glyph(dest, FormatError::OutOfRange));
  }

  let int_part = value as u16;
  let mut frac = value - f32::from(int_part);

  let mut digits = [0u8; MAX_DIGITS];
  let int_len = extract_digits(int_part, &mut digits);

  let precision = usize::from(precision);
  let dot = usize::from(precision > 0);
  let available = capacity.checked_sub(precision + dot + 1);
  match available {
    Some(available) if int_len <= available => {}
    available => {
      return Err(write_glyph(dest, FormatError::NoRoom {
        needed:    int_len,
        available: available.unwrap_or(0),
      }));
    }
  }

  for (slot, digit) in dest.iter_mut().zip(digits[..int_len].iter().rev()) {
    *slot = *digit;
  }
  let mut pos = int_len;

  if precision > 0 {
    dest[pos] = b'.';
    pos += 1;
    for _ in 0..precision {
      frac *= 10.0;
      let digit = (frac as u8).min(9);
      dest[pos] = b'0' + digit;
      pos += 1;
      frac -= f32::from(digit);
    }
  }

  dest[pos] = NUL;
  Ok(pos)
}

/// Renders `value` in decimal into `dest`, most significant digit first.
///
/// # Errors
///
/// - [`FormatError::BufferTooSmall`] if `dest` holds fewer than 2 bytes. The
///   buffer is filled with `NUL`.
/// - [`FormatError::NoRoom`] if the digits and the sentinel do not fit.
///   `dest` holds `"?"`.
///
/// ```rust
/// let mut buf = [0u8; 6];
/// assert_eq!(nulstr::integer_to_string(65535u16, &mut buf), Ok(5));
/// assert_eq!(&buf, b"65535\0");
/// ```
pub fn integer_to_string<T: Unsigned>(
  value: T,
  dest: &mut [u8],
) -> Result<usize, FormatError> {
  let capacity = dest.len();
  if capacity < 2 {
    return Err(too_small(dest));
  }

  let mut digits = [0u8; MAX_DIGITS];
  let len = extract_digits(value, &mut digits);
  if len > capacity - 1 {
    return Err(write_glyph(dest, FormatError::NoRoom {
      needed:    len,
      available: capacity - 1,
    }));
  }

  for (slot, digit) in dest.iter_mut().zip(digits[..len].iter().rev()) {
    *slot = *digit;
  }
  dest[len] = NUL;
  Ok(len)
}

/// Parses the content of `s` as an unsigned decimal number.
///
/// Digits are read from the first byte up to the sentinel. There is no sign
/// handling and no whitespace skipping; the empty string parses to `0`.
///
/// # Errors
///
/// - [`ParseIntError::InvalidDigit`] at the first byte outside `'0'..='9'`.
/// - [`ParseIntError::Overflow`] if the value does not fit `T`.
///
/// ```rust
/// use nulstr::ParseIntError;
/// use nulstr::string_to_integer;
///
/// assert_eq!(string_to_integer::<u16>(b"4711\0"), Ok(4711));
/// assert_eq!(string_to_integer::<u8>(b"256\0"), Err(ParseIntError::Overflow));
/// ```
pub fn string_to_integer<T: Unsigned>(s: &[u8]) -> Result<T, ParseIntError> {
  let mut value = T::ZERO;
  for (index, &byte) in content(s).iter().enumerate() {
    if !byte.is_ascii_digit() {
      return Err(ParseIntError::InvalidDigit { index, byte });
    }
    value = value
      .checked_push_digit(byte - b'0')
      .ok_or(ParseIntError::Overflow)?;
  }
  Ok(value)
}

/// Renders the bits of `value` as `'1'`/`'0'` characters, bit 0 first.
///
/// A buffer of `T::BITS + 1` bytes receives every bit; a shorter one only
/// the low-order bits that fit. Returns the rendered length.
///
/// ```rust
/// let mut buf = [0u8; 9];
/// assert_eq!(nulstr::binary_to_string(0b0000_0101u8, &mut buf), 8);
/// assert_eq!(&buf, b"10100000\0");
/// ```
pub fn binary_to_string<T: Unsigned>(value: T, dest: &mut [u8]) -> usize {
  if dest.is_empty() {
    return 0;
  }
  let len = (T::BITS as usize).min(dest.len() - 1);
  for (index, slot) in (0..).zip(dest[..len].iter_mut()) {
    *slot = if value.bit(index) { b'1' } else { b'0' };
  }
  dest[len] = NUL;
  len
}
