//! Error types reported by the conversions and by [`CBuf`](crate::CBuf).
//!
//! None of the free functions in this crate fail loudly: whenever a
//! conversion cannot produce its result, the destination buffer still
//! receives a glyph (or is wiped) so that display code keeps working. The
//! errors below describe *why* that happened.

use thiserror::Error;

/// Glyph written when a value is outside the range a conversion can render.
pub const OUT_OF_RANGE_GLYPH: u8 = b'<';

/// Glyph written when the rendered digits do not fit the destination.
pub const NO_ROOM_GLYPH: u8 = b'?';

/// Failure of a numeric-to-string conversion.
///
/// # Example
///
/// ```rust
/// use nulstr::FormatError;
/// use nulstr::float_to_string;
///
/// let mut buf = [0u8; 6];
/// let err = float_to_string(1000.0, &mut buf, 2).unwrap_err();
/// assert_eq!(err, FormatError::OutOfRange);
/// assert_eq!(&buf[..2], b"<\0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "is_variant", derive(derive_more::IsVariant))]
pub enum FormatError {
  /// The destination cannot hold a glyph and its sentinel. The buffer has
  /// been filled with `NUL` bytes.
  #[error("destination holds {capacity} bytes, at least 2 are required")]
  BufferTooSmall { capacity: usize },
  /// The value is negative, not a number, or above the renderable maximum.
  #[error("value is outside the renderable range")]
  OutOfRange,
  /// The integer digits do not fit next to the requested fraction.
  #[error("integer part needs {needed} bytes but only {available} remain")]
  NoRoom { needed: usize, available: usize },
}

impl FormatError {
  /// Returns the glyph left in the destination buffer for this error, or
  /// `None` when the buffer was wiped instead.
  pub const fn glyph(&self) -> Option<u8> {
    match self {
      Self::BufferTooSmall { .. } => None,
      Self::OutOfRange => Some(OUT_OF_RANGE_GLYPH),
      Self::NoRoom { .. } => Some(NO_ROOM_GLYPH),
    }
  }
}

/// Failure of [`string_to_integer`](crate::string_to_integer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "is_variant", derive(derive_more::IsVariant))]
pub enum ParseIntError {
  /// A byte other than `'0'..='9'` was found before the sentinel.
  #[error("invalid digit {byte:#04x} at index {index}")]
  InvalidDigit { index: usize, byte: u8 },
  /// The value does not fit the requested integer width.
  #[error("number too large for the target integer type")]
  Overflow,
}

/// Error returned when text does not fit a [`CBuf`](crate::CBuf) together
/// with its sentinel byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("{len} bytes do not fit a buffer of capacity {capacity}")]
pub struct CapacityError {
  pub len:      usize,
  pub capacity: usize,
}

/// Error returned when bytes or text cannot become a
/// [`CBuf`](crate::CBuf) without losing data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "is_variant", derive(derive_more::IsVariant))]
pub enum FromBytesError {
  /// The text and its sentinel exceed the capacity.
  #[error(transparent)]
  Capacity(#[from] CapacityError),
  /// A `NUL` byte appears before the end of the input, so everything after
  /// it would be dropped. A single trailing `NUL` is accepted.
  #[error("interior NUL byte at index {index}")]
  InteriorNul { index: usize },
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn glyphs_match_error_kind() {
    assert_eq!(FormatError::OutOfRange.glyph(), Some(b'<'));
    assert_eq!(
      FormatError::NoRoom {
        needed:    3,
        available: 1,
      }
      .glyph(),
      Some(b'?')
    );
    assert_eq!(FormatError::BufferTooSmall { capacity: 1 }.glyph(), None);
  }

  #[test]
  fn error_messages() {
    assert_eq!(
      FormatError::BufferTooSmall { capacity: 1 }.to_string(),
      "destination holds 1 bytes, at least 2 are required"
    );
    assert_eq!(
      ParseIntError::InvalidDigit {
        index: 2,
        byte:  b'x',
      }
      .to_string(),
      "invalid digit 0x78 at index 2"
    );
    assert_eq!(
      CapacityError {
        len:      9,
        capacity: 8,
      }
      .to_string(),
      "9 bytes do not fit a buffer of capacity 8"
    );
    assert_eq!(
      FromBytesError::from(CapacityError {
        len:      9,
        capacity: 8,
      })
      .to_string(),
      "9 bytes do not fit a buffer of capacity 8"
    );
    assert_eq!(
      FromBytesError::InteriorNul { index: 2 }.to_string(),
      "interior NUL byte at index 2"
    );
  }

  #[test]
  #[cfg(feature = "is_variant")]
  fn variant_predicates() {
    assert!(FormatError::OutOfRange.is_out_of_range());
    assert!(ParseIntError::Overflow.is_overflow());
    assert!(
      ParseIntError::InvalidDigit {
        index: 0,
        byte:  b'-',
      }
      .is_invalid_digit()
    );
  }
}
