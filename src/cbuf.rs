use core::borrow::Borrow;
use core::cmp::Ordering;
use core::convert::AsRef;
use core::convert::From;
use core::convert::TryFrom;
use core::fmt;
use core::fmt::Debug;
use core::fmt::Display;
use core::fmt::Formatter;
use core::fmt::Write;
use core::hash::Hash;
use core::hash::Hasher;
use core::ops::Deref;
use core::str;
use core::str::FromStr;

use crate::cstr;
use crate::cstr::NUL;
use crate::edit;
use crate::error::CapacityError;
use crate::error::FormatError;
use crate::error::FromBytesError;
use crate::error::ParseIntError;
use crate::num;
use crate::num::Unsigned;

#[derive(Clone, Copy)]
#[cfg_attr(feature = "constructors", derive(derive_more::Constructor))]
#[cfg_attr(
  feature = "index",
  derive(derive_more::Index, derive_more::IndexMut)
)]
/// A NUL-terminated string stored inline in a fixed `[u8; N]` array.
///
/// The capacity `N` includes the sentinel byte, so a `CBuf<N>` holds at
/// most `N - 1` bytes of text. The buffer never grows: every edit goes
/// through the free functions of this crate and truncates silently, except
/// for the [`fmt::Write`] impl, which refuses text that does not fit.
///
/// Indexing (with the `index` feature) reaches the raw array, sentinel and
/// stale bytes included.
///
/// # Example
///
/// ```rust
/// # use nulstr::CBuf;
/// # fn main() -> Result<(), nulstr::FromBytesError> {
/// let mut line: CBuf<12> = "T=".parse()?;
/// line.write_float(21.5, 1).unwrap();
/// line.push_str("C");
/// assert_eq!(line, "T=21.5C");
/// assert_eq!(line.remaining(), 4);
///
/// // too long for the buffer
/// assert!("a very long line".parse::<CBuf<12>>().is_err());
/// # Ok(())
/// # }
/// ```
pub struct CBuf<const N: usize> {
  #[cfg_attr(feature = "index", index)]
  #[cfg_attr(feature = "index", index_mut)]
  buf: [u8; N],
}

impl<const N: usize> CBuf<N> {
  /// Wraps an existing array. Its content runs up to the first `NUL` byte,
  /// or the whole array if there is none.
  #[cfg(not(feature = "constructors"))]
  pub const fn new(buf: [u8; N]) -> Self {
    Self { buf }
  }

  /// Creates an empty buffer.
  #[inline]
  pub const fn empty() -> Self {
    Self { buf: [NUL; N] }
  }

  /// Returns the length of the string, excluding the sentinel.
  #[inline]
  pub fn len(&self) -> usize {
    cstr::length(&self.buf)
  }

  /// Returns whether the string is empty.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Returns the capacity `N`, including the sentinel byte.
  #[inline]
  pub const fn capacity(&self) -> usize {
    N
  }

  /// Returns how many more bytes of text fit before the buffer is full.
  #[inline]
  pub fn remaining(&self) -> usize {
    N.saturating_sub(1).saturating_sub(self.len())
  }

  /// Returns the content, without the sentinel.
  #[inline]
  pub fn as_bytes(&self) -> &[u8] {
    cstr::content(&self.buf)
  }

  /// Returns the content followed by its sentinel. For an unterminated
  /// array this is the whole array.
  #[inline]
  pub fn as_bytes_with_nul(&self) -> &[u8] {
    let end = (self.len() + 1).min(N);
    &self.buf[..end]
  }

  /// Returns the content as a string slice, if it is valid UTF-8.
  #[inline]
  pub fn to_str(&self) -> Result<&str, str::Utf8Error> {
    str::from_utf8(self.as_bytes())
  }

  /// Empties the string.
  #[inline]
  pub fn clear(&mut self) {
    if let Some(first) = self.buf.first_mut() {
      *first = NUL;
    }
  }

  /// Replaces the content with `src`, truncating it to fit. Returns the new
  /// length.
  #[inline]
  pub fn set(&mut self, src: impl AsRef<[u8]>) -> usize {
    edit::copy(&mut self.buf, src.as_ref())
  }

  /// Appends `s`, truncating it to fit. Returns the new length.
  #[inline]
  pub fn push_str(&mut self, s: &str) -> usize {
    self.push_bytes(s)
  }

  /// Appends raw bytes up to their first `NUL`, truncating them to fit.
  /// Returns the new length.
  #[inline]
  pub fn push_bytes(&mut self, bytes: impl AsRef<[u8]>) -> usize {
    edit::append(&mut self.buf, bytes.as_ref())
  }

  /// Replaces the content with `len` copies of `c`.
  #[inline]
  pub fn fill(&mut self, len: usize, c: u8) -> usize {
    edit::fill(&mut self.buf, len, c)
  }

  /// Replaces the content with the range `start..end` of `src`.
  #[inline]
  pub fn slice_from(
    &mut self,
    src: impl AsRef<[u8]>,
    start: usize,
    end: usize,
  ) -> usize {
    edit::slice(&mut self.buf, src.as_ref(), start, end)
  }

  /// Returns the index of the first occurrence of `needle`.
  #[inline]
  pub fn find(&self, needle: impl AsRef<[u8]>) -> Option<usize> {
    cstr::find(&self.buf, needle.as_ref())
  }

  /// Returns the index of the first occurrence of `needle` at or after
  /// `start`.
  #[inline]
  pub fn find_from(
    &self,
    needle: impl AsRef<[u8]>,
    start: usize,
  ) -> Option<usize> {
    cstr::find_from(&self.buf, needle.as_ref(), start)
  }

  /// Parses the content as an unsigned decimal number.
  #[inline]
  pub fn parse_int<T: Unsigned>(&self) -> Result<T, ParseIntError> {
    num::string_to_integer(&self.buf)
  }

  /// Appends `value` rendered with `precision` fractional digits.
  ///
  /// The number is rendered into the free space after the current content,
  /// so on error the glyph lands there as well. If there is no free space at
  /// all the content is left untouched.
  pub fn write_float(
    &mut self,
    value: f32,
    precision: u8,
  ) -> Result<usize, FormatError> {
    self.render_tail(|tail| num::float_to_string(value, tail, precision))
  }

  /// Appends `value` in decimal. Error handling follows
  /// [`write_float`](Self::write_float).
  pub fn write_uint<T: Unsigned>(
    &mut self,
    value: T,
  ) -> Result<usize, FormatError> {
    self.render_tail(|tail| num::integer_to_string(value, tail))
  }

  /// Runs `render` over the bytes from the sentinel onwards. An
  /// unterminated buffer has no such bytes and is not written to.
  fn render_tail(
    &mut self,
    render: impl FnOnce(&mut [u8]) -> Result<usize, FormatError>,
  ) -> Result<usize, FormatError> {
    let start = self.len();
    if start >= N {
      return Err(FormatError::BufferTooSmall { capacity: 0 });
    }
    render(&mut self.buf[start..]).map(|len| start + len)
  }

  /// Replaces the content with the bits of `value`, bit 0 first.
  #[inline]
  pub fn write_bits<T: Unsigned>(&mut self, value: T) -> usize {
    num::binary_to_string(value, &mut self.buf)
  }
}

impl<const N: usize> Default for CBuf<N> {
  #[inline(always)]
  fn default() -> Self {
    Self::empty()
  }
}

impl<const N: usize> Debug for CBuf<N> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self.to_str() {
      Ok(s) => Debug::fmt(s, f),
      Err(_) => f.debug_list().entries(self.as_bytes()).finish(),
    }
  }
}

impl<const N: usize> Display for CBuf<N> {
  /// Writes the content; fails if it is not valid UTF-8.
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(self.to_str().map_err(|_| fmt::Error)?)
  }
}

impl<const N: usize> Write for CBuf<N> {
  fn write_str(&mut self, s: &str) -> fmt::Result {
    if s.is_empty() {
      return Ok(());
    }
    if self.len() >= N
      || s.len() > self.remaining()
      || s.as_bytes().contains(&NUL)
    {
      return Err(fmt::Error);
    }
    self.push_str(s);
    Ok(())
  }
}

impl<const N: usize> Deref for CBuf<N> {
  type Target = [u8];

  #[inline(always)]
  fn deref(&self) -> &[u8] {
    self.as_bytes()
  }
}

impl<const N: usize> AsRef<[u8]> for CBuf<N> {
  #[inline(always)]
  fn as_ref(&self) -> &[u8] {
    self.as_bytes()
  }
}

impl<const N: usize> Borrow<[u8]> for CBuf<N> {
  #[inline(always)]
  fn borrow(&self) -> &[u8] {
    self.as_bytes()
  }
}

impl<const N: usize> From<char> for CBuf<N> {
  /// Truncates to nothing if the encoded character does not fit.
  #[inline(always)]
  fn from(c: char) -> Self {
    let mut utf8 = [0u8; 4];
    let mut buf = Self::empty();
    if c.len_utf8() < N {
      buf.push_str(c.encode_utf8(&mut utf8));
    }
    buf
  }
}

impl<const N: usize> TryFrom<&[u8]> for CBuf<N> {
  type Error = FromBytesError;

  /// Accepts bytes with or without a single trailing `NUL`.
  #[inline(always)]
  fn try_from(bytes: &[u8]) -> Result<Self, FromBytesError> {
    let text = bytes.strip_suffix(&[NUL]).unwrap_or(bytes);
    if let Some(index) = text.iter().position(|&b| b == NUL) {
      return Err(FromBytesError::InteriorNul { index });
    }
    let len = text.len();
    if len >= N {
      return Err(CapacityError { len, capacity: N }.into());
    }
    let mut buf = Self::empty();
    buf.set(text);
    Ok(buf)
  }
}

impl<const N: usize> TryFrom<&str> for CBuf<N> {
  type Error = FromBytesError;

  #[inline(always)]
  fn try_from(s: &str) -> Result<Self, FromBytesError> {
    Self::try_from(s.as_bytes())
  }
}

impl<const N: usize> FromStr for CBuf<N> {
  type Err = FromBytesError;

  #[inline(always)]
  fn from_str(s: &str) -> Result<Self, FromBytesError> {
    Self::try_from(s)
  }
}

impl<const N: usize> Hash for CBuf<N> {
  #[inline(always)]
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.as_bytes().hash(state);
  }
}

impl<const N: usize, const M: usize> PartialEq<CBuf<M>> for CBuf<N> {
  #[inline(always)]
  fn eq(&self, other: &CBuf<M>) -> bool {
    cstr::compare(&self.buf, &other.buf)
  }
}

impl<const N: usize> Eq for CBuf<N> {}

impl<const N: usize> PartialEq<str> for CBuf<N> {
  #[inline(always)]
  fn eq(&self, other: &str) -> bool {
    self.as_bytes() == other.as_bytes()
  }
}

impl<const N: usize> PartialEq<&str> for CBuf<N> {
  #[inline(always)]
  fn eq(&self, other: &&str) -> bool {
    self.as_bytes() == other.as_bytes()
  }
}

impl<const N: usize> PartialEq<[u8]> for CBuf<N> {
  #[inline(always)]
  fn eq(&self, other: &[u8]) -> bool {
    self.as_bytes() == other
  }
}

impl<const N: usize> PartialEq<CBuf<N>> for str {
  #[inline(always)]
  fn eq(&self, other: &CBuf<N>) -> bool {
    other == self
  }
}

impl<const N: usize> PartialEq<CBuf<N>> for &str {
  #[inline(always)]
  fn eq(&self, other: &CBuf<N>) -> bool {
    other == self
  }
}

impl<const N: usize> PartialOrd for CBuf<N> {
  #[inline(always)]
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl<const N: usize> Ord for CBuf<N> {
  #[inline(always)]
  fn cmp(&self, other: &Self) -> Ordering {
    self.as_bytes().cmp(other.as_bytes())
  }
}

#[cfg(feature = "serde")]
mod serde_impl {
  use core::fmt;

  use serde::Deserialize;
  use serde::Deserializer;
  use serde::Serialize;
  use serde::Serializer;
  use serde::de;
  use serde::de::Unexpected;
  use serde::ser;

  use super::*;

  impl<const N: usize> Serialize for CBuf<N> {
    #[inline(always)]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
      S: Serializer,
    {
      match self.to_str() {
        Ok(s) => serializer.serialize_str(s),
        Err(_) => Err(ser::Error::custom("buffer content is not valid UTF-8")),
      }
    }
  }

  struct CBufVisitor<const N: usize>;

  impl<'de, const N: usize> de::Visitor<'de> for CBufVisitor<N> {
    type Value = CBuf<N>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
      write!(formatter, "a string of at most {} bytes", N.saturating_sub(1))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
      E: de::Error,
    {
      CBuf::try_from(v).map_err(|err| match err {
        FromBytesError::Capacity(err) => E::invalid_length(err.len, &self),
        FromBytesError::InteriorNul { .. } => {
          E::invalid_value(Unexpected::Str(v), &self)
        }
      })
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
    where
      E: de::Error,
    {
      CBuf::try_from(v).map_err(|err| match err {
        FromBytesError::Capacity(err) => E::invalid_length(err.len, &self),
        FromBytesError::InteriorNul { .. } => {
          E::invalid_value(Unexpected::Bytes(v), &self)
        }
      })
    }
  }

  impl<'de, const N: usize> Deserialize<'de> for CBuf<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
      D: Deserializer<'de>,
    {
      deserializer.deserialize_str(CBufVisitor::<N>)
    }
  }
}
