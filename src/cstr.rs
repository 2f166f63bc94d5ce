//! Length, comparison and search over NUL-terminated byte strings.
//!
//! A string here is any `&[u8]` whose content ends at the first [`NUL`]
//! byte. A slice without a sentinel is read up to its full length, so none
//! of these functions can read out of bounds.

/// The sentinel byte that ends every string.
pub const NUL: u8 = 0x00;

/// Returns the number of bytes before the sentinel.
///
/// ```rust
/// assert_eq!(nulstr::length(b"hello\0world"), 5);
/// assert_eq!(nulstr::length(b"\0"), 0);
/// assert_eq!(nulstr::length(b"abc"), 3);
/// ```
#[inline]
pub fn length(s: &[u8]) -> usize {
  s.iter().position(|&b| b == NUL).unwrap_or(s.len())
}

/// Returns the content of `s`, without the sentinel and anything after it.
#[inline]
pub fn content(s: &[u8]) -> &[u8] {
  &s[..length(s)]
}

/// Returns `true` if both strings have the same length and the same bytes.
///
/// Bytes after the sentinel are ignored, so buffers of different capacity
/// compare equal when their content matches.
pub fn compare(a: &[u8], b: &[u8]) -> bool {
  let a = content(a);
  let b = content(b);
  if a.len() != b.len() {
    return false;
  }
  a.iter().zip(b).all(|(x, y)| x == y)
}

/// Returns the index of the first occurrence of `needle` in `s`.
///
/// Shorthand for [`find_from`] with a start of `0`.
#[inline]
pub fn find(s: &[u8], needle: &[u8]) -> Option<usize> {
  find_from(s, needle, 0)
}

/// Returns the index of the first occurrence of `needle` in `s` at or after
/// `start`.
///
/// Returns `None` if `start` is at or past the end of `s`, if the needle
/// does not occur, or if the needle is empty.
///
/// ```rust
/// use nulstr::find_from;
///
/// assert_eq!(find_from(b"abcabc\0", b"bc\0", 0), Some(1));
/// assert_eq!(find_from(b"abcabc\0", b"bc\0", 2), Some(4));
/// assert_eq!(find_from(b"abcabc\0", b"bc\0", 6), None);
/// assert_eq!(find_from(b"abcabc\0", b"\0", 0), None);
/// ```
pub fn find_from(s: &[u8], needle: &[u8], start: usize) -> Option<usize> {
  let haystack = content(s);
  let needle = content(needle);
  if start >= haystack.len() || needle.is_empty() {
    return None;
  }
  haystack[start..]
    .windows(needle.len())
    .position(|window| window == needle)
    .map(|i| i + start)
}
