//! In-place string mutation: fill, copy, append, slice and concatenation.
//!
//! Every function writes into a caller-owned `&mut [u8]` whose length is
//! its capacity, *including* the byte reserved for the sentinel. Output is
//! always NUL-terminated unless the destination is empty, in which case
//! nothing is written. Truncation is silent; each function returns the
//! length of the resulting string so a caller can detect it.

use crate::cstr::NUL;
use crate::cstr::content;
use crate::cstr::length;

/// Largest string length a buffer of `capacity` bytes can hold.
#[inline]
const fn max_len(capacity: usize) -> usize {
  capacity.saturating_sub(1)
}

/// Writes `c` into the first `len` positions of `dest`, followed by the
/// sentinel.
///
/// `len` is clamped to the capacity of `dest`.
///
/// ```rust
/// let mut buf = [0xffu8; 6];
/// assert_eq!(nulstr::fill(&mut buf, 3, b'-'), 3);
/// assert_eq!(&buf[..4], b"---\0");
/// ```
pub fn fill(dest: &mut [u8], len: usize, c: u8) -> usize {
  if dest.is_empty() {
    return 0;
  }
  let len = len.min(max_len(dest.len()));
  dest[..len].fill(c);
  dest[len] = NUL;
  len
}

/// Copies the content of `src` into `dest`, truncating it to fit.
///
/// ```rust
/// let mut buf = [0u8; 4];
/// assert_eq!(nulstr::copy(&mut buf, b"hello\0"), 3);
/// assert_eq!(&buf, b"hel\0");
/// ```
pub fn copy(dest: &mut [u8], src: &[u8]) -> usize {
  if dest.is_empty() {
    return 0;
  }
  let src = content(src);
  let len = src.len().min(max_len(dest.len()));
  dest[..len].copy_from_slice(&src[..len]);
  dest[len] = NUL;
  len
}

/// Appends the content of `src` onto the string already held in `dest`.
///
/// Copies as much of `src` as fits and terminates at the end of what was
/// copied. If `dest` holds no sentinel, its content is cut to make room for
/// one.
///
/// ```rust
/// let mut buf = *b"xy\0\0";
/// assert_eq!(nulstr::append(&mut buf, b"abcdef\0"), 3);
/// assert_eq!(&buf, b"xya\0");
/// ```
pub fn append(dest: &mut [u8], src: &[u8]) -> usize {
  if dest.is_empty() {
    return 0;
  }
  let limit = max_len(dest.len());
  let start = length(dest).min(limit);
  let src = content(src);
  let end = start.saturating_add(src.len()).min(limit);
  dest[start..end].copy_from_slice(&src[..end - start]);
  dest[end] = NUL;
  end
}

/// Copies the half-open range `start..end` of the content of `src` into
/// `dest`.
///
/// The range is clamped to the content of `src`, an inverted range yields
/// the empty string, and the result is truncated to fit `dest`.
///
/// ```rust
/// let mut buf = [0u8; 8];
/// assert_eq!(nulstr::slice(&mut buf, b"hello world\0", 6, 11), 5);
/// assert_eq!(&buf[..6], b"world\0");
/// ```
pub fn slice(dest: &mut [u8], src: &[u8], start: usize, end: usize) -> usize {
  let src = content(src);
  let end = end.min(src.len());
  let start = start.min(end);
  copy(dest, &src[start..end])
}

/// Appends every string in `parts` onto `dest`, in order.
///
/// Each part goes through [`append`], so once `dest` is full the remaining
/// parts add nothing. See [`concat_into!`](crate::concat_into) for the
/// variadic form.
///
/// ```rust
/// let mut buf = [0u8; 16];
/// let len = nulstr::concat(&mut buf, &[b"T=", b"21", b".5C"]);
/// assert_eq!(&buf[..len], b"T=21.5C");
/// ```
pub fn concat(dest: &mut [u8], parts: &[&[u8]]) -> usize {
  let mut len = length(dest).min(max_len(dest.len()));
  for part in parts {
    len = append(dest, part);
  }
  len
}

/// Appends any number of strings onto a buffer.
///
/// Expands to a call to [`concat`](crate::concat); each argument only needs
/// to coerce to `&[u8]`.
///
/// ```rust
/// use nulstr::concat_into;
///
/// let mut buf = [0u8; 8];
/// let len = concat_into!(&mut buf, b"ab", b"cd", b"efgh");
/// assert_eq!(len, 7);
/// assert_eq!(&buf, b"abcdefg\0");
/// ```
#[macro_export]
macro_rules! concat_into {
  ($dest:expr $(, $part:expr)* $(,)?) => {
    $crate::concat($dest, &[$(::core::convert::AsRef::<[u8]>::as_ref($part)),*])
  };
}
