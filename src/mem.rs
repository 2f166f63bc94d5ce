//! Raw memory-block fill and copy.
//!
//! Unlike the string functions these have no sentinel semantics: they work
//! on slots of any `Copy` type, typically `u8` for byte buffers and `u16`
//! for word buffers such as display frame memory.

/// Writes `value` into the first `len` slots of `mem`.
///
/// `len` is clamped to `mem.len()`. Returns the number of slots written.
///
/// ```rust
/// let mut words = [0u16; 4];
/// assert_eq!(nulstr::mem_fill(&mut words, 3, 0xf800), 3);
/// assert_eq!(words, [0xf800, 0xf800, 0xf800, 0]);
/// ```
#[inline]
pub fn mem_fill<T: Copy>(mem: &mut [T], len: usize, value: T) -> usize {
  let len = len.min(mem.len());
  mem[..len].fill(value);
  len
}

/// Copies the first `len` slots of `src` into `dest`.
///
/// `len` is clamped to the shorter of the two slices. Returns the number of
/// slots copied.
#[inline]
pub fn mem_copy<T: Copy>(dest: &mut [T], len: usize, src: &[T]) -> usize {
  let len = len.min(dest.len()).min(src.len());
  dest[..len].copy_from_slice(&src[..len]);
  len
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fill_bytes() {
    let mut buf = [1u8; 4];
    assert_eq!(mem_fill(&mut buf, 2, 0xaa), 2);
    assert_eq!(buf, [0xaa, 0xaa, 1, 1]);
  }

  #[test]
  fn fill_does_not_terminate() {
    let mut buf = [7u8; 3];
    assert_eq!(mem_fill(&mut buf, 3, 0), 3);
    assert_eq!(buf, [0, 0, 0]);
    let mut buf = [7u8; 3];
    assert_eq!(mem_fill(&mut buf, 10, 9), 3);
    assert_eq!(buf, [9, 9, 9]);
  }

  #[test]
  fn fill_words() {
    let mut buf = [0u16; 3];
    mem_fill(&mut buf, 3, 0xbeef);
    assert_eq!(buf, [0xbeef; 3]);
  }

  #[test]
  fn copy_bytes_including_nul() {
    let mut dest = [0xffu8; 5];
    assert_eq!(mem_copy(&mut dest, 4, b"a\0b\0"), 4);
    assert_eq!(&dest, b"a\0b\0\xff");
  }

  #[test]
  fn copy_clamps_to_shorter_slice() {
    let mut dest = [0u8; 2];
    assert_eq!(mem_copy(&mut dest, 8, &[1, 2, 3]), 2);
    assert_eq!(dest, [1, 2]);
    let mut dest = [0u16; 4];
    assert_eq!(mem_copy(&mut dest, 8, &[5, 6]), 2);
    assert_eq!(dest, [5, 6, 0, 0]);
  }
}
