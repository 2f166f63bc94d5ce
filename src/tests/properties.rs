//! Properties that hold for every input, checked with quickcheck.

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

use crate::*;

/// Turns arbitrary bytes into a terminated string without interior `NUL`s.
fn terminated(mut bytes: Vec<u8>) -> Vec<u8> {
  bytes.retain(|&b| b != NUL);
  bytes.push(NUL);
  bytes
}

#[quickcheck]
fn copy_preserves_length_when_it_fits(src: Vec<u8>) -> bool {
  let src = terminated(src);
  let mut dest = vec![0xffu8; src.len()];
  copy(&mut dest, &src) == length(&src) && length(&dest) == length(&src)
}

#[quickcheck]
fn copy_never_exceeds_capacity(src: Vec<u8>, capacity: u8) -> bool {
  let src = terminated(src);
  let mut dest = vec![0xffu8; usize::from(capacity)];
  let len = copy(&mut dest, &src);
  match dest.len() {
    0 => len == 0,
    cap => len < cap && dest[len] == NUL && len == length(&dest),
  }
}

#[quickcheck]
fn compare_is_reflexive(s: Vec<u8>) -> bool {
  let s = terminated(s);
  compare(&s, &s)
}

#[quickcheck]
fn compare_is_symmetric(a: Vec<u8>, b: Vec<u8>) -> bool {
  compare(&a, &b) == compare(&b, &a)
}

#[quickcheck]
fn integer_round_trip(n: u16) -> bool {
  let mut buf = [0xffu8; 6];
  let rendered = integer_to_string(n, &mut buf).is_ok();
  rendered && string_to_integer::<u16>(&buf) == Ok(n)
}

#[quickcheck]
fn integer_round_trip_u64(n: u64) -> bool {
  let mut buf = [0u8; 21];
  integer_to_string(n, &mut buf).is_ok()
    && string_to_integer::<u64>(&buf) == Ok(n)
}

#[quickcheck]
fn append_terminates_at_returned_length(
  dest: Vec<u8>,
  src: Vec<u8>,
  capacity: u8,
) -> TestResult {
  let capacity = usize::from(capacity);
  if capacity == 0 {
    return TestResult::discard();
  }
  let mut buf = vec![0u8; capacity];
  let before = copy(&mut buf, &terminated(dest));
  let src = terminated(src);
  let len = append(&mut buf, &src);
  let expected = (before + length(&src)).min(capacity - 1);
  TestResult::from_bool(
    len == expected && buf[len] == NUL && length(&buf) == len,
  )
}

#[quickcheck]
fn append_keeps_prefix(dest: Vec<u8>, src: Vec<u8>) -> bool {
  let dest = terminated(dest);
  let src = terminated(src);
  let mut buf = vec![0u8; 64];
  let before = copy(&mut buf, &dest);
  let prefix = buf[..before].to_vec();
  let len = append(&mut buf, &src);
  buf[..before] == prefix[..] && buf[before..len] == src[..len - before]
}

#[quickcheck]
fn find_reports_a_real_match(s: Vec<u8>, needle: Vec<u8>, start: u8) -> bool {
  let s = terminated(s);
  let needle = terminated(needle);
  let start = usize::from(start);
  match find_from(&s, &needle, start) {
    Some(i) => {
      let needle = content(&needle);
      i >= start && s[i..i + needle.len()] == needle[..]
    }
    None => true,
  }
}

#[quickcheck]
fn find_locates_an_embedded_needle(
  prefix: Vec<u8>,
  needle: Vec<u8>,
  suffix: Vec<u8>,
) -> TestResult {
  let needle = terminated(needle);
  if needle.len() == 1 {
    return TestResult::discard();
  }
  let mut s = terminated(prefix);
  s.pop();
  let at = s.len();
  s.extend_from_slice(content(&needle));
  s.extend_from_slice(&terminated(suffix));
  TestResult::from_bool(find(&s, &needle).is_some_and(|i| i <= at))
}

#[quickcheck]
fn slice_matches_subslice(s: Vec<u8>, start: u8, end: u8) -> bool {
  let s = terminated(s);
  let (start, end) = (usize::from(start), usize::from(end));
  let mut dest = vec![0u8; 256];
  let len = slice(&mut dest, &s, start, end);
  let text = content(&s);
  let end = end.min(text.len());
  let start = start.min(end);
  dest[..len] == text[start..end] && dest[len] == NUL
}

#[quickcheck]
fn binary_has_one_glyph_per_bit(n: u16) -> bool {
  let mut buf = [0u8; 17];
  let len = binary_to_string(n, &mut buf);
  let ones = buf[..len].iter().filter(|&&b| b == b'1').count();
  len == 16 && buf[16] == NUL && ones == n.count_ones() as usize
}

#[quickcheck]
fn float_output_is_always_terminated(
  value: f32,
  capacity: u8,
  precision: u8,
) -> bool {
  let precision = precision % 8;
  let mut buf = vec![0xffu8; usize::from(capacity % 16)];
  match float_to_string(value, &mut buf, precision) {
    Ok(len) => buf[len] == NUL && length(&buf) == len,
    Err(FormatError::BufferTooSmall { .. }) => buf.iter().all(|&b| b == NUL),
    Err(err) => err.glyph() == Some(buf[0]) && buf[1] == NUL,
  }
}

#[quickcheck]
fn float_integer_part_matches(value: u16) -> bool {
  let value = value % 1000;
  let mut buf = [0u8; 8];
  float_to_string(f32::from(value), &mut buf, 0).is_ok()
    && string_to_integer::<u16>(&buf) == Ok(value)
}
