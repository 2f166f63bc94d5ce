//! # nulstr
//!
//! ### NUL-terminated strings for fixed-size buffers
//!
//! This crate is a small collection of string and number routines for
//! resource-constrained targets (8-bit microcontrollers and friends), where
//! every byte of RAM is preallocated and a full formatted-I/O implementation
//! does not fit in flash. Everything operates on caller-owned buffers; no
//! function allocates, grows a buffer, or panics.
//!
//! ---
//!
//! ## Buffers
//!
//! A buffer is a `&mut [u8]` whose length is its *capacity*, including the
//! byte reserved for the `NUL` sentinel. A string is the content of a
//! buffer up to its first sentinel. Every string function writes a
//! terminated result and silently truncates when the destination is short,
//! returning the resulting length so truncation can still be detected.
//!
//! ```rust
//! use nulstr::*;
//!
//! let mut buf = [0u8; 12];
//! copy(&mut buf, b"T=\0");
//! let len = float_to_string(21.5, &mut buf[2..], 1).unwrap();
//! append(&mut buf, b"C\0");
//! assert_eq!(length(&buf), 2 + len + 1);
//! assert!(compare(&buf, b"T=21.5C\0"));
//! assert_eq!(find(&buf, b"21\0"), Some(2));
//! ```
//!
//! ## [`CBuf`]
//!
//! An owned `[u8; N]` with the same operations as methods, for when the
//! buffer should carry its own capacity:
//!
//! ```rust
//! use nulstr::CBuf;
//!
//! let mut bits = CBuf::<9>::empty();
//! bits.write_bits(0b0000_0101u8);
//! assert_eq!(bits, "10100000");
//! ```
//!
//! ## Numeric conversion
//!
//! [`float_to_string`], [`integer_to_string`] and [`binary_to_string`]
//! extract digits by hand instead of going through `core::fmt`. When a value
//! cannot be rendered, the buffer receives a one-character glyph (`<` for
//! out of range, `?` for no room) *and* a [`FormatError`] is returned.
//! [`string_to_integer`] reports invalid digits and overflow as a
//! [`ParseIntError`].
//!
//! ---
//!
//! ## `no_std` Support
//!
//! The crate is `no_std` and never needs `alloc`.
//!
//! ---
//!
//! ## Features
//!
//! - `std`: Links the standard library. Disabled by default.
//! - `serde`†: Serialization and deserialization of [`CBuf`] as a string.
//! - `is_variant`†: `is_*` predicates on the error enums.
//! - `constructors`†: Derived `CBuf::new` constructor.
//! - `index`†: `Index`/`IndexMut` into the raw array of a [`CBuf`].
//!
//! > † enabled by default

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate core;

pub mod cbuf;
pub mod cstr;
pub mod edit;
pub mod error;
pub mod mem;
pub mod num;

#[cfg(test)]
mod tests;

pub use cbuf::*;
pub use cstr::*;
pub use edit::*;
pub use error::*;
pub use mem::*;
pub use num::*;
