//! Immutable, reference-counted byte strings over shared fixed-capacity
//! buffers.
//!
//! The central type is [`ByteString`], a `(buffer, offset, length)` view into
//! a [`Buffer`]: cloning and slicing are O(1) and never copy bytes. Strings
//! are built through the construction primitives in [`construct`], which hand
//! a caller-supplied filler exclusive, bounds-checked write access to a fresh
//! allocation and freeze the result. The allocation-free byte primitives in
//! [`raw`] underpin everything else and are exported for higher-level text
//! libraries to build on.
//!
//! ```rust
//! use bytespan::{ByteString, construct};
//!
//! let s = construct::create(5, |dst| dst.copy_from_slice(b"hello"));
//! assert_eq!(s, b"hello"[..]);
//!
//! // Slicing shares the buffer; no bytes are copied.
//! let ell = s.slice(1..4);
//! assert_eq!(ell, b"ell"[..]);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
mod bytestring;
mod error;

pub mod construct;
pub mod latin1;
pub mod raw;

#[cfg(feature = "serde")]
mod serde_impls;


pub use buffer::Buffer;
pub use bytestring::ByteString;
pub use error::BoundsError;
