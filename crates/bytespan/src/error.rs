use thiserror::Error;

/// A rejected zero-copy construction: the requested `(offset, length)` view
/// does not fit inside the buffer's capacity.
///
/// Produced only by [`crate::ByteString::from_buffer`], the one checked
/// boundary where untrusted triples enter the crate. Every other constructor
/// establishes the bounds invariant itself, so the raw primitives never need
/// to re-check it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("byte string view out of bounds: offset={offset} + len={len} exceeds capacity {capacity}")]
pub struct BoundsError {
    /// The offset the caller asked for.
    pub offset: usize,
    /// The length the caller asked for.
    pub len: usize,
    /// The capacity of the buffer the view was requested against.
    pub capacity: usize,
}
