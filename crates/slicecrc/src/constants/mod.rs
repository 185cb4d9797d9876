//! Polynomial constants and table storage for both CRC-32 families.
//!
//! # Cache Alignment
//!
//! Lookup tables are 64-byte (cache line) aligned using [`Aligned64`] so a
//! 256-entry level never straddles more cache lines than it has to.

pub mod crc32;
pub mod crc32c;

/// Wrapper type to force 64-byte (cache line) alignment.
///
/// The inner type `T` is accessible via `.0`.
#[derive(Clone, PartialEq, Eq)]
#[repr(align(64))]
pub struct Aligned64<T>(pub T);
