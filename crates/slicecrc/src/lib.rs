//! Table-driven CRC-32 checksums with slicing-by-N kernels.
//!
//! This crate implements the classic family of software CRC-32 algorithms
//! for two reflected polynomials, all verified bit-for-bit against a
//! bitwise reference:
//!
//! | Family | Polynomial | Tables | Convention |
//! |--------|------------|--------|------------|
//! | [`crc32`] (zlib, ISO-HDLC) | 0xEDB88320 | 16×256×u32, built by [`Crc32Tables::new`] | complement in / complement out |
//! | [`crc32c`] (Castagnoli) | 0x82F63B78 | 8×256×u32, compile-time constant | **raw register**, caller complements |
//!
//! # Variants
//!
//! | Algorithm | Bytes/iter | zlib | CRC32C |
//! |-----------|------------|------|--------|
//! | bitwise | 1 bit | ✓ | reference only |
//! | half-byte | 4 bits | ✓ | - |
//! | byte-at-once | 1 | ✓ | tail path |
//! | slicing-by-4 (1×/2×/4×) | 4/8/16 | ✓ | ✓ |
//! | slicing-by-8 (1×/2×/4×) | 8/16/32 | ✓ | ✓ |
//! | slicing-by-8 interleaved | 16 | ✓ | - |
//! | slicing-by-16 (1×/2×) | 16/32 | ✓ | - |
//!
//! # Example
//!
//! ```rust
//! use slicecrc::{Crc32Variant, crc32c, initialize_tables};
//!
//! let tables = initialize_tables();
//! let data = b"123456789";
//!
//! // zlib CRC-32: complement handled internally, carry-in defaults to 0.
//! assert_eq!(tables.slicing16(data, 0), 0xCBF4_3926);
//! assert_eq!(tables.checksum(Crc32Variant::Slicing4x8, data, 0), 0xCBF4_3926);
//!
//! // Chunked computation through the carry-in checksum.
//! let (a, b) = data.split_at(4);
//! assert_eq!(tables.slicing8(b, tables.slicing8(a, 0)), 0xCBF4_3926);
//!
//! // CRC-32C: raw register, the caller applies the complement.
//! assert_eq!(!crc32c::slicing8(data, !0), 0xE306_9283);
//! assert_eq!(crc32c::checksum(data), 0xE306_9283);
//! ```
//!
//! # no_std Support
//!
//! The crate is `no_std` compatible. Disable the `std` feature for embedded
//! use; [`initialize_tables`] then returns a compile-time evaluated table set.
//!
//! ```toml
//! [dependencies]
//! slicecrc = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod common;
mod constants;

pub mod config;
pub mod crc32;
pub mod crc32c;
pub mod error;
pub mod introspect;
#[cfg(feature = "alloc")]
pub mod kernel_test;

pub use common::reference;
pub use crc32::{Crc32Tables, Crc32Variant, initialize_tables};
pub use crc32c::{CastagnoliTables, Crc32cVariant};
pub use error::{KernelMismatch, ParseVariantError};
