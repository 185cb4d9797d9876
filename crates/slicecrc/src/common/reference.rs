//! Bitwise reference implementation for reflected CRC-32.
//!
//! This module provides the canonical "source of truth" for every kernel in
//! the crate. It processes one bit at a time, which makes it:
//!
//! - **Obviously correct**: the loop mirrors the polynomial division directly
//! - **Table-free**: nothing to build before the first call
//! - **Const-evaluable**: check values can be verified at compile time
//!
//! All optimized implementations (half-byte, byte-wise, slice-by-N) must
//! produce identical results to [`crc32_bitwise`] for every input.
//!
//! The conditional XOR is branch-free: `0u32.wrapping_sub(crc & 1)` is either
//! `0x0000_0000` or `0xFFFF_FFFF`, and masks the polynomial accordingly.

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

/// Advance the reflected register by one byte, bit by bit.
#[inline]
#[must_use]
pub const fn crc32_bitwise_byte(poly: u32, mut crc: u32, byte: u8) -> u32 {
  crc ^= byte as u32;
  let mut bit = 0;
  while bit < 8 {
    crc = (crc >> 1) ^ (poly & 0u32.wrapping_sub(crc & 1));
    bit += 1;
  }
  crc
}

/// Bitwise CRC-32 computation (reflected, LSB-first).
///
/// # Arguments
///
/// * `poly` - Reflected polynomial (0xEDB88320 for zlib, 0x82F63B78 for CRC-32C)
/// * `init` - Initial register value (the raw, already complemented state)
/// * `data` - Input bytes
///
/// # Returns
///
/// The raw register state; the caller applies any final XOR.
///
/// # Example
///
/// ```
/// use slicecrc::reference::crc32_bitwise;
///
/// const CHECK: u32 = !crc32_bitwise(0xEDB8_8320, !0, b"123456789");
/// assert_eq!(CHECK, 0xCBF4_3926);
/// ```
#[must_use]
pub const fn crc32_bitwise(poly: u32, init: u32, data: &[u8]) -> u32 {
  let mut crc = init;
  let mut i: usize = 0;
  while i < data.len() {
    crc = crc32_bitwise_byte(poly, crc, data[i]);
    i += 1;
  }
  crc
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::{crc32, crc32c};

  #[test]
  fn test_check_values() {
    assert_eq!(!crc32_bitwise(crc32::POLYNOMIAL, !0, b"123456789"), crc32::CHECK);
    assert_eq!(!crc32_bitwise(crc32c::POLYNOMIAL, !0, b"123456789"), crc32c::CHECK);
  }

  #[test]
  fn test_empty_is_identity() {
    for init in [0u32, 1, 0xDEAD_BEEF, !0] {
      assert_eq!(crc32_bitwise(crc32::POLYNOMIAL, init, &[]), init);
    }
  }

  #[test]
  fn test_single_zero_byte() {
    assert_eq!(!crc32_bitwise(crc32::POLYNOMIAL, !0, &[0]), 0xD202_EF8D);
    assert_eq!(!crc32_bitwise(crc32c::POLYNOMIAL, !0, &[0]), 0x527D_5351);
  }

  #[test]
  fn test_const_evaluation() {
    const CRC: u32 = !crc32_bitwise(crc32c::POLYNOMIAL, !0, b"123456789");
    assert_eq!(CRC, 0xE306_9283);
  }

  #[test]
  fn test_incremental() {
    let data = b"hello world";
    let oneshot = crc32_bitwise(crc32::POLYNOMIAL, !0, data);
    for split in 0..=data.len() {
      let (a, b) = data.split_at(split);
      let crc = crc32_bitwise(crc32::POLYNOMIAL, crc32_bitwise(crc32::POLYNOMIAL, !0, a), b);
      assert_eq!(crc, oneshot, "mismatch at split {split}");
    }
  }
}
