//! Error types.
//!
//! Checksum computation itself cannot fail. Errors only arise when a variant
//! is named by string (configuration, CLI-style input) or when the kernel
//! self-check finds a disagreement.

use core::fmt;

/// A variant name did not match any known algorithm.
///
/// Intentionally opaque: the set of accepted names is the `name()` of each
/// entry in `Crc32Variant::ALL` / `Crc32cVariant::ALL`.
///
/// # Examples
///
/// ```
/// use slicecrc::{Crc32Variant, ParseVariantError};
///
/// assert_eq!("slicing64".parse::<Crc32Variant>(), Err(ParseVariantError::new()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct ParseVariantError;

impl ParseVariantError {
  /// Create a new parse error.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for ParseVariantError {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for ParseVariantError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("unknown CRC variant")
  }
}

impl core::error::Error for ParseVariantError {}

/// A kernel produced a different checksum than the bitwise reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KernelMismatch {
  /// Name of the disagreeing kernel.
  pub kernel: &'static str,
  /// Checksum the kernel produced.
  pub actual: u32,
  /// Checksum of the reference.
  pub expected: u32,
  /// Input length in bytes.
  pub len: usize,
}

impl fmt::Display for KernelMismatch {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "kernel {} produced {:#010x}, reference produced {:#010x} (len={})",
      self.kernel, self.actual, self.expected, self.len
    )
  }
}

impl core::error::Error for KernelMismatch {}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::string::ToString;

  use super::*;

  #[test]
  fn test_parse_error_display() {
    assert_eq!(ParseVariantError::new().to_string(), "unknown CRC variant");
    assert_eq!(ParseVariantError::default(), ParseVariantError::new());
  }

  #[test]
  fn test_kernel_mismatch_display() {
    let err = KernelMismatch {
      kernel: "crc32/slicing8",
      actual: 0x1,
      expected: 0xCBF4_3926,
      len: 9,
    };
    assert_eq!(
      err.to_string(),
      "kernel crc32/slicing8 produced 0x00000001, reference produced 0xcbf43926 (len=9)"
    );
  }

  #[test]
  fn test_is_core_error() {
    fn assert_error<E: core::error::Error>(_: &E) {}
    assert_error(&ParseVariantError::new());
  }
}
