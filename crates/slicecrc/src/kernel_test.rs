//! Kernel testing utilities.
//!
//! Runs every variant of a family on the same input and compares the results
//! with the bitwise reference. Used by the fuzz targets and tests to check
//! cross-kernel equivalence.
//!
//! The reference is always the first entry of the returned vector.

use alloc::vec::Vec;

use crate::{
  crc32::{self, Crc32Tables, Crc32Variant},
  crc32c::{self, Crc32cVariant},
  error::KernelMismatch,
};

/// Result from running a kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KernelResult {
  /// Kernel name (`"reference"` or a variant name such as `"slicing4x8"`).
  pub name: &'static str,
  /// Checksum value, in the convention of the family.
  pub checksum: u32,
}

/// Run every zlib CRC-32 variant on `data` with carry-in `previous`.
///
/// Checksums are finished zlib values (complement in, complement out).
#[must_use]
pub fn run_all_crc32_kernels(tables: &Crc32Tables, data: &[u8], previous: u32) -> Vec<KernelResult> {
  let mut results = Vec::with_capacity(Crc32Variant::ALL.len() + 1);
  results.push(KernelResult {
    name: "reference",
    checksum: crc32::bitwise(data, previous),
  });
  results.extend(Crc32Variant::ALL.into_iter().map(|v| KernelResult {
    name: v.name(),
    checksum: tables.checksum(v, data, previous),
  }));
  results
}

/// Run every Castagnoli variant on `data` starting from raw register `crc`.
///
/// Checksums are raw registers, like the engines themselves.
#[must_use]
pub fn run_all_crc32c_kernels(data: &[u8], crc: u32) -> Vec<KernelResult> {
  let mut results = Vec::with_capacity(Crc32cVariant::ALL.len() + 1);
  results.push(KernelResult {
    name: "reference",
    checksum: crc32c::bitwise(data, crc),
  });
  results.extend(Crc32cVariant::ALL.into_iter().map(|v| KernelResult {
    name: v.name(),
    checksum: crc32c::crc32c(v, data, crc),
  }));
  results
}

/// Verify every zlib variant agrees with the reference.
///
/// Returns the agreed checksum, or the first kernel that disagrees.
pub fn verify_crc32_kernels(tables: &Crc32Tables, data: &[u8], previous: u32) -> Result<u32, KernelMismatch> {
  verify_kernel_agreement(&run_all_crc32_kernels(tables, data, previous), data.len())
}

/// Verify every Castagnoli variant agrees with the reference.
pub fn verify_crc32c_kernels(data: &[u8], crc: u32) -> Result<u32, KernelMismatch> {
  verify_kernel_agreement(&run_all_crc32c_kernels(data, crc), data.len())
}

fn verify_kernel_agreement(results: &[KernelResult], len: usize) -> Result<u32, KernelMismatch> {
  let Some((reference, rest)) = results.split_first() else {
    return Ok(0);
  };

  match rest.iter().find(|r| r.checksum != reference.checksum) {
    Some(bad) => Err(KernelMismatch {
      kernel: bad.name,
      actual: bad.checksum,
      expected: reference.checksum,
      len,
    }),
    None => Ok(reference.checksum),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::initialize_tables;

  fn data(len: usize) -> Vec<u8> {
    let mut state = 0x9E37_79B9_u32;
    (0..len)
      .map(|_| {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state as u8
      })
      .collect()
  }

  #[test]
  fn test_reference_first() {
    let results = run_all_crc32_kernels(initialize_tables(), b"abc", 0);
    assert_eq!(results[0].name, "reference");
    assert_eq!(results.len(), Crc32Variant::ALL.len() + 1);

    let results = run_all_crc32c_kernels(b"abc", !0);
    assert_eq!(results[0].name, "reference");
    assert_eq!(results.len(), Crc32cVariant::ALL.len() + 1);
  }

  #[test]
  fn test_all_kernels_agree() {
    let tables = initialize_tables();
    for len in [0, 1, 2, 3, 4, 7, 8, 15, 16, 31, 32, 33, 257, 1024] {
      let buf = data(len);
      for seed in [0, !0, 0xDEAD_BEEF] {
        assert_eq!(verify_crc32_kernels(tables, &buf, seed), Ok(crc32::bitwise(&buf, seed)));
        assert_eq!(verify_crc32c_kernels(&buf, seed), Ok(crc32c::bitwise(&buf, seed)));
      }
    }
  }

  #[test]
  fn test_check_values() {
    assert_eq!(verify_crc32_kernels(initialize_tables(), b"123456789", 0), Ok(0xCBF4_3926));
    assert_eq!(verify_crc32c_kernels(b"123456789", !0).map(|c| !c), Ok(0xE306_9283));
  }

  #[test]
  fn test_mismatch_names_first_bad_kernel() {
    let results = [
      KernelResult {
        name: "reference",
        checksum: 1,
      },
      KernelResult {
        name: "slicing4",
        checksum: 1,
      },
      KernelResult {
        name: "slicing8",
        checksum: 2,
      },
      KernelResult {
        name: "slicing16",
        checksum: 3,
      },
    ];
    let err = verify_kernel_agreement(&results, 12).unwrap_err();
    assert_eq!(err.kernel, "slicing8");
    assert_eq!(err.actual, 2);
    assert_eq!(err.expected, 1);
    assert_eq!(err.len, 12);
  }
}
