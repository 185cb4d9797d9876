//! CRC-32C (Castagnoli) slicing engines.
//!
//! # Raw register convention
//!
//! **Unlike [`crate::crc32`], the functions in this module do not complement
//! the register on entry or exit.** The `crc` argument is passed straight
//! into the shift register and the register is returned as-is. The standard
//! CRC-32C (iSCSI) checksum is therefore:
//!
//! ```rust
//! use slicecrc::crc32c;
//!
//! let crc = !crc32c::slicing8(b"123456789", !0);
//! assert_eq!(crc, 0xE306_9283);
//! ```
//!
//! Chunked computation carries the *raw* register between calls and
//! complements only once at the very end:
//!
//! ```rust
//! use slicecrc::crc32c;
//!
//! let mut raw = !0;
//! for chunk in b"123456789".chunks(4) {
//!   raw = crc32c::slicing16(chunk, raw);
//! }
//! assert_eq!(!raw, 0xE306_9283);
//! ```
//!
//! Feeding a finished zlib-style checksum into these functions (or the other
//! way round) yields a well-formed but wrong value; there is no way to detect
//! the mix-up at run time. [`checksum`] applies the standard envelope for the
//! common one-shot case.
//!
//! # Tables
//!
//! The eight offset tables are fixed constant data evaluated at compile time
//! (see [`CastagnoliTables`]); nothing has to be initialized before use.
//!
//! # Alignment
//!
//! Bytes before the first 4-byte aligned address of the input go through the
//! byte-wise step, then whole blocks are sliced, then every remaining byte goes
//! through the byte-wise step again. The result does not depend on alignment.

mod portable;

use core::{fmt, str::FromStr};

use crate::{
  common::reference::crc32_bitwise,
  constants::crc32c::{LEVELS, POLYNOMIAL, TABLES},
  crc32::variant_name_matches,
  error::ParseVariantError,
};

// ─────────────────────────────────────────────────────────────────────────────
// Variants
// ─────────────────────────────────────────────────────────────────────────────

/// Algorithm variant of the CRC-32C family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Crc32cVariant {
  /// Slicing-by-4.
  Slicing4,
  /// Slicing-by-4, two blocks per iteration.
  Slicing2x4,
  /// Slicing-by-4, four blocks per iteration.
  Slicing4x4,
  /// Slicing-by-8.
  Slicing8,
  /// Slicing-by-8, two blocks per iteration (16 bytes).
  Slicing16,
  /// Slicing-by-8, four blocks per iteration (32 bytes).
  Slicing32,
}

impl Crc32cVariant {
  /// Every variant, slowest first.
  pub const ALL: [Self; 6] = [
    Self::Slicing4,
    Self::Slicing2x4,
    Self::Slicing4x4,
    Self::Slicing8,
    Self::Slicing16,
    Self::Slicing32,
  ];

  /// Variant used when nothing is configured.
  pub const DEFAULT: Self = Self::Slicing16;

  /// Stable, lowercase name (also accepted by [`FromStr`]).
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Slicing4 => "slicing4",
      Self::Slicing2x4 => "slicing2x4",
      Self::Slicing4x4 => "slicing4x4",
      Self::Slicing8 => "slicing8",
      Self::Slicing16 => "slicing16",
      Self::Slicing32 => "slicing32",
    }
  }

  /// Bytes consumed per main-loop iteration.
  #[must_use]
  pub const fn block_bytes(self) -> usize {
    match self {
      Self::Slicing4 => 4,
      Self::Slicing2x4 | Self::Slicing8 => 8,
      Self::Slicing4x4 | Self::Slicing16 => 16,
      Self::Slicing32 => 32,
    }
  }

  /// Number of offset tables the variant reads.
  #[must_use]
  pub const fn table_levels(self) -> usize {
    match self {
      Self::Slicing4 | Self::Slicing2x4 | Self::Slicing4x4 => 4,
      Self::Slicing8 | Self::Slicing16 | Self::Slicing32 => 8,
    }
  }
}

impl Default for Crc32cVariant {
  #[inline]
  fn default() -> Self {
    Self::DEFAULT
  }
}

impl fmt::Display for Crc32cVariant {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for Crc32cVariant {
  type Err = ParseVariantError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim();
    Self::ALL
      .into_iter()
      .find(|v| variant_name_matches(v.name(), s))
      .ok_or(ParseVariantError::new())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tables
// ─────────────────────────────────────────────────────────────────────────────

/// Read-only view of the Castagnoli offset tables.
///
/// Level `k` holds the contribution of a byte followed by `k` zero bytes
/// (`crc_tableil8_o(32 + 8k)` in Intel's slicing-by-8 naming). The data is a
/// compile-time constant shared by the whole process.
#[derive(Clone, Copy)]
pub struct CastagnoliTables {
  levels: &'static [[u32; 256]; LEVELS],
}

impl CastagnoliTables {
  /// The process-wide constant tables.
  #[inline]
  #[must_use]
  pub fn get() -> Self {
    Self { levels: &TABLES.0 }
  }

  /// All eight offset tables.
  #[inline]
  #[must_use]
  pub const fn levels(&self) -> &'static [[u32; 256]; LEVELS] {
    self.levels
  }

  /// Level `k`, if it exists.
  #[inline]
  #[must_use]
  pub fn level(&self, k: usize) -> Option<&'static [u32; 256]> {
    self.levels.get(k)
  }
}

impl fmt::Debug for CastagnoliTables {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CastagnoliTables")
      .field("polynomial", &format_args!("{POLYNOMIAL:#010x}"))
      .field("levels", &LEVELS)
      .finish_non_exhaustive()
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Engines (raw register in, raw register out)
// ─────────────────────────────────────────────────────────────────────────────

/// Slicing-by-4: 4 bytes per iteration. Raw register; no complement.
#[inline]
#[must_use]
pub fn slicing4(data: &[u8], crc: u32) -> u32 {
  portable::aligned::<1, 1>(crc, data)
}

/// Slicing-by-4 unrolled twice: 8 bytes per iteration. Raw register; no complement.
#[inline]
#[must_use]
pub fn slicing2x4(data: &[u8], crc: u32) -> u32 {
  portable::aligned::<1, 2>(crc, data)
}

/// Slicing-by-4 unrolled four times: 16 bytes per iteration. Raw register; no complement.
#[inline]
#[must_use]
pub fn slicing4x4(data: &[u8], crc: u32) -> u32 {
  portable::aligned::<1, 4>(crc, data)
}

/// Slicing-by-8: 8 bytes per iteration. Raw register; no complement.
#[inline]
#[must_use]
pub fn slicing8(data: &[u8], crc: u32) -> u32 {
  portable::aligned::<2, 1>(crc, data)
}

/// Slicing-by-8 unrolled twice: 16 bytes per iteration. Raw register; no complement.
#[inline]
#[must_use]
pub fn slicing16(data: &[u8], crc: u32) -> u32 {
  portable::aligned::<2, 2>(crc, data)
}

/// Slicing-by-8 unrolled four times: 32 bytes per iteration. Raw register; no complement.
#[inline]
#[must_use]
pub fn slicing32(data: &[u8], crc: u32) -> u32 {
  portable::aligned::<2, 4>(crc, data)
}

/// Run `variant` over `data`. Raw register; no complement.
#[must_use]
pub fn crc32c(variant: Crc32cVariant, data: &[u8], crc: u32) -> u32 {
  match variant {
    Crc32cVariant::Slicing4 => slicing4(data, crc),
    Crc32cVariant::Slicing2x4 => slicing2x4(data, crc),
    Crc32cVariant::Slicing4x4 => slicing4x4(data, crc),
    Crc32cVariant::Slicing8 => slicing8(data, crc),
    Crc32cVariant::Slicing16 => slicing16(data, crc),
    Crc32cVariant::Slicing32 => slicing32(data, crc),
  }
}

/// Run the configured default variant (see [`crate::config::crc32c`]).
/// Raw register; no complement.
#[inline]
#[must_use]
pub fn compute(data: &[u8], crc: u32) -> u32 {
  crc32c(crate::config::crc32c().variant, data, crc)
}

/// Bitwise Castagnoli reference. Raw register; no complement.
#[inline]
#[must_use]
pub const fn bitwise(data: &[u8], crc: u32) -> u32 {
  crc32_bitwise(POLYNOMIAL, crc, data)
}

/// Standard one-shot CRC-32C: `!compute(data, !0)`.
///
/// # Example
///
/// ```
/// assert_eq!(slicecrc::crc32c::checksum(b"123456789"), 0xE306_9283);
/// assert_eq!(slicecrc::crc32c::checksum(b""), 0);
/// ```
#[inline]
#[must_use]
pub fn checksum(data: &[u8]) -> u32 {
  !compute(data, !0)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  extern crate std;

  use alloc::{vec, vec::Vec};

  use super::*;
  use crate::constants::crc32c::CHECK;

  #[test]
  fn test_check_string() {
    for v in Crc32cVariant::ALL {
      assert_eq!(!crc32c(v, b"123456789", !0), CHECK, "{v}");
    }
    assert_eq!(checksum(b"123456789"), CHECK);
  }

  #[test]
  fn test_no_complement_on_entry_or_exit() {
    for v in Crc32cVariant::ALL {
      assert_eq!(crc32c(v, b"", 0), 0, "{v}");
      assert_eq!(crc32c(v, b"", 0x1234_5678), 0x1234_5678, "{v}");
      // A zero register stays zero over zero bytes.
      assert_eq!(crc32c(v, &[0u8; 37], 0), 0, "{v}");
    }
  }

  #[test]
  fn test_known_vectors() {
    assert_eq!(!slicing8(&[0u8; 32], !0), 0x8A91_36AA);
    assert_eq!(!slicing8(&[0xFFu8; 32], !0), 0x62A8_AB43);
    assert_eq!(!slicing4(&[0x00], !0), 0x527D_5351);
  }

  #[test]
  fn test_tail_boundaries_match_bitwise() {
    for v in Crc32cVariant::ALL {
      let n = v.block_bytes();
      for len in [n - 1, n, n + 1, 2 * n + 3] {
        let data: Vec<u8> = (0..len).map(|i| (i as u8) ^ 0x5C).collect();
        for seed in [0u32, !0, 0xE306_9283] {
          assert_eq!(crc32c(v, &data, seed), bitwise(&data, seed), "{v} len={len}");
        }
      }
    }
  }

  #[test]
  fn test_every_misalignment() {
    let backing: Vec<u8> = (0..200u32).map(|i| (i * 7 + 3) as u8).collect();
    for start in 0..8 {
      for len in [0, 1, 3, 4, 5, 12, 31, 33, 100] {
        let data = &backing[start..start + len];
        let expected = bitwise(data, !0);
        for v in Crc32cVariant::ALL {
          assert_eq!(crc32c(v, data, !0), expected, "{v} start={start} len={len}");
        }
      }
    }
  }

  #[test]
  fn test_lengths_not_multiple_of_unrolled_block() {
    // An aligned run of 4-byte words that is not a multiple of the unrolled
    // stride must still consume every byte.
    let data = vec![0xABu8; 4 * 7 + 2];
    let expected = bitwise(&data, !0);
    for v in Crc32cVariant::ALL {
      assert_eq!(crc32c(v, &data, !0), expected, "{v}");
    }
  }

  #[test]
  fn test_incremental_raw_register() {
    let data = b"hello world, this is a test of incremental CRC";
    let oneshot = !slicing32(data, !0);
    for split in 0..data.len() {
      let (a, b) = data.split_at(split);
      for v in Crc32cVariant::ALL {
        let raw = crc32c(v, b, crc32c(v, a, !0));
        assert_eq!(!raw, oneshot, "{v} split={split}");
      }
    }
  }

  #[test]
  fn test_tables_are_constant() {
    let t = CastagnoliTables::get();
    assert!(core::ptr::eq(t.levels(), CastagnoliTables::get().levels()));
    assert_eq!(t.level(0).map(|l| l[1]), Some(0xF26B_8303));
    assert_eq!(t.level(0).map(|l| l[128]), Some(POLYNOMIAL));
    assert!(t.level(LEVELS).is_none());
  }

  #[test]
  fn test_variant_names_round_trip() {
    for v in Crc32cVariant::ALL {
      assert_eq!(v.name().parse::<Crc32cVariant>(), Ok(v));
    }
    assert_eq!(" Slicing32 ".parse::<Crc32cVariant>(), Ok(Crc32cVariant::Slicing32));
    assert!("slicing2x16".parse::<Crc32cVariant>().is_err());
    assert_eq!(Crc32cVariant::default(), Crc32cVariant::Slicing16);
  }

  #[test]
  fn test_matches_crc32c_crate() {
    let data: Vec<u8> = (0..4099u32).map(|i| (i ^ (i >> 3)) as u8).collect();
    for v in Crc32cVariant::ALL {
      assert_eq!(!crc32c(v, &data, !0), ::crc32c::crc32c(&data), "{v}");
    }
  }
}
