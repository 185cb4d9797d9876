//! CRC-32 (zlib / ISO-HDLC) engines.
//!
//! All functions in this module use the **complement-in / complement-out**
//! convention: the carry-in `previous` is the finished checksum of the data
//! processed so far (0 for a fresh computation), and the return value is a
//! finished checksum again. That makes chunked computation a plain fold:
//!
//! ```rust
//! use slicecrc::initialize_tables;
//!
//! let tables = initialize_tables();
//! let mut crc = 0;
//! for chunk in b"123456789".chunks(4) {
//!   crc = tables.slicing8(chunk, crc);
//! }
//! assert_eq!(crc, 0xCBF4_3926);
//! ```
//!
//! The Castagnoli engines in [`crate::crc32c`] do **not** follow this
//! convention; see that module before mixing the two.

use core::{fmt, str::FromStr};

use crate::{
  common::{
    portable,
    reference::crc32_bitwise,
    tables::{generate_half_byte_table, generate_slicing_tables_32},
  },
  constants::{
    Aligned64,
    crc32::{LEVELS, POLYNOMIAL},
  },
  error::ParseVariantError,
};

#[cfg(test)]
mod proptests;

// ─────────────────────────────────────────────────────────────────────────────
// Variants
// ─────────────────────────────────────────────────────────────────────────────

/// Algorithm variant of the zlib CRC-32 family.
///
/// Every variant computes the same checksum; they differ only in how many
/// bytes one loop iteration consumes and how much table memory they touch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Crc32Variant {
  /// Bit-at-a-time reference, no tables.
  Bitwise,
  /// Nibble-at-a-time with a 16-entry table.
  HalfByte,
  /// Byte-at-a-time with table level 0.
  Byte,
  /// Slicing-by-4.
  Slicing4,
  /// Slicing-by-4, two blocks per iteration.
  Slicing2x4,
  /// Slicing-by-4, four blocks per iteration.
  Slicing4x4,
  /// Slicing-by-8.
  Slicing8,
  /// Slicing-by-8, two blocks per iteration.
  Slicing2x8,
  /// Slicing-by-8, four blocks per iteration.
  Slicing4x8,
  /// Slicing-by-8, two blocks per iteration with hoisted lookups.
  Slicing8Interleaved,
  /// Slicing-by-16.
  Slicing16,
  /// Slicing-by-16, two blocks per iteration.
  Slicing2x16,
}

impl Crc32Variant {
  /// Every variant, slowest first.
  pub const ALL: [Self; 12] = [
    Self::Bitwise,
    Self::HalfByte,
    Self::Byte,
    Self::Slicing4,
    Self::Slicing2x4,
    Self::Slicing4x4,
    Self::Slicing8,
    Self::Slicing2x8,
    Self::Slicing4x8,
    Self::Slicing8Interleaved,
    Self::Slicing16,
    Self::Slicing2x16,
  ];

  /// Variant used when nothing is configured.
  pub const DEFAULT: Self = Self::Slicing16;

  /// Stable, lowercase name (also accepted by [`FromStr`]).
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Bitwise => "bitwise",
      Self::HalfByte => "halfbyte",
      Self::Byte => "byte",
      Self::Slicing4 => "slicing4",
      Self::Slicing2x4 => "slicing2x4",
      Self::Slicing4x4 => "slicing4x4",
      Self::Slicing8 => "slicing8",
      Self::Slicing2x8 => "slicing2x8",
      Self::Slicing4x8 => "slicing4x8",
      Self::Slicing8Interleaved => "slicing8-interleaved",
      Self::Slicing16 => "slicing16",
      Self::Slicing2x16 => "slicing2x16",
    }
  }

  /// Bytes consumed per main-loop iteration.
  ///
  /// Inputs shorter than this are handled entirely by the byte-wise tail.
  #[must_use]
  pub const fn block_bytes(self) -> usize {
    match self {
      Self::Bitwise | Self::HalfByte | Self::Byte => 1,
      Self::Slicing4 => 4,
      Self::Slicing2x4 | Self::Slicing8 => 8,
      Self::Slicing4x4 | Self::Slicing2x8 | Self::Slicing8Interleaved | Self::Slicing16 => 16,
      Self::Slicing4x8 | Self::Slicing2x16 => 32,
    }
  }

  /// Number of 256-entry table levels the variant reads.
  #[must_use]
  pub const fn table_levels(self) -> usize {
    match self {
      Self::Bitwise | Self::HalfByte => 0,
      Self::Byte => 1,
      Self::Slicing4 | Self::Slicing2x4 | Self::Slicing4x4 => 4,
      Self::Slicing8 | Self::Slicing2x8 | Self::Slicing4x8 | Self::Slicing8Interleaved => 8,
      Self::Slicing16 | Self::Slicing2x16 => 16,
    }
  }
}

impl Default for Crc32Variant {
  #[inline]
  fn default() -> Self {
    Self::DEFAULT
  }
}

impl fmt::Display for Crc32Variant {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for Crc32Variant {
  type Err = ParseVariantError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("half-byte") {
      return Ok(Self::HalfByte);
    }
    Self::ALL
      .into_iter()
      .find(|v| variant_name_matches(v.name(), s))
      .ok_or(ParseVariantError::new())
  }
}

/// Case-insensitive name comparison that treats `_` and `-` alike.
pub(crate) fn variant_name_matches(name: &str, input: &str) -> bool {
  name.len() == input.len()
    && name
      .bytes()
      .zip(input.bytes())
      .all(|(a, b)| a.eq_ignore_ascii_case(&if b == b'_' { b'-' } else { b }))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tables
// ─────────────────────────────────────────────────────────────────────────────

/// The zlib CRC-32 lookup tables: 16 slicing levels plus the half-byte table.
///
/// Built from [`POLYNOMIAL`] by [`Crc32Tables::new`] (a `const fn`, so it can
/// run at compile time or at run time) and never mutated afterwards. Every
/// engine borrows the tables, so a checksum can only be computed once the
/// tables exist. The value is `Sync` and can be shared freely.
///
/// Memory: 16 × 256 × 4 = 16 KiB, plus 64 bytes for the half-byte table.
#[derive(Clone, PartialEq, Eq)]
pub struct Crc32Tables {
  levels: Aligned64<[[u32; 256]; LEVELS]>,
  half: [u32; 16],
}

impl Crc32Tables {
  /// Build the tables from the zlib polynomial.
  ///
  /// Every call produces identical contents.
  #[must_use]
  pub const fn new() -> Self {
    let levels = generate_slicing_tables_32::<LEVELS>(POLYNOMIAL);
    let half = generate_half_byte_table(&levels[0]);
    Self {
      levels: Aligned64(levels),
      half,
    }
  }

  /// All 16 slicing levels.
  #[inline]
  #[must_use]
  pub const fn levels(&self) -> &[[u32; 256]; LEVELS] {
    &self.levels.0
  }

  /// Level `k`, if it exists.
  #[inline]
  #[must_use]
  pub fn level(&self, k: usize) -> Option<&[u32; 256]> {
    self.levels.0.get(k)
  }

  /// The 16-entry half-byte table (`level0[16 * i]`).
  #[inline]
  #[must_use]
  pub const fn half_byte_table(&self) -> &[u32; 16] {
    &self.half
  }

  #[inline]
  fn level0(&self) -> &[u32; 256] {
    let [level0, ..] = &self.levels.0;
    level0
  }

  // ───────────────────────────────────────────────────────────────────────────
  // Engines
  // ───────────────────────────────────────────────────────────────────────────

  /// Bitwise reference; does not read the tables.
  #[inline]
  #[must_use]
  pub fn bitwise(&self, data: &[u8], previous: u32) -> u32 {
    bitwise(data, previous)
  }

  /// Half-byte engine: two 4-bit steps per byte.
  #[inline]
  #[must_use]
  pub fn halfbyte(&self, data: &[u8], previous: u32) -> u32 {
    !portable::half_byte(!previous, data, &self.half)
  }

  /// Byte-at-once engine (Sarwate).
  #[inline]
  #[must_use]
  pub fn byte(&self, data: &[u8], previous: u32) -> u32 {
    !portable::bytewise(!previous, data, self.level0())
  }

  /// Slicing-by-4: 4 bytes per iteration.
  #[inline]
  #[must_use]
  pub fn slicing4(&self, data: &[u8], previous: u32) -> u32 {
    !portable::slice_by::<1, 1, LEVELS>(!previous, data, &self.levels.0)
  }

  /// Slicing-by-4, unrolled twice: 8 bytes per iteration.
  #[inline]
  #[must_use]
  pub fn slicing2x4(&self, data: &[u8], previous: u32) -> u32 {
    !portable::slice_by::<1, 2, LEVELS>(!previous, data, &self.levels.0)
  }

  /// Slicing-by-4, unrolled four times: 16 bytes per iteration.
  #[inline]
  #[must_use]
  pub fn slicing4x4(&self, data: &[u8], previous: u32) -> u32 {
    !portable::slice_by::<1, 4, LEVELS>(!previous, data, &self.levels.0)
  }

  /// Slicing-by-8: 8 bytes per iteration.
  #[inline]
  #[must_use]
  pub fn slicing8(&self, data: &[u8], previous: u32) -> u32 {
    !portable::slice_by::<2, 1, LEVELS>(!previous, data, &self.levels.0)
  }

  /// Slicing-by-8, unrolled twice: 16 bytes per iteration.
  #[inline]
  #[must_use]
  pub fn slicing2x8(&self, data: &[u8], previous: u32) -> u32 {
    !portable::slice_by::<2, 2, LEVELS>(!previous, data, &self.levels.0)
  }

  /// Slicing-by-8, unrolled four times: 32 bytes per iteration.
  #[inline]
  #[must_use]
  pub fn slicing4x8(&self, data: &[u8], previous: u32) -> u32 {
    !portable::slice_by::<2, 4, LEVELS>(!previous, data, &self.levels.0)
  }

  /// Two slicing-by-8 steps per iteration with the register-independent
  /// lookups issued first.
  #[inline]
  #[must_use]
  pub fn slicing8_interleaved(&self, data: &[u8], previous: u32) -> u32 {
    !portable::slice8_interleaved(!previous, data, &self.levels.0)
  }

  /// Slicing-by-16: 16 bytes per iteration.
  #[inline]
  #[must_use]
  pub fn slicing16(&self, data: &[u8], previous: u32) -> u32 {
    !portable::slice_by::<4, 1, LEVELS>(!previous, data, &self.levels.0)
  }

  /// Slicing-by-16, unrolled twice: 32 bytes per iteration.
  #[inline]
  #[must_use]
  pub fn slicing2x16(&self, data: &[u8], previous: u32) -> u32 {
    !portable::slice_by::<4, 2, LEVELS>(!previous, data, &self.levels.0)
  }

  /// Compute the checksum with an explicit variant.
  #[must_use]
  pub fn checksum(&self, variant: Crc32Variant, data: &[u8], previous: u32) -> u32 {
    match variant {
      Crc32Variant::Bitwise => self.bitwise(data, previous),
      Crc32Variant::HalfByte => self.halfbyte(data, previous),
      Crc32Variant::Byte => self.byte(data, previous),
      Crc32Variant::Slicing4 => self.slicing4(data, previous),
      Crc32Variant::Slicing2x4 => self.slicing2x4(data, previous),
      Crc32Variant::Slicing4x4 => self.slicing4x4(data, previous),
      Crc32Variant::Slicing8 => self.slicing8(data, previous),
      Crc32Variant::Slicing2x8 => self.slicing2x8(data, previous),
      Crc32Variant::Slicing4x8 => self.slicing4x8(data, previous),
      Crc32Variant::Slicing8Interleaved => self.slicing8_interleaved(data, previous),
      Crc32Variant::Slicing16 => self.slicing16(data, previous),
      Crc32Variant::Slicing2x16 => self.slicing2x16(data, previous),
    }
  }

  /// Compute the checksum with the configured default variant.
  ///
  /// See [`crate::config::crc32`].
  #[inline]
  #[must_use]
  pub fn compute(&self, data: &[u8], previous: u32) -> u32 {
    self.checksum(crate::config::crc32().variant, data, previous)
  }
}

impl Default for Crc32Tables {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Debug for Crc32Tables {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Crc32Tables")
      .field("polynomial", &format_args!("{POLYNOMIAL:#010x}"))
      .field("levels", &LEVELS)
      .finish_non_exhaustive()
  }
}

/// Process-wide zlib tables.
///
/// The tables are built on the first call and every later call returns the
/// same instance. Callers that want to own their tables can use
/// [`Crc32Tables::new`] instead.
#[cfg(feature = "std")]
#[must_use]
pub fn initialize_tables() -> &'static Crc32Tables {
  use std::sync::OnceLock;
  static TABLES: OnceLock<Crc32Tables> = OnceLock::new();
  TABLES.get_or_init(|| {
    log::trace!("building CRC-32 slicing tables ({LEVELS} levels, poly {POLYNOMIAL:#010x})");
    Crc32Tables::new()
  })
}

/// Process-wide zlib tables.
///
/// Without `std` the tables are evaluated at compile time.
#[cfg(not(feature = "std"))]
#[must_use]
pub fn initialize_tables() -> &'static Crc32Tables {
  static TABLES: Crc32Tables = Crc32Tables::new();
  &TABLES
}

/// Bitwise CRC-32 reference (complement in, complement out).
///
/// Needs no tables. Every other engine must match it for every input.
///
/// # Example
///
/// ```
/// assert_eq!(slicecrc::crc32::bitwise(b"123456789", 0), 0xCBF4_3926);
/// assert_eq!(slicecrc::crc32::bitwise(b"", 0), 0);
/// ```
#[inline]
#[must_use]
pub fn bitwise(data: &[u8], previous: u32) -> u32 {
  !crc32_bitwise(POLYNOMIAL, !previous, data)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
