//! Const-fn CRC-32 lookup table generation.
//!
//! Tables are computed with `const fn`, so the same code builds the
//! Castagnoli set at compile time and the zlib set at run time.
//!
//! # Table Structure
//!
//! A slicing table set holds `N` levels of 256 entries:
//! - Level 0: CRC contribution of each byte value (the classic Sarwate table)
//! - Level k: CRC contribution of a byte followed by `k` zero bytes
//!
//! Level `k` is derived from level `k - 1` by pushing one more zero byte
//! through the level 0 table. Because the CRC is linear over GF(2), the
//! remainder of an N-byte block is the XOR of the per-position contributions,
//! which is what lets slice-by-N combine N lookups with XOR.

// SAFETY: All array indexing in this module uses bounded loop indices (0..256, 0..N).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

/// Generate a single CRC-32 lookup table entry.
///
/// Eight rounds of the reflected shift register seeded with `index`.
#[must_use]
pub const fn crc32_table_entry(poly: u32, index: u8) -> u32 {
  let mut crc = index as u32;
  let mut i = 0;
  while i < 8 {
    crc = (crc >> 1) ^ (poly & 0u32.wrapping_sub(crc & 1));
    i += 1;
  }
  crc
}

/// Generate the base CRC-32 lookup table (level 0) for a reflected polynomial.
#[must_use]
pub const fn generate_table_0_32(poly: u32) -> [u32; 256] {
  let mut table = [0u32; 256];
  let mut i = 0usize;
  while i < 256 {
    table[i] = crc32_table_entry(poly, i as u8);
    i += 1;
  }
  table
}

/// Generate `N` slicing levels for a 32-bit reflected polynomial.
///
/// `level[k][i] = (level[k-1][i] >> 8) ^ level[0][level[k-1][i] & 0xFF]`
#[must_use]
pub const fn generate_slicing_tables_32<const N: usize>(poly: u32) -> [[u32; 256]; N] {
  let mut tables = [[0u32; 256]; N];
  if N == 0 {
    return tables;
  }
  tables[0] = generate_table_0_32(poly);

  let mut k = 1usize;
  while k < N {
    let mut i = 0usize;
    while i < 256 {
      let prev = tables[k - 1][i];
      tables[k][i] = (prev >> 8) ^ tables[0][(prev & 0xFF) as usize];
      i += 1;
    }
    k += 1;
  }

  tables
}

/// Derive the 16-entry half-byte table from level 0.
///
/// Entry `i` is the remainder of the nibble `i` shifted through four rounds,
/// which equals `level0[16 * i]`.
#[must_use]
pub const fn generate_half_byte_table(level0: &[u32; 256]) -> [u32; 16] {
  let mut table = [0u32; 16];
  let mut i = 0usize;
  while i < 16 {
    table[i] = level0[16 * i];
    i += 1;
  }
  table
}
