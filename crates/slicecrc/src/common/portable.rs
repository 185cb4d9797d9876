//! Portable CRC-32 kernels using lookup table algorithms.
//!
//! Every kernel here works on the raw (already complemented) register and
//! leaves the entry/exit convention to the caller. The family is:
//!
//! - [`half_byte`]: 4 bits per step through a 16-entry table
//! - [`bytewise`]: 8 bits per step through level 0 (Sarwate)
//! - [`slice_by`]: `WORDS` little-endian words per block, `UNROLL` blocks
//!   per loop iteration, over a table set of `L` levels
//! - [`slice8_interleaved`]: two slicing-by-8 blocks per iteration with the
//!   register-independent lookups hoisted
//!
//! # Algorithm Overview
//!
//! For a block of `W` words the running register is XORed into the first
//! word. Word `k` then feeds its four bytes (LSB first) through levels
//! `D+3, D+2, D+1, D` with `D = 4 * (W - 1 - k)`, and the `4W` lookups are
//! XOR-reduced into the new register. Words are always decoded with
//! `u32::from_le_bytes`, so the lane order is the same on every host and no
//! alignment is required.
//!
//! Any bytes that do not fill a whole loop iteration are processed with
//! [`bytewise`].
//!
//! # Performance Characteristics
//!
//! | Algorithm | Bytes/iter | Tables |
//! |-----------|------------|--------|
//! | half-byte | 0.5 | 16×u32 |
//! | bytewise | 1 | 1×256×u32 |
//! | slice-by-4 | 4 | 4×256×u32 |
//! | slice-by-8 | 8 | 8×256×u32 |
//! | slice-by-16 | 16 | 16×256×u32 |

// SAFETY: All array indexing in this module uses bounded indices:
// - byte lanes are masked with `& 0xFF` (0..255) or `& 0x0F` (0..15)
// - table levels are `depth + 0..=3` with `depth + 3 < L` checked at compile time
// - block word offsets come from `as_chunks` / `chunks_exact`
#![allow(clippy::indexing_slicing)]

/// Update CRC-32 state one byte at a time using level 0.
#[inline]
pub fn bytewise(mut crc: u32, data: &[u8], table: &[u32; 256]) -> u32 {
  for &byte in data {
    let index = ((crc ^ byte as u32) & 0xFF) as usize;
    crc = (crc >> 8) ^ table[index];
  }
  crc
}

/// Update CRC-32 state one nibble at a time (low nibble first).
#[inline]
pub fn half_byte(mut crc: u32, data: &[u8], table: &[u32; 16]) -> u32 {
  for &byte in data {
    crc = table[((crc ^ byte as u32) & 0x0F) as usize] ^ (crc >> 4);
    crc = table[((crc ^ (byte >> 4) as u32) & 0x0F) as usize] ^ (crc >> 4);
  }
  crc
}

/// Reduce one 32-bit word through levels `depth..depth + 4`.
#[inline(always)]
fn lane<const L: usize>(tables: &[[u32; 256]; L], word: u32, depth: usize) -> u32 {
  tables[depth + 3][(word & 0xFF) as usize]
    ^ tables[depth + 2][((word >> 8) & 0xFF) as usize]
    ^ tables[depth + 1][((word >> 16) & 0xFF) as usize]
    ^ tables[depth][(word >> 24) as usize]
}

/// One slicing-by-`4 * WORDS` step over exactly `WORDS` words.
#[inline(always)]
fn slice_block<const WORDS: usize, const L: usize>(crc: u32, block: &[[u8; 4]], tables: &[[u32; 256]; L]) -> u32 {
  debug_assert_eq!(block.len(), WORDS);

  let mut next = 0u32;
  let mut carry = crc;
  let mut depth = 4 * WORDS;
  for word in block {
    depth -= 4;
    next ^= lane(tables, u32::from_le_bytes(*word) ^ carry, depth);
    carry = 0;
  }
  next
}

/// Update CRC-32 state using slice-by-`4 * WORDS`, unrolled `UNROLL` times.
///
/// # Arguments
///
/// * `crc` - Current CRC state (raw register)
/// * `data` - Input data
/// * `tables` - At least `4 * WORDS` levels (256 entries each)
///
/// Every byte past the last whole `4 * WORDS * UNROLL` stride goes through
/// [`bytewise`], so the result never depends on how the length relates to
/// the block size.
#[inline]
pub fn slice_by<const WORDS: usize, const UNROLL: usize, const L: usize>(
  mut crc: u32,
  data: &[u8],
  tables: &[[u32; 256]; L],
) -> u32 {
  const {
    assert!(WORDS > 0 && UNROLL > 0);
    assert!(4 * WORDS <= L, "not enough table levels for the block size");
  }

  let stride = WORDS * UNROLL;
  let (words, _) = data.as_chunks::<4>();
  let mut strides = words.chunks_exact(stride);

  for group in strides.by_ref() {
    for block in group.chunks_exact(WORDS) {
      crc = slice_block::<WORDS, L>(crc, block, tables);
    }
  }

  let consumed = (words.len() - strides.remainder().len()) * 4;
  bytewise(crc, &data[consumed..], &tables[0])
}

/// Update CRC-32 state 16 bytes at a time as two interleaved slicing-by-8 steps.
///
/// The lookups of each step's second word do not depend on the running
/// register, so they are issued before the dependent first-word lookups.
/// Produces the same state as `slice_by::<2, 2, L>`.
#[inline]
pub fn slice8_interleaved<const L: usize>(mut crc: u32, data: &[u8], tables: &[[u32; 256]; L]) -> u32 {
  const {
    assert!(L >= 8, "slicing-by-8 needs 8 table levels");
  }

  let (blocks, remainder) = data.as_chunks::<16>();

  for block in blocks {
    let one = u32::from_le_bytes([block[0], block[1], block[2], block[3]]);
    let two = u32::from_le_bytes([block[4], block[5], block[6], block[7]]);
    let three = u32::from_le_bytes([block[8], block[9], block[10], block[11]]);
    let four = u32::from_le_bytes([block[12], block[13], block[14], block[15]]);

    let hoisted = lane(tables, two, 0);
    crc = hoisted ^ lane(tables, one ^ crc, 4);

    let hoisted = lane(tables, four, 0);
    crc = hoisted ^ lane(tables, three ^ crc, 4);
  }

  bytewise(crc, remainder, &tables[0])
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
