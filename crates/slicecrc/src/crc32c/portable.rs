//! Castagnoli driver: byte-wise up to the first aligned word, then slicing.

// SAFETY: the only index is level 0 of a fixed 8-level table set.
#![allow(clippy::indexing_slicing)]

use crate::{
  common::portable::{bytewise, slice_by},
  constants::crc32c::{LEVELS, TABLES},
};

/// Process `data` with slicing-by-`4 * WORDS` unrolled `UNROLL` times.
///
/// The prefix before the first 4-byte aligned address is consumed byte-wise
/// so the sliced loop reads aligned words. [`slice_by`] itself finishes any
/// bytes that do not fill a whole stride.
#[inline]
pub(super) fn aligned<const WORDS: usize, const UNROLL: usize>(crc: u32, data: &[u8]) -> u32 {
  let tables: &[[u32; 256]; LEVELS] = &TABLES.0;
  let split = data.as_ptr().align_offset(4).min(data.len());
  let (head, body) = data.split_at(split);

  let crc = bytewise(crc, head, &tables[0]);
  slice_by::<WORDS, UNROLL, LEVELS>(crc, body, tables)
}
