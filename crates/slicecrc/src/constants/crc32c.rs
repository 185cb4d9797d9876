//! CRC-32C (Castagnoli) constants.
//!
//! Polynomial: 0x1EDC6F41 (reflected: 0x82F63B78)
//! Used by: iSCSI, SCTP, Btrfs, ext4, RocksDB, LevelDB

use super::Aligned64;
use crate::common::tables::generate_slicing_tables_32;

/// CRC-32C polynomial in reflected (bit-reversed) form.
pub const POLYNOMIAL: u32 = 0x82F6_3B78;

/// Number of offset tables in the Castagnoli table set.
///
/// Level `k` is the classic `crc_tableil8_o(32 + 8k)` table, so level 0 is
/// `o32` (one byte) and level 7 is `o88` (eight bytes).
pub const LEVELS: usize = 8;

/// Slicing-by-8 lookup tables, evaluated at compile time.
///
/// Total size: 8 * 256 * 4 = 8KB
pub static TABLES: Aligned64<[[u32; 256]; LEVELS]> = Aligned64(generate_slicing_tables_32::<LEVELS>(POLYNOMIAL));

/// Standard check value: CRC-32C of ASCII `"123456789"`.
#[cfg(test)]
pub const CHECK: u32 = 0xE306_9283;
