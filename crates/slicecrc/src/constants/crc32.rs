//! CRC-32 (zlib / ISO-HDLC) constants.
//!
//! Polynomial: 0x04C11DB7 (reflected: 0xEDB88320)
//! Used by: zlib, gzip, zip, PNG, Ethernet

/// CRC-32 polynomial in reflected (bit-reversed) form.
pub const POLYNOMIAL: u32 = 0xEDB8_8320;

/// Number of slicing levels in the zlib table set.
pub const LEVELS: usize = 16;

/// Standard check value: CRC-32 of ASCII `"123456789"`.
#[cfg(test)]
pub const CHECK: u32 = 0xCBF4_3926;
