//! Variant selection introspection.
//!
//! Reports which engine the configured defaults run for a given buffer size,
//! without touching the hot path.
//!
//! # Examples
//!
//! ```
//! use slicecrc::{CastagnoliTables, Crc32Tables, introspect::{KernelIntrospect, SelectionInfo, kernel_for}};
//!
//! println!("{}", SelectionInfo::current());
//! println!("zlib @ 4KB: {}", kernel_for::<Crc32Tables>(4096));
//! println!("crc32c @ 3B: {}", CastagnoliTables::kernel_name_for_len(3));
//! ```

use core::fmt;

use crate::{
  config::{self, Crc32Config, Crc32cConfig},
  crc32::{Crc32Tables, Crc32Variant},
  crc32c::{CastagnoliTables, Crc32cVariant},
};

/// Name of the byte-wise path that short inputs fall through to.
pub const TAIL_KERNEL: &str = "byte";

/// Snapshot of the resolved default variants.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SelectionInfo {
  crc32: Crc32Config,
  crc32c: Crc32cConfig,
}

impl SelectionInfo {
  /// Selection in effect for this process.
  #[inline]
  #[must_use]
  pub fn current() -> Self {
    Self {
      crc32: config::crc32(),
      crc32c: config::crc32c(),
    }
  }

  /// zlib CRC-32 configuration.
  #[inline]
  #[must_use]
  pub const fn crc32(&self) -> Crc32Config {
    self.crc32
  }

  /// CRC-32C configuration.
  #[inline]
  #[must_use]
  pub const fn crc32c(&self) -> Crc32cConfig {
    self.crc32c
  }
}

impl fmt::Display for SelectionInfo {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "crc32={} ({}), crc32c={} ({})",
      self.crc32.variant,
      self.crc32.source.as_str(),
      self.crc32c.variant,
      self.crc32c.source.as_str()
    )
  }
}

impl fmt::Debug for SelectionInfo {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SelectionInfo")
      .field("crc32", &format_args!("{}", self.crc32.variant))
      .field("crc32c", &format_args!("{}", self.crc32c.variant))
      .finish()
  }
}

/// Kernel name that the default variant of `T` runs for `len` bytes.
#[inline]
#[must_use]
pub fn kernel_for<T: KernelIntrospect>(len: usize) -> &'static str {
  T::kernel_name_for_len(len)
}

/// Types whose default engine can be introspected.
pub trait KernelIntrospect {
  /// Engine that processes the bulk of a `len`-byte buffer.
  ///
  /// Inputs shorter than one block of the configured variant never reach the
  /// sliced loop and report [`TAIL_KERNEL`].
  fn kernel_name_for_len(len: usize) -> &'static str;

  /// Name of the configured default variant.
  fn backend_name() -> &'static str;

  /// Bytes of table memory the configured default variant reads.
  fn table_bytes() -> usize;
}

#[inline]
const fn bulk_or_tail(name: &'static str, block: usize, len: usize) -> &'static str {
  if block > 1 && len < block { TAIL_KERNEL } else { name }
}

impl KernelIntrospect for Crc32Tables {
  fn kernel_name_for_len(len: usize) -> &'static str {
    let v = config::crc32().variant;
    bulk_or_tail(v.name(), v.block_bytes(), len)
  }

  fn backend_name() -> &'static str {
    config::crc32().variant.name()
  }

  fn table_bytes() -> usize {
    crc32_table_bytes(config::crc32().variant)
  }
}

impl KernelIntrospect for CastagnoliTables {
  fn kernel_name_for_len(len: usize) -> &'static str {
    let v = config::crc32c().variant;
    bulk_or_tail(v.name(), v.block_bytes(), len)
  }

  fn backend_name() -> &'static str {
    config::crc32c().variant.name()
  }

  fn table_bytes() -> usize {
    crc32c_table_bytes(config::crc32c().variant)
  }
}

/// Table memory touched by a zlib variant.
#[must_use]
pub const fn crc32_table_bytes(variant: Crc32Variant) -> usize {
  match variant {
    Crc32Variant::Bitwise => 0,
    Crc32Variant::HalfByte => 16 * 4,
    _ => variant.table_levels() * 256 * 4,
  }
}

/// Table memory touched by a Castagnoli variant.
#[must_use]
pub const fn crc32c_table_bytes(variant: Crc32cVariant) -> usize {
  variant.table_levels() * 256 * 4
}
