//! Runtime configuration of the default variants.
//!
//! [`Crc32Tables::compute`](crate::Crc32Tables::compute) and
//! [`crc32c::compute`](crate::crc32c::compute) run whichever variant this
//! module resolves. With the `std` feature the defaults can be overridden
//! through the environment:
//!
//! | Variable | Accepts |
//! |----------|---------|
//! | `SLICECRC_CRC32_VARIANT` | any [`Crc32Variant`] name, e.g. `slicing4x8` |
//! | `SLICECRC_CRC32C_VARIANT` | any [`Crc32cVariant`] name, e.g. `slicing32` |
//!
//! The environment is read once per process. Empty values are ignored;
//! unknown names are logged and ignored. Every variant produces the same
//! checksum, so an override only changes speed.

use crate::{crc32::Crc32Variant, crc32c::Crc32cVariant};

/// Where a configured variant came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Source {
  /// Built-in default.
  #[default]
  Default,
  /// Environment variable.
  Env,
  /// Set programmatically.
  Explicit,
}

impl Source {
  /// Lowercase label used in diagnostics.
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Default => "default",
      Self::Env => "env",
      Self::Explicit => "explicit",
    }
  }
}

/// Effective zlib CRC-32 configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crc32Config {
  /// Variant used by `compute`.
  pub variant: Crc32Variant,
  /// Where `variant` came from.
  pub source: Source,
}

impl Crc32Config {
  /// Built-in defaults, ignoring the environment.
  pub const DEFAULT: Self = Self {
    variant: Crc32Variant::DEFAULT,
    source: Source::Default,
  };

  /// Configuration pinned to `variant`.
  #[must_use]
  pub const fn with_variant(variant: Crc32Variant) -> Self {
    Self {
      variant,
      source: Source::Explicit,
    }
  }
}

impl Default for Crc32Config {
  #[inline]
  fn default() -> Self {
    Self::DEFAULT
  }
}

/// Effective CRC-32C configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crc32cConfig {
  /// Variant used by `compute`.
  pub variant: Crc32cVariant,
  /// Where `variant` came from.
  pub source: Source,
}

impl Crc32cConfig {
  /// Built-in defaults, ignoring the environment.
  pub const DEFAULT: Self = Self {
    variant: Crc32cVariant::DEFAULT,
    source: Source::Default,
  };

  /// Configuration pinned to `variant`.
  #[must_use]
  pub const fn with_variant(variant: Crc32cVariant) -> Self {
    Self {
      variant,
      source: Source::Explicit,
    }
  }
}

impl Default for Crc32cConfig {
  #[inline]
  fn default() -> Self {
    Self::DEFAULT
  }
}

#[derive(Clone, Copy, Debug, Default)]
struct Overrides {
  crc32: Option<Crc32Variant>,
  crc32c: Option<Crc32cVariant>,
}

/// Parse an override value. `None` for empty input, `Err(())` for an unknown name.
#[cfg_attr(not(feature = "std"), allow(dead_code))]
fn parse_override<T: core::str::FromStr>(value: &str) -> Result<Option<T>, ()> {
  let value = value.trim();
  if value.is_empty() {
    return Ok(None);
  }
  value.parse::<T>().map(Some).map_err(|_| ())
}

#[cfg(feature = "std")]
fn read_env_overrides() -> Overrides {
  fn read<T: core::str::FromStr + core::fmt::Display>(name: &str) -> Option<T> {
    let value = std::env::var(name).ok()?;
    match parse_override::<T>(&value) {
      Ok(Some(v)) => {
        log::debug!("{name}={v}");
        Some(v)
      }
      Ok(None) => None,
      Err(()) => {
        log::warn!("ignoring {name}={value:?}: unknown variant");
        None
      }
    }
  }

  Overrides {
    crc32: read("SLICECRC_CRC32_VARIANT"),
    crc32c: read("SLICECRC_CRC32C_VARIANT"),
  }
}

#[cfg(feature = "std")]
fn overrides() -> Overrides {
  use std::sync::OnceLock;
  static OVERRIDES: OnceLock<Overrides> = OnceLock::new();
  *OVERRIDES.get_or_init(read_env_overrides)
}

#[cfg(not(feature = "std"))]
fn overrides() -> Overrides {
  Overrides::default()
}

/// Get the effective zlib CRC-32 configuration.
#[inline]
#[must_use]
pub fn crc32() -> Crc32Config {
  match overrides().crc32 {
    Some(variant) => Crc32Config {
      variant,
      source: Source::Env,
    },
    None => Crc32Config::DEFAULT,
  }
}

/// Get the effective CRC-32C configuration.
#[inline]
#[must_use]
pub fn crc32c() -> Crc32cConfig {
  match overrides().crc32c {
    Some(variant) => Crc32cConfig {
      variant,
      source: Source::Env,
    },
    None => Crc32cConfig::DEFAULT,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults() {
    assert_eq!(Crc32Config::default().variant, Crc32Variant::Slicing16);
    assert_eq!(Crc32cConfig::default().variant, Crc32cVariant::Slicing16);
    assert_eq!(Crc32Config::default().source, Source::Default);
  }

  #[test]
  fn test_with_variant() {
    let cfg = Crc32Config::with_variant(Crc32Variant::HalfByte);
    assert_eq!(cfg.variant, Crc32Variant::HalfByte);
    assert_eq!(cfg.source, Source::Explicit);

    let cfg = Crc32cConfig::with_variant(Crc32cVariant::Slicing4);
    assert_eq!(cfg.variant, Crc32cVariant::Slicing4);
    assert_eq!(cfg.source.as_str(), "explicit");
  }

  #[test]
  fn test_parse_override() {
    assert_eq!(parse_override::<Crc32Variant>(""), Ok(None));
    assert_eq!(parse_override::<Crc32Variant>("   "), Ok(None));
    assert_eq!(
      parse_override::<Crc32Variant>(" slicing4x8 "),
      Ok(Some(Crc32Variant::Slicing4x8))
    );
    assert_eq!(
      parse_override::<Crc32cVariant>("SLICING32"),
      Ok(Some(Crc32cVariant::Slicing32))
    );
    assert_eq!(parse_override::<Crc32cVariant>("halfbyte"), Err(()));
    assert_eq!(parse_override::<Crc32Variant>("slicing64"), Err(()));
  }

  #[test]
  fn test_resolved_config_is_stable() {
    // The environment is read once; repeated calls agree.
    assert_eq!(crc32(), crc32());
    assert_eq!(crc32c(), crc32c());
  }
}
