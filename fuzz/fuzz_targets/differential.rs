//! Differential fuzzing against established crates.

#![no_main]

use libfuzzer_sys::fuzz_target;
use slicecrc::{Crc32Variant, Crc32cVariant, crc32c, initialize_tables};

fuzz_target!(|data: &[u8]| {
  let tables = initialize_tables();

  let reference = crc32fast::hash(data);
  for v in Crc32Variant::ALL {
    let ours = tables.checksum(v, data, 0);
    assert_eq!(
      ours, reference,
      "crc32 {v} differential mismatch: ours={ours:#010x}, crc32fast={reference:#010x}, len={}",
      data.len()
    );
  }

  let reference = ::crc32c::crc32c(data);
  for v in Crc32cVariant::ALL {
    let ours = !crc32c::crc32c(v, data, !0);
    assert_eq!(
      ours, reference,
      "crc32c {v} differential mismatch: ours={ours:#010x}, crc32c={reference:#010x}, len={}",
      data.len()
    );
  }
});
