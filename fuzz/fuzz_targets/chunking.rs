//! Splitting the input anywhere must not change the result.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use slicecrc::{Crc32Variant, Crc32cVariant, crc32c, initialize_tables};

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  splits: Vec<u16>,
  variant: u8,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let mut cuts: Vec<usize> = input.splits.iter().map(|&s| usize::from(s) % (data.len() + 1)).collect();
  cuts.push(data.len());
  cuts.sort_unstable();

  let v32 = Crc32Variant::ALL[usize::from(input.variant) % Crc32Variant::ALL.len()];
  let v32c = Crc32cVariant::ALL[usize::from(input.variant) % Crc32cVariant::ALL.len()];
  let tables = initialize_tables();

  let mut crc = 0;
  let mut raw = !0;
  let mut prev = 0;
  for &cut in &cuts {
    crc = tables.checksum(v32, &data[prev..cut], crc);
    raw = crc32c::crc32c(v32c, &data[prev..cut], raw);
    prev = cut;
  }

  assert_eq!(crc, tables.checksum(v32, data, 0), "crc32 {v32} chunked mismatch");
  assert_eq!(raw, crc32c::crc32c(v32c, data, !0), "crc32c {v32c} chunked mismatch");
});
