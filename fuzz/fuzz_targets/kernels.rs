//! Every variant of both families must agree with the bitwise reference.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use slicecrc::{initialize_tables, kernel_test};

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  seed: u32,
  offset: u8,
}

fuzz_target!(|input: Input| {
  let tables = initialize_tables();
  let start = usize::from(input.offset % 8).min(input.data.len());
  let data = &input.data[start..];

  if let Err(e) = kernel_test::verify_crc32_kernels(tables, data, input.seed) {
    panic!("crc32: {e}");
  }
  if let Err(e) = kernel_test::verify_crc32c_kernels(data, input.seed) {
    panic!("crc32c: {e}");
  }
});
