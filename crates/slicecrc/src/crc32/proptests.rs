extern crate std;

use alloc::vec::Vec;

use proptest::prelude::*;

use super::*;

fn tables() -> &'static Crc32Tables {
  initialize_tables()
}

fn arb_variant() -> impl Strategy<Value = Crc32Variant> {
  proptest::sample::select(Crc32Variant::ALL.to_vec())
}

proptest! {
  #[test]
  fn every_variant_matches_bitwise(
    data in proptest::collection::vec(any::<u8>(), 0..=2048),
    seed in any::<u32>(),
    variant in arb_variant(),
  ) {
    prop_assert_eq!(tables().checksum(variant, &data, seed), bitwise(&data, seed));
  }

  #[test]
  fn carry_in_equals_concatenation(
    data in proptest::collection::vec(any::<u8>(), 0..=1024),
    split in any::<usize>(),
    seed in any::<u32>(),
    variant in arb_variant(),
  ) {
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);
    let chained = tables().checksum(variant, b, tables().checksum(variant, a, seed));
    prop_assert_eq!(chained, tables().checksum(variant, &data, seed));
  }

  #[test]
  fn matches_crc32fast(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let reference = crc32fast::hash(&data);
    prop_assert_eq!(tables().slicing16(&data, 0), reference);
    prop_assert_eq!(tables().slicing4x8(&data, 0), reference);
  }

  #[test]
  fn offset_within_buffer_does_not_matter(
    data in proptest::collection::vec(any::<u8>(), 0..=512),
    offset in 0usize..16,
    variant in arb_variant(),
  ) {
    let mut shifted = Vec::with_capacity(data.len() + offset);
    shifted.resize(offset, 0xA5);
    shifted.extend_from_slice(&data);
    prop_assert_eq!(
      tables().checksum(variant, &shifted[offset..], 0),
      tables().checksum(variant, &data, 0)
    );
  }
}
