use devcol::{UncheckedBits, ValidityBitmap, chunk_count, normalize_slice, slice_len};
use proptest::prelude::*;

use crate::common::device;

proptest! {
    #[test]
    fn chunk_count_is_tight(total in 0usize..1_000_000, chunk_size in 1usize..4_096) {
        let count = chunk_count(total, chunk_size).unwrap();
        prop_assert!(count * chunk_size >= total);
        if count > 0 {
            prop_assert!((count - 1) * chunk_size < total);
        } else {
            prop_assert_eq!(total, 0);
        }
    }

    #[test]
    fn set_bit_is_isolated(len in 1usize..300, seed in any::<usize>()) {
        let pos = seed % len;
        let mut bitmap = ValidityBitmap::<u8>::new_null(&device(), len).unwrap();
        bitmap.set_bit(pos);
        for other in 0..len {
            prop_assert_eq!(bitmap.get_bit(other), other == pos);
        }
        prop_assert_eq!(bitmap.count_valid(), 1);
    }

    #[test]
    fn set_bit_is_idempotent(
        len in 1usize..300,
        positions in prop::collection::vec(any::<usize>(), 0..20),
    ) {
        let mut once = ValidityBitmap::<u32>::new_null(&device(), len).unwrap();
        let mut twice = once.clone();
        for pos in positions.iter().map(|p| p % len) {
            once.set_bit(pos);
            twice.set_bit(pos);
            twice.set_bit(pos);
        }
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn slice_bounds_never_exceed_size(
        start in proptest::option::of(-50i64..50),
        stop in proptest::option::of(-50i64..50),
        size in 0i64..40,
    ) {
        let (lo, hi) = normalize_slice(start, stop, size);
        prop_assert!(lo <= size);
        prop_assert!(hi <= size);
        prop_assert!(slice_len(lo, hi) <= size as usize);
    }
}
