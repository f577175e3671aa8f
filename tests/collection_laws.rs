#![cfg(feature = "collection")]
//! Property-based tests for the collection transforms.
//!
//! - **Idempotence**: `uniq(uniq(xs)) == uniq(xs)`
//! - **Order**: `uniq` keeps first occurrences in input order
//! - **Non-mutation**: transforms leave their input unchanged
//! - **Partition**: `filter` and `reject` split the input between them

use proptest::prelude::*;
use underbar::collection::{every, filter, first_n, last_n, map, reduce, reject, some, uniq};

// =============================================================================
// uniq
// =============================================================================

proptest! {
    #[test]
    fn prop_uniq_idempotent(items in prop::collection::vec(0_i32..10, 0..40)) {
        let once = uniq(&items);
        prop_assert_eq!(uniq(&once), once);
    }

    #[test]
    fn prop_uniq_keeps_first_occurrences_in_order(items in prop::collection::vec(0_u8..8, 0..40)) {
        let distinct = uniq(&items);
        let mut expected = Vec::new();
        for item in &items {
            if !expected.contains(item) {
                expected.push(*item);
            }
        }
        prop_assert_eq!(distinct, expected);
    }

    #[test]
    fn prop_uniq_has_no_duplicates(items in prop::collection::vec(any::<i16>(), 0..40)) {
        let distinct = uniq(&items);
        for (index, item) in distinct.iter().enumerate() {
            prop_assert!(!distinct[index + 1..].contains(item));
        }
    }
}

// =============================================================================
// Non-mutation
// =============================================================================

proptest! {
    #[test]
    fn prop_transforms_do_not_mutate(items in prop::collection::vec(any::<i32>(), 0..30)) {
        let before = items.clone();
        let _ = uniq(&items);
        let _ = filter(&items, |item| item % 3 == 0);
        let _ = reject(&items, |item| item % 3 == 0);
        let _ = map(&items, |item| item.wrapping_mul(2));
        let _ = reduce(&items, |sum, item| sum.wrapping_add(*item), None);
        prop_assert_eq!(items, before);
    }
}

// =============================================================================
// Partition and quantifiers
// =============================================================================

proptest! {
    #[test]
    fn prop_filter_reject_partition(items in prop::collection::vec(any::<i32>(), 0..30)) {
        let kept = filter(&items, |item| item % 2 == 0);
        let dropped = reject(&items, |item| item % 2 == 0);
        prop_assert_eq!(kept.len() + dropped.len(), items.len());
        prop_assert!(kept.iter().all(|item| item % 2 == 0));
        prop_assert!(dropped.iter().all(|item| item % 2 != 0));
    }

    #[test]
    fn prop_every_is_not_some_of_negation(items in prop::collection::vec(any::<i32>(), 0..30)) {
        let all_positive = every(&items, |item| *item > 0);
        let any_non_positive = some(&items, |item| *item <= 0);
        prop_assert_eq!(all_positive, !any_non_positive);
    }

    #[test]
    fn prop_first_and_last_n_lengths(
        items in prop::collection::vec(any::<u8>(), 0..20),
        count in 0_usize..30,
    ) {
        let expected = count.min(items.len());
        prop_assert_eq!(first_n(&items, count).len(), expected);
        prop_assert_eq!(last_n(&items, count).len(), expected);
        prop_assert_eq!(first_n(&items, count), &items[..expected]);
        prop_assert_eq!(last_n(&items, count), &items[items.len() - expected..]);
    }
}
