//! Integration test: model-based checking against a `Vec` reference.
//!
//! Random operation sequences are applied to both a [`GrowableArray`] and
//! a [`ModelArray`]. Every operation must produce the same outcome, the
//! contents must match afterwards, and the capacity invariants must hold
//! at every step.

use growable::{ArrayConfig, GrowableArray};
use growable_test_utils::fixtures::assert_invariants;
use growable_test_utils::{apply, ops_strategy, value_strategy, ModelArray, Op};
use proptest::prelude::*;

proptest! {
    #[test]
    fn matches_reference_model(
        initial in 1usize..8,
        auto_shrink in any::<bool>(),
        ops in ops_strategy(128),
    ) {
        let config = ArrayConfig::new(initial).with_auto_shrink(auto_shrink);
        let mut arr = GrowableArray::with_config(config).unwrap();
        let mut model = ModelArray::new();

        for op in &ops {
            let expected = model.apply(op);
            let actual = apply(&mut arr, op);
            prop_assert_eq!(actual, expected, "diverged on {:?}", op);
            prop_assert_eq!(arr.as_slice(), model.as_slice());
            assert_invariants(&arr);
        }
    }

    #[test]
    fn capacity_stays_within_four_times_len(ops in ops_strategy(128)) {
        let mut arr = GrowableArray::new(1).unwrap();
        for op in &ops {
            // Manual shrink/grow/resize can leave slack on purpose; only
            // the automatic policy is bounded.
            if matches!(op, Op::Grow | Op::Shrink | Op::Resize) {
                continue;
            }
            apply(&mut arr, op);
            if !arr.is_empty() {
                prop_assert!(
                    arr.capacity() <= 4 * arr.len().max(1),
                    "capacity {} too large for len {}",
                    arr.capacity(),
                    arr.len()
                );
            }
        }
    }

    #[test]
    fn remove_leaves_no_occurrence(
        values in proptest::collection::vec(value_strategy(), 0..48),
        target in value_strategy(),
    ) {
        let mut arr = GrowableArray::from_slice(&values).unwrap();
        let expected = values.iter().filter(|&&v| v == target).count();
        prop_assert_eq!(arr.remove(target), expected);
        prop_assert_eq!(arr.find(target), None);
        prop_assert_eq!(arr.len(), values.len() - expected);
    }
}
