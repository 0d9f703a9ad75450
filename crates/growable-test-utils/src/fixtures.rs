//! Reusable array fixtures and invariant checks.
//!
//! - [`filled`] — an array with a chosen capacity and contents.
//! - [`full`] — an array whose length equals its capacity.
//! - [`assert_invariants`] — panics if capacity/length bookkeeping is off.

use growable::GrowableArray;

/// An array created with `capacity` slots, then pushed `values` in order.
///
/// Capacity doubles as usual if `values` does not fit.
pub fn filled(capacity: usize, values: &[i32]) -> GrowableArray {
    let mut arr = GrowableArray::new(capacity).expect("fixture capacity");
    arr.try_extend_from_slice(values).expect("fixture allocation");
    arr
}

/// An array of `capacity` slots with every slot occupied by `0..capacity`.
pub fn full(capacity: usize) -> GrowableArray {
    let values: Vec<i32> = (0..capacity as i32).collect();
    filled(capacity, &values)
}

/// Check the structural invariants that must hold between operations.
pub fn assert_invariants(arr: &GrowableArray) {
    assert!(
        arr.capacity() >= arr.len(),
        "capacity {} below length {}",
        arr.capacity(),
        arr.len()
    );
    assert!(arr.capacity() >= 1, "capacity collapsed to zero");
    assert_eq!(arr.as_slice().len(), arr.len());
    assert_eq!(arr.is_empty(), arr.len() == 0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_keeps_capacity_when_values_fit() {
        let arr = filled(8, &[5, 2, 7]);
        assert_eq!(arr.capacity(), 8);
        assert_eq!(arr.as_slice(), &[5, 2, 7]);
        assert_invariants(&arr);
    }

    #[test]
    fn full_has_no_free_slots() {
        let arr = full(4);
        assert_eq!(arr.len(), arr.capacity());
        assert_eq!(arr.as_slice(), &[0, 1, 2, 3]);
    }
}
