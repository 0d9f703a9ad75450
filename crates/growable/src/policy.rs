//! Capacity arithmetic for growing and shrinking.
//!
//! [`ResizePolicy`] is pure: it computes target capacities and never
//! touches memory. Growth doubles; shrinking halves, and is only triggered
//! automatically once the array falls to a quarter full. The gap between
//! the 100% grow point and the 25% shrink point keeps a push/pop sequence
//! hovering around one boundary from reallocating on every call.

use crate::config::ArrayConfig;
use crate::error::ArrayError;

/// Direction a manual `resize()` should take.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ResizeDirection {
    /// The array is full: double capacity.
    Grow,
    /// The array has free slots: halve capacity.
    Shrink,
}

/// Grow/shrink thresholds for a single array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ResizePolicy {
    auto_shrink: bool,
    max_capacity: usize,
}

impl ResizePolicy {
    /// Build the policy described by `config`.
    pub(crate) fn from_config(config: &ArrayConfig) -> Self {
        Self {
            auto_shrink: config.auto_shrink,
            max_capacity: config.max_capacity,
        }
    }

    /// Capacity after doubling.
    ///
    /// Fails with `CapacityExceeded` past the configured ceiling, and with
    /// `AllocationFailed` when the doubled count does not fit in `usize`.
    pub(crate) fn grow_target(&self, capacity: usize) -> Result<usize, ArrayError> {
        let requested = capacity
            .checked_mul(2)
            .ok_or(ArrayError::AllocationFailed {
                requested: capacity.saturating_mul(2),
            })?;
        if requested > self.max_capacity {
            return Err(ArrayError::CapacityExceeded {
                requested,
                max: self.max_capacity,
            });
        }
        Ok(requested)
    }

    /// Capacity after halving, or `None` when no shrink should happen.
    ///
    /// Never goes below 1 and never below `len`.
    pub(crate) fn shrunk(capacity: usize, len: usize) -> Option<usize> {
        if capacity <= 1 {
            return None;
        }
        let half = capacity / 2;
        if half < len {
            return None;
        }
        Some(half)
    }

    /// Whether a removal that left `len` elements should trigger a shrink.
    pub(crate) fn should_shrink(&self, len: usize, capacity: usize) -> bool {
        self.auto_shrink && len <= capacity / 4
    }

    /// Which way a manual resize goes for the given occupancy.
    pub(crate) fn direction(len: usize, capacity: usize) -> ResizeDirection {
        if len == capacity {
            ResizeDirection::Grow
        } else {
            ResizeDirection::Shrink
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_policy() -> ResizePolicy {
        ResizePolicy::from_config(&ArrayConfig::default())
    }

    #[test]
    fn grow_target_doubles() {
        let policy = default_policy();
        assert_eq!(policy.grow_target(1), Ok(2));
        assert_eq!(policy.grow_target(8), Ok(16));
    }

    #[test]
    fn grow_target_overflow_reports_saturated_request() {
        let policy = default_policy();
        assert_eq!(
            policy.grow_target(usize::MAX / 2 + 1),
            Err(ArrayError::AllocationFailed {
                requested: usize::MAX
            })
        );
    }

    #[test]
    fn grow_target_respects_ceiling() {
        let policy = ResizePolicy::from_config(&ArrayConfig::new(4).with_max_capacity(12));
        assert_eq!(policy.grow_target(4), Ok(8));
        assert_eq!(
            policy.grow_target(8),
            Err(ArrayError::CapacityExceeded {
                requested: 16,
                max: 12
            })
        );
    }

    #[test]
    fn shrunk_halves() {
        assert_eq!(ResizePolicy::shrunk(8, 0), Some(4));
        assert_eq!(ResizePolicy::shrunk(5, 2), Some(2));
    }

    #[test]
    fn shrunk_never_reaches_zero() {
        assert_eq!(ResizePolicy::shrunk(1, 0), None);
        assert_eq!(ResizePolicy::shrunk(2, 0), Some(1));
    }

    #[test]
    fn shrunk_never_drops_below_len() {
        assert_eq!(ResizePolicy::shrunk(4, 3), None);
        assert_eq!(ResizePolicy::shrunk(4, 2), Some(2));
    }

    #[test]
    fn quarter_full_threshold() {
        let policy = default_policy();
        assert!(policy.should_shrink(2, 8));
        assert!(!policy.should_shrink(3, 8));
        assert!(policy.should_shrink(0, 1));
    }

    #[test]
    fn auto_shrink_disabled() {
        let policy = ResizePolicy::from_config(&ArrayConfig::new(8).with_auto_shrink(false));
        assert!(!policy.should_shrink(0, 8));
    }

    #[test]
    fn direction_depends_on_fullness() {
        assert_eq!(ResizePolicy::direction(4, 4), ResizeDirection::Grow);
        assert_eq!(ResizePolicy::direction(3, 4), ResizeDirection::Shrink);
        assert_eq!(ResizePolicy::direction(0, 8), ResizeDirection::Shrink);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn shrunk_capacity_holds_len(capacity in 1usize..4096, len_frac in 0.0f64..=1.0) {
                let len = (capacity as f64 * len_frac) as usize;
                if let Some(next) = ResizePolicy::shrunk(capacity, len) {
                    prop_assert!(next >= 1);
                    prop_assert!(next >= len);
                    prop_assert_eq!(next, capacity / 2);
                }
            }
        }
    }
}
