//! Array configuration parameters.

use crate::error::ArrayError;

/// Configuration for a [`GrowableArray`](crate::GrowableArray).
///
/// Validated at construction; the array copies what it needs and the
/// config is not consulted afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Number of `i32` slots allocated up front.
    ///
    /// Default: 16. Must be at least 1.
    pub initial_capacity: usize,

    /// Whether `pop()` and `delete()` halve capacity once the array drops
    /// to a quarter full.
    ///
    /// Default: `true`. With `false`, capacity only goes down through an
    /// explicit `shrink()` or `resize()`.
    pub auto_shrink: bool,

    /// Largest capacity a grow may produce.
    ///
    /// Default: `usize::MAX` (bounded only by the allocator). A push or
    /// insert that would need to double past this fails with
    /// `CapacityExceeded` and leaves the array unchanged.
    pub max_capacity: usize,
}

impl ArrayConfig {
    /// Default initial capacity in slots.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

    /// Default auto-shrink setting.
    pub const DEFAULT_AUTO_SHRINK: bool = true;

    /// Default capacity ceiling.
    pub const DEFAULT_MAX_CAPACITY: usize = usize::MAX;

    /// Create a config with the given initial capacity.
    ///
    /// Uses default values for all other parameters.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            auto_shrink: Self::DEFAULT_AUTO_SHRINK,
            max_capacity: Self::DEFAULT_MAX_CAPACITY,
        }
    }

    /// Builder-style toggle for [`auto_shrink`](Self::auto_shrink).
    pub fn with_auto_shrink(mut self, auto_shrink: bool) -> Self {
        self.auto_shrink = auto_shrink;
        self
    }

    /// Builder-style setter for [`max_capacity`](Self::max_capacity).
    pub fn with_max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    /// Check that the config describes a constructible array.
    pub fn validate(&self) -> Result<(), ArrayError> {
        if self.initial_capacity == 0 {
            return Err(ArrayError::InvalidCapacity {
                requested: self.initial_capacity,
            });
        }
        if self.max_capacity < self.initial_capacity {
            return Err(ArrayError::CapacityExceeded {
                requested: self.initial_capacity,
                max: self.max_capacity,
            });
        }
        Ok(())
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}
