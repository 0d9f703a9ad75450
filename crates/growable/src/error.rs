//! Array error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during array operations.
///
/// Every variant is a local, recoverable condition. Nothing in this crate
/// terminates the host process on bad input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// Construction was requested with zero capacity.
    InvalidCapacity {
        /// The rejected capacity.
        requested: usize,
    },
    /// The allocator could not provide the requested number of slots, or
    /// the slot count overflowed while doubling.
    AllocationFailed {
        /// Number of `i32` slots requested. Saturates at `usize::MAX` when
        /// the doubled count does not fit in `usize`.
        requested: usize,
    },
    /// Growing would pass the configured `max_capacity`.
    CapacityExceeded {
        /// Capacity the grow would have produced.
        requested: usize,
        /// The configured ceiling.
        max: usize,
    },
    /// Read or write access at an index outside `[0, len)`.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Logical length at the time of access.
        len: usize,
    },
    /// `pop()` on an empty array.
    Underflow,
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCapacity { requested } => {
                write!(f, "invalid capacity {requested}: capacity must be at least 1")
            }
            Self::AllocationFailed { requested } => {
                write!(f, "allocation failed: could not reserve {requested} slots")
            }
            Self::CapacityExceeded { requested, max } => {
                write!(
                    f,
                    "capacity exceeded: requested {requested} slots, max {max} slots"
                )
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::Underflow => write!(f, "pop from an empty array"),
        }
    }
}

impl Error for ArrayError {}
