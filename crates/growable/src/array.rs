//! The growable array itself.
//!
//! [`GrowableArray`] pairs a slot buffer with a logical length. Capacity and
//! length move independently: pushes and inserts fill free slots and only
//! reallocate when the buffer is full, removals leave slots behind and only
//! reallocate once the array drops to a quarter full.

use std::fmt;

use crate::buffer::Buffer;
use crate::config::ArrayConfig;
use crate::error::ArrayError;
use crate::policy::{ResizeDirection, ResizePolicy};

/// A contiguous, growable array of `i32` with amortized O(1) push and pop.
///
/// # Invariants
///
/// - `capacity() >= len()` at every observable point.
/// - `capacity() >= 1` from construction until drop.
/// - Slots `[0, len())` hold the elements in insertion order.
///
/// Bad indices never abort: reads and writes return
/// [`ArrayError::IndexOutOfRange`], `pop()` on an empty array returns
/// [`ArrayError::Underflow`], and out-of-range `insert()`/`delete()` are
/// no-ops.
///
/// # Example
///
/// ```
/// use growable::GrowableArray;
///
/// let mut arr = GrowableArray::new(2)?;
/// arr.push(13)?;
/// arr.push(3)?;
/// arr.push(9)?;
/// assert_eq!(arr.capacity(), 4);
/// assert_eq!(arr.as_slice(), &[13, 3, 9]);
/// # Ok::<(), growable::ArrayError>(())
/// ```
#[derive(Clone)]
pub struct GrowableArray {
    buffer: Buffer,
    len: usize,
    policy: ResizePolicy,
}

impl GrowableArray {
    /// Create an empty array with exactly `capacity` slots.
    ///
    /// Fails with [`ArrayError::InvalidCapacity`] when `capacity == 0` and
    /// with [`ArrayError::AllocationFailed`] when the slots cannot be
    /// allocated.
    pub fn new(capacity: usize) -> Result<Self, ArrayError> {
        Self::with_config(ArrayConfig::new(capacity))
    }

    /// Create an empty array from a validated config.
    pub fn with_config(config: ArrayConfig) -> Result<Self, ArrayError> {
        config.validate()?;
        let buffer = Buffer::new(config.initial_capacity)?;
        Ok(Self {
            buffer,
            len: 0,
            policy: ResizePolicy::from_config(&config),
        })
    }

    /// Create an array holding a copy of `values`.
    ///
    /// Capacity is `values.len()`, or 1 for an empty slice.
    pub fn from_slice(values: &[i32]) -> Result<Self, ArrayError> {
        let mut arr = Self::new(values.len().max(1))?;
        arr.try_extend_from_slice(values)?;
        Ok(arr)
    }

    // ── Capacity management ─────────────────────────────────────────

    /// Double the capacity, keeping every element at its index.
    ///
    /// Fails with [`ArrayError::CapacityExceeded`] past the configured
    /// `max_capacity` and with [`ArrayError::AllocationFailed`] when the
    /// allocator refuses. On failure the array is left unchanged.
    pub fn grow(&mut self) -> Result<(), ArrayError> {
        let from = self.capacity();
        let to = self.policy.grow_target(from)?;
        self.buffer.reallocate(to)?;
        tracing::trace!(from, to, len = self.len, "grew array");
        Ok(())
    }

    /// Halve the capacity, keeping every element at its index.
    ///
    /// No-op when the capacity is already 1, or when halving would leave
    /// fewer slots than elements.
    pub fn shrink(&mut self) {
        let from = self.capacity();
        let Some(to) = ResizePolicy::shrunk(from, self.len) else {
            return;
        };
        // Shrinking never requests new memory, so it cannot fail.
        let shrunk = self.buffer.reallocate(to);
        debug_assert!(shrunk.is_ok(), "shrink to {to} slots failed: {shrunk:?}");
        if shrunk.is_ok() {
            tracing::trace!(from, to, len = self.len, "shrank array");
        }
    }

    /// Grow if full, otherwise shrink.
    pub fn resize(&mut self) -> Result<(), ArrayError> {
        match ResizePolicy::direction(self.len, self.capacity()) {
            ResizeDirection::Grow => self.grow(),
            ResizeDirection::Shrink => {
                self.shrink();
                Ok(())
            }
        }
    }

    // ── Read accessors ──────────────────────────────────────────────

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of elements. Alias of [`len`](Self::len).
    pub fn length(&self) -> usize {
        self.len
    }

    /// Number of slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Whether the array has no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The element at `index`.
    pub fn at(&self, index: usize) -> Result<i32, ArrayError> {
        self.get(index).ok_or(ArrayError::IndexOutOfRange {
            index,
            len: self.len,
        })
    }

    /// The element at `index`, or `None` if `index >= len()`.
    pub fn get(&self, index: usize) -> Option<i32> {
        if index >= self.len {
            return None;
        }
        self.buffer.get(index)
    }

    /// Index of the first element equal to `value`.
    pub fn find(&self, value: i32) -> Option<usize> {
        self.as_slice().iter().position(|&v| v == value)
    }

    /// Whether any element equals `value`.
    pub fn contains(&self, value: i32) -> bool {
        self.find(value).is_some()
    }

    /// The live elements as a slice.
    pub fn as_slice(&self) -> &[i32] {
        self.buffer.prefix(self.len)
    }

    /// Iterate over the elements front to back.
    pub fn iter(&self) -> std::slice::Iter<'_, i32> {
        self.as_slice().iter()
    }

    /// Memory held by the backing buffer in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.buffer.memory_bytes()
    }

    // ── Mutation ────────────────────────────────────────────────────

    /// Overwrite the element at `index`, returning the old value.
    pub fn set(&mut self, index: usize, value: i32) -> Result<i32, ArrayError> {
        let old = self.at(index)?;
        self.buffer.write(index, value);
        Ok(old)
    }

    /// Append `value`, doubling capacity first if the array is full.
    pub fn push(&mut self, value: i32) -> Result<(), ArrayError> {
        if self.len == self.capacity() {
            self.grow()?;
        }
        self.buffer.write(self.len, value);
        self.len += 1;
        Ok(())
    }

    /// Insert `value` at `index`, shifting `[index, len)` right by one.
    ///
    /// `index` may be anywhere in `[0, len]`; `index == len` appends.
    /// Any other index is ignored and `Ok(false)` is returned.
    pub fn insert(&mut self, value: i32, index: usize) -> Result<bool, ArrayError> {
        if index > self.len {
            return Ok(false);
        }
        if self.len == self.capacity() {
            self.grow()?;
        }
        self.buffer.shift_right(index, self.len);
        self.buffer.write(index, value);
        self.len += 1;
        Ok(true)
    }

    /// Insert `value` at the front.
    pub fn prepend(&mut self, value: i32) -> Result<(), ArrayError> {
        self.insert(value, 0).map(|_| ())
    }

    /// Push every value in `values`, in order.
    ///
    /// Elements pushed before an allocation failure stay in the array.
    pub fn try_extend_from_slice(&mut self, values: &[i32]) -> Result<(), ArrayError> {
        for &value in values {
            self.push(value)?;
        }
        Ok(())
    }

    /// Remove and return the last element.
    pub fn pop(&mut self) -> Result<i32, ArrayError> {
        let last = self.len.checked_sub(1).ok_or(ArrayError::Underflow)?;
        let value = self.buffer.get(last).ok_or(ArrayError::Underflow)?;
        self.len = last;
        self.shrink_after_removal();
        Ok(value)
    }

    /// Remove the element at `index`, shifting `[index + 1, len)` left.
    ///
    /// Returns the removed element, or `None` (and does nothing) when
    /// `index >= len()`.
    pub fn delete(&mut self, index: usize) -> Option<i32> {
        let value = self.get(index)?;
        self.buffer.shift_left(index + 1, self.len);
        self.len -= 1;
        self.shrink_after_removal();
        Some(value)
    }

    /// Delete every element equal to `value`, returning how many went.
    pub fn remove(&mut self, value: i32) -> usize {
        let mut removed = 0;
        while let Some(index) = self.find(value) {
            self.delete(index);
            removed += 1;
        }
        removed
    }

    /// Drop all elements. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    fn shrink_after_removal(&mut self) {
        if self.policy.should_shrink(self.len, self.capacity()) {
            self.shrink();
        }
    }
}

impl fmt::Debug for GrowableArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowableArray")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl PartialEq for GrowableArray {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for GrowableArray {}

impl<'a> IntoIterator for &'a GrowableArray {
    type Item = &'a i32;
    type IntoIter = std::slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
