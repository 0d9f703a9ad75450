//! Contiguous, exclusively owned slot storage.
//!
//! A [`Buffer`] is a `Vec<i32>` whose length *is* the capacity: every slot
//! exists and is zero-initialised when it is created. The array layered on
//! top decides which prefix is logically live.

use crate::error::ArrayError;

/// Fixed-capacity backing storage, reallocated in place on resize.
#[derive(Clone)]
pub(crate) struct Buffer {
    /// Backing storage. `slots.len()` is the capacity.
    slots: Vec<i32>,
}

impl Buffer {
    /// Allocate `capacity` zeroed slots.
    ///
    /// Returns `Err(ArrayError::AllocationFailed)` if the allocator refuses
    /// the request. Nothing is left allocated on failure.
    pub(crate) fn new(capacity: usize) -> Result<Self, ArrayError> {
        let mut slots = Vec::new();
        reserve_exact(&mut slots, capacity)?;
        slots.resize(capacity, 0);
        Ok(Self { slots })
    }

    /// Number of slots currently allocated.
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Change the number of slots, keeping the first `min(old, new)`
    /// slots unchanged.
    ///
    /// Growing zero-fills the new tail. Shrinking drops the tail and hands
    /// the excess back to the allocator. A failed grow leaves the buffer
    /// exactly as it was.
    pub(crate) fn reallocate(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        let old_capacity = self.slots.len();
        if new_capacity > old_capacity {
            reserve_exact(&mut self.slots, new_capacity)?;
            self.slots.resize(new_capacity, 0);
        } else {
            self.slots.truncate(new_capacity);
            self.slots.shrink_to_fit();
        }
        Ok(())
    }

    /// Read the slot at `index`, or `None` past the capacity.
    pub(crate) fn get(&self, index: usize) -> Option<i32> {
        self.slots.get(index).copied()
    }

    /// Overwrite the slot at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity()`. Callers check bounds first.
    pub(crate) fn write(&mut self, index: usize, value: i32) {
        self.slots[index] = value;
    }

    /// Move `[start, end)` one slot to the right.
    ///
    /// # Panics
    ///
    /// Panics if `end >= capacity()`.
    pub(crate) fn shift_right(&mut self, start: usize, end: usize) {
        self.slots.copy_within(start..end, start + 1);
    }

    /// Move `[start, end)` one slot to the left.
    ///
    /// # Panics
    ///
    /// Panics if `start == 0` or `end > capacity()`.
    pub(crate) fn shift_left(&mut self, start: usize, end: usize) {
        self.slots.copy_within(start..end, start - 1);
    }

    /// Shared view of the first `len` slots.
    ///
    /// # Panics
    ///
    /// Panics if `len > capacity()`.
    pub(crate) fn prefix(&self, len: usize) -> &[i32] {
        &self.slots[..len]
    }

    /// Memory usage of the backing storage in bytes.
    pub(crate) fn memory_bytes(&self) -> usize {
        self.slots.len() * std::mem::size_of::<i32>()
    }
}

/// Make `slots` able to hold exactly `total` elements without panicking on
/// allocator refusal.
fn reserve_exact(slots: &mut Vec<i32>, total: usize) -> Result<(), ArrayError> {
    let additional = total.saturating_sub(slots.len());
    slots.try_reserve_exact(additional).map_err(|err| {
        tracing::debug!(requested = total, error = %err, "slot allocation refused");
        ArrayError::AllocationFailed { requested: total }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_zeroed() {
        let buf = Buffer::new(8).unwrap();
        assert_eq!(buf.capacity(), 8);
        assert!(buf.prefix(8).iter().all(|&v| v == 0));
    }

    #[test]
    fn grow_preserves_prefix() {
        let mut buf = Buffer::new(2).unwrap();
        buf.write(0, 13);
        buf.write(1, 3);
        buf.reallocate(4).unwrap();
        assert_eq!(buf.capacity(), 4);
        assert_eq!(buf.prefix(4), &[13, 3, 0, 0]);
    }

    #[test]
    fn shrink_preserves_prefix() {
        let mut buf = Buffer::new(8).unwrap();
        buf.write(0, 5);
        buf.write(1, 2);
        buf.reallocate(4).unwrap();
        assert_eq!(buf.capacity(), 4);
        assert_eq!(buf.prefix(2), &[5, 2]);
    }

    #[test]
    fn shift_right_opens_gap() {
        let mut buf = Buffer::new(4).unwrap();
        buf.write(0, 1);
        buf.write(1, 2);
        buf.write(2, 3);
        buf.shift_right(1, 3);
        assert_eq!(buf.prefix(4), &[1, 2, 2, 3]);
    }

    #[test]
    fn shift_left_closes_gap() {
        let mut buf = Buffer::new(4).unwrap();
        buf.write(0, 1);
        buf.write(1, 2);
        buf.write(2, 3);
        buf.shift_left(2, 3);
        assert_eq!(buf.prefix(2), &[1, 3]);
    }

    #[test]
    fn get_past_capacity_is_none() {
        let buf = Buffer::new(2).unwrap();
        assert_eq!(buf.get(1), Some(0));
        assert_eq!(buf.get(2), None);
    }

    #[test]
    fn absurd_request_returns_error_not_panic() {
        let result = Buffer::new(usize::MAX);
        assert!(matches!(
            result,
            Err(ArrayError::AllocationFailed { requested }) if requested == usize::MAX
        ));
    }

    #[test]
    fn failed_grow_leaves_buffer_untouched() {
        let mut buf = Buffer::new(2).unwrap();
        buf.write(0, 9);
        assert!(buf.reallocate(usize::MAX).is_err());
        assert_eq!(buf.capacity(), 2);
        assert_eq!(buf.get(0), Some(9));
    }

    #[test]
    fn memory_bytes_tracks_capacity() {
        let buf = Buffer::new(1024).unwrap();
        assert_eq!(buf.memory_bytes(), 1024 * 4);
    }
}
