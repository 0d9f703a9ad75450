//! Test utilities for growable development.
//!
//! Provides a `Vec`-backed [`ModelArray`] that implements the same
//! operations as [`GrowableArray`] without any capacity bookkeeping, an
//! [`Op`] enum describing one operation, and proptest strategies that
//! generate operation sequences.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use growable::{ArrayError, GrowableArray};
use proptest::prelude::*;

/// One operation against an array.
///
/// Indices are raw: they may be out of range on purpose so that the no-op
/// and error paths get exercised too.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op {
    Push(i32),
    Insert { value: i32, index: usize },
    Prepend(i32),
    Pop,
    Delete(usize),
    Remove(i32),
    Set { index: usize, value: i32 },
    Grow,
    Shrink,
    Resize,
}

/// Outcome of applying an [`Op`], compared between model and subject.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Unit,
    Inserted(bool),
    Value(Result<i32, ArrayError>),
    Deleted(Option<i32>),
    Removed(usize),
}

/// Reference implementation backed by a plain `Vec<i32>`.
///
/// Capacity is not modelled; only contents and error behaviour are.
#[derive(Clone, Debug, Default)]
pub struct ModelArray {
    elements: Vec<i32>,
}

impl ModelArray {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.elements
    }

    pub fn apply(&mut self, op: &Op) -> Outcome {
        match *op {
            Op::Push(v) => {
                self.elements.push(v);
                Outcome::Unit
            }
            Op::Insert { value, index } => {
                if index > self.elements.len() {
                    return Outcome::Inserted(false);
                }
                self.elements.insert(index, value);
                Outcome::Inserted(true)
            }
            Op::Prepend(v) => {
                self.elements.insert(0, v);
                Outcome::Unit
            }
            Op::Pop => Outcome::Value(self.elements.pop().ok_or(ArrayError::Underflow)),
            Op::Delete(index) => {
                if index >= self.elements.len() {
                    return Outcome::Deleted(None);
                }
                Outcome::Deleted(Some(self.elements.remove(index)))
            }
            Op::Remove(v) => {
                let before = self.elements.len();
                self.elements.retain(|&e| e != v);
                Outcome::Removed(before - self.elements.len())
            }
            Op::Set { index, value } => {
                let len = self.elements.len();
                let result = match self.elements.get_mut(index) {
                    Some(slot) => Ok(std::mem::replace(slot, value)),
                    None => Err(ArrayError::IndexOutOfRange { index, len }),
                };
                Outcome::Value(result)
            }
            Op::Grow | Op::Shrink | Op::Resize => Outcome::Unit,
        }
    }
}

/// Capacity past which [`apply`] skips explicit `Op::Grow`, so long random
/// sequences cannot double their way into gigabytes.
pub const GROW_LIMIT: usize = 1 << 16;

/// Apply `op` to the array under test, panicking on allocation failure.
pub fn apply(arr: &mut GrowableArray, op: &Op) -> Outcome {
    match *op {
        Op::Push(v) => {
            arr.push(v).expect("push allocation");
            Outcome::Unit
        }
        Op::Insert { value, index } => {
            Outcome::Inserted(arr.insert(value, index).expect("insert allocation"))
        }
        Op::Prepend(v) => {
            arr.prepend(v).expect("prepend allocation");
            Outcome::Unit
        }
        Op::Pop => Outcome::Value(arr.pop()),
        Op::Delete(index) => Outcome::Deleted(arr.delete(index)),
        Op::Remove(v) => Outcome::Removed(arr.remove(v)),
        Op::Set { index, value } => Outcome::Value(arr.set(index, value)),
        Op::Grow => {
            if arr.capacity() < GROW_LIMIT {
                arr.grow().expect("grow allocation");
            }
            Outcome::Unit
        }
        Op::Shrink => {
            arr.shrink();
            Outcome::Unit
        }
        Op::Resize => {
            arr.resize().expect("resize allocation");
            Outcome::Unit
        }
    }
}

/// Small value domain so that `Remove` and `find` hit duplicates.
pub fn value_strategy() -> impl Strategy<Value = i32> {
    -4i32..8
}

/// A single operation with indices spread just past typical lengths.
pub fn op_strategy() -> impl Strategy<Value = Op> {
    let index = 0usize..24;
    prop_oneof![
        4 => value_strategy().prop_map(Op::Push),
        2 => (value_strategy(), index.clone())
            .prop_map(|(value, index)| Op::Insert { value, index }),
        1 => value_strategy().prop_map(Op::Prepend),
        3 => Just(Op::Pop),
        2 => index.clone().prop_map(Op::Delete),
        1 => value_strategy().prop_map(Op::Remove),
        1 => (index, value_strategy()).prop_map(|(index, value)| Op::Set { index, value }),
        1 => Just(Op::Grow),
        1 => Just(Op::Shrink),
        1 => Just(Op::Resize),
    ]
}

/// A sequence of up to `max_len` operations.
pub fn ops_strategy(max_len: usize) -> impl Strategy<Value = Vec<Op>> {
    proptest::collection::vec(op_strategy(), 0..max_len)
}
