//! Benchmark workloads for the growable array.
//!
//! Provides deterministic, seeded workloads for benchmarks:
//!
//! - [`churn_ops`]: a push/pop mix that repeatedly crosses the grow and
//!   shrink thresholds.
//! - [`random_indices`]: insert/delete positions for shifting benchmarks.
//! - [`prefilled`]: an array holding `0..len` at minimal capacity.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use growable::{ArrayError, GrowableArray};
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// One step of a churn workload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChurnOp {
    /// Append a value.
    Push(i32),
    /// Remove the last value.
    Pop,
}

/// Generate `count` churn steps, biased `push_percent`% towards pushes.
///
/// Identical seeds produce identical sequences.
pub fn churn_ops(count: usize, push_percent: u32, seed: u64) -> Vec<ChurnOp> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            if rng.next_u32() % 100 < push_percent {
                ChurnOp::Push(rng.next_u32() as i32)
            } else {
                ChurnOp::Pop
            }
        })
        .collect()
}

/// Run a churn workload, returning how many pops hit an empty array.
pub fn run_churn(arr: &mut GrowableArray, ops: &[ChurnOp]) -> Result<usize, ArrayError> {
    let mut underflows = 0;
    for op in ops {
        match *op {
            ChurnOp::Push(v) => arr.push(v)?,
            ChurnOp::Pop => {
                if arr.pop().is_err() {
                    underflows += 1;
                }
            }
        }
    }
    Ok(underflows)
}

/// Generate `count` indices, each valid for an array whose length starts
/// at `start_len` and grows by one per index (insert workload).
pub fn random_indices(count: usize, start_len: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|i| (rng.next_u64() % (start_len + i + 1) as u64) as usize)
        .collect()
}

/// An array holding `0..len`, sized to fit exactly.
pub fn prefilled(len: usize) -> Result<GrowableArray, ArrayError> {
    let values: Vec<i32> = (0..len as i32).collect();
    GrowableArray::from_slice(&values)
}
