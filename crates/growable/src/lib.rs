//! A growable integer array with amortized resizing.
//!
//! [`GrowableArray`] owns a contiguous buffer of `i32` slots, a logical
//! length, and a physical capacity that move independently.
//!
//! # Architecture
//!
//! ```text
//! GrowableArray (index-based API, error reporting)
//! ├── Buffer (Vec<i32> whose length is the capacity, zero-init)
//! └── ResizePolicy (doubling, halving, quarter-full hysteresis)
//! ```
//!
//! # Resize policy
//!
//! - **Grow:** a push or insert into a full array doubles capacity first.
//! - **Shrink:** a pop or delete that leaves the array at most a quarter
//!   full halves capacity. Capacity never drops below 1 or below the
//!   current length.
//! - **Manual:** [`GrowableArray::resize`] grows when full and shrinks
//!   otherwise.
//!
//! # Errors
//!
//! Nothing here aborts the process. Out-of-range reads and writes, pops
//! from an empty array, zero capacity, and allocator refusal all surface
//! as [`ArrayError`].
//!
//! # Logging
//!
//! Reallocations are reported through [`tracing`] at `trace` level, and
//! refused allocations at `debug` level. No subscriber is installed here.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
mod buffer;
pub mod config;
pub mod error;
mod policy;

// Public re-exports for the primary API surface.
pub use array::GrowableArray;
pub use config::ArrayConfig;
pub use error::ArrayError;
