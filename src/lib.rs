//! # sortkit — integer sequence sorting and order statistics
//!
//! In-place sorting of finite sequences of signed integers into
//! non-decreasing order, plus the derived operations that assume or exploit
//! that ordering: binary search, minimum, maximum, median, and arithmetic
//! mean.
//!
//! ## Quick Start
//!
//! ```rust
//! use sortkit::prelude::*;
//!
//! let mut data = vec![5i64, 1, 4, 2, 3];
//!
//! // Build the sorter
//! let sorter = Sorter::new()
//!     .algorithm(Quicksort) // Randomized-pivot quicksort
//!     .seed(42)             // Reproducible pivot selection
//!     .build()?;
//!
//! // Sort the sequence in place
//! sorter.sort(&mut data)?;
//!
//! assert_eq!(data, vec![1, 2, 3, 4, 5]);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ## Choosing an algorithm
//!
//! ```rust
//! use sortkit::prelude::*;
//!
//! let mut data = vec![9i32, -3, 7, -3, 0];
//!
//! // Mergesort: stable, O(n log n) worst case
//! Sorter::new().algorithm(Mergesort).build()?.sort(&mut data)?;
//! assert_eq!(data, vec![-3, -3, 0, 7, 9]);
//!
//! // Bogo sort: probabilistic baseline with an explicit shuffle budget
//! let mut small = vec![2i32, 1];
//! let report = Sorter::new()
//!     .algorithm(Bogo)
//!     .seed(7)
//!     .max_shuffles(1_000_000)
//!     .build()?
//!     .sort(&mut small)?;
//!
//! assert!(report.shuffles.is_some());
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ## Search and order statistics
//!
//! ```rust
//! use sortkit::prelude::*;
//!
//! let data = vec![1i64, 3, 5, 7, 9];
//!
//! assert_eq!(binary_search(&data, 5), 2);
//! assert_eq!(binary_search(&data, 4), -3); // would insert at index 2
//!
//! assert_eq!(max(&data), 9);
//! assert_eq!(min(&data), 1);
//! assert_eq!(median(&data), 5);
//! assert_eq!(average(&data), 5.0);
//! ```
//!
//! ## Result and Error Handling
//!
//! Sorting through the builder returns `Result<SortReport, SortError>`:
//!
//! ```rust
//! use sortkit::prelude::*;
//!
//! let mut data = vec![3i64, 1, 2];
//! let sorter = Sorter::new().build()?;
//!
//! match sorter.sort_range(&mut data, 0, 9) {
//!     Ok(report) => println!("{}", report),
//!     Err(e) => eprintln!("Sort failed: {}", e), // InvalidRange
//! }
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. An allocator is still required:
//! mergesort sorts owned working copies of each half, and the median takes a
//! sorted copy.
//!
//! ```toml
//! [dependencies]
//! sortkit = { version = "0.1", default-features = false }
//! ```
//!
//! Without `std`, unseeded sorters fall back to a fixed seed; pass an
//! explicit `.seed(..)` when reproducibility across builds matters.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - error types and randomness.
mod primitives;

// Layer 2: Algorithms - the sorting cores.
mod algorithms;

// Layer 3: Evaluation - search and order statistics over sequences.
mod evaluation;

// Layer 4: Engine - validation and execution control.
mod engine;

// High-level fluent API for sequence sorting.
mod api;

// Standard sortkit prelude.
pub mod prelude {
    pub use crate::api::{
        average, binary_search, max, median, min, Algorithm,
        Algorithm::{Bogo, Bubble, Insertion, Mergesort, Quicksort},
        Lcg64, RandomSource, SortError, SortReport, SorterBuilder as Sorter,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
