//! Order statistics over integer sequences.
//!
//! ## Purpose
//!
//! This module provides minimum, maximum, median, and arithmetic mean over a
//! sequence of signed integers.
//!
//! ## Design notes
//!
//! * **Zero sentinels**: `min`, `max`, and `median` return `T::zero()` on an
//!   empty sequence, and `average` returns `0.0`. Callers that must
//!   distinguish "no data" from the value zero check for emptiness first.
//! * **Median contract**: `median` returns the element at index
//!   `floor(n/2)` of a sorted copy. For even-length sequences this is the
//!   upper of the two middle elements, not their average.
//!
//! ## Invariants
//!
//! * No function mutates its input; `median` sorts a copy.
//!
//! ## Non-goals
//!
//! * This module does not provide higher moments or quantiles.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::{PrimInt, Signed};

// Internal dependencies
use crate::algorithms::mergesort;

// ============================================================================
// Extrema
// ============================================================================

/// Largest value in the sequence; `T::zero()` if empty.
pub fn max<T: PrimInt + Signed>(data: &[T]) -> T {
    let mut iter = data.iter();
    let mut best = match iter.next() {
        Some(&first) => first,
        None => return T::zero(),
    };

    for &value in iter {
        if value > best {
            best = value;
        }
    }
    best
}

/// Smallest value in the sequence; `T::zero()` if empty.
pub fn min<T: PrimInt + Signed>(data: &[T]) -> T {
    let mut iter = data.iter();
    let mut best = match iter.next() {
        Some(&first) => first,
        None => return T::zero(),
    };

    for &value in iter {
        if value < best {
            best = value;
        }
    }
    best
}

// ============================================================================
// Median and Mean
// ============================================================================

/// Positional median: element `floor(n/2)` of a sorted copy.
///
/// Even-length sequences yield the upper-middle element, not the midpoint
/// average. Returns `T::zero()` if empty.
pub fn median<T: PrimInt + Signed>(data: &[T]) -> T {
    if data.is_empty() {
        return T::zero();
    }

    let mut sorted: Vec<T> = data.to_vec();
    mergesort::sort(&mut sorted);

    sorted[sorted.len() / 2]
}

/// Arithmetic mean as a floating-point value; `0.0` if empty.
pub fn average<T: PrimInt + Signed>(data: &[T]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }

    let mut sum = 0.0;
    for &value in data {
        sum += value.to_f64().unwrap_or(f64::NAN);
    }

    sum / data.len() as f64
}
