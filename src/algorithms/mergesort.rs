//! Top-down stable mergesort.
//!
//! ## Purpose
//!
//! This module provides a recursive split/merge sort. Each half is copied
//! into a fresh, separately owned working buffer before the recursive call,
//! so there are no aliasing hazards during recursion; the merge writes back
//! into the original slice.
//!
//! ## Design notes
//!
//! * **Stability**: The merge takes from the left half on ties
//!   (`left[i] <= right[j]`), preserving input order among equal elements.
//! * **Complexity**: O(n log n) comparisons in every case; O(n) auxiliary
//!   memory per level.
//!
//! ## Invariants
//!
//! * The output slice is a permutation of the input multiset in
//!   non-decreasing order.
//! * Equal-valued elements keep their relative input order.
//!
//! ## Non-goals
//!
//! * This module does not sort sub-ranges; mergesort operates on the full
//!   slice.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// ============================================================================
// Sorting Functions
// ============================================================================

/// Sort the slice in place, ascending, stable.
pub fn sort<T: Copy + Ord>(data: &mut [T]) {
    let n = data.len();
    if n < 2 {
        return;
    }

    let middle = n / 2;

    let mut left: Vec<T> = data[..middle].to_vec();
    let mut right: Vec<T> = data[middle..].to_vec();

    sort(&mut left);
    sort(&mut right);

    merge(data, &left, &right);
}

// ============================================================================
// Merging
// ============================================================================

/// Merge two sorted halves back into `dst` by repeated comparison.
///
/// Ties take from `left` to preserve stability; whichever half has elements
/// remaining afterwards is drained onto the end.
pub fn merge<T: Copy + Ord>(dst: &mut [T], left: &[T], right: &[T]) {
    debug_assert_eq!(dst.len(), left.len() + right.len());

    let mut i = 0;
    let mut j = 0;
    let mut k = 0;

    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            dst[k] = left[i];
            i += 1;
        } else {
            dst[k] = right[j];
            j += 1;
        }
        k += 1;
    }

    while i < left.len() {
        dst[k] = left[i];
        i += 1;
        k += 1;
    }

    while j < right.len() {
        dst[k] = right[j];
        j += 1;
        k += 1;
    }
}
