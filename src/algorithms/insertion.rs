//! Adaptive, stable insertion sort.
//!
//! ## Purpose
//!
//! This module provides an in-place shift-based sort: each element is held
//! out, every preceding element strictly greater than it is shifted one
//! position to the right, and the held value is placed into the gap.
//!
//! ## Design notes
//!
//! * **Adaptive**: An already-sorted input performs a single linear pass
//!   with no shifting; reverse-sorted input performs the maximum O(n^2)
//!   shifting.
//! * **Stability**: Only strictly greater predecessors are shifted, so equal
//!   elements keep their relative input order.
//!
//! ## Invariants
//!
//! * After processing position `i`, the prefix `[0, i]` is sorted.

// ============================================================================
// Sorting Functions
// ============================================================================

/// Sort the slice in place, ascending, stable.
pub fn sort<T: Copy + Ord>(data: &mut [T]) {
    for i in 1..data.len() {
        let current = data[i];

        let mut j = i;
        while j > 0 && data[j - 1] > current {
            data[j] = data[j - 1];
            j -= 1;
        }

        data[j] = current;
    }
}
