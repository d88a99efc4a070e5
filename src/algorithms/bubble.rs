//! Adjacent-swap bubble sort.
//!
//! ## Purpose
//!
//! This module provides the fixed-point bubble sort: repeated left-to-right
//! passes swap each adjacent out-of-order pair until a complete pass performs
//! zero swaps.
//!
//! ## Design notes
//!
//! * **Termination**: A pass with no swap proves the slice is sorted, so an
//!   already-sorted input terminates after exactly one verifying pass.
//! * **Stability**: Only strictly out-of-order pairs are swapped, so equal
//!   elements keep their relative input order.
//! * **Complexity**: O(n^2) worst and average case.

// ============================================================================
// Sorting Functions
// ============================================================================

/// Sort the slice in place, ascending, stable.
pub fn sort<T: Copy + Ord>(data: &mut [T]) {
    if data.len() < 2 {
        return;
    }

    let mut has_swapped = true;
    while has_swapped {
        has_swapped = false;

        for i in 0..data.len() - 1 {
            if data[i] > data[i + 1] {
                data.swap(i, i + 1);
                has_swapped = true;
            }
        }
    }
}
