//! Binary search over an ascending sequence.
//!
//! ## Purpose
//!
//! This module provides lookup over an already-sorted sequence, returning
//! either a matching index or a negative sentinel encoding the insertion
//! point.
//!
//! ## Design notes
//!
//! * **Sentinel encoding**: An absent target yields `-(insertion_index) - 1`,
//!   where `insertion_index` is the position at which the target would be
//!   inserted to keep the sequence sorted. The encoding is always strictly
//!   negative, so presence and absence never collide.
//! * **Duplicates**: When multiple equal elements exist, any one matching
//!   index is returned; no ordering guarantee among duplicates.
//!
//! ## Invariants
//!
//! * A non-negative return value `i` satisfies `data[i] == target`.
//! * A negative return value `s` decodes to the insertion index
//!   `(-s - 1)` in `[0, len]`.
//!
//! ## Non-goals
//!
//! * This module does not verify that the input is sorted; the result on an
//!   unsorted sequence is undefined.

// External dependencies
use core::cmp::Ordering;

// ============================================================================
// Search Functions
// ============================================================================

/// Search an ascending slice for `target`.
///
/// Returns the zero-based index of an occurrence of `target`, or the
/// negative insertion sentinel `-(insertion_index) - 1` if absent.
pub fn binary_search<T: Ord>(data: &[T], target: T) -> isize {
    let mut low = 0isize;
    let mut high = data.len() as isize - 1;

    while low <= high {
        let middle = low + (high - low) / 2;

        match data[middle as usize].cmp(&target) {
            Ordering::Less => low = middle + 1,
            Ordering::Greater => high = middle - 1,
            Ordering::Equal => return middle,
        }
    }

    // `low` converged on the insertion point.
    -low - 1
}
