//! Randomized-pivot quicksort.
//!
//! ## Purpose
//!
//! This module provides an in-place, recursive, divide-and-conquer sort over
//! a full slice or a closed sub-range `[low, high]`, partitioning each
//! sub-range around a uniformly random pivot.
//!
//! ## Design notes
//!
//! * **Randomized pivot**: The pivot index is drawn uniformly from
//!   `[low, high)` via the injected [`RandomSource`], defeating adversarial
//!   already-sorted or reverse-sorted inputs that would force O(n^2)
//!   behavior with a fixed-position pivot.
//! * **Two-pointer partition**: The pivot value is relocated to `high`, then
//!   `[low, high-1]` is scanned from both ends until the pointers meet.
//! * **Recursion depth**: Expected O(log n) with random pivots; adversarial
//!   value distributions can degrade toward O(n) with low probability.
//!
//! ## Invariants
//!
//! * The output sub-range is a permutation of the input multiset in
//!   non-decreasing order.
//! * Every partition call makes progress: each scan branch either advances a
//!   pointer or terminates on pointer equality, so duplicate-heavy input
//!   cannot stall the loop.
//!
//! ## Non-goals
//!
//! * This module does not validate range bounds; the engine's validator
//!   rejects malformed ranges before the core runs.
//! * This module does not guarantee stability.

// Internal dependencies
use crate::primitives::random::RandomSource;

// ============================================================================
// Sorting Functions
// ============================================================================

/// Sort the full slice in place, ascending.
pub fn sort<T, R>(data: &mut [T], rng: &mut R)
where
    T: Copy + Ord,
    R: RandomSource + ?Sized,
{
    if data.len() > 1 {
        sort_range(data, 0, data.len() - 1, rng);
    }
}

/// Sort the closed sub-range `[low, high]` in place, ascending.
///
/// Both bounds must be within the slice (`high < data.len()`). A degenerate
/// range (`low >= high`) holds at most one element and returns immediately.
pub fn sort_range<T, R>(data: &mut [T], low: usize, high: usize, rng: &mut R)
where
    T: Copy + Ord,
    R: RandomSource + ?Sized,
{
    debug_assert!(high < data.len());

    if low >= high {
        return;
    }

    // Pivot drawn from [low, high): the pivot is relocated to `high` before
    // partitioning, so `high` itself is excluded from the draw.
    let pivot_index = low + rng.next_below(high - low);
    let pivot = data[pivot_index];
    data.swap(pivot_index, high);

    let split = partition(data, low, high, pivot);

    if split > low {
        sort_range(data, low, split - 1, rng);
    }
    if split < high {
        sort_range(data, split + 1, high, rng);
    }
}

// ============================================================================
// Partitioning
// ============================================================================

/// Partition `[low, high-1]` around `pivot`, whose value sits at `high`.
///
/// Two pointers converge from both ends: the left pointer advances over
/// elements `<= pivot`, the right pointer retreats over elements `>= pivot`,
/// and out-of-order pairs are swapped until the pointers meet. After the
/// scan, the element at the left pointer is swapped into the pivot's slot
/// only if it is strictly greater than the pivot; otherwise every remaining
/// element is `<= pivot` and `high` itself is the split point.
///
/// Returns the pivot's final index.
fn partition<T: Copy + Ord>(data: &mut [T], low: usize, high: usize, pivot: T) -> usize {
    let mut left = low;
    let mut right = high - 1;

    while left < right {
        while data[left] <= pivot && left < right {
            left += 1;
        }
        while data[right] >= pivot && left < right {
            right -= 1;
        }
        data.swap(left, right);
    }

    if data[left] > data[high] {
        data.swap(left, high);
        left
    } else {
        high
    }
}
