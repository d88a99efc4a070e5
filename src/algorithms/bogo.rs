//! Shuffle-until-sorted bogo sort.
//!
//! ## Purpose
//!
//! This module provides the probabilistic baseline sorter: apply a uniform
//! random permutation to the full slice until a linear scan confirms it is
//! non-decreasing.
//!
//! ## Design notes
//!
//! * **Unbounded latency**: Expected running time grows factorially with
//!   length. Callers needing bounded behavior use [`sort_capped`], an
//!   additive contract that never changes the semantics of [`sort`].
//! * **Trivially sorted inputs**: Empty and single-element slices return
//!   without shuffling. The original system also treated an absent (null)
//!   sequence as trivially sorted; Rust references cannot be null, so that
//!   case maps onto the empty-slice fast path.
//!
//! ## Invariants
//!
//! * On return from [`sort`], the slice is a non-decreasing permutation of
//!   its input multiset.
//! * On budget exhaustion, the slice is still a permutation of its input
//!   (left in its last shuffled state).
//!
//! ## Non-goals
//!
//! * This module carries no correctness advantage over the deterministic
//!   sorters; it exists only as a probabilistic baseline.

// Internal dependencies
use crate::primitives::errors::SortError;
use crate::primitives::random::{shuffle, RandomSource};

// ============================================================================
// Sorting Functions
// ============================================================================

/// Shuffle until sorted. Returns the number of shuffles performed.
///
/// No latency guarantee whatsoever; see [`sort_capped`] for a bounded
/// variant.
pub fn sort<T, R>(data: &mut [T], rng: &mut R) -> u64
where
    T: Copy + Ord,
    R: RandomSource + ?Sized,
{
    let mut attempts = 0;
    while !is_sorted(data) {
        shuffle(data, rng);
        attempts += 1;
    }
    attempts
}

/// Shuffle until sorted, giving up after `max_shuffles` shuffles.
///
/// Returns the number of shuffles performed on success. On exhaustion the
/// slice is left in its last shuffled state (still a permutation of the
/// input) and [`SortError::ShuffleBudgetExhausted`] is returned.
pub fn sort_capped<T, R>(data: &mut [T], rng: &mut R, max_shuffles: u64) -> Result<u64, SortError>
where
    T: Copy + Ord,
    R: RandomSource + ?Sized,
{
    let mut attempts = 0;
    while !is_sorted(data) {
        if attempts == max_shuffles {
            return Err(SortError::ShuffleBudgetExhausted { attempts });
        }
        shuffle(data, rng);
        attempts += 1;
    }
    Ok(attempts)
}

// ============================================================================
// Sortedness Check
// ============================================================================

/// Linear scan for non-decreasing order.
///
/// Empty and single-element slices are trivially sorted.
pub fn is_sorted<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
