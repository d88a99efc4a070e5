//! Layer 2: Algorithms
//!
//! # Purpose
//!
//! This layer provides the sorting cores. Each routine mutates a caller-owned
//! slice into non-decreasing order and returns; there is no shared state
//! between calls.
//!
//! Cores are generic over `Copy + Ord` so stability is observable under a
//! key-only ordering; the public API narrows the bound to signed primitive
//! integers.

/// Randomized-pivot quicksort (full slice and sub-range).
pub mod quicksort;

/// Top-down stable mergesort.
pub mod mergesort;

/// Adaptive, stable insertion sort.
pub mod insertion;

/// Adjacent-swap bubble sort.
pub mod bubble;

/// Shuffle-until-sorted bogo sort.
pub mod bogo;

// ============================================================================
// Algorithm Selection
// ============================================================================

/// Sorting algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Randomized-pivot quicksort. In-place, not stable, expected
    /// O(n log n); the only algorithm supporting sub-range sorting.
    #[default]
    Quicksort,

    /// Top-down mergesort. Stable, O(n log n) worst case, allocates working
    /// copies of both halves at each level.
    Mergesort,

    /// Insertion sort. Stable, in-place, adaptive: O(n) on already-sorted
    /// input, O(n^2) worst case.
    Insertion,

    /// Bubble sort. Stable, in-place, O(n^2); terminates after the first
    /// pass that performs no swap.
    Bubble,

    /// Bogo sort. Shuffle until sorted; probabilistic termination with
    /// factorially growing expected runtime. Opt-in baseline only.
    Bogo,
}

impl Algorithm {
    /// Human-readable algorithm name, used in errors and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Quicksort => "Quicksort",
            Self::Mergesort => "Mergesort",
            Self::Insertion => "Insertion",
            Self::Bubble => "Bubble",
            Self::Bogo => "Bogo",
        }
    }
}
