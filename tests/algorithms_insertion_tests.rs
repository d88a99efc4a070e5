#![cfg(feature = "dev")]
//! Tests for the insertion sort core.
//!
//! These tests verify the shift-based insertion sort for:
//! - Ascending order and permutation preservation
//! - Stability (only strictly greater predecessors shift)
//! - Adaptive behavior on already-sorted input
//!
//! ## Test Organization
//!
//! 1. **Basic Sorting** - simple, sorted, reverse inputs
//! 2. **Edge Cases** - empty, singleton, all-equal
//! 3. **Stability** - key-only ordering with distinguishable tags

use core::cmp::Ordering;

use sortkit::internals::algorithms::insertion;

/// Element whose ordering ignores its tag, so stability is observable.
#[derive(Debug, Clone, Copy)]
struct Tagged {
    key: i64,
    tag: usize,
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Tagged {}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

// ============================================================================
// Basic Sorting Tests
// ============================================================================

/// Test sorting a small unsorted slice.
#[test]
fn test_insertion_basic() {
    let mut data = vec![5i64, 1, 4, 2, 3];
    insertion::sort(&mut data);
    assert_eq!(data, vec![1, 2, 3, 4, 5], "Slice should be sorted ascending");
}

/// Test the best case: already-sorted input.
///
/// A single linear pass with no shifting; the sequence is unchanged.
#[test]
fn test_insertion_already_sorted() {
    let mut data = vec![1i64, 2, 3, 4, 5];
    insertion::sort(&mut data);
    assert_eq!(data, vec![1, 2, 3, 4, 5]);
}

/// Test the worst case: reverse-sorted input.
#[test]
fn test_insertion_reverse_sorted() {
    let mut data = vec![5i64, 4, 3, 2, 1];
    insertion::sort(&mut data);
    assert_eq!(data, vec![1, 2, 3, 4, 5]);
}

/// Test sorting with negative values and duplicates.
#[test]
fn test_insertion_mixed_values() {
    let mut data = vec![0i64, -3, 7, -3, 2];
    insertion::sort(&mut data);
    assert_eq!(data, vec![-3, -3, 0, 2, 7]);
}

// ============================================================================
// Edge Case Tests
// ============================================================================

/// Test sorting an empty slice.
#[test]
fn test_insertion_empty() {
    let mut data: Vec<i64> = vec![];
    insertion::sort(&mut data);
    assert!(data.is_empty());
}

/// Test sorting a single-element slice.
#[test]
fn test_insertion_single() {
    let mut data = vec![7i64];
    insertion::sort(&mut data);
    assert_eq!(data, vec![7]);
}

/// Test sorting an all-equal slice.
#[test]
fn test_insertion_all_equal() {
    let mut data = vec![5i64, 5, 5, 5];
    insertion::sort(&mut data);
    assert_eq!(data, vec![5, 5, 5, 5]);
}

// ============================================================================
// Stability Tests
// ============================================================================

/// Test that equal-keyed elements keep their relative input order.
///
/// Only strictly greater predecessors are shifted, so equal keys never
/// leapfrog each other.
#[test]
fn test_insertion_stability() {
    let mut data = vec![
        Tagged { key: 3, tag: 0 },
        Tagged { key: 3, tag: 1 },
        Tagged { key: 1, tag: 2 },
    ];
    insertion::sort(&mut data);

    let tags: Vec<usize> = data.iter().map(|t| t.tag).collect();
    assert_eq!(tags, vec![2, 0, 1], "Equal keys should preserve input order");
}
