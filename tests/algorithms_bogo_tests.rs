#![cfg(feature = "dev")]
//! Tests for the bogo sort core.
//!
//! These tests verify shuffle-until-sorted behavior for:
//! - Trivially sorted inputs returning without shuffling
//! - Termination on small seeded inputs
//! - Shuffle budget exhaustion with a pinned random source
//! - The sortedness scan
//!
//! ## Test Organization
//!
//! 1. **Trivial Inputs** - empty, singleton, already sorted
//! 2. **Termination** - seeded small inputs
//! 3. **Budget** - capped variant success and exhaustion
//! 4. **Sortedness Scan** - is_sorted edge cases

use sortkit::internals::algorithms::bogo;
use sortkit::internals::primitives::errors::SortError;
use sortkit::internals::primitives::random::{Lcg64, RandomSource};

/// Random source that always returns zero.
///
/// Under a constant-zero source the Fisher-Yates pass becomes a fixed
/// permutation, so shuffle sequences are fully pinned: `[1, 3, 2]` cycles
/// through `[3, 2, 1]` and `[2, 1, 3]` forever without reaching sorted
/// order.
struct AlwaysZero;

impl RandomSource for AlwaysZero {
    fn next_u32(&mut self) -> u32 {
        0
    }
}

// ============================================================================
// Trivial Input Tests
// ============================================================================

/// Test that an empty slice returns immediately without shuffling.
#[test]
fn test_bogo_empty() {
    let mut data: Vec<i64> = vec![];
    let shuffles = bogo::sort(&mut data, &mut AlwaysZero);
    assert_eq!(shuffles, 0, "Empty slice must not be shuffled");
}

/// Test that a single-element slice returns immediately without shuffling.
#[test]
fn test_bogo_single() {
    let mut data = vec![7i64];
    let shuffles = bogo::sort(&mut data, &mut AlwaysZero);
    assert_eq!(shuffles, 0, "Singleton slice must not be shuffled");
    assert_eq!(data, vec![7]);
}

/// Test that an already-sorted slice returns immediately.
#[test]
fn test_bogo_already_sorted() {
    let mut data = vec![1i64, 2, 3];
    let shuffles = bogo::sort(&mut data, &mut AlwaysZero);
    assert_eq!(shuffles, 0, "Sorted slice must not be shuffled");
    assert_eq!(data, vec![1, 2, 3]);
}

// ============================================================================
// Termination Tests
// ============================================================================

/// Test that a small seeded input reaches sorted order.
///
/// A generous budget keeps the test bounded; a three-element slice has six
/// permutations and sorts within a handful of shuffles in practice.
#[test]
fn test_bogo_sorts_small_input() {
    let mut data = vec![3i64, 1, 2];
    let mut rng = Lcg64::new(42);

    let shuffles = bogo::sort_capped(&mut data, &mut rng, 1_000_000)
        .expect("Three elements should sort well within the budget");

    assert_eq!(data, vec![1, 2, 3]);
    assert!(shuffles >= 1, "An unsorted input requires at least one shuffle");
}

// ============================================================================
// Budget Tests
// ============================================================================

/// Test budget exhaustion with a pinned shuffle sequence.
///
/// Under `AlwaysZero` the input `[1, 3, 2]` cycles without ever sorting, so
/// the budget must be exhausted exactly.
#[test]
fn test_bogo_budget_exhausted() {
    let mut data = vec![1i64, 3, 2];

    let result = bogo::sort_capped(&mut data, &mut AlwaysZero, 10);

    assert_eq!(
        result,
        Err(SortError::ShuffleBudgetExhausted { attempts: 10 }),
        "Pinned cycle should exhaust the budget"
    );

    // The slice is left in its last shuffled state, still a permutation.
    let mut remaining = data.clone();
    remaining.sort();
    assert_eq!(remaining, vec![1, 2, 3], "Multiset must be preserved");
}

/// Test that a trivially sorted input succeeds even with a budget of one.
#[test]
fn test_bogo_budget_unused_on_sorted_input() {
    let mut data = vec![1i64, 2];
    let shuffles = bogo::sort_capped(&mut data, &mut AlwaysZero, 1)
        .expect("Sorted input consumes no budget");
    assert_eq!(shuffles, 0);
}

// ============================================================================
// Sortedness Scan Tests
// ============================================================================

/// Test the linear sortedness scan.
#[test]
fn test_is_sorted() {
    assert!(bogo::is_sorted::<i64>(&[]));
    assert!(bogo::is_sorted(&[7i64]));
    assert!(bogo::is_sorted(&[1i64, 1, 2, 3]));
    assert!(!bogo::is_sorted(&[2i64, 1]));
    assert!(!bogo::is_sorted(&[1i64, 3, 2]));
}
