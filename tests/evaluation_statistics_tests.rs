#![cfg(feature = "dev")]
//! Tests for order statistics.
//!
//! These tests verify minimum, maximum, median, and arithmetic mean for:
//! - Normal sequences, including negatives and duplicates
//! - The empty-sequence zero sentinels
//! - The positional (upper-middle) median contract for even lengths
//!
//! ## Test Organization
//!
//! 1. **Extrema** - min/max passes and sentinels
//! 2. **Median** - odd, even, singleton, unsorted input
//! 3. **Average** - mean values and the empty sentinel

use approx::assert_relative_eq;

use sortkit::internals::evaluation::statistics::{average, max, median, min};

// ============================================================================
// Extrema Tests
// ============================================================================

/// Test max over an unsorted sequence.
#[test]
fn test_max_basic() {
    assert_eq!(max(&[3i64, 9, 1, 7]), 9);
}

/// Test min over an unsorted sequence.
#[test]
fn test_min_basic() {
    assert_eq!(min(&[3i64, 9, 1, 7]), 1);
}

/// Test extrema with negative values.
#[test]
fn test_extrema_negative() {
    let data = [-5i64, -1, -9, -3];
    assert_eq!(max(&data), -1);
    assert_eq!(min(&data), -9);
}

/// Test the empty-sequence sentinel contract.
///
/// Empty input returns 0 by documented contract, not an error.
#[test]
fn test_extrema_empty_sentinel() {
    assert_eq!(max(&[] as &[i64]), 0);
    assert_eq!(min(&[] as &[i64]), 0);
}

/// Test extrema over a single element.
#[test]
fn test_extrema_single() {
    assert_eq!(max(&[-7i64]), -7);
    assert_eq!(min(&[-7i64]), -7);
}

// ============================================================================
// Median Tests
// ============================================================================

/// Test the true median of an odd-length sequence.
#[test]
fn test_median_odd() {
    assert_eq!(median(&[3i64, 1, 2]), 2);
}

/// Test the even-length median contract.
///
/// Even lengths return the upper of the two middle elements, not their
/// average: median([4,3,2,1]) is 3, not 2.5.
#[test]
fn test_median_even_upper_middle() {
    assert_eq!(median(&[4i64, 3, 2, 1]), 3);
}

/// Test the median of a singleton.
#[test]
fn test_median_single() {
    assert_eq!(median(&[42i64]), 42);
}

/// Test the empty-sequence sentinel.
#[test]
fn test_median_empty_sentinel() {
    assert_eq!(median(&[] as &[i64]), 0);
}

/// Test that median does not mutate its input.
#[test]
fn test_median_input_untouched() {
    let data = [5i64, 1, 4, 2, 3];
    let _ = median(&data);
    assert_eq!(data, [5, 1, 4, 2, 3], "Median sorts a copy, not the input");
}

// ============================================================================
// Average Tests
// ============================================================================

/// Test the arithmetic mean.
#[test]
fn test_average_basic() {
    assert_relative_eq!(average(&[1i64, 2, 3, 4]), 2.5);
}

/// Test the mean of negative values.
#[test]
fn test_average_negative() {
    assert_relative_eq!(average(&[-2i64, -4]), -3.0);
}

/// Test a non-integral mean.
#[test]
fn test_average_fractional() {
    assert_relative_eq!(average(&[1i64, 2]), 1.5);
}

/// Test the empty-sequence sentinel.
#[test]
fn test_average_empty_sentinel() {
    assert_relative_eq!(average(&[] as &[i64]), 0.0);
}
