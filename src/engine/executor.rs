//! Execution engine for sort operations.
//!
//! ## Purpose
//!
//! This module dispatches a validated [`SortConfig`] to the matching
//! algorithm core: it constructs the random source from the configured seed,
//! enforces the bogo shuffle budget, and restricts sub-range sorting to
//! quicksort.
//!
//! ## Design notes
//!
//! * **Stateless**: The executor holds no state; every run constructs its
//!   own random source, so a configuration can be reused across calls and
//!   seeded runs stay reproducible.
//! * **Single-threaded**: Every operation runs to completion within the call
//!   that invoked it. The caller exclusively owns the sequence for the
//!   duration of the call; the engine performs no synchronization.
//!
//! ## Key concepts
//!
//! * **Seeding**: An explicit seed makes pivot selection and shuffling
//!   reproducible; without one the source is seeded from system time under
//!   `std` and from a fixed constant otherwise.
//! * **Sub-range rule**: Only quicksort defines a sub-range contract; every
//!   other algorithm reports `UnsupportedFeature`.
//!
//! ## Invariants
//!
//! * A failed validation leaves the sequence unmutated.
//!
//! ## Non-goals
//!
//! * This module does not implement the sorting algorithms themselves.
//! * This module does not provide cancellation or timeouts; the bogo budget
//!   is the only bounded-latency facility.

// Internal dependencies
use crate::algorithms::{bogo, bubble, insertion, mergesort, quicksort, Algorithm};
use crate::engine::output::SortReport;
use crate::engine::validator::Validator;
use crate::primitives::errors::SortError;
use crate::primitives::random::Lcg64;

// ============================================================================
// Configuration
// ============================================================================

/// Validated sort configuration consumed by the executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    /// Algorithm to run.
    pub algorithm: Algorithm,

    /// Seed for randomized algorithms (quicksort, bogo).
    pub seed: Option<u64>,

    /// Shuffle budget (bogo only).
    pub max_shuffles: Option<u64>,
}

// ============================================================================
// Executor
// ============================================================================

/// Sort execution and algorithm dispatch.
pub struct SortExecutor;

impl SortExecutor {
    /// Sort the full slice according to `config`.
    pub fn run<T: Copy + Ord>(config: &SortConfig, data: &mut [T]) -> Result<SortReport, SortError> {
        let len = data.len();
        let mut shuffles = None;

        match config.algorithm {
            Algorithm::Quicksort => {
                let mut rng = Self::make_rng(config.seed);
                quicksort::sort(data, &mut rng);
            }
            Algorithm::Mergesort => mergesort::sort(data),
            Algorithm::Insertion => insertion::sort(data),
            Algorithm::Bubble => bubble::sort(data),
            Algorithm::Bogo => {
                let mut rng = Self::make_rng(config.seed);
                let performed = match config.max_shuffles {
                    Some(budget) => bogo::sort_capped(data, &mut rng, budget)?,
                    None => bogo::sort(data, &mut rng),
                };
                shuffles = Some(performed);
            }
        }

        Ok(SortReport {
            algorithm: config.algorithm,
            len,
            shuffles,
        })
    }

    /// Sort the closed sub-range `[low, high]` according to `config`.
    ///
    /// Only quicksort defines a sub-range contract. Bounds are validated
    /// before any mutation; a degenerate range (`low >= high`) inside the
    /// bounds is a no-op.
    pub fn run_range<T: Copy + Ord>(
        config: &SortConfig,
        data: &mut [T],
        low: usize,
        high: usize,
    ) -> Result<SortReport, SortError> {
        if config.algorithm != Algorithm::Quicksort {
            return Err(SortError::UnsupportedFeature {
                algorithm: config.algorithm.name(),
                feature: "sub-range sorting",
            });
        }

        Validator::validate_range(low, high, data.len())?;

        let mut rng = Self::make_rng(config.seed);
        quicksort::sort_range(data, low, high, &mut rng);

        // Closed range: empty when the bounds cross.
        let len = if high >= low { high - low + 1 } else { 0 };

        Ok(SortReport {
            algorithm: config.algorithm,
            len,
            shuffles: None,
        })
    }

    /// Construct the random source for one run.
    fn make_rng(seed: Option<u64>) -> Lcg64 {
        match seed {
            Some(seed) => Lcg64::new(seed),
            None => Lcg64::from_entropy(),
        }
    }
}
