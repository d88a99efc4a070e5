//! High-level API for sequence sorting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder for configuring the sorting algorithm, randomness seed, and bogo
//! shuffle budget, producing a reusable [`Sorter`].
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults (quicksort,
//!   entropy seeding, no shuffle budget).
//! * **Validated**: Parameters are validated when `.build()` is called;
//!   duplicate configuration is tracked and rejected there.
//! * **Type-Safe**: Sorting is generic over signed primitive integers
//!   (`PrimInt + Signed`); the sequence is borrowed mutably for the duration
//!   of the call only.
//!
//! ## Key concepts
//!
//! * **Configuration flow**: `SorterBuilder::new()` → chained setters →
//!   `.build()` → [`Sorter::sort`] / [`Sorter::sort_range`].
//! * **Derived operations**: [`binary_search`], [`min`], [`max`],
//!   [`median`], and [`average`] are plain functions re-exported here; they
//!   take no configuration.

// External dependencies
use num_traits::{PrimInt, Signed};

// Internal dependencies
use crate::engine::executor::{SortConfig, SortExecutor};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::Algorithm;
pub use crate::engine::output::SortReport;
pub use crate::evaluation::search::binary_search;
pub use crate::evaluation::statistics::{average, max, median, min};
pub use crate::primitives::errors::SortError;
pub use crate::primitives::random::{Lcg64, RandomSource};

// ============================================================================
// Sorter Builder
// ============================================================================

/// Fluent builder for configuring a [`Sorter`].
#[derive(Debug, Clone, Default)]
pub struct SorterBuilder {
    /// Selected algorithm (default: quicksort).
    pub algorithm: Option<Algorithm>,

    /// Seed for randomized algorithms.
    pub seed: Option<u64>,

    /// Shuffle budget (bogo only).
    pub max_shuffles: Option<u64>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl SorterBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            algorithm: None,
            seed: None,
            max_shuffles: None,
            duplicate_param: None,
        }
    }

    /// Select the sorting algorithm.
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        if self.algorithm.is_some() {
            self.duplicate_param = Some("algorithm");
        }
        self.algorithm = Some(algorithm);
        self
    }

    /// Set the seed for randomized algorithms (quicksort, bogo).
    ///
    /// The same seed produces identical pivot and shuffle sequences across
    /// runs. Without a seed, the engine seeds from system time under `std`
    /// and from a fixed constant otherwise.
    pub fn seed(mut self, seed: u64) -> Self {
        if self.seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.seed = Some(seed);
        self
    }

    /// Cap the number of shuffles bogo sort may perform (bogo only).
    ///
    /// An additive contract: exhausting the budget returns
    /// [`SortError::ShuffleBudgetExhausted`] with the sequence left in its
    /// last shuffled state. Uncapped bogo carries no latency guarantee.
    pub fn max_shuffles(mut self, max_shuffles: u64) -> Self {
        if self.max_shuffles.is_some() {
            self.duplicate_param = Some("max_shuffles");
        }
        self.max_shuffles = Some(max_shuffles);
        self
    }

    /// Build the sorter, validating the configuration.
    pub fn build(self) -> Result<Sorter, SortError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let algorithm = self.algorithm.unwrap_or_default();

        // The shuffle budget only means something to bogo sort
        if let Some(budget) = self.max_shuffles {
            if algorithm != Algorithm::Bogo {
                return Err(SortError::UnsupportedFeature {
                    algorithm: algorithm.name(),
                    feature: "shuffle budget",
                });
            }
            Validator::validate_shuffle_budget(budget)?;
        }

        Ok(Sorter {
            config: SortConfig {
                algorithm,
                seed: self.seed,
                max_shuffles: self.max_shuffles,
            },
        })
    }
}

// ============================================================================
// Sorter
// ============================================================================

/// Configured, reusable sorter.
///
/// Every call borrows the sequence mutably for its own duration only; the
/// sorter retains nothing between calls, and each call constructs its own
/// random source so seeded runs stay reproducible.
#[derive(Debug, Clone)]
pub struct Sorter {
    config: SortConfig,
}

impl Sorter {
    /// Sort the full sequence in place, ascending.
    ///
    /// Empty and single-element sequences are valid and return immediately.
    pub fn sort<T: PrimInt + Signed>(&self, data: &mut [T]) -> Result<SortReport, SortError> {
        SortExecutor::run(&self.config, data)
    }

    /// Sort the closed sub-range `[low, high]` in place, ascending.
    ///
    /// Quicksort only. Fails fast with [`SortError::InvalidRange`] when a
    /// bound is at or past the sequence length, leaving the sequence
    /// unmutated; `low >= high` inside the bounds is a no-op.
    pub fn sort_range<T: PrimInt + Signed>(
        &self,
        data: &mut [T],
        low: usize,
        high: usize,
    ) -> Result<SortReport, SortError> {
        SortExecutor::run_range(&self.config, data, low, high)
    }
}
