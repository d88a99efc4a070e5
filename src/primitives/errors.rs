//! Error types for sorting and search operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur when configuring
//! a sorter or running one of its operations: malformed sub-ranges, shuffle
//! budget problems, and builder misconfiguration.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., offending bounds
//!   and the actual sequence length).
//! * **Deferred**: Builder errors are caught and stored during configuration
//!   and surfaced at `build()`.
//! * **No-std**: Implements `Display` unconditionally and `std::error::Error`
//!   when `std` is enabled.
//!
//! ## Key concepts
//!
//! 1. **Range validation**: Sub-range sorts fail fast on out-of-bounds
//!    indices rather than silently clamping.
//! 2. **No-error-on-empty policy**: Empty and singleton sequences are valid
//!    input everywhere and never produce an error.
//! 3. **Additive budgets**: The bogo shuffle budget is opt-in; exhausting it
//!    is an error, not having one is not.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * A failed range check leaves the sequence unmutated.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or retry strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for sorting and search operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// Sub-range bounds fall outside the sequence.
    InvalidRange {
        /// Inclusive lower bound that was requested.
        low: usize,
        /// Inclusive upper bound that was requested.
        high: usize,
        /// Actual sequence length.
        len: usize,
    },

    /// Shuffle budget must be at least 1.
    InvalidShuffleBudget(u64),

    /// Bogo sort exhausted its shuffle budget without reaching sorted order.
    ShuffleBudgetExhausted {
        /// Number of shuffles performed before giving up.
        attempts: u64,
    },

    /// Selected algorithm does not support the requested feature
    /// (e.g., sub-range sorting with mergesort).
    UnsupportedFeature {
        /// Name of the algorithm (e.g., "Mergesort").
        algorithm: &'static str,
        /// Name of the unsupported feature.
        feature: &'static str,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidRange { low, high, len } => {
                write!(
                    f,
                    "Invalid range: [{low}, {high}] (sequence length is {len})"
                )
            }
            Self::InvalidShuffleBudget(budget) => {
                write!(f, "Invalid shuffle budget: {budget} (must be at least 1)")
            }
            Self::ShuffleBudgetExhausted { attempts } => {
                write!(
                    f,
                    "Shuffle budget exhausted after {attempts} shuffles without reaching sorted order"
                )
            }
            Self::UnsupportedFeature { algorithm, feature } => {
                write!(
                    f,
                    "Algorithm '{algorithm}' does not support feature: {feature}"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SortError {}
