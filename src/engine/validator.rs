//! Input validation for sort configuration and sub-ranges.
//!
//! ## Purpose
//!
//! This module provides validation functions for sorter configuration and
//! sub-range bounds. Malformed input is a programming error and fails fast
//! rather than being silently clamped.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered, before
//!   any mutation of the sequence.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **No-error-on-empty**: Empty and singleton sequences are valid input to
//!   every routine; only out-of-bounds indices and misconfiguration fail.
//!
//! ## Key concepts
//!
//! * **Range bounds**: A sub-range index at or past the sequence length is
//!   rejected; a degenerate range (`low >= high`) inside the bounds is the
//!   sorter's documented no-op base case, not an error.
//! * **Budget bounds**: A shuffle budget of zero can never make progress and
//!   is rejected at build time.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not perform sorting or mutate the sequence.
//! * This module does not provide automatic correction of invalid inputs.

// Internal dependencies
use crate::primitives::errors::SortError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for sorter configuration and sub-range bounds.
///
/// Provides static methods returning `Result<(), SortError>` that fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate closed sub-range bounds against the sequence length.
    ///
    /// Both `low` and `high` must index into the sequence. The relative
    /// order of `low` and `high` is not checked here: `low >= high` is the
    /// sorter's no-op base case.
    pub fn validate_range(low: usize, high: usize, len: usize) -> Result<(), SortError> {
        if low >= len || high >= len {
            return Err(SortError::InvalidRange { low, high, len });
        }
        Ok(())
    }

    /// Validate the bogo shuffle budget.
    pub fn validate_shuffle_budget(max_shuffles: u64) -> Result<(), SortError> {
        if max_shuffles == 0 {
            return Err(SortError::InvalidShuffleBudget(max_shuffles));
        }
        Ok(())
    }

    /// Check that no builder parameter was configured more than once.
    pub fn validate_no_duplicates(duplicate: Option<&'static str>) -> Result<(), SortError> {
        if let Some(parameter) = duplicate {
            return Err(SortError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
