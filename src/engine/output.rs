//! Output types for sort execution.
//!
//! ## Purpose
//!
//! This module defines the [`SortReport`] struct returned by the engine,
//! describing which algorithm ran, over how many elements, and how many
//! shuffles bogo sort performed.
//!
//! ## Design notes
//!
//! * **The mutation is the result**: The sorted sequence lives in the
//!   caller's slice; the report only carries metadata about the run.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `shuffles` is `Some` exactly when the bogo algorithm ran.
//!
//! ## Non-goals
//!
//! * This module does not perform sorting; it only describes a completed run.

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::algorithms::Algorithm;

// ============================================================================
// Report Structure
// ============================================================================

/// Metadata describing a completed sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortReport {
    /// Algorithm that performed the sort.
    pub algorithm: Algorithm,

    /// Number of elements in the sorted range.
    pub len: usize,

    /// Shuffles performed (bogo sort only).
    pub shuffles: Option<u64>,
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SortReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} sorted {} element(s)", self.algorithm.name(), self.len)?;
        if let Some(shuffles) = self.shuffles {
            write!(f, " in {} shuffle(s)", shuffles)?;
        }
        Ok(())
    }
}
