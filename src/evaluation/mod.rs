//! Layer 3: Evaluation
//!
//! # Purpose
//!
//! This layer provides the operations derived from a sequence's ordering:
//! binary search over an already-sorted sequence, and order statistics
//! (minimum, maximum, median, arithmetic mean).
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Evaluation ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Binary search with insertion-point sentinel.
pub mod search;

/// Order statistics (min, max, median, average).
pub mod statistics;
