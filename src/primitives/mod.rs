//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive abstractions used throughout the crate:
//! shared error types and the randomness provider. It has zero internal
//! dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Evaluation
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Randomness provider and shuffling.
pub mod random;
