//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer validates a sort configuration and executes it: fail-fast
//! checks for range bounds and builder parameters, dispatch from the
//! configured [`Algorithm`](crate::algorithms::Algorithm) to the matching
//! core, and the report type describing what ran.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Evaluation
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fail-fast parameter and range validation.
pub mod validator;

/// Sort execution and algorithm dispatch.
pub mod executor;

/// Sort report output type.
pub mod output;
