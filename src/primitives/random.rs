//! Randomness provider for pivot selection and shuffling.
//!
//! ## Purpose
//!
//! This module defines the [`RandomSource`] trait that randomized routines
//! (quicksort pivot selection, bogo shuffling) draw from, together with the
//! default [`Lcg64`] generator and a Fisher-Yates [`shuffle`].
//!
//! ## Design notes
//!
//! * **Injectable**: Randomness is an explicit parameter, not a hidden
//!   global, so tests can supply a deterministic source and verify specific
//!   pivot and shuffle sequences.
//! * **No-std**: The default generator is a 64-bit LCG with no platform
//!   dependencies; entropy seeding is only available with `std`.
//! * **Not cryptographic**: Statistical quality is sufficient for pivot
//!   selection and shuffling, nothing more.
//!
//! ## Invariants
//!
//! * `next_below(bound)` returns a value in `[0, bound)` for `bound > 0`.
//! * `shuffle` leaves the slice a permutation of its input.
//!
//! ## Non-goals
//!
//! * This module does not provide cryptographically secure randomness.
//! * This module does not manage per-thread or global generator state.

// ============================================================================
// Random Source Trait
// ============================================================================

/// Source of randomness for pivot selection and shuffling.
///
/// Implementations only need [`next_u32`](Self::next_u32); the derived
/// methods are provided. Hand-written implementations are useful in tests to
/// pin down exact pivot or shuffle sequences.
pub trait RandomSource {
    /// Produce the next 32 random bits.
    fn next_u32(&mut self) -> u32;

    /// Produce a value uniformly distributed in `[0, bound)`.
    ///
    /// `bound` must be greater than zero.
    fn next_below(&mut self, bound: usize) -> usize {
        (self.next_u32() as usize) % bound
    }
}

// ============================================================================
// Default Generator
// ============================================================================

/// Seed used when no entropy source is available.
const FALLBACK_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

/// Default pseudo-random generator.
///
/// A 64-bit linear congruential generator emitting the high 32 bits of the
/// state each step. Fast, deterministic, and dependency-free.
#[derive(Debug, Clone)]
pub struct Lcg64 {
    state: u64,
}

impl Lcg64 {
    /// Create a generator from an explicit seed.
    ///
    /// The same seed always produces the same sequence.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Create a generator seeded from system time.
    #[cfg(feature = "std")]
    pub fn from_entropy() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(FALLBACK_SEED);
        Self::new(seed)
    }

    /// Create a generator from the fixed fallback seed.
    #[cfg(not(feature = "std"))]
    pub fn from_entropy() -> Self {
        Self::new(FALLBACK_SEED)
    }
}

impl RandomSource for Lcg64 {
    fn next_u32(&mut self) -> u32 {
        // LCG constants for 64-bit state
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
}

// ============================================================================
// Shuffling
// ============================================================================

/// Apply a uniform random permutation to the slice (Fisher-Yates).
pub fn shuffle<T, R: RandomSource + ?Sized>(data: &mut [T], rng: &mut R) {
    let n = data.len();
    for i in (1..n).rev() {
        let j = rng.next_below(i + 1);
        data.swap(i, j);
    }
}
