//! Uniformly distributed scalar generation.
//!
//! A [`ScalarGenerator`] is bound to one value category at construction
//! time through the sealed [`Category`] trait: integral types sample the
//! inclusive range `[low, high]`, real types sample the half-open range
//! `[low, high)`. Requesting a category outside the sealed set is a
//! compile error, so an unsupported category can never reach a running
//! program.

use crate::error::GeneratorError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;
use std::fmt::Display;
use std::marker::PhantomData;

mod sealed {
    /// Closes the category set to the impls in this module.
    pub trait Sealed {}
}

/// A value category the scalar generator knows how to produce.
///
/// Implemented for the primitive integer types (inclusive-range sampling)
/// and the primitive float types (half-open-range sampling). The trait is
/// sealed: these two families are the closed set of supported categories.
pub trait Category: sealed::Sealed + Copy + PartialOrd + Display {
    /// Draw one uniformly distributed value between the given bounds.
    ///
    /// Bound semantics are per-category: integral draws include `high`,
    /// real draws exclude it. Callers have already checked `low <= high`.
    fn draw<R: Rng>(rng: &mut R, low: Self, high: Self) -> Self;
}

macro_rules! integral_category {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl Category for $t {
            fn draw<R: Rng>(rng: &mut R, low: Self, high: Self) -> Self {
                rng.random_range(low..=high)
            }
        }
    )*};
}

macro_rules! real_category {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl Category for $t {
            fn draw<R: Rng>(rng: &mut R, low: Self, high: Self) -> Self {
                // The half-open sampler rejects an empty range; a
                // degenerate range has exactly one representable result.
                if low == high {
                    low
                } else {
                    rng.random_range(low..high)
                }
            }
        }
    )*};
}

integral_category!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
real_category!(f32, f64);

/// Generator for uniformly distributed scalar values of one category.
///
/// Owns a seeded random engine. Every call advances the engine state, so
/// reproducibility under a fixed seed depends on call order. The type is
/// deliberately not `Clone`: duplicating the engine would produce two
/// correlated streams from the same point in the sequence.
///
/// A `ScalarGenerator` must not be shared across threads without external
/// synchronization; sampling takes `&mut self`, so the borrow checker
/// enforces exclusive access. For concurrent generation, create one
/// independently seeded instance per thread.
pub struct ScalarGenerator<T: Category> {
    /// Seeded random engine, advanced by every successful draw
    rng: StdRng,
    /// Category marker fixed at construction
    _category: PhantomData<T>,
}

impl<T: Category> ScalarGenerator<T> {
    /// Create a generator seeded from the operating system entropy source.
    pub fn new() -> Self {
        tracing::trace!("constructed entropy-seeded scalar generator");
        Self {
            rng: StdRng::from_os_rng(),
            _category: PhantomData,
        }
    }

    /// Create a generator with an explicit seed for reproducibility.
    ///
    /// Two generators built from the same seed produce identical value
    /// sequences when called with identical argument sequences.
    pub fn from_seed(seed: u64) -> Self {
        tracing::trace!(seed, "constructed seeded scalar generator");
        Self {
            rng: StdRng::seed_from_u64(seed),
            _category: PhantomData,
        }
    }

    /// Generate a uniformly distributed value between `low` and `high`.
    ///
    /// For integral categories the range is inclusive on both ends,
    /// `[low, high]`. For real categories the upper bound is exclusive,
    /// `[low, high)`. The asymmetry follows the underlying uniform
    /// samplers and is part of the contract.
    ///
    /// Returns [`GeneratorError::InvalidRange`] when `low > high`, or when
    /// the bounds are unordered (a NaN float bound). The generator remains
    /// valid and reusable after a failed call.
    pub fn generate(&mut self, low: T, high: T) -> Result<T, GeneratorError> {
        // partial_cmp returns None for NaN bounds; those are invalid too
        let ordered = matches!(
            low.partial_cmp(&high),
            Some(Ordering::Less) | Some(Ordering::Equal)
        );
        if !ordered {
            return Err(GeneratorError::invalid_range(low, high));
        }
        Ok(T::draw(&mut self.rng, low, high))
    }
}

impl<T: Category> Default for ScalarGenerator<T> {
    fn default() -> Self {
        Self::new()
    }
}
