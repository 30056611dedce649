//! Uniform pseudo-random value generation with minimal setup.
//!
//! This crate provides generators for three value categories, each bound
//! to one seeded random engine:
//!
//! - [`ScalarGenerator`] - uniformly distributed integers over an
//!   inclusive range `[low, high]`, or floats over a half-open range
//!   `[low, high)`, with the category fixed at construction through the
//!   sealed [`Category`] trait
//! - [`StringGenerator`] - random strings of fixed or ranged length,
//!   drawn character by character from a configurable alphabet
//! - [`alphabet`] - pure constructors for the canonical alphabets
//!   (lowercase, uppercase, numeric, alpha, alphanumeric, punctuation,
//!   printable, hexadecimal)
//!
//! # Architecture
//!
//! ```text
//! ScalarGenerator<T: Category>      StringGenerator
//! ┌──────────────────────┐          ┌──────────────────────────┐
//! │ rng (StdRng, seeded) │          │ ScalarGenerator<usize>   │
//! │ category: T          │          │   - length selection     │
//! └──────────────────────┘          │   - per-char index draws │
//!                                   └────────────┬─────────────┘
//!                                                │
//!                                         alphabet catalog
//! ```
//!
//! Each generator owns exactly one engine, seeded once at construction
//! (from OS entropy, or from an explicit seed for reproducibility). The
//! generators are not `Clone` and sample through `&mut self`: duplicating
//! or sharing an engine would produce correlated streams. For concurrent
//! use, build one independently seeded instance per thread.
//!
//! # Example
//!
//! ```rust
//! use unirand::{alphabet, ScalarGenerator, StringGenerator};
//!
//! // Reproducible dice rolls: inclusive integer range
//! let mut dice = ScalarGenerator::<u32>::from_seed(42);
//! let roll = dice.generate(1, 6).unwrap();
//! assert!((1..=6).contains(&roll));
//!
//! // Uniform reals: half-open range, 1.0 is never returned
//! let mut reals = ScalarGenerator::<f64>::from_seed(42);
//! let sample = reals.generate(0.0, 1.0).unwrap();
//! assert!((0.0..1.0).contains(&sample));
//!
//! // Hexadecimal token with a length drawn from [8, 12]
//! let mut tokens = StringGenerator::from_seed(42);
//! let token = tokens
//!     .generate_ranged(8, 12, Some(&alphabet::hexadecimal()))
//!     .unwrap();
//! assert!((8..=12).contains(&token.len()));
//! ```
//!
//! Range validity (`low <= high`) and alphabet non-emptiness are checked
//! per call and reported as [`GeneratorError`]; a failed call leaves the
//! generator valid and reusable.

pub mod alphabet;
pub mod error;
pub mod scalar;
pub mod text;

// Re-exports for convenience
pub use error::GeneratorError;
pub use scalar::{Category, ScalarGenerator};
pub use text::StringGenerator;
