//! Random string generation over a configurable alphabet.
//!
//! A [`StringGenerator`] composes a [`ScalarGenerator`] over `usize`
//! (Integral category) for both length selection and per-character index
//! selection. It is a distinct entry point rather than another scalar
//! category because its range parameters (length bounds) are a different
//! type from its output (text).

use crate::alphabet;
use crate::error::GeneratorError;
use crate::scalar::ScalarGenerator;

/// Generator for random strings of fixed or ranged length.
///
/// Owns one seeded random engine, shared between length draws and
/// character draws. Like [`ScalarGenerator`], the type is deliberately
/// not `Clone` and sampling takes `&mut self`; use one independently
/// seeded instance per thread for concurrent generation.
pub struct StringGenerator {
    /// Draws string lengths and alphabet indices from one shared engine
    indices: ScalarGenerator<usize>,
}

impl StringGenerator {
    /// Create a generator seeded from the operating system entropy source.
    pub fn new() -> Self {
        tracing::trace!("constructed entropy-seeded string generator");
        Self {
            indices: ScalarGenerator::new(),
        }
    }

    /// Create a generator with an explicit seed for reproducibility.
    pub fn from_seed(seed: u64) -> Self {
        tracing::trace!(seed, "constructed seeded string generator");
        Self {
            indices: ScalarGenerator::from_seed(seed),
        }
    }

    /// Generate a string of exactly `length` characters.
    ///
    /// Characters are drawn uniformly from `alphabet`, independently and
    /// with replacement. `None` selects the printable alphabet
    /// ([`alphabet::printable`]). A length of 0 yields the empty string.
    ///
    /// Returns [`GeneratorError::InvalidAlphabet`] when an explicitly
    /// supplied alphabet has no characters.
    pub fn generate(
        &mut self,
        length: usize,
        alphabet: Option<&str>,
    ) -> Result<String, GeneratorError> {
        self.generate_ranged(length, length, alphabet)
    }

    /// Generate a string whose length is drawn uniformly from
    /// `[min_length, max_length]`.
    ///
    /// The length is selected first, through the owned scalar generator;
    /// each character is then drawn uniformly from `alphabet` with
    /// replacement. `min_length == max_length` reduces to the fixed-length
    /// form. Duplicate characters in the alphabet are permitted and simply
    /// bias their frequency.
    ///
    /// Returns [`GeneratorError::InvalidRange`] when
    /// `min_length > max_length`, and [`GeneratorError::InvalidAlphabet`]
    /// when an explicitly supplied alphabet has no characters. Either
    /// failure leaves the generator valid and reusable.
    pub fn generate_ranged(
        &mut self,
        min_length: usize,
        max_length: usize,
        alphabet: Option<&str>,
    ) -> Result<String, GeneratorError> {
        let default;
        let alphabet = match alphabet {
            Some(supplied) => supplied,
            None => {
                default = alphabet::printable();
                &default
            }
        };

        let chars: Vec<char> = alphabet.chars().collect();
        if chars.is_empty() {
            return Err(GeneratorError::InvalidAlphabet);
        }

        let length = self.indices.generate(min_length, max_length)?;
        let mut result = String::with_capacity(length);
        for _ in 0..length {
            let index = self.indices.generate(0, chars.len() - 1)?;
            result.push(chars[index]);
        }
        Ok(result)
    }
}

impl Default for StringGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fixed_length() {
        let mut gen = StringGenerator::from_seed(42);
        let alphabet = alphabet::alpha();

        for _ in 0..100 {
            let value = gen.generate(5, Some(&alphabet)).unwrap();
            assert_eq!(value.chars().count(), 5);
            assert!(value.chars().all(|c| alphabet.contains(c)));
        }
    }

    #[test]
    fn test_binary_alphabet() {
        let mut gen = StringGenerator::from_seed(42);

        let value = gen.generate(4, Some("01")).unwrap();
        assert_eq!(value.len(), 4);
        assert!(value.chars().all(|c| c == '0' || c == '1'));
    }

    #[test]
    fn test_ranged_length_bounds() {
        let mut gen = StringGenerator::from_seed(42);
        let alphabet = alphabet::alphanumeric();
        let mut lengths = HashSet::new();

        for _ in 0..1_000 {
            let value = gen.generate_ranged(2, 5, Some(&alphabet)).unwrap();
            let length = value.chars().count();
            assert!((2..=5).contains(&length));
            lengths.insert(length);
        }

        // Over 1k trials every length in [2, 5] shows up
        assert_eq!(lengths.len(), 4);
    }

    #[test]
    fn test_equal_bounds_match_fixed_form() {
        let mut gen = StringGenerator::from_seed(42);

        let value = gen.generate_ranged(7, 7, Some("ab")).unwrap();
        assert_eq!(value.chars().count(), 7);
    }

    #[test]
    fn test_zero_length_is_empty() {
        let mut gen = StringGenerator::from_seed(42);
        assert_eq!(gen.generate(0, Some("abc")).unwrap(), "");
    }

    #[test]
    fn test_single_char_alphabet_repeats() {
        let mut gen = StringGenerator::from_seed(42);
        assert_eq!(gen.generate(6, Some("x")).unwrap(), "xxxxxx");
    }

    #[test]
    fn test_default_alphabet_is_printable() {
        let printable = alphabet::printable();

        let mut defaulted = StringGenerator::from_seed(7);
        let mut explicit = StringGenerator::from_seed(7);

        assert_eq!(
            defaulted.generate(32, None).unwrap(),
            explicit.generate(32, Some(&printable)).unwrap()
        );
    }

    #[test]
    fn test_deterministic_generation() {
        let alphabet = alphabet::hexadecimal();

        let mut gen1 = StringGenerator::from_seed(33);
        let mut gen2 = StringGenerator::from_seed(33);

        for _ in 0..10 {
            assert_eq!(
                gen1.generate_ranged(2, 5, Some(&alphabet)),
                gen2.generate_ranged(2, 5, Some(&alphabet))
            );
        }
    }

    #[test]
    fn test_empty_alphabet_is_rejected() {
        let mut gen = StringGenerator::from_seed(42);

        let result = gen.generate(5, Some(""));
        assert_eq!(result, Err(GeneratorError::InvalidAlphabet));
    }

    #[test]
    fn test_reversed_length_range_is_rejected() {
        let mut gen = StringGenerator::from_seed(42);

        let result = gen.generate_ranged(5, 2, Some("abc"));
        assert!(matches!(result, Err(GeneratorError::InvalidRange { .. })));
    }

    #[test]
    fn test_instance_usable_after_failed_call() {
        let mut gen = StringGenerator::from_seed(42);

        assert!(gen.generate(5, Some("")).is_err());
        let value = gen.generate(5, Some("abc")).unwrap();
        assert_eq!(value.chars().count(), 5);
    }
}
