//! Canonical alphabets for string generation.
//!
//! Each function builds a fresh `String` on every call; nothing is cached
//! or mutated. Character order is fixed and ascending within each band,
//! which keeps composite alphabets deterministic for callers and tests.
//! Uniform sampling draws by position, so order does not affect the
//! distribution.

/// The lowercase letters `'a'..='z'`.
pub fn lowercase() -> String {
    ('a'..='z').collect()
}

/// The uppercase letters `'A'..='Z'`.
pub fn uppercase() -> String {
    ('A'..='Z').collect()
}

/// The decimal digits `'0'..='9'`.
pub fn numeric() -> String {
    ('0'..='9').collect()
}

/// All letters: lowercase followed by uppercase.
pub fn alpha() -> String {
    let mut result = lowercase();
    result.push_str(&uppercase());
    result
}

/// All letters followed by the decimal digits.
pub fn alphanumeric() -> String {
    let mut result = alpha();
    result.push_str(&numeric());
    result
}

/// Punctuation and symbols: the four printable-ASCII bands that are
/// neither alphanumeric nor whitespace, concatenated in code-point order.
pub fn punctuation() -> String {
    ('!'..='/')
        .chain(':'..='@')
        .chain('['..='`')
        .chain('{'..='~')
        .collect()
}

/// All printable non-whitespace ASCII: letters, digits, then punctuation.
pub fn printable() -> String {
    let mut result = alphanumeric();
    result.push_str(&punctuation());
    result
}

/// The hexadecimal digits `'0'..='9'` followed by `'a'..='f'`.
pub fn hexadecimal() -> String {
    let mut result = numeric();
    result.extend('a'..='f');
    result
}
