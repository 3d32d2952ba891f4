//! Surface-syntax normalization.
//!
//! Canonicalizes whitespace and folds operator aliases into one operator
//! alphabet, so the grammar modules only ever see `>`, `<`, `≥`, `≤` and
//! single spaces. Case and numeral formatting are untouched here.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Errors from normalization.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("answer is empty")]
    EmptyInput,
}

/// Normalize a raw answer string.
///
/// - Trims leading/trailing whitespace
/// - Collapses internal whitespace runs to a single space
/// - Folds `>=` → `≥`, `<=` → `≤` and the secondary Unicode glyphs
///   `≧` → `≥`, `≦` → `≤`; `>` and `<` pass through unchanged
///
/// Idempotent: normalizing an already-normalized string is a no-op.
pub fn normalize(raw: &str) -> Result<String, NormalizeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(NormalizeError::EmptyInput);
    }

    let collapsed = WHITESPACE_RUN.replace_all(trimmed, " ");

    // Secondary glyphs first, then the ASCII digraphs
    let folded = collapsed
        .replace('≧', "≥")
        .replace('≦', "≤")
        .replace(">=", "≥")
        .replace("<=", "≤");

    Ok(folded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_collapses_whitespace() {
        assert_eq!(normalize("  x  >   4  ").unwrap(), "x > 4");
        assert_eq!(normalize("x\t>\n4").unwrap(), "x > 4");
    }

    #[test]
    fn test_folds_ascii_digraphs() {
        assert_eq!(normalize("x >= 4").unwrap(), "x ≥ 4");
        assert_eq!(normalize("x <= -3.5").unwrap(), "x ≤ -3.5");
    }

    #[test]
    fn test_folds_secondary_unicode_glyphs() {
        assert_eq!(normalize("x ≧ 4").unwrap(), "x ≥ 4");
        assert_eq!(normalize("x ≦ 4").unwrap(), "x ≤ 4");
    }

    #[test]
    fn test_strict_operators_pass_through() {
        assert_eq!(normalize("x > 4").unwrap(), "x > 4");
        assert_eq!(normalize("x < 4").unwrap(), "x < 4");
    }

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(normalize(""), Err(NormalizeError::EmptyInput));
        assert_eq!(normalize("   \t\n "), Err(NormalizeError::EmptyInput));
    }

    #[test]
    fn test_idempotent() {
        let inputs = ["x >= 4", "  ( 4 , ∞ )  ", "x ≧ 10", "x>4"];
        for input in inputs {
            let once = normalize(input).unwrap();
            let twice = normalize(&once).unwrap();
            assert_eq!(once, twice, "normalize not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_case_and_numerals_untouched() {
        assert_eq!(normalize("X > 04.50").unwrap(), "X > 04.50");
    }
}
