//! The two notation grammars.
//!
//! Both parsers consume text that has already been through
//! [`normalize`](crate::normalize::normalize), so the only operator glyphs
//! in play are `>`, `<`, `≥`, `≤`. Each grammar returns `None` on no-match
//! rather than an error; the orchestrator tries them in a fixed order.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    // Inequality form: "x > 4", "x≥-3.5". Anchored both ends; trailing or
    // leading extraneous characters are a no-match, not a partial parse.
    static ref INEQUALITY_FORM: Regex =
        Regex::new(r"^x\s*([><≥≤])\s*([-+]?\d+\.?\d*)$").unwrap();

    // Interval notation with all whitespace already stripped:
    // "(4,∞)", "[3,∞)", "(-∞,4]". Each bound is a signed decimal or a
    // signed/unsigned infinity token.
    static ref INTERVAL_FORM: Regex =
        Regex::new(r"^([\[(])([-+]?\d+\.?\d*|[-+]?∞),([-+]?\d+\.?\d*|[-+]?∞)([\])])$").unwrap();
}

/// One of the four comparison relations after alias folding.
///
/// No other operator value is representable downstream of normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanonicalOperator {
    GreaterThan,
    LessThan,
    GreaterOrEqual,
    LessOrEqual,
}

impl CanonicalOperator {
    fn from_glyph(glyph: &str) -> Option<Self> {
        match glyph {
            ">" => Some(Self::GreaterThan),
            "<" => Some(Self::LessThan),
            "≥" => Some(Self::GreaterOrEqual),
            "≤" => Some(Self::LessOrEqual),
            _ => None,
        }
    }

    /// The canonical glyph for this operator.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::GreaterThan => ">",
            Self::LessThan => "<",
            Self::GreaterOrEqual => "≥",
            Self::LessOrEqual => "≤",
        }
    }
}

impl fmt::Display for CanonicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A successfully parsed half-line solution set, `x <operator> <value>`.
///
/// `value` is always finite; infinity only appears as a grammar token in
/// interval notation and is consumed into the operator choice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParsedSolution {
    pub operator: CanonicalOperator,
    pub value: f64,
}

/// Parse inequality form, e.g. `x > 4` or `x≤-3.5`.
///
/// Returns `None` when the grammar does not apply, including the defensive
/// case where the numeral does not yield a finite number.
pub fn parse_inequality_form(text: &str) -> Option<ParsedSolution> {
    let caps = INEQUALITY_FORM.captures(text)?;

    let operator = CanonicalOperator::from_glyph(&caps[1])?;
    let value: f64 = caps[2].parse().ok()?;
    if !value.is_finite() {
        return None;
    }

    Some(ParsedSolution { operator, value })
}

fn is_positive_infinity(token: &str) -> bool {
    token == "∞" || token == "+∞"
}

/// Parse interval notation, e.g. `(4, ∞)` or `(-∞, 4]`.
///
/// Exactly one bound must be infinite and the other finite; finite–finite
/// and infinite–infinite pairs are a no-match. A bare `∞` on the left bound
/// is accepted and treated like `-∞` (notation leniency carried over from
/// the original validator).
pub fn parse_interval_notation(text: &str) -> Option<ParsedSolution> {
    // Interval notation commonly contains spaces around the comma
    let cleaned: String = text.chars().filter(|c| !c.is_whitespace()).collect();

    let caps = INTERVAL_FORM.captures(&cleaned)?;
    let left_bracket = &caps[1];
    let left_bound = &caps[2];
    let right_bound = &caps[3];
    let right_bracket = &caps[4];

    if is_positive_infinity(right_bound) {
        // (a, ∞) means x > a, [a, ∞) means x ≥ a.
        // A "-∞" or "∞" left bound fails the finite parse here, which is
        // what rejects double-infinite intervals.
        let value: f64 = left_bound.parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        let operator = if left_bracket == "(" {
            CanonicalOperator::GreaterThan
        } else {
            CanonicalOperator::GreaterOrEqual
        };
        Some(ParsedSolution { operator, value })
    } else if left_bound == "-∞" || left_bound == "∞" {
        // (-∞, a) means x < a, (-∞, a] means x ≤ a
        let value: f64 = right_bound.parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        let operator = if right_bracket == ")" {
            CanonicalOperator::LessThan
        } else {
            CanonicalOperator::LessOrEqual
        };
        Some(ParsedSolution { operator, value })
    } else {
        // Finite-finite pair, or "+∞" on the left
        None
    }
}

/// Try the grammars in their fixed order: inequality form first, interval
/// notation only on no-match. First successful grammar wins.
pub fn parse_solution(text: &str) -> Option<ParsedSolution> {
    parse_inequality_form(text).or_else(|| parse_interval_notation(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(operator: CanonicalOperator, value: f64) -> ParsedSolution {
        ParsedSolution { operator, value }
    }

    #[test]
    fn test_inequality_basic() {
        assert_eq!(
            parse_inequality_form("x > 4"),
            Some(parsed(CanonicalOperator::GreaterThan, 4.0))
        );
        assert_eq!(
            parse_inequality_form("x ≥ -3.5"),
            Some(parsed(CanonicalOperator::GreaterOrEqual, -3.5))
        );
        assert_eq!(
            parse_inequality_form("x≤10"),
            Some(parsed(CanonicalOperator::LessOrEqual, 10.0))
        );
        assert_eq!(
            parse_inequality_form("x < +2.25"),
            Some(parsed(CanonicalOperator::LessThan, 2.25))
        );
    }

    #[test]
    fn test_inequality_is_anchored() {
        assert_eq!(parse_inequality_form("x > 4 and more"), None);
        assert_eq!(parse_inequality_form("so x > 4"), None);
        assert_eq!(parse_inequality_form("x > 4,"), None);
    }

    #[test]
    fn test_inequality_rejects_non_canonical_operators() {
        // "=" never survives normalization as part of an operator, and the
        // grammar does not accept it either
        assert_eq!(parse_inequality_form("x = 4"), None);
        assert_eq!(parse_inequality_form("x => 4"), None);
    }

    #[test]
    fn test_inequality_rejects_missing_parts() {
        assert_eq!(parse_inequality_form("x >"), None);
        assert_eq!(parse_inequality_form("> 4"), None);
        assert_eq!(parse_inequality_form("y > 4"), None);
        assert_eq!(parse_inequality_form("x > four"), None);
    }

    #[test]
    fn test_inequality_trailing_dot_numeral() {
        assert_eq!(
            parse_inequality_form("x > 4."),
            Some(parsed(CanonicalOperator::GreaterThan, 4.0))
        );
    }

    #[test]
    fn test_interval_right_unbounded() {
        assert_eq!(
            parse_interval_notation("(4, ∞)"),
            Some(parsed(CanonicalOperator::GreaterThan, 4.0))
        );
        assert_eq!(
            parse_interval_notation("[3, ∞)"),
            Some(parsed(CanonicalOperator::GreaterOrEqual, 3.0))
        );
        assert_eq!(
            parse_interval_notation("(-2.5, +∞)"),
            Some(parsed(CanonicalOperator::GreaterThan, -2.5))
        );
    }

    #[test]
    fn test_interval_left_unbounded() {
        assert_eq!(
            parse_interval_notation("(-∞, 4]"),
            Some(parsed(CanonicalOperator::LessOrEqual, 4.0))
        );
        assert_eq!(
            parse_interval_notation("(-∞, -5)"),
            Some(parsed(CanonicalOperator::LessThan, -5.0))
        );
    }

    #[test]
    fn test_interval_bare_infinity_on_left_is_minus_infinity() {
        // Observed leniency: an unsigned ∞ on the left reads as -∞
        assert_eq!(
            parse_interval_notation("(∞, 4)"),
            Some(parsed(CanonicalOperator::LessThan, 4.0))
        );
    }

    #[test]
    fn test_interval_plus_infinity_on_left_rejected() {
        assert_eq!(parse_interval_notation("(+∞, 4)"), None);
    }

    #[test]
    fn test_interval_whitespace_insensitive() {
        assert_eq!(
            parse_interval_notation("( 4 , ∞ )"),
            Some(parsed(CanonicalOperator::GreaterThan, 4.0))
        );
        assert_eq!(
            parse_interval_notation("(4,∞)"),
            Some(parsed(CanonicalOperator::GreaterThan, 4.0))
        );
    }

    #[test]
    fn test_interval_double_infinite_rejected() {
        assert_eq!(parse_interval_notation("(∞, ∞)"), None);
        assert_eq!(parse_interval_notation("(-∞, ∞)"), None);
        assert_eq!(parse_interval_notation("(-∞, +∞)"), None);
    }

    #[test]
    fn test_interval_double_finite_rejected() {
        assert_eq!(parse_interval_notation("(3, 4)"), None);
        assert_eq!(parse_interval_notation("[3, 4]"), None);
    }

    #[test]
    fn test_interval_negative_infinity_on_right_rejected() {
        assert_eq!(parse_interval_notation("(4, -∞)"), None);
    }

    #[test]
    fn test_interval_is_anchored() {
        assert_eq!(parse_interval_notation("x in (4, ∞)"), None);
        assert_eq!(parse_interval_notation("(4, ∞) always"), None);
    }

    #[test]
    fn test_parse_solution_order() {
        // Inequality form is tried first, interval notation on no-match
        assert!(parse_solution("x > 4").is_some());
        assert!(parse_solution("(4, ∞)").is_some());
        assert_eq!(parse_solution("banana"), None);
    }

    #[test]
    fn test_operator_glyph_round_trip() {
        for glyph in [">", "<", "≥", "≤"] {
            let op = CanonicalOperator::from_glyph(glyph).unwrap();
            assert_eq!(op.glyph(), glyph);
        }
        assert_eq!(CanonicalOperator::from_glyph("="), None);
    }
}
