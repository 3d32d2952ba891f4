//! Validation orchestrator.
//!
//! This is the engine's only entry point. It sequences normalization, the
//! two grammars and the comparator for a (candidate, reference) pair, and
//! converts every failure along the way into a `correct: false` verdict.
//! Nothing escapes this boundary as an error.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::compare::equivalent;
use crate::normalize::normalize;
use crate::parse::parse_solution;

/// Feedback when the two answers describe the same solution set.
pub const FEEDBACK_CORRECT: &str = "Corretto! Hai risolto il puzzle!";

/// Feedback when both answers parse but are not equivalent.
pub const FEEDBACK_INCORRECT: &str = "Non è corretto. Riprova!";

/// Feedback when either answer fits neither grammar.
///
/// The same message is used regardless of which side failed: whether the
/// problem was the submitted answer or the stored reference is not
/// actionable for the end user.
pub const FEEDBACK_FORMAT_ERROR: &str =
    "Formato della risposta non valido. Usa il formato \"x > 4\" o \"(4, ∞)\".";

/// Verdict returned to the caller. Constructed once per call, not retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub correct: bool,
    pub feedback: String,
}

impl ValidationResult {
    fn solved() -> Self {
        Self {
            correct: true,
            feedback: FEEDBACK_CORRECT.to_string(),
        }
    }

    fn try_again() -> Self {
        Self {
            correct: false,
            feedback: FEEDBACK_INCORRECT.to_string(),
        }
    }

    fn format_error() -> Self {
        Self {
            correct: false,
            feedback: FEEDBACK_FORMAT_ERROR.to_string(),
        }
    }
}

/// Validate a candidate answer against a reference solution.
///
/// Both strings are normalized, parsed (inequality form first, interval
/// notation on no-match) and compared with numeric tolerance. Never panics
/// and never returns an error: malformed input on either side yields
/// `correct: false` with [`FEEDBACK_FORMAT_ERROR`].
pub fn validate(candidate: &str, reference: &str) -> ValidationResult {
    let (Ok(candidate), Ok(reference)) = (normalize(candidate), normalize(reference)) else {
        debug!("normalization failed for candidate or reference");
        return ValidationResult::format_error();
    };

    let Some(candidate_parsed) = parse_solution(&candidate) else {
        debug!(answer = %candidate, "candidate matched neither grammar");
        return ValidationResult::format_error();
    };
    let Some(reference_parsed) = parse_solution(&reference) else {
        debug!(answer = %reference, "reference matched neither grammar");
        return ValidationResult::format_error();
    };

    if equivalent(&candidate_parsed, &reference_parsed) {
        ValidationResult::solved()
    } else {
        ValidationResult::try_again()
    }
}
