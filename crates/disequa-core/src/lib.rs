//! # disequa-core
//!
//! Deterministic answer validation for one-variable linear inequalities.
//!
//! This crate decides whether a free-form textual answer describes the same
//! solution set as a stored reference solution, accepting both inequality
//! form (`x > 4`, `x ≥ -3.5`) and interval notation (`(4, ∞)`, `(-∞, 4]`).
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: Same input always produces same output
//! 2. **Never panics or errors**: malformed answers yield a `correct: false`
//!    verdict, not a failure
//! 3. **Stateless**: every call is a pure function of its two arguments
//! 4. **Parallel-safe**: no shared mutable state anywhere
//!
//! ## Example
//!
//! ```rust
//! use disequa_core::validate;
//!
//! let result = validate("(4, ∞)", "x > 4");
//! assert!(result.correct);
//!
//! let result = validate("banana", "x > 4");
//! assert!(!result.correct);
//! ```

pub mod compare;
pub mod normalize;
pub mod parse;
pub mod puzzle;
pub mod validate;

// Re-export main types at crate root
pub use compare::{equivalent, VALUE_TOLERANCE};
pub use normalize::{normalize, NormalizeError};
pub use parse::{CanonicalOperator, ParsedSolution};
pub use puzzle::{Difficulty, Puzzle, PuzzleError, PuzzleSet};
pub use validate::{
    validate, ValidationResult, FEEDBACK_CORRECT, FEEDBACK_FORMAT_ERROR, FEEDBACK_INCORRECT,
};
