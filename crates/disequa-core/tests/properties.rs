//! Property tests for the validation engine.

use disequa_core::{normalize, validate, FEEDBACK_CORRECT};
use proptest::prelude::*;

fn operator() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![">", "<", "≥", "≤", ">=", "<="])
}

proptest! {
    // Every well-formed inequality answer validates against itself.
    #[test]
    fn self_validation_holds(op in operator(), whole in -10_000i32..10_000, frac in 0u8..100) {
        let answer = format!("x {} {}.{:02}", op, whole, frac);
        let result = validate(&answer, &answer);
        prop_assert!(result.correct, "self-validation failed for {answer:?}");
        prop_assert_eq!(result.feedback, FEEDBACK_CORRECT);
    }

    // Interval notation and inequality form agree in either argument order.
    #[test]
    fn interval_matches_inequality(value in -10_000i32..10_000) {
        let interval = format!("({value}, ∞)");
        let inequality = format!("x > {value}");
        prop_assert!(validate(&interval, &inequality).correct);
        prop_assert!(validate(&inequality, &interval).correct);
    }

    // Normalization applied twice equals normalization applied once.
    #[test]
    fn normalization_idempotent(input in ".*") {
        if let Ok(once) = normalize(&input) {
            let twice = normalize(&once).expect("normalized output must not be empty");
            prop_assert_eq!(once, twice);
        }
    }

    // The engine never panics, whatever the inputs.
    #[test]
    fn validate_total_on_arbitrary_input(candidate in ".*", reference in ".*") {
        let _ = validate(&candidate, &reference);
    }

    // Malformed candidates never validate, whatever the reference.
    #[test]
    fn garbage_never_correct(junk in "[a-z]{1,12}") {
        prop_assert!(!validate(&junk, "x > 4").correct);
    }
}
