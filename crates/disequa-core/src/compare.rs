//! Equivalence between parsed solutions.

use crate::parse::ParsedSolution;

/// Maximum absolute difference for two bound values to be considered equal.
///
/// This absorbs floating-point representation noise from decimal parsing,
/// not pedagogical rounding; the contract in the crate documentation changes
/// if this does.
pub const VALUE_TOLERANCE: f64 = 1e-4;

/// Decide whether two parsed solutions describe the same solution set.
///
/// Operators must be identical: `x > 4` and `x ≥ 4` are intentionally
/// distinct answers even though they differ only at the boundary. Values
/// match within [`VALUE_TOLERANCE`].
pub fn equivalent(a: &ParsedSolution, b: &ParsedSolution) -> bool {
    if a.operator != b.operator {
        return false;
    }

    (a.value - b.value).abs() < VALUE_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::CanonicalOperator;

    fn sol(operator: CanonicalOperator, value: f64) -> ParsedSolution {
        ParsedSolution { operator, value }
    }

    #[test]
    fn test_identical_solutions_equivalent() {
        let a = sol(CanonicalOperator::GreaterThan, 4.0);
        assert!(equivalent(&a, &a));
    }

    #[test]
    fn test_operator_identity_required() {
        let strict = sol(CanonicalOperator::GreaterThan, 4.0);
        let inclusive = sol(CanonicalOperator::GreaterOrEqual, 4.0);
        assert!(!equivalent(&strict, &inclusive));
    }

    #[test]
    fn test_tolerance_boundary() {
        let reference = sol(CanonicalOperator::GreaterThan, 4.0);

        // 9e-5 < 1e-4: inside tolerance
        assert!(equivalent(&sol(CanonicalOperator::GreaterThan, 4.00009), &reference));

        // 2e-4 >= 1e-4: outside tolerance
        assert!(!equivalent(&sol(CanonicalOperator::GreaterThan, 4.0002), &reference));
    }

    #[test]
    fn test_symmetric() {
        let a = sol(CanonicalOperator::LessOrEqual, -1.5);
        let b = sol(CanonicalOperator::LessOrEqual, -1.50005);
        assert_eq!(equivalent(&a, &b), equivalent(&b, &a));
        assert!(equivalent(&a, &b));
    }

    #[test]
    fn test_different_values_not_equivalent() {
        let a = sol(CanonicalOperator::LessThan, 2.0);
        let b = sol(CanonicalOperator::LessThan, 3.0);
        assert!(!equivalent(&a, &b));
    }
}
