//! Error types shared by every kernel.

use thiserror::Error;

/// Result alias used by the kernels and the runner.
pub type SolveResult<T> = Result<T, SolveError>;

/// Failure modes of a kernel invocation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The input violates the kernel's precondition.
    #[error("{exercise}: invalid input: {reason}")]
    InvalidInput {
        exercise: &'static str,
        reason: String,
    },

    /// A kernel returned a value that fails its own postcondition.
    ///
    /// Only produced by a [`Runner`](crate::engine::Runner) with verification
    /// enabled.
    #[error("{exercise}: postcondition violated: {detail}")]
    InvariantViolated {
        exercise: &'static str,
        detail: String,
    },
}

impl SolveError {
    pub(crate) fn invalid(exercise: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            exercise,
            reason: reason.into(),
        }
    }

    /// Returns true for precondition failures.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// Name of the kernel that produced the error.
    pub fn exercise(&self) -> &'static str {
        match self {
            Self::InvalidInput { exercise, .. } | Self::InvariantViolated { exercise, .. } => {
                exercise
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SolveError;

    #[test]
    fn display_names_the_exercise() {
        let err = SolveError::invalid("sqrt", "negative input -4");
        assert_eq!(err.to_string(), "sqrt: invalid input: negative input -4");
        assert!(err.is_invalid_input());
        assert_eq!(err.exercise(), "sqrt");
    }

    #[test]
    fn invariant_violation_is_not_invalid_input() {
        let err = SolveError::InvariantViolated {
            exercise: "two_sum",
            detail: "(0, 0)".into(),
        };
        assert!(!err.is_invalid_input());
        assert_eq!(err.to_string(), "two_sum: postcondition violated: (0, 0)");
    }
}
