//! Error types for adaptive quadrature.

use std::fmt;

/// Result type for quadrature operations.
pub type QuadResult<T> = Result<T, QuadError>;

/// Failure modes of the adaptive integrator.
///
/// Failures never carry a partial estimate; callers that want to retry should
/// loosen the tolerances or raise the subdivision limit and call again.
#[derive(Debug, Clone, PartialEq)]
pub enum QuadError {
    /// Neither tolerance parameter meets the minimum precision requirement.
    ///
    /// Checked before any integrand evaluation: either `epsabs > 0`, or
    /// `epsrel` at least `max(50 * f64::EPSILON, 0.5e-28)`.
    BadTolerance { epsabs: f64, epsrel: f64 },

    /// The error is dominated by floating-point roundoff and cannot be
    /// reduced further by subdivision.
    RoundoffLimited { iterations: usize },

    /// A subdivision produced a numerically negligible subinterval,
    /// suggesting a singularity or discontinuity near `x` that bisection
    /// cannot resolve.
    SingularityLikely { x: f64 },

    /// The subdivision budget was exhausted before the tolerance was met.
    IterationLimitExceeded { limit: usize },

    /// The iteration stopped without a specific flagged condition.
    Failed { iterations: usize },
}

impl fmt::Display for QuadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadTolerance { epsabs, epsrel } => {
                write!(
                    f,
                    "tolerance cannot be achieved with epsabs = {:.2e} and epsrel = {:.2e}",
                    epsabs, epsrel
                )
            }
            Self::RoundoffLimited { iterations } => {
                write!(
                    f,
                    "roundoff error prevents the requested tolerance from being achieved \
                     (after {} subdivisions)",
                    iterations
                )
            }
            Self::SingularityLikely { x } => {
                write!(f, "bad integrand behavior found near x = {:.6e}", x)
            }
            Self::IterationLimitExceeded { limit } => {
                write!(f, "maximum of {} subdivisions reached", limit)
            }
            Self::Failed { iterations } => {
                write!(f, "could not integrate function ({} subdivisions used)", iterations)
            }
        }
    }
}

impl std::error::Error for QuadError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QuadError::BadTolerance {
            epsabs: 0.0,
            epsrel: 0.0,
        };
        assert!(err.to_string().contains("tolerance"));

        let err = QuadError::RoundoffLimited { iterations: 12 };
        assert!(err.to_string().contains("roundoff"));
        assert!(err.to_string().contains("12"));

        let err = QuadError::SingularityLikely { x: 0.5 };
        assert!(err.to_string().contains("bad integrand behavior"));

        let err = QuadError::IterationLimitExceeded { limit: 50 };
        assert!(err.to_string().contains("50"));

        let err = QuadError::Failed { iterations: 3 };
        assert!(err.to_string().contains("could not integrate"));
    }
}
