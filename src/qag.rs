//! Globally adaptive Gauss-Kronrod integration.
//!
//! The driver repeatedly bisects the live subinterval with the largest error
//! estimate, re-applies the fixed-order rule on both halves, and stops once
//! the accumulated error falls under the requested tolerance, the subdivision
//! budget runs out, or one of the stall heuristics fires.

use crate::error::{QuadError, QuadResult};
use crate::qk::{GkRule, QkResult};
use crate::workspace::{subinterval_too_small, IntegrationWorkspace};

/// Options for adaptive quadrature.
#[derive(Debug, Clone)]
pub struct QagOptions {
    /// Absolute tolerance (default: 1e-8)
    pub epsabs: f64,
    /// Relative tolerance (default: 1e-8)
    pub epsrel: f64,
    /// Maximum number of subintervals (default: 50)
    pub limit: usize,
    /// Fixed-order rule applied to each subinterval (default: [`GkRule::K21`])
    pub rule: GkRule,
}

impl Default for QagOptions {
    fn default() -> Self {
        Self {
            epsabs: 1e-8,
            epsrel: 1e-8,
            limit: 50,
            rule: GkRule::K21,
        }
    }
}

/// Outcome of a successful adaptive integration.
#[derive(Debug, Clone, Copy)]
pub struct QagResult {
    /// Computed integral estimate.
    pub estimate: f64,
    /// Rigorous bound on the absolute error of `estimate`.
    pub abserr: f64,
    /// Number of bisections performed (0 when the first rule application
    /// already met the tolerance).
    pub subdivisions: usize,
}

/// Adaptive Gauss-Kronrod quadrature of `f` over `[a, b]`.
///
/// Bounds are order-independent: `a > b` integrates in the reversed
/// orientation and negates the estimate. The integrand must be a pure
/// function of one real argument; it may be evaluated repeatedly at the same
/// point.
///
/// # Example
///
/// ```
/// use quadr::{qag, QagOptions};
///
/// let r = qag(|x: f64| x.sin(), 0.0, std::f64::consts::PI, &QagOptions::default()).unwrap();
/// assert!((r.estimate - 2.0).abs() < 1e-8);
/// assert!((r.estimate - 2.0).abs() <= r.abserr);
/// ```
///
/// # Errors
///
/// * [`QuadError::BadTolerance`] if both tolerances are below the achievable
///   minimum (checked before any integrand evaluation)
/// * [`QuadError::RoundoffLimited`] when floating-point roundoff prevents
///   further error reduction
/// * [`QuadError::SingularityLikely`] when subdivision collapses onto a point
/// * [`QuadError::IterationLimitExceeded`] when `limit` subintervals were not
///   enough
pub fn qag<F>(f: F, a: f64, b: f64, options: &QagOptions) -> QuadResult<QagResult>
where
    F: Fn(f64) -> f64,
{
    let limit = options.limit;
    let (epsabs, epsrel) = (options.epsabs, options.epsrel);
    match options.rule {
        GkRule::K15 => integrate(&f, crate::qk::qk15, a, b, epsabs, epsrel, limit),
        GkRule::K21 => integrate(&f, crate::qk::qk21, a, b, epsabs, epsrel, limit),
        GkRule::K31 => integrate(&f, crate::qk::qk31, a, b, epsabs, epsrel, limit),
        GkRule::K41 => integrate(&f, crate::qk::qk41, a, b, epsabs, epsrel, limit),
        GkRule::K51 => integrate(&f, crate::qk::qk51, a, b, epsabs, epsrel, limit),
        GkRule::K61 => integrate(&f, crate::qk::qk61, a, b, epsabs, epsrel, limit),
    }
}

/// Adaptive integration driver over an arbitrary fixed-order rule.
///
/// `rule` is any single-application evaluator with the shape of the `qk*`
/// functions: given the integrand and a subinterval it returns the four
/// [`QkResult`] values. `limit` bounds the number of subintervals (values
/// below 1 are treated as 1); each call owns a private workspace of that
/// capacity.
///
/// This is the low-level entry point; [`qag`] selects the rule from an
/// options struct instead.
pub fn integrate<F, R>(
    f: &F,
    rule: R,
    a: f64,
    b: f64,
    epsabs: f64,
    epsrel: f64,
    limit: usize,
) -> QuadResult<QagResult>
where
    F: Fn(f64) -> f64,
    R: Fn(&F, f64, f64) -> QkResult,
{
    if epsabs <= 0.0 && (epsrel < 50.0 * f64::EPSILON || epsrel < 0.5e-28) {
        return Err(QuadError::BadTolerance { epsabs, epsrel });
    }

    // Workspace capacity and the limit checks below must agree
    let limit = limit.max(1);
    let mut workspace = IntegrationWorkspace::new(limit);

    // First approximation on the whole interval
    let QkResult {
        result: result0,
        abserr: abserr0,
        resabs: resabs0,
        resasc: resasc0,
    } = rule(f, a, b);

    workspace.init(a, b, result0, abserr0);

    let mut tolerance = f64::max(epsabs, epsrel * result0.abs());

    // Error already at the roundoff floor for this magnitude: subdivision
    // cannot improve it
    let round_off = 50.0 * f64::EPSILON * resabs0;
    if abserr0 <= round_off && abserr0 > tolerance {
        return Err(QuadError::RoundoffLimited { iterations: 0 });
    } else if (abserr0 <= tolerance && abserr0 != resasc0) || abserr0 == 0.0 {
        return Ok(QagResult {
            estimate: result0,
            abserr: abserr0,
            subdivisions: 0,
        });
    } else if limit == 1 {
        return Err(QuadError::IterationLimitExceeded { limit });
    }

    let mut area = result0;
    let mut errsum = abserr0;
    let mut iteration = 1;

    let mut roundoff_type1 = 0;
    let mut roundoff_type2 = 0;
    let mut error_type: Option<QuadError> = None;

    loop {
        // Bisect the subinterval with the largest error estimate
        let (a_i, b_i, r_i, e_i) = workspace.retrieve();
        let a1 = a_i;
        let b1 = 0.5 * (a_i + b_i);
        let a2 = b1;
        let b2 = b_i;

        let QkResult {
            result: area1,
            abserr: error1,
            resasc: resasc1,
            ..
        } = rule(f, a1, b1);
        let QkResult {
            result: area2,
            abserr: error2,
            resasc: resasc2,
            ..
        } = rule(f, a2, b2);

        let area12 = area1 + area2;
        let error12 = error1 + error2;

        errsum += error12 - e_i;
        area += area12 - r_i;

        // Roundoff heuristics, skipped when either error estimate saturated
        // its variation bound
        if resasc1 != error1 && resasc2 != error2 {
            let delta = r_i - area12;
            if delta.abs() <= 1.0e-5 * area12.abs() && error12 >= 0.99 * e_i {
                roundoff_type1 += 1;
            }
            if iteration >= 10 && error12 > e_i {
                roundoff_type2 += 1;
            }
        }

        tolerance = f64::max(epsabs, epsrel * area.abs());

        if errsum > tolerance {
            if roundoff_type1 >= 6 || roundoff_type2 >= 20 {
                error_type = Some(QuadError::RoundoffLimited {
                    iterations: iteration,
                });
            }

            // Extremely small subinterval at the point of difficulty
            if subinterval_too_small(a1, a2, b2) {
                error_type = Some(QuadError::SingularityLikely { x: a2 });
            }
        }

        workspace.update(a1, b1, area1, error1, a2, b2, area2, error2);
        iteration += 1;

        if iteration >= limit || error_type.is_some() || errsum <= tolerance {
            break;
        }
    }

    // Resum from the per-interval values; the running accumulator has
    // absorbed many small corrections
    let estimate = workspace.sum_results();

    if errsum <= tolerance {
        return Ok(QagResult {
            estimate,
            abserr: errsum,
            subdivisions: iteration - 1,
        });
    }

    match error_type {
        Some(err) => Err(err),
        None if iteration == limit => Err(QuadError::IterationLimitExceeded { limit }),
        None => Err(QuadError::Failed {
            iterations: iteration - 1,
        }),
    }
}
