//! Fixed-order Gauss-Kronrod rule evaluators.
//!
//! A Gauss-Kronrod pair is a nested quadrature rule: a `(2n+1)`-point Kronrod
//! rule whose nodes include all `n` nodes of an embedded Gauss rule. One pass
//! over the integrand yields both estimates, and their difference drives the
//! error estimate without further evaluations.
//!
//! # Available Rules
//!
//! | Rule | Kronrod points | Embedded Gauss points |
//! |------|----------------|-----------------------|
//! | [`qk15`] | 15 | 7 |
//! | [`qk21`] | 21 | 10 |
//! | [`qk31`] | 31 | 15 |
//! | [`qk41`] | 41 | 20 |
//! | [`qk51`] | 51 | 25 |
//! | [`qk61`] | 61 | 30 |
//!
//! Higher orders cost more per application but converge faster on smooth and
//! oscillatory integrands. All six are thin wrappers around one evaluator
//! parameterized by the table length.

mod qk15;
mod qk21;
mod qk31;
mod qk41;
mod qk51;
mod qk61;

pub use qk15::qk15;
pub use qk21::qk21;
pub use qk31::qk31;
pub use qk41::qk41;
pub use qk51::qk51;
pub use qk61::qk61;

/// Output of one fixed-order rule application on a subinterval.
#[derive(Debug, Clone, Copy)]
pub struct QkResult {
    /// Kronrod estimate of the integral.
    pub result: f64,
    /// Rescaled error estimate for `result`.
    pub abserr: f64,
    /// Estimate of the integral of `|f|`, used to gauge magnitude.
    pub resabs: f64,
    /// Estimate of the integral of `|f - mean(f)|`, quantifying local
    /// variation. When `abserr` saturates to this value the raw
    /// Kronrod-minus-Gauss difference was not trustworthy.
    pub resasc: f64,
}

/// Selects one of the six fixed-order Gauss-Kronrod rules.
///
/// Analogous to choosing a Runge-Kutta scheme for an ODE solve: all orders
/// integrate the same problems, trading evaluations per subinterval against
/// subdivision depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GkRule {
    /// 15-point Kronrod, 7-point Gauss.
    K15,
    /// 21-point Kronrod, 10-point Gauss.
    K21,
    /// 31-point Kronrod, 15-point Gauss.
    K31,
    /// 41-point Kronrod, 20-point Gauss.
    K41,
    /// 51-point Kronrod, 25-point Gauss.
    K51,
    /// 61-point Kronrod, 30-point Gauss.
    K61,
}

impl GkRule {
    /// Number of integrand evaluations per rule application.
    pub fn points(&self) -> usize {
        match self {
            Self::K15 => 15,
            Self::K21 => 21,
            Self::K31 => 31,
            Self::K41 => 41,
            Self::K51 => 51,
            Self::K61 => 61,
        }
    }

    /// Applies the selected rule to `f` on `[a, b]`.
    pub fn evaluate<F: Fn(f64) -> f64>(&self, f: &F, a: f64, b: f64) -> QkResult {
        match self {
            Self::K15 => qk15(f, a, b),
            Self::K21 => qk21(f, a, b),
            Self::K31 => qk31(f, a, b),
            Self::K41 => qk41(f, a, b),
            Self::K51 => qk51(f, a, b),
            Self::K61 => qk61(f, a, b),
        }
    }
}

/// Calibrates a raw Kronrod-minus-Gauss difference into an error bound.
///
/// When the variation estimate `result_asc` is informative, the raw
/// difference is damped by `(200 |err| / result_asc)^1.5`, saturating at
/// `result_asc` itself. Independently, the result is floored at the roundoff
/// level `50 * EPSILON * result_abs` whenever the magnitude is large enough
/// for that floor to be meaningful, so the reported error can never undercut
/// unavoidable floating-point noise.
pub(crate) fn rescale_error(err: f64, result_abs: f64, result_asc: f64) -> f64 {
    let mut err = err.abs();

    if result_asc != 0.0 && err != 0.0 {
        let scale = (200.0 * err / result_asc).powf(1.5);
        if scale < 1.0 {
            err = result_asc * scale;
        } else {
            err = result_asc;
        }
    }

    if result_abs > f64::MIN_POSITIVE / (50.0 * f64::EPSILON) {
        let min_err = 50.0 * f64::EPSILON * result_abs;
        if min_err > err {
            err = min_err;
        }
    }

    err
}

/// Shared Gauss-Kronrod evaluator over a half-table of `N` Kronrod nodes.
///
/// `xgk` holds the non-negative abscissae in descending order (`xgk[N-1]` is
/// the center); `wgk` the matching Kronrod weights; `wg` the embedded Gauss
/// weights for the odd-indexed abscissae. The embedded Gauss rule reuses
/// alternating Kronrod nodes, so the Gauss sum is accumulated during the same
/// sweep. When `N` is even the center node belongs to the Gauss rule too and
/// picks up `wg[N / 2 - 1]`.
fn qk<const N: usize, F>(xgk: &[f64; N], wg: &[f64], wgk: &[f64; N], f: &F, a: f64, b: f64) -> QkResult
where
    F: Fn(f64) -> f64,
{
    let center = 0.5 * (a + b);
    let half_length = 0.5 * (b - a);
    let abs_half_length = half_length.abs();
    let f_center = f(center);

    let mut fv1 = [0.0; N];
    let mut fv2 = [0.0; N];

    let mut result_gauss = 0.0;
    let mut result_kronrod = f_center * wgk[N - 1];
    let mut result_abs = result_kronrod.abs();

    if N % 2 == 0 {
        result_gauss = f_center * wg[N / 2 - 1];
    }

    // Nodes shared with the embedded Gauss rule.
    for j in 0..(N - 1) / 2 {
        let jtw = j * 2 + 1;
        let abscissa = half_length * xgk[jtw];
        let fval1 = f(center - abscissa);
        let fval2 = f(center + abscissa);
        let fsum = fval1 + fval2;
        fv1[jtw] = fval1;
        fv2[jtw] = fval2;
        result_gauss += wg[j] * fsum;
        result_kronrod += wgk[jtw] * fsum;
        result_abs += wgk[jtw] * (fval1.abs() + fval2.abs());
    }

    // Kronrod extension nodes.
    for j in 0..N / 2 {
        let jtwm1 = j * 2;
        let abscissa = half_length * xgk[jtwm1];
        let fval1 = f(center - abscissa);
        let fval2 = f(center + abscissa);
        fv1[jtwm1] = fval1;
        fv2[jtwm1] = fval2;
        result_kronrod += wgk[jtwm1] * (fval1 + fval2);
        result_abs += wgk[jtwm1] * (fval1.abs() + fval2.abs());
    }

    let mean = result_kronrod * 0.5;
    let mut result_asc = wgk[N - 1] * (f_center - mean).abs();
    for j in 0..N - 1 {
        result_asc += wgk[j] * ((fv1[j] - mean).abs() + (fv2[j] - mean).abs());
    }

    let err = (result_kronrod - result_gauss) * half_length;

    let result = result_kronrod * half_length;
    let resabs = result_abs * abs_half_length;
    let resasc = result_asc * abs_half_length;

    QkResult {
        result,
        abserr: rescale_error(err, resabs, resasc),
        resabs,
        resasc,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    const ALL_RULES: [GkRule; 6] = [
        GkRule::K15,
        GkRule::K21,
        GkRule::K31,
        GkRule::K41,
        GkRule::K51,
        GkRule::K61,
    ];

    #[test]
    fn test_constant_exact_for_every_rule() {
        for rule in ALL_RULES {
            let r = rule.evaluate(&|_| 1.5, -2.0, 3.0);
            assert!(
                (r.result - 7.5).abs() <= r.abserr,
                "{:?}: result {} outside error bound {}",
                rule,
                r.result,
                r.abserr
            );
            assert!((r.result - 7.5).abs() < 1e-12);
        }
    }

    #[test]
    fn test_polynomial_exact_for_every_rule() {
        // x^3 on [0, 2] = 4; within Gauss exactness for every order
        for rule in ALL_RULES {
            let r = rule.evaluate(&|x: f64| x * x * x, 0.0, 2.0);
            assert!(
                (r.result - 4.0).abs() < 1e-12,
                "{:?}: got {}",
                rule,
                r.result
            );
        }
    }

    #[test]
    fn test_qk15_high_degree_polynomial() {
        // x^13 on [0, 1] = 1/14. Degree 13 = 2*7 - 1, the embedded Gauss
        // rule's exactness limit, so the error estimate collapses too.
        let r = qk15(&|x: f64| x.powi(13), 0.0, 1.0);
        assert_relative_eq!(r.result, 1.0 / 14.0, max_relative = 1e-13);
    }

    #[test]
    fn test_qk21_sine() {
        let r = qk21(&|x: f64| x.sin(), 0.0, PI);
        assert!((r.result - 2.0).abs() < 1e-12, "got {}", r.result);
        assert!((r.result - 2.0).abs() <= r.abserr);
        assert!(r.resabs > 0.0);
        assert!(r.resasc > 0.0);
    }

    #[test]
    fn test_reversed_interval_negates_result() {
        let fwd = qk31(&|x: f64| x.exp(), 0.0, 1.0);
        let rev = qk31(&|x: f64| x.exp(), 1.0, 0.0);
        assert_eq!(fwd.result, -rev.result);
        assert_eq!(fwd.abserr, rev.abserr);
    }

    #[test]
    fn test_degenerate_interval_is_zero() {
        let r = qk61(&|x: f64| x.cos(), 0.7, 0.7);
        assert_eq!(r.result, 0.0);
        assert_eq!(r.abserr, 0.0);
    }

    #[test]
    fn test_rule_points() {
        assert_eq!(GkRule::K15.points(), 15);
        assert_eq!(GkRule::K61.points(), 61);
    }

    #[test]
    fn test_rescale_error_saturates_at_asc() {
        // Raw difference already exceeds the variation bound
        let e = rescale_error(1.0, 0.0, 0.5);
        assert_eq!(e, 0.5);
    }

    #[test]
    fn test_rescale_error_damps_small_differences() {
        let asc: f64 = 1.0;
        let raw: f64 = 1e-8;
        let expected = asc * (200.0 * raw / asc).powf(1.5);
        assert_eq!(rescale_error(raw, 0.0, asc), expected);
        assert!(expected < raw);
    }

    #[test]
    fn test_rescale_error_roundoff_floor() {
        // Large magnitude, tiny raw error: the 50-epsilon floor wins
        let e = rescale_error(1e-300, 100.0, 0.0);
        assert_eq!(e, 50.0 * f64::EPSILON * 100.0);
    }
}
