//! 15-point Gauss-Kronrod rule (embedded 7-point Gauss).
//!
//! The lowest-order pair. Cheapest per application, and the usual choice when
//! the integrand is smooth and subdivision is expected to do the real work.

use super::{qk, QkResult};

/// Abscissae of the 15-point Kronrod rule (positive half, descending).
///
/// Odd-indexed entries are the abscissae of the embedded 7-point Gauss
/// rule; even-indexed entries are the Kronrod extension points.
const XGK: [f64; 8] = [
    0.9914553711208126392068546975263285,
    0.9491079123427585245261896840478513,
    0.8648644233597690727897127886409262,
    0.7415311855993944398638647732807884,
    0.5860872354676911302941448382587296,
    0.4058451513773971669066064120769615,
    0.2077849550078984676006894037732449,
    0.0,
];

/// Weights of the embedded 7-point Gauss rule.
const WG: [f64; 4] = [
    0.1294849661688696932706114326790820,
    0.2797053914892766679014677714237796,
    0.3818300505051189449503697754889751,
    0.4179591836734693877551020408163265,
];

/// Weights of the 15-point Kronrod rule.
const WGK: [f64; 8] = [
    0.02293532201052922496373200805896959,
    0.06309209262997855329070066318920429,
    0.1047900103222501838398763225415180,
    0.1406532597155259187451895905102379,
    0.1690047266392679028265834265985503,
    0.1903505780647854099132564024210137,
    0.2044329400752988924141619992346491,
    0.2094821410847278280129991748917143,
];

/// Applies the 15-point Gauss-Kronrod rule to `f` on `[a, b]`.
///
/// # Example
///
/// ```
/// use quadr::qk15;
///
/// // Kronrod estimate for x^2 on [0, 1]; the rule is exact here.
/// let r = qk15(&|x: f64| x * x, 0.0, 1.0);
/// assert!((r.result - 1.0 / 3.0).abs() < 1e-14);
/// ```
pub fn qk15<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64) -> QkResult {
    qk(&XGK, &WG, &WGK, f, a, b)
}
