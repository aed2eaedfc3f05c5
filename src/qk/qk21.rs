//! 21-point Gauss-Kronrod rule (embedded 10-point Gauss).
//!
//! The general-purpose default order.

use super::{qk, QkResult};

/// Abscissae of the 21-point Kronrod rule (positive half, descending).
///
/// Odd-indexed entries are the abscissae of the embedded 10-point Gauss
/// rule; even-indexed entries are the Kronrod extension points.
const XGK: [f64; 11] = [
    0.9956571630258080807355272806890028,
    0.9739065285171717200779640120844521,
    0.9301574913557082260012071800595083,
    0.8650633666889845107320966884234930,
    0.7808177265864168970637175783450424,
    0.6794095682990244062343273651148736,
    0.5627571346686046833390000992726941,
    0.4333953941292471907992659431657842,
    0.2943928627014601981311266031038656,
    0.1488743389816312108848260011297200,
    0.0,
];

/// Weights of the embedded 10-point Gauss rule.
const WG: [f64; 5] = [
    0.06667134430868813759356880989333179,
    0.1494513491505805931457763396576973,
    0.2190863625159820439955349342281632,
    0.2692667193099963550912269215694694,
    0.2955242247147528701738929946513383,
];

/// Weights of the 21-point Kronrod rule.
const WGK: [f64; 11] = [
    0.01169463886737187427806439606219205,
    0.03255816230796472747881897245938976,
    0.05475589657435199603138130024458018,
    0.07503967481091995276704314091619001,
    0.09312545458369760553506546508336634,
    0.1093871588022976418992105903258050,
    0.1234919762620658510779581098310742,
    0.1347092173114733259280540017717068,
    0.1427759385770600807970942731387171,
    0.1477391049013384913748415159720680,
    0.1494455540029169056649364683898212,
];

/// Applies the 21-point Gauss-Kronrod rule to `f` on `[a, b]`.
pub fn qk21<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64) -> QkResult {
    qk(&XGK, &WG, &WGK, f, a, b)
}
