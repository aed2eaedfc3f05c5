//! 31-point Gauss-Kronrod rule (embedded 15-point Gauss).

use super::{qk, QkResult};

/// Abscissae of the 31-point Kronrod rule (positive half, descending).
///
/// Odd-indexed entries are the abscissae of the embedded 15-point Gauss
/// rule; even-indexed entries are the Kronrod extension points.
const XGK: [f64; 16] = [
    0.9980022986933970602851728401522712,
    0.9879925180204854284895657185866126,
    0.9677390756791391342573479787843372,
    0.9372733924007059043077589477102095,
    0.8972645323440819008825096564544959,
    0.8482065834104272162006483207742169,
    0.7904185014424659329676492948179473,
    0.7244177313601700474161860546139380,
    0.6509967412974169705337358953132747,
    0.5709721726085388475372267372539106,
    0.4850818636402396806936557402323506,
    0.3941513470775633698972073709810455,
    0.2991800071531688121667800242663890,
    0.2011940939974345223006283033945962,
    0.1011420669187174990270742314473923,
    0.0,
];

/// Weights of the embedded 15-point Gauss rule.
const WG: [f64; 8] = [
    0.03075324199611726835462839357720442,
    0.07036604748810812470926741645066734,
    0.1071592204671719350118695466858693,
    0.1395706779261543144478047945110283,
    0.1662692058169939335532008604812088,
    0.1861610000155622110268005618664228,
    0.1984314853271115764561183264438393,
    0.2025782419255612728806201999675193,
];

/// Weights of the 31-point Kronrod rule.
const WGK: [f64; 16] = [
    0.005377479872923348987792051430127650,
    0.01500794732931612253837476307580727,
    0.02546084732671532018687400101965336,
    0.03534636079137584622203794847836005,
    0.04458975132476487660822729937327969,
    0.05348152469092808726534314723943030,
    0.06200956780067064028513923096080293,
    0.06985412131872825870952007709914748,
    0.07684968075772037889443277748265901,
    0.08308050282313302103828924728610379,
    0.08856444305621177064727544369377430,
    0.09312659817082532122548687274734572,
    0.09664272698362367850517990762758934,
    0.09917359872179195933239317348460313,
    0.1007698455238755950449466626175697,
    0.1013300070147915490173747927674925,
];

/// Applies the 31-point Gauss-Kronrod rule to `f` on `[a, b]`.
pub fn qk31<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64) -> QkResult {
    qk(&XGK, &WG, &WGK, f, a, b)
}
