//! 61-point Gauss-Kronrod rule (embedded 30-point Gauss).
//!
//! The highest-order pair. Worth its cost on oscillatory integrands where a
//! single high-order application beats many low-order subdivisions.

use super::{qk, QkResult};

/// Abscissae of the 61-point Kronrod rule (positive half, descending).
///
/// Odd-indexed entries are the abscissae of the embedded 30-point Gauss
/// rule; even-indexed entries are the Kronrod extension points.
const XGK: [f64; 31] = [
    0.9994844100504906375713258957058108,
    0.9968934840746495402716300509186953,
    0.9916309968704045948586283661094857,
    0.9836681232797472099700325816056628,
    0.9731163225011262683746938684237069,
    0.9600218649683075122168710255817977,
    0.9443744447485599794158313240374391,
    0.9262000474292743258793242770804740,
    0.9055733076999077985465225589259583,
    0.8825605357920526815431164625302256,
    0.8572052335460610989586585106589439,
    0.8295657623827683974428981197325019,
    0.7997278358218390830136689423226832,
    0.7677774321048261949179773409745031,
    0.7337900624532268047261711313695276,
    0.6978504947933157969322923880266401,
    0.6600610641266269613700536681492708,
    0.6205261829892428611404775564311893,
    0.5793452358263616917560249321725405,
    0.5366241481420198992641697933110728,
    0.4924804678617785749936930612077088,
    0.4470337695380891767806099003228540,
    0.4004012548303943925354762115426606,
    0.3527047255308781134710372070893739,
    0.3040732022736250773726771071992566,
    0.2546369261678898464398051298178051,
    0.2045251166823098914389576710020247,
    0.1538699136085835469637946727432559,
    0.1028069379667370301470967513180006,
    0.05147184255531769583302521316672257,
    0.0,
];

/// Weights of the embedded 30-point Gauss rule.
const WG: [f64; 15] = [
    0.007968192496166605615465883474673622,
    0.01846646831109095914230213191204727,
    0.02878470788332336934971917961129204,
    0.03879919256962704959680193644634769,
    0.04840267283059405290293814042280752,
    0.05749315621761906648172168940205613,
    0.06597422988218049512812851511596236,
    0.07375597473770520626824385002219073,
    0.08075589522942021535469493846052973,
    0.08689978720108297980238753071512570,
    0.09212252223778612871763270708761877,
    0.09636873717464425963946862635180987,
    0.09959342058679526706278028210356948,
    0.1017623897484055045964289521685540,
    0.1028526528935588403412856367054150,
];

/// Weights of the 61-point Kronrod rule.
const WGK: [f64; 31] = [
    0.001389013698677007624551591226759700,
    0.003890461127099884051267201844515503,
    0.006630703915931292173319826369750168,
    0.009273279659517763428441146892024360,
    0.01182301525349634174223289885325059,
    0.01436972950704580481245143244358001,
    0.01692088918905327262757228942032209,
    0.01941414119394238117340895105012846,
    0.02182803582160919229716748573833899,
    0.02419116207808060136568637072523203,
    0.02650995488233310161060170933507541,
    0.02875404876504129284397878535433421,
    0.03090725756238776247288425294309227,
    0.03298144705748372603181419101685393,
    0.03497933802806002413749967073146788,
    0.03688236465182122922391106561713597,
    0.03867894562472759295034865153228105,
    0.04037453895153595911199527975246811,
    0.04196981021516424614714754128596976,
    0.04345253970135606931683172811707326,
    0.04481480013316266319235555161672324,
    0.04605923827100698811627173555937358,
    0.04718554656929915394526147818109949,
    0.04818586175708712914077949229830459,
    0.04905543455502977888752816536723817,
    0.04979568342707420635781156937994233,
    0.05040592140278234684089308565358503,
    0.05088179589874960649229747304980469,
    0.05122154784925877217065628260494421,
    0.05142612853745902593386287921578126,
    0.05149472942945156755834043364709931,
];

/// Applies the 61-point Gauss-Kronrod rule to `f` on `[a, b]`.
pub fn qk61<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64) -> QkResult {
    qk(&XGK, &WG, &WGK, f, a, b)
}
