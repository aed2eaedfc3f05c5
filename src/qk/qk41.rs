//! 41-point Gauss-Kronrod rule (embedded 20-point Gauss).

use super::{qk, QkResult};

/// Abscissae of the 41-point Kronrod rule (positive half, descending).
///
/// Odd-indexed entries are the abscissae of the embedded 20-point Gauss
/// rule; even-indexed entries are the Kronrod extension points.
const XGK: [f64; 21] = [
    0.9988590315882776638383155765458630,
    0.9931285991850949247861223884713203,
    0.9815078774502502591933429947202169,
    0.9639719272779137912676661311972772,
    0.9408226338317547535199827222124434,
    0.9122344282513259058677524412032981,
    0.8782768112522819760774429951130785,
    0.8391169718222188233945290617015207,
    0.7950414288375511983506388332727879,
    0.7463319064601507926143050703556416,
    0.6932376563347513848054907118459315,
    0.6360536807265150254528366962262859,
    0.5751404468197103153429460365864251,
    0.5108670019508270980043640509552510,
    0.4435931752387251031999922134926401,
    0.3737060887154195606725481770249272,
    0.3016278681149130043205553568585923,
    0.2277858511416450780804961953685746,
    0.1526054652409226755052202410226775,
    0.07652652113349733375464040939883821,
    0.0,
];

/// Weights of the embedded 20-point Gauss rule.
const WG: [f64; 10] = [
    0.01761400713915211831186196235185282,
    0.04060142980038694133103995227493211,
    0.06267204833410906356950653518704161,
    0.08327674157670474872475814322204621,
    0.1019301198172404350367501354803499,
    0.1181945319615184173123773777113823,
    0.1316886384491766268984944997481631,
    0.1420961093183820513292983250671649,
    0.1491729864726037467878287370019694,
    0.1527533871307258506980843319550976,
];

/// Weights of the 41-point Kronrod rule.
const WGK: [f64; 21] = [
    0.003073583718520531501218293246030987,
    0.008600269855642942198661787950102347,
    0.01462616925697125298378796030886836,
    0.02038837346126652359801023143275471,
    0.02588213360495115883450506709615314,
    0.03128730677703279895854311932380074,
    0.03660016975820079803055724070721101,
    0.04166887332797368626378830593689474,
    0.04643482186749767472023188092610752,
    0.05094457392372869193270767005034495,
    0.05519510534828599474483237241977733,
    0.05911140088063957237496722064859422,
    0.06265323755478116802587012217425498,
    0.06583459713361842211156355696939794,
    0.06864867292852161934562341188536780,
    0.07105442355344406830579036172321017,
    0.07303069033278666749518941765891311,
    0.07458287540049918898658141836248753,
    0.07570449768455667465954277537661656,
    0.07637786767208073670550283503806100,
    0.07660071191799965644504990153010174,
];

/// Applies the 41-point Gauss-Kronrod rule to `f` on `[a, b]`.
pub fn qk41<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64) -> QkResult {
    qk(&XGK, &WG, &WGK, f, a, b)
}
