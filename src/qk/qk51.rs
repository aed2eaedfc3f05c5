//! 51-point Gauss-Kronrod rule (embedded 25-point Gauss).

use super::{qk, QkResult};

/// Abscissae of the 51-point Kronrod rule (positive half, descending).
///
/// Odd-indexed entries are the abscissae of the embedded 25-point Gauss
/// rule; even-indexed entries are the Kronrod extension points.
const XGK: [f64; 26] = [
    0.9992621049926098341934574865403406,
    0.9955569697904980979087849468939016,
    0.9880357945340772476373310145774062,
    0.9766639214595175114983153864795941,
    0.9616149864258425124181300336601672,
    0.9429745712289743394140111696584705,
    0.9207471152817015617463460845463306,
    0.8949919978782753688510420067828050,
    0.8658470652932755954489969695883401,
    0.8334426287608340014210211086935696,
    0.7978737979985000594104109049943066,
    0.7592592630373576305772828652043610,
    0.7177664068130843881866540797732978,
    0.6735663684734683644851206332476222,
    0.6268100990103174127881226816245179,
    0.5776629302412229677236898416126541,
    0.5263252843347191825996237781580102,
    0.4730027314457149605221821150091920,
    0.4178853821930377488518143945945725,
    0.3611723058093878377358217301276407,
    0.3030895389311078301674789099803393,
    0.2438668837209884320451903627974516,
    0.1837189394210488920159698887595284,
    0.1228646926107103963873598188080368,
    0.06154448300568507888654639236679663,
    0.0,
];

/// Weights of the embedded 25-point Gauss rule.
const WG: [f64; 13] = [
    0.01139379850102628794790296411323477,
    0.02635498661503213726190181529529914,
    0.04093915670130631265562348771164595,
    0.05490469597583519192593689154047332,
    0.06803833381235691720718718565670797,
    0.08014070033500101801323495966911130,
    0.09102826198296364981149722070289165,
    0.1005359490670506442022068903926858,
    0.1085196244742636531160939570501166,
    0.1148582591457116483393255458695558,
    0.1194557635357847722281781265129010,
    0.1222424429903100416889595189458515,
    0.1231760537267154512039028730790501,
];

/// Weights of the 51-point Kronrod rule.
const WGK: [f64; 26] = [
    0.001987383892330315926507851882843410,
    0.005561932135356713758040236901065522,
    0.009473973386174151607207710523655324,
    0.01323622919557167481365640584697624,
    0.01684781770912829823151666753633632,
    0.02043537114588283545656829223593897,
    0.02400994560695321622009248916488108,
    0.02747531758785173780294845551781108,
    0.03079230016738748889110902021522859,
    0.03400213027432933783674879522955120,
    0.03711627148341554356033062536761988,
    0.04008382550403238207483928446707565,
    0.04287284502017004947689579243949516,
    0.04550291304992178890987058475266039,
    0.04798253713883671390639225575691475,
    0.05027767908071567196332525943344008,
    0.05236288580640747586436671213787271,
    0.05425112988854549014454337045987561,
    0.05595081122041231730824068638274735,
    0.05743711636156783285358269393950647,
    0.05868968002239420796197417585678776,
    0.05972034032417405997909929193256185,
    0.06053945537604586294536026751756543,
    0.06112850971705304830585903041629271,
    0.06147118987142531666154413196526418,
    0.06158081806783293507875982424006455,
];

/// Applies the 51-point Gauss-Kronrod rule to `f` on `[a, b]`.
pub fn qk51<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64) -> QkResult {
    qk(&XGK, &WG, &WGK, f, a, b)
}
