//! Globally adaptive Gauss-Kronrod quadrature.
//!
//! `quadr` numerically integrates a real-valued function of one real
//! variable over a finite interval, returning an estimate together with a
//! rigorous absolute-error bound, or a classified error when the requested
//! tolerances cannot be met within a bounded number of subdivisions.
//!
//! # How it works
//!
//! A fixed-order Gauss-Kronrod pair is applied to the whole interval; while
//! the accumulated error exceeds the tolerance, the subinterval with the
//! largest error estimate is bisected and the rule re-applied to each half.
//! The difference between the nested Kronrod and Gauss estimates prices each
//! subinterval's error with no extra integrand evaluations.
//!
//! # Entry points
//!
//! | Function | Use case |
//! |----------|----------|
//! | [`qag`] | Adaptive integration with an options struct |
//! | [`integrate`] | Adaptive driver over an explicit rule function |
//! | [`qk15`] … [`qk61`] | One fixed-order rule application, no subdivision |
//!
//! # Choosing a rule
//!
//! - Smooth integrands where subdivision will localize the difficulty:
//!   [`GkRule::K15`]
//! - General use: [`GkRule::K21`] (the default)
//! - Oscillatory integrands: [`GkRule::K51`] or [`GkRule::K61`]
//!
//! # Example
//!
//! ```
//! use quadr::{qag, QagOptions};
//!
//! // Integrate sin(x) from 0 to pi
//! let r = qag(|x: f64| x.sin(), 0.0, std::f64::consts::PI, &QagOptions::default()).unwrap();
//! assert!((r.estimate - 2.0).abs() < 1e-8);
//! ```
//!
//! Failures are classified, never silent:
//!
//! ```
//! use quadr::{qag, QagOptions, QuadError};
//!
//! let options = QagOptions { epsabs: 0.0, epsrel: 0.0, ..Default::default() };
//! let err = qag(|x: f64| x, 0.0, 1.0, &options).unwrap_err();
//! assert!(matches!(err, QuadError::BadTolerance { .. }));
//! ```
//!
//! The crate also carries two small numerical utilities that share its
//! error-estimation discipline but are independent of the quadrature core:
//! adaptive numerical differentiation ([`diff`]) and generic integer powers
//! ([`power`]).

pub mod complex;
pub mod diff;
pub mod error;
pub mod power;
pub mod qk;
pub mod workspace;

mod qag;

pub use error::{QuadError, QuadResult};
pub use qag::{integrate, qag, QagOptions, QagResult};
pub use qk::{qk15, qk21, qk31, qk41, qk51, qk61, GkRule, QkResult};
pub use workspace::IntegrationWorkspace;
