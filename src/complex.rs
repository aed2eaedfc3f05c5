//! Complex value type.
//!
//! A thin surface over [`num_complex`]: the ecosystem type carries all the
//! arithmetic, this module just fixes the `f64` specialization and the two
//! constructors used alongside the real-valued routines.

pub use num_complex::{Complex, Complex64};

/// Complex number from rectangular coordinates.
pub fn rect(x: f64, y: f64) -> Complex64 {
    Complex64::new(x, y)
}

/// Complex number from polar coordinates `(r, theta)`.
pub fn polar(r: f64, theta: f64) -> Complex64 {
    Complex64::from_polar(r, theta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_rect_polar_round_trip() {
        let z = polar(2.0, FRAC_PI_2);
        assert!(z.re.abs() < 1e-15);
        assert!((z.im - 2.0).abs() < 1e-15);
        assert!((z.norm() - 2.0).abs() < 1e-15);
    }

    #[test]
    fn test_arithmetic() {
        let a = rect(1.0, 2.0);
        let b = rect(3.0, -1.0);
        let p = a * b;
        assert_eq!(p, rect(5.0, 5.0));
        assert_eq!(a + b, rect(4.0, 1.0));
    }
}
