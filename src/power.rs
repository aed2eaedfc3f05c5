//! Integer powers by repeated squaring.
//!
//! One generic routine covers machine-width and arbitrary-precision
//! exponents: anything that can report zero/odd/negative, halve itself, and
//! negate itself can drive the squaring loop.

use dashu::base::BitTest;
use dashu::integer::IBig;
use num_traits::{One, Signed, Zero};

/// Capabilities an exponent type must offer to [`pow_int`].
///
/// Implemented for `i32`, `i64`, and [`IBig`]. The loop only ever halves a
/// non-negative exponent, so implementations may assume `halve` and `is_odd`
/// are called on non-negative values.
pub trait IntExponent {
    fn is_zero(&self) -> bool;
    fn is_negative(&self) -> bool;
    fn is_odd(&self) -> bool;
    fn halve(&mut self);
    fn negate(&mut self);
}

macro_rules! int_exponent_prim {
    ($($t:ty),*) => {$(
        impl IntExponent for $t {
            fn is_zero(&self) -> bool {
                Zero::is_zero(self)
            }
            fn is_negative(&self) -> bool {
                Signed::is_negative(self)
            }
            fn is_odd(&self) -> bool {
                *self & <$t>::one() == <$t>::one()
            }
            fn halve(&mut self) {
                *self >>= 1;
            }
            fn negate(&mut self) {
                *self = -*self;
            }
        }
    )*};
}

int_exponent_prim!(i32, i64);

impl IntExponent for IBig {
    fn is_zero(&self) -> bool {
        *self == IBig::ZERO
    }
    fn is_negative(&self) -> bool {
        *self < IBig::ZERO
    }
    fn is_odd(&self) -> bool {
        self.bit(0)
    }
    fn halve(&mut self) {
        *self = self.clone() >> 1usize;
    }
    fn negate(&mut self) {
        *self = -self.clone();
    }
}

/// Raises `x` to the integer power `n` by repeated squaring.
///
/// Negative exponents invert the base up front, so `pow_int(0.0, -1)` is
/// infinite, matching `0.0f64.powi(-1)`.
///
/// # Example
///
/// ```
/// use quadr::power::pow_int;
/// use dashu::integer::IBig;
///
/// assert_eq!(pow_int(2.0, 10i32), 1024.0);
/// assert_eq!(pow_int(2.0, -2i64), 0.25);
/// assert_eq!(pow_int(2.0, IBig::from(20)), 1048576.0);
/// ```
pub fn pow_int<E: IntExponent>(mut x: f64, mut n: E) -> f64 {
    if n.is_negative() {
        x = 1.0 / x;
        n.negate();
    }

    let mut value = 1.0;
    while !n.is_zero() {
        if n.is_odd() {
            value *= x;
        }
        n.halve();
        if !n.is_zero() {
            x *= x;
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_machine_int_exponents() {
        assert_eq!(pow_int(2.0, 0i32), 1.0);
        assert_eq!(pow_int(2.0, 1i32), 2.0);
        assert_eq!(pow_int(2.0, 10i32), 1024.0);
        assert_eq!(pow_int(3.0, 4i64), 81.0);
        assert_eq!(pow_int(-2.0, 3i32), -8.0);
    }

    #[test]
    fn test_negative_exponents() {
        assert_eq!(pow_int(2.0, -2i32), 0.25);
        assert_eq!(pow_int(4.0, -1i64), 0.25);
        assert_eq!(pow_int(0.0, -1i32), f64::INFINITY);
    }

    #[test]
    fn test_big_exponents() {
        assert_eq!(pow_int(2.0, IBig::from(20)), 1048576.0);
        assert_eq!(pow_int(3.0, IBig::from(-3)), 1.0 / 27.0);
        assert_eq!(pow_int(1.0, IBig::from(10).pow(30)), 1.0);
    }

    #[test]
    fn test_matches_std_powi() {
        for n in -6..=6 {
            let got = pow_int(1.7, n);
            let expected = 1.7_f64.powi(n);
            assert!(
                (got - expected).abs() <= 1e-15 * expected.abs(),
                "n = {}: {} vs {}",
                n,
                got,
                expected
            );
        }
    }
}
