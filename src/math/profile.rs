//! Peak profile pieces in the scaled time `x = t / duration`.
//!
//! - `gaussian(x) = exp(-x^2)`: unit-amplitude Gaussian profile
//! - `lorentzian_denom(x) = 1 + x^2`: the Lorentzian peak is `amplitude / lorentzian_denom(x)`
//!
//! The Lorentzian is kept as a denominator so callers divide once instead of
//! multiplying by a rounded reciprocal. Non-finite `x` is passed through IEEE
//! arithmetic unchanged.

/// Scaled time `t / duration`.
#[inline]
pub fn scaled_time(t: f64, duration: f64) -> f64 {
    t / duration
}

#[inline]
pub fn gaussian(x: f64) -> f64 {
    (-(x * x)).exp()
}

#[inline]
pub fn lorentzian_denom(x: f64) -> f64 {
    1.0 + x * x
}
