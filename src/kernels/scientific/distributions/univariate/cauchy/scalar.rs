// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Cauchy Scalar Formulas**
//!
//! Element-wise Cauchy formulas shared by the slice kernels and the batched
//! distribution, generic over `f32` and `f64`.
//!
//! With `z = (x − location) / scale`:
//! - ln f = −ln π − ln scale − ln(1 + z²)
//! - F = ½ + atan(z)/π, evaluated as atan(−1/z)/π in the lower tail
//! - S(z) = F(−z)
//! - Q(p) = location + scale · tan[π·(p − ½)], cotangent forms near 0 and 1
//!
//! The `*_grad` functions return `(value, ∂/∂location, ∂/∂scale)`. Terms of the
//! form 1/(1 + z²) are rewritten in 1/z for |z| > 1 so neither the values nor the
//! partials overflow for large inputs.

use crate::config::{CDF_TAIL_THRESHOLD, QUANTILE_TAIL_PROBABILITY};
use crate::kernels::scientific::distributions::shared::constants::{INV_PI, LN_4PI, LN_PI};
use crate::traits::real::Real;

#[inline(always)]
pub fn standardise<T: Real>(x: T, location: T, scale: T) -> T {
    (x - location) / scale
}

/// `(1/(1+z²), z/(1+z²), z²/(1+z²))`, overflow-free.
#[inline(always)]
fn lorentz_terms<T: Real>(z: T) -> (T, T, T) {
    if z.abs() > T::one() {
        let r = z.recip();
        let d = T::one() + r * r;
        (r * r / d, r / d, d.recip())
    } else {
        let d = T::one() + z * z;
        (d.recip(), z / d, z * z / d)
    }
}

/// ln(1 + z²), overflow-free.
#[inline(always)]
fn ln1p_sq<T: Real>(z: T) -> T {
    if z.abs() > T::one() {
        let r = z.recip();
        T::lit(2.0) * z.abs().ln() + (r * r).ln_1p()
    } else {
        (z * z).ln_1p()
    }
}

/// CDF of the standard Cauchy at `z`.
#[inline(always)]
pub fn standard_cdf<T: Real>(z: T) -> T {
    if z < -T::lit(CDF_TAIL_THRESHOLD) {
        // ½ + atan(z)/π == atan(−1/z)/π for z < 0, without cancellation
        (-z.recip()).atan() * T::lit(INV_PI)
    } else {
        T::lit(0.5) + z.atan() * T::lit(INV_PI)
    }
}

/// Log-CDF of the standard Cauchy at `z`.
#[inline(always)]
pub fn standard_log_cdf<T: Real>(z: T) -> T {
    if z < T::zero() {
        standard_cdf(z).ln()
    } else {
        (-standard_cdf(-z)).ln_1p()
    }
}

#[inline(always)]
pub fn log_pdf<T: Real>(x: T, location: T, scale: T) -> T {
    let z = standardise(x, location, scale);
    -T::lit(LN_PI) - scale.ln() - ln1p_sq(z)
}

#[inline(always)]
pub fn pdf<T: Real>(x: T, location: T, scale: T) -> T {
    let z = standardise(x, location, scale);
    let (w, _, _) = lorentz_terms(z);
    T::lit(INV_PI) * w / scale
}

#[inline(always)]
pub fn cdf<T: Real>(x: T, location: T, scale: T) -> T {
    standard_cdf(standardise(x, location, scale))
}

#[inline(always)]
pub fn log_cdf<T: Real>(x: T, location: T, scale: T) -> T {
    standard_log_cdf(standardise(x, location, scale))
}

/// Survival function, evaluated directly rather than as 1 − F.
#[inline(always)]
pub fn sf<T: Real>(x: T, location: T, scale: T) -> T {
    standard_cdf(-standardise(x, location, scale))
}

#[inline(always)]
pub fn log_sf<T: Real>(x: T, location: T, scale: T) -> T {
    standard_log_cdf(-standardise(x, location, scale))
}

/// Quantile (inverse CDF). `p = 0` ⇒ −∞, `p = 1` ⇒ +∞, outside [0, 1] or NaN ⇒ NaN.
#[inline(always)]
pub fn quantile<T: Real>(p: T, location: T, scale: T) -> T {
    if !(p >= T::zero() && p <= T::one()) {
        return T::nan();
    }
    let tail = T::lit(QUANTILE_TAIL_PROBABILITY);
    let pi = T::PI();
    if p < tail {
        // tan(π(p − ½)) = −cot(πp)
        location - scale / (pi * p).tan()
    } else if p > T::one() - tail {
        // 1 − p is exact here
        location + scale / (pi * (T::one() - p)).tan()
    } else {
        location + scale * (pi * (p - T::lit(0.5))).tan()
    }
}

/// Differential entropy ln(4π·scale).
#[inline(always)]
pub fn entropy<T: Real>(scale: T) -> T {
    T::lit(LN_4PI) + scale.ln()
}

#[inline(always)]
pub fn log_pdf_grad<T: Real>(x: T, location: T, scale: T) -> (T, T, T) {
    let z = standardise(x, location, scale);
    let (w, zw, z2w) = lorentz_terms(z);
    let value = -T::lit(LN_PI) - scale.ln() - ln1p_sq(z);
    let d_loc = T::lit(2.0) * zw / scale;
    let d_scale = (z2w - w) / scale;
    (value, d_loc, d_scale)
}

#[inline(always)]
pub fn pdf_grad<T: Real>(x: T, location: T, scale: T) -> (T, T, T) {
    let z = standardise(x, location, scale);
    let (w, zw, z2w) = lorentz_terms(z);
    let value = T::lit(INV_PI) * w / scale;
    let d_loc = value * T::lit(2.0) * zw / scale;
    let d_scale = value * (z2w - w) / scale;
    (value, d_loc, d_scale)
}

#[inline(always)]
pub fn cdf_grad<T: Real>(x: T, location: T, scale: T) -> (T, T, T) {
    let z = standardise(x, location, scale);
    let (w, zw, _) = lorentz_terms(z);
    let inv_ps = T::lit(INV_PI) / scale;
    (standard_cdf(z), -inv_ps * w, -inv_ps * zw)
}

#[inline(always)]
pub fn sf_grad<T: Real>(x: T, location: T, scale: T) -> (T, T, T) {
    let z = standardise(x, location, scale);
    let (w, zw, _) = lorentz_terms(z);
    let inv_ps = T::lit(INV_PI) / scale;
    (standard_cdf(-z), inv_ps * w, inv_ps * zw)
}

#[inline(always)]
pub fn log_cdf_grad<T: Real>(x: T, location: T, scale: T) -> (T, T, T) {
    let z = standardise(x, location, scale);
    let (w, zw, _) = lorentz_terms(z);
    let c = standard_cdf(z);
    let inv_ps = T::lit(INV_PI) / scale;
    (
        standard_log_cdf(z),
        -inv_ps * w / c,
        -inv_ps * zw / c,
    )
}

#[inline(always)]
pub fn log_sf_grad<T: Real>(x: T, location: T, scale: T) -> (T, T, T) {
    let z = standardise(x, location, scale);
    let (w, zw, _) = lorentz_terms(z);
    let s = standard_cdf(-z);
    let inv_ps = T::lit(INV_PI) / scale;
    (standard_log_cdf(-z), inv_ps * w / s, inv_ps * zw / s)
}
