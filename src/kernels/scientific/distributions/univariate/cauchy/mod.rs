// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Cauchy Distribution Module** - *Heavy-Tailed Continuous Distribution*
//!
//! Null-aware slice kernels for the Cauchy density, distribution and quantile
//! functions, and the batched [`Cauchy`] distribution over broadcast parameter
//! tensors.
//!
//! ## Overview
//! The Cauchy distribution, also known as the Lorentz distribution, is a continuous probability
//! distribution with heavy tails and undefined mean and variance. It is characterised by its
//! location parameter (median) and scale parameter (half-width at half-maximum).
//!
//! ## Mathematical Definition
//! - **PDF**: f(x; x₀, γ) = (1/π) × [γ / ((x - x₀)² + γ²)]
//! - **CDF**: F(x; x₀, γ) = (1/2) + (1/π) × arctan((x - x₀)/γ)
//! - **Quantile**: Q(p; x₀, γ) = x₀ + γ × tan(π × (p - 1/2))
//! - **Entropy**: ln(4π γ)
//! - **Support**: x ∈ (-∞, +∞)
//! - **Parameters**: x₀ ∈ ℝ (location), γ > 0 (scale)
//!
//! ## Tail accuracy
//! The survival function is evaluated as F(−z) and the lower-tail CDF as
//! atan(−1/z)/π, so neither loses digits to `1 − F`. The log variants take
//! `ln` of the small side and `ln_1p` of the large side.

mod distribution;
pub mod scalar;
mod std;

pub use distribution::{Cauchy, CauchyOptions, Gradient, ParamShapes, Parameter};

use minarrow::{Bitmask, FloatArray};

use crate::errors::KernelError;

/// Computes the probability density function (PDF) of the Cauchy distribution.
///
/// Calculates f(x; x₀, γ) = (1/π) × [γ / ((x - x₀)² + γ²)] for each element
/// in the input array, where x₀ is the location parameter and γ is the scale parameter.
///
/// ## Parameters
/// - `x`: Array of values to evaluate
/// - `location`: Location parameter x₀ (median of the distribution)
/// - `scale`: Scale parameter γ > 0 (half width at half maximum)
/// - `null_mask`: Optional validity mask (Arrow-style: 1=valid, 0=null)
/// - `null_count`: Optional count of null values for optimisation
///
/// ## Returns
/// `FloatArray<f64>` containing PDF values, with nulls propagated from input mask.
///
/// ## Behaviour
/// - Maximum value occurs at x = location with f(location) = 1/(π × scale)
/// - Heavy tails: f(x) ~ γ/(π × (x - x₀)²) for large |x - x₀|, without overflow
/// - Input nulls propagate to output nulls
///
/// ## Errors
/// Returns `KernelError::InvalidArguments` if scale ≤ 0 or parameters are non-finite.
///
/// ## Example
/// ```rust,ignore
/// use cauchy_kernels::kernels::scientific::distributions::univariate::cauchy::cauchy_pdf;
/// use minarrow::vec64;
///
/// let x = vec64![-2.0, 0.0, 2.0];
/// let result = cauchy_pdf(&x, 0.0, 1.0, None, None).unwrap();
/// ```
#[inline(always)]
pub fn cauchy_pdf(
    x: &[f64],
    location: f64,
    scale: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::cauchy_pdf_std(x, location, scale, null_mask, null_count)
}

/// Log-density of the Cauchy distribution: −ln π − ln γ − ln(1 + z²).
///
/// Finite for every finite `x`, including where the density underflows.
/// Errors and null handling as for [`cauchy_pdf`].
#[inline(always)]
pub fn cauchy_log_pdf(
    x: &[f64],
    location: f64,
    scale: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::cauchy_log_pdf_std(x, location, scale, null_mask, null_count)
}

/// Computes the cumulative distribution function (CDF) of the Cauchy distribution.
///
/// Calculates F(x; x₀, γ) = (1/2) + (1/π) × arctan((x - x₀)/γ) for each element
/// in the input array, representing P(X ≤ x) where X ~ Cauchy(x₀, γ).
///
/// ## Behaviour
/// - F(-∞) = 0, F(+∞) = 1, F(location) = 0.5 (median)
/// - Full relative precision in the lower tail
/// - Input nulls propagate to output nulls
///
/// ## Errors
/// Returns `KernelError::InvalidArguments` if scale ≤ 0 or parameters are non-finite.
///
/// ## Example
/// ```rust,ignore
/// use cauchy_kernels::kernels::scientific::distributions::univariate::cauchy::cauchy_cdf;
/// use minarrow::vec64;
///
/// let x = vec64![-1.0, 0.0, 1.0];
/// let result = cauchy_cdf(&x, 0.0, 1.0, None, None).unwrap();
/// // Returns [0.25, 0.5, 0.75] for standard Cauchy distribution
/// ```
#[inline(always)]
pub fn cauchy_cdf(
    x: &[f64],
    location: f64,
    scale: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::cauchy_cdf_std(x, location, scale, null_mask, null_count)
}

/// Natural log of the CDF.
#[inline(always)]
pub fn cauchy_log_cdf(
    x: &[f64],
    location: f64,
    scale: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::cauchy_log_cdf_std(x, location, scale, null_mask, null_count)
}

/// Survival function S(x) = P(X > x).
///
/// Evaluated directly, so it keeps full relative precision in the upper tail
/// where `1 − F(x)` rounds to zero.
#[inline(always)]
pub fn cauchy_sf(
    x: &[f64],
    location: f64,
    scale: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::cauchy_sf_std(x, location, scale, null_mask, null_count)
}

/// Natural log of the survival function.
#[inline(always)]
pub fn cauchy_log_sf(
    x: &[f64],
    location: f64,
    scale: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::cauchy_log_sf_std(x, location, scale, null_mask, null_count)
}

/// Computes the quantile function (inverse CDF) of the Cauchy distribution.
///
/// Calculates F⁻¹(p; x₀, γ) = x₀ + γ × tan(π × (p - 1/2)) for each element
/// in the input array, switching to cotangent forms for p < 0.25 and p > 0.75.
///
/// ## Behaviour
/// - p = 0 ⇒ −∞, p = 1 ⇒ +∞
/// - p outside [0, 1] or NaN ⇒ NaN (the lane stays valid)
///
/// ## Errors
/// Returns `KernelError::InvalidArguments` if scale ≤ 0 or parameters are non-finite.
#[inline(always)]
pub fn cauchy_quantile(
    p: &[f64],
    location: f64,
    scale: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::cauchy_quantile_std(p, location, scale, null_mask, null_count)
}

// Zero-allocation variants

/// Cauchy PDF (zero-allocation variant).
///
/// Writes directly to caller-provided output buffer, which must match `x` in
/// length. Null lanes are written as `NaN`.
#[inline(always)]
pub fn cauchy_pdf_to(
    x: &[f64],
    location: f64,
    scale: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    std::cauchy_pdf_std_to(x, location, scale, output, null_mask, null_count)
}

/// Cauchy log-PDF (zero-allocation variant).
#[inline(always)]
pub fn cauchy_log_pdf_to(
    x: &[f64],
    location: f64,
    scale: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    std::cauchy_log_pdf_std_to(x, location, scale, output, null_mask, null_count)
}

/// Cauchy CDF (zero-allocation variant).
///
/// Writes directly to caller-provided output buffer.
/// F(x; x₀, γ) = (1/2) + (1/π) × arctan((x - x₀)/γ)
#[inline(always)]
pub fn cauchy_cdf_to(
    x: &[f64],
    location: f64,
    scale: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    std::cauchy_cdf_std_to(x, location, scale, output, null_mask, null_count)
}

#[inline(always)]
pub fn cauchy_log_cdf_to(
    x: &[f64],
    location: f64,
    scale: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    std::cauchy_log_cdf_std_to(x, location, scale, output, null_mask, null_count)
}

#[inline(always)]
pub fn cauchy_sf_to(
    x: &[f64],
    location: f64,
    scale: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    std::cauchy_sf_std_to(x, location, scale, output, null_mask, null_count)
}

#[inline(always)]
pub fn cauchy_log_sf_to(
    x: &[f64],
    location: f64,
    scale: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    std::cauchy_log_sf_std_to(x, location, scale, output, null_mask, null_count)
}

/// Cauchy quantile (zero-allocation variant).
///
/// Writes directly to caller-provided output buffer.
/// Q(p; x₀, γ) = x₀ + γ × tan(π × (p - 1/2))
#[inline(always)]
pub fn cauchy_quantile_to(
    p: &[f64],
    location: f64,
    scale: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    std::cauchy_quantile_std_to(p, location, scale, output, null_mask, null_count)
}

#[cfg(test)]
mod cauchy_tests {
    use crate::common_tests;
    use crate::kernels::scientific::distributions::{
        shared::constants::INV_PI,
        univariate::common::{assert_rel_close, dense_data, single_null_mask},
    };

    use super::*;
    use minarrow::{Vec64, vec64};

    // See `./tests` for the high-precision reference suite

    // helpers

    fn mask_vec(m: &Bitmask) -> Vec64<bool> {
        (0..m.len()).map(|i| m.get(i)).collect()
    }
    fn assert_close(a: f64, b: f64, tol: f64) {
        assert!(
            (a - b).abs() < tol,
            "assert_close failed: {a} vs {b} (tol={tol})"
        );
    }

    fn cauchy_pdf_ref(x: f64, loc: f64, scale: f64) -> f64 {
        INV_PI * scale / ((x - loc).powi(2) + scale.powi(2))
    }
    fn cauchy_cdf_ref(x: f64, loc: f64, scale: f64) -> f64 {
        0.5 + INV_PI * ((x - loc) / scale).atan()
    }

    common_tests!(cauchy_pdf_common, |x, m, n| cauchy_pdf(x, 0.0, 1.0, m, n).unwrap());
    common_tests!(cauchy_log_pdf_common, |x, m, n| {
        cauchy_log_pdf(x, 1.0, 2.0, m, n).unwrap()
    });
    common_tests!(cauchy_cdf_common, |x, m, n| cauchy_cdf(x, 0.0, 1.0, m, n).unwrap());
    common_tests!(cauchy_log_cdf_common, |x, m, n| {
        cauchy_log_cdf(x, -0.5, 1.5, m, n).unwrap()
    });
    common_tests!(cauchy_sf_common, |x, m, n| cauchy_sf(x, 0.0, 1.0, m, n).unwrap());
    common_tests!(cauchy_log_sf_common, |x, m, n| {
        cauchy_log_sf(x, 0.5, 0.75, m, n).unwrap()
    });
    common_tests!(cauchy_quantile_common, |x, m, n| {
        cauchy_quantile(x, 0.0, 1.0, m, n).unwrap()
    });

    // PDF – correctness
    #[test]
    fn cauchy_pdf_basic_values() {
        let xs = vec64![-2.0, -1.0, 0.0, 1.0, 2.0];
        let expect: Vec<f64> = xs.iter().map(|&x| cauchy_pdf_ref(x, 0.0, 1.0)).collect();
        let out = dense_data(cauchy_pdf(&xs, 0.0, 1.0, None, None).unwrap());
        for (a, e) in out.iter().zip(expect.iter()) {
            assert_close(*a, *e, 1e-15);
        }
    }

    #[test]
    fn cauchy_pdf_location_scale() {
        let xs = vec64![0.0, 2.0, 5.0];
        let (loc, sc) = (1.5, 3.0);
        let expect: Vec<f64> = xs.iter().map(|&x| cauchy_pdf_ref(x, loc, sc)).collect();
        let out = dense_data(cauchy_pdf(&xs, loc, sc, None, None).unwrap());
        for (a, e) in out.iter().zip(expect.iter()) {
            assert_close(*a, *e, 1e-15);
        }
    }

    #[test]
    fn cauchy_pdf_inf_inputs_zero() {
        let xs = vec64![f64::INFINITY, f64::NEG_INFINITY];
        let out = dense_data(cauchy_pdf(&xs, 0.0, 1.0, None, None).unwrap());
        assert_eq!(out[0], 0.0);
        assert_eq!(out[1], 0.0);
    }

    #[test]
    fn cauchy_log_pdf_matches_ln_pdf() {
        let xs = vec64![-30.0, -2.0, 0.0, 0.5, 12.0];
        let lp = dense_data(cauchy_log_pdf(&xs, 0.5, 2.5, None, None).unwrap());
        let p = dense_data(cauchy_pdf(&xs, 0.5, 2.5, None, None).unwrap());
        for (l, d) in lp.iter().zip(p.iter()) {
            assert_rel_close(*l, d.ln(), 1e-14);
        }
    }

    #[test]
    fn cauchy_log_pdf_far_tail_finite() {
        let out = dense_data(cauchy_log_pdf(&[1e200, -1e200], 0.0, 1.0, None, None).unwrap());
        assert!(out.iter().all(|v| v.is_finite()));
    }

    // CDF – correctness & symmetry
    #[test]
    fn cauchy_cdf_standard_values() {
        let xs = vec64![-2.0, -1.0, 0.0, 1.0, 2.0];
        let expect: Vec<f64> = xs.iter().map(|&x| cauchy_cdf_ref(x, 0.0, 1.0)).collect();
        let out = dense_data(cauchy_cdf(&xs, 0.0, 1.0, None, None).unwrap());
        for (a, e) in out.iter().zip(expect.iter()) {
            assert_close(*a, *e, 1e-15);
        }
    }

    #[test]
    fn cauchy_cdf_plus_sf_is_one() {
        let xs = vec64![-5.0, -1.3, 0.0, 0.7, 4.2];
        let c = dense_data(cauchy_cdf(&xs, 0.0, 1.0, None, None).unwrap());
        let s = dense_data(cauchy_sf(&xs, 0.0, 1.0, None, None).unwrap());
        for (f, b) in c.iter().zip(s.iter()) {
            assert_close(*f + *b, 1.0, 1e-15);
        }
    }

    #[test]
    fn cauchy_cdf_tails() {
        let xs = vec64![-1e308, 1e308];
        let out = dense_data(cauchy_cdf(&xs, 0.0, 1.0, None, None).unwrap());
        assert_close(out[0], 0.0, 1e-15);
        assert_close(out[1], 1.0, 1e-15);
    }

    #[test]
    fn cauchy_sf_upper_tail_relative_precision() {
        let out = dense_data(cauchy_sf(&[1e12], 0.0, 1.0, None, None).unwrap());
        assert!((out[0] - INV_PI * 1e-12).abs() <= 1e-14 * INV_PI * 1e-12);
    }

    #[test]
    fn cauchy_log_sf_matches_ln_sf() {
        let xs = vec64![-8.0, -1.0, 0.0, 3.0, 40.0];
        let ls = dense_data(cauchy_log_sf(&xs, 1.0, 2.0, None, None).unwrap());
        let s = dense_data(cauchy_sf(&xs, 1.0, 2.0, None, None).unwrap());
        for (l, v) in ls.iter().zip(s.iter()) {
            assert_rel_close(*l, v.ln(), 1e-14);
        }
    }

    #[test]
    fn cauchy_log_cdf_median() {
        let out = dense_data(cauchy_log_cdf(&[4.0], 4.0, 9.0, None, None).unwrap());
        assert_close(out[0], -::std::f64::consts::LN_2, 1e-15);
    }

    // CDF – mask / error handling
    #[test]
    fn cauchy_cdf_mask_nan_propagation() {
        let xs = vec64![0.0, f64::NAN, 3.0];
        let m = single_null_mask(3, 2);
        let arr = cauchy_cdf(&xs, 0.0, 1.0, Some(&m), Some(1)).unwrap();
        let nulls = mask_vec(arr.null_mask.as_ref().unwrap());
        assert_eq!(nulls, vec64![true, true, false]);
        // NaN input on a valid lane stays a valid NaN
        assert!(arr.data[1].is_nan());
        assert!(arr.data[2].is_nan());
    }

    #[test]
    fn cauchy_dense_path_with_mask_yields_all_valid() {
        let m = Bitmask::new_set_all(2, true);
        let arr = cauchy_pdf(&[0.0, 1.0], 0.0, 1.0, Some(&m), Some(0)).unwrap();
        assert_eq!(mask_vec(arr.null_mask.as_ref().unwrap()), vec64![true, true]);
    }

    // Quantile – correctness & round-trip
    #[test]
    fn cauchy_quantile_known_probs() {
        let ps = vec64![0.01, 0.25, 0.5, 0.75, 0.99];
        let expect = [-31.820515953773956, -1.0, 0.0, 1.0, 31.82051595377393];
        let out = dense_data(cauchy_quantile(&ps, 0.0, 1.0, None, None).unwrap());
        for (a, e) in out.iter().zip(expect.iter()) {
            assert_rel_close(*a, *e, 1e-13);
        }
    }

    #[test]
    fn cauchy_quantile_location_scale() {
        let ps = vec64![0.1, 0.9];
        let expect = [-10.310734148701012, 14.310734148701016];
        let out = dense_data(cauchy_quantile(&ps, 2.0, 4.0, None, None).unwrap());
        for (a, e) in out.iter().zip(expect.iter()) {
            assert_rel_close(*a, *e, 1e-13);
        }
    }

    #[test]
    fn cauchy_quantile_reflection_roundtrip() {
        // symmetry: Q(p) == -Q(1-p) for standard cauchy
        let ps = vec64![0.0625, 0.125, 0.375, 0.625, 0.875, 0.9375];
        let q = dense_data(cauchy_quantile(&ps, 0.0, 1.0, None, None).unwrap());
        let reflected: Vec<f64> = ps.iter().map(|p| 1.0 - p).collect();
        let q_r = dense_data(cauchy_quantile(&reflected, 0.0, 1.0, None, None).unwrap());
        for (u, v) in q.iter().zip(q_r.iter()) {
            assert_close(*u, -*v, 1e-13);
        }

        // round-trip with CDF
        let xs = vec64![-10.0, -1.0, 0.0, 1.0, 8.0];
        let pvals = dense_data(cauchy_cdf(&xs, 0.0, 1.0, None, None).unwrap());
        let back = dense_data(cauchy_quantile(&pvals, 0.0, 1.0, None, None).unwrap());
        for (x, b) in xs.iter().zip(back.iter()) {
            assert_rel_close(*b, *x, 1e-12);
        }
    }

    #[test]
    fn cauchy_quantile_domain_edges() {
        let ps = vec64![0.0, 1.0, -0.1, 1.1, f64::NAN];
        let out = dense_data(cauchy_quantile(&ps, 0.0, 1.0, None, None).unwrap());
        assert!(out[0].is_infinite() && out[0].is_sign_negative());
        assert!(out[1].is_infinite() && out[1].is_sign_positive());
        assert!(out[2].is_nan() && out[3].is_nan() && out[4].is_nan());
    }

    // Quantile – mask propagation
    #[test]
    fn cauchy_quantile_mask_propagation() {
        let ps = vec64![0.2, 0.5, 0.8];
        let m = single_null_mask(3, 0);
        let arr = cauchy_quantile(&ps, 0.0, 1.0, Some(&m), Some(1)).unwrap();
        let nulls = mask_vec(arr.null_mask.as_ref().unwrap());
        assert_eq!(nulls, vec64![false, true, true]);
        assert!(arr.data[0].is_nan());
    }

    // Zero-allocation variants
    #[test]
    fn cauchy_to_variants_match_allocating() {
        let xs = vec64![-3.0, -0.5, 0.0, 2.0, 9.0];
        let mut out = vec![0.0; xs.len()];

        cauchy_log_cdf_to(&xs, 0.5, 1.5, &mut out, None, None).unwrap();
        let alloc = dense_data(cauchy_log_cdf(&xs, 0.5, 1.5, None, None).unwrap());
        assert_eq!(out.as_slice(), alloc.as_slice());

        cauchy_sf_to(&xs, 0.5, 1.5, &mut out, None, None).unwrap();
        let alloc = dense_data(cauchy_sf(&xs, 0.5, 1.5, None, None).unwrap());
        assert_eq!(out.as_slice(), alloc.as_slice());

        let ps = vec64![0.05, 0.3, 0.5, 0.7, 0.95];
        cauchy_quantile_to(&ps, 0.5, 1.5, &mut out, None, None).unwrap();
        let alloc = dense_data(cauchy_quantile(&ps, 0.5, 1.5, None, None).unwrap());
        assert_eq!(out.as_slice(), alloc.as_slice());
    }

    #[test]
    fn cauchy_to_variants_write_nan_on_null_lanes() {
        let xs = vec64![0.0, 1.0, 2.0];
        let m = single_null_mask(3, 1);
        let mut out = vec![0.0; 3];
        cauchy_pdf_to(&xs, 0.0, 1.0, &mut out, Some(&m), Some(1)).unwrap();
        assert!(out[1].is_nan());
        assert_close(out[0], INV_PI, 1e-16);
        cauchy_log_sf_to(&xs, 0.0, 1.0, &mut out, Some(&m), None).unwrap();
        assert!(out[1].is_nan());
        assert!(out[2] < 0.0);
    }

    #[test]
    fn cauchy_to_variants_reject_wrong_length() {
        let mut out = vec![0.0; 2];
        let err = cauchy_cdf_to(&[0.0, 1.0, 2.0], 0.0, 1.0, &mut out, None, None).unwrap_err();
        assert!(matches!(err, KernelError::LengthMismatch(_)));
        assert!(cauchy_log_pdf_to(&[0.0], 0.0, 1.0, &mut out, None, None).is_err());
    }

    // Parameter validation & empty input
    #[test]
    fn cauchy_invalid_param_errors() {
        assert!(cauchy_pdf(&[0.0], 0.0, -1.0, None, None).is_err());
        assert!(cauchy_cdf(&[0.0], f64::NAN, 1.0, None, None).is_err());
        assert!(cauchy_quantile(&[0.5], 0.0, 0.0, None, None).is_err());
        assert!(cauchy_log_sf(&[0.5], 0.0, f64::INFINITY, None, None).is_err());
        let mut out = [0.0];
        assert!(matches!(
            cauchy_sf_to(&[0.5], 0.0, -2.0, &mut out, None, None),
            Err(KernelError::InvalidArguments(_))
        ));
    }

    #[test]
    fn cauchy_null_count_without_mask_errors() {
        assert!(matches!(
            cauchy_pdf(&[0.0, 1.0], 0.0, 1.0, None, Some(1)),
            Err(KernelError::InvalidArguments(_))
        ));
    }

    #[test]
    fn cauchy_short_mask_errors() {
        let m = Bitmask::new_set_all(2, true);
        assert!(matches!(
            cauchy_cdf(&[0.0, 1.0, 2.0], 0.0, 1.0, Some(&m), Some(1)),
            Err(KernelError::LengthMismatch(_))
        ));
    }
}
