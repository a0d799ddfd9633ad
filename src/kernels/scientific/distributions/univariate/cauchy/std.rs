//! # **Cauchy Distribution Scalar Implementation**
//!
//! Slice kernels over the element-wise formulas in `scalar`. PDF uses the
//! rational form, CDF/survival/quantile use atan/tan with tail-safe rewrites.

// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use minarrow::{Bitmask, FloatArray};

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::univariate::cauchy::scalar;
use crate::kernels::scientific::distributions::univariate::common::std::{
    univariate_kernel_f64_std, univariate_kernel_f64_std_to,
};

/// Rejects non-finite location and non-positive or non-finite scale.
#[inline(always)]
fn validate_params(fname: &str, location: f64, scale: f64) -> Result<(), KernelError> {
    if !(scale > 0.0 && scale.is_finite()) || !location.is_finite() {
        return Err(KernelError::InvalidArguments(format!(
            "{fname}: invalid location or scale"
        )));
    }
    Ok(())
}

/// Cauchy PDF (scalar), null-aware and Arrow-compliant.
/// f(x; location, scale) = (1/π)·[scale / ((x − location)² + scale²)]
#[inline(always)]
pub fn cauchy_pdf_std(
    x: &[f64],
    location: f64,
    scale: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    validate_params("cauchy_pdf", location, scale)?;
    univariate_kernel_f64_std("cauchy_pdf", x, null_mask, null_count, move |xi| {
        scalar::pdf(xi, location, scale)
    })
}

/// Cauchy log-PDF (scalar): −ln π − ln scale − ln(1 + z²)
#[inline(always)]
pub fn cauchy_log_pdf_std(
    x: &[f64],
    location: f64,
    scale: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    validate_params("cauchy_log_pdf", location, scale)?;
    univariate_kernel_f64_std("cauchy_log_pdf", x, null_mask, null_count, move |xi| {
        scalar::log_pdf(xi, location, scale)
    })
}

/// Cauchy CDF (scalar), null-aware and Arrow-compliant.
/// F(x; location, scale) = ½ + (1/π)·atan((x − location)/scale)
#[inline(always)]
pub fn cauchy_cdf_std(
    x: &[f64],
    location: f64,
    scale: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    validate_params("cauchy_cdf", location, scale)?;
    univariate_kernel_f64_std("cauchy_cdf", x, null_mask, null_count, move |xi| {
        scalar::cdf(xi, location, scale)
    })
}

/// Cauchy log-CDF (scalar), accurate deep into the lower tail.
#[inline(always)]
pub fn cauchy_log_cdf_std(
    x: &[f64],
    location: f64,
    scale: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    validate_params("cauchy_log_cdf", location, scale)?;
    univariate_kernel_f64_std("cauchy_log_cdf", x, null_mask, null_count, move |xi| {
        scalar::log_cdf(xi, location, scale)
    })
}

/// Cauchy survival function (scalar): S(x) = F(2·location − x), never 1 − F.
#[inline(always)]
pub fn cauchy_sf_std(
    x: &[f64],
    location: f64,
    scale: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    validate_params("cauchy_sf", location, scale)?;
    univariate_kernel_f64_std("cauchy_sf", x, null_mask, null_count, move |xi| {
        scalar::sf(xi, location, scale)
    })
}

/// Cauchy log-survival function (scalar), accurate deep into the upper tail.
#[inline(always)]
pub fn cauchy_log_sf_std(
    x: &[f64],
    location: f64,
    scale: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    validate_params("cauchy_log_sf", location, scale)?;
    univariate_kernel_f64_std("cauchy_log_sf", x, null_mask, null_count, move |xi| {
        scalar::log_sf(xi, location, scale)
    })
}

/// Cauchy quantile (inverse CDF): Q(p; location, scale) = location + scale · tan[π·(p - ½)]
///
/// Endpoints map to ±∞; probabilities outside [0, 1] produce NaN but stay valid.
#[inline(always)]
pub fn cauchy_quantile_std(
    p: &[f64],
    location: f64,
    scale: f64,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    validate_params("cauchy_quantile", location, scale)?;
    univariate_kernel_f64_std("cauchy_quantile", p, null_mask, null_count, move |pi| {
        scalar::quantile(pi, location, scale)
    })
}

// Zero-allocation variants

#[inline(always)]
pub fn cauchy_pdf_std_to(
    x: &[f64],
    location: f64,
    scale: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    validate_params("cauchy_pdf", location, scale)?;
    univariate_kernel_f64_std_to("cauchy_pdf", x, output, null_mask, null_count, move |xi| {
        scalar::pdf(xi, location, scale)
    })
}

#[inline(always)]
pub fn cauchy_log_pdf_std_to(
    x: &[f64],
    location: f64,
    scale: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    validate_params("cauchy_log_pdf", location, scale)?;
    univariate_kernel_f64_std_to(
        "cauchy_log_pdf",
        x,
        output,
        null_mask,
        null_count,
        move |xi| scalar::log_pdf(xi, location, scale),
    )
}

#[inline(always)]
pub fn cauchy_cdf_std_to(
    x: &[f64],
    location: f64,
    scale: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    validate_params("cauchy_cdf", location, scale)?;
    univariate_kernel_f64_std_to("cauchy_cdf", x, output, null_mask, null_count, move |xi| {
        scalar::cdf(xi, location, scale)
    })
}

#[inline(always)]
pub fn cauchy_log_cdf_std_to(
    x: &[f64],
    location: f64,
    scale: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    validate_params("cauchy_log_cdf", location, scale)?;
    univariate_kernel_f64_std_to(
        "cauchy_log_cdf",
        x,
        output,
        null_mask,
        null_count,
        move |xi| scalar::log_cdf(xi, location, scale),
    )
}

#[inline(always)]
pub fn cauchy_sf_std_to(
    x: &[f64],
    location: f64,
    scale: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    validate_params("cauchy_sf", location, scale)?;
    univariate_kernel_f64_std_to("cauchy_sf", x, output, null_mask, null_count, move |xi| {
        scalar::sf(xi, location, scale)
    })
}

#[inline(always)]
pub fn cauchy_log_sf_std_to(
    x: &[f64],
    location: f64,
    scale: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    validate_params("cauchy_log_sf", location, scale)?;
    univariate_kernel_f64_std_to(
        "cauchy_log_sf",
        x,
        output,
        null_mask,
        null_count,
        move |xi| scalar::log_sf(xi, location, scale),
    )
}

#[inline(always)]
pub fn cauchy_quantile_std_to(
    p: &[f64],
    location: f64,
    scale: f64,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<(), KernelError> {
    validate_params("cauchy_quantile", location, scale)?;
    univariate_kernel_f64_std_to(
        "cauchy_quantile",
        p,
        output,
        null_mask,
        null_count,
        move |pi| scalar::quantile(pi, location, scale),
    )
}
