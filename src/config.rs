// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

// These parameters should rarely need adjustment.

//! # **Configuration Constants** - *Runtime Behaviour Parameters*
//!
//! Global configuration constants controlling distribution defaults and the
//! switch-over points between equivalent formulas. These values are compile-time
//! constants. Per-distribution behaviour is set through `CauchyOptions`.

/// Default for `validate_args` on newly constructed distributions.
///
/// When enabled, every evaluating operation checks `scale > 0` element-wise
/// before computing and fails with `KernelError::InvalidArguments` otherwise.
pub const DEFAULT_VALIDATE_ARGS: bool = false;

/// Default for `allow_nan_stats` on newly constructed distributions.
///
/// When enabled, undefined moments (mean, variance, standard deviation) evaluate
/// to NaN. When disabled, requesting them is an error.
pub const DEFAULT_ALLOW_NAN_STATS: bool = true;

/// Standardised magnitude |z| beyond which the CDF and survival function switch
/// to the reciprocal arctangent form `atan(1/|z|) / π`.
///
/// Below this, `0.5 ± atan(z) / π` loses no significant digits.
pub const CDF_TAIL_THRESHOLD: f64 = 1.0;

/// Probability below which (and above one minus which) the quantile function uses
/// the cotangent form instead of `tan(π·(p − ½))`.
pub const QUANTILE_TAIL_PROBABILITY: f64 = 0.25;
