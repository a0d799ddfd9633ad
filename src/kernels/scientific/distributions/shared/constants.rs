// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Mathematical Constants Module** - *High-Precision Constants for Statistical Computing*
//!
//! Mathematical constants for distribution calculations with hard-coded precision.

// ******** Constants ***********************************************/

/// The reciprocal of π: 1/π ≈ 0.3183098861837907.
///
/// Normalisation constant of the Cauchy density and scale factor of its CDF.
pub(crate) const INV_PI: f64 = 0.3183098861837907_f64;

/// The natural logarithm of π: ln(π) ≈ 1.1447298858494002.
///
/// Log-normalisation constant of the Cauchy log-density.
pub(crate) const LN_PI: f64 = 1.1447298858494002_f64;

/// The natural logarithm of 4π: ln(4π) ≈ 2.5310242469692907.
///
/// Differential entropy of the standard Cauchy distribution.
pub(crate) const LN_4PI: f64 = 2.5310242469692907_f64;
