// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Error Types** - *Kernel and Distribution Error Handling*
//!
//! Error types for kernel and distribution operations with structured error reporting.
//!
//! ## Error Categories
//! - **Argument Errors**: Invalid distribution parameters, including failed validation
//! - **Dimension Errors**: Buffer length and tensor shape mismatches
//! - **Statistic Errors**: Moments that do not exist under strict statistics
//! - **Resolution Errors**: Dynamic values requested from unfed placeholders
//!
//! All errors include contextual message space for debugging.

use core::fmt;
use std::error::Error;

/// Error type for all kernel and distribution operations.
///
/// Each variant includes a contextual message string providing specific details
/// about the error condition.
#[derive(Debug, Clone, PartialEq)]
pub enum KernelError {
    /// Invalid arguments provided to a kernel function or distribution.
    InvalidArguments(String),

    /// Buffer length mismatch between operands.
    LengthMismatch(String),

    /// Tensor shapes that cannot be broadcast together, or data that
    /// does not fill its declared shape.
    ShapeMismatch(String),

    /// A statistic that is undefined for the distribution was requested
    /// with `allow_nan_stats` disabled.
    UndefinedStatistic(String),

    /// A runtime shape or value was requested while placeholders are unfed.
    UnresolvedShape(String),

    /// Tensor index outside of the shape.
    OutOfBounds(String),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::InvalidArguments(msg) => write!(f, "Invalid arguments: {}", msg),
            KernelError::LengthMismatch(msg) => write!(f, "Length mismatch: {}", msg),
            KernelError::ShapeMismatch(msg) => write!(f, "Shape mismatch: {}", msg),
            KernelError::UndefinedStatistic(msg) => write!(f, "Undefined statistic: {}", msg),
            KernelError::UnresolvedShape(msg) => write!(f, "Unresolved shape: {}", msg),
            KernelError::OutOfBounds(msg) => write!(f, "Out of bounds: {}", msg),
        }
    }
}

impl Error for KernelError {}

/// Creates a formatted error message for length mismatches between left-hand side (LHS) and right-hand side (RHS) buffers.
///
/// # Arguments
/// * `fname` - Function name where the mismatch occurred
/// * `lhs` - Length of the left-hand side buffer
/// * `rhs` - Length of the right-hand side buffer
///
/// # Returns
/// A formatted error message string
pub fn log_length_mismatch(fname: String, lhs: usize, rhs: usize) -> String {
    return format!("{} => Length mismatch: LHS {} RHS {}", fname, lhs, rhs);
}
