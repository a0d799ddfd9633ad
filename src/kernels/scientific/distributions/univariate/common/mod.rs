// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Common Distribution Utilities** - *Shared Kernel Patterns and Test Helpers*
//!
//! Kernel drivers shared by the univariate distribution implementations, and the
//! helpers their unit tests use to inspect results.
//!
//! ## Helper Functions
//! - **Array extraction**: Unwrapping of dense arrays without null masks
//! - **Scalar testing**: Single-value operation testing utilities
//! - **Mask creation**: Null mask generation for testing scenarios
//! - **Tolerance checking**: Numerical comparison with configurable precision

/// Scalar implementations of common distribution utilities.
pub mod std;

use minarrow::{Bitmask, Buffer, FloatArray};

// Common test helpers

/// Test Helper: unwrap `FloatArray`, assert *no* null mask, return data.
pub fn dense_data(arr: FloatArray<f64>) -> Buffer<f64> {
    assert!(arr.null_mask.is_none(), "unexpected mask on dense path");
    arr.data
}

/// Build a 1-lane slice (`&[T]`) on the fly, call `kernel`,
/// and return the single f64 result for *scalar* comparison.
pub fn scalar_call<F>(kernel: F, x: f64) -> f64
where
    F: Fn(&[f64]) -> FloatArray<f64>,
{
    dense_data(kernel(&[x])).iter().copied().next().unwrap_or(f64::NAN)
}

/// Create a mask of given length with exactly the lane `idx` null.
pub fn single_null_mask(len: usize, idx: usize) -> Bitmask {
    let mut m = Bitmask::new_set_all(len, true);
    unsafe { m.set_unchecked(idx, false) };
    m
}

/// Assert absolute difference ≤ `tol`. NaN matches NaN.
pub fn assert_close(a: f64, b: f64, tol: f64) {
    if b.is_nan() {
        assert!(a.is_nan(), "assert_close failed: expected NaN, got {}", a);
        return;
    }
    assert!(
        (a - b).abs() < tol,
        "assert_close failed: {} vs {} (tol={})",
        a,
        b,
        tol
    );
}

/// Assert relative difference ≤ `tol`, scaled by `max(1, |b|)`.
pub fn assert_rel_close(a: f64, b: f64, tol: f64) {
    let scale = 1.0_f64.max(b.abs());
    assert!(
        (a - b).abs() <= tol * scale,
        "assert_rel_close failed: {} vs {} (tol={})",
        a,
        b,
        tol
    );
}

/// Generate the three most-common tests (empty-input, mask propagation,
/// bulk-vs-scalar) for a `fn kernel(&[f64], Option<&Bitmask>, Option<usize>) -> FloatArray<f64>`.
///
/// Usage:
/// ```ignore
/// common_tests!(cauchy_pdf_common, |x, m, n| cauchy_pdf(x, 0.0, 1.0, m, n).unwrap());
/// ```
#[macro_export]
macro_rules! common_tests {
    // $name    – a unique test-group prefix
    // $call:expr – *closure* that gets (&[f64], mask, null_count) and returns FloatArray<f64>
    ($name:ident, $call:expr) => {
        mod $name {
            use super::*;
            use $crate::kernels::scientific::distributions::univariate::common::{
                assert_close, dense_data, scalar_call, single_null_mask,
            };

            #[test]
            fn empty_input() {
                let arr = ($call)(&[], None, None);
                assert!(arr.data.is_empty());
                assert!(arr.null_mask.is_none());
            }

            #[test]
            fn bulk_vs_scalar_consistency() {
                let xs = minarrow::vec64![-3.0, -1.0, 0.0, 1.0, 2.0];
                let bulk = dense_data(($call)(&xs, None, None));
                for (i, &x) in xs.iter().enumerate() {
                    let scalar = scalar_call(|s| ($call)(s, None, None), x);
                    assert_close(bulk[i], scalar, 1e-14);
                }
            }

            #[test]
            fn mask_propagation() {
                let xs = minarrow::vec64![0.1, 0.2, 0.3];
                let mask = single_null_mask(3, 1); // middle lane null
                let arr = ($call)(&xs, Some(&mask), Some(1));
                // lane 1 -> NaN + null
                let out_mask = arr.null_mask.as_ref().unwrap();
                assert!(!out_mask.get(1));
                assert!(out_mask.get(0) && out_mask.get(2));
                assert!(arr.data[1].is_nan());
                assert!(!arr.data[0].is_nan());
            }
        }
    };
}
