// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use minarrow::{Bitmask, FloatArray, Vec64};

use crate::errors::KernelError;
use crate::utils::{confirm_equal_len, confirm_mask_capacity, has_nulls};

/// Dense kernel helper
///
/// ### Null handling
/// - Null mask appearing in the dense path means a mask was supplied
/// to the kernel function, with a null_count of `0`. This can reflect
/// a scenario where one knew there was no nulls for a whole vector, or
/// the supplied window, and therefore supplied `0` to ensure that the
/// dense path was used for the kernel.
/// - Any `NaN` or `inf` values generated in the kernel function
/// are kept verbatim, without `nulling` them in the (optional)
/// mask, given that:
/// 1. These values can represent additional data signal.
/// 2. Handling them requires additional CPU cycles on the hot path.
///
/// Therefore, one can treat them further if needed.
#[inline(always)]
pub fn dense_univariate_kernel_f64_std<FScalar>(
    x: &[f64],
    has_mask: bool,
    scalar_body: FScalar,
) -> (Vec64<f64>, Option<Bitmask>)
where
    FScalar: Fn(f64) -> f64,
{
    let len = x.len();
    let mut out = Vec64::with_capacity(len);

    for &xi in x {
        out.push(scalar_body(xi));
    }

    let out_mask = if has_mask {
        Some(Bitmask::new_set_all(len, true))
    } else {
        None
    };
    (out, out_mask)
}

/// Dense kernel helper writing into a caller-provided buffer.
///
/// `output` must have the same length as `x`.
#[inline(always)]
pub fn dense_univariate_kernel_f64_std_to<FScalar>(
    x: &[f64],
    output: &mut [f64],
    scalar_body: FScalar,
) where
    FScalar: Fn(f64) -> f64,
{
    debug_assert_eq!(x.len(), output.len());
    for (o, &xi) in output.iter_mut().zip(x.iter()) {
        *o = scalar_body(xi);
    }
}

/// Null-aware masked kernel helper.
///
/// ### Null handling
/// - Input mask is required and propagates nulls accordingly.
/// - Any `NaN` or `inf` values generated in the kernel function
/// are kept verbatim, without `nulling` them in the (optional)
/// mask, given that:
/// 1. These values can represent additional data signal.
/// 2. Handling them requires additional CPU cycles on the hot path.
/// Therefore, one can treat them further if desired.
#[inline(always)]
pub fn masked_univariate_kernel_f64_std<FScalar>(
    x: &[f64],
    mask: &Bitmask,
    scalar_body: FScalar,
) -> (Vec64<f64>, Bitmask)
where
    FScalar: Fn(f64) -> f64,
{
    let len = x.len();
    let mut out = Vec64::with_capacity(len);
    let mut out_mask = mask.clone();

    for idx in 0..len {
        if !unsafe { mask.get_unchecked(idx) } {
            out.push(f64::NAN);
            unsafe { out_mask.set_unchecked(idx, false) };
        } else {
            let xi = unsafe { *x.get_unchecked(idx) };
            out.push(scalar_body(xi));
            unsafe { out_mask.set_unchecked(idx, true) };
        }
    }

    (out, out_mask)
}

/// Null-aware masked kernel helper writing into a caller-provided buffer.
///
/// Null lanes are written as `NaN`.
///
/// # Safety
/// Uses unchecked access for performance within validated ranges: `output`
/// matches `x` in length and `mask` covers `x`.
#[inline(always)]
pub fn masked_univariate_kernel_f64_std_to<FScalar>(
    x: &[f64],
    mask: &Bitmask,
    output: &mut [f64],
    scalar_body: FScalar,
) where
    FScalar: Fn(f64) -> f64,
{
    debug_assert_eq!(x.len(), output.len());
    for idx in 0..x.len() {
        let v = if !unsafe { mask.get_unchecked(idx) } {
            f64::NAN
        } else {
            scalar_body(unsafe { *x.get_unchecked(idx) })
        };
        unsafe { *output.get_unchecked_mut(idx) = v };
    }
}

/// Runs `scalar_body` over `x`, choosing the dense or null-aware path.
///
/// Shared driver for the allocating univariate kernels once their
/// parameters have been validated.
#[inline(always)]
pub fn univariate_kernel_f64_std<FScalar>(
    fname: &str,
    x: &[f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
    scalar_body: FScalar,
) -> Result<FloatArray<f64>, KernelError>
where
    FScalar: Fn(f64) -> f64,
{
    if x.is_empty() {
        return Ok(FloatArray::from_slice(&[]));
    }

    // Dense path - no nulls
    if !has_nulls(null_count, null_mask) {
        let (data, mask) = dense_univariate_kernel_f64_std(x, null_mask.is_some(), scalar_body);
        return Ok(FloatArray {
            data: data.into(),
            null_mask: mask,
        });
    }

    // Null-aware path
    let Some(mask) = null_mask else {
        return Err(KernelError::InvalidArguments(format!(
            "{fname}: null_count > 0 requires null_mask"
        )));
    };
    confirm_mask_capacity(x.len(), Some(mask))?;
    let (data, out_mask) = masked_univariate_kernel_f64_std(x, mask, scalar_body);

    Ok(FloatArray {
        data: data.into(),
        null_mask: Some(out_mask),
    })
}

/// Zero-allocation counterpart of [`univariate_kernel_f64_std`].
#[inline(always)]
pub fn univariate_kernel_f64_std_to<FScalar>(
    fname: &str,
    x: &[f64],
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
    scalar_body: FScalar,
) -> Result<(), KernelError>
where
    FScalar: Fn(f64) -> f64,
{
    confirm_equal_len(fname, output.len(), x.len())?;
    if x.is_empty() {
        return Ok(());
    }

    if !has_nulls(null_count, null_mask) {
        dense_univariate_kernel_f64_std_to(x, output, scalar_body);
        return Ok(());
    }

    let Some(mask) = null_mask else {
        return Err(KernelError::InvalidArguments(format!(
            "{fname}: null_count > 0 requires null_mask"
        )));
    };
    confirm_mask_capacity(x.len(), Some(mask))?;
    masked_univariate_kernel_f64_std_to(x, mask, output, scalar_body);
    Ok(())
}
