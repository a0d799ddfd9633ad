// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

#![allow(unused)]

use core::cmp::Ordering;
use core::fmt::Display;

use num_traits::Float;

/// Relative comparison scaled by `max(1, |e|)`, generic over `f32` and `f64`.
///
/// A NaN expectation requires NaN; an infinite one requires the same infinity.
pub fn assert_close<T: Float + Display>(a: T, e: T, tol: T) {
    if let Err(msg) = check_close(a, e, tol) {
        panic!("{msg}");
    }
}

pub fn assert_slice_close<T: Float + Display>(a: &[T], e: &[T], tol: T) {
    assert_eq!(a.len(), e.len(), "len mismatch");
    for (i, (&ai, &ei)) in a.iter().zip(e.iter()).enumerate() {
        if let Err(msg) = check_close(ai, ei, tol) {
            panic!("idx {i}: {msg}");
        }
    }
}

/// Every element finite, with the offending index reported.
pub fn assert_all_finite<T: Float + Display>(label: &str, a: &[T]) {
    if let Some((i, v)) = a.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        panic!("{label}: idx {i} is {v}");
    }
}

/// Sample median; NaNs sort last.
pub fn median<T: Float>(xs: &[T]) -> T {
    let mut v = xs.to_vec();
    v.sort_by(|a, b| match (a.is_nan(), b.is_nan()) {
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        (x, y) => x.cmp(&y),
    });
    let n = v.len();
    if n % 2 == 1 {
        v[n / 2]
    } else {
        (v[n / 2 - 1] + v[n / 2]) / (T::one() + T::one())
    }
}

fn check_close<T: Float + Display>(a: T, e: T, tol: T) -> Result<(), String> {
    if e.is_nan() {
        return if a.is_nan() {
            Ok(())
        } else {
            Err(format!("expected NaN, got {a}"))
        };
    }
    if e.is_infinite() {
        return if a == e {
            Ok(())
        } else {
            Err(format!("expected {e}, got {a}"))
        };
    }
    let scale = T::one().max(e.abs());
    if (a - e).abs() <= tol * scale {
        Ok(())
    } else {
        Err(format!("got {a}, expect {e} (tol={tol})"))
    }
}
