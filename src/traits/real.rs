// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Real Scalar Trait** - *Floating-Point Element Types for Distributions*
//!
//! Unifies `f32` and `f64` for the generic distribution code.

use core::fmt::Debug;

use num_traits::{Float, FloatConst};
use rand::Rng;
use rand::distr::{Distribution, Open01};

/// Floating-point element type usable as distribution parameters and values.
pub trait Real: Float + FloatConst + Debug + Default + Send + Sync + 'static {
    /// Converts an `f64` literal, rounding to the nearest representable value.
    fn lit(v: f64) -> Self;

    /// Draws a uniform variate on the open interval (0, 1).
    fn sample_open01<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

impl Real for f64 {
    #[inline(always)]
    fn lit(v: f64) -> Self {
        v
    }

    #[inline(always)]
    fn sample_open01<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Open01.sample(rng)
    }
}

impl Real for f32 {
    #[inline(always)]
    fn lit(v: f64) -> Self {
        v as f32
    }

    #[inline(always)]
    fn sample_open01<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Open01.sample(rng)
    }
}
