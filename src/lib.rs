// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under the Mozilla Public License (MPL) 2.0.
// See LICENSE for details.

//! # **cauchy-kernels** - *Cauchy Distribution Kernels and Batched Distributions*
//!
//! Two layers over the same scalar formulas:
//! - **Kernels**: null-aware `f64` slice kernels with scalar parameters,
//!   returning Minarrow `FloatArray<f64>` buffers.
//! - **Distributions**: the batched [`Cauchy`] object over broadcastable
//!   parameter tensors, generic over `f32` and `f64`.
//!
//! [`Cauchy`]: crate::kernels::scientific::distributions::univariate::cauchy::Cauchy

pub mod kernels {
    pub mod scientific {
        #[cfg(feature = "probability_distributions")]
        pub mod distributions;
    }
}

pub mod traits {
    pub mod real;
}

pub mod config;

pub mod errors;

pub mod utils;
