// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Statistical Distributions Module** - *Cauchy Distribution Computing*
//!
//! Distribution kernels providing probability density functions (PDFs), cumulative
//! distribution functions (CDFs), survival functions, quantile functions, and random
//! sampling, together with the batched tensor infrastructure they run over.
//!
//! ## Core Statistical Functions
//! - **Probability density**: PDF and log-PDF evaluation with numerical stability
//! - **Cumulative distribution**: CDF, survival and their logarithms, accurate in both tails
//! - **Quantile functions**: Inverse CDF with cotangent forms near the endpoints
//! - **Random sampling**: Inverse-CDF transform of open-interval uniform noise
//! - **Gradients**: Closed-form partial derivatives with respect to the parameters
//!
//! ## Arrow Integration and Null Handling
//! The slice kernels integrate with Apache Arrow's memory model and null semantics:
//! - **Null-aware processing**: Missing values handled through validity bitmasks
//! - **Arrow-compatible layouts**: Direct operation on Minarrow buffers
//!
//! ### Null Value Philosophy
//! Rather than assume, we choose to recognise inf and NaN as valid float values
//! (consistent with Apache Arrow semantics), leaving it to the user to subsequently
//! treat them as nulls if they wish, given that there are numerical scenarios where
//! they represent information gain.
//!
//! ## Batched Distributions
//! [`univariate::cauchy::Cauchy`] evaluates over broadcast parameter tensors
//! ([`tensor::Tensor`]) with static shape descriptors ([`shape::TensorShape`]) that
//! may be unknown until placeholders are fed.
//!
//! ## Numerical Precision and Stability
//! See `./tests` for the tolerance requirements, measured against high-precision
//! reference values. Platform specific differences in `atan`, `tan` and `ln_1p`
//! may impact the last bits of the results.

/// # **Shared Distribution Utilities** - *Common Infrastructure for Distribution Computing*
///
/// ## Modules
/// - **`constants`**: Mathematical constants and precomputed values
/// - **`sampler`**: Random number generation and sampling utilities
pub mod shared {
    pub mod constants;
    pub mod sampler;
}

/// Static shape descriptors and broadcasting rules.
pub mod shape;

/// Dense row-major tensors with broadcasting element-wise maps.
pub mod tensor;

/// # **Univariate Distributions** - *Single-Variable Probability Distributions*
///
/// - **Continuous**: cauchy
/// - **Common utilities**: Shared kernel patterns and test helpers
pub mod univariate {
    // common kernel patterns
    pub mod common;

    // distributions
    pub mod cauchy;
}
