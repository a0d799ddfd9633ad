// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Batched Cauchy Distribution**
//!
//! [`Cauchy`] holds broadcastable `loc` and `scale` parameters. Its batch shape
//! is the broadcast of the two parameter shapes and its event shape is scalar.
//!
//! Parameters may be [`Parameter::Placeholder`]s: the static batch shape is then
//! reported as far as it is known (possibly [`TensorShape::Unknown`]) and every
//! operation needing values fails with [`KernelError::UnresolvedShape`] until
//! [`Cauchy::feed`] supplies them.
//!
//! ## Failure semantics
//! - `validate_args`: `scale > 0` is checked when an operation is evaluated,
//!   never at construction.
//! - `allow_nan_stats`: the mean, variance and standard deviation do not exist;
//!   they evaluate to NaN, or fail with [`KernelError::UndefinedStatistic`].

use minarrow::Vec64;
use rand::Rng;
use tracing::{debug, trace, warn};

use crate::config::{DEFAULT_ALLOW_NAN_STATS, DEFAULT_VALIDATE_ARGS};
use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shape::TensorShape;
use crate::kernels::scientific::distributions::shared::sampler::{Sampler, open01_vec};
use crate::kernels::scientific::distributions::tensor::Tensor;
use crate::kernels::scientific::distributions::univariate::cauchy::scalar;
use crate::traits::real::Real;

/// A distribution parameter: a concrete tensor, or a placeholder fed later.
#[derive(Debug, Clone, PartialEq)]
pub enum Parameter<T> {
    Value(Tensor<T>),
    /// Value supplied later through [`Cauchy::feed`], with its static shape
    /// if one is known.
    Placeholder(TensorShape),
}

impl<T: Real> Parameter<T> {
    /// Placeholder of unknown shape.
    pub fn placeholder() -> Self {
        Parameter::Placeholder(TensorShape::Unknown)
    }

    pub fn placeholder_with_shape(shape: TensorShape) -> Self {
        Parameter::Placeholder(shape)
    }

    pub fn static_shape(&self) -> TensorShape {
        match self {
            Parameter::Value(t) => t.static_shape(),
            Parameter::Placeholder(s) => s.clone(),
        }
    }

    pub fn value(&self) -> Option<&Tensor<T>> {
        match self {
            Parameter::Value(t) => Some(t),
            Parameter::Placeholder(_) => None,
        }
    }

    #[inline]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Parameter::Placeholder(_))
    }
}

impl<T> From<Tensor<T>> for Parameter<T> {
    fn from(t: Tensor<T>) -> Self {
        Parameter::Value(t)
    }
}

/// Runtime behaviour switches of a distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CauchyOptions {
    /// Check `scale > 0` before evaluating any operation.
    pub validate_args: bool,
    /// Return NaN for undefined statistics rather than failing.
    pub allow_nan_stats: bool,
}

impl Default for CauchyOptions {
    fn default() -> Self {
        CauchyOptions {
            validate_args: DEFAULT_VALIDATE_ARGS,
            allow_nan_stats: DEFAULT_ALLOW_NAN_STATS,
        }
    }
}

impl CauchyOptions {
    pub fn validate_args(mut self, on: bool) -> Self {
        self.validate_args = on;
        self
    }

    pub fn allow_nan_stats(mut self, on: bool) -> Self {
        self.allow_nan_stats = on;
        self
    }
}

/// Shapes the parameters must have for a given sample shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamShapes<S> {
    pub loc: S,
    pub scale: S,
}

/// A function value with its element-wise partial derivatives.
///
/// All three tensors share the broadcast shape of the input and the batch.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient<T> {
    pub value: Tensor<T>,
    pub d_loc: Tensor<T>,
    pub d_scale: Tensor<T>,
}

/// The Cauchy distribution with location `loc` and scale `scale`.
#[derive(Debug, Clone, PartialEq)]
pub struct Cauchy<T> {
    loc: Parameter<T>,
    scale: Parameter<T>,
    options: CauchyOptions,
    batch_shape: TensorShape,
}

impl<T: Real> Cauchy<T> {
    /// Constructs with default options.
    ///
    /// Fails only when both parameter shapes are known and do not broadcast.
    pub fn new(
        loc: impl Into<Parameter<T>>,
        scale: impl Into<Parameter<T>>,
    ) -> Result<Self, KernelError> {
        Self::with_options(loc, scale, CauchyOptions::default())
    }

    pub fn with_options(
        loc: impl Into<Parameter<T>>,
        scale: impl Into<Parameter<T>>,
        options: CauchyOptions,
    ) -> Result<Self, KernelError> {
        let loc = loc.into();
        let scale = scale.into();
        let batch_shape = loc.static_shape().broadcast(&scale.static_shape())?;
        debug!(
            batch_shape = %batch_shape,
            validate_args = options.validate_args,
            allow_nan_stats = options.allow_nan_stats,
            "constructed Cauchy distribution"
        );
        Ok(Cauchy {
            loc,
            scale,
            options,
            batch_shape,
        })
    }

    #[inline]
    pub fn loc(&self) -> &Parameter<T> {
        &self.loc
    }

    #[inline]
    pub fn scale(&self) -> &Parameter<T> {
        &self.scale
    }

    #[inline]
    pub fn options(&self) -> CauchyOptions {
        self.options
    }

    /// Replaces placeholders with values.
    ///
    /// Feeding a slot that is not a placeholder, or a value whose shape
    /// contradicts the placeholder's static shape, fails.
    pub fn feed(
        &self,
        loc: Option<Tensor<T>>,
        scale: Option<Tensor<T>>,
    ) -> Result<Self, KernelError> {
        let loc = feed_slot("loc", &self.loc, loc)?;
        let scale = feed_slot("scale", &self.scale, scale)?;
        let fed = Self::with_options(loc, scale, self.options)?;
        debug!(batch_shape = %fed.batch_shape, "fed Cauchy placeholders");
        Ok(fed)
    }

    /// Static batch shape; [`TensorShape::Unknown`] while a parameter's
    /// shape is unknown.
    #[inline]
    pub fn batch_shape(&self) -> TensorShape {
        self.batch_shape.clone()
    }

    /// Runtime batch shape from the parameter values.
    pub fn batch_shape_tensor(&self) -> Result<Vec<usize>, KernelError> {
        let (loc, scale) = self.resolved()?;
        crate::kernels::scientific::distributions::shape::broadcast_shapes(
            loc.shape(),
            scale.shape(),
        )
    }

    #[inline]
    pub fn event_shape(&self) -> TensorShape {
        TensorShape::scalar()
    }

    #[inline]
    pub fn event_shape_tensor(&self) -> Vec<usize> {
        Vec::new()
    }

    /// Parameter shapes producing samples of `sample_shape` from a single draw.
    pub fn param_shapes(sample_shape: &[usize]) -> ParamShapes<Vec<usize>> {
        ParamShapes {
            loc: sample_shape.to_vec(),
            scale: sample_shape.to_vec(),
        }
    }

    /// Static counterpart of [`Cauchy::param_shapes`]; the shape must be fully defined.
    pub fn param_static_shapes(
        sample_shape: &TensorShape,
    ) -> Result<ParamShapes<TensorShape>, KernelError> {
        if !sample_shape.is_fully_defined() {
            return Err(KernelError::InvalidArguments(format!(
                "param_static_shapes: sample shape must be fully defined, got {}",
                sample_shape
            )));
        }
        Ok(ParamShapes {
            loc: sample_shape.clone(),
            scale: sample_shape.clone(),
        })
    }

    fn resolved(&self) -> Result<(&Tensor<T>, &Tensor<T>), KernelError> {
        match (self.loc.value(), self.scale.value()) {
            (Some(l), Some(s)) => Ok((l, s)),
            _ => Err(KernelError::UnresolvedShape(format!(
                "Cauchy parameters must be fed before evaluation (batch shape {})",
                self.batch_shape
            ))),
        }
    }

    /// Resolved parameters, with `scale > 0` checked under `validate_args`.
    fn params(&self) -> Result<(&Tensor<T>, &Tensor<T>), KernelError> {
        let (loc, scale) = self.resolved()?;
        if self.options.validate_args && !scale.as_slice().iter().all(|&s| s > T::zero()) {
            warn!("Cauchy scale failed positivity validation");
            return Err(KernelError::InvalidArguments(
                "scale: Condition x > 0 did not hold element-wise".into(),
            ));
        }
        Ok((loc, scale))
    }

    #[inline(always)]
    fn elementwise<F>(&self, x: &Tensor<T>, f: F) -> Result<Tensor<T>, KernelError>
    where
        F: Fn(T, T, T) -> T,
    {
        let (loc, scale) = self.params()?;
        Tensor::zip_map3(x, loc, scale, f)
    }

    #[inline(always)]
    fn elementwise_grad<F>(&self, x: &Tensor<T>, f: F) -> Result<Gradient<T>, KernelError>
    where
        F: Fn(T, T, T) -> (T, T, T),
    {
        let (loc, scale) = self.params()?;
        let (value, d_loc, d_scale) = Tensor::zip_map3_triple(x, loc, scale, f)?;
        Ok(Gradient {
            value,
            d_loc,
            d_scale,
        })
    }

    /// Log-density at `x`, shaped as the broadcast of `x` and the batch.
    pub fn log_prob(&self, x: &Tensor<T>) -> Result<Tensor<T>, KernelError> {
        self.elementwise(x, scalar::log_pdf)
    }

    /// Density at `x`.
    pub fn prob(&self, x: &Tensor<T>) -> Result<Tensor<T>, KernelError> {
        self.elementwise(x, scalar::pdf)
    }

    pub fn cdf(&self, x: &Tensor<T>) -> Result<Tensor<T>, KernelError> {
        self.elementwise(x, scalar::cdf)
    }

    pub fn log_cdf(&self, x: &Tensor<T>) -> Result<Tensor<T>, KernelError> {
        self.elementwise(x, scalar::log_cdf)
    }

    /// P(X > x), computed without subtracting from one.
    pub fn survival_function(&self, x: &Tensor<T>) -> Result<Tensor<T>, KernelError> {
        self.elementwise(x, scalar::sf)
    }

    pub fn log_survival_function(&self, x: &Tensor<T>) -> Result<Tensor<T>, KernelError> {
        self.elementwise(x, scalar::log_sf)
    }

    /// Inverse CDF at probabilities `p`.
    pub fn quantile(&self, p: &Tensor<T>) -> Result<Tensor<T>, KernelError> {
        self.elementwise(p, scalar::quantile)
    }

    pub fn log_prob_grad(&self, x: &Tensor<T>) -> Result<Gradient<T>, KernelError> {
        self.elementwise_grad(x, scalar::log_pdf_grad)
    }

    pub fn prob_grad(&self, x: &Tensor<T>) -> Result<Gradient<T>, KernelError> {
        self.elementwise_grad(x, scalar::pdf_grad)
    }

    pub fn cdf_grad(&self, x: &Tensor<T>) -> Result<Gradient<T>, KernelError> {
        self.elementwise_grad(x, scalar::cdf_grad)
    }

    pub fn log_cdf_grad(&self, x: &Tensor<T>) -> Result<Gradient<T>, KernelError> {
        self.elementwise_grad(x, scalar::log_cdf_grad)
    }

    pub fn survival_function_grad(&self, x: &Tensor<T>) -> Result<Gradient<T>, KernelError> {
        self.elementwise_grad(x, scalar::sf_grad)
    }

    pub fn log_survival_function_grad(&self, x: &Tensor<T>) -> Result<Gradient<T>, KernelError> {
        self.elementwise_grad(x, scalar::log_sf_grad)
    }

    /// ln(4π·scale) over the batch.
    pub fn entropy(&self) -> Result<Tensor<T>, KernelError> {
        let (loc, scale) = self.params()?;
        loc.zip_map(scale, |_, s| scalar::entropy(s))
    }

    /// `loc` broadcast over the batch.
    pub fn mode(&self) -> Result<Tensor<T>, KernelError> {
        let (loc, scale) = self.params()?;
        loc.zip_map(scale, |l, _| l)
    }

    /// `loc` broadcast over the batch; the median coincides with the mode.
    pub fn median(&self) -> Result<Tensor<T>, KernelError> {
        self.mode()
    }

    pub fn mean(&self) -> Result<Tensor<T>, KernelError> {
        self.undefined_statistic("mean")
    }

    pub fn variance(&self) -> Result<Tensor<T>, KernelError> {
        self.undefined_statistic("variance")
    }

    pub fn stddev(&self) -> Result<Tensor<T>, KernelError> {
        self.undefined_statistic("stddev")
    }

    fn undefined_statistic(&self, name: &str) -> Result<Tensor<T>, KernelError> {
        if !self.options.allow_nan_stats {
            warn!(statistic = name, "undefined statistic requested");
            return Err(KernelError::UndefinedStatistic(format!(
                "{name} is undefined for the Cauchy distribution; \
                 enable allow_nan_stats to receive NaN"
            )));
        }
        let (loc, scale) = self.params()?;
        loc.zip_map(scale, |_, _| T::nan())
    }

    /// `n` draws per batch member from the thread-local generator,
    /// shaped `[n] + batch_shape`.
    pub fn sample(&self, n: usize) -> Result<Tensor<T>, KernelError> {
        let mut sampler = Sampler::new();
        self.sample_with_rng(n, sampler.rng())
    }

    /// `n` draws per batch member from `rng`, shaped `[n] + batch_shape`.
    pub fn sample_with_rng<R: Rng + ?Sized>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> Result<Tensor<T>, KernelError> {
        self.sample_with_shape(&[n], rng)
    }

    /// Draws shaped `sample_shape + batch_shape` by inverse-CDF transform of
    /// open-interval uniform noise.
    pub fn sample_with_shape<R: Rng + ?Sized>(
        &self,
        sample_shape: &[usize],
        rng: &mut R,
    ) -> Result<Tensor<T>, KernelError> {
        let (loc, scale) = self.params()?;
        let batch = crate::kernels::scientific::distributions::shape::broadcast_shapes(
            loc.shape(),
            scale.shape(),
        )?;
        let loc_b = loc.broadcast_to(&batch)?;
        let scale_b = scale.broadcast_to(&batch)?;
        let per_batch = loc_b.len();
        let draws: usize = sample_shape.iter().product();
        trace!(?sample_shape, ?batch, draws, "sampling Cauchy");

        let mut data: Vec64<T> = open01_vec(rng, draws * per_batch);
        let (locs, scales) = (loc_b.as_slice(), scale_b.as_slice());
        for (k, u) in data.iter_mut().enumerate() {
            let j = k % per_batch;
            *u = scalar::quantile(*u, locs[j], scales[j]);
        }

        let mut shape = sample_shape.to_vec();
        shape.extend_from_slice(&batch);
        Ok(Tensor::from_vec64(shape, data))
    }
}

fn feed_slot<T: Real>(
    name: &str,
    slot: &Parameter<T>,
    value: Option<Tensor<T>>,
) -> Result<Parameter<T>, KernelError> {
    match (slot, value) {
        (slot, None) => Ok(slot.clone()),
        (Parameter::Placeholder(shape), Some(v)) => {
            if !shape.is_compatible_with(v.shape()) {
                return Err(KernelError::InvalidArguments(format!(
                    "{name}: fed shape {:?} is incompatible with placeholder shape {}",
                    v.shape(),
                    shape
                )));
            }
            Ok(Parameter::Value(v))
        }
        (Parameter::Value(_), Some(_)) => Err(KernelError::InvalidArguments(format!(
            "{name}: cannot feed a parameter that is not a placeholder"
        ))),
    }
}
