// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Tensors** - *Dense Row-Major Arrays for Batched Distributions*
//!
//! [`Tensor`] pairs a 64-byte aligned `Vec64` buffer with a shape. Element-wise
//! maps over one, two or three tensors broadcast their operands and return a
//! tensor of the broadcast shape.

use minarrow::{FloatArray, Vec64};

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shape::{
    TensorShape, broadcast_offsets, broadcast_shapes, contiguous_strides,
};
use crate::traits::real::Real;

/// Dense row-major tensor.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor<T> {
    data: Vec64<T>,
    shape: Vec<usize>,
}

impl<T: Real> Tensor<T> {
    /// Rank-0 tensor holding `value`.
    pub fn scalar(value: T) -> Self {
        let mut data = Vec64::with_capacity(1);
        data.push(value);
        Tensor {
            data,
            shape: Vec::new(),
        }
    }

    /// Rank-1 tensor copied from `values`.
    pub fn vector(values: &[T]) -> Self {
        Tensor {
            data: values.iter().copied().collect(),
            shape: vec![values.len()],
        }
    }

    /// Tensor of `shape` over row-major `data`.
    pub fn from_shape_vec(shape: &[usize], data: Vec<T>) -> Result<Self, KernelError> {
        let expected: usize = shape.iter().product();
        if expected != data.len() {
            return Err(KernelError::ShapeMismatch(format!(
                "shape {:?} needs {} elements, got {}",
                shape,
                expected,
                data.len()
            )));
        }
        Ok(Tensor {
            data: data.into_iter().collect(),
            shape: shape.to_vec(),
        })
    }

    pub(crate) fn from_vec64(shape: Vec<usize>, data: Vec64<T>) -> Self {
        debug_assert_eq!(shape.iter().product::<usize>(), data.len());
        Tensor { data, shape }
    }

    /// Tensor of `shape` with every element set to `value`.
    pub fn full(shape: &[usize], value: T) -> Self {
        let n: usize = shape.iter().product();
        Tensor {
            data: (0..n).map(|_| value).collect(),
            shape: shape.to_vec(),
        }
    }

    pub fn zeros(shape: &[usize]) -> Self {
        Self::full(shape, T::zero())
    }

    pub fn ones(shape: &[usize]) -> Self {
        Self::full(shape, T::one())
    }

    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Static descriptor of this tensor's shape.
    #[inline]
    pub fn static_shape(&self) -> TensorShape {
        TensorShape::Known(self.shape.clone())
    }

    #[inline]
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Element at a multi-dimensional index.
    pub fn get(&self, index: &[usize]) -> Result<T, KernelError> {
        if index.len() != self.shape.len()
            || index.iter().zip(self.shape.iter()).any(|(&i, &d)| i >= d)
        {
            return Err(KernelError::OutOfBounds(format!(
                "index {:?} for shape {:?}",
                index, self.shape
            )));
        }
        let offset: usize = index
            .iter()
            .zip(contiguous_strides(&self.shape))
            .map(|(&i, s)| i * s)
            .sum();
        Ok(self.data[offset])
    }

    /// True when every element is finite.
    pub fn all_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }

    /// Copy of `self` broadcast to `shape`.
    pub fn broadcast_to(&self, shape: &[usize]) -> Result<Tensor<T>, KernelError> {
        let out = broadcast_shapes(&self.shape, shape)?;
        if out.as_slice() != shape {
            return Err(KernelError::ShapeMismatch(format!(
                "cannot broadcast {:?} to {:?}",
                self.shape, shape
            )));
        }
        let data = broadcast_offsets(&self.shape, &out)
            .into_iter()
            .map(|o| self.data[o])
            .collect();
        Ok(Tensor { data, shape: out })
    }

    /// Applies `f` element-wise over the broadcast of `self` and `other`.
    pub fn zip_map<F>(&self, other: &Tensor<T>, f: F) -> Result<Tensor<T>, KernelError>
    where
        F: Fn(T, T) -> T,
    {
        let shape = broadcast_shapes(&self.shape, &other.shape)?;
        let oa = broadcast_offsets(&self.shape, &shape);
        let ob = broadcast_offsets(&other.shape, &shape);
        let data = oa
            .iter()
            .zip(ob.iter())
            .map(|(&i, &j)| f(self.data[i], other.data[j]))
            .collect();
        Ok(Tensor { data, shape })
    }

    /// Applies `f` element-wise over the broadcast of `a`, `b` and `c`.
    pub fn zip_map3<F>(
        a: &Tensor<T>,
        b: &Tensor<T>,
        c: &Tensor<T>,
        f: F,
    ) -> Result<Tensor<T>, KernelError>
    where
        F: Fn(T, T, T) -> T,
    {
        let (shape, oa, ob, oc) = broadcast3(a, b, c)?;
        let mut data = Vec64::with_capacity(oa.len());
        for k in 0..oa.len() {
            data.push(f(a.data[oa[k]], b.data[ob[k]], c.data[oc[k]]));
        }
        Ok(Tensor { data, shape })
    }

    /// Like [`Tensor::zip_map3`], for a body producing three outputs per element.
    pub fn zip_map3_triple<F>(
        a: &Tensor<T>,
        b: &Tensor<T>,
        c: &Tensor<T>,
        f: F,
    ) -> Result<(Tensor<T>, Tensor<T>, Tensor<T>), KernelError>
    where
        F: Fn(T, T, T) -> (T, T, T),
    {
        let (shape, oa, ob, oc) = broadcast3(a, b, c)?;
        let n = oa.len();
        let mut d0 = Vec64::with_capacity(n);
        let mut d1 = Vec64::with_capacity(n);
        let mut d2 = Vec64::with_capacity(n);
        for k in 0..n {
            let (v0, v1, v2) = f(a.data[oa[k]], b.data[ob[k]], c.data[oc[k]]);
            d0.push(v0);
            d1.push(v1);
            d2.push(v2);
        }
        Ok((
            Tensor::from_vec64(shape.clone(), d0),
            Tensor::from_vec64(shape.clone(), d1),
            Tensor::from_vec64(shape, d2),
        ))
    }
}

type Broadcast3 = (Vec<usize>, Vec<usize>, Vec<usize>, Vec<usize>);

fn broadcast3<T>(a: &Tensor<T>, b: &Tensor<T>, c: &Tensor<T>) -> Result<Broadcast3, KernelError> {
    let shape = broadcast_shapes(&broadcast_shapes(&a.shape, &b.shape)?, &c.shape)?;
    let oa = broadcast_offsets(&a.shape, &shape);
    let ob = broadcast_offsets(&b.shape, &shape);
    let oc = broadcast_offsets(&c.shape, &shape);
    Ok((shape, oa, ob, oc))
}

impl Tensor<f64> {
    /// Rank-1 tensor over the values of a `FloatArray`. Null lanes become NaN.
    pub fn from_float_array(arr: &FloatArray<f64>) -> Self {
        let data: Vec64<f64> = match arr.null_mask.as_ref() {
            None => arr.data.iter().copied().collect(),
            Some(mask) => arr
                .data
                .iter()
                .enumerate()
                .map(|(i, &v)| if mask.get(i) { v } else { f64::NAN })
                .collect(),
        };
        let n = data.len();
        Tensor {
            data,
            shape: vec![n],
        }
    }

    /// Flattened row-major values as a dense `FloatArray`.
    pub fn to_float_array(&self) -> FloatArray<f64> {
        FloatArray::from_slice(self.as_slice())
    }
}
