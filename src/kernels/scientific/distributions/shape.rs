// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Shape Descriptors** - *Static Shapes and Broadcasting*
//!
//! [`TensorShape`] describes a shape that may not be known yet, such as
//! the shape of a placeholder parameter before it is fed. Broadcasting follows
//! the NumPy rules: shapes are aligned on their trailing dimensions, a dimension
//! of 1 stretches to match, and any other disagreement is an error.

use core::fmt;

use crate::errors::KernelError;

/// Static shape of a tensor, possibly undetermined.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TensorShape {
    /// Rank and dimensions are not known.
    Unknown,
    /// Fully defined dimensions. An empty vector is a scalar.
    Known(Vec<usize>),
}

impl TensorShape {
    /// The rank-0 shape.
    #[inline]
    pub fn scalar() -> Self {
        TensorShape::Known(Vec::new())
    }

    #[inline]
    pub fn known(dims: &[usize]) -> Self {
        TensorShape::Known(dims.to_vec())
    }

    #[inline]
    pub fn is_fully_defined(&self) -> bool {
        matches!(self, TensorShape::Known(_))
    }

    /// Dimensions, if known.
    #[inline]
    pub fn dims(&self) -> Option<&[usize]> {
        match self {
            TensorShape::Known(d) => Some(d),
            TensorShape::Unknown => None,
        }
    }

    #[inline]
    pub fn rank(&self) -> Option<usize> {
        self.dims().map(|d| d.len())
    }

    /// Number of elements, if known.
    #[inline]
    pub fn num_elements(&self) -> Option<usize> {
        self.dims().map(|d| d.iter().product())
    }

    /// Broadcast of two static shapes. Unknown on either side gives Unknown.
    pub fn broadcast(&self, other: &TensorShape) -> Result<TensorShape, KernelError> {
        match (self, other) {
            (TensorShape::Known(a), TensorShape::Known(b)) => {
                Ok(TensorShape::Known(broadcast_shapes(a, b)?))
            }
            _ => Ok(TensorShape::Unknown),
        }
    }

    /// True when a concrete shape could be described by `self`.
    #[inline]
    pub fn is_compatible_with(&self, dims: &[usize]) -> bool {
        match self {
            TensorShape::Unknown => true,
            TensorShape::Known(d) => d.as_slice() == dims,
        }
    }
}

impl From<&[usize]> for TensorShape {
    fn from(dims: &[usize]) -> Self {
        TensorShape::Known(dims.to_vec())
    }
}

impl From<Vec<usize>> for TensorShape {
    fn from(dims: Vec<usize>) -> Self {
        TensorShape::Known(dims)
    }
}

impl fmt::Display for TensorShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TensorShape::Unknown => write!(f, "<unknown>"),
            TensorShape::Known(d) => {
                write!(f, "(")?;
                for (i, n) in d.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", n)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// Broadcast shape of `a` and `b` under NumPy rules.
pub fn broadcast_shapes(a: &[usize], b: &[usize]) -> Result<Vec<usize>, KernelError> {
    let rank = a.len().max(b.len());
    let mut out = vec![0usize; rank];
    for i in 0..rank {
        // i counts from the trailing dimension
        let da = if i < a.len() { a[a.len() - 1 - i] } else { 1 };
        let db = if i < b.len() { b[b.len() - 1 - i] } else { 1 };
        out[rank - 1 - i] = if da == db || db == 1 {
            da
        } else if da == 1 {
            db
        } else {
            return Err(KernelError::ShapeMismatch(format!(
                "cannot broadcast {:?} with {:?}",
                a, b
            )));
        };
    }
    Ok(out)
}

/// Row-major strides of `shape`.
#[inline]
pub fn contiguous_strides(shape: &[usize]) -> Vec<usize> {
    let mut strides = vec![0usize; shape.len()];
    let mut acc = 1usize;
    for (s, &d) in strides.iter_mut().zip(shape.iter()).rev() {
        *s = acc;
        acc *= d;
    }
    strides
}

/// For every element of `out_shape` in row-major order, the offset of the
/// element of an `in_shape` tensor that broadcasts onto it.
///
/// `in_shape` must broadcast to `out_shape`; callers get that from
/// [`broadcast_shapes`].
pub fn broadcast_offsets(in_shape: &[usize], out_shape: &[usize]) -> Vec<usize> {
    debug_assert!(in_shape.len() <= out_shape.len());
    let total: usize = out_shape.iter().product();
    let lead = out_shape.len() - in_shape.len();

    // stride 0 on stretched and missing dims
    let in_strides = contiguous_strides(in_shape);
    let mut strides = vec![0usize; out_shape.len()];
    for (k, (&d, &s)) in in_shape.iter().zip(in_strides.iter()).enumerate() {
        if d != 1 {
            strides[lead + k] = s;
        }
    }

    let mut offsets = Vec::with_capacity(total);
    if total == 0 {
        return offsets;
    }
    let mut index = vec![0usize; out_shape.len()];
    let mut offset = 0usize;
    for _ in 0..total {
        offsets.push(offset);
        // odometer increment, last axis fastest
        for axis in (0..out_shape.len()).rev() {
            index[axis] += 1;
            offset += strides[axis];
            if index[axis] < out_shape[axis] {
                break;
            }
            offset -= strides[axis] * index[axis];
            index[axis] = 0;
        }
    }
    offsets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broadcast_vector_with_scalar() {
        assert_eq!(broadcast_shapes(&[5], &[]).unwrap(), vec![5]);
        assert_eq!(broadcast_shapes(&[], &[2]).unwrap(), vec![2]);
    }

    #[test]
    fn broadcast_column_with_row() {
        assert_eq!(broadcast_shapes(&[6, 1], &[6, 2]).unwrap(), vec![6, 2]);
        assert_eq!(broadcast_shapes(&[3], &[1, 3]).unwrap(), vec![1, 3]);
        assert_eq!(broadcast_shapes(&[4, 1, 3], &[2, 1]).unwrap(), vec![4, 2, 3]);
    }

    #[test]
    fn broadcast_incompatible() {
        let err = broadcast_shapes(&[3], &[4]).unwrap_err();
        assert!(matches!(err, KernelError::ShapeMismatch(_)));
    }

    #[test]
    fn unknown_propagates() {
        let k = TensorShape::known(&[5]);
        assert_eq!(
            k.broadcast(&TensorShape::Unknown).unwrap(),
            TensorShape::Unknown
        );
        assert!(TensorShape::Unknown.is_compatible_with(&[10, 5]));
        assert!(!k.is_compatible_with(&[10, 5]));
        assert_eq!(TensorShape::Unknown.rank(), None);
        assert_eq!(TensorShape::scalar().rank(), Some(0));
        assert_eq!(TensorShape::scalar().num_elements(), Some(1));
    }

    #[test]
    fn display() {
        assert_eq!(TensorShape::Unknown.to_string(), "<unknown>");
        assert_eq!(TensorShape::known(&[6, 2]).to_string(), "(6, 2)");
        assert_eq!(TensorShape::scalar().to_string(), "()");
    }

    #[test]
    fn strides_row_major() {
        assert_eq!(contiguous_strides(&[2, 3, 4]), vec![12, 4, 1]);
        assert!(contiguous_strides(&[]).is_empty());
    }

    #[test]
    fn offsets_stretch_column() {
        // [[a], [b]] onto (2, 3)
        assert_eq!(broadcast_offsets(&[2, 1], &[2, 3]), vec![0, 0, 0, 1, 1, 1]);
        // [a, b, c] onto (2, 3)
        assert_eq!(broadcast_offsets(&[3], &[2, 3]), vec![0, 1, 2, 0, 1, 2]);
        // scalar onto (2,)
        assert_eq!(broadcast_offsets(&[], &[2]), vec![0, 0]);
        // identity
        assert_eq!(broadcast_offsets(&[2, 2], &[2, 2]), vec![0, 1, 2, 3]);
        // empty output
        assert!(broadcast_offsets(&[0], &[0]).is_empty());
        // scalar onto scalar
        assert_eq!(broadcast_offsets(&[], &[]), vec![0]);
    }
}
