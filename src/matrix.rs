// Copyright 2025 ndmatrix developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use itertools::Itertools;
use num_traits::Zero;

use crate::dimension::{coord_of, dim_product, in_bounds, offset_of, size_of, to_storage_order};
use crate::error::MatrixError;
use crate::Ix;

/// A dense matrix of any rank.
///
/// The container owns its dimension vector, its partial-product table and
/// its flat value buffer; `Clone` duplicates all three and two matrices
/// compare equal exactly when their dimension vectors and value buffers
/// are identical element for element.
///
/// Dimensions are fixed at construction; only element values can change
/// afterwards.
#[derive(Clone, Debug)]
pub struct Matrix<A> {
    /// Extents in storage convention (column axis first).
    dim: Vec<Ix>,
    /// Partial products of `dim`, rebuilt with it.
    dim_prod: Vec<Ix>,
    data: Vec<A>,
}

impl<A> Matrix<A> {
    /// Create a matrix of the given dimensions, filled with zeros.
    ///
    /// Dimensions are given in user convention, `(rows, columns, ...)`.
    /// Any zero extent yields an empty matrix, not an error.
    pub fn zeros(dim: &[Ix]) -> Matrix<A>
    where
        A: Clone + Zero,
    {
        Matrix::from_elem(dim, A::zero())
    }

    /// Create a matrix of the given dimensions, filled with `value`.
    pub fn from_elem(dim: &[Ix], value: A) -> Matrix<A>
    where
        A: Clone,
    {
        let dim = to_storage_order(dim);
        let dim_prod = dim_product(&dim);
        let data = vec![value; size_of(&dim)];
        Matrix { dim, dim_prod, data }
    }

    /// Create a matrix of the given dimensions from a flat value buffer in
    /// storage order (row by row, then slice by slice).
    ///
    /// Fails with `InvalidArgument` when the buffer length does not equal
    /// the product of the extents.
    pub fn from_shape_vec(dim: &[Ix], data: Vec<A>) -> Result<Matrix<A>, MatrixError> {
        let dim = to_storage_order(dim);
        if data.len() != size_of(&dim) {
            return Err(MatrixError::InvalidArgument(format!(
                "buffer of length {} does not fit dimensions {:?}",
                data.len(),
                to_storage_order(&dim),
            )));
        }
        let dim_prod = dim_product(&dim);
        Ok(Matrix { dim, dim_prod, data })
    }

    /// Like `from_shape_vec`, for callers that guarantee the length.
    pub(crate) fn from_parts(dim: &[Ix], data: Vec<A>) -> Matrix<A> {
        let dim = to_storage_order(dim);
        debug_assert_eq!(data.len(), size_of(&dim));
        let dim_prod = dim_product(&dim);
        Matrix { dim, dim_prod, data }
    }

    /// The dimensions in user convention, `(rows, columns, ...)`.
    pub fn dim(&self) -> Vec<Ix> {
        to_storage_order(&self.dim)
    }

    /// The rank: the number of axes.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.dim.len()
    }

    /// The number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the matrix holds no elements (some extent is zero).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The value buffer in storage order.
    #[inline]
    pub fn as_slice(&self) -> &[A] {
        &self.data
    }

    /// Extents in storage convention; the codecs read and write this order
    /// directly.
    pub(crate) fn storage_dim(&self) -> &[Ix] {
        &self.dim
    }

    pub(crate) fn data_mut(&mut self) -> &mut [A] {
        &mut self.data
    }

    /// Return the value buffer, consuming the matrix.
    pub fn into_raw_vec(self) -> Vec<A> {
        self.data
    }

    /// Get a reference to the element at `offset` in the flat buffer.
    ///
    /// Fails with `OutOfRange` when `offset >= len()`.
    #[inline]
    pub fn get(&self, offset: Ix) -> Result<&A, MatrixError> {
        self.data.get(offset).ok_or(MatrixError::OutOfRange)
    }

    /// Set the element at `offset` in the flat buffer.
    ///
    /// Fails with `OutOfRange` when `offset >= len()`.
    #[inline]
    pub fn set(&mut self, offset: Ix, value: A) -> Result<(), MatrixError> {
        match self.data.get_mut(offset) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(MatrixError::OutOfRange),
        }
    }

    /// Get a reference to the element at a user-convention coordinate
    /// tuple, `(row, column, ...)`.
    ///
    /// Fails with `OutOfRange` when the tuple does not match the rank or
    /// any component reaches its extent.
    pub fn get_at(&self, coord: &[Ix]) -> Result<&A, MatrixError> {
        let coord = to_storage_order(coord);
        if !in_bounds(&coord, &self.dim) {
            return Err(MatrixError::OutOfRange);
        }
        Ok(&self.data[offset_of(&coord, &self.dim_prod)])
    }

    /// Set the element at a user-convention coordinate tuple.
    ///
    /// Fails with `OutOfRange` like [`get_at`](Matrix::get_at).
    pub fn set_at(&mut self, coord: &[Ix], value: A) -> Result<(), MatrixError> {
        let coord = to_storage_order(coord);
        if !in_bounds(&coord, &self.dim) {
            return Err(MatrixError::OutOfRange);
        }
        let offset = offset_of(&coord, &self.dim_prod);
        self.data[offset] = value;
        Ok(())
    }

    /// Get a reference to the element at a user-convention coordinate
    /// tuple, without bounds checking.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that the tuple has exactly `ndim()`
    /// components and that every component is in bounds; anything else is
    /// undefined behavior.
    #[inline]
    pub unsafe fn uget(&self, coord: &[Ix]) -> &A {
        let coord = to_storage_order(coord);
        debug_assert!(in_bounds(&coord, &self.dim));
        self.data.get_unchecked(offset_of(&coord, &self.dim_prod))
    }

    /// Get a mutable reference to the element at a user-convention
    /// coordinate tuple, without bounds checking.
    ///
    /// # Safety
    ///
    /// Same contract as [`uget`](Matrix::uget).
    #[inline]
    pub unsafe fn uget_mut(&mut self, coord: &[Ix]) -> &mut A {
        let coord = to_storage_order(coord);
        debug_assert!(in_bounds(&coord, &self.dim));
        let offset = offset_of(&coord, &self.dim_prod);
        self.data.get_unchecked_mut(offset)
    }

    /// Decode a flat offset into a user-convention coordinate tuple.
    pub fn coord_at(&self, offset: Ix) -> Result<Vec<Ix>, MatrixError> {
        if offset >= self.data.len() {
            return Err(MatrixError::OutOfRange);
        }
        Ok(to_storage_order(&coord_of(offset, &self.dim_prod)))
    }

    /// Apply `f` to every element, producing a new matrix with the same
    /// dimensions.
    pub fn map<B, F>(&self, mut f: F) -> Matrix<B>
    where
        F: FnMut(&A) -> B,
    {
        Matrix {
            dim: self.dim.clone(),
            dim_prod: self.dim_prod.clone(),
            data: self.data.iter().map(&mut f).collect(),
        }
    }

    /// Apply `f` to every element in place.
    pub fn map_inplace<F>(&mut self, f: F)
    where
        F: FnMut(&mut A),
    {
        self.data.iter_mut().for_each(f);
    }
}

impl<A: PartialEq> PartialEq for Matrix<A> {
    fn eq(&self, other: &Matrix<A>) -> bool {
        self.dim == other.dim && self.data == other.data
    }
}

impl<A: Eq> Eq for Matrix<A> {}

/// Writes every element in storage order, separated by single spaces.
impl<A: fmt::Display> fmt::Display for Matrix<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data.iter().join(" "))
    }
}
