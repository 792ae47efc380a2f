// Copyright 2025 ndmatrix developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The two-dimensional specialization.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use num_traits::Zero;

use crate::codec::text2d::{read_2d, render_2d, write_2d};
use crate::codec::FormatOptions;
use crate::error::{io_error, MatrixError};
use crate::matrix::Matrix;
use crate::Ix;

/// A 2D matrix: a rank-2 [`Matrix`] with row/column convenience methods
/// and the line-per-row text format.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix2<A> {
    inner: Matrix<A>,
}

impl<A> Matrix2<A> {
    /// Create a matrix with `nrow` rows and `ncol` columns, filled with
    /// zeros.
    pub fn new(nrow: Ix, ncol: Ix) -> Matrix2<A>
    where
        A: Clone + Zero,
    {
        Matrix2 { inner: Matrix::zeros(&[nrow, ncol]) }
    }

    /// Create a matrix with the given dimensions, filled with `value`.
    pub fn from_elem(nrow: Ix, ncol: Ix, value: A) -> Matrix2<A>
    where
        A: Clone,
    {
        Matrix2 { inner: Matrix::from_elem(&[nrow, ncol], value) }
    }

    /// Create a matrix from a flat buffer in row-major order.
    ///
    /// Fails with `InvalidArgument` when the buffer length is not
    /// `nrow * ncol`.
    pub fn from_shape_vec(nrow: Ix, ncol: Ix, data: Vec<A>) -> Result<Matrix2<A>, MatrixError> {
        Ok(Matrix2 { inner: Matrix::from_shape_vec(&[nrow, ncol], data)? })
    }

    /// The number of rows.
    #[inline]
    pub fn nrows(&self) -> Ix {
        self.inner.storage_dim()[1]
    }

    /// The number of columns.
    #[inline]
    pub fn ncols(&self) -> Ix {
        self.inner.storage_dim()[0]
    }

    /// The dimensions as `(rows, columns)`.
    pub fn dim(&self) -> (Ix, Ix) {
        (self.nrows(), self.ncols())
    }

    /// Get a reference to the element at `(row, col)`.
    ///
    /// Fails with `OutOfRange` when either coordinate is out of bounds.
    #[inline]
    pub fn get(&self, row: Ix, col: Ix) -> Result<&A, MatrixError> {
        self.inner.get_at(&[row, col])
    }

    /// Set the element at `(row, col)`.
    ///
    /// Fails with `OutOfRange` when either coordinate is out of bounds.
    #[inline]
    pub fn set(&mut self, row: Ix, col: Ix, value: A) -> Result<(), MatrixError> {
        self.inner.set_at(&[row, col], value)
    }

    /// Get a reference to the element at `(row, col)` without bounds
    /// checking.
    ///
    /// # Safety
    ///
    /// Both coordinates must be in bounds.
    #[inline]
    pub unsafe fn uget(&self, row: Ix, col: Ix) -> &A {
        self.inner.uget(&[row, col])
    }

    /// Get a mutable reference to the element at `(row, col)` without
    /// bounds checking.
    ///
    /// # Safety
    ///
    /// Both coordinates must be in bounds.
    #[inline]
    pub unsafe fn uget_mut(&mut self, row: Ix, col: Ix) -> &mut A {
        self.inner.uget_mut(&[row, col])
    }

    /// The values of row `index`, in column order.
    pub fn row(&self, index: Ix) -> Result<Vec<A>, MatrixError>
    where
        A: Clone,
    {
        if index >= self.nrows() {
            return Err(MatrixError::OutOfRange);
        }
        let ncol = self.ncols();
        Ok(self.inner.as_slice()[index * ncol..(index + 1) * ncol].to_vec())
    }

    /// The values of column `index`, in row order.
    pub fn column(&self, index: Ix) -> Result<Vec<A>, MatrixError>
    where
        A: Clone,
    {
        if index >= self.ncols() {
            return Err(MatrixError::OutOfRange);
        }
        let ncol = self.ncols();
        Ok(self
            .inner
            .as_slice()
            .iter()
            .skip(index)
            .step_by(ncol)
            .cloned()
            .collect())
    }

    /// Replace row `index` with `values`.
    ///
    /// Fails with `OutOfRange` on a bad index and with `InvalidArgument`
    /// when `values` does not have one element per column.
    pub fn set_row(&mut self, index: Ix, values: &[A]) -> Result<(), MatrixError>
    where
        A: Clone,
    {
        if index >= self.nrows() {
            return Err(MatrixError::OutOfRange);
        }
        let ncol = self.ncols();
        if values.len() != ncol {
            return Err(MatrixError::InvalidArgument(format!(
                "replacement row has {} values, expected {}",
                values.len(),
                ncol
            )));
        }
        self.inner.data_mut()[index * ncol..(index + 1) * ncol].clone_from_slice(values);
        Ok(())
    }

    /// Replace column `index` with `values`.
    ///
    /// Fails with `OutOfRange` on a bad index and with `InvalidArgument`
    /// when `values` does not have one element per row.
    pub fn set_column(&mut self, index: Ix, values: &[A]) -> Result<(), MatrixError>
    where
        A: Clone,
    {
        if index >= self.ncols() {
            return Err(MatrixError::OutOfRange);
        }
        let (nrow, ncol) = self.dim();
        if values.len() != nrow {
            return Err(MatrixError::InvalidArgument(format!(
                "replacement column has {} values, expected {}",
                values.len(),
                nrow
            )));
        }
        let data = self.inner.data_mut();
        for (i, value) in values.iter().enumerate() {
            data[i * ncol + index] = value.clone();
        }
        Ok(())
    }

    /// Return the transposed matrix.
    pub fn t(&self) -> Matrix2<A>
    where
        A: Clone,
    {
        let (nrow, ncol) = self.dim();
        let src = self.inner.as_slice();
        let mut data = Vec::with_capacity(src.len());
        for j in 0..ncol {
            for i in 0..nrow {
                data.push(src[i * ncol + j].clone());
            }
        }
        Matrix2 { inner: Matrix::from_parts(&[ncol, nrow], data) }
    }

    /// A view of the underlying generic container.
    #[inline]
    pub fn as_matrix(&self) -> &Matrix<A> {
        &self.inner
    }

    /// A mutable view of the underlying generic container.
    #[inline]
    pub fn as_matrix_mut(&mut self) -> &mut Matrix<A> {
        &mut self.inner
    }

    /// Unwrap into the generic container.
    pub fn into_inner(self) -> Matrix<A> {
        self.inner
    }
}

impl<A: FromStr> Matrix2<A> {
    /// Read a matrix from a text-format file.
    ///
    /// An empty file (zero bytes or a single line terminator) yields the
    /// 0x0 matrix.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Matrix2<A>, MatrixError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| io_error(path, e))?;
        let inner = read_2d(BufReader::new(file), path)?;
        Ok(Matrix2 { inner })
    }

    /// Read a matrix in the text format from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Matrix2<A>, MatrixError> {
        let inner = read_2d(reader, Path::new("<reader>"))?;
        Ok(Matrix2 { inner })
    }
}

impl<A: fmt::Display> Matrix2<A> {
    /// Write the matrix in the text format.
    pub fn write_to<W: Write>(&self, writer: &mut W, opts: &FormatOptions) -> io::Result<()> {
        write_2d(&self.inner, writer, opts)
    }

    /// Write the matrix in the text format to a file.
    pub fn to_path<P: AsRef<Path>>(&self, path: P, opts: &FormatOptions) -> Result<(), MatrixError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| io_error(path, e))?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer, opts).map_err(|e| io_error(path, e))?;
        writer.flush().map_err(|e| io_error(path, e))
    }
}

/// Renders the text format with default options.
impl<A: fmt::Display> fmt::Display for Matrix2<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_2d(&self.inner, &FormatOptions::default()))
    }
}
