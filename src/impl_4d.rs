// Copyright 2025 ndmatrix developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The four-dimensional specialization.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use num_traits::Zero;

use crate::codec::text4d::{read_4d, render_4d, write_4d};
use crate::codec::FormatOptions;
use crate::error::{io_error, MatrixError};
use crate::matrix::Matrix;
use crate::Ix;

/// A 4D matrix: a rank-4 [`Matrix`] with the nested slice-header text
/// format.
///
/// The third axis counts 2D slices and the fourth counts complete 3D
/// blocks; the text format marks blocks with `,,,<n>` header lines.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix4<A> {
    inner: Matrix<A>,
}

impl<A> Matrix4<A> {
    /// Create a matrix of the given dimensions, filled with zeros.
    pub fn new(nrow: Ix, ncol: Ix, depth: Ix, nblock: Ix) -> Matrix4<A>
    where
        A: Clone + Zero,
    {
        Matrix4 { inner: Matrix::zeros(&[nrow, ncol, depth, nblock]) }
    }

    /// Create a matrix of the given dimensions, filled with `value`.
    pub fn from_elem(nrow: Ix, ncol: Ix, depth: Ix, nblock: Ix, value: A) -> Matrix4<A>
    where
        A: Clone,
    {
        Matrix4 { inner: Matrix::from_elem(&[nrow, ncol, depth, nblock], value) }
    }

    /// Create a matrix from a flat buffer in storage order: row by row,
    /// slice by slice, block by block.
    pub fn from_shape_vec(
        nrow: Ix,
        ncol: Ix,
        depth: Ix,
        nblock: Ix,
        data: Vec<A>,
    ) -> Result<Matrix4<A>, MatrixError> {
        Ok(Matrix4 { inner: Matrix::from_shape_vec(&[nrow, ncol, depth, nblock], data)? })
    }

    /// The dimensions as `(rows, columns, slices, blocks)`.
    pub fn dim(&self) -> (Ix, Ix, Ix, Ix) {
        let dim = self.inner.storage_dim();
        (dim[1], dim[0], dim[2], dim[3])
    }

    /// Get a reference to the element at `(row, col, slice, block)`.
    ///
    /// Fails with `OutOfRange` when any coordinate is out of bounds.
    #[inline]
    pub fn get(&self, row: Ix, col: Ix, slice: Ix, block: Ix) -> Result<&A, MatrixError> {
        self.inner.get_at(&[row, col, slice, block])
    }

    /// Set the element at `(row, col, slice, block)`.
    ///
    /// Fails with `OutOfRange` when any coordinate is out of bounds.
    #[inline]
    pub fn set(
        &mut self,
        row: Ix,
        col: Ix,
        slice: Ix,
        block: Ix,
        value: A,
    ) -> Result<(), MatrixError> {
        self.inner.set_at(&[row, col, slice, block], value)
    }

    /// Get a reference to the element at `(row, col, slice, block)`
    /// without bounds checking.
    ///
    /// # Safety
    ///
    /// Every coordinate must be in bounds.
    #[inline]
    pub unsafe fn uget(&self, row: Ix, col: Ix, slice: Ix, block: Ix) -> &A {
        self.inner.uget(&[row, col, slice, block])
    }

    /// Get a mutable reference to the element at `(row, col, slice,
    /// block)` without bounds checking.
    ///
    /// # Safety
    ///
    /// Every coordinate must be in bounds.
    #[inline]
    pub unsafe fn uget_mut(&mut self, row: Ix, col: Ix, slice: Ix, block: Ix) -> &mut A {
        self.inner.uget_mut(&[row, col, slice, block])
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

impl<A: FromStr> Matrix4<A> {
    /// Read a matrix from a text-format file.
    ///
    /// An empty file (zero bytes or a single line terminator) yields the
    /// 0x0x0x0 matrix.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Matrix4<A>, MatrixError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| io_error(path, e))?;
        let inner = read_4d(BufReader::new(file), path)?;
        Ok(Matrix4 { inner })
    }

    /// Read a matrix in the text format from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Matrix4<A>, MatrixError> {
        let inner = read_4d(reader, Path::new("<reader>"))?;
        Ok(Matrix4 { inner })
    }
}

impl<A: fmt::Display> Matrix4<A> {
    /// Write the matrix in the text format.
    pub fn write_to<W: Write>(&self, writer: &mut W, opts: &FormatOptions) -> io::Result<()> {
        write_4d(&self.inner, writer, opts)
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
impl<A: fmt::Display> fmt::Display for Matrix4<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_4d(&self.inner, &FormatOptions::default()))
    }
}
