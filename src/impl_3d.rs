// Copyright 2025 ndmatrix developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The three-dimensional specialization.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::str::FromStr;

use num_traits::Zero;

use crate::codec::binary3d::{read_3d_binary, write_3d_binary, BinaryElem};
use crate::codec::text3d::{read_3d, render_3d, write_3d};
use crate::codec::FormatOptions;
use crate::error::{io_error, MatrixError};
use crate::matrix::Matrix;
use crate::Ix;

/// A 3D matrix: a rank-3 [`Matrix`] with the slice-header text format and
/// a raw binary layout.
///
/// The third axis counts 2D slices; the text format prefixes each slice
/// with a `,,<n>` header line.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix3<A> {
    inner: Matrix<A>,
}

impl<A> Matrix3<A> {
    /// Create a matrix of the given dimensions, filled with zeros.
    pub fn new(nrow: Ix, ncol: Ix, depth: Ix) -> Matrix3<A>
    where
        A: Clone + Zero,
    {
        Matrix3 { inner: Matrix::zeros(&[nrow, ncol, depth]) }
    }

    /// Create a matrix of the given dimensions, filled with `value`.
    pub fn from_elem(nrow: Ix, ncol: Ix, depth: Ix, value: A) -> Matrix3<A>
    where
        A: Clone,
    {
        Matrix3 { inner: Matrix::from_elem(&[nrow, ncol, depth], value) }
    }

    /// Create a matrix from a flat buffer in storage order: row by row
    /// within a slice, slice by slice.
    pub fn from_shape_vec(
        nrow: Ix,
        ncol: Ix,
        depth: Ix,
        data: Vec<A>,
    ) -> Result<Matrix3<A>, MatrixError> {
        Ok(Matrix3 { inner: Matrix::from_shape_vec(&[nrow, ncol, depth], data)? })
    }

    /// The dimensions as `(rows, columns, slices)`.
    pub fn dim(&self) -> (Ix, Ix, Ix) {
        let dim = self.inner.storage_dim();
        (dim[1], dim[0], dim[2])
    }

    /// Get a reference to the element at `(row, col, slice)`.
    ///
    /// Fails with `OutOfRange` when any coordinate is out of bounds.
    #[inline]
    pub fn get(&self, row: Ix, col: Ix, slice: Ix) -> Result<&A, MatrixError> {
        self.inner.get_at(&[row, col, slice])
    }

    /// Set the element at `(row, col, slice)`.
    ///
    /// Fails with `OutOfRange` when any coordinate is out of bounds.
    #[inline]
    pub fn set(&mut self, row: Ix, col: Ix, slice: Ix, value: A) -> Result<(), MatrixError> {
        self.inner.set_at(&[row, col, slice], value)
    }

    /// Get a reference to the element at `(row, col, slice)` without
    /// bounds checking.
    ///
    /// # Safety
    ///
    /// Every coordinate must be in bounds.
    #[inline]
    pub unsafe fn uget(&self, row: Ix, col: Ix, slice: Ix) -> &A {
        self.inner.uget(&[row, col, slice])
    }

    /// Get a mutable reference to the element at `(row, col, slice)`
    /// without bounds checking.
    ///
    /// # Safety
    ///
    /// Every coordinate must be in bounds.
    #[inline]
    pub unsafe fn uget_mut(&mut self, row: Ix, col: Ix, slice: Ix) -> &mut A {
        self.inner.uget_mut(&[row, col, slice])
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

impl<A: FromStr> Matrix3<A> {
    /// Read a matrix from a text-format file.
    ///
    /// An empty file (zero bytes or a single line terminator) yields the
    /// 0x0x0 matrix.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Matrix3<A>, MatrixError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| io_error(path, e))?;
        let inner = read_3d(BufReader::new(file), path)?;
        Ok(Matrix3 { inner })
    }

    /// Read a matrix in the text format from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Matrix3<A>, MatrixError> {
        let inner = read_3d(reader, Path::new("<reader>"))?;
        Ok(Matrix3 { inner })
    }
}

impl<A: BinaryElem> Matrix3<A> {
    /// Read a matrix from a binary-layout file.
    pub fn from_binary_path<P: AsRef<Path>>(path: P) -> Result<Matrix3<A>, MatrixError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| io_error(path, e))?;
        let inner = read_3d_binary(BufReader::new(file), path)?;
        Ok(Matrix3 { inner })
    }

    /// Read a matrix in the binary layout from any reader.
    pub fn from_binary_reader<R: Read>(reader: R) -> Result<Matrix3<A>, MatrixError> {
        let inner = read_3d_binary(reader, Path::new("<reader>"))?;
        Ok(Matrix3 { inner })
    }

    /// Write the matrix in the binary layout.
    pub fn write_binary_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write_3d_binary(&self.inner, writer)
    }

    /// Write the matrix in the binary layout to a file.
    pub fn to_binary_path<P: AsRef<Path>>(&self, path: P) -> Result<(), MatrixError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| io_error(path, e))?;
        let mut writer = BufWriter::new(file);
        self.write_binary_to(&mut writer).map_err(|e| io_error(path, e))?;
        writer.flush().map_err(|e| io_error(path, e))
    }
}

impl<A: fmt::Display> Matrix3<A> {
    /// Write the matrix in the text format.
    pub fn write_to<W: Write>(&self, writer: &mut W, opts: &FormatOptions) -> io::Result<()> {
        write_3d(&self.inner, writer, opts)
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
impl<A: fmt::Display> fmt::Display for Matrix3<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_3d(&self.inner, &FormatOptions::default()))
    }
}
