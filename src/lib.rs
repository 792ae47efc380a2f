// Copyright 2025 ndmatrix developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The `ndmatrix` crate provides [`Matrix`], a dense container of any
//! dimensionality: rank 1 is a vector, rank 2 a regular 2D matrix, rank 3
//! a stack of 2D slices, and so on. The fixed-rank wrappers [`Matrix2`],
//! [`Matrix3`] and [`Matrix4`] add row/column convenience methods and a
//! line-oriented text file format for each rank.
//!
//! # Coordinate conventions
//!
//! Callers address elements as `(row, column, ...)`: the first coordinate
//! selects the row, the second the column, and any further coordinate a
//! slice along a higher axis. Internally the first two axes are stored the
//! other way around, so that the column axis is the contiguous,
//! fastest-varying one. A 2x3 matrix holding `{0, 1, 2, 3, 4, 5}` is laid
//! out as
//!
//! ```text
//!       x (columns)
//!  ---------->
//!   0  1  2 |
//!   3  4  5 | y (rows)
//!          \|/
//! ```
//!
//! and its dimension vector is kept as `{ncol, nrow}`. The swap of the
//! first two axes happens exactly once at every public boundary and is
//! undone when dimensions are reported back; for rank 1 there is nothing
//! to swap. All of the flat-offset arithmetic lives in [`dimension`].
//!
//! # Text formats
//!
//! A 2D matrix is stored as one row per line, values separated by blank
//! characters. A 3D matrix prefixes each 2D slice with a header line
//! `,,<n>`, with `n` counting up from 0; a 4D matrix wraps complete 3D
//! documents in outer headers `,,,<n>`. An empty file (zero bytes or a
//! single line terminator) denotes the empty matrix at every rank; blank
//! lines are not permitted anywhere else.
//!
//! Checked access reports failures through [`MatrixError`]; the unchecked
//! accessors (`uget`, `uget_mut`) are `unsafe` and skip validation
//! entirely.

pub type Ix = usize;

pub use crate::codec::binary3d::BinaryElem;
pub use crate::codec::FormatOptions;
pub use crate::error::{FormatErrorKind, MatrixError};
pub use crate::impl_2d::Matrix2;
pub use crate::impl_3d::Matrix3;
pub use crate::impl_4d::Matrix4;
pub use crate::matrix::Matrix;

mod codec;
pub mod dimension;
mod error;
mod impl_2d;
mod impl_3d;
mod impl_4d;
mod impl_ops;
mod matrix;
