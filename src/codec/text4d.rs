// Copyright 2025 ndmatrix developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The 4D text format: outer headers (`,,,<n>`) each followed by a
//! complete 3D-format sub-document.
//!
//! Example of a 2x3x2x2 matrix:
//!
//! ```text
//! ,,,0
//! ,,0
//! 1      2      3
//! 4      5      6
//! ,,1
//! 7      8      9
//! 10     11     12
//! ,,,1
//! ,,0
//! 21     22     23
//! 24     25     26
//! ,,1
//! 27     28     29
//! 30     31     32
//! ```
//!
//! Outer indices count up from 0 without gaps; every block must have the
//! dimensions of the first. An empty file denotes the 0x0x0x0 matrix; an
//! outer header with no inner header after it is a format error.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::str::FromStr;

use crate::codec::text3d::{read_block, BlockEnd};
use crate::codec::{header_index, is_header, FormatOptions, LineReader};
use crate::error::{FormatErrorKind, MatrixError};
use crate::matrix::Matrix;
use crate::Ix;

/// Parse a 4D matrix from a line source.
pub(crate) fn read_4d<A, R>(reader: R, path: &Path) -> Result<Matrix<A>, MatrixError>
where
    A: FromStr,
    R: BufRead,
{
    let mut rd = LineReader::new(reader, path);
    let first = match rd.next_line()? {
        None => return Ok(Matrix::from_parts(&[0, 0, 0, 0], Vec::new())),
        Some(line) => line,
    };
    if first.is_empty() {
        if rd.next_line()?.is_none() {
            return Ok(Matrix::from_parts(&[0, 0, 0, 0], Vec::new()));
        }
        return Err(rd.format_err(FormatErrorKind::EmptyLine));
    }
    if !is_header(&first, 3) {
        return Err(rd.format_err(FormatErrorKind::MissingSliceHeader));
    }

    let mut next_index = header_index(&first, 3, rd.path())?;
    let mut data = Vec::new();
    let mut block_dim: Option<(Ix, Ix, Ix)> = None;
    let mut nblock = 0;
    loop {
        if next_index != nblock {
            return Err(rd.format_err(FormatErrorKind::SliceIndexOutOfOrder));
        }
        let (block, end) = read_block::<A, R>(&mut rd, true)?;
        // an outer header must introduce at least one inner slice
        if block.depth == 0 {
            return Err(rd.format_err(FormatErrorKind::MissingSliceHeader));
        }
        let dim = (block.nrow, block.ncol, block.depth);
        match block_dim {
            None => block_dim = Some(dim),
            Some(d) if d != dim => {
                return Err(rd.format_err(FormatErrorKind::VariableSliceDimensions))
            }
            _ => {}
        }
        data.extend(block.data);
        nblock += 1;
        match end {
            BlockEnd::Eof => break,
            BlockEnd::Outer(index) => next_index = index,
        }
    }

    let (nrow, ncol, depth) = block_dim.unwrap_or((0, 0, 0));
    Ok(Matrix::from_parts(&[nrow, ncol, depth, nblock], data))
}

/// Render a 4D matrix in the text format: nested outer and inner headers,
/// nothing at all when any dimension is zero.
pub(crate) fn render_4d<A: fmt::Display>(m: &Matrix<A>, opts: &FormatOptions) -> String {
    let dim = m.dim();
    let (nrow, ncol, depth, nblock) = (dim[0], dim[1], dim[2], dim[3]);
    if nrow == 0 || ncol == 0 || depth == 0 || nblock == 0 {
        return String::new();
    }
    let mut lines = Vec::with_capacity(nblock * (depth * (nrow + 1) + 1));
    for (b, block) in m.as_slice().chunks(nrow * ncol * depth).enumerate() {
        lines.push(format!(",,,{}", b));
        for (z, slice) in block.chunks(nrow * ncol).enumerate() {
            lines.push(format!(",,{}", z));
            for row in slice.chunks(ncol) {
                lines.push(opts.format_row(row));
            }
        }
    }
    lines.join("\n")
}

/// Write a 4D matrix in the text format.
pub(crate) fn write_4d<A, W>(m: &Matrix<A>, writer: &mut W, opts: &FormatOptions) -> io::Result<()>
where
    A: fmt::Display,
    W: Write,
{
    writer.write_all(render_4d(m, opts).as_bytes())
}
