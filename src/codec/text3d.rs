// Copyright 2025 ndmatrix developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The 3D text format: a strict alternation of slice headers (`,,<n>`)
//! and 2D-format slice bodies.
//!
//! Example of a 3x4x2 matrix:
//!
//! ```text
//! ,,0
//!  1  2  3  4
//!  5  6  7  8
//!  8  9 10 11
//! ,,1
//! 12 13 14 15
//! 16 17 18 19
//! 20 21 22 23
//! ```
//!
//! Slice indices count up from 0 without gaps. The first data line of the
//! file fixes the row width and the first slice fixes the row count;
//! every later slice must match both. An empty file denotes the 0x0x0
//! matrix.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::str::FromStr;

use crate::codec::{header_index, is_header, parse_row, FormatOptions, LineReader};
use crate::error::{FormatErrorKind, MatrixError};
use crate::matrix::Matrix;
use crate::Ix;

/// How a slice-delimited block of lines ended.
pub(crate) enum BlockEnd {
    /// Input was exhausted.
    Eof,
    /// An outer (`,,,<n>`) header was consumed; its index is carried so
    /// the 4D parser can continue with the next block.
    Outer(usize),
}

/// A parsed run of `,,<n>` headers and their 2D bodies.
pub(crate) struct Block<A> {
    pub(crate) data: Vec<A>,
    pub(crate) nrow: Ix,
    pub(crate) ncol: Ix,
    pub(crate) depth: Ix,
}

/// Consume slice headers and slice bodies until the input ends or, when
/// `outer_allowed` is set, until an outer header shows up.
///
/// This is the whole 3D parser when called on a full document, and the
/// per-slice sub-parser of the 4D format.
pub(crate) fn read_block<A, R>(
    rd: &mut LineReader<R>,
    outer_allowed: bool,
) -> Result<(Block<A>, BlockEnd), MatrixError>
where
    A: FromStr,
    R: BufRead,
{
    let mut data = Vec::new();
    let mut depth = 0;
    let mut width: Option<Ix> = None;
    let mut slice_rows: Option<Ix> = None;
    let mut cur_rows = 0;
    let mut end = BlockEnd::Eof;

    while let Some(line) = rd.next_line()? {
        if line.is_empty() {
            return Err(rd.format_err(FormatErrorKind::EmptyLine));
        }
        if outer_allowed && is_header(&line, 3) {
            end = BlockEnd::Outer(header_index(&line, 3, rd.path())?);
            break;
        }
        if is_header(&line, 2) {
            let index = header_index(&line, 2, rd.path())?;
            if index != depth {
                return Err(rd.format_err(FormatErrorKind::SliceIndexOutOfOrder));
            }
            // the slice that just ended must match the first one
            if depth == 1 {
                slice_rows = Some(cur_rows);
            } else if depth > 1 && slice_rows != Some(cur_rows) {
                return Err(rd.format_err(FormatErrorKind::VariableSliceDimensions));
            }
            depth += 1;
            cur_rows = 0;
            continue;
        }
        if depth == 0 {
            return Err(rd.format_err(FormatErrorKind::MissingSliceHeader));
        }
        let row = parse_row::<A>(&line, rd.path())?;
        match width {
            None => width = Some(row.len()),
            Some(w) if row.len() != w => {
                return Err(rd.format_err(FormatErrorKind::VariableRowLength))
            }
            _ => {}
        }
        data.extend(row);
        cur_rows += 1;
    }

    // end of input (or an outer header) closes the last slice
    if depth == 1 {
        slice_rows = Some(cur_rows);
    } else if depth > 1 && slice_rows != Some(cur_rows) {
        return Err(rd.format_err(FormatErrorKind::VariableSliceDimensions));
    }

    let block = Block {
        data,
        nrow: slice_rows.unwrap_or(0),
        ncol: width.unwrap_or(0),
        depth,
    };
    Ok((block, end))
}

/// Parse a 3D matrix from a line source.
pub(crate) fn read_3d<A, R>(reader: R, path: &Path) -> Result<Matrix<A>, MatrixError>
where
    A: FromStr,
    R: BufRead,
{
    let mut rd = LineReader::new(reader, path);
    match rd.next_line()? {
        None => return Ok(Matrix::from_parts(&[0, 0, 0], Vec::new())),
        Some(line) if line.is_empty() => {
            if rd.next_line()?.is_none() {
                return Ok(Matrix::from_parts(&[0, 0, 0], Vec::new()));
            }
            return Err(rd.format_err(FormatErrorKind::EmptyLine));
        }
        Some(line) => rd.put_back(line),
    }
    let (block, _) = read_block::<A, R>(&mut rd, false)?;
    Ok(Matrix::from_parts(&[block.nrow, block.ncol, block.depth], block.data))
}

/// Render a 3D matrix in the text format: a `,,<z>` header before each
/// slice, nothing at all when any dimension is zero.
pub(crate) fn render_3d<A: fmt::Display>(m: &Matrix<A>, opts: &FormatOptions) -> String {
    let dim = m.dim();
    let (nrow, ncol, depth) = (dim[0], dim[1], dim[2]);
    if nrow == 0 || ncol == 0 || depth == 0 {
        return String::new();
    }
    let mut lines = Vec::with_capacity(depth * (nrow + 1));
    for (z, slice) in m.as_slice().chunks(nrow * ncol).enumerate() {
        lines.push(format!(",,{}", z));
        for row in slice.chunks(ncol) {
            lines.push(opts.format_row(row));
        }
    }
    lines.join("\n")
}

/// Write a 3D matrix in the text format.
pub(crate) fn write_3d<A, W>(m: &Matrix<A>, writer: &mut W, opts: &FormatOptions) -> io::Result<()>
where
    A: fmt::Display,
    W: Write,
{
    writer.write_all(render_3d(m, opts).as_bytes())
}
