// Copyright 2025 ndmatrix developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The 2D text format: one row per line, values separated by runs of
//! blank characters, every line with the same number of values.
//!
//! A file of zero bytes or a single line terminator denotes the 0x0
//! matrix; a blank line anywhere else is a format error.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::str::FromStr;

use crate::codec::{parse_row, FormatOptions, LineReader};
use crate::error::{FormatErrorKind, MatrixError};
use crate::matrix::Matrix;
use crate::Ix;

/// Parse a 2D matrix from a line source.
///
/// `path` is only used to give errors a source to point at.
pub(crate) fn read_2d<A, R>(reader: R, path: &Path) -> Result<Matrix<A>, MatrixError>
where
    A: FromStr,
    R: BufRead,
{
    let mut rd = LineReader::new(reader, path);
    let mut data = Vec::new();
    let mut width: Option<Ix> = None;
    let mut nrow = 0;
    let mut first = true;
    while let Some(line) = rd.next_line()? {
        if line.is_empty() {
            // a single terminator as the whole file is the empty matrix
            if first && rd.next_line()?.is_none() {
                break;
            }
            return Err(rd.format_err(FormatErrorKind::EmptyLine));
        }
        first = false;
        let row = parse_row::<A>(&line, rd.path())?;
        match width {
            None => width = Some(row.len()),
            Some(w) if row.len() != w => {
                return Err(rd.format_err(FormatErrorKind::VariableRowLength))
            }
            _ => {}
        }
        data.extend(row);
        nrow += 1;
    }
    Ok(Matrix::from_parts(&[nrow, width.unwrap_or(0)], data))
}

/// Render a 2D matrix in the text format.
///
/// Emits one line per row with no terminator after the last one; a matrix
/// with a zero dimension renders as the empty string.
pub(crate) fn render_2d<A: fmt::Display>(m: &Matrix<A>, opts: &FormatOptions) -> String {
    let dim = m.dim();
    let (nrow, ncol) = (dim[0], dim[1]);
    if nrow == 0 || ncol == 0 {
        return String::new();
    }
    let mut lines = Vec::with_capacity(nrow);
    for row in m.as_slice().chunks(ncol) {
        lines.push(opts.format_row(row));
    }
    lines.join("\n")
}

/// Write a 2D matrix in the text format.
pub(crate) fn write_2d<A, W>(m: &Matrix<A>, writer: &mut W, opts: &FormatOptions) -> io::Result<()>
where
    A: fmt::Display,
    W: Write,
{
    writer.write_all(render_2d(m, opts).as_bytes())
}
