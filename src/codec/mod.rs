// Copyright 2025 ndmatrix developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The text and binary codecs behind `from_path`/`write_to` on the
//! fixed-rank matrices.
//!
//! Parsing always goes raw text -> codec -> (dimension vector, flat value
//! sequence) -> container; a failure at any point aborts the whole
//! construction and no partial matrix ever escapes.

use std::fmt;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use itertools::Itertools;

use crate::error::{format_error, io_error, FormatErrorKind, MatrixError};

pub mod binary3d;
pub mod text2d;
pub mod text3d;
pub mod text4d;

/// The separator character that opens a slice-header line.
pub const HEADER_SEP: char = ',';

/// Rendering options for the text writers.
///
/// The defaults produce unpadded output (`"0 1 2 3"`), which round-trips
/// integral matrices byte for byte. Set `width` and `precision` for
/// aligned fixed-point tables.
#[derive(Copy, Clone, Debug)]
pub struct FormatOptions {
    /// Separator written between the values of a row.
    pub sep: char,
    /// Minimum field width per value; 0 disables padding.
    pub width: usize,
    /// Rounding precision for fractional values; `None` leaves the
    /// element's own rendering untouched.
    pub precision: Option<usize>,
}

impl Default for FormatOptions {
    fn default() -> FormatOptions {
        FormatOptions { sep: ' ', width: 0, precision: None }
    }
}

impl FormatOptions {
    fn format_value<A: fmt::Display>(&self, value: &A) -> String {
        match (self.width, self.precision) {
            (0, None) => format!("{}", value),
            (w, None) => format!("{:<width$}", value, width = w),
            (w, Some(p)) => format!("{:<width$.prec$}", value, width = w, prec = p),
        }
    }

    pub(crate) fn format_row<A: fmt::Display>(&self, row: &[A]) -> String {
        let sep = self.sep.to_string();
        row.iter().map(|v| self.format_value(v)).join(&sep)
    }
}

/// Line source for the parsers: maps stream failures to `Io` errors
/// carrying the source path, and supports one line of pushback so a
/// parser can peek at the first line of a document.
pub(crate) struct LineReader<R> {
    lines: io::Lines<R>,
    pending: Option<String>,
    path: PathBuf,
}

impl<R: BufRead> LineReader<R> {
    pub(crate) fn new(reader: R, path: &Path) -> LineReader<R> {
        LineReader {
            lines: reader.lines(),
            pending: None,
            path: path.to_path_buf(),
        }
    }

    pub(crate) fn next_line(&mut self) -> Result<Option<String>, MatrixError> {
        if let Some(line) = self.pending.take() {
            return Ok(Some(line));
        }
        match self.lines.next() {
            None => Ok(None),
            Some(Ok(line)) => Ok(Some(line)),
            Some(Err(e)) => Err(io_error(&self.path, e)),
        }
    }

    pub(crate) fn put_back(&mut self, line: String) {
        debug_assert!(self.pending.is_none());
        self.pending = Some(line);
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn format_err(&self, kind: FormatErrorKind) -> MatrixError {
        format_error(&self.path, kind)
    }
}

/// Whether a line opens with exactly `seps` separator characters and
/// contains no further one; such a line announces a slice.
pub(crate) fn is_header(line: &str, seps: usize) -> bool {
    let lead = line.chars().take_while(|&c| c == HEADER_SEP).count();
    lead == seps && !line[seps..].contains(HEADER_SEP)
}

/// Parse the slice index of a header line: everything after the
/// separators must be a plain non-negative integer.
pub(crate) fn header_index(line: &str, seps: usize, path: &Path) -> Result<usize, MatrixError> {
    debug_assert!(is_header(line, seps));
    line[seps..]
        .parse::<usize>()
        .map_err(|_| format_error(path, FormatErrorKind::MalformedSliceHeader))
}

/// Tokenize one data line into element values.
///
/// Values are separated by arbitrary runs of blank characters; any token
/// the element type cannot parse is an `IncompatibleDataType` error.
pub(crate) fn parse_row<A: FromStr>(line: &str, path: &Path) -> Result<Vec<A>, MatrixError> {
    line.split_whitespace()
        .map(|token| {
            token
                .parse::<A>()
                .map_err(|_| format_error(path, FormatErrorKind::IncompatibleDataType))
        })
        .collect()
}
