// Copyright 2025 ndmatrix developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// An error from a checked matrix operation or from reading or writing a
/// matrix file.
#[derive(Debug)]
pub enum MatrixError {
    /// An offset or coordinate tuple exceeds the declared bounds of a
    /// checked accessor.
    OutOfRange,
    /// An argument of the right type with an unusable value, such as a
    /// replacement row of the wrong length or a zero scalar divisor.
    InvalidArgument(String),
    /// The underlying stream failed, independent of content.
    Io {
        /// The file that was being read or written.
        path: PathBuf,
        source: io::Error,
    },
    /// The file could be read but its content does not follow the format.
    Format {
        /// The file that was being parsed.
        path: PathBuf,
        kind: FormatErrorKind,
    },
}

/// Error code for a content-level failure while parsing a matrix file.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FormatErrorKind {
    /// blank line anywhere other than as the sole content of the file
    EmptyLine,
    /// content where a slice header was required
    MissingSliceHeader,
    /// a header line whose index is not a plain non-negative integer
    MalformedSliceHeader,
    /// slice indices must count up from 0 without gaps
    SliceIndexOutOfOrder,
    /// a row with a different number of values than the first row
    VariableRowLength,
    /// a slice with different dimensions than the first slice
    VariableSliceDimensions,
    /// a value that cannot be parsed as the element type
    IncompatibleDataType,
    /// binary header declares a rank other than 3
    WrongBinaryRank,
    /// binary payload does not match the declared extents
    TruncatedBinaryData,
}

impl FormatErrorKind {
    fn description(self) -> &'static str {
        match self {
            FormatErrorKind::EmptyLine => "empty line where none is allowed",
            FormatErrorKind::MissingSliceHeader => "expected a slice header",
            FormatErrorKind::MalformedSliceHeader => "malformed slice header",
            FormatErrorKind::SliceIndexOutOfOrder => {
                "slice indices must count up from 0 without gaps"
            }
            FormatErrorKind::VariableRowLength => "variable number of values per row",
            FormatErrorKind::VariableSliceDimensions => "slices have variable dimensions",
            FormatErrorKind::IncompatibleDataType => {
                "a value could not be parsed as the element type"
            }
            FormatErrorKind::WrongBinaryRank => "binary header rank is not 3",
            FormatErrorKind::TruncatedBinaryData => {
                "binary payload does not match the declared extents"
            }
        }
    }
}

impl MatrixError {
    /// Return the `FormatErrorKind` if this is a format error.
    #[inline]
    pub fn format_kind(&self) -> Option<FormatErrorKind> {
        match self {
            MatrixError::Format { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Whether this is an `OutOfRange` error.
    #[inline]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, MatrixError::OutOfRange)
    }

    /// Whether this is an `InvalidArgument` error.
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, MatrixError::InvalidArgument(_))
    }
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::OutOfRange => write!(f, "offset or coordinates are out of range"),
            MatrixError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            MatrixError::Io { path, source } => {
                write!(f, "i/o error on {}: {}", path.display(), source)
            }
            MatrixError::Format { path, kind } => {
                write!(f, "format error in {}: {}", path.display(), kind.description())
            }
        }
    }
}

impl Error for MatrixError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MatrixError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[inline]
pub(crate) fn format_error(path: &Path, kind: FormatErrorKind) -> MatrixError {
    MatrixError::Format { path: path.to_path_buf(), kind }
}

#[inline]
pub(crate) fn io_error(path: &Path, source: io::Error) -> MatrixError {
    MatrixError::Io { path: path.to_path_buf(), source }
}
