// Copyright 2025 ndmatrix developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The binary 3D layout: one rank field (which must be 3), three extent
//! fields, then the flat value sequence in storage order. All fields are
//! 8-byte little-endian; the extents are stored column axis first, i.e.
//! exactly as the container keeps them, so a load is a straight copy.

use std::io::{self, Read, Write};
use std::path::Path;

use crate::error::{format_error, io_error, FormatErrorKind, MatrixError};
use crate::matrix::Matrix;
use crate::Ix;

/// Size in bytes of the rank and extent fields.
const FIELD_LEN: usize = 8;

/// An element type with a fixed-width little-endian byte encoding.
pub trait BinaryElem: Sized {
    /// Encoded width in bytes.
    const WIDTH: usize;
    /// Append the little-endian encoding of `self` to `out`.
    fn write_le(&self, out: &mut Vec<u8>);
    /// Decode from exactly `WIDTH` bytes.
    fn read_le(bytes: &[u8]) -> Self;
}

macro_rules! impl_binary_elem {
    ($($t:ty)*) => {
        $(
            impl BinaryElem for $t {
                const WIDTH: usize = std::mem::size_of::<$t>();

                fn write_le(&self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_le_bytes());
                }

                fn read_le(bytes: &[u8]) -> Self {
                    <$t>::from_le_bytes(bytes.try_into().unwrap())
                }
            }
        )*
    };
}

impl_binary_elem!(i16 i32 i64 u16 u32 u64 f32 f64);

/// Parse a 3D matrix from its binary layout.
pub(crate) fn read_3d_binary<A, R>(mut reader: R, path: &Path) -> Result<Matrix<A>, MatrixError>
where
    A: BinaryElem,
    R: Read,
{
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .map_err(|e| io_error(path, e))?;

    let header_len = 4 * FIELD_LEN;
    if buf.len() < FIELD_LEN {
        return Err(format_error(path, FormatErrorKind::TruncatedBinaryData));
    }
    let rank = u64::from_le_bytes(buf[..FIELD_LEN].try_into().unwrap());
    if rank != 3 {
        return Err(format_error(path, FormatErrorKind::WrongBinaryRank));
    }
    if buf.len() < header_len {
        return Err(format_error(path, FormatErrorKind::TruncatedBinaryData));
    }
    let mut extent = [0 as Ix; 3];
    for (i, ext) in extent.iter_mut().enumerate() {
        let at = (i + 1) * FIELD_LEN;
        *ext = u64::from_le_bytes(buf[at..at + FIELD_LEN].try_into().unwrap()) as Ix;
    }

    let body = &buf[header_len..];
    // the extents come from the file; their product must not overflow
    let len = extent
        .iter()
        .try_fold(1 as Ix, |acc, &e| acc.checked_mul(e))
        .ok_or_else(|| format_error(path, FormatErrorKind::TruncatedBinaryData))?;
    let body_len = len
        .checked_mul(A::WIDTH)
        .ok_or_else(|| format_error(path, FormatErrorKind::TruncatedBinaryData))?;
    if body.len() != body_len {
        return Err(format_error(path, FormatErrorKind::TruncatedBinaryData));
    }
    let data = body.chunks_exact(A::WIDTH).map(A::read_le).collect();
    // extents arrive in storage order: (columns, rows, slices)
    Ok(Matrix::from_parts(&[extent[1], extent[0], extent[2]], data))
}

/// Write a 3D matrix in its binary layout.
pub(crate) fn write_3d_binary<A, W>(m: &Matrix<A>, writer: &mut W) -> io::Result<()>
where
    A: BinaryElem,
    W: Write,
{
    let dim = m.storage_dim();
    debug_assert_eq!(dim.len(), 3);
    let mut buf = Vec::with_capacity(4 * FIELD_LEN + m.len() * A::WIDTH);
    buf.extend_from_slice(&3u64.to_le_bytes());
    for &d in dim {
        buf.extend_from_slice(&(d as u64).to_le_bytes());
    }
    for value in m.as_slice() {
        value.write_le(&mut buf);
    }
    writer.write_all(&buf)
}
