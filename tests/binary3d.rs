use std::io::Cursor;

use ndmatrix::{FormatErrorKind, Matrix3, MatrixError};

fn parse_f64(bytes: Vec<u8>) -> Result<Matrix3<f64>, MatrixError> {
    Matrix3::from_binary_reader(Cursor::new(bytes))
}

/// Hand-assemble a binary document from header fields and raw element
/// bytes; extents are given in storage order (columns, rows, slices).
fn document(rank: u64, extents: &[u64], body: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&rank.to_le_bytes());
    for &e in extents {
        out.extend_from_slice(&e.to_le_bytes());
    }
    out.extend_from_slice(body);
    out
}

#[test]
fn roundtrip_f64() {
    let data: Vec<f64> = (0..24).map(|i| i as f64 * 0.5 - 3.0).collect();
    let m = Matrix3::from_shape_vec(2, 4, 3, data).unwrap();
    let mut out = Vec::new();
    m.write_binary_to(&mut out).unwrap();
    // rank + three extents + 24 values
    assert_eq!(out.len(), 4 * 8 + 24 * 8);
    assert_eq!(parse_f64(out).unwrap(), m);
}

#[test]
fn roundtrip_i32() {
    let m = Matrix3::from_shape_vec(3, 3, 2, (0..18).collect::<Vec<i32>>()).unwrap();
    let mut out = Vec::new();
    m.write_binary_to(&mut out).unwrap();
    assert_eq!(out.len(), 4 * 8 + 18 * 4);
    let parsed: Matrix3<i32> = Matrix3::from_binary_reader(Cursor::new(out)).unwrap();
    assert_eq!(parsed, m);
}

#[test]
fn header_layout() {
    // 1x2x1, storage extents (columns=2, rows=1, slices=1)
    let m = Matrix3::from_shape_vec(1, 2, 1, vec![5.0f64, 6.0]).unwrap();
    let mut out = Vec::new();
    m.write_binary_to(&mut out).unwrap();
    assert_eq!(&out[..8], &3u64.to_le_bytes());
    assert_eq!(&out[8..16], &2u64.to_le_bytes());
    assert_eq!(&out[16..24], &1u64.to_le_bytes());
    assert_eq!(&out[24..32], &1u64.to_le_bytes());
    assert_eq!(&out[32..40], &5.0f64.to_le_bytes());
    assert_eq!(&out[40..48], &6.0f64.to_le_bytes());
}

#[test]
fn empty_matrix_roundtrips() {
    let m = Matrix3::<f64>::new(0, 4, 3);
    let mut out = Vec::new();
    m.write_binary_to(&mut out).unwrap();
    assert_eq!(out.len(), 4 * 8);
    assert_eq!(parse_f64(out).unwrap().dim(), (0, 4, 3));
}

#[test]
fn wrong_rank_is_rejected() {
    for rank in [0u64, 2, 4] {
        let err = parse_f64(document(rank, &[1, 1, 1], &1.0f64.to_le_bytes())).unwrap_err();
        assert_eq!(err.format_kind(), Some(FormatErrorKind::WrongBinaryRank));
    }
}

#[test]
fn truncated_documents_are_rejected() {
    // too short for even the rank field
    let err = parse_f64(vec![3, 0, 0]).unwrap_err();
    assert_eq!(err.format_kind(), Some(FormatErrorKind::TruncatedBinaryData));
    // rank present but extents cut off
    let mut bytes = 3u64.to_le_bytes().to_vec();
    bytes.extend_from_slice(&2u64.to_le_bytes());
    let err = parse_f64(bytes).unwrap_err();
    assert_eq!(err.format_kind(), Some(FormatErrorKind::TruncatedBinaryData));
    // body shorter than the extents promise
    let err = parse_f64(document(3, &[2, 1, 1], &1.0f64.to_le_bytes())).unwrap_err();
    assert_eq!(err.format_kind(), Some(FormatErrorKind::TruncatedBinaryData));
}

#[test]
fn overflowing_extents_are_rejected() {
    // extent product exceeds the address space
    let err = parse_f64(document(3, &[1 << 32, 1 << 32, 1], &[])).unwrap_err();
    assert_eq!(err.format_kind(), Some(FormatErrorKind::TruncatedBinaryData));
    let err = parse_f64(document(3, &[u64::MAX, 2, 1], &[])).unwrap_err();
    assert_eq!(err.format_kind(), Some(FormatErrorKind::TruncatedBinaryData));
    // element count fits but the byte count does not
    let err = parse_f64(document(3, &[1 << 61, 1, 1], &[])).unwrap_err();
    assert_eq!(err.format_kind(), Some(FormatErrorKind::TruncatedBinaryData));
}

#[test]
fn trailing_bytes_are_rejected() {
    let mut bytes = document(3, &[1, 1, 1], &1.0f64.to_le_bytes());
    bytes.push(0);
    let err = parse_f64(bytes).unwrap_err();
    assert_eq!(err.format_kind(), Some(FormatErrorKind::TruncatedBinaryData));
}

#[test]
fn file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("m3.bin");
    let m = Matrix3::from_shape_vec(2, 3, 2, (0..12).map(f64::from).collect()).unwrap();
    m.to_binary_path(&path).unwrap();
    assert_eq!(Matrix3::<f64>::from_binary_path(&path).unwrap(), m);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Matrix3::<f64>::from_binary_path(dir.path().join("absent.bin")).unwrap_err();
    assert!(matches!(err, MatrixError::Io { .. }));
}
