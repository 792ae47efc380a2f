use std::io::Cursor;

use ndmatrix::{FormatErrorKind, FormatOptions, Matrix4, MatrixError};
use quickcheck::quickcheck;

fn parse(text: &str) -> Result<Matrix4<i32>, MatrixError> {
    Matrix4::from_reader(Cursor::new(text.as_bytes().to_vec()))
}

#[test]
fn serializes_with_nested_headers() {
    let m = Matrix4::from_shape_vec(2, 3, 2, 2, (0..24).collect()).unwrap();
    let expected = "\
,,,0
,,0
0 1 2
3 4 5
,,1
6 7 8
9 10 11
,,,1
,,0
12 13 14
15 16 17
,,1
18 19 20
21 22 23";
    assert_eq!(format!("{}", m), expected);
}

#[test]
fn roundtrip() {
    let m = Matrix4::from_shape_vec(2, 3, 2, 2, (0..24).collect::<Vec<i32>>()).unwrap();
    let parsed = parse(&format!("{}", m)).unwrap();
    assert_eq!(parsed, m);
    assert_eq!(parsed.dim(), (2, 3, 2, 2));
    assert_eq!(*parsed.get(1, 2, 1, 1).unwrap(), 23);
}

#[test]
fn single_block() {
    let m = parse(",,,0\n,,0\n1 2\n3 4").unwrap();
    assert_eq!(m.dim(), (2, 2, 1, 1));
    assert_eq!(*m.get(1, 0, 0, 0).unwrap(), 3);
}

#[test]
fn empty_input_is_the_empty_matrix() {
    assert_eq!(parse("").unwrap().dim(), (0, 0, 0, 0));
    assert_eq!(parse("\n").unwrap().dim(), (0, 0, 0, 0));
}

#[test]
fn document_must_open_with_an_outer_header() {
    for text in ["1 2\n3 4", ",,0\n1 2"] {
        let err = parse(text).unwrap_err();
        assert_eq!(err.format_kind(), Some(FormatErrorKind::MissingSliceHeader));
    }
}

#[test]
fn outer_header_must_introduce_a_slice() {
    // a block with no inner header at all
    let err = parse(",,,0\n,,,1\n,,0\n1 2").unwrap_err();
    assert_eq!(err.format_kind(), Some(FormatErrorKind::MissingSliceHeader));
    // likewise at the end of the file
    let err = parse(",,,0\n,,0\n1 2\n,,,1").unwrap_err();
    assert_eq!(err.format_kind(), Some(FormatErrorKind::MissingSliceHeader));
}

#[test]
fn outer_indices_must_count_up_from_zero() {
    for text in [",,,1\n,,0\n1 2", ",,,0\n,,0\n1 2\n,,,2\n,,0\n3 4"] {
        let err = parse(text).unwrap_err();
        assert_eq!(err.format_kind(), Some(FormatErrorKind::SliceIndexOutOfOrder));
    }
}

#[test]
fn malformed_outer_header_is_rejected() {
    let err = parse(",,,x\n,,0\n1 2").unwrap_err();
    assert_eq!(err.format_kind(), Some(FormatErrorKind::MalformedSliceHeader));
}

#[test]
fn blocks_must_share_dimensions() {
    // second block is 1x2x1 where the first was 2x2x1
    let err = parse(",,,0\n,,0\n1 2\n3 4\n,,,1\n,,0\n5 6").unwrap_err();
    assert_eq!(err.format_kind(), Some(FormatErrorKind::VariableSliceDimensions));
    // second block has one slice where the first had two
    let err = parse(",,,0\n,,0\n1 2\n,,1\n3 4\n,,,1\n,,0\n5 6").unwrap_err();
    assert_eq!(err.format_kind(), Some(FormatErrorKind::VariableSliceDimensions));
}

#[test]
fn ragged_rows_are_rejected() {
    let err = parse(",,,0\n,,0\n1 2 3\n4 5").unwrap_err();
    assert_eq!(err.format_kind(), Some(FormatErrorKind::VariableRowLength));
    // a width change across blocks surfaces as a dimension mismatch
    let err = parse(",,,0\n,,0\n1 2 3\n,,,1\n,,0\n4 5").unwrap_err();
    assert_eq!(err.format_kind(), Some(FormatErrorKind::VariableSliceDimensions));
}

#[test]
fn blank_line_is_rejected() {
    let err = parse(",,,0\n,,0\n1 2\n\n,,,1").unwrap_err();
    assert_eq!(err.format_kind(), Some(FormatErrorKind::EmptyLine));
}

#[test]
fn zero_dimension_writes_nothing() {
    let m = Matrix4::<i32>::new(2, 3, 0, 2);
    assert_eq!(format!("{}", m), "");
}

#[test]
fn file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("m4.mat");
    let m = Matrix4::from_shape_vec(2, 2, 2, 3, (0..24).collect::<Vec<i64>>()).unwrap();
    m.to_path(&path, &FormatOptions::default()).unwrap();
    assert_eq!(Matrix4::<i64>::from_path(&path).unwrap(), m);
}

quickcheck! {
    fn roundtrip_any_positive_shape(nrow: u8, ncol: u8, depth: u8, nblock: u8) -> bool {
        let (nrow, ncol, depth, nblock) = (
            (nrow % 3 + 1) as usize,
            (ncol % 3 + 1) as usize,
            (depth % 3 + 1) as usize,
            (nblock % 3 + 1) as usize,
        );
        let data: Vec<i32> = (0..nrow * ncol * depth * nblock).map(|i| i as i32 * 2).collect();
        let m = Matrix4::from_shape_vec(nrow, ncol, depth, nblock, data).unwrap();
        let mut out = Vec::new();
        m.write_to(&mut out, &FormatOptions::default()).unwrap();
        Matrix4::<i32>::from_reader(Cursor::new(out)).unwrap() == m
    }
}
