use ndmatrix::dimension::{
    coord_of, dim_product, in_bounds, offset_of, size_of, to_storage_order,
};
use ndmatrix::Ix;
use quickcheck::quickcheck;

#[test]
fn partial_product_table() {
    // storage convention: (columns, rows, slices, ...)
    assert_eq!(dim_product(&[4, 2]), vec![1, 4]);
    assert_eq!(dim_product(&[4, 2, 3]), vec![1, 4, 8]);
    assert_eq!(dim_product(&[2, 3, 4, 5]), vec![1, 2, 6, 24]);
    assert_eq!(dim_product(&[9]), vec![1]);
}

#[test]
fn size_conventions() {
    assert_eq!(size_of(&[]), 0);
    assert_eq!(size_of(&[7]), 7);
    assert_eq!(size_of(&[4, 2, 3]), 24);
    // any zero extent forces an empty buffer
    assert_eq!(size_of(&[4, 0, 3]), 0);
    assert_eq!(size_of(&[0, 0]), 0);
}

#[test]
fn offset_coord_inverse_exhaustive() {
    for dims in [vec![6], vec![4, 2], vec![4, 2, 3], vec![2, 3, 4, 5]] {
        let prod = dim_product(&dims);
        for offset in 0..size_of(&dims) {
            let coord = coord_of(offset, &prod);
            assert!(in_bounds(&coord, &dims));
            assert_eq!(offset_of(&coord, &prod), offset);
        }
    }
}

#[test]
fn coord_of_decodes_highest_axis_first() {
    // 4 columns, 2 rows, 3 slices; offset = x + 4 y + 8 z
    let prod = dim_product(&[4, 2, 3]);
    assert_eq!(coord_of(0, &prod), vec![0, 0, 0]);
    assert_eq!(coord_of(5, &prod), vec![1, 1, 0]);
    assert_eq!(coord_of(8, &prod), vec![0, 0, 1]);
    assert_eq!(coord_of(23, &prod), vec![3, 1, 2]);
}

#[test]
fn bounds_require_exact_rank() {
    let dims = [4, 2, 3];
    assert!(in_bounds(&[3, 1, 2], &dims));
    assert!(!in_bounds(&[4, 1, 2], &dims));
    assert!(!in_bounds(&[0, 2, 0], &dims));
    // shorter and longer tuples are both rejected
    assert!(!in_bounds(&[1, 1], &dims));
    assert!(!in_bounds(&[1, 1, 1, 0], &dims));
    assert!(!in_bounds(&[], &dims));
}

#[test]
fn storage_order_swap() {
    assert_eq!(to_storage_order(&[2, 4]), vec![4, 2]);
    assert_eq!(to_storage_order(&[2, 4, 3, 5]), vec![4, 2, 3, 5]);
    // rank 1 and rank 0 are untouched
    assert_eq!(to_storage_order(&[8]), vec![8]);
    assert_eq!(to_storage_order(&[]), Vec::<Ix>::new());
}

quickcheck! {
    fn offset_roundtrips(dims: Vec<u8>, offset: usize) -> bool {
        // keep the shapes small but non-degenerate
        let dims: Vec<Ix> = dims.iter().take(5).map(|&d| (d % 7 + 1) as Ix).collect();
        if dims.is_empty() {
            return true;
        }
        let prod = dim_product(&dims);
        let offset = offset % size_of(&dims);
        let coord = coord_of(offset, &prod);
        in_bounds(&coord, &dims) && offset_of(&coord, &prod) == offset
    }
}
