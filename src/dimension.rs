// Copyright 2025 ndmatrix developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Flat-offset arithmetic shared by every matrix rank.
//!
//! All functions here operate on dimension vectors and coordinate tuples in
//! *storage convention*: axis 0 is the column axis (contiguous,
//! fastest-varying), axis 1 the row axis, and any further axis keeps its
//! meaning. [`to_storage_order`] is the single place where the conversion
//! from the user's `(row, column, ...)` convention happens; it is its own
//! inverse.

use crate::Ix;

/// Swap the first two entries of a dimension vector or coordinate tuple,
/// converting between `(row, column, ...)` and `(column, row, ...)`.
///
/// For rank 0 or 1 there is nothing to swap and the input is returned
/// unchanged. Applying the permutation twice gives back the input.
pub fn to_storage_order(coord: &[Ix]) -> Vec<Ix> {
    let mut out = coord.to_vec();
    if out.len() > 1 {
        out.swap(0, 1);
    }
    out
}

/// Build the partial-product table for a storage-convention dimension
/// vector.
///
/// Entry 0 is 1 and entry `i` is the product of the extents of axes
/// `0..i`, so that `offset_of` and `coord_of` can treat a coordinate tuple
/// as a mixed-radix number. The table must be rebuilt whenever the
/// dimension vector changes.
pub fn dim_product(dims: &[Ix]) -> Vec<Ix> {
    let mut prod = vec![0; dims.len()];
    if !dims.is_empty() {
        prod[0] = 1;
    }
    if dims.len() > 1 {
        prod[1] = dims[0];
    }
    for i in 2..dims.len() {
        prod[i] = prod[i - 1] * dims[i - 1];
    }
    prod
}

/// Number of elements a dimension vector addresses.
///
/// Any zero extent forces a size of 0, as does an empty dimension vector.
pub fn size_of(dims: &[Ix]) -> Ix {
    if dims.is_empty() {
        return 0;
    }
    dims.iter().product()
}

/// Encode a storage-convention coordinate tuple into a flat offset.
///
/// This is the unchecked primitive every checked accessor builds on: the
/// caller must have validated the coordinates with [`in_bounds`] first.
#[inline]
pub fn offset_of(coord: &[Ix], dim_prod: &[Ix]) -> Ix {
    coord.iter().zip(dim_prod).map(|(&c, &p)| c * p).sum()
}

/// Decode a flat offset back into a storage-convention coordinate tuple.
///
/// Axes are decoded from the highest one down; `dim_prod[0]` is always 1,
/// so the division can never be by zero.
pub fn coord_of(offset: Ix, dim_prod: &[Ix]) -> Vec<Ix> {
    let mut coord = vec![0; dim_prod.len()];
    let mut rest = offset;
    for i in (0..dim_prod.len()).rev() {
        coord[i] = rest / dim_prod[i];
        rest %= dim_prod[i];
    }
    coord
}

/// Whether a storage-convention coordinate tuple addresses an element.
///
/// The tuple must match the rank exactly and every component must be
/// strictly less than the corresponding extent.
#[inline]
pub fn in_bounds(coord: &[Ix], dims: &[Ix]) -> bool {
    coord.len() == dims.len() && coord.iter().zip(dims).all(|(&c, &d)| c < d)
}
