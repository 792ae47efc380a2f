// Copyright 2025 ndmatrix developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Elementwise scalar arithmetic for the generic container.

use std::ops::{Add, Div, Mul, Sub};

use num_traits::Zero;

use crate::error::MatrixError;
use crate::matrix::Matrix;

macro_rules! impl_scalar_op {
    ($trt:ident, $mth:ident, $doc:expr) => {
        #[doc = $doc]
        impl<A> $trt<A> for Matrix<A>
        where
            A: Copy + $trt<Output = A>,
        {
            type Output = Matrix<A>;
            fn $mth(mut self, rhs: A) -> Matrix<A> {
                self.map_inplace(|x| *x = (*x).$mth(rhs));
                self
            }
        }
    };
}

impl_scalar_op!(Add, add, "Add a scalar to every element.");
impl_scalar_op!(Sub, sub, "Subtract a scalar from every element.");
impl_scalar_op!(Mul, mul, "Multiply every element by a scalar.");

impl<A> Matrix<A>
where
    A: Copy + Div<Output = A> + Zero,
{
    /// Divide every element by a scalar, producing a new matrix.
    ///
    /// Fails with `InvalidArgument` when the divisor is zero; the receiver
    /// is left untouched in that case.
    pub fn try_div(&self, rhs: A) -> Result<Matrix<A>, MatrixError> {
        if rhs.is_zero() {
            return Err(MatrixError::InvalidArgument("division by zero".to_string()));
        }
        Ok(self.map(|x| *x / rhs))
    }
}
