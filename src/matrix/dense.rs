//! Dense interop with Faer.
//!
//! Conversions between [`CompressedMatrix`] and `faer::Mat<T>`, and the operand shape of a
//! dense Faer matrix in the result-type algebra.

use faer::Mat;
use log::debug;

use super::sparse::{CompressedMatrix, StorageOrder};
use crate::algebra::shape::{Shape, Shaped};
use crate::core::numeric::Numeric;

impl<T: Numeric> Shaped for Mat<T> {
    const SHAPE: Shape = Shape::matrix(false, T::KIND);
}

impl<T: Numeric, O: StorageOrder> Shaped for CompressedMatrix<T, O> {
    const SHAPE: Shape = Shape::matrix(true, T::KIND);
}

impl<T: Numeric, O: StorageOrder> CompressedMatrix<T, O> {
    /// Compresses a dense matrix, dropping zero entries.
    pub fn from_dense(dense: &Mat<T>) -> Self {
        let (rows, columns) = (dense.nrows(), dense.ncols());
        let (majors, minors) = O::extents(rows, columns);
        let mut matrix = Self::new(rows, columns);
        for i in 0..majors {
            let at = |k: usize| {
                let (row, column) = O::split(i, k);
                dense[(row, column)]
            };
            let count = (0..minors).filter(|&k| !at(k).is_default()).count();
            matrix.reserve(i, count);
            for k in 0..minors {
                let (row, column) = O::split(i, k);
                matrix.append(row, column, at(k), true);
            }
        }
        debug!("compressed {rows}x{columns} dense matrix, {} non-zeros", matrix.non_zeros_total());
        matrix
    }

    /// Expands into a dense Faer matrix.
    pub fn to_dense(&self) -> Mat<T> {
        Mat::from_fn(self.rows(), self.columns(), |i, j| self.get(i, j))
    }
}
