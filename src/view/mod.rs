//! Row views: live handles onto one row of a compressed matrix.
//!
//! [`RowAccess::row`] and [`RowAccess::row_mut`] pick the view variant from the storage
//! order of the matrix: [`AlignedRow`] for row-major storage, [`TransposedRow`] for
//! column-major storage. Both implement [`SparseRowView`] and, when mutable,
//! [`SparseRowViewMut`].

pub mod aligned;
pub mod element;
pub mod transposed;

pub use aligned::{AlignedPosition, AlignedRow, AlignedRowMut, AlignedRowRef};
pub use element::RowElement;
pub use transposed::{
    ColumnPosition, ColumnProbe, ColumnProbeMut, TransposedRow, TransposedRowMut,
    TransposedRowRef,
};

use std::ops::{AddAssign, DerefMut, DivAssign, MulAssign, SubAssign};

use crate::algebra::ops::{expect_ok, AddOutput, MultOutput, SubOutput};
use crate::algebra::traits::{AddTrait, MultTrait, SubTrait};
use crate::core::numeric::Numeric;
use crate::core::traits::{FromEntries, SparseRowView, SparseRowViewMut, Vector};
use crate::error::RowError;
use crate::matrix::{ColumnMajor, CompressedMatrix, RowMajor};

/// Matrices that hand out row views.
pub trait RowAccess {
    type Element: Numeric;
    /// Read-only view type.
    type Row<'a>: SparseRowView<Element = Self::Element>
    where
        Self: 'a;
    /// Mutable view type.
    type RowMut<'a>: SparseRowViewMut<Element = Self::Element>
    where
        Self: 'a;

    /// Views row `i`; fails unless `i < rows`.
    fn row(&self, i: usize) -> Result<Self::Row<'_>, RowError>;
    /// Mutably views row `i`; fails unless `i < rows`.
    fn row_mut(&mut self, i: usize) -> Result<Self::RowMut<'_>, RowError>;
}

impl<T: Numeric> RowAccess for CompressedMatrix<T, RowMajor> {
    type Element = T;
    type Row<'a> = AlignedRowRef<'a, T>;
    type RowMut<'a> = AlignedRowMut<'a, T>;

    fn row(&self, i: usize) -> Result<AlignedRowRef<'_, T>, RowError> {
        AlignedRow::new(self, i)
    }

    fn row_mut(&mut self, i: usize) -> Result<AlignedRowMut<'_, T>, RowError> {
        AlignedRow::new(self, i)
    }
}

impl<T: Numeric> RowAccess for CompressedMatrix<T, ColumnMajor> {
    type Element = T;
    type Row<'a> = TransposedRowRef<'a, T>;
    type RowMut<'a> = TransposedRowMut<'a, T>;

    fn row(&self, i: usize) -> Result<TransposedRowRef<'_, T>, RowError> {
        TransposedRow::new(self, i)
    }

    fn row_mut(&mut self, i: usize) -> Result<TransposedRowMut<'_, T>, RowError> {
        TransposedRow::new(self, i)
    }
}

/// Removes every element of the viewed row.
pub fn reset<V: SparseRowViewMut>(view: &mut V) {
    view.reset();
}

/// Same as [`reset`]: a row view cannot change its size.
pub fn clear<V: SparseRowViewMut>(view: &mut V) {
    view.reset();
}

pub fn is_nan<V: SparseRowView>(view: &V) -> bool {
    view.is_nan()
}

pub fn is_default<V: SparseRowView>(view: &V) -> bool {
    view.is_default()
}

// Compound operators panic where the `try_*` methods return an error.
macro_rules! compound_ops {
    ($View:ident, $Order:ty) => {
        impl<T, M, V> AddAssign<&V> for $View<M>
        where
            T: Numeric,
            M: DerefMut<Target = CompressedMatrix<T, $Order>>,
            V: Vector<Element = T>,
            Self: AddTrait<V>,
            AddOutput<Self, V>: FromEntries<Element = T>,
        {
            fn add_assign(&mut self, rhs: &V) {
                expect_ok(self.try_add_assign(rhs));
            }
        }

        impl<T, M, V> SubAssign<&V> for $View<M>
        where
            T: Numeric,
            M: DerefMut<Target = CompressedMatrix<T, $Order>>,
            V: Vector<Element = T>,
            Self: SubTrait<V>,
            SubOutput<Self, V>: FromEntries<Element = T>,
        {
            fn sub_assign(&mut self, rhs: &V) {
                expect_ok(self.try_sub_assign(rhs));
            }
        }

        impl<T, M, V> MulAssign<&V> for $View<M>
        where
            T: Numeric,
            M: DerefMut<Target = CompressedMatrix<T, $Order>>,
            V: Vector<Element = T>,
            Self: MultTrait<V>,
            MultOutput<Self, V>: FromEntries<Element = T>,
        {
            fn mul_assign(&mut self, rhs: &V) {
                expect_ok(self.try_mul_assign(rhs));
            }
        }
    };
}

compound_ops!(AlignedRow, RowMajor);
compound_ops!(TransposedRow, ColumnMajor);

macro_rules! scalar_assign_ops {
    (@view $View:ident, $Order:ty, $s:ty) => {
        impl<M: DerefMut<Target = CompressedMatrix<$s, $Order>>> MulAssign<$s> for $View<M> {
            fn mul_assign(&mut self, scalar: $s) {
                self.scale(scalar);
            }
        }

        impl<M: DerefMut<Target = CompressedMatrix<$s, $Order>>> DivAssign<$s> for $View<M> {
            /// Panics when `scalar` is zero.
            fn div_assign(&mut self, scalar: $s) {
                expect_ok(self.try_div_assign(scalar));
            }
        }
    };
    ($($s:ty),*) => {$(
        scalar_assign_ops!(@view AlignedRow, RowMajor, $s);
        scalar_assign_ops!(@view TransposedRow, ColumnMajor, $s);
    )*};
}

scalar_assign_ops!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
