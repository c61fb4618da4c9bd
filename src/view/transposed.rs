//! Row view onto a column-major matrix.
//!
//! A row of column-major storage has at most one element per column and no bookkeeping of
//! its own. The view synthesizes the row by probing every column in turn: traversal,
//! `non_zeros` and `reset` cost `O(columns)` lookups, the capacity is the column count and
//! `reserve` does nothing.

use std::mem;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::ptr;

use log::{debug, trace};

use super::element::RowElement;
use crate::algebra::ops::expect_ok;
use crate::algebra::shape::{Layout, Shape, Shaped};
use crate::core::numeric::Numeric;
use crate::core::traits::{SparseRowView, SparseRowViewMut, Vector};
use crate::error::{check_size, RowError};
use crate::matrix::sparse::LineIndex;
use crate::matrix::{ColumnMajor, CompressedMatrix};
use crate::vector::{CompressedVector, Transposed};

/// A live view onto row `row` of a column-major [`CompressedMatrix`].
#[derive(Debug)]
pub struct TransposedRow<M> {
    matrix: M,
    row: usize,
}

/// Read-only transposed row view.
pub type TransposedRowRef<'a, T> = TransposedRow<&'a CompressedMatrix<T, ColumnMajor>>;
/// Mutable transposed row view.
pub type TransposedRowMut<'a, T> = TransposedRow<&'a mut CompressedMatrix<T, ColumnMajor>>;

/// Column of an element of a transposed row. Holds the column count at the end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColumnPosition {
    pub column: usize,
}

/// Iterator over the stored elements of a transposed row.
///
/// Two probes are equal when they walk the same row of the same matrix and stand on the
/// same column.
#[derive(Clone, Copy)]
pub struct ColumnProbe<'a, T> {
    matrix: &'a CompressedMatrix<T, ColumnMajor>,
    row: usize,
    column: usize,
}

impl<'a, T: Numeric> ColumnProbe<'a, T> {
    /// Probe standing on the first stored element at or after column `from`.
    fn seek(matrix: &'a CompressedMatrix<T, ColumnMajor>, row: usize, from: usize) -> Self {
        let column = next_stored(matrix, row, from);
        Self { matrix, row, column }
    }

    /// Column the probe stands on; the column count once exhausted.
    pub fn column(&self) -> usize {
        self.column
    }
}

impl<T> PartialEq for ColumnProbe<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.matrix, other.matrix) && self.row == other.row && self.column == other.column
    }
}

impl<'a, T: Numeric> Iterator for ColumnProbe<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let matrix = self.matrix;
        if self.column >= matrix.columns() {
            return None;
        }
        let column = self.column;
        let position = matrix.find(self.row, column)?;
        *self = Self::seek(matrix, self.row, column + 1);
        Some((column, matrix.value_at(position)))
    }
}

/// Mutable iterator over the stored elements of a transposed row.
pub struct ColumnProbeMut<'a, T> {
    index: LineIndex<'a>,
    rest: &'a mut [T],
    base: usize,
    row: usize,
    column: usize,
    columns: usize,
}

impl<'a, T: Numeric> Iterator for ColumnProbeMut<'a, T> {
    type Item = RowElement<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.column < self.columns {
            let column = self.column;
            self.column += 1;
            if let Some(position) = self.index.find(column, self.row) {
                // columns are laid out in order, so every later hit lies behind this one
                let rest = mem::take(&mut self.rest);
                let (_, from_hit) = rest.split_at_mut(position - self.base);
                let (value, tail) = from_hit.split_first_mut()?;
                self.rest = tail;
                self.base = position + 1;
                return Some(RowElement::new(value, column));
            }
        }
        None
    }
}

fn next_stored<T: Numeric>(matrix: &CompressedMatrix<T, ColumnMajor>, row: usize, from: usize) -> usize {
    let columns = matrix.columns();
    (from..columns).find(|&c| matrix.find(row, c).is_some()).unwrap_or(columns)
}

impl<T, M> TransposedRow<M>
where
    T: Numeric,
    M: Deref<Target = CompressedMatrix<T, ColumnMajor>>,
{
    /// Views row `row` of `matrix`.
    pub fn new(matrix: M, row: usize) -> Result<Self, RowError> {
        let rows = matrix.rows();
        if row >= rows {
            return Err(RowError::InvalidRowIndex { row, rows });
        }
        Ok(Self { matrix, row })
    }

    pub fn matrix(&self) -> &CompressedMatrix<T, ColumnMajor> {
        &self.matrix
    }

    /// Identity of the viewed matrix, as used by the aliasing predicates.
    pub fn address(&self) -> *const CompressedMatrix<T, ColumnMajor> {
        &*self.matrix
    }

    pub fn iter(&self) -> ColumnProbe<'_, T> {
        ColumnProbe::seek(&self.matrix, self.row, 0)
    }

    /// Probe past the last element, for comparisons.
    pub fn iter_end(&self) -> ColumnProbe<'_, T> {
        ColumnProbe { matrix: &self.matrix, row: self.row, column: self.matrix.columns() }
    }

    pub fn as_const(&self) -> TransposedRowRef<'_, T> {
        TransposedRow { matrix: &*self.matrix, row: self.row }
    }

    /// Number of stored elements from `from` to `to`; negative when `to` precedes `from`.
    pub fn distance(&self, from: ColumnPosition, to: ColumnPosition) -> isize {
        let (lo, hi) = (from.column.min(to.column), from.column.max(to.column));
        let count = (lo..hi.min(self.size()))
            .filter(|&c| self.matrix.find(self.row, c).is_some())
            .count() as isize;
        if to.column < from.column { -count } else { count }
    }

    /// The row as a compressed column vector.
    pub fn transpose(&self) -> Transposed<CompressedVector<T>> {
        Transposed::new(self.evaluate())
    }
}

impl<T, M> TransposedRow<M>
where
    T: Numeric,
    M: DerefMut<Target = CompressedMatrix<T, ColumnMajor>>,
{
    /// Stored elements as proxies that write through to the matrix.
    pub fn iter_mut(&mut self) -> ColumnProbeMut<'_, T> {
        let (row, columns) = (self.row, self.matrix.columns());
        let (index, values) = self.matrix.split_mut();
        ColumnProbeMut { index, rest: values, base: 0, row, column: 0, columns }
    }

    fn fill<V>(&mut self, rhs: &V)
    where
        V: Vector<Element = T>,
    {
        let row = self.row;
        let matrix = &mut *self.matrix;
        if V::DENSE {
            rhs.for_each_entry(|column, value| {
                if value.is_default() {
                    matrix.erase(row, column);
                } else {
                    *matrix.element_mut(row, column) = value;
                }
            });
        } else {
            let mut next = 0;
            rhs.for_each_entry(|column, value| {
                for gap in next..column {
                    matrix.erase(row, gap);
                }
                *matrix.element_mut(row, column) = value;
                next = column + 1;
            });
            for gap in next..matrix.columns() {
                matrix.erase(row, gap);
            }
        }
    }
}

impl<T, M> Shaped for TransposedRow<M>
where
    T: Numeric,
    M: Deref<Target = CompressedMatrix<T, ColumnMajor>>,
{
    const SHAPE: Shape = Shape::row_view(Layout::Transposed, T::KIND);
}

impl<T, M> Vector for TransposedRow<M>
where
    T: Numeric,
    M: Deref<Target = CompressedMatrix<T, ColumnMajor>>,
{
    type Element = T;
    type Result = CompressedVector<T>;
    const DENSE: bool = false;

    fn size(&self) -> usize {
        self.matrix.columns()
    }

    fn get(&self, index: usize) -> T {
        self.matrix.get(self.row, index)
    }

    fn non_zeros(&self) -> usize {
        self.iter().count()
    }

    fn for_each_entry<F: FnMut(usize, T)>(&self, mut f: F) {
        for (index, &value) in self.iter() {
            f(index, value);
        }
    }

    fn evaluate(&self) -> CompressedVector<T> {
        let mut out = CompressedVector::new(self.size());
        self.for_each_entry(|index, value| out.append(index, value));
        out
    }

    fn can_alias<U: ?Sized>(&self, alias: *const U) -> bool {
        alias.cast::<()>() == self.address().cast::<()>()
    }
}

impl<T, M> SparseRowView for TransposedRow<M>
where
    T: Numeric,
    M: Deref<Target = CompressedMatrix<T, ColumnMajor>>,
{
    type Position = ColumnPosition;

    fn row(&self) -> usize {
        self.row
    }

    fn capacity(&self) -> usize {
        self.matrix.columns()
    }

    fn begin(&self) -> ColumnPosition {
        ColumnPosition { column: self.iter().column() }
    }

    fn end(&self) -> ColumnPosition {
        ColumnPosition { column: self.matrix.columns() }
    }

    fn advance(&self, position: ColumnPosition) -> ColumnPosition {
        if position.column >= self.size() {
            return self.end();
        }
        ColumnPosition { column: next_stored(&self.matrix, self.row, position.column + 1) }
    }

    fn find(&self, index: usize) -> ColumnPosition {
        match self.matrix.find(self.row, index) {
            Some(_) => ColumnPosition { column: index },
            None => self.end(),
        }
    }

    fn entry(&self, position: ColumnPosition) -> Option<(usize, T)> {
        if position.column >= self.size() {
            return None;
        }
        let stored = self.matrix.find(self.row, position.column)?;
        Some((position.column, *self.matrix.value_at(stored)))
    }
}

impl<T, M> SparseRowViewMut for TransposedRow<M>
where
    T: Numeric,
    M: DerefMut<Target = CompressedMatrix<T, ColumnMajor>>,
{
    fn reset(&mut self) {
        trace!("row {}: erasing across {} columns", self.row, self.matrix.columns());
        for column in 0..self.matrix.columns() {
            self.matrix.erase(self.row, column);
        }
    }

    fn insert(&mut self, index: usize, value: T) -> Result<&mut T, RowError> {
        self.matrix.insert(self.row, index, value)
    }

    fn erase(&mut self, index: usize) {
        self.matrix.erase(self.row, index);
    }

    fn erase_at(&mut self, position: ColumnPosition) -> ColumnPosition {
        if position.column < self.size() {
            self.matrix.erase(self.row, position.column);
        }
        self.advance(position)
    }

    fn reserve(&mut self, _n: usize) {}

    /// Inserts directly; `check` has no effect on this layout.
    ///
    /// Panics when column `index` of the row is already occupied.
    fn append(&mut self, index: usize, value: T, _check: bool) {
        expect_ok(self.matrix.insert(self.row, index, value).map(|_| ()));
    }

    fn element(&mut self, index: usize) -> &mut T {
        self.matrix.element_mut(self.row, index)
    }

    fn for_each_value_mut<F: FnMut(usize, &mut T)>(&mut self, mut f: F) {
        for mut element in self.iter_mut() {
            f(element.index(), element.value_mut());
        }
    }

    fn assign<V>(&mut self, rhs: &V) -> Result<&mut Self, RowError>
    where
        V: Vector<Element = T>,
    {
        check_size(self.size(), rhs.size())?;
        if rhs.can_alias(self.address()) {
            debug!("row {}: source aliases the matrix, assigning through a temporary", self.row);
            let tmp = rhs.evaluate();
            self.fill(&tmp);
        } else {
            self.fill(rhs);
        }
        Ok(self)
    }
}

impl<T, M> Index<usize> for TransposedRow<M>
where
    T: Numeric,
    M: Deref<Target = CompressedMatrix<T, ColumnMajor>>,
{
    type Output = T;

    /// Reads without inserting; missing elements read as zero, so `non_zeros` is
    /// unchanged. Use [`element`](SparseRowViewMut::element) or `IndexMut` for the
    /// inserting access.
    fn index(&self, index: usize) -> &T {
        self.matrix.get_ref(self.row, index)
    }
}

impl<T, M> IndexMut<usize> for TransposedRow<M>
where
    T: Numeric,
    M: DerefMut<Target = CompressedMatrix<T, ColumnMajor>>,
{
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.element(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CompressedMatrix<i32, ColumnMajor> {
        CompressedMatrix::from_triplets(3, 5, &[(1, 0, 1), (0, 2, 2), (1, 2, 3), (1, 4, 5)]).unwrap()
    }

    #[test]
    fn probe_skips_empty_columns() {
        let m = sample();
        let row = TransposedRow::new(&m, 1).unwrap();
        let seen: Vec<_> = row.iter().map(|(c, &v)| (c, v)).collect();
        assert_eq!(seen, vec![(0, 1), (2, 3), (4, 5)]);
        assert_eq!(row.non_zeros(), 3);
        assert_eq!(row.capacity(), 5);
    }

    #[test]
    fn probe_equality_uses_matrix_identity() {
        let m = sample();
        let other = m.clone();
        let a = TransposedRow::new(&m, 1).unwrap();
        let b = TransposedRow::new(&other, 1).unwrap();
        assert!(a.iter() == a.iter());
        assert!(a.iter() != b.iter());
        let mut it = a.iter();
        it.next();
        it.next();
        it.next();
        assert!(it == a.iter_end());
    }

    #[test]
    fn proxies_write_through() {
        let mut m = sample();
        let mut row = TransposedRow::new(&mut m, 1).unwrap();
        for mut element in row.iter_mut() {
            element *= 10;
            if element.index() == 2 {
                element += 1;
            }
        }
        assert_eq!(m.get(1, 0), 10);
        assert_eq!(m.get(1, 2), 31);
        assert_eq!(m.get(0, 2), 2);
    }

    #[test]
    fn distance_counts_stored_columns() {
        let m = sample();
        let row = TransposedRow::new(&m, 1).unwrap();
        assert_eq!(row.distance(row.begin(), row.end()), 3);
        assert_eq!(row.distance(row.end(), row.find(2)), -2);
    }

    #[test]
    fn erase_at_moves_to_next_column() {
        let mut m = sample();
        let mut row = TransposedRow::new(&mut m, 1).unwrap();
        let next = row.erase_at(ColumnPosition { column: 0 });
        assert_eq!(next, ColumnPosition { column: 2 });
        assert_eq!(row.non_zeros(), 2);
    }
}
