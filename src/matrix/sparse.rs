// CompressedMatrix: compressed sparse storage in row-major (CSR) or column-major (CSC) order

use std::fmt;
use std::iter::{Copied, Zip};
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};
use std::slice;

use log::trace;

use crate::core::numeric::Numeric;
use crate::error::RowError;
use crate::utils::capacity::extend_capacity;

/// Storage order tag of a [`CompressedMatrix`].
pub trait StorageOrder: Copy + fmt::Debug + Default + 'static {
    /// `true` when rows are the major (contiguous) dimension.
    const ROW_MAJOR: bool;

    /// Maps `(row, column)` to `(major, minor)` coordinates.
    fn split(row: usize, column: usize) -> (usize, usize) {
        if Self::ROW_MAJOR { (row, column) } else { (column, row) }
    }

    /// Extents `(majors, minors)` of a `rows x columns` matrix.
    fn extents(rows: usize, columns: usize) -> (usize, usize) {
        Self::split(rows, columns)
    }
}

/// Rows are stored contiguously.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowMajor;

/// Columns are stored contiguously.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColumnMajor;

impl StorageOrder for RowMajor {
    const ROW_MAJOR: bool = true;
}

impl StorageOrder for ColumnMajor {
    const ROW_MAJOR: bool = false;
}

/// Iterator over the stored entries of one major line.
pub type LineIter<'a, T> = Zip<Copied<slice::Iter<'a, usize>>, slice::Iter<'a, T>>;
/// Mutable iterator over the stored entries of one major line.
pub type LineIterMut<'a, T> = Zip<Copied<slice::Iter<'a, usize>>, slice::IterMut<'a, T>>;

/// Index structure of a compressed matrix, borrowed separately from its values.
#[derive(Clone, Copy, Debug)]
pub(crate) struct LineIndex<'a> {
    begin: &'a [usize],
    end: &'a [usize],
    indices: &'a [usize],
}

impl LineIndex<'_> {
    /// Absolute position of `minor` within `line`, if stored.
    pub(crate) fn find(&self, line: usize, minor: usize) -> Option<usize> {
        let (lo, hi) = (self.begin[line], self.end[line]);
        self.indices[lo..hi].binary_search(&minor).ok().map(|k| lo + k)
    }

    /// First absolute position in `line` whose index is not below `minor`.
    fn lower_bound(&self, line: usize, minor: usize) -> usize {
        let (lo, hi) = (self.begin[line], self.end[line]);
        lo + self.indices[lo..hi].partition_point(|&k| k < minor)
    }
}

/// A sparse matrix in compressed storage.
///
/// Each major line (a row for [`RowMajor`], a column for [`ColumnMajor`]) owns the slice
/// `begin[i]..begin[i + 1]` of the shared index/value buffers; the first
/// `end[i] - begin[i]` slots are occupied, sorted by minor index, and the rest is slack.
/// Per-line functions (`capacity`, `non_zeros`, `reserve`, `reset`, `line`) take a
/// major index.
#[derive(Clone)]
pub struct CompressedMatrix<T, O: StorageOrder = RowMajor> {
    rows: usize,
    columns: usize,
    begin: Vec<usize>,
    end: Vec<usize>,
    indices: Vec<usize>,
    values: Vec<T>,
    zero: T,
    order: PhantomData<O>,
}

impl<T: Numeric, O: StorageOrder> CompressedMatrix<T, O> {
    /// An empty `rows x columns` matrix without any capacity.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self::with_capacity(rows, columns, 0)
    }

    /// An empty matrix with room for `per_line` elements in every major line.
    pub fn with_capacity(rows: usize, columns: usize, per_line: usize) -> Self {
        let (majors, minors) = O::extents(rows, columns);
        let per_line = per_line.min(minors);
        let begin: Vec<usize> = (0..=majors).map(|i| i * per_line).collect();
        let end = begin[..majors].to_vec();
        Self {
            rows,
            columns,
            begin,
            end,
            indices: vec![0; majors * per_line],
            values: vec![T::zero(); majors * per_line],
            zero: T::zero(),
            order: PhantomData,
        }
    }

    /// Builds a matrix from `(row, column, value)` triplets. Later duplicates overwrite
    /// earlier ones.
    pub fn from_triplets(
        rows: usize,
        columns: usize,
        triplets: &[(usize, usize, T)],
    ) -> Result<Self, RowError> {
        let mut matrix = Self::new(rows, columns);
        for &(row, column, value) in triplets {
            if row >= rows || column >= columns {
                return Err(RowError::InvalidIndex { row, column, rows, columns });
            }
            *matrix.element_mut(row, column) = value;
        }
        Ok(matrix)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of major lines.
    fn majors(&self) -> usize {
        self.end.len()
    }

    /// Length of a major line.
    fn minors(&self) -> usize {
        O::extents(self.rows, self.columns).1
    }

    /// Capacity of major line `i`.
    pub fn capacity(&self, i: usize) -> usize {
        self.begin[i + 1] - self.begin[i]
    }

    /// Number of stored elements in major line `i`.
    pub fn non_zeros(&self, i: usize) -> usize {
        self.end[i] - self.begin[i]
    }

    /// Total number of stored elements.
    pub fn non_zeros_total(&self) -> usize {
        (0..self.majors()).map(|i| self.non_zeros(i)).sum()
    }

    /// Grows the capacity of major line `i` to at least `n`, keeping its elements.
    pub fn reserve(&mut self, i: usize, n: usize) {
        let capacity = self.capacity(i);
        if n <= capacity {
            return;
        }
        let extra = n - capacity;
        let at = self.begin[i + 1];
        trace!("line {i}: capacity {capacity} -> {n}");
        self.indices.splice(at..at, std::iter::repeat_n(0, extra));
        self.values.splice(at..at, std::iter::repeat_n(self.zero, extra));
        for b in &mut self.begin[i + 1..] {
            *b += extra;
        }
        for e in &mut self.end[i + 1..] {
            *e += extra;
        }
    }

    /// Removes every element of major line `i`; capacity is kept.
    pub fn reset(&mut self, i: usize) {
        self.end[i] = self.begin[i];
    }

    /// Removes every element of the matrix.
    pub fn clear(&mut self) {
        let majors = self.majors();
        self.end.copy_from_slice(&self.begin[..majors]);
    }

    /// Absolute storage offset of the first element of major line `i`.
    pub(crate) fn line_begin(&self, i: usize) -> usize {
        self.begin[i]
    }

    pub(crate) fn index(&self) -> LineIndex<'_> {
        LineIndex { begin: &self.begin, end: &self.end, indices: &self.indices }
    }

    /// Index structure plus the mutable value buffer.
    pub(crate) fn split_mut(&mut self) -> (LineIndex<'_>, &mut [T]) {
        let index = LineIndex { begin: &self.begin, end: &self.end, indices: &self.indices };
        (index, &mut self.values)
    }

    /// Absolute storage position of element `(row, column)`, if stored.
    pub fn find(&self, row: usize, column: usize) -> Option<usize> {
        self.check_bounds(row, column);
        let (major, minor) = O::split(row, column);
        self.index().find(major, minor)
    }

    /// Value at an absolute storage position.
    pub(crate) fn value_at(&self, position: usize) -> &T {
        &self.values[position]
    }

    /// Value of element `(row, column)`; zero when not stored.
    pub fn get(&self, row: usize, column: usize) -> T {
        *self.get_ref(row, column)
    }

    /// Reference to element `(row, column)`, or to a zero when not stored.
    pub fn get_ref(&self, row: usize, column: usize) -> &T {
        match self.find(row, column) {
            Some(position) => &self.values[position],
            None => &self.zero,
        }
    }

    /// Inserts a new element; fails if `(row, column)` is already stored.
    pub fn insert(&mut self, row: usize, column: usize, value: T) -> Result<&mut T, RowError> {
        self.check_bounds(row, column);
        let (major, minor) = O::split(row, column);
        let position = self.index().lower_bound(major, minor);
        if position < self.end[major] && self.indices[position] == minor {
            return Err(RowError::DuplicateEntry { row, column });
        }
        Ok(self.insert_at(major, position, minor, value))
    }

    /// Mutable access to element `(row, column)`, inserting a zero when not stored.
    pub fn element_mut(&mut self, row: usize, column: usize) -> &mut T {
        self.check_bounds(row, column);
        let (major, minor) = O::split(row, column);
        let position = self.index().lower_bound(major, minor);
        if position < self.end[major] && self.indices[position] == minor {
            return &mut self.values[position];
        }
        let zero = self.zero;
        self.insert_at(major, position, minor, zero)
    }

    fn insert_at(&mut self, major: usize, position: usize, minor: usize, value: T) -> &mut T {
        if self.non_zeros(major) == self.capacity(major) {
            let grown = extend_capacity(self.capacity(major), self.minors());
            self.reserve(major, grown);
        }
        let end = self.end[major];
        self.indices.copy_within(position..end, position + 1);
        self.values.copy_within(position..end, position + 1);
        self.indices[position] = minor;
        self.values[position] = value;
        self.end[major] += 1;
        &mut self.values[position]
    }

    /// Removes element `(row, column)`, if stored.
    pub fn erase(&mut self, row: usize, column: usize) {
        let (major, _) = O::split(row, column);
        if let Some(position) = self.find(row, column) {
            self.erase_at(major, position);
        }
    }

    /// Removes the element at absolute `position` of major line `i`. Returns the position
    /// now holding the following element (equal to the line end if there is none).
    pub fn erase_at(&mut self, i: usize, position: usize) -> usize {
        let end = self.end[i];
        if position >= end {
            return end;
        }
        self.indices.copy_within(position + 1..end, position);
        self.values.copy_within(position + 1..end, position);
        self.end[i] -= 1;
        position
    }

    /// Appends an element behind the last stored element of its major line.
    ///
    /// The minor index must exceed every stored index of the line and the line must have
    /// spare capacity; both are checked in debug builds only. With `check` set, a zero
    /// `value` is skipped.
    pub fn append(&mut self, row: usize, column: usize, value: T, check: bool) {
        let (major, minor) = O::split(row, column);
        let end = self.end[major];
        debug_assert!(end < self.begin[major + 1], "append beyond the line capacity");
        debug_assert!(
            end == self.begin[major] || self.indices[end - 1] < minor,
            "append index is not strictly increasing"
        );
        if check && value.is_default() {
            return;
        }
        self.indices[end] = minor;
        self.values[end] = value;
        self.end[major] += 1;
    }

    /// Stored entries of major line `i` as `(minor index, value)` pairs.
    pub fn line(&self, i: usize) -> LineIter<'_, T> {
        let (lo, hi) = (self.begin[i], self.end[i]);
        self.indices[lo..hi].iter().copied().zip(self.values[lo..hi].iter())
    }

    /// Mutable stored entries of major line `i`.
    pub fn line_mut(&mut self, i: usize) -> LineIterMut<'_, T> {
        let (lo, hi) = (self.begin[i], self.end[i]);
        self.indices[lo..hi].iter().copied().zip(self.values[lo..hi].iter_mut())
    }

    /// All stored elements as `(row, column, value)`, in storage order.
    pub fn triplets(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        (0..self.majors()).flat_map(move |i| {
            self.line(i).map(move |(k, &value)| {
                let (row, column) = O::split(i, k);
                (row, column, value)
            })
        })
    }

    fn check_bounds(&self, row: usize, column: usize) {
        assert!(
            row < self.rows && column < self.columns,
            "invalid matrix access index ({row}, {column}) for a {}x{} matrix",
            self.rows,
            self.columns
        );
    }
}

impl<T: Numeric, O: StorageOrder> Index<(usize, usize)> for CompressedMatrix<T, O> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &T {
        self.get_ref(row, column)
    }
}

impl<T: Numeric, O: StorageOrder> IndexMut<(usize, usize)> for CompressedMatrix<T, O> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        self.element_mut(row, column)
    }
}

impl<T: Numeric, O: StorageOrder> fmt::Debug for CompressedMatrix<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompressedMatrix")
            .field("rows", &self.rows)
            .field("columns", &self.columns)
            .field("order", &O::default())
            .field("entries", &self.triplets().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_lines_sorted() {
        let mut m = CompressedMatrix::<f64, RowMajor>::new(2, 5);
        m.insert(0, 3, 3.0).unwrap();
        m.insert(0, 1, 1.0).unwrap();
        m.insert(1, 4, 4.0).unwrap();
        m.insert(0, 2, 2.0).unwrap();
        let row0: Vec<_> = m.line(0).map(|(k, &v)| (k, v)).collect();
        assert_eq!(row0, vec![(1, 1.0), (2, 2.0), (3, 3.0)]);
        assert_eq!(m.get(1, 4), 4.0);
        assert_eq!(m.non_zeros_total(), 4);
    }

    #[test]
    fn duplicate_insert_fails() {
        let mut m = CompressedMatrix::<i32, ColumnMajor>::new(3, 3);
        m.insert(2, 1, 7).unwrap();
        assert_eq!(
            m.insert(2, 1, 8).unwrap_err(),
            RowError::DuplicateEntry { row: 2, column: 1 }
        );
        assert_eq!(m.get(2, 1), 7);
    }

    #[test]
    fn reserve_shifts_following_lines() {
        let mut m = CompressedMatrix::<f64, RowMajor>::with_capacity(3, 4, 1);
        m.append(0, 0, 1.0, false);
        m.append(1, 2, 2.0, false);
        m.append(2, 3, 3.0, false);
        m.reserve(0, 4);
        assert_eq!(m.capacity(0), 4);
        assert_eq!(m.capacity(1), 1);
        assert_eq!(m.get(0, 0), 1.0);
        assert_eq!(m.get(1, 2), 2.0);
        assert_eq!(m.get(2, 3), 3.0);
    }

    #[test]
    fn erase_and_reset() {
        let mut m = CompressedMatrix::<f64, ColumnMajor>::from_triplets(
            3,
            2,
            &[(0, 0, 1.0), (1, 0, 2.0), (2, 0, 3.0), (1, 1, 4.0)],
        )
        .unwrap();
        m.erase(1, 0);
        assert_eq!(m.non_zeros(0), 2);
        assert_eq!(m.get(1, 0), 0.0);
        m.reset(0);
        assert_eq!(m.non_zeros(0), 0);
        assert_eq!(m.get(1, 1), 4.0);
    }

    #[test]
    fn append_skips_zero_when_checked() {
        let mut m = CompressedMatrix::<f64, RowMajor>::with_capacity(1, 4, 4);
        m.append(0, 0, 0.0, true);
        m.append(0, 1, 5.0, true);
        m.append(0, 2, 0.0, false);
        assert_eq!(m.non_zeros(0), 2);
    }

    #[test]
    fn triplets_out_of_range() {
        let err = CompressedMatrix::<f64>::from_triplets(2, 2, &[(2, 0, 1.0)]).unwrap_err();
        assert_eq!(err, RowError::InvalidIndex { row: 2, column: 0, rows: 2, columns: 2 });
    }

    #[test]
    fn index_operators() {
        let mut m = CompressedMatrix::<f64>::new(2, 2);
        assert_eq!(m[(1, 1)], 0.0);
        assert_eq!(m.non_zeros(1), 0);
        m[(1, 1)] = 2.5;
        assert_eq!(m[(1, 1)], 2.5);
        assert_eq!(m.non_zeros(1), 1);
    }
}
