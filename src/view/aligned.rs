//! Row view onto a row-major matrix.
//!
//! The elements of a row are contiguous in row-major storage, so the view delegates
//! iteration, capacity and bulk resets to the matrix's own per-row bookkeeping. Iteration
//! is `O(non-zeros)`.

use std::ops::{Deref, DerefMut, Index, IndexMut};

use log::debug;

use crate::algebra::shape::{Layout, Shape, Shaped};
use crate::core::numeric::Numeric;
use crate::core::traits::{SparseRowView, SparseRowViewMut, Vector};
use crate::error::{check_size, RowError};
use crate::matrix::sparse::{LineIter, LineIterMut};
use crate::matrix::{CompressedMatrix, RowMajor};
use crate::utils::capacity::extend_capacity;
use crate::vector::{CompressedVector, Transposed};

/// A live view onto row `row` of a row-major [`CompressedMatrix`].
///
/// `M` is `&CompressedMatrix` for a read-only view and `&mut CompressedMatrix` for a
/// mutable one.
#[derive(Debug)]
pub struct AlignedRow<M> {
    matrix: M,
    row: usize,
}

/// Read-only aligned row view.
pub type AlignedRowRef<'a, T> = AlignedRow<&'a CompressedMatrix<T, RowMajor>>;
/// Mutable aligned row view.
pub type AlignedRowMut<'a, T> = AlignedRow<&'a mut CompressedMatrix<T, RowMajor>>;

/// Offset of an element within the stored elements of an aligned row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlignedPosition(pub usize);

impl<T, M> AlignedRow<M>
where
    T: Numeric,
    M: Deref<Target = CompressedMatrix<T, RowMajor>>,
{
    /// Views row `row` of `matrix`.
    pub fn new(matrix: M, row: usize) -> Result<Self, RowError> {
        let rows = matrix.rows();
        if row >= rows {
            return Err(RowError::InvalidRowIndex { row, rows });
        }
        Ok(Self { matrix, row })
    }

    /// The viewed matrix.
    pub fn matrix(&self) -> &CompressedMatrix<T, RowMajor> {
        &self.matrix
    }

    /// Identity of the viewed matrix, as used by the aliasing predicates.
    pub fn address(&self) -> *const CompressedMatrix<T, RowMajor> {
        &*self.matrix
    }

    /// Stored `(index, value)` pairs in ascending index order.
    pub fn iter(&self) -> LineIter<'_, T> {
        self.matrix.line(self.row)
    }

    /// A read-only view onto the same row.
    pub fn as_const(&self) -> AlignedRowRef<'_, T> {
        AlignedRow { matrix: &*self.matrix, row: self.row }
    }

    /// Capacity the row grows to when it is full.
    pub fn extend_capacity(&self) -> usize {
        extend_capacity(self.capacity(), self.size())
    }

    /// Number of elements from `from` to `to`.
    pub fn distance(&self, from: AlignedPosition, to: AlignedPosition) -> isize {
        to.0 as isize - from.0 as isize
    }

    /// The row as a compressed column vector.
    pub fn transpose(&self) -> Transposed<CompressedVector<T>> {
        Transposed::new(self.evaluate())
    }

    /// Absolute storage offset of the row's first element.
    fn first(&self) -> usize {
        self.matrix.line_begin(self.row)
    }
}

impl<T, M> AlignedRow<M>
where
    T: Numeric,
    M: DerefMut<Target = CompressedMatrix<T, RowMajor>>,
{
    /// Stored `(index, value)` pairs with mutable values.
    pub fn iter_mut(&mut self) -> LineIterMut<'_, T> {
        self.matrix.line_mut(self.row)
    }

    fn fill<V>(&mut self, rhs: &V)
    where
        V: Vector<Element = T>,
    {
        let row = self.row;
        let matrix = &mut *self.matrix;
        matrix.reset(row);
        if V::DENSE {
            let size = matrix.columns();
            rhs.for_each_entry(|index, value| {
                if matrix.non_zeros(row) == matrix.capacity(row) {
                    matrix.reserve(row, extend_capacity(matrix.capacity(row), size));
                }
                matrix.append(row, index, value, true);
            });
        } else {
            matrix.reserve(row, rhs.non_zeros());
            rhs.for_each_entry(|index, value| matrix.append(row, index, value, false));
        }
    }
}

impl<T, M> Shaped for AlignedRow<M>
where
    T: Numeric,
    M: Deref<Target = CompressedMatrix<T, RowMajor>>,
{
    const SHAPE: Shape = Shape::row_view(Layout::Aligned, T::KIND);
}

impl<T, M> Vector for AlignedRow<M>
where
    T: Numeric,
    M: Deref<Target = CompressedMatrix<T, RowMajor>>,
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
        self.matrix.non_zeros(self.row)
    }

    fn for_each_entry<F: FnMut(usize, T)>(&self, mut f: F) {
        for (index, &value) in self.iter() {
            f(index, value);
        }
    }

    fn evaluate(&self) -> CompressedVector<T> {
        let mut out = CompressedVector::with_capacity(self.size(), self.non_zeros());
        self.for_each_entry(|index, value| out.append(index, value));
        out
    }

    fn can_alias<U: ?Sized>(&self, alias: *const U) -> bool {
        alias.cast::<()>() == self.address().cast::<()>()
    }
}

impl<T, M> SparseRowView for AlignedRow<M>
where
    T: Numeric,
    M: Deref<Target = CompressedMatrix<T, RowMajor>>,
{
    type Position = AlignedPosition;

    fn row(&self) -> usize {
        self.row
    }

    fn capacity(&self) -> usize {
        self.matrix.capacity(self.row)
    }

    fn begin(&self) -> AlignedPosition {
        AlignedPosition(0)
    }

    fn end(&self) -> AlignedPosition {
        AlignedPosition(self.non_zeros())
    }

    fn advance(&self, position: AlignedPosition) -> AlignedPosition {
        AlignedPosition((position.0 + 1).min(self.non_zeros()))
    }

    fn find(&self, index: usize) -> AlignedPosition {
        match self.matrix.find(self.row, index) {
            Some(position) => AlignedPosition(position - self.first()),
            None => self.end(),
        }
    }

    fn entry(&self, position: AlignedPosition) -> Option<(usize, T)> {
        self.iter().nth(position.0).map(|(index, &value)| (index, value))
    }
}

impl<T, M> SparseRowViewMut for AlignedRow<M>
where
    T: Numeric,
    M: DerefMut<Target = CompressedMatrix<T, RowMajor>>,
{
    fn reset(&mut self) {
        self.matrix.reset(self.row);
    }

    fn insert(&mut self, index: usize, value: T) -> Result<&mut T, RowError> {
        self.matrix.insert(self.row, index, value)
    }

    fn erase(&mut self, index: usize) {
        self.matrix.erase(self.row, index);
    }

    fn erase_at(&mut self, position: AlignedPosition) -> AlignedPosition {
        let first = self.first();
        let next = self.matrix.erase_at(self.row, first + position.0);
        AlignedPosition(next - first)
    }

    fn reserve(&mut self, n: usize) {
        self.matrix.reserve(self.row, n);
    }

    fn append(&mut self, index: usize, value: T, check: bool) {
        self.matrix.append(self.row, index, value, check);
    }

    fn element(&mut self, index: usize) -> &mut T {
        self.matrix.element_mut(self.row, index)
    }

    fn for_each_value_mut<F: FnMut(usize, &mut T)>(&mut self, mut f: F) {
        for (index, value) in self.iter_mut() {
            f(index, value);
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

impl<T, M> Index<usize> for AlignedRow<M>
where
    T: Numeric,
    M: Deref<Target = CompressedMatrix<T, RowMajor>>,
{
    type Output = T;

    /// Reads without inserting; missing elements read as zero, so `non_zeros` is
    /// unchanged. Use [`element`](SparseRowViewMut::element) or `IndexMut` for the
    /// inserting access.
    fn index(&self, index: usize) -> &T {
        self.matrix.get_ref(self.row, index)
    }
}

impl<T, M> IndexMut<usize> for AlignedRow<M>
where
    T: Numeric,
    M: DerefMut<Target = CompressedMatrix<T, RowMajor>>,
{
    /// Inserts a zero when nothing is stored at `index`.
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.element(index)
    }
}
