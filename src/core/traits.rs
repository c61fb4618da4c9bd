//! Core vector and row-view traits for sparse-row.

use std::fmt::Debug;

use num_traits::{One, Zero};

use crate::algebra::ops::{self, AddOutput, MultOutput, SubOutput};
use crate::algebra::shape::{self, Operator, Shaped};
use crate::algebra::traits::{AddTrait, MultTrait, SubTrait};
use crate::core::numeric::{Numeric, NumericKind};
use crate::error::{check_size, RowError};

/// Read access to a row vector operand (dense, sparse, or a view onto a matrix row).
pub trait Vector: Shaped {
    /// Element type.
    type Element: Numeric;
    /// Independent container this operand materializes into.
    type Result: FromEntries<Element = Self::Element>;
    /// Whether every index is stored.
    const DENSE: bool;

    /// Number of elements, stored or not.
    fn size(&self) -> usize;
    /// Value at `index`; the additive identity when nothing is stored there.
    fn get(&self, index: usize) -> Self::Element;
    /// Number of stored elements; dense operands count their non-zero values.
    fn non_zeros(&self) -> usize;
    /// Visits stored entries in ascending index order. Dense operands visit every index.
    fn for_each_entry<F: FnMut(usize, Self::Element)>(&self, f: F);
    /// Copies the operand into its natural result type.
    fn evaluate(&self) -> Self::Result;

    /// Whether this operand's storage may overlap the object at `alias`.
    fn can_alias<U: ?Sized>(&self, alias: *const U) -> bool {
        let _ = alias;
        false
    }

    /// Whether this operand's storage is the object at `alias`.
    fn is_aliased<U: ?Sized>(&self, alias: *const U) -> bool {
        self.can_alias(alias)
    }
}

/// Construction of a result vector from index-ascending entries.
pub trait FromEntries: Vector + Sized {
    /// Builds a vector of `size` elements. Indices must be ascending and below `size`.
    fn from_entries<I>(size: usize, entries: I) -> Result<Self, RowError>
    where
        I: IntoIterator<Item = (usize, Self::Element)>;
}

/// Read-only capabilities shared by both row-view variants.
pub trait SparseRowView: Vector {
    /// Iterator position within the row.
    type Position: Copy + PartialEq + Debug;

    /// Index of the viewed row in the matrix.
    fn row(&self) -> usize;
    /// Number of elements the row can hold without reallocating.
    fn capacity(&self) -> usize;
    /// Position of the first stored element.
    fn begin(&self) -> Self::Position;
    /// Past-the-end position.
    fn end(&self) -> Self::Position;
    /// Position following `position`.
    fn advance(&self, position: Self::Position) -> Self::Position;
    /// Position of the element at `index`, or [`end`](Self::end).
    fn find(&self, index: usize) -> Self::Position;
    /// Index and value at `position`; `None` at the end.
    fn entry(&self, position: Self::Position) -> Option<(usize, Self::Element)>;

    /// Stored value at `index`, if any.
    fn lookup(&self, index: usize) -> Option<Self::Element> {
        self.entry(self.find(index)).map(|(_, value)| value)
    }

    /// Whether any stored element is NaN.
    fn is_nan(&self) -> bool {
        let mut nan = false;
        self.for_each_entry(|_, value| nan |= value.is_nan());
        nan
    }

    /// Whether every stored element is the additive identity.
    fn is_default(&self) -> bool {
        let mut default = true;
        self.for_each_entry(|_, value| default &= value.is_default());
        default
    }
}

/// Mutating capabilities shared by both row-view variants.
///
/// Compound assignment with a vector materializes `self ∘ rhs` into the deduced result
/// type first and then assigns it, so a source that overlaps the row is never read
/// after being overwritten.
pub trait SparseRowViewMut: SparseRowView + Sized {
    /// Removes every element of the row.
    fn reset(&mut self);
    /// Inserts a new element; fails if `index` is already occupied.
    fn insert(&mut self, index: usize, value: Self::Element) -> Result<&mut Self::Element, RowError>;
    /// Removes the element at `index`, if present.
    fn erase(&mut self, index: usize);
    /// Removes the element at `position` and returns the position of the next element.
    fn erase_at(&mut self, position: Self::Position) -> Self::Position;
    /// Sets the minimum capacity of the row.
    fn reserve(&mut self, n: usize);
    /// Appends an element at the end of the row.
    ///
    /// The caller guarantees that `index` is larger than every stored index and that the
    /// row has spare capacity. Violations are only caught in debug builds; in release
    /// builds they leave the matrix in an unspecified state. With `check` set, a zero
    /// `value` is skipped.
    fn append(&mut self, index: usize, value: Self::Element, check: bool);
    /// Mutable access to the element at `index`, inserting a zero if nothing is stored.
    fn element(&mut self, index: usize) -> &mut Self::Element;
    /// Visits every stored element mutably in ascending index order.
    fn for_each_value_mut<F: FnMut(usize, &mut Self::Element)>(&mut self, f: F);
    /// Replaces the row contents with `rhs`.
    fn assign<V>(&mut self, rhs: &V) -> Result<&mut Self, RowError>
    where
        V: Vector<Element = Self::Element>;

    /// Assigns the result of `f`, which may read this row freely.
    fn assign_with<F, V>(&mut self, f: F) -> Result<&mut Self, RowError>
    where
        F: FnOnce(&Self) -> V,
        V: Vector<Element = Self::Element>,
    {
        let tmp = f(&*self);
        self.assign(&tmp)
    }

    /// `self = self + rhs`
    fn try_add_assign<V>(&mut self, rhs: &V) -> Result<&mut Self, RowError>
    where
        V: Vector<Element = Self::Element>,
        Self: AddTrait<V>,
        AddOutput<Self, V>: FromEntries<Element = Self::Element>,
    {
        const { assert!(shape::deduce(Operator::Add, Self::SHAPE, V::SHAPE).is_row_vector()) };
        check_size(self.size(), rhs.size())?;
        let tmp = ops::add(&*self, rhs)?;
        self.assign(&tmp)
    }

    /// `self = self - rhs`
    fn try_sub_assign<V>(&mut self, rhs: &V) -> Result<&mut Self, RowError>
    where
        V: Vector<Element = Self::Element>,
        Self: SubTrait<V>,
        SubOutput<Self, V>: FromEntries<Element = Self::Element>,
    {
        const { assert!(shape::deduce(Operator::Sub, Self::SHAPE, V::SHAPE).is_row_vector()) };
        check_size(self.size(), rhs.size())?;
        let tmp = ops::sub(&*self, rhs)?;
        self.assign(&tmp)
    }

    /// `self = self * rhs`, elementwise.
    fn try_mul_assign<V>(&mut self, rhs: &V) -> Result<&mut Self, RowError>
    where
        V: Vector<Element = Self::Element>,
        Self: MultTrait<V>,
        MultOutput<Self, V>: FromEntries<Element = Self::Element>,
    {
        const {
            assert!(
                shape::deduce(Operator::Mul, Self::SHAPE, V::SHAPE).is_row_vector(),
                "the product of two row vectors must be a row vector"
            )
        };
        check_size(self.size(), rhs.size())?;
        let tmp = ops::mul(&*self, rhs)?;
        self.assign(&tmp)
    }

    /// Multiplies every stored element by `scalar` in place.
    fn scale(&mut self, scalar: Self::Element) -> &mut Self {
        self.for_each_value_mut(|_, value| *value *= scalar);
        self
    }

    /// Divides every stored element by `scalar` in place.
    ///
    /// Floating-point rows multiply by the reciprocal; integral rows divide directly.
    fn try_div_assign(&mut self, scalar: Self::Element) -> Result<&mut Self, RowError> {
        if scalar.is_zero() {
            return Err(RowError::DivisionByZero);
        }
        match <Self::Element as Numeric>::KIND {
            NumericKind::FloatingPoint => {
                let reciprocal = <Self::Element as One>::one() / scalar;
                Ok(self.scale(reciprocal))
            }
            NumericKind::Integral => {
                self.for_each_value_mut(|_, value| *value /= scalar);
                Ok(self)
            }
        }
    }
}
