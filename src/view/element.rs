//! Element proxy yielded by the mutable transposed-row iterator.

use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use crate::core::numeric::Numeric;

/// Mutable handle to one stored element of a transposed row.
///
/// Valid for a single iteration step; assignments write straight into the matrix.
#[derive(Debug)]
pub struct RowElement<'a, T> {
    value: &'a mut T,
    index: usize,
}

impl<'a, T: Numeric> RowElement<'a, T> {
    pub(crate) fn new(value: &'a mut T, index: usize) -> Self {
        Self { value, index }
    }

    /// Current value.
    pub fn value(&self) -> T {
        *self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        self.value
    }

    /// Column index of the element.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn set(&mut self, value: T) {
        *self.value = value;
    }
}

impl<T: Numeric> AddAssign<T> for RowElement<'_, T> {
    fn add_assign(&mut self, rhs: T) {
        *self.value += rhs;
    }
}

impl<T: Numeric> SubAssign<T> for RowElement<'_, T> {
    fn sub_assign(&mut self, rhs: T) {
        *self.value -= rhs;
    }
}

impl<T: Numeric> MulAssign<T> for RowElement<'_, T> {
    fn mul_assign(&mut self, rhs: T) {
        *self.value *= rhs;
    }
}

impl<T: Numeric> DivAssign<T> for RowElement<'_, T> {
    fn div_assign(&mut self, rhs: T) {
        *self.value /= rhs;
    }
}
