//! Fixed-size dense row vector.

use std::ops::{Index, IndexMut};

use crate::algebra::shape::{Orientation, Shape, Shaped, Storage};
use crate::core::numeric::Numeric;
use crate::core::traits::{FromEntries, Vector};
use crate::error::{check_size, RowError};

/// A dense row vector of exactly `N` elements.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaticVector<T, const N: usize>([T; N]);

impl<T: Numeric, const N: usize> StaticVector<T, N> {
    pub fn new(values: [T; N]) -> Self {
        Self(values)
    }

    pub fn zeros() -> Self {
        Self([T::zero(); N])
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }
}

impl<T: Numeric, const N: usize> Default for StaticVector<T, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Numeric, const N: usize> From<[T; N]> for StaticVector<T, N> {
    fn from(values: [T; N]) -> Self {
        Self(values)
    }
}

impl<T, const N: usize> Index<usize> for StaticVector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for StaticVector<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

impl<T: Numeric, const N: usize> Shaped for StaticVector<T, N> {
    const SHAPE: Shape = Shape::vector(Storage::Static(N), Orientation::Row, T::KIND);
}

impl<T: Numeric, const N: usize> Vector for StaticVector<T, N> {
    type Element = T;
    type Result = Self;
    const DENSE: bool = true;

    fn size(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> T {
        self.0[index]
    }

    fn non_zeros(&self) -> usize {
        self.0.iter().filter(|v| !v.is_default()).count()
    }

    fn for_each_entry<F: FnMut(usize, T)>(&self, mut f: F) {
        for (i, &value) in self.0.iter().enumerate() {
            f(i, value);
        }
    }

    fn evaluate(&self) -> Self {
        *self
    }
}

impl<T: Numeric, const N: usize> FromEntries for StaticVector<T, N> {
    fn from_entries<I>(size: usize, entries: I) -> Result<Self, RowError>
    where
        I: IntoIterator<Item = (usize, T)>,
    {
        check_size(N, size)?;
        let mut out = Self::zeros();
        for (i, value) in entries {
            out.0[i] = value;
        }
        Ok(out)
    }
}
