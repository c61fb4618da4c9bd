//! Resizable dense row vector.

use std::ops::{Index, IndexMut};

use crate::algebra::shape::{Orientation, Shape, Shaped, Storage};
use crate::core::numeric::Numeric;
use crate::core::traits::{FromEntries, Vector};
use crate::error::RowError;

/// A dense row vector backed by a `Vec`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DynamicVector<T>(Vec<T>);

impl<T: Numeric> DynamicVector<T> {
    /// `size` zeros.
    pub fn zeros(size: usize) -> Self {
        Self(vec![T::zero(); size])
    }

    pub fn from_vec(values: Vec<T>) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Changes the size; new elements are zero.
    pub fn resize(&mut self, size: usize) {
        self.0.resize(size, T::zero());
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T: Numeric> From<Vec<T>> for DynamicVector<T> {
    fn from(values: Vec<T>) -> Self {
        Self(values)
    }
}

impl<T: Numeric> FromIterator<T> for DynamicVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> Index<usize> for DynamicVector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T> IndexMut<usize> for DynamicVector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

impl<T: Numeric> Shaped for DynamicVector<T> {
    const SHAPE: Shape = Shape::vector(Storage::Dynamic, Orientation::Row, T::KIND);
}

impl<T: Numeric> Vector for DynamicVector<T> {
    type Element = T;
    type Result = Self;
    const DENSE: bool = true;

    fn size(&self) -> usize {
        self.0.len()
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
        self.clone()
    }
}

impl<T: Numeric> FromEntries for DynamicVector<T> {
    fn from_entries<I>(size: usize, entries: I) -> Result<Self, RowError>
    where
        I: IntoIterator<Item = (usize, T)>,
    {
        let mut out = Self::zeros(size);
        for (i, value) in entries {
            out.0[i] = value;
        }
        Ok(out)
    }
}
