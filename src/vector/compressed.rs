//! Sparse row vector with sorted index storage.

use std::ops::Index;

use crate::algebra::shape::{Orientation, Shape, Shaped, Storage};
use crate::core::numeric::Numeric;
use crate::core::traits::{FromEntries, Vector};
use crate::error::RowError;

/// A sparse row vector storing `(index, value)` pairs in ascending index order.
///
/// This is the natural result type of both row-view variants.
#[derive(Clone, Debug, PartialEq)]
pub struct CompressedVector<T> {
    size: usize,
    indices: Vec<usize>,
    values: Vec<T>,
    zero: T,
}

impl<T: Numeric> CompressedVector<T> {
    /// An empty vector of logical length `size`.
    pub fn new(size: usize) -> Self {
        Self::with_capacity(size, 0)
    }

    pub fn with_capacity(size: usize, non_zeros: usize) -> Self {
        Self {
            size,
            indices: Vec::with_capacity(non_zeros),
            values: Vec::with_capacity(non_zeros),
            zero: T::zero(),
        }
    }

    /// Builds a vector from `(index, value)` pairs in any order. Later duplicates win.
    pub fn from_pairs(size: usize, pairs: &[(usize, T)]) -> Result<Self, RowError> {
        let mut out = Self::new(size);
        for &(index, value) in pairs {
            if index >= size {
                return Err(RowError::InvalidIndex { row: 0, column: index, rows: 1, columns: size });
            }
            out.set(index, value);
        }
        Ok(out)
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    fn position(&self, index: usize) -> Result<usize, usize> {
        self.indices.binary_search(&index)
    }

    /// Stores `value` at `index`, overwriting any previous value.
    pub fn set(&mut self, index: usize, value: T) {
        assert!(index < self.size, "invalid vector access index {index}");
        match self.position(index) {
            Ok(k) => self.values[k] = value,
            Err(k) => {
                self.indices.insert(k, index);
                self.values.insert(k, value);
            }
        }
    }

    /// Appends behind the last stored element. `index` must exceed every stored index.
    pub fn append(&mut self, index: usize, value: T) {
        debug_assert!(index < self.size, "invalid vector access index {index}");
        debug_assert!(
            self.indices.last().is_none_or(|&last| last < index),
            "append index is not strictly increasing"
        );
        self.indices.push(index);
        self.values.push(value);
    }

    /// Removes the element at `index`, if stored.
    pub fn erase(&mut self, index: usize) {
        if let Ok(k) = self.position(index) {
            self.indices.remove(k);
            self.values.remove(k);
        }
    }

    /// Stored value at `index`.
    pub fn find(&self, index: usize) -> Option<&T> {
        self.position(index).ok().map(|k| &self.values[k])
    }

    /// Stored entries in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, T)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    pub fn clear(&mut self) {
        self.indices.clear();
        self.values.clear();
    }
}

impl<T: Numeric> Index<usize> for CompressedVector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        assert!(index < self.size, "invalid vector access index {index}");
        self.find(index).unwrap_or(&self.zero)
    }
}

impl<T: Numeric> Shaped for CompressedVector<T> {
    const SHAPE: Shape = Shape::vector(Storage::Compressed, Orientation::Row, T::KIND);
}

impl<T: Numeric> Vector for CompressedVector<T> {
    type Element = T;
    type Result = Self;
    const DENSE: bool = false;

    fn size(&self) -> usize {
        self.size
    }

    fn get(&self, index: usize) -> T {
        self[index]
    }

    fn non_zeros(&self) -> usize {
        self.indices.len()
    }

    fn for_each_entry<F: FnMut(usize, T)>(&self, mut f: F) {
        for (index, value) in self.iter() {
            f(index, value);
        }
    }

    fn evaluate(&self) -> Self {
        self.clone()
    }
}

impl<T: Numeric> FromEntries for CompressedVector<T> {
    /// Zero values are not stored.
    fn from_entries<I>(size: usize, entries: I) -> Result<Self, RowError>
    where
        I: IntoIterator<Item = (usize, T)>,
    {
        let mut out = Self::new(size);
        for (index, value) in entries {
            if !value.is_default() {
                out.append(index, value);
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_keeps_order_and_overwrites() {
        let mut v = CompressedVector::new(6);
        v.set(4, 4.0);
        v.set(1, 1.0);
        v.set(4, 5.0);
        assert_eq!(v.iter().collect::<Vec<_>>(), vec![(1, 1.0), (4, 5.0)]);
        assert_eq!(v[2], 0.0);
        assert_eq!(v.non_zeros(), 2);
    }

    #[test]
    fn from_pairs_rejects_out_of_range() {
        assert!(CompressedVector::from_pairs(3, &[(3, 1i32)]).is_err());
    }

    #[test]
    fn from_entries_drops_zeros() {
        let v = CompressedVector::from_entries(4, [(0, 0.0), (2, 3.0), (3, 0.0)]).unwrap();
        assert_eq!(v.non_zeros(), 1);
        assert_eq!(v.get(2), 3.0);
    }
}
