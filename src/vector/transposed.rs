//! Column-vector wrapper.

use crate::algebra::shape::{Shape, Shaped};
use crate::core::traits::Vector;

/// The transpose of a row vector: a column vector with the same elements.
///
/// Column vectors take part in the algebra (a row times a column is a scalar) but are not
/// row operands, so `Transposed` does not implement [`Vector`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transposed<V>(V);

impl<V: Vector> Transposed<V> {
    pub fn new(vector: V) -> Self {
        Self(vector)
    }

    pub fn inner(&self) -> &V {
        &self.0
    }

    pub fn into_inner(self) -> V {
        self.0
    }

    pub fn size(&self) -> usize {
        self.0.size()
    }
}

impl<V: Shaped> Shaped for Transposed<V> {
    const SHAPE: Shape = V::SHAPE.transpose();
}
