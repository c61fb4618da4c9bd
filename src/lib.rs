//! sparse-row: live row views over compressed sparse matrices
//!
//! A row view gives one row of a [`CompressedMatrix`] the interface of a sparse vector
//! without copying the matrix storage. Rows of row-major matrices are viewed through
//! [`AlignedRow`], rows of column-major matrices through [`TransposedRow`]. The
//! [`algebra`] module deduces which container an expression such as `row + vector` or
//! `row * 2.0` produces, and rejects meaningless combinations at compile time.

pub mod algebra;
pub mod config;
pub mod core;
pub mod error;
pub mod matrix;
pub mod utils;
pub mod vector;
pub mod view;

// Re-exports for convenience
pub use algebra::{
    deduce, deduce_for, AddOutput, AddTrait, Deduced, DivOutput, DivTrait, MultOutput, MultTrait,
    Operator, Shape, Shaped, SubOutput, SubTrait,
};
pub use config::*;
pub use self::core::{FromEntries, Numeric, NumericKind, SparseRowView, SparseRowViewMut, Vector};
pub use error::*;
pub use matrix::*;
pub use utils::*;
pub use vector::{CompressedVector, DynamicVector, StaticVector, Transposed};
pub use view::*;
