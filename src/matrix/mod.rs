//! Matrix module: compressed sparse storage and dense interop.

pub mod dense;
pub mod sparse;

pub use sparse::{ColumnMajor, CompressedMatrix, RowMajor, StorageOrder};
