//! Core traits: numeric kinds, vector operands and the shared row-view contract.

pub mod numeric;
pub mod traits;

pub use numeric::{Numeric, NumericKind};
pub use traits::{FromEntries, SparseRowView, SparseRowViewMut, Vector};
