//! Configuration knobs shared by matrices and row views.

pub mod options;
pub use options::GrowthOptions;
