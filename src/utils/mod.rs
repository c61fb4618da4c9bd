//! Small helpers shared across the crate.

pub mod capacity;
pub use capacity::{extend_capacity, extend_capacity_with};
