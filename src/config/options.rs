//! Capacity growth options for sparse rows.
//!
//! This module provides the `GrowthOptions` struct, which specifies how the
//! per-row capacity of a compressed matrix is extended when a row runs out of
//! room during assignment or insertion. With the defaults a row grows to
//! `min(size, max(7, 2*capacity + 1))`.

/// Capacity growth parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthOptions {
    /// Smallest capacity ever requested for a non-empty row
    pub minimum: usize,

    /// Multiplier applied to the current capacity
    pub factor: usize,

    /// Constant added after the multiplication
    pub offset: usize,
}

impl GrowthOptions {
    pub const fn new(minimum: usize, factor: usize, offset: usize) -> Self {
        Self { minimum, factor, offset }
    }
}

impl Default for GrowthOptions {
    fn default() -> Self {
        Self::new(7, 2, 1)
    }
}
