//! Capacity growth for compressed rows.

use crate::config::GrowthOptions;

/// New capacity for a row of logical length `size` whose current capacity is
/// `capacity`, using the default [`GrowthOptions`].
///
/// The result grows geometrically, never drops below 7 and is clamped to `size`.
pub fn extend_capacity(capacity: usize, size: usize) -> usize {
    extend_capacity_with(&GrowthOptions::default(), capacity, size)
}

/// Same as [`extend_capacity`] with an explicit policy.
pub fn extend_capacity_with(options: &GrowthOptions, capacity: usize, size: usize) -> usize {
    let grown = capacity
        .saturating_mul(options.factor)
        .saturating_add(options.offset)
        .max(options.minimum);
    grown.min(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn growth_sequence_for_wide_row() {
        assert_eq!(extend_capacity(0, 100), 7);
        assert_eq!(extend_capacity(7, 100), 15);
        assert_eq!(extend_capacity(15, 100), 31);
        assert_eq!(extend_capacity(60, 100), 100);
    }

    #[test]
    fn clamped_to_row_size() {
        assert_eq!(extend_capacity(0, 3), 3);
        assert_eq!(extend_capacity(2, 4), 4);
    }

    #[test]
    fn custom_policy() {
        let opts = GrowthOptions::new(4, 3, 0);
        assert_eq!(extend_capacity_with(&opts, 0, 50), 4);
        assert_eq!(extend_capacity_with(&opts, 4, 50), 12);
        assert_eq!(extend_capacity_with(&opts, 20, 50), 50);
    }
}
