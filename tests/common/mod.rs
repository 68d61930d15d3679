//! Common utilities for integration tests

pub mod fixtures;
pub mod test_helpers;

// Re-export commonly used items
pub use fixtures::{small_comparison, traveling_wave};
pub use test_helpers::{assert_matrices_close, assert_slices_equal, max_abs_diff};
