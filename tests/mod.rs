//! Integration tests for timegrid.
//!
//! This module provides the test infrastructure for testing the layout resolver.
//! It includes:
//!
//! - `fixtures`: Builders for classes, students and input documents
//! - `common`: Layout lookup and tiling assertion helpers
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use crate::fixtures::{ClassBuilder, InputBuilder};
//! use crate::common::{assert_layout_tiles, grid, origin};
//!
//! fn test_two_period_block() {
//!     let input = InputBuilder::new()
//!         .class(ClassBuilder::new("A").teacher("Kim").slots(&["월 1", "월 2"]))
//!         .periods(&[1, 2])
//!         .build();
//!
//!     let layout = timegrid::resolve_layout(&input);
//!     assert_layout_tiles(&layout);
//!     assert_eq!(origin(grid(&layout, "Kim"), 0, 0).row_span, 2);
//! }
//! ```
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

pub mod common;
pub mod fixtures;

// Re-export commonly used items at the top level
pub use common::{
    assert_layout_tiles, assert_tiles, block, grid, names, origin, resolve_to_json,
};
pub use fixtures::{teacher, ClassBuilder, InputBuilder, StudentBuilder, TODAY};
