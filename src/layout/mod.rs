//! Layout engine for timetable grids.
//!
//! This module handles:
//! - Grouping classes into (day, period) cells per resource
//! - Vertical and horizontal merge spans
//! - Tiling each resource grid with merged blocks

mod cell;
mod grid;
mod span;

pub use cell::{classes_in_cell, CellMatrix};
pub use grid::{resolve_blocks, resolve_layout};
pub use span::class_names_equal;
