//! Common test utilities and assertion helpers.
//!
//! This module provides helpers for checking resolved layouts: tiling,
//! block lookup, and JSON round trips through the public entry point.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use timegrid::{LayoutBlock, ResourceGrid, TimetableInput, TimetableLayout};

// Re-export fixtures for convenience
pub use super::fixtures::*;

// ============================================================================
// Layout Lookup
// ============================================================================

/// Grid of a resource, panicking with the available names when missing.
pub fn grid<'l, 'a>(layout: &'l TimetableLayout<'a>, resource: &str) -> &'l ResourceGrid<'a> {
    layout.resource(resource).unwrap_or_else(|| {
        let names: Vec<&str> = layout.resources.iter().map(|r| r.resource.as_str()).collect();
        panic!("resource {resource:?} not in layout, have {names:?}")
    })
}

/// Block covering (`day_index`, `period_index`).
pub fn block<'l, 'a>(
    grid: &'l ResourceGrid<'a>,
    day_index: usize,
    period_index: usize,
) -> &'l LayoutBlock<'a> {
    grid.block_at(day_index, period_index).unwrap_or_else(|| {
        panic!(
            "no block covers ({day_index}, {period_index}) in {}",
            grid.resource
        )
    })
}

/// Block whose origin is exactly (`day_index`, `period_index`).
pub fn origin<'l, 'a>(
    grid: &'l ResourceGrid<'a>,
    day_index: usize,
    period_index: usize,
) -> &'l LayoutBlock<'a> {
    let found = block(grid, day_index, period_index);
    assert_eq!(
        (found.day_index, found.period_index),
        (day_index, period_index),
        "({day_index}, {period_index}) is covered by a block starting elsewhere"
    );
    found
}

/// Sorted class names of a block.
pub fn names(block: &LayoutBlock<'_>) -> Vec<String> {
    let mut names: Vec<String> = block.class_names().iter().map(|n| n.to_string()).collect();
    names.sort();
    names
}

// ============================================================================
// Invariants
// ============================================================================

/// Every coordinate of the `days x periods` grid is covered exactly once.
pub fn assert_tiles(grid: &ResourceGrid<'_>, days: usize, periods: usize) {
    let mut hits = vec![vec![0usize; periods]; days];
    for block in &grid.blocks {
        assert!(block.row_span >= 1 && block.col_span >= 1);
        assert_eq!(block.merged_days.len(), block.col_span);
        for (d, p) in block.coordinates() {
            assert!(
                d < days && p < periods,
                "block at ({}, {}) spills outside the grid",
                block.day_index,
                block.period_index
            );
            hits[d][p] += 1;
        }
    }
    for (d, row) in hits.iter().enumerate() {
        for (p, count) in row.iter().enumerate() {
            assert_eq!(
                *count, 1,
                "{}: ({d}, {p}) covered {count} times",
                grid.resource
            );
        }
    }
}

/// Tiling check for every resource of a layout.
pub fn assert_layout_tiles(layout: &TimetableLayout<'_>) {
    for grid in &layout.resources {
        assert_tiles(grid, layout.days.len(), layout.periods.len());
    }
}

// ============================================================================
// JSON Helpers
// ============================================================================

/// Resolve through the JSON entry point and parse the result.
#[must_use]
pub fn resolve_to_json(input: &TimetableInput) -> serde_json::Value {
    let doc = serde_json::to_string(input).expect("input serializes");
    let out = timegrid::resolve_json(&doc).expect("input resolves");
    serde_json::from_str(&out).expect("layout is valid JSON")
}
