use serde::Serialize;

use super::{ScheduledClass, ViewAxis};
use crate::period::PeriodId;
use crate::roster::BlockRoster;
use crate::schedule::Weekday;

/// One rendered block of a resource grid.
///
/// A block starts at (`day_index`, `period_index`) and covers `row_span`
/// periods and `col_span` days. Empty blocks (no classes) always span 1x1.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutBlock<'a> {
    pub day: Weekday,
    pub period: PeriodId,
    pub day_index: usize,
    pub period_index: usize,
    pub row_span: usize,
    pub col_span: usize,
    /// Days covered by the block, starting with `day`
    pub merged_days: Vec<Weekday>,
    pub classes: Vec<&'a ScheduledClass>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roster: Option<BlockRoster<'a>>,
}

impl LayoutBlock<'_> {
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Several classes share the slot (combined teaching block).
    pub fn is_combined(&self) -> bool {
        self.classes.len() > 1
    }

    pub fn covers(&self, day_index: usize, period_index: usize) -> bool {
        (self.day_index..self.day_index + self.col_span).contains(&day_index)
            && (self.period_index..self.period_index + self.row_span).contains(&period_index)
    }

    /// Every (day_index, period_index) coordinate the block covers.
    pub fn coordinates(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (self.day_index..self.day_index + self.col_span).flat_map(move |d| {
            (self.period_index..self.period_index + self.row_span).map(move |p| (d, p))
        })
    }

    pub fn class_names(&self) -> Vec<&str> {
        self.classes.iter().map(|c| c.name.as_str()).collect()
    }
}

/// All blocks of one teacher or room.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceGrid<'a> {
    pub resource: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<&'a str>,
    /// Days on which the resource has at least one class
    pub active_days: Vec<Weekday>,
    pub blocks: Vec<LayoutBlock<'a>>,
}

impl<'a> ResourceGrid<'a> {
    pub fn has_classes(&self) -> bool {
        self.blocks.iter().any(|b| !b.is_empty())
    }

    /// Block whose area contains the coordinate.
    pub fn block_at(&self, day_index: usize, period_index: usize) -> Option<&LayoutBlock<'a>> {
        self.blocks.iter().find(|b| b.covers(day_index, period_index))
    }
}

/// Row header for one period.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodHeader {
    pub id: PeriodId,
    pub label: String,
    /// Empty for periods missing from the table
    pub time: String,
}

/// Complete result of one layout pass.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableLayout<'a> {
    pub axis: ViewAxis,
    pub days: Vec<Weekday>,
    pub periods: Vec<PeriodHeader>,
    pub resources: Vec<ResourceGrid<'a>>,
    pub can_edit: bool,
}

impl<'a> TimetableLayout<'a> {
    pub fn resource(&self, name: &str) -> Option<&ResourceGrid<'a>> {
        self.resources.iter().find(|r| r.resource == name)
    }
}
