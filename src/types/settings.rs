use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::student::parse_date;
use super::ViewAxis;
use crate::period::{PeriodId, SubjectTable};
use crate::schedule::Weekday;

/// View configuration for one layout pass.
///
/// Every field has a default, so `{}` is a valid settings document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewSettings {
    pub axis: ViewAxis,
    pub table: SubjectTable,
    /// Day columns, in display order
    pub days: Vec<Weekday>,
    /// Period rows; empty means the table's full period list
    pub periods: Vec<PeriodId>,
    /// Merge identical single-class blocks across adjacent day columns
    pub merge_adjacent_days: bool,
    pub show_empty_resources: bool,
    pub show_hidden_teachers: bool,
    pub show_students: bool,
    pub show_withdrawn_students: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
    /// Decided by the host application's permission layer
    pub can_edit: bool,
    /// "YYYY-MM-DD"; defaults to today
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_date: Option<String>,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            axis: ViewAxis::Teacher,
            table: SubjectTable::Math,
            days: Weekday::WEEKDAYS.to_vec(),
            periods: Vec::new(),
            merge_adjacent_days: false,
            show_empty_resources: false,
            show_hidden_teachers: false,
            show_students: true,
            show_withdrawn_students: false,
            search_query: None,
            can_edit: false,
            reference_date: None,
        }
    }
}

impl ViewSettings {
    /// Period rows to lay out.
    pub fn resolved_periods(&self) -> Vec<PeriodId> {
        if self.periods.is_empty() {
            self.table.default_axis()
        } else {
            self.periods.clone()
        }
    }

    /// Day columns with duplicates removed, first occurrence kept.
    pub fn resolved_days(&self) -> Vec<Weekday> {
        let mut days = Vec::with_capacity(self.days.len());
        for day in &self.days {
            if !days.contains(day) {
                days.push(*day);
            }
        }
        days
    }

    /// Trimmed, non-empty search query.
    pub fn query(&self) -> Option<&str> {
        self.search_query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
    }

    /// Reference date for roster status; falls back to today.
    pub fn reference_date(&self) -> NaiveDate {
        parse_date(self.reference_date.as_deref()).unwrap_or_else(crate::roster::today)
    }
}
