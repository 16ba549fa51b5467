//! Grouping classes into (day, period) cells of one resource.

use crate::period::PeriodId;
use crate::resource::effective_resource;
use crate::schedule::Weekday;
use crate::types::{ScheduledClass, ViewAxis};

/// Classes meeting at (`day`, `period`) whose effective resource is `resource`.
///
/// Input order is preserved. An empty resource matches nothing.
pub fn classes_in_cell<'a, I>(
    classes: I,
    day: Weekday,
    period: &PeriodId,
    resource: &str,
    axis: ViewAxis,
) -> Vec<&'a ScheduledClass>
where
    I: IntoIterator<Item = &'a ScheduledClass>,
{
    let resource = resource.trim();
    if resource.is_empty() {
        return Vec::new();
    }
    classes
        .into_iter()
        .filter(|class| {
            class.has_slot(day, period) && effective_resource(class, day, period, axis) == resource
        })
        .collect()
}

/// Cells of one resource over a `days x periods` grid.
///
/// Built once per resource so span queries never rescan the class list.
#[derive(Debug, Clone)]
pub struct CellMatrix<'a> {
    resource: String,
    axis: ViewAxis,
    days: Vec<Weekday>,
    periods: Vec<PeriodId>,
    /// `cells[day_index][period_index]`
    cells: Vec<Vec<Vec<&'a ScheduledClass>>>,
}

impl<'a> CellMatrix<'a> {
    pub fn new(
        classes: &[&'a ScheduledClass],
        resource: &str,
        axis: ViewAxis,
        days: &[Weekday],
        periods: &[PeriodId],
    ) -> Self {
        let resource = resource.trim().to_string();
        let mut cells: Vec<Vec<Vec<&'a ScheduledClass>>> =
            vec![vec![Vec::new(); periods.len()]; days.len()];

        if !resource.is_empty() {
            for &class in classes {
                for slot in class.slots() {
                    let Some(d) = days.iter().position(|day| *day == slot.day) else {
                        continue;
                    };
                    let Some(p) = periods.iter().position(|period| *period == slot.period) else {
                        continue;
                    };
                    if effective_resource(class, slot.day, &slot.period, axis) != resource {
                        continue;
                    }
                    if let Some(cell) = cells.get_mut(d).and_then(|row| row.get_mut(p)) {
                        // A class listing the same slot twice still occupies it once
                        if !cell.iter().any(|c| std::ptr::eq(*c, class)) {
                            cell.push(class);
                        }
                    }
                }
            }
        }

        Self {
            resource,
            axis,
            days: days.to_vec(),
            periods: periods.to_vec(),
            cells,
        }
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn axis(&self) -> ViewAxis {
        self.axis
    }

    pub fn days(&self) -> &[Weekday] {
        &self.days
    }

    pub fn periods(&self) -> &[PeriodId] {
        &self.periods
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn period_count(&self) -> usize {
        self.periods.len()
    }

    pub fn day(&self, day_index: usize) -> Option<Weekday> {
        self.days.get(day_index).copied()
    }

    pub fn period(&self, period_index: usize) -> Option<&PeriodId> {
        self.periods.get(period_index)
    }

    /// Classes in a cell; empty outside the grid.
    pub fn classes(&self, day_index: usize, period_index: usize) -> &[&'a ScheduledClass] {
        self.cells
            .get(day_index)
            .and_then(|row| row.get(period_index))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn is_empty_cell(&self, day_index: usize, period_index: usize) -> bool {
        self.classes(day_index, period_index).is_empty()
    }

    /// Whether any cell holds a class.
    pub fn has_classes(&self) -> bool {
        self.cells.iter().flatten().any(|cell| !cell.is_empty())
    }
}
