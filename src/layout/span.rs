//! Vertical and horizontal merge spans over a [`CellMatrix`].

use super::cell::CellMatrix;
use crate::resource::effective_resource;
use crate::types::ScheduledClass;

/// Two cells are the same merge unit iff their sorted class-name multisets match.
pub fn class_names_equal(a: &[&ScheduledClass], b: &[&ScheduledClass]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut left: Vec<&str> = a.iter().map(|c| c.name.as_str()).collect();
    let mut right: Vec<&str> = b.iter().map(|c| c.name.as_str()).collect();
    left.sort_unstable();
    right.sort_unstable();
    left == right
}

impl CellMatrix<'_> {
    /// Number of periods the block starting at (`day_index`, `start`) covers.
    ///
    /// Only single-class cells merge. The span extends while the next cell holds
    /// one class of the same name and the start class still resolves to this
    /// resource there. Always at least 1.
    pub fn vertical_span(&self, day_index: usize, start: usize) -> usize {
        let origin = self.classes(day_index, start);
        let Some(day) = self.day(day_index) else {
            return 1;
        };
        if origin.len() != 1 {
            return 1;
        }

        let mut span = 1;
        for next in start + 1..self.period_count() {
            let cell = self.classes(day_index, next);
            if cell.is_empty() || !class_names_equal(origin, cell) {
                break;
            }
            let Some(period) = self.period(next) else {
                break;
            };
            let same_resource = origin.iter().all(|class| {
                effective_resource(class, day, period, self.axis()) == self.resource()
            });
            if !same_resource {
                break;
            }
            span += 1;
        }
        span
    }

    /// Period index where the vertical block containing this cell starts.
    pub fn span_origin(&self, day_index: usize, period_index: usize) -> usize {
        let mut origin = 0;
        while origin < period_index {
            let span = self.vertical_span(day_index, origin);
            if origin + span > period_index {
                return origin;
            }
            origin += span;
        }
        period_index
    }

    /// True iff the cell lies strictly inside a vertical block that started at
    /// an earlier period.
    pub fn should_skip_cell(&self, day_index: usize, period_index: usize) -> bool {
        self.span_origin(day_index, period_index) < period_index
    }

    /// Number of day columns the block at (`day_index`, `period_index`) covers.
    ///
    /// Only single-class cells merge across days. The next column must start
    /// its own block at the same period with one class of the same name and
    /// the same `row_span`.
    pub fn horizontal_span(&self, day_index: usize, period_index: usize, row_span: usize) -> usize {
        let [origin] = self.classes(day_index, period_index) else {
            return 1;
        };

        let mut span = 1;
        for next in day_index + 1..self.day_count() {
            let [candidate] = self.classes(next, period_index) else {
                break;
            };
            if candidate.name != origin.name
                || self.should_skip_cell(next, period_index)
                || self.vertical_span(next, period_index) != row_span
            {
                break;
            }
            span += 1;
        }
        span
    }
}
