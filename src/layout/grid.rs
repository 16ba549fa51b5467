//! Full block tiling of a timetable.
//!
//! Every resource grid is walked periods-outer, days-inner. Each coordinate
//! that is neither covered by an earlier block nor inside a vertical span
//! becomes the origin of exactly one [`LayoutBlock`], so the blocks of a
//! resource tile its `days x periods` grid with no gaps and no overlap.

use super::cell::CellMatrix;
use crate::period::{period_label, period_time};
use crate::resource::{active_days, resource_axis};
use crate::roster::{block_roster, RosterOptions};
use crate::search::filter_classes;
use crate::types::{
    LayoutBlock, PeriodHeader, ResourceGrid, ScheduledClass, TimetableInput, TimetableLayout,
    ViewAxis,
};

/// Coverage of a `days x periods` grid, `[day][period]`.
struct Coverage {
    covered: Vec<Vec<bool>>,
}

impl Coverage {
    fn new(days: usize, periods: usize) -> Self {
        Self {
            covered: vec![vec![false; periods]; days],
        }
    }

    fn is_covered(&self, day: usize, period: usize) -> bool {
        self.covered
            .get(day)
            .and_then(|row| row.get(period))
            .copied()
            .unwrap_or(false)
    }

    fn mark(&mut self, block: &LayoutBlock<'_>) {
        for (d, p) in block.coordinates() {
            if let Some(cell) = self.covered.get_mut(d).and_then(|row| row.get_mut(p)) {
                *cell = true;
            }
        }
    }
}

/// Blocks of one resource, in emission order (periods outer, days inner).
///
/// `merge_days` enables horizontal merging of identical single-class blocks
/// across adjacent day columns.
pub fn resolve_blocks<'a>(matrix: &CellMatrix<'a>, merge_days: bool) -> Vec<LayoutBlock<'a>> {
    let mut coverage = Coverage::new(matrix.day_count(), matrix.period_count());
    let mut blocks = Vec::new();

    for (period_index, period) in matrix.periods().iter().enumerate() {
        for (day_index, day) in matrix.days().iter().enumerate() {
            if coverage.is_covered(day_index, period_index)
                || matrix.should_skip_cell(day_index, period_index)
            {
                continue;
            }

            let classes = matrix.classes(day_index, period_index).to_vec();
            let row_span = matrix.vertical_span(day_index, period_index);
            let mut col_span = if merge_days {
                matrix.horizontal_span(day_index, period_index, row_span)
            } else {
                1
            };
            // Stop short of any column an earlier block already reached
            if let Some(blocked) =
                (1..col_span).find(|&offset| coverage.is_covered(day_index + offset, period_index))
            {
                col_span = blocked;
            }

            let merged_days = matrix
                .days()
                .iter()
                .skip(day_index)
                .take(col_span)
                .copied()
                .collect();

            let block = LayoutBlock {
                day: *day,
                period: period.clone(),
                day_index,
                period_index,
                row_span,
                col_span,
                merged_days,
                classes,
                roster: None,
            };
            log::trace!(
                "{}: block {} {} rows={} cols={} classes={:?}",
                matrix.resource(),
                block.day,
                block.period,
                row_span,
                col_span,
                block.class_names()
            );
            coverage.mark(&block);
            blocks.push(block);
        }
    }
    blocks
}

/// Distinct class records over every cell a block covers, in first-seen order.
fn covered_classes<'a>(
    matrix: &CellMatrix<'a>,
    block: &LayoutBlock<'a>,
) -> Vec<&'a ScheduledClass> {
    let mut found: Vec<&'a ScheduledClass> = Vec::new();
    for (d, p) in block.coordinates() {
        for &class in matrix.classes(d, p) {
            if !found.iter().any(|c| std::ptr::eq(*c, class)) {
                found.push(class);
            }
        }
    }
    found
}

/// Resolve the complete layout for an input snapshot.
///
/// Search filter, resource axis, one cell matrix per resource, blocks, then
/// block rosters when students are shown.
pub fn resolve_layout(input: &TimetableInput) -> TimetableLayout<'_> {
    let settings = &input.settings;
    let days = settings.resolved_days();
    let periods = settings.resolved_periods();
    let directory = input.student_directory();
    let classes = filter_classes(&input.classes, settings.query(), &directory);

    let names = resource_axis(
        &classes,
        &input.teachers,
        &input.rooms,
        settings.axis,
        settings.show_hidden_teachers,
    );
    log::debug!(
        "resolving {} classes over {} resources ({} days x {} periods)",
        classes.len(),
        names.len(),
        days.len(),
        periods.len()
    );

    let roster_options = RosterOptions {
        today: settings.reference_date(),
        query: settings.query(),
        show_withdrawn: settings.show_withdrawn_students,
    };

    let mut resources = Vec::with_capacity(names.len());
    for name in names {
        let matrix = CellMatrix::new(&classes, &name, settings.axis, &days, &periods);
        if !matrix.has_classes() && !settings.show_empty_resources {
            continue;
        }

        let mut blocks = resolve_blocks(&matrix, settings.merge_adjacent_days);
        if settings.show_students {
            for block in blocks.iter_mut().filter(|b| !b.is_empty()) {
                let covered = covered_classes(&matrix, block);
                block.roster = Some(block_roster(
                    &covered,
                    &block.merged_days,
                    &directory,
                    roster_options,
                ));
            }
        }

        let teacher = match settings.axis {
            ViewAxis::Teacher => input.teachers.iter().find(|t| t.name.trim() == name),
            ViewAxis::Room => None,
        };
        resources.push(ResourceGrid {
            active_days: active_days(&classes, &name, settings.axis, &days),
            bg_color: teacher.and_then(|t| t.bg_color.as_deref()),
            text_color: teacher.and_then(|t| t.text_color.as_deref()),
            resource: name,
            blocks,
        });
    }

    let headers = periods
        .iter()
        .map(|id| PeriodHeader {
            label: period_label(id),
            time: period_time(id, settings.table),
            id: id.clone(),
        })
        .collect();

    TimetableLayout {
        axis: settings.axis,
        days,
        periods: headers,
        resources,
        can_edit: settings.can_edit,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::period::PeriodId;
    use crate::schedule::Weekday;
    use crate::types::{ScheduledClass, Teacher, ViewSettings};

    fn class(name: &str, teacher: &str, schedule: &[&str]) -> ScheduledClass {
        ScheduledClass {
            id: name.to_lowercase(),
            name: name.to_string(),
            default_teacher: teacher.to_string(),
            schedule: schedule.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn settings(periods: u32) -> ViewSettings {
        ViewSettings {
            days: vec![Weekday::Mon, Weekday::Tue],
            periods: (1..=periods).map(PeriodId::Unified).collect(),
            reference_date: Some("2026-03-02".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_blocks_tile_grid() {
        let a = class("A", "Kim", &["월 1", "월 2", "화 2"]);
        let b = class("B", "Kim", &["화 3"]);
        let m = CellMatrix::new(
            &[&a, &b],
            "Kim",
            ViewAxis::Teacher,
            &[Weekday::Mon, Weekday::Tue],
            &[PeriodId::Unified(1), PeriodId::Unified(2), PeriodId::Unified(3)],
        );
        let blocks = resolve_blocks(&m, false);
        let mut seen = vec![vec![0u8; 3]; 2];
        for block in &blocks {
            for (d, p) in block.coordinates() {
                seen[d][p] += 1;
            }
        }
        assert!(seen.iter().flatten().all(|&n| n == 1));
        // Mon 1-2 merged, Mon 3, Tue 1, Tue 2, Tue 3
        assert_eq!(blocks.len(), 5);
        assert_eq!(blocks[0].row_span, 2);
    }

    #[test]
    fn test_horizontal_merge_only_when_enabled() {
        let a = class("A", "Kim", &["월 1", "화 1"]);
        let m = CellMatrix::new(
            &[&a],
            "Kim",
            ViewAxis::Teacher,
            &[Weekday::Mon, Weekday::Tue],
            &[PeriodId::Unified(1)],
        );
        assert_eq!(resolve_blocks(&m, false).len(), 2);
        let merged = resolve_blocks(&m, true);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].col_span, 2);
        assert_eq!(merged[0].merged_days, vec![Weekday::Mon, Weekday::Tue]);
    }

    #[test]
    fn test_resolve_layout_drops_empty_resources() {
        let input = TimetableInput {
            classes: vec![class("A", "Kim", &["월 1"])],
            teachers: vec![
                Teacher {
                    name: "Kim".into(),
                    bg_color: Some("#fff".into()),
                    ..Default::default()
                },
                Teacher {
                    name: "Lee".into(),
                    ..Default::default()
                },
            ],
            settings: settings(2),
            ..Default::default()
        };
        let layout = resolve_layout(&input);
        assert_eq!(layout.resources.len(), 1);
        let kim = layout.resource("Kim").unwrap();
        assert_eq!(kim.bg_color, Some("#fff"));
        assert_eq!(kim.active_days, vec![Weekday::Mon]);
        assert_eq!(layout.periods[0].label, "1교시");
        assert_eq!(layout.periods[0].time, "14:30~15:25");

        let mut input = input;
        input.settings.show_empty_resources = true;
        assert_eq!(resolve_layout(&input).resources.len(), 2);
    }

    #[test]
    fn test_roster_attached_to_class_blocks() {
        let mut a = class("A", "Kim", &["월 1"]);
        a.roster = vec![crate::types::StudentRef {
            id: "s".into(),
            name: "가".into(),
            ..Default::default()
        }];
        let input = TimetableInput {
            classes: vec![a],
            settings: settings(1),
            ..Default::default()
        };
        let layout = resolve_layout(&input);
        let grid = &layout.resources[0];
        let block = grid.block_at(0, 0).unwrap();
        assert_eq!(block.roster.as_ref().unwrap().active.len(), 1);
        assert!(grid.block_at(1, 0).unwrap().roster.is_none());

        let mut input = input;
        input.settings.show_students = false;
        let layout = resolve_layout(&input);
        assert!(layout.resources[0].blocks.iter().all(|b| b.roster.is_none()));
    }

    #[test]
    fn test_search_narrows_resources() {
        let input = TimetableInput {
            classes: vec![class("Alpha", "Kim", &["월 1"]), class("Beta", "Lee", &["월 1"])],
            settings: ViewSettings {
                search_query: Some("beta".into()),
                ..settings(1)
            },
            ..Default::default()
        };
        let layout = resolve_layout(&input);
        assert_eq!(layout.resources.len(), 1);
        assert_eq!(layout.resources[0].resource, "Lee");
    }
}
