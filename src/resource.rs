//! Effective teacher/room resolution and resource-axis enumeration.

use std::collections::BTreeSet;

use crate::period::PeriodId;
use crate::schedule::Weekday;
use crate::types::{ScheduledClass, Teacher, ViewAxis};

/// Teacher or room actually assigned to a slot.
///
/// A non-blank per-slot override wins over the class default. Returns an empty
/// string when neither is set; callers treat that as "no class here".
pub fn effective_resource<'a>(
    class: &'a ScheduledClass,
    day: Weekday,
    period: &PeriodId,
    axis: ViewAxis,
) -> &'a str {
    class
        .slot_override(axis, day, period)
        .unwrap_or_else(|| class.default_resource(axis))
}

/// Sorted, de-duplicated resources named by the classes (defaults and overrides).
pub fn collect_resources<'a, I>(classes: I, axis: ViewAxis) -> Vec<String>
where
    I: IntoIterator<Item = &'a ScheduledClass>,
{
    let mut set = BTreeSet::new();
    for class in classes {
        set.insert(class.default_resource(axis));
        let overrides = match axis {
            ViewAxis::Teacher => &class.slot_teacher_overrides,
            ViewAxis::Room => &class.slot_room_overrides,
        };
        set.extend(overrides.values().map(|v| v.trim()));
    }
    set.into_iter()
        .filter(|r| !r.is_empty())
        .map(str::to_string)
        .collect()
}

/// Resource columns for a view.
///
/// Teacher axis: the registry when one is supplied (hidden teachers dropped
/// unless `include_hidden`, ordered by `order` then name). Room axis: the
/// explicit room list when supplied. Otherwise whatever the classes name.
pub fn resource_axis(
    classes: &[&ScheduledClass],
    teachers: &[Teacher],
    rooms: &[String],
    axis: ViewAxis,
    include_hidden: bool,
) -> Vec<String> {
    match axis {
        ViewAxis::Teacher if !teachers.is_empty() => {
            let mut visible: Vec<&Teacher> = teachers
                .iter()
                .filter(|t| include_hidden || !t.is_hidden)
                .filter(|t| !t.name.trim().is_empty())
                .collect();
            visible.sort_by(|a, b| {
                a.order
                    .unwrap_or(i64::MAX)
                    .cmp(&b.order.unwrap_or(i64::MAX))
                    .then_with(|| a.name.cmp(&b.name))
            });
            dedup_keep_order(visible.iter().map(|t| t.name.trim()))
        }
        ViewAxis::Room if !rooms.is_empty() => dedup_keep_order(rooms.iter().map(|r| r.trim())),
        _ => collect_resources(classes.iter().copied(), axis),
    }
}

/// Days (from `days`, in that order) on which `resource` has at least one slot.
pub fn active_days(
    classes: &[&ScheduledClass],
    resource: &str,
    axis: ViewAxis,
    days: &[Weekday],
) -> Vec<Weekday> {
    let resource = resource.trim();
    if resource.is_empty() {
        return Vec::new();
    }
    days.iter()
        .copied()
        .filter(|day| {
            classes.iter().any(|class| {
                class
                    .slots()
                    .filter(|s| s.day == *day)
                    .any(|s| effective_resource(class, s.day, &s.period, axis) == resource)
            })
        })
        .collect()
}

fn dedup_keep_order<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for name in names.filter(|n| !n.is_empty()) {
        if !out.iter().any(|o| o == name) {
            out.push(name.to_string());
        }
    }
    out
}
