use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::StudentRef;
use crate::period::PeriodId;
use crate::schedule::{parse_slot, ScheduleSlot, Weekday};

/// Which resource a timetable is laid out by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewAxis {
    #[default]
    Teacher,
    Room,
}

/// A class as stored in the document store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduledClass {
    pub id: String,
    #[serde(alias = "className")]
    pub name: String,
    pub subject: String,
    #[serde(alias = "teacher")]
    pub default_teacher: String,
    #[serde(alias = "room", skip_serializing_if = "Option::is_none")]
    pub default_room: Option<String>,
    /// Entries such as `"월 7"` or legacy `"월 4-1"`
    pub schedule: Vec<String>,
    /// Per-slot teacher, keyed by a compact slot key (`"월7"`, `"월-4-1"`)
    #[serde(alias = "slotTeachers", skip_serializing_if = "BTreeMap::is_empty")]
    pub slot_teacher_overrides: BTreeMap<String, String>,
    /// Per-slot room, same keys as the teacher overrides
    #[serde(alias = "slotRooms", skip_serializing_if = "BTreeMap::is_empty")]
    pub slot_room_overrides: BTreeMap<String, String>,
    /// Embedded roster; superseded by `student_ids` when those are present
    #[serde(alias = "studentList", skip_serializing_if = "Vec::is_empty")]
    pub roster: Vec<StudentRef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub student_ids: Vec<String>,
}

impl ScheduledClass {
    /// Parsed schedule; unusable entries are skipped.
    pub fn slots(&self) -> impl Iterator<Item = ScheduleSlot> + '_ {
        self.schedule.iter().filter_map(|entry| parse_slot(entry))
    }

    /// Whether the class meets at this slot.
    pub fn has_slot(&self, day: Weekday, period: &PeriodId) -> bool {
        self.slots().any(|s| s.day == day && s.period == *period)
    }

    /// Days on which the class meets, in week order.
    pub fn days(&self) -> Vec<Weekday> {
        let mut days: Vec<Weekday> = self.slots().map(|s| s.day).collect();
        days.sort_unstable();
        days.dedup();
        days
    }

    /// Non-blank override for the slot on the given axis.
    pub fn slot_override(&self, axis: ViewAxis, day: Weekday, period: &PeriodId) -> Option<&str> {
        let overrides = match axis {
            ViewAxis::Teacher => &self.slot_teacher_overrides,
            ViewAxis::Room => &self.slot_room_overrides,
        };
        overrides.iter().find_map(|(key, value)| {
            let slot = parse_slot(key)?;
            let value = value.trim();
            (slot.day == day && slot.period == *period && !value.is_empty()).then_some(value)
        })
    }

    /// Default resource for the axis, trimmed; empty when unset.
    pub fn default_resource(&self, axis: ViewAxis) -> &str {
        match axis {
            ViewAxis::Teacher => self.default_teacher.trim(),
            ViewAxis::Room => self.default_room.as_deref().map_or("", str::trim),
        }
    }

    /// Whether the class draws from the student registry instead of its embedded roster.
    pub fn uses_student_ids(&self) -> bool {
        !self.student_ids.is_empty()
    }

    /// Whether the student is on this class, by id list or embedded roster.
    pub fn has_student(&self, student_id: &str) -> bool {
        self.student_ids.iter().any(|id| id == student_id)
            || self.roster.iter().any(|s| s.id == student_id)
    }
}

/// Teacher registry entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Teacher {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub english_name: Option<String>,
    /// Hidden teachers are left off the timetable
    pub is_hidden: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_room: Option<String>,
}
