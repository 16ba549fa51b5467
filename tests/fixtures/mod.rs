//! Test fixtures for building timetable input documents in memory.
//!
//! This module provides builders for classes, students and whole inputs,
//! useful for testing the resolver with known schedules.
//!
//! # Example
//!
//! ```rust,ignore
//! use fixtures::{ClassBuilder, InputBuilder};
//!
//! let input = InputBuilder::new()
//!     .class(ClassBuilder::new("A").teacher("Kim").slots(&["월 1", "월 2"]))
//!     .periods(&[1, 2])
//!     .build();
//!
//! let layout = timegrid::resolve_layout(&input);
//! ```
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use timegrid::period::PeriodId;
use timegrid::schedule::Weekday;
use timegrid::{ScheduledClass, StudentRef, Teacher, TimetableInput, ViewAxis, ViewSettings};

/// Reference date used by every fixture unless overridden.
pub const TODAY: &str = "2026-03-02";

// ============================================================================
// Class Builder
// ============================================================================

/// Builder for a `ScheduledClass`.
#[derive(Debug, Clone)]
pub struct ClassBuilder {
    class: ScheduledClass,
}

impl ClassBuilder {
    /// New class; the id defaults to the lowercased name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            class: ScheduledClass {
                id: name.to_lowercase(),
                name: name.to_string(),
                ..Default::default()
            },
        }
    }

    #[must_use]
    pub fn id(mut self, id: &str) -> Self {
        self.class.id = id.to_string();
        self
    }

    #[must_use]
    pub fn subject(mut self, subject: &str) -> Self {
        self.class.subject = subject.to_string();
        self
    }

    #[must_use]
    pub fn teacher(mut self, teacher: &str) -> Self {
        self.class.default_teacher = teacher.to_string();
        self
    }

    #[must_use]
    pub fn room(mut self, room: &str) -> Self {
        self.class.default_room = Some(room.to_string());
        self
    }

    /// Schedule entries such as `"월 1"` or `"월 1-2"`.
    #[must_use]
    pub fn slots(mut self, entries: &[&str]) -> Self {
        self.class
            .schedule
            .extend(entries.iter().map(|e| e.to_string()));
        self
    }

    #[must_use]
    pub fn slot_teacher(mut self, key: &str, teacher: &str) -> Self {
        self.class
            .slot_teacher_overrides
            .insert(key.to_string(), teacher.to_string());
        self
    }

    #[must_use]
    pub fn slot_room(mut self, key: &str, room: &str) -> Self {
        self.class
            .slot_room_overrides
            .insert(key.to_string(), room.to_string());
        self
    }

    #[must_use]
    pub fn student(mut self, student: StudentBuilder) -> Self {
        self.class.roster.push(student.build());
        self
    }

    #[must_use]
    pub fn student_ids(mut self, ids: &[&str]) -> Self {
        self.class
            .student_ids
            .extend(ids.iter().map(|id| id.to_string()));
        self
    }

    #[must_use]
    pub fn build(self) -> ScheduledClass {
        self.class
    }
}

// ============================================================================
// Student Builder
// ============================================================================

/// Builder for a `StudentRef`.
#[derive(Debug, Clone)]
pub struct StudentBuilder {
    student: StudentRef,
}

impl StudentBuilder {
    #[must_use]
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            student: StudentRef {
                id: id.to_string(),
                name: name.to_string(),
                ..Default::default()
            },
        }
    }

    #[must_use]
    pub fn attends(mut self, days: &[Weekday]) -> Self {
        self.student.attendance_days = Some(days.to_vec());
        self
    }

    #[must_use]
    pub fn enrolled(mut self, date: &str) -> Self {
        self.student.enrollment_date = Some(date.to_string());
        self
    }

    #[must_use]
    pub fn withdrawn(mut self, date: &str) -> Self {
        self.student.withdrawal_date = Some(date.to_string());
        self
    }

    #[must_use]
    pub fn on_hold(mut self) -> Self {
        self.student.on_hold = true;
        self
    }

    #[must_use]
    pub fn transferred_in(mut self) -> Self {
        self.student.is_transferred_in = true;
        self
    }

    #[must_use]
    pub fn transferring_out(mut self) -> Self {
        self.student.is_transferred = true;
        self
    }

    #[must_use]
    pub fn build(self) -> StudentRef {
        self.student
    }
}

// ============================================================================
// Input Builder
// ============================================================================

/// Builder for a whole `TimetableInput`.
#[derive(Debug, Clone)]
pub struct InputBuilder {
    input: TimetableInput,
}

impl Default for InputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBuilder {
    /// Empty input pinned to [`TODAY`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            input: TimetableInput {
                settings: ViewSettings {
                    reference_date: Some(TODAY.to_string()),
                    ..Default::default()
                },
                ..Default::default()
            },
        }
    }

    #[must_use]
    pub fn class(mut self, class: ClassBuilder) -> Self {
        self.input.classes.push(class.build());
        self
    }

    #[must_use]
    pub fn teacher(mut self, teacher: Teacher) -> Self {
        self.input.teachers.push(teacher);
        self
    }

    #[must_use]
    pub fn student(mut self, student: StudentBuilder) -> Self {
        self.input.students.push(student.build());
        self
    }

    #[must_use]
    pub fn rooms(mut self, rooms: &[&str]) -> Self {
        self.input.rooms = rooms.iter().map(|r| r.to_string()).collect();
        self
    }

    #[must_use]
    pub fn days(mut self, days: &[Weekday]) -> Self {
        self.input.settings.days = days.to_vec();
        self
    }

    #[must_use]
    pub fn periods(mut self, ids: &[u32]) -> Self {
        self.input.settings.periods = ids.iter().copied().map(PeriodId::Unified).collect();
        self
    }

    #[must_use]
    pub fn axis(mut self, axis: ViewAxis) -> Self {
        self.input.settings.axis = axis;
        self
    }

    #[must_use]
    pub fn merge_days(mut self) -> Self {
        self.input.settings.merge_adjacent_days = true;
        self
    }

    #[must_use]
    pub fn settings(mut self, edit: impl FnOnce(&mut ViewSettings)) -> Self {
        edit(&mut self.input.settings);
        self
    }

    #[must_use]
    pub fn build(self) -> TimetableInput {
        self.input
    }
}

/// Teacher registry entry with a name and display order.
#[must_use]
pub fn teacher(name: &str, order: Option<i64>) -> Teacher {
    Teacher {
        id: name.to_lowercase(),
        name: name.to_string(),
        order,
        ..Default::default()
    }
}
