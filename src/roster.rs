//! Student roster view for one layout block.
//!
//! Students are classified against a reference date and split into display
//! sections. Anything view-specific (class label in combined blocks, newcomer
//! tier, search highlight) lives on [`RosterEntry`]; the [`StudentRef`] itself is
//! only borrowed.

use chrono::NaiveDate;
use serde::Serialize;

use crate::schedule::Weekday;
use crate::search::student_matches;
use crate::types::{ScheduledClass, StudentDirectory, StudentRef};

/// Withdrawn students stay visible for this many days.
pub const RECENT_WITHDRAWAL_DAYS: i64 = 30;
/// Upper bound (inclusive) of the first newcomer tier, in days since enrollment.
pub const FIRST_NEWCOMER_DAYS: i64 = 30;
/// Upper bound (inclusive) of the second newcomer tier.
pub const SECOND_NEWCOMER_DAYS: i64 = 60;

/// Today's date from the host clock.
#[cfg(target_arch = "wasm32")]
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    i32::try_from(now.get_full_year())
        .ok()
        .and_then(|year| NaiveDate::from_ymd_opt(year, now.get_month() + 1, now.get_date()))
        .unwrap_or_default()
}

/// Today's date from the host clock.
#[cfg(not(target_arch = "wasm32"))]
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EnrollmentStatus {
    Active,
    OnHold,
    WithdrawalScheduled,
    /// Leaving by transfer to another class on a future date
    TransferScheduled,
    Withdrawn,
    /// Already moved to another class; not listed as withdrawn
    TransferredOut,
    /// Enrollment starts after `today`
    EnrollmentScheduled,
}

impl EnrollmentStatus {
    /// Leaving on a future date but still attending.
    pub fn is_scheduled_exit(self) -> bool {
        matches!(self, Self::WithdrawalScheduled | Self::TransferScheduled)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NewcomerTier {
    First,
    Second,
}

/// Status of a student on `today`.
pub fn classify(student: &StudentRef, today: NaiveDate) -> EnrollmentStatus {
    match student.withdrawn_on() {
        Some(date) if date > today => {
            if student.is_transferred {
                EnrollmentStatus::TransferScheduled
            } else {
                EnrollmentStatus::WithdrawalScheduled
            }
        }
        Some(_) if student.is_transferred => EnrollmentStatus::TransferredOut,
        Some(_) => EnrollmentStatus::Withdrawn,
        None if student.enrolled_on().is_some_and(|date| date > today) => {
            EnrollmentStatus::EnrollmentScheduled
        }
        None if student.on_hold => EnrollmentStatus::OnHold,
        None => EnrollmentStatus::Active,
    }
}

/// Newcomer tier from the enrollment date, if the student joined recently.
pub fn newcomer_tier(student: &StudentRef, today: NaiveDate) -> Option<NewcomerTier> {
    let days = (today - student.enrolled_on()?).num_days();
    match days {
        0..=FIRST_NEWCOMER_DAYS => Some(NewcomerTier::First),
        d if d <= SECOND_NEWCOMER_DAYS && d > FIRST_NEWCOMER_DAYS => Some(NewcomerTier::Second),
        _ => None,
    }
}

/// Withdrawn on or before `today`, within the visibility window.
pub fn recently_withdrawn(student: &StudentRef, today: NaiveDate) -> bool {
    student
        .withdrawn_on()
        .map(|date| (0..=RECENT_WITHDRAWAL_DAYS).contains(&(today - date).num_days()))
        .unwrap_or(false)
}

/// One student line in a block roster.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry<'a> {
    pub student: &'a StudentRef,
    pub status: EnrollmentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newcomer: Option<NewcomerTier>,
    /// Owning class name, set only in combined blocks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_label: Option<&'a str>,
    pub transferred_in: bool,
    /// Matches the active search query
    pub highlighted: bool,
}

/// Students who attend only some of a merged block's days, for one of those days.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRoster<'a> {
    pub day: Weekday,
    pub entries: Vec<RosterEntry<'a>>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockRoster<'a> {
    /// Attending every merged day; includes scheduled exits
    pub active: Vec<RosterEntry<'a>>,
    /// Partial attendance, one list per merged day that has any
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub by_day: Vec<DayRoster<'a>>,
    pub on_hold: Vec<RosterEntry<'a>>,
    pub withdrawn: Vec<RosterEntry<'a>>,
    pub withdrawal_scheduled: Vec<RosterEntry<'a>>,
    /// Starting on a future date; not counted as attending
    pub enrollment_scheduled: Vec<RosterEntry<'a>>,
}

impl BlockRoster<'_> {
    /// Students shown as attending (main list plus partial-attendance lists).
    pub fn attending_count(&self) -> usize {
        self.active.len() + self.by_day.iter().map(|d| d.entries.len()).sum::<usize>()
    }
}

/// Inputs that shape a roster besides the block itself.
#[derive(Debug, Clone, Copy)]
pub struct RosterOptions<'q> {
    pub today: NaiveDate,
    pub query: Option<&'q str>,
    pub show_withdrawn: bool,
}

/// Build the roster for a block covering `merged_days`.
pub fn block_roster<'a>(
    classes: &[&'a ScheduledClass],
    merged_days: &[Weekday],
    directory: &StudentDirectory<'a>,
    options: RosterOptions<'_>,
) -> BlockRoster<'a> {
    let combined = classes
        .first()
        .is_some_and(|first| classes.iter().any(|c| c.name != first.name));
    let mut roster = BlockRoster::default();
    let mut partial: Vec<(RosterEntry<'a>, Vec<Weekday>)> = Vec::new();
    let mut seen: Vec<(&str, &str)> = Vec::new();

    for &class in classes {
        for student in directory.roster_of(class) {
            // Split records of one class may list the same student
            let key = (class.name.as_str(), student.id.as_str());
            if seen.contains(&key) {
                continue;
            }
            seen.push(key);
            let status = classify(student, options.today);
            let entry = RosterEntry {
                student,
                status,
                newcomer: (status == EnrollmentStatus::Active)
                    .then(|| newcomer_tier(student, options.today))
                    .flatten(),
                class_label: combined.then_some(class.name.as_str()),
                transferred_in: student.is_transferred_in,
                highlighted: options
                    .query
                    .is_some_and(|q| student_matches(student, q)),
            };

            match status {
                EnrollmentStatus::Withdrawn => {
                    if options.show_withdrawn && recently_withdrawn(student, options.today) {
                        roster.withdrawn.push(entry);
                    }
                    continue;
                }
                EnrollmentStatus::OnHold => {
                    roster.on_hold.push(entry);
                    continue;
                }
                EnrollmentStatus::TransferredOut => continue,
                _ => {}
            }

            let days: Vec<Weekday> = merged_days
                .iter()
                .copied()
                .filter(|d| student.attends(*d))
                .collect();
            if days.is_empty() && !merged_days.is_empty() {
                continue;
            }
            if status == EnrollmentStatus::EnrollmentScheduled {
                roster.enrollment_scheduled.push(entry);
                continue;
            }
            if status.is_scheduled_exit() {
                roster.withdrawal_scheduled.push(entry.clone());
            }
            if days.len() == merged_days.len() {
                roster.active.push(entry);
            } else {
                partial.push((entry, days));
            }
        }
    }

    for day in merged_days {
        let mut entries: Vec<RosterEntry<'a>> = partial
            .iter()
            .filter(|(_, days)| days.contains(day))
            .map(|(entry, _)| entry.clone())
            .collect();
        if !entries.is_empty() {
            sort_entries(&mut entries);
            roster.by_day.push(DayRoster { day: *day, entries });
        }
    }
    sort_entries(&mut roster.active);
    sort_entries(&mut roster.on_hold);
    sort_entries(&mut roster.withdrawn);
    sort_entries(&mut roster.withdrawal_scheduled);
    sort_entries(&mut roster.enrollment_scheduled);
    roster
}

fn sort_entries(entries: &mut [RosterEntry<'_>]) {
    entries.sort_by(|a, b| {
        a.student
            .name
            .cmp(&b.student.name)
            .then_with(|| a.student.id.cmp(&b.student.id))
    });
}
