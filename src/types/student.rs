use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::schedule::Weekday;

/// Date format used by the document store ("2026-03-02").
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A student as seen from a class roster. Read-only for this crate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentRef {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub english_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    /// Days the student comes in; absent or empty means every class day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendance_days: Option<Vec<Weekday>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub withdrawal_date: Option<String>,
    pub on_hold: bool,
    /// Joined this class by transfer from another class
    pub is_transferred_in: bool,
    /// Leaving this class by transfer (paired with a withdrawal date)
    pub is_transferred: bool,
}

impl StudentRef {
    /// Whether the student attends on the given day.
    pub fn attends(&self, day: Weekday) -> bool {
        match &self.attendance_days {
            Some(days) if !days.is_empty() => days.contains(&day),
            _ => true,
        }
    }

    pub fn enrolled_on(&self) -> Option<NaiveDate> {
        parse_date(self.enrollment_date.as_deref())
    }

    pub fn withdrawn_on(&self) -> Option<NaiveDate> {
        parse_date(self.withdrawal_date.as_deref())
    }
}

/// Parse a store date; malformed values are treated as missing.
pub fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }
    // Some records carry a time component ("2026-03-02T00:00:00")
    let day = value.get(..10).unwrap_or(value);
    match NaiveDate::parse_from_str(day, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            log::debug!("ignoring malformed date {value:?}: {e}");
            None
        }
    }
}
