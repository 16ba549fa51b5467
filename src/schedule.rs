//! Schedule entry parsing and schedule labels.
//!
//! A class schedule is a list of strings such as `"월 7"`, `"목 4-1"` or
//! `"화 3교시"`. Per-slot override maps use compact keys (`"월7"`, `"월-4-1"`).
//! Both are parsed into [`ScheduleSlot`]s here; entries that cannot be parsed
//! are skipped rather than rejected.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::period::{
    math_group_time, math_period_group, period_info, GroupPosition, PeriodGroup, PeriodId,
    SubjectTable, LEGACY_GROUP_COUNT, PERIOD_SUFFIX,
};

/// Label shown for a class without any usable schedule entry.
pub const UNSCHEDULED_LABEL: &str = "시간 미정";

/// Day of the week, serialized with its Korean label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    #[serde(rename = "월", alias = "Mon", alias = "mon")]
    Mon,
    #[serde(rename = "화", alias = "Tue", alias = "tue")]
    Tue,
    #[serde(rename = "수", alias = "Wed", alias = "wed")]
    Wed,
    #[serde(rename = "목", alias = "Thu", alias = "thu")]
    Thu,
    #[serde(rename = "금", alias = "Fri", alias = "fri")]
    Fri,
    #[serde(rename = "토", alias = "Sat", alias = "sat")]
    Sat,
    #[serde(rename = "일", alias = "Sun", alias = "sun")]
    Sun,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    pub const WEEKDAYS: [Weekday; 5] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Weekday::Mon => "월",
            Weekday::Tue => "화",
            Weekday::Wed => "수",
            Weekday::Thu => "목",
            Weekday::Fri => "금",
            Weekday::Sat => "토",
            Weekday::Sun => "일",
        }
    }

    /// Parse a Korean day label or an English abbreviation.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.iter().copied().find(|d| {
            d.label() == label || format!("{d:?}").eq_ignore_ascii_case(label)
        })
    }

    pub fn is_weekend(self) -> bool {
        matches!(self, Weekday::Sat | Weekday::Sun)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A normalized (day, period) coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ScheduleSlot {
    pub day: Weekday,
    pub period: PeriodId,
}

impl ScheduleSlot {
    pub fn new(day: Weekday, period: PeriodId) -> Self {
        Self { day, period }
    }
}

/// Parse one schedule entry or override key.
///
/// Returns `None` when the day is unknown or the period part is empty.
pub fn parse_slot(entry: &str) -> Option<ScheduleSlot> {
    let entry = entry.trim();
    let (day, period) = match entry.split_once(char::is_whitespace) {
        Some((day, period)) => (day, period),
        None => {
            let first = entry.chars().next()?;
            entry.split_at(first.len_utf8())
        }
    };

    let Some(day) = Weekday::from_label(day) else {
        log::debug!("ignoring schedule entry with unknown day: {entry:?}");
        return None;
    };
    let period = period.trim().trim_start_matches('-').trim();
    if period.is_empty() {
        log::debug!("ignoring schedule entry without period: {entry:?}");
        return None;
    }

    Some(ScheduleSlot::new(day, PeriodId::parse(period)))
}

/// Parse every usable entry of a schedule, in order.
pub fn parse_schedule<S: AsRef<str>>(schedule: &[S]) -> Vec<ScheduleSlot> {
    schedule
        .iter()
        .filter_map(|entry| parse_slot(entry.as_ref()))
        .collect()
}

/// Compact schedule label.
///
/// Math: `"월 7", "월 8", "목 7", "목 8"` becomes `"월목 4교시"` (two periods per
/// group). English: `"월 1", "월 2", "월 3"` becomes `"월 1~3교시"`.
pub fn format_schedule_compact<S: AsRef<str>>(
    schedule: &[S],
    table: SubjectTable,
    show_time: bool,
) -> String {
    let mut day_periods: BTreeMap<Weekday, Vec<u32>> = BTreeMap::new();
    for slot in parse_schedule(schedule) {
        let Some(id) = slot.period.unified() else {
            continue;
        };
        if period_info(id, table).is_none() {
            continue;
        }
        day_periods.entry(slot.day).or_default().push(id);
    }

    if day_periods.is_empty() {
        return UNSCHEDULED_LABEL.to_string();
    }

    // (label, days) in order of first day
    let mut groups: Vec<(String, Vec<Weekday>)> = Vec::new();
    for (day, mut periods) in day_periods {
        periods.sort_unstable();
        periods.dedup();
        let label = match table {
            SubjectTable::Math => math_periods_label(&periods, show_time),
            SubjectTable::English => english_periods_label(&periods, show_time),
        };
        match groups.iter_mut().find(|(l, _)| *l == label) {
            Some((_, days)) => days.push(day),
            None => groups.push((label, vec![day])),
        }
    }

    groups
        .iter()
        .map(|(label, days)| {
            let days: String = days.iter().map(|d| d.label()).collect();
            format!("{days} {label}")
        })
        .collect::<Vec<_>>()
        .join(" / ")
}

/// Detailed schedule label: `"월 20:10~21:05, 월 21:05~22:00"`.
pub fn format_schedule_detailed<S: AsRef<str>>(schedule: &[S], table: SubjectTable) -> String {
    if schedule.is_empty() {
        return UNSCHEDULED_LABEL.to_string();
    }

    schedule
        .iter()
        .map(|entry| {
            let entry = entry.as_ref();
            parse_slot(entry)
                .and_then(|slot| {
                    let id = slot.period.unified()?;
                    let info = period_info(id, table)?;
                    Some(format!("{} {}", slot.day, info.time()))
                })
                .unwrap_or_else(|| entry.to_string())
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn time_range(periods: &[u32], table: SubjectTable) -> Option<String> {
    let first = period_info(*periods.first()?, table)?;
    let last = period_info(*periods.last()?, table)?;
    Some(format!("{}~{}", first.start_time, last.end_time))
}

fn math_periods_label(periods: &[u32], show_time: bool) -> String {
    let members: Vec<PeriodGroup> = periods.iter().filter_map(|p| math_period_group(*p)).collect();
    let complete: Vec<u32> = (1..=LEGACY_GROUP_COUNT)
        .filter(|&group| {
            [GroupPosition::First, GroupPosition::Second]
                .into_iter()
                .all(|position| members.contains(&PeriodGroup { group, position }))
        })
        .collect();
    let all_grouped = members.len() == periods.len()
        && members.iter().all(|m| complete.contains(&m.group));

    if all_grouped && !complete.is_empty() {
        let parts: Vec<String> = complete
            .iter()
            .map(|g| {
                if show_time {
                    math_group_time(*g).unwrap_or_default()
                } else {
                    format!("{g}{PERIOD_SUFFIX}")
                }
            })
            .collect();
        return parts.join(", ");
    }

    time_range(periods, SubjectTable::Math).unwrap_or_else(|| UNSCHEDULED_LABEL.to_string())
}

fn english_periods_label(periods: &[u32], show_time: bool) -> String {
    if show_time {
        return time_range(periods, SubjectTable::English)
            .unwrap_or_else(|| UNSCHEDULED_LABEL.to_string());
    }

    match periods {
        [] => UNSCHEDULED_LABEL.to_string(),
        [only] => format!("{only}{PERIOD_SUFFIX}"),
        [first, .., last] => {
            let consecutive = periods.windows(2).all(|w| match w {
                [a, b] => *b == a + 1,
                _ => true,
            });
            if consecutive {
                format!("{first}~{last}{PERIOD_SUFFIX}")
            } else {
                periods
                    .iter()
                    .map(|p| format!("{p}{PERIOD_SUFFIX}"))
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        }
    }
}
