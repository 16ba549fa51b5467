//! Period tables and period-id normalization.
//!
//! Two id schemes describe the same weekly grid:
//! - unified ids `"1"`..`"10"`, one integer per teaching slot
//! - legacy math ids `"<group>-<position>"`, where each group holds two slots
//!
//! Tokens that fit neither scheme are kept verbatim as
//! [`PeriodId::Unrecognized`] so they can still be displayed.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of two-slot groups in the legacy math scheme.
pub const LEGACY_GROUP_COUNT: u32 = 4;

/// Highest unified id that has a legacy spelling.
pub const LEGACY_MAX_UNIFIED: u32 = LEGACY_GROUP_COUNT * 2;

/// Suffix used for period labels ("3교시").
pub const PERIOD_SUFFIX: &str = "교시";

/// Which period table a timetable uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectTable {
    /// 8 periods of 55 minutes, paired into 4 groups
    #[default]
    Math,
    /// 10 periods of 40-55 minutes
    English,
}

impl SubjectTable {
    /// Pick the table for a class subject label ("영어", "english", "수학", ...).
    pub fn for_subject(subject: &str) -> Self {
        let s = subject.trim();
        if s == "영어" || s.eq_ignore_ascii_case("english") {
            Self::English
        } else {
            Self::Math
        }
    }

    /// The period rows of this table.
    pub fn periods(self) -> &'static [PeriodInfo] {
        match self {
            Self::Math => &MATH_PERIODS,
            Self::English => &ENGLISH_PERIODS,
        }
    }

    /// Default period axis for this table.
    pub fn default_axis(self) -> Vec<PeriodId> {
        self.periods()
            .iter()
            .map(|p| PeriodId::Unified(p.id))
            .collect()
    }
}

/// One row of a period table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodInfo {
    pub id: u32,
    pub start_time: &'static str,
    pub end_time: &'static str,
}

impl PeriodInfo {
    const fn new(id: u32, start_time: &'static str, end_time: &'static str) -> Self {
        Self {
            id,
            start_time,
            end_time,
        }
    }

    /// "14:30~15:25"
    pub fn time(&self) -> String {
        format!("{}~{}", self.start_time, self.end_time)
    }

    /// "1교시"
    pub fn label(&self) -> String {
        format!("{}{PERIOD_SUFFIX}", self.id)
    }
}

pub const MATH_PERIODS: [PeriodInfo; 8] = [
    PeriodInfo::new(1, "14:30", "15:25"),
    PeriodInfo::new(2, "15:25", "16:20"),
    PeriodInfo::new(3, "16:20", "17:15"),
    PeriodInfo::new(4, "17:15", "18:10"),
    PeriodInfo::new(5, "18:20", "19:15"),
    PeriodInfo::new(6, "19:15", "20:10"),
    PeriodInfo::new(7, "20:10", "21:05"),
    PeriodInfo::new(8, "21:05", "22:00"),
];

pub const ENGLISH_PERIODS: [PeriodInfo; 10] = [
    PeriodInfo::new(1, "14:20", "15:00"),
    PeriodInfo::new(2, "15:00", "15:40"),
    PeriodInfo::new(3, "15:40", "16:20"),
    PeriodInfo::new(4, "16:20", "17:00"),
    PeriodInfo::new(5, "17:00", "17:40"),
    PeriodInfo::new(6, "17:40", "18:20"),
    PeriodInfo::new(7, "18:20", "19:15"),
    PeriodInfo::new(8, "19:15", "20:10"),
    PeriodInfo::new(9, "20:10", "21:05"),
    PeriodInfo::new(10, "21:05", "22:00"),
];

/// Time span of each math group (1+2, 3+4, 5+6, 7+8).
pub const MATH_GROUP_TIMES: [(&str, &str); 4] = [
    ("14:30", "16:20"),
    ("16:20", "18:10"),
    ("18:20", "20:10"),
    ("20:10", "22:00"),
];

/// Look up a period row.
pub fn period_info(id: u32, table: SubjectTable) -> Option<&'static PeriodInfo> {
    table.periods().iter().find(|p| p.id == id)
}

/// Time range for a period, or an empty string when the table has no such row.
pub fn period_time(period: &PeriodId, table: SubjectTable) -> String {
    period
        .unified()
        .and_then(|id| period_info(id, table))
        .map(PeriodInfo::time)
        .unwrap_or_default()
}

/// Display label; unknown ids still get the "교시" suffix.
pub fn period_label(period: &PeriodId) -> String {
    format!("{period}{PERIOD_SUFFIX}")
}

/// Position of a math period inside its group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupPosition {
    First,
    Second,
}

impl GroupPosition {
    /// 1 or 2, as written after the dash of a legacy id.
    pub fn number(self) -> u32 {
        match self {
            Self::First => 1,
            Self::Second => 2,
        }
    }
}

/// A math period's group membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodGroup {
    pub group: u32,
    pub position: GroupPosition,
}

/// Group of a unified math period (1 -> group 1 first, 4 -> group 2 second).
pub fn math_period_group(id: u32) -> Option<PeriodGroup> {
    if id == 0 || id > LEGACY_MAX_UNIFIED {
        return None;
    }
    let position = if id % 2 == 1 {
        GroupPosition::First
    } else {
        GroupPosition::Second
    };
    Some(PeriodGroup {
        group: id.div_ceil(2),
        position,
    })
}

/// "14:30~16:20" for group 1.
pub fn math_group_time(group: u32) -> Option<String> {
    let idx = usize::try_from(group.checked_sub(1)?).ok()?;
    MATH_GROUP_TIMES
        .get(idx)
        .map(|(start, end)| format!("{start}~{end}"))
}

/// A normalized period identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PeriodId {
    /// A slot on the unified integer scale.
    Unified(u32),
    /// A token that is neither unified nor legacy, kept verbatim.
    Unrecognized(String),
}

impl PeriodId {
    /// Normalize a period token from a schedule entry or view setting.
    ///
    /// Accepts unified ids ("7"), legacy ids ("4-1"), labelled ids ("7교시")
    /// and numeric ids carrying a sub-period suffix ("5-3" -> 5).
    pub fn parse(token: &str) -> Self {
        let trimmed = token.trim();
        let bare = trimmed
            .strip_suffix(PERIOD_SUFFIX)
            .map_or(trimmed, str::trim_end);

        if let Some(id) = legacy_to_unified(bare) {
            return Self::Unified(id);
        }
        if let Some(id) = parse_positive(bare) {
            return Self::Unified(id);
        }
        if let Some(id) = bare.split_once('-').and_then(|(head, _)| parse_positive(head)) {
            log::trace!("dropping sub-period suffix from {trimmed:?}");
            return Self::Unified(id);
        }

        log::debug!("unrecognized period token {trimmed:?}");
        Self::Unrecognized(trimmed.to_string())
    }

    /// The unified integer, when there is one.
    pub fn unified(&self) -> Option<u32> {
        match self {
            Self::Unified(id) => Some(*id),
            Self::Unrecognized(_) => None,
        }
    }

    /// Legacy spelling when the id has one, otherwise the unified/verbatim form.
    pub fn to_legacy(&self) -> String {
        to_legacy_period(&self.to_string())
    }
}

impl fmt::Display for PeriodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unified(id) => write!(f, "{id}"),
            Self::Unrecognized(token) => f.write_str(token),
        }
    }
}

impl From<&str> for PeriodId {
    fn from(token: &str) -> Self {
        Self::parse(token)
    }
}

impl Serialize for PeriodId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PeriodId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u32),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(0) => Self::Unrecognized("0".to_string()),
            Raw::Number(id) => Self::Unified(id),
            Raw::Text(token) => Self::parse(&token),
        })
    }
}

fn parse_positive(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<u32>().ok().filter(|n| *n > 0)
}

fn legacy_to_unified(token: &str) -> Option<u32> {
    let (group, position) = token.split_once('-')?;
    let group = parse_positive(group)?;
    let position = parse_positive(position)?;
    if group > LEGACY_GROUP_COUNT || position > 2 {
        return None;
    }
    Some((group - 1) * 2 + position)
}

/// Convert a legacy id ("2-1") to the unified scale ("3").
///
/// Anything that is not a legacy id is returned unchanged.
pub fn to_unified_period(token: &str) -> String {
    match legacy_to_unified(token.trim()) {
        Some(id) => id.to_string(),
        None => token.to_string(),
    }
}

/// Convert a unified id ("3") to its legacy spelling ("2-1").
///
/// Ids outside the legacy range are returned unchanged.
pub fn to_legacy_period(id: &str) -> String {
    match parse_positive(id.trim()).and_then(math_period_group) {
        Some(PeriodGroup { group, position }) => format!("{group}-{}", position.number()),
        None => id.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_to_unified() {
        assert_eq!(to_unified_period("1-1"), "1");
        assert_eq!(to_unified_period("1-2"), "2");
        assert_eq!(to_unified_period("2-1"), "3");
        assert_eq!(to_unified_period("2-2"), "4");
        assert_eq!(to_unified_period("4-2"), "8");
    }

    #[test]
    fn test_unified_passes_through() {
        assert_eq!(to_unified_period("1"), "1");
        assert_eq!(to_unified_period("5"), "5");
        assert_eq!(to_unified_period("unknown"), "unknown");
        assert_eq!(to_unified_period("5-3"), "5-3");
    }

    #[test]
    fn test_unified_to_legacy() {
        assert_eq!(to_legacy_period("1"), "1-1");
        assert_eq!(to_legacy_period("4"), "2-2");
        assert_eq!(to_legacy_period("8"), "4-2");
        assert_eq!(to_legacy_period("10"), "10");
        assert_eq!(to_legacy_period("x"), "x");
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!(PeriodId::parse("7"), PeriodId::Unified(7));
        assert_eq!(PeriodId::parse("4-1"), PeriodId::Unified(7));
        assert_eq!(PeriodId::parse("7교시"), PeriodId::Unified(7));
        assert_eq!(PeriodId::parse(" 10 "), PeriodId::Unified(10));
        assert_eq!(PeriodId::parse("5-3"), PeriodId::Unified(5));
        assert_eq!(
            PeriodId::parse("lunch"),
            PeriodId::Unrecognized("lunch".to_string())
        );
        assert_eq!(PeriodId::parse("0"), PeriodId::Unrecognized("0".to_string()));
    }

    #[test]
    fn test_period_time_lookup() {
        assert_eq!(period_time(&PeriodId::Unified(1), SubjectTable::Math), "14:30~15:25");
        assert_eq!(period_time(&PeriodId::Unified(8), SubjectTable::Math), "21:05~22:00");
        assert_eq!(period_time(&PeriodId::Unified(1), SubjectTable::English), "14:20~15:00");
        assert_eq!(period_time(&PeriodId::Unified(10), SubjectTable::English), "21:05~22:00");
        assert_eq!(period_time(&PeriodId::Unified(99), SubjectTable::Math), "");
    }

    #[test]
    fn test_period_label_fallback() {
        assert_eq!(period_label(&PeriodId::Unified(4)), "4교시");
        assert_eq!(period_label(&PeriodId::Unified(99)), "99교시");
    }

    #[test]
    fn test_math_groups() {
        let g = math_period_group(1).unwrap();
        assert_eq!((g.group, g.position), (1, GroupPosition::First));
        let g = math_period_group(2).unwrap();
        assert_eq!((g.group, g.position), (1, GroupPosition::Second));
        let g = math_period_group(7).unwrap();
        assert_eq!((g.group, g.position), (4, GroupPosition::First));
        assert!(math_period_group(9).is_none());
        assert_eq!(math_group_time(4).as_deref(), Some("20:10~22:00"));
        assert!(math_group_time(0).is_none());
    }

    #[test]
    fn test_deserialize_number_or_string() {
        let ids: Vec<PeriodId> = serde_json::from_str(r#"[1, "2", "3-1", "x"]"#).unwrap();
        assert_eq!(
            ids,
            vec![
                PeriodId::Unified(1),
                PeriodId::Unified(2),
                PeriodId::Unified(5),
                PeriodId::Unrecognized("x".to_string()),
            ]
        );
        assert_eq!(serde_json::to_string(&ids[2]).unwrap(), "\"5\"");
    }
}
