//! Case-insensitive timetable search.

use crate::types::{ScheduledClass, StudentDirectory, StudentRef};

fn contains_folded(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Student name (or English name) contains the query.
pub fn student_matches(student: &StudentRef, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return false;
    }
    contains_folded(&student.name, &query)
        || student
            .english_name
            .as_deref()
            .is_some_and(|n| contains_folded(n, &query))
}

/// Class name, default teacher, or an enrolled student's name contains the query.
///
/// An empty query matches every class.
pub fn class_matches(
    class: &ScheduledClass,
    query: &str,
    directory: &StudentDirectory<'_>,
) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    contains_folded(&class.name, &needle)
        || contains_folded(&class.default_teacher, &needle)
        || directory
            .roster_of(class)
            .iter()
            .any(|s| student_matches(s, query))
}

/// Classes matching `query`, in input order.
pub fn filter_classes<'a>(
    classes: &'a [ScheduledClass],
    query: Option<&str>,
    directory: &StudentDirectory<'a>,
) -> Vec<&'a ScheduledClass> {
    match query {
        Some(q) => classes
            .iter()
            .filter(|c| class_matches(c, q, directory))
            .collect(),
        None => classes.iter().collect(),
    }
}
