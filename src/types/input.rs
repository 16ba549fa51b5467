use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use super::{ScheduledClass, StudentRef, Teacher, ViewSettings};
use crate::error::Result;

/// Everything one layout pass reads: a snapshot handed over by the
/// document-store query layer plus the view settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimetableInput {
    pub classes: Vec<ScheduledClass>,
    pub teachers: Vec<Teacher>,
    /// Student registry used by classes that carry `studentIds`
    pub students: Vec<StudentRef>,
    /// Explicit room list for the room axis
    pub rooms: Vec<String>,
    pub settings: ViewSettings,
}

impl TimetableInput {
    /// Decode an input document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and decode an input document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    /// Registry lookup by student id.
    pub fn student_directory(&self) -> StudentDirectory<'_> {
        StudentDirectory::new(&self.students)
    }

    pub fn class(&self, id: &str) -> Option<&ScheduledClass> {
        self.classes.iter().find(|c| c.id == id)
    }
}

/// Id index over the student registry.
#[derive(Debug, Clone, Default)]
pub struct StudentDirectory<'a> {
    by_id: HashMap<&'a str, &'a StudentRef>,
}

impl<'a> StudentDirectory<'a> {
    pub fn new(students: &'a [StudentRef]) -> Self {
        Self {
            by_id: students.iter().map(|s| (s.id.as_str(), s)).collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&'a StudentRef> {
        self.by_id.get(id).copied()
    }

    /// Roster of a class: registry entries for `studentIds` when present,
    /// otherwise the embedded roster. Unknown ids are skipped.
    pub fn roster_of(&self, class: &'a ScheduledClass) -> Vec<&'a StudentRef> {
        if class.uses_student_ids() {
            class
                .student_ids
                .iter()
                .filter_map(|id| {
                    let found = self.get(id);
                    if found.is_none() {
                        log::debug!("class {} lists unknown student {id}", class.id);
                    }
                    found
                })
                .collect()
        } else {
            class.roster.iter().collect()
        }
    }
}
