//! Drag-and-drop student reassignment between classes.
//!
//! Moves are applied optimistically to a working copy of the class list so
//! the next layout already shows them. Nothing is persisted here; the host
//! takes [`MovePlanner::final_moves`] and writes them to its store.

use serde::Serialize;

use crate::error::{Result, TimegridError};
use crate::types::{ScheduledClass, StudentRef};

/// One drop, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingMove {
    pub student_id: String,
    pub from_class_id: String,
    pub to_class_id: String,
}

/// Net effect of all drops for one student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalMove {
    pub student_id: String,
    pub from_class_id: String,
    pub to_class_id: String,
    pub from_class_name: String,
    pub to_class_name: String,
}

#[derive(Debug, Clone, Default)]
pub struct MovePlanner {
    snapshot: Vec<ScheduledClass>,
    classes: Vec<ScheduledClass>,
    students: Vec<StudentRef>,
    pending: Vec<PendingMove>,
}

impl MovePlanner {
    pub fn new(classes: Vec<ScheduledClass>) -> Self {
        Self::with_students(classes, Vec::new())
    }

    /// Planner that can copy registry records into embedded rosters.
    pub fn with_students(classes: Vec<ScheduledClass>, students: Vec<StudentRef>) -> Self {
        Self {
            snapshot: classes.clone(),
            classes,
            students,
            pending: Vec::new(),
        }
    }

    /// Working class list with every pending move applied.
    pub fn classes(&self) -> &[ScheduledClass] {
        &self.classes
    }

    pub fn pending(&self) -> &[PendingMove] {
        &self.pending
    }

    pub fn is_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Move a student from one class to another.
    ///
    /// Dropping onto the source class is a no-op. Returns whether anything changed.
    pub fn move_student(&mut self, student_id: &str, from: &str, to: &str) -> Result<bool> {
        if from == to {
            return Ok(false);
        }
        let from_pos = self.position(from)?;
        let to_pos = self.position(to)?;

        let source = self
            .classes
            .get_mut(from_pos)
            .ok_or_else(|| TimegridError::UnknownClass(from.to_string()))?;
        if !source.has_student(student_id) {
            return Err(TimegridError::StudentNotInClass {
                student: student_id.to_string(),
                class: from.to_string(),
            });
        }

        let carried = source.roster.iter().find(|s| s.id == student_id).cloned();
        let source_by_id = source.uses_student_ids();
        source.student_ids.retain(|id| id != student_id);
        source.roster.retain(|s| s.id != student_id);
        // A hidden embedded roster must not resurface once the last id leaves
        if source_by_id && source.student_ids.is_empty() {
            source.roster.clear();
        }

        let registry = self.students.iter().find(|s| s.id == student_id);
        let target = self
            .classes
            .get_mut(to_pos)
            .ok_or_else(|| TimegridError::UnknownClass(to.to_string()))?;
        join_class(target, student_id, carried, registry);

        log::debug!("moved student {student_id} from {from} to {to}");
        self.pending.push(PendingMove {
            student_id: student_id.to_string(),
            from_class_id: from.to_string(),
            to_class_id: to.to_string(),
        });
        Ok(true)
    }

    /// Pending moves compressed per student: first source, last target, in
    /// first-seen order. Round trips back to the source are dropped.
    pub fn final_moves(&self) -> Vec<FinalMove> {
        let mut net: Vec<(&str, &str, &str)> = Vec::new();
        for mv in &self.pending {
            match net.iter_mut().find(|(student, _, _)| *student == mv.student_id) {
                Some(entry) => entry.2 = mv.to_class_id.as_str(),
                None => net.push((
                    mv.student_id.as_str(),
                    mv.from_class_id.as_str(),
                    mv.to_class_id.as_str(),
                )),
            }
        }

        net.into_iter()
            .filter(|(_, from, to)| from != to)
            .map(|(student, from, to)| FinalMove {
                student_id: student.to_string(),
                from_class_id: from.to_string(),
                to_class_id: to.to_string(),
                from_class_name: self.class_name(from),
                to_class_name: self.class_name(to),
            })
            .collect()
    }

    /// Drop every pending move and restore the original class list.
    pub fn discard(&mut self) {
        self.classes = self.snapshot.clone();
        self.pending.clear();
    }

    /// Accept the working list as the new baseline once the host has saved it.
    pub fn commit(&mut self) -> Vec<FinalMove> {
        let moves = self.final_moves();
        self.snapshot = self.classes.clone();
        self.pending.clear();
        moves
    }

    fn position(&self, class_id: &str) -> Result<usize> {
        self.classes
            .iter()
            .position(|c| c.id == class_id)
            .ok_or_else(|| TimegridError::UnknownClass(class_id.to_string()))
    }

    fn class_name(&self, class_id: &str) -> String {
        self.classes
            .iter()
            .find(|c| c.id == class_id)
            .map(|c| c.name.clone())
            .unwrap_or_default()
    }
}

/// Add a student to a class without hiding any student it already lists.
///
/// Id-listed classes get the id. Embedded rosters get the carried or registry
/// record; when neither is known the roster is converted to ids first.
fn join_class(
    target: &mut ScheduledClass,
    student_id: &str,
    carried: Option<StudentRef>,
    registry: Option<&StudentRef>,
) {
    if target.uses_student_ids() {
        if !target.student_ids.iter().any(|id| id == student_id) {
            target.student_ids.push(student_id.to_string());
        }
        return;
    }
    if target.roster.iter().any(|s| s.id == student_id) {
        return;
    }

    if target.roster.is_empty() {
        match carried {
            Some(student) => target.roster.push(student),
            None => target.student_ids.push(student_id.to_string()),
        }
        return;
    }

    match carried.or_else(|| registry.cloned()) {
        Some(student) => target.roster.push(student),
        None => {
            target.student_ids = target.roster.iter().map(|s| s.id.clone()).collect();
            target.student_ids.push(student_id.to_string());
        }
    }
}
