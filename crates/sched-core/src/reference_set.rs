//! Per-run index of reference entities.
//!
//! A [`ReferenceSet`] is built at the start of one ingestion run from what
//! the store already holds, grows as the reference passes create entities,
//! and is dropped when the run ends. Nothing is shared between runs.

use std::collections::HashMap;

use sched_model::{
    Campus, Room, RoomId, SemesterId, SemesterSubject, SemesterSubjectId, StudyGroup,
    StudyGroupId, Subject, SubjectId, Teacher, TeacherId,
};
use sched_store::ScheduleStore;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Dedup key of a room.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomKey {
    pub name: String,
    pub campus: Campus,
}

#[derive(Debug, Clone)]
pub struct ReferenceSet {
    semester: SemesterId,
    rooms: HashMap<RoomKey, RoomId>,
    teachers: HashMap<String, TeacherId>,
    subjects: HashMap<String, SubjectId>,
    groups: HashMap<String, StudyGroupId>,
    semester_subjects: HashMap<SubjectId, SemesterSubjectId>,
}

impl ReferenceSet {
    /// Empty set for the given semester context.
    pub fn new(semester: SemesterId) -> Self {
        Self {
            semester,
            rooms: HashMap::new(),
            teachers: HashMap::new(),
            subjects: HashMap::new(),
            groups: HashMap::new(),
            semester_subjects: HashMap::new(),
        }
    }

    /// Index everything the store already holds for `semester_name`.
    pub fn load<S: ScheduleStore + ?Sized>(store: &mut S, semester_name: &str) -> Result<Self> {
        let semester = store
            .semesters()
            .find(&|s| s.name == semester_name)
            .first()
            .map(|s| s.id)
            .ok_or_else(|| IngestError::UnknownSemester {
                name: semester_name.to_string(),
            })?;

        let mut set = Self::new(semester);
        for room in store.rooms().all() {
            set.insert_room(&room);
        }
        for teacher in store.teachers().all() {
            set.insert_teacher(&teacher);
        }
        for subject in store.subjects().all() {
            set.insert_subject(&subject);
        }
        for group in store.groups().all() {
            set.insert_group(&group);
        }
        for link in store.semester_subjects().find(&|s| s.semester == semester) {
            set.insert_semester_subject(&link);
        }
        debug!(
            rooms = set.rooms.len(),
            teachers = set.teachers.len(),
            subjects = set.subjects.len(),
            groups = set.groups.len(),
            "loaded reference set"
        );
        Ok(set)
    }

    pub fn semester(&self) -> SemesterId {
        self.semester
    }

    pub fn room(&self, key: &RoomKey) -> Option<RoomId> {
        self.rooms.get(key).copied()
    }

    pub fn teacher(&self, name: &str) -> Option<TeacherId> {
        self.teachers.get(name).copied()
    }

    pub fn subject(&self, name: &str) -> Option<SubjectId> {
        self.subjects.get(name).copied()
    }

    pub fn group(&self, name: &str) -> Option<StudyGroupId> {
        self.groups.get(name).copied()
    }

    /// Semester subject linking `subject` to the active semester.
    pub fn semester_subject(&self, subject: SubjectId) -> Option<SemesterSubjectId> {
        self.semester_subjects.get(&subject).copied()
    }

    pub fn insert_room(&mut self, room: &Room) {
        self.rooms.insert(
            RoomKey {
                name: room.name.clone(),
                campus: room.campus,
            },
            room.id,
        );
    }

    pub fn insert_teacher(&mut self, teacher: &Teacher) {
        self.teachers.insert(teacher.name.clone(), teacher.id);
    }

    pub fn insert_subject(&mut self, subject: &Subject) {
        self.subjects.insert(subject.name.clone(), subject.id);
    }

    pub fn insert_group(&mut self, group: &StudyGroup) {
        self.groups.insert(group.name.clone(), group.id);
    }

    /// Links for other semesters are ignored.
    pub fn insert_semester_subject(&mut self, link: &SemesterSubject) {
        if link.semester == self.semester {
            self.semester_subjects.insert(link.subject, link.id);
        }
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn teacher_count(&self) -> usize {
        self.teachers.len()
    }

    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }
}
