//! Entity resolution against a [`ReferenceSet`].
//!
//! Owns the dedup-key definitions. Key derivation is pure: the same raw
//! field text always yields the same key.
//!
//! | Entity | Key |
//! |--------|-----|
//! | Room | trimmed room label + campus classified from the place text |
//! | Teacher | trimmed teacher name |
//! | Subject | title text before the first `(`, trimmed |
//! | Study group | trimmed group name |

use sched_model::{RawEntry, RoomId, SemesterSubjectId, StudyGroupId, SubjectId, TeacherId};
use sched_normalization::{campus, subject_key};

use crate::reference_set::{ReferenceSet, RoomKey};

/// Outcome of looking an entry up: the existing identifier, or the key a
/// new entity would have to be created under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<I, K> {
    Found(I),
    Missing(K),
}

impl<I: Copy, K> Resolution<I, K> {
    pub fn found(&self) -> Option<I> {
        match self {
            Resolution::Found(id) => Some(*id),
            Resolution::Missing(_) => None,
        }
    }
}

pub fn room_key(entry: &RawEntry) -> RoomKey {
    RoomKey {
        name: entry.room.trim().to_string(),
        campus: campus(&entry.place),
    }
}

pub fn teacher_key(entry: &RawEntry) -> &str {
    entry.teacher.trim()
}

pub fn subject_name(entry: &RawEntry) -> &str {
    subject_key(&entry.subject_title)
}

pub fn group_key(entry: &RawEntry) -> &str {
    entry.group.trim()
}

pub fn resolve_room(set: &ReferenceSet, entry: &RawEntry) -> Resolution<RoomId, RoomKey> {
    let key = room_key(entry);
    match set.room(&key) {
        Some(id) => Resolution::Found(id),
        None => Resolution::Missing(key),
    }
}

pub fn resolve_teacher(set: &ReferenceSet, entry: &RawEntry) -> Resolution<TeacherId, String> {
    let key = teacher_key(entry);
    match set.teacher(key) {
        Some(id) => Resolution::Found(id),
        None => Resolution::Missing(key.to_string()),
    }
}

pub fn resolve_subject(set: &ReferenceSet, entry: &RawEntry) -> Resolution<SubjectId, String> {
    let key = subject_name(entry);
    match set.subject(key) {
        Some(id) => Resolution::Found(id),
        None => Resolution::Missing(key.to_string()),
    }
}

/// Semester subject for the entry's subject in the active semester.
pub fn resolve_semester_subject(
    set: &ReferenceSet,
    entry: &RawEntry,
) -> Resolution<SemesterSubjectId, String> {
    let key = subject_name(entry);
    match set.subject(key).and_then(|id| set.semester_subject(id)) {
        Some(id) => Resolution::Found(id),
        None => Resolution::Missing(key.to_string()),
    }
}

pub fn resolve_group(set: &ReferenceSet, entry: &RawEntry) -> Resolution<StudyGroupId, String> {
    let key = group_key(entry);
    match set.group(key) {
        Some(id) => Resolution::Found(id),
        None => Resolution::Missing(key.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use sched_model::{Campus, RecordId, Room, SemesterId, SemesterSubject, Subject};

    use super::*;

    fn entry(room: &str, place: &str, title: &str) -> RawEntry {
        RawEntry {
            room: room.to_string(),
            teacher: " Smith ".to_string(),
            subject_title: title.to_string(),
            place: place.to_string(),
            time: "8:20".to_string(),
            day: None,
            week: None,
            group: "M3201".to_string(),
        }
    }

    #[test]
    fn room_key_uses_classified_campus() {
        let key = room_key(&entry(" 305 ", "Кронверкский пр.", "A(ЛЕК)"));
        assert_eq!(key.name, "305");
        assert_eq!(key.campus, Campus::Kronverskiy);
        assert_eq!(teacher_key(&entry("", "", "")), "Smith");
    }

    #[test]
    fn same_room_on_other_campus_is_missing() {
        let mut set = ReferenceSet::new(SemesterId::from_index(0));
        set.insert_room(&Room {
            id: RecordId::from_index(0),
            name: "305".to_string(),
            campus: Campus::Kronverskiy,
        });
        let found = resolve_room(&set, &entry("305", "Кронверкский", "A"));
        assert_eq!(found.found(), Some(RecordId::from_index(0)));
        let missing = resolve_room(&set, &entry("305", "Ломоносова", "A"));
        assert!(matches!(missing, Resolution::Missing(RoomKey { campus: Campus::Lomonosova, .. })));
    }

    #[test]
    fn semester_subject_requires_link() {
        let mut set = ReferenceSet::new(SemesterId::from_index(1));
        let subject = Subject {
            id: RecordId::from_index(0),
            name: "Algorithms".to_string(),
        };
        set.insert_subject(&subject);
        let lecture = entry("305", "", "Algorithms(ЛЕК)");
        assert_eq!(
            resolve_semester_subject(&set, &lecture),
            Resolution::Missing("Algorithms".to_string())
        );

        // A link for another semester does not count.
        set.insert_semester_subject(&SemesterSubject {
            id: RecordId::from_index(0),
            subject: subject.id,
            semester: SemesterId::from_index(0),
            lecture_hours: 0,
            laboratory_hours: 0,
            practice_hours: 0,
        });
        assert!(resolve_semester_subject(&set, &lecture).found().is_none());

        set.insert_semester_subject(&SemesterSubject {
            id: RecordId::from_index(1),
            subject: subject.id,
            semester: SemesterId::from_index(1),
            lecture_hours: 0,
            laboratory_hours: 0,
            practice_hours: 0,
        });
        assert_eq!(
            resolve_semester_subject(&set, &lecture).found(),
            Some(RecordId::from_index(1))
        );
    }
}
