//! In-memory arena storage.

use std::collections::HashMap;

use sched_model::{
    Lesson, Record, RecordId, Room, Semester, SemesterSubject, StudyCourse, StudyGroup, Subject,
    Teacher,
};
use tracing::trace;

use crate::error::{Result, StoreError};
use crate::repository::{Repository, ScheduleStore};

/// Append-only arena of records. Identifiers are arena indices.
#[derive(Debug, Clone)]
pub struct Table<T: Record> {
    rows: Vec<T>,
    keys: HashMap<T::Key, T::Id>,
}

impl<T: Record> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            keys: HashMap::new(),
        }
    }
}

impl<T: Record> Table<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.rows.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<T: Record> Repository<T> for Table<T> {
    fn create(&mut self, attrs: T::Attrs) -> Result<T::Id> {
        let key = T::key_of(&attrs);
        if let Some(key) = &key
            && self.keys.contains_key(key)
        {
            return Err(StoreError::DuplicateKey {
                entity: T::KIND,
                key: format!("{key:?}"),
            });
        }
        let id = T::Id::from_index(self.rows.len());
        trace!(entity = %T::KIND, ?id, ?attrs, "create record");
        self.rows.push(T::from_attrs(id, attrs));
        if let Some(key) = key {
            self.keys.insert(key, id);
        }
        Ok(id)
    }

    fn find(&self, predicate: &dyn Fn(&T) -> bool) -> Vec<T> {
        self.rows
            .iter()
            .filter(|row| predicate(row))
            .cloned()
            .collect()
    }
}

/// A complete schedule store held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    pub rooms: Table<Room>,
    pub teachers: Table<Teacher>,
    pub subjects: Table<Subject>,
    pub courses: Table<StudyCourse>,
    pub semesters: Table<Semester>,
    pub groups: Table<StudyGroup>,
    pub semester_subjects: Table<SemesterSubject>,
    pub lessons: Table<Lesson>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScheduleStore for InMemoryStore {
    fn rooms(&mut self) -> &mut dyn Repository<Room> {
        &mut self.rooms
    }

    fn teachers(&mut self) -> &mut dyn Repository<Teacher> {
        &mut self.teachers
    }

    fn subjects(&mut self) -> &mut dyn Repository<Subject> {
        &mut self.subjects
    }

    fn courses(&mut self) -> &mut dyn Repository<StudyCourse> {
        &mut self.courses
    }

    fn semesters(&mut self) -> &mut dyn Repository<Semester> {
        &mut self.semesters
    }

    fn groups(&mut self) -> &mut dyn Repository<StudyGroup> {
        &mut self.groups
    }

    fn semester_subjects(&mut self) -> &mut dyn Repository<SemesterSubject> {
        &mut self.semester_subjects
    }

    fn lessons(&mut self) -> &mut dyn Repository<Lesson> {
        &mut self.lessons
    }
}

#[cfg(test)]
mod tests {
    use sched_model::{
        Campus, DaySlot, LessonType, NewLesson, NewRoom, NewTeacher, RecordId, TimeSlot, WeekType,
    };

    use super::*;

    fn room(name: &str, campus: Campus) -> NewRoom {
        NewRoom {
            name: name.to_string(),
            campus,
        }
    }

    #[test]
    fn create_assigns_sequential_ids() {
        let mut table = Table::<Teacher>::new();
        let a = table
            .create(NewTeacher {
                name: "Smith".to_string(),
            })
            .unwrap();
        let b = table
            .create(NewTeacher {
                name: "Jones".to_string(),
            })
            .unwrap();
        assert_ne!(a, b);
        assert_eq!(table.get(b).unwrap().name, "Jones");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn create_rejects_duplicate_key() {
        let mut table = Table::<Room>::new();
        table.create(room("305", Campus::Kronverskiy)).unwrap();
        table.create(room("305", Campus::Lomonosova)).unwrap();
        let err = table.create(room("305", Campus::Kronverskiy)).unwrap_err();
        assert!(matches!(
            err,
            StoreError::DuplicateKey {
                entity: sched_model::EntityKind::Room,
                ..
            }
        ));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn keyless_records_are_never_duplicates() {
        let mut table = Table::<Lesson>::new();
        let lesson = NewLesson {
            semester_subject: RecordId::from_index(0),
            lesson_type: LessonType::Lecture,
            group: RecordId::from_index(0),
            teacher: RecordId::from_index(0),
            room: RecordId::from_index(0),
            time_slot: TimeSlot::Lesson1,
            day: DaySlot::Monday,
            week: WeekType::Both,
        };
        table.create(lesson.clone()).unwrap();
        table.create(lesson).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn find_filters_in_creation_order() {
        let mut store = InMemoryStore::new();
        for name in ["101", "102", "201"] {
            store.rooms().create(room(name, Campus::Undefined)).unwrap();
        }
        let found = store.rooms().find(&|r: &Room| r.name.starts_with('1'));
        let names: Vec<&str> = found.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["101", "102"]);
        assert_eq!(store.rooms().all().len(), 3);
    }
}
