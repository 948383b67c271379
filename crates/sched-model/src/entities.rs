//! Persisted schedule entities and the attribute sets they are created from.
//!
//! Entities reference each other only by identifier. Uniqueness keys:
//!
//! | Entity | Key |
//! |--------|-----|
//! | [`Room`] | (name, campus) |
//! | [`Teacher`] | name |
//! | [`Subject`] | name |
//! | [`StudyCourse`] | name |
//! | [`Semester`] | name |
//! | [`StudyGroup`] | name |
//! | [`SemesterSubject`] | (subject, semester) |
//! | [`Lesson`] | none |

use serde::{Deserialize, Serialize};

use crate::enums::{Campus, DaySlot, LessonType, TimeSlot, WeekType};
use crate::ids::{
    LessonId, RoomId, SemesterId, SemesterSubjectId, StudyCourseId, StudyGroupId, SubjectId,
    TeacherId,
};
use crate::record::{EntityKind, Record};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub campus: Campus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRoom {
    pub name: String,
    pub campus: Campus,
}

impl Record for Room {
    type Id = RoomId;
    type Attrs = NewRoom;
    type Key = (String, Campus);

    const KIND: EntityKind = EntityKind::Room;

    fn id(&self) -> RoomId {
        self.id
    }

    fn key_of(attrs: &NewRoom) -> Option<Self::Key> {
        Some((attrs.name.clone(), attrs.campus))
    }

    fn key(&self) -> Option<Self::Key> {
        Some((self.name.clone(), self.campus))
    }

    fn from_attrs(id: RoomId, attrs: NewRoom) -> Self {
        Self {
            id,
            name: attrs.name,
            campus: attrs.campus,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: TeacherId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeacher {
    pub name: String,
}

impl Record for Teacher {
    type Id = TeacherId;
    type Attrs = NewTeacher;
    type Key = String;

    const KIND: EntityKind = EntityKind::Teacher;

    fn id(&self) -> TeacherId {
        self.id
    }

    fn key_of(attrs: &NewTeacher) -> Option<String> {
        Some(attrs.name.clone())
    }

    fn key(&self) -> Option<String> {
        Some(self.name.clone())
    }

    fn from_attrs(id: TeacherId, attrs: NewTeacher) -> Self {
        Self {
            id,
            name: attrs.name,
        }
    }
}

/// A subject, named by the part of the feed title before any qualifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubject {
    pub name: String,
}

impl Record for Subject {
    type Id = SubjectId;
    type Attrs = NewSubject;
    type Key = String;

    const KIND: EntityKind = EntityKind::Subject;

    fn id(&self) -> SubjectId {
        self.id
    }

    fn key_of(attrs: &NewSubject) -> Option<String> {
        Some(attrs.name.clone())
    }

    fn key(&self) -> Option<String> {
        Some(self.name.clone())
    }

    fn from_attrs(id: SubjectId, attrs: NewSubject) -> Self {
        Self {
            id,
            name: attrs.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyCourse {
    pub id: StudyCourseId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudyCourse {
    pub name: String,
}

impl Record for StudyCourse {
    type Id = StudyCourseId;
    type Attrs = NewStudyCourse;
    type Key = String;

    const KIND: EntityKind = EntityKind::StudyCourse;

    fn id(&self) -> StudyCourseId {
        self.id
    }

    fn key_of(attrs: &NewStudyCourse) -> Option<String> {
        Some(attrs.name.clone())
    }

    fn key(&self) -> Option<String> {
        Some(self.name.clone())
    }

    fn from_attrs(id: StudyCourseId, attrs: NewStudyCourse) -> Self {
        Self {
            id,
            name: attrs.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semester {
    pub id: SemesterId,
    pub name: String,
    pub course: StudyCourseId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSemester {
    pub name: String,
    pub course: StudyCourseId,
}

impl Record for Semester {
    type Id = SemesterId;
    type Attrs = NewSemester;
    type Key = String;

    const KIND: EntityKind = EntityKind::Semester;

    fn id(&self) -> SemesterId {
        self.id
    }

    fn key_of(attrs: &NewSemester) -> Option<String> {
        Some(attrs.name.clone())
    }

    fn key(&self) -> Option<String> {
        Some(self.name.clone())
    }

    fn from_attrs(id: SemesterId, attrs: NewSemester) -> Self {
        Self {
            id,
            name: attrs.name,
            course: attrs.course,
        }
    }
}

/// A study group. Groups are seeded ahead of ingestion and only looked up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyGroup {
    pub id: StudyGroupId,
    pub name: String,
    pub course: StudyCourseId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudyGroup {
    pub name: String,
    pub course: StudyCourseId,
}

impl Record for StudyGroup {
    type Id = StudyGroupId;
    type Attrs = NewStudyGroup;
    type Key = String;

    const KIND: EntityKind = EntityKind::StudyGroup;

    fn id(&self) -> StudyGroupId {
        self.id
    }

    fn key_of(attrs: &NewStudyGroup) -> Option<String> {
        Some(attrs.name.clone())
    }

    fn key(&self) -> Option<String> {
        Some(self.name.clone())
    }

    fn from_attrs(id: StudyGroupId, attrs: NewStudyGroup) -> Self {
        Self {
            id,
            name: attrs.name,
            course: attrs.course,
        }
    }
}

/// A subject taught in a given semester, with its hour quotas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemesterSubject {
    pub id: SemesterSubjectId,
    pub subject: SubjectId,
    pub semester: SemesterId,
    pub lecture_hours: u32,
    pub laboratory_hours: u32,
    pub practice_hours: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSemesterSubject {
    pub subject: SubjectId,
    pub semester: SemesterId,
    pub lecture_hours: u32,
    pub laboratory_hours: u32,
    pub practice_hours: u32,
}

impl NewSemesterSubject {
    /// Attributes for a generated semester subject: all quotas start at zero.
    pub fn zeroed(subject: SubjectId, semester: SemesterId) -> Self {
        Self {
            subject,
            semester,
            lecture_hours: 0,
            laboratory_hours: 0,
            practice_hours: 0,
        }
    }
}

impl Record for SemesterSubject {
    type Id = SemesterSubjectId;
    type Attrs = NewSemesterSubject;
    type Key = (SubjectId, SemesterId);

    const KIND: EntityKind = EntityKind::SemesterSubject;

    fn id(&self) -> SemesterSubjectId {
        self.id
    }

    fn key_of(attrs: &NewSemesterSubject) -> Option<Self::Key> {
        Some((attrs.subject, attrs.semester))
    }

    fn key(&self) -> Option<Self::Key> {
        Some((self.subject, self.semester))
    }

    fn from_attrs(id: SemesterSubjectId, attrs: NewSemesterSubject) -> Self {
        Self {
            id,
            subject: attrs.subject,
            semester: attrs.semester,
            lecture_hours: attrs.lecture_hours,
            laboratory_hours: attrs.laboratory_hours,
            practice_hours: attrs.practice_hours,
        }
    }
}

/// A fully resolved lesson. Repeated feed entries produce repeated lessons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: LessonId,
    pub semester_subject: SemesterSubjectId,
    pub lesson_type: LessonType,
    pub group: StudyGroupId,
    pub teacher: TeacherId,
    pub room: RoomId,
    pub time_slot: TimeSlot,
    pub day: DaySlot,
    pub week: WeekType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLesson {
    pub semester_subject: SemesterSubjectId,
    pub lesson_type: LessonType,
    pub group: StudyGroupId,
    pub teacher: TeacherId,
    pub room: RoomId,
    pub time_slot: TimeSlot,
    pub day: DaySlot,
    pub week: WeekType,
}

impl Record for Lesson {
    type Id = LessonId;
    type Attrs = NewLesson;
    type Key = ();

    const KIND: EntityKind = EntityKind::Lesson;

    fn id(&self) -> LessonId {
        self.id
    }

    fn key_of(_attrs: &NewLesson) -> Option<()> {
        None
    }

    fn key(&self) -> Option<()> {
        None
    }

    fn from_attrs(id: LessonId, attrs: NewLesson) -> Self {
        Self {
            id,
            semester_subject: attrs.semester_subject,
            lesson_type: attrs.lesson_type,
            group: attrs.group,
            teacher: attrs.teacher,
            room: attrs.room,
            time_slot: attrs.time_slot,
            day: attrs.day,
            week: attrs.week,
        }
    }
}
