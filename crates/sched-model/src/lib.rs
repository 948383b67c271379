//! Schedule data model.
//!
//! Reference entities (rooms, teachers, subjects), seeded entities (courses,
//! semesters, study groups) and the lessons that tie them together. All
//! relationships are identifier-based.

pub mod entities;
pub mod enums;
pub mod ids;
pub mod raw;
pub mod record;

pub use entities::{
    Lesson, NewLesson, NewRoom, NewSemester, NewSemesterSubject, NewStudyCourse, NewStudyGroup,
    NewSubject, NewTeacher, Room, Semester, SemesterSubject, StudyCourse, StudyGroup, Subject,
    Teacher,
};
pub use enums::{Campus, DataDay, DataWeek, DaySlot, LessonType, TimeSlot, WeekType};
pub use ids::{
    LessonId, RecordId, RoomId, SemesterId, SemesterSubjectId, StudyCourseId, StudyGroupId,
    SubjectId, TeacherId,
};
pub use raw::{RawEntry, RawField};
pub use record::{EntityKind, Record};
