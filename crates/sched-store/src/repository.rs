//! Repository contract consumed by the ingestion pipeline.
//!
//! Every create and query is a discrete call. Callers do not assume any
//! atomicity across calls.

use sched_model::{
    Lesson, Record, Room, Semester, SemesterSubject, StudyCourse, StudyGroup, Subject, Teacher,
};

use crate::error::Result;

/// Create/find access to one entity type.
pub trait Repository<T: Record> {
    /// Persist a new record and return its identifier.
    ///
    /// Fails with [`StoreError::DuplicateKey`](crate::StoreError::DuplicateKey)
    /// when a record with the same uniqueness key exists.
    fn create(&mut self, attrs: T::Attrs) -> Result<T::Id>;

    /// All records matching `predicate`, in creation order.
    fn find(&self, predicate: &dyn Fn(&T) -> bool) -> Vec<T>;

    fn all(&self) -> Vec<T> {
        self.find(&|_| true)
    }
}

/// One repository per schedule entity type.
pub trait ScheduleStore {
    fn rooms(&mut self) -> &mut dyn Repository<Room>;
    fn teachers(&mut self) -> &mut dyn Repository<Teacher>;
    fn subjects(&mut self) -> &mut dyn Repository<Subject>;
    fn courses(&mut self) -> &mut dyn Repository<StudyCourse>;
    fn semesters(&mut self) -> &mut dyn Repository<Semester>;
    fn groups(&mut self) -> &mut dyn Repository<StudyGroup>;
    fn semester_subjects(&mut self) -> &mut dyn Repository<SemesterSubject>;
    fn lessons(&mut self) -> &mut dyn Repository<Lesson>;
}
