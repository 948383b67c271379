use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::ids::RecordId;

/// Entity types known to the schedule model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Room,
    Teacher,
    Subject,
    StudyCourse,
    Semester,
    StudyGroup,
    SemesterSubject,
    Lesson,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Room => "room",
            EntityKind::Teacher => "teacher",
            EntityKind::Subject => "subject",
            EntityKind::StudyCourse => "study course",
            EntityKind::Semester => "semester",
            EntityKind::StudyGroup => "study group",
            EntityKind::SemesterSubject => "semester subject",
            EntityKind::Lesson => "lesson",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted entity: created once from its attributes, never updated.
///
/// `key_of` returns the uniqueness key a repository must enforce, or `None`
/// for entities that carry no uniqueness constraint.
pub trait Record: Clone + fmt::Debug {
    type Id: RecordId;
    type Attrs: fmt::Debug;
    type Key: Clone + Eq + Hash + fmt::Debug;

    const KIND: EntityKind;

    fn id(&self) -> Self::Id;

    fn key_of(attrs: &Self::Attrs) -> Option<Self::Key>;

    fn key(&self) -> Option<Self::Key>;

    fn from_attrs(id: Self::Id, attrs: Self::Attrs) -> Self;
}
