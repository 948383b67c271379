#![deny(unsafe_code)]

use std::fmt;

/// Identifier assigned by a repository when a record is created.
///
/// Identifiers are opaque to the pipeline: they are only compared, hashed
/// and handed back to the repository that issued them.
pub trait RecordId: Copy + Eq + std::hash::Hash + fmt::Debug {
    fn from_index(index: usize) -> Self;

    fn index(self) -> usize;
}

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(usize);

        impl RecordId for $name {
            fn from_index(index: usize) -> Self {
                Self(index)
            }

            fn index(self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }
    };
}

record_id!(RoomId, "room");
record_id!(TeacherId, "teacher");
record_id!(SubjectId, "subject");
record_id!(StudyCourseId, "course");
record_id!(SemesterId, "semester");
record_id!(StudyGroupId, "group");
record_id!(
    /// Lessons reference this rather than [`SubjectId`].
    SemesterSubjectId,
    "semester-subject"
);
record_id!(LessonId, "lesson");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_index() {
        let id = RoomId::from_index(7);
        assert_eq!(id.index(), 7);
        assert_eq!(id.to_string(), "room#7");
    }

    #[test]
    fn ids_serialize_as_plain_numbers() {
        let json = serde_json::to_string(&LessonId::from_index(3)).unwrap();
        assert_eq!(json, "3");
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn ids_past_u32_stay_distinct() {
        let last = RoomId::from_index(u32::MAX as usize);
        let next = RoomId::from_index(u32::MAX as usize + 1);
        assert_ne!(last, next);
        assert_eq!(next.index(), u32::MAX as usize + 1);
    }
}
