use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::{DataDay, DataWeek};

/// One unprocessed schedule record as published by the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    pub room: String,
    pub teacher: String,
    /// Subject title with an optional qualifier, e.g. `Algorithms(ЛЕК)`.
    #[serde(alias = "subjectTitle")]
    pub subject_title: String,
    /// Free-text location of the building.
    pub place: String,
    /// Start time as clock text, e.g. `8:20`.
    pub time: String,
    #[serde(default)]
    pub day: Option<DataDay>,
    #[serde(default)]
    pub week: Option<DataWeek>,
    pub group: String,
}

/// Fields of a [`RawEntry`], and the derived values computed from them,
/// named in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawField {
    Room,
    Teacher,
    SubjectTitle,
    LessonType,
    Place,
    Time,
    Day,
    Week,
    Group,
}

impl RawField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RawField::Room => "room",
            RawField::Teacher => "teacher",
            RawField::SubjectTitle => "subject_title",
            RawField::LessonType => "lesson_type",
            RawField::Place => "place",
            RawField::Time => "time",
            RawField::Day => "day",
            RawField::Week => "week",
            RawField::Group => "group",
        }
    }
}

impl fmt::Display for RawField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
