//! Mapping of feed vocabulary onto the domain enumerations.
//!
//! Every mapping is total over its declared input domain and returns a
//! [`ClassificationError`] for anything else. Campus is the only field with a
//! fallback value.

use sched_model::{Campus, DataDay, DataWeek, DaySlot, LessonType, RawField, TimeSlot, WeekType};

use crate::error::ClassificationError;
use crate::title::lesson_qualifier;

/// Location fragments checked in order; the first contained fragment wins.
pub const CAMPUS_FRAGMENTS: [(&str, Campus); 3] = [
    ("Биржевая линия", Campus::Birjevaya),
    ("Ломоносова", Campus::Lomonosova),
    ("Кронверкский", Campus::Kronverskiy),
];

/// Map a lesson-type qualifier (`ЛЕК`, `ЛАБ`, `ПРАК`) to a [`LessonType`].
pub fn lesson_type(qualifier: &str) -> Result<LessonType, ClassificationError> {
    match qualifier {
        "ЛЕК" => Ok(LessonType::Lecture),
        "ЛАБ" => Ok(LessonType::Laboratory),
        "ПРАК" => Ok(LessonType::Practice),
        other => Err(ClassificationError::new(RawField::LessonType, other)),
    }
}

/// Classify the lesson type from a full subject title.
pub fn lesson_type_from_title(title: &str) -> Result<LessonType, ClassificationError> {
    match lesson_qualifier(title) {
        Some(qualifier) => lesson_type(qualifier),
        None => Err(ClassificationError::new(RawField::LessonType, title)),
    }
}

/// Case-sensitive containment test against the known campus fragments.
pub fn campus(place: &str) -> Campus {
    CAMPUS_FRAGMENTS
        .iter()
        .find(|(fragment, _)| place.contains(fragment))
        .map_or(Campus::Undefined, |(_, campus)| *campus)
}

/// Map an exact slot start time such as `8:20` to its [`TimeSlot`].
pub fn time_slot(start_time: &str) -> Result<TimeSlot, ClassificationError> {
    TimeSlot::ALL
        .iter()
        .copied()
        .find(|slot| slot.start_time() == start_time)
        .ok_or_else(|| ClassificationError::new(RawField::Time, start_time))
}

pub fn day_slot(day: Option<DataDay>) -> Result<DaySlot, ClassificationError> {
    match day {
        Some(DataDay::Monday) => Ok(DaySlot::Monday),
        Some(DataDay::Tuesday) => Ok(DaySlot::Tuesday),
        Some(DataDay::Wednesday) => Ok(DaySlot::Wednesday),
        Some(DataDay::Thursday) => Ok(DaySlot::Thursday),
        Some(DataDay::Friday) => Ok(DaySlot::Friday),
        Some(DataDay::Saturday) => Ok(DaySlot::Saturday),
        Some(DataDay::Sunday) => Err(ClassificationError::new(RawField::Day, "Sunday")),
        None => Err(ClassificationError::new(RawField::Day, "null")),
    }
}

pub fn week_type(week: Option<DataWeek>) -> Result<WeekType, ClassificationError> {
    match week {
        Some(DataWeek::Both) => Ok(WeekType::Both),
        Some(DataWeek::Odd) => Ok(WeekType::Odd),
        Some(DataWeek::Even) => Ok(WeekType::Even),
        None => Err(ClassificationError::new(RawField::Week, "null")),
    }
}
