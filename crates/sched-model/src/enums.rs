//! Fixed domain vocabularies.
//!
//! Two families live here: the internal enumerations that lessons and rooms
//! are stored with, and the day/week enumerations as they arrive from the
//! schedule feed. The feed vocabulary is wider than the internal one (it has
//! Sunday, and both fields may be missing), so the two are kept separate and
//! converted by the classifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of lesson, taken from the parenthesized qualifier of a subject title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LessonType {
    Lecture,
    Laboratory,
    Practice,
}

impl LessonType {
    pub const ALL: [LessonType; 3] = [
        LessonType::Lecture,
        LessonType::Laboratory,
        LessonType::Practice,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LessonType::Lecture => "Lecture",
            LessonType::Laboratory => "Laboratory",
            LessonType::Practice => "Practice",
        }
    }
}

impl fmt::Display for LessonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// University campus a room belongs to.
///
/// `Undefined` is a legitimate value: the feed carries rooms whose location
/// text names none of the known buildings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Campus {
    Birjevaya,
    Lomonosova,
    Kronverskiy,
    Undefined,
}

impl Campus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Campus::Birjevaya => "Birjevaya",
            Campus::Lomonosova => "Lomonosova",
            Campus::Kronverskiy => "Kronverskiy",
            Campus::Undefined => "Undefined",
        }
    }
}

impl fmt::Display for Campus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One of the eight fixed lesson slots of a teaching day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
    Lesson1,
    Lesson2,
    Lesson3,
    Lesson4,
    Lesson5,
    Lesson6,
    Lesson7,
    Lesson8,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 8] = [
        TimeSlot::Lesson1,
        TimeSlot::Lesson2,
        TimeSlot::Lesson3,
        TimeSlot::Lesson4,
        TimeSlot::Lesson5,
        TimeSlot::Lesson6,
        TimeSlot::Lesson7,
        TimeSlot::Lesson8,
    ];

    /// Clock time at which the slot starts, as written in the feed.
    pub fn start_time(&self) -> &'static str {
        match self {
            TimeSlot::Lesson1 => "8:20",
            TimeSlot::Lesson2 => "10:00",
            TimeSlot::Lesson3 => "11:40",
            TimeSlot::Lesson4 => "13:30",
            TimeSlot::Lesson5 => "15:20",
            TimeSlot::Lesson6 => "17:00",
            TimeSlot::Lesson7 => "18:40",
            TimeSlot::Lesson8 => "20:20",
        }
    }

    /// 1-based position of the slot within the day.
    pub fn ordinal(&self) -> u8 {
        match self {
            TimeSlot::Lesson1 => 1,
            TimeSlot::Lesson2 => 2,
            TimeSlot::Lesson3 => 3,
            TimeSlot::Lesson4 => 4,
            TimeSlot::Lesson5 => 5,
            TimeSlot::Lesson6 => 6,
            TimeSlot::Lesson7 => 7,
            TimeSlot::Lesson8 => 8,
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lesson{}", self.ordinal())
    }
}

/// Teaching day. There are no Sunday lessons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DaySlot {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DaySlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            DaySlot::Monday => "Monday",
            DaySlot::Tuesday => "Tuesday",
            DaySlot::Wednesday => "Wednesday",
            DaySlot::Thursday => "Thursday",
            DaySlot::Friday => "Friday",
            DaySlot::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for DaySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Week parity a lesson takes place in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeekType {
    Both,
    Odd,
    Even,
}

impl WeekType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeekType::Both => "Both",
            WeekType::Odd => "Odd",
            WeekType::Even => "Even",
        }
    }
}

impl fmt::Display for WeekType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Day of week as published by the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DataDay {
    pub const ALL: [DataDay; 7] = [
        DataDay::Monday,
        DataDay::Tuesday,
        DataDay::Wednesday,
        DataDay::Thursday,
        DataDay::Friday,
        DataDay::Saturday,
        DataDay::Sunday,
    ];
}

impl fmt::Display for DataDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Week parity as published by the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataWeek {
    Both,
    Odd,
    Even,
}

impl fmt::Display for DataWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_slots_are_ordered_by_start() {
        let ordinals: Vec<u8> = TimeSlot::ALL.iter().map(TimeSlot::ordinal).collect();
        assert_eq!(ordinals, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(TimeSlot::Lesson1.start_time(), "8:20");
        assert_eq!(TimeSlot::Lesson8.to_string(), "Lesson8");
    }

    #[test]
    fn feed_enums_deserialize_from_variant_names() {
        let day: DataDay = serde_json::from_str("\"Sunday\"").unwrap();
        assert_eq!(day, DataDay::Sunday);
        let week: Option<DataWeek> = serde_json::from_str("null").unwrap();
        assert_eq!(week, None);
    }
}
