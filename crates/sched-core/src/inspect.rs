//! Store-free inspection of raw entries.
//!
//! Shows the keys and classifications an entry would be ingested with,
//! without resolving anything.

use serde::Serialize;

use sched_model::{Campus, DaySlot, LessonType, RawEntry, TimeSlot, WeekType};
use sched_normalization::{
    ClassificationError, day_slot, lesson_type_from_title, time_slot, week_type,
};

use crate::resolver::{group_key, room_key, subject_name, teacher_key};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryInspection {
    pub entry: usize,
    pub subject: String,
    pub teacher: String,
    pub room: String,
    pub campus: Campus,
    pub group: String,
    pub lesson_type: Result<LessonType, String>,
    pub time_slot: Result<TimeSlot, String>,
    pub day: Result<DaySlot, String>,
    pub week: Result<WeekType, String>,
}

impl EntryInspection {
    /// Number of fields that failed to classify.
    pub fn error_count(&self) -> usize {
        [
            self.lesson_type.is_err(),
            self.time_slot.is_err(),
            self.day.is_err(),
            self.week.is_err(),
        ]
        .iter()
        .filter(|failed| **failed)
        .count()
    }
}

fn message<T>(result: Result<T, ClassificationError>) -> Result<T, String> {
    result.map_err(|error| error.to_string())
}

pub fn inspect_entry(index: usize, entry: &RawEntry) -> EntryInspection {
    let room = room_key(entry);
    EntryInspection {
        entry: index,
        subject: subject_name(entry).to_string(),
        teacher: teacher_key(entry).to_string(),
        room: room.name,
        campus: room.campus,
        group: group_key(entry).to_string(),
        lesson_type: message(lesson_type_from_title(&entry.subject_title)),
        time_slot: message(time_slot(&entry.time)),
        day: message(day_slot(entry.day)),
        week: message(week_type(entry.week)),
    }
}

pub fn inspect_entries(entries: &[RawEntry]) -> Vec<EntryInspection> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| inspect_entry(index, entry))
        .collect()
}
