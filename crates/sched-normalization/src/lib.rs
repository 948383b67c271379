//! Schedule feed normalization.
//!
//! Pure functions that turn the free text and feed enumerations of a raw
//! schedule entry into the fixed vocabulary of `sched-model`:
//!
//! - **Lesson type** from the parenthesized qualifier of a subject title
//! - **Campus** from the location text (falls back to `Undefined`)
//! - **Time slot** from the start-time text
//! - **Day slot** and **week parity** from the feed enumerations
//!
//! Subject dedup keys are derived here as well, so the same title always
//! yields the same key.

mod error;

pub mod classify;
pub mod title;

pub use classify::{
    CAMPUS_FRAGMENTS, campus, day_slot, lesson_type, lesson_type_from_title, time_slot, week_type,
};
pub use error::ClassificationError;
pub use title::{lesson_qualifier, subject_key};
