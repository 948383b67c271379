use serde::{Deserialize, Serialize};

use sched_model::RawField;

use crate::error::IngestError;

/// Outcome of one reference pass over the raw entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassReport {
    pub created: usize,
    /// Entries whose entity already existed.
    pub duplicates: usize,
    /// Entry index at which the pass stopped under `DuplicatePolicy::StopPass`.
    pub stopped_at: Option<usize>,
}

impl PassReport {
    pub fn stopped_early(&self) -> bool {
        self.stopped_at.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceReport {
    pub rooms: PassReport,
    pub teachers: PassReport,
    pub subjects: PassReport,
    pub semester_subjects: usize,
}

/// An entry left out of materialization in `ErrorMode::CollectAndSkip`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedEntry {
    pub entry: usize,
    pub field: Option<RawField>,
    pub value: Option<String>,
    pub message: String,
}

impl From<&IngestError> for SkippedEntry {
    fn from(error: &IngestError) -> Self {
        Self {
            entry: error.entry().unwrap_or_default(),
            field: error.field(),
            value: error.value().map(str::to_string),
            message: error.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterializeReport {
    pub created: usize,
    pub skipped: Vec<SkippedEntry>,
}

/// Result of one successful ingestion run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestSummary {
    pub entries: usize,
    pub rooms: PassReport,
    pub teachers: PassReport,
    pub subjects: PassReport,
    pub semester_subjects: usize,
    pub lessons: usize,
    pub skipped: Vec<SkippedEntry>,
}

impl IngestSummary {
    pub(crate) fn from_reports(
        entries: usize,
        references: ReferenceReport,
        lessons: MaterializeReport,
    ) -> Self {
        Self {
            entries,
            rooms: references.rooms,
            teachers: references.teachers,
            subjects: references.subjects,
            semester_subjects: references.semester_subjects,
            lessons: lessons.created,
            skipped: lessons.skipped,
        }
    }

    pub fn has_skipped(&self) -> bool {
        !self.skipped.is_empty()
    }

    /// True when any reference pass stopped before the last entry.
    pub fn stopped_early(&self) -> bool {
        self.rooms.stopped_early() || self.teachers.stopped_early() || self.subjects.stopped_early()
    }
}
