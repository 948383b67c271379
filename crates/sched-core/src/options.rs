//! Configuration options for schedule ingestion.

use serde::{Deserialize, Serialize};

/// Semester context generated semester subjects are attached to by default.
pub const DEFAULT_SEMESTER: &str = "Fake_Semester";

/// What a reference pass does when an entry resolves to an existing entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DuplicatePolicy {
    /// Skip the duplicate entry and keep scanning.
    #[default]
    SkipDuplicate,
    /// Stop the whole pass at the first existing match.
    ///
    /// Entities for every later entry are left uncreated, so lesson
    /// materialization will usually fail to resolve them.
    StopPass,
}

/// How lesson materialization reacts to an entry that cannot be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ErrorMode {
    /// Abort on the first bad entry; no lesson is created.
    #[default]
    FailFast,
    /// Skip bad entries, report them in the summary, create the rest.
    CollectAndSkip,
}

/// Options controlling one ingestion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestOptions {
    /// Name of the semester semester subjects and lessons belong to.
    pub semester: String,

    pub duplicate_policy: DuplicatePolicy,

    pub error_mode: ErrorMode,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            semester: DEFAULT_SEMESTER.to_string(),
            duplicate_policy: DuplicatePolicy::default(),
            error_mode: ErrorMode::default(),
        }
    }
}

impl IngestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options reproducing the historical feed importer: reference passes
    /// stop at the first pre-existing match.
    pub fn historical() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::StopPass,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_semester(mut self, semester: impl Into<String>) -> Self {
        self.semester = semester.into();
        self
    }

    #[must_use]
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    #[must_use]
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }
}
