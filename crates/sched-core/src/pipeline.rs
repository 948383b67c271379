//! Schedule ingestion pipeline.
//!
//! The stages run in a fixed order:
//! 1. **Load**: index the entities the store already holds for the semester
//! 2. **References**: rooms, teachers, subjects, then semester subjects
//! 3. **Lessons**: resolve every entry against the complete reference set
//!
//! Lesson materialization needs the complete reference set, so a caller may
//! stop between stages but never in the middle of one.

use std::time::Instant;

use sched_model::RawEntry;
use sched_store::ScheduleStore;
use tracing::{info, info_span};

use crate::error::Result;
use crate::materialize::materialize_lessons;
use crate::options::IngestOptions;
use crate::reference_set::ReferenceSet;
use crate::references::ingest_references;
use crate::summary::IngestSummary;

/// Ingest a finite sequence of raw entries into `store`.
///
/// Returns the created counts, or the first fatal error. The reference set
/// built here lives only for this call.
pub fn ingest<S: ScheduleStore + ?Sized>(
    store: &mut S,
    entries: &[RawEntry],
    options: &IngestOptions,
) -> Result<IngestSummary> {
    let span = info_span!("ingest", semester = %options.semester, entries = entries.len());
    let _guard = span.enter();
    let start = Instant::now();

    let mut set = ReferenceSet::load(store, &options.semester)?;
    let references = ingest_references(store, &mut set, entries, options.duplicate_policy)?;
    let lessons = materialize_lessons(store, &set, entries, options.error_mode)?;

    let summary = IngestSummary::from_reports(entries.len(), references, lessons);
    info!(
        rooms = summary.rooms.created,
        teachers = summary.teachers.created,
        subjects = summary.subjects.created,
        semester_subjects = summary.semester_subjects,
        lessons = summary.lessons,
        skipped = summary.skipped.len(),
        duration_ms = start.elapsed().as_millis(),
        "ingestion complete"
    );
    Ok(summary)
}
