//! Lesson materialization: one lesson per raw entry.
//!
//! All entries are resolved into lesson drafts before the first lesson is
//! created. In fail-fast mode a single unresolvable entry therefore leaves
//! the lesson repository untouched.

use sched_model::{EntityKind, NewLesson, RawEntry, RawField};
use sched_normalization::{day_slot, lesson_type_from_title, time_slot, week_type};
use sched_store::ScheduleStore;
use tracing::{debug, info, info_span, warn};

use crate::error::{IngestError, Result};
use crate::options::ErrorMode;
use crate::reference_set::ReferenceSet;
use crate::resolver::{
    Resolution, resolve_group, resolve_room, resolve_semester_subject, resolve_teacher,
};
use crate::summary::{MaterializeReport, SkippedEntry};

/// Resolve and classify every field of one entry.
pub fn materialize_entry(
    set: &ReferenceSet,
    index: usize,
    entry: &RawEntry,
) -> Result<NewLesson> {
    let semester_subject = match resolve_semester_subject(set, entry) {
        Resolution::Found(id) => id,
        Resolution::Missing(name) => {
            return Err(IngestError::unresolved(
                index,
                EntityKind::SemesterSubject,
                RawField::SubjectTitle,
                name,
            ));
        }
    };
    let lesson_type = lesson_type_from_title(&entry.subject_title)
        .map_err(|source| IngestError::classification(index, source))?;
    let teacher = match resolve_teacher(set, entry) {
        Resolution::Found(id) => id,
        Resolution::Missing(name) => {
            return Err(IngestError::unresolved(
                index,
                EntityKind::Teacher,
                RawField::Teacher,
                name,
            ));
        }
    };
    let room = match resolve_room(set, entry) {
        Resolution::Found(id) => id,
        Resolution::Missing(key) => {
            return Err(IngestError::unresolved(
                index,
                EntityKind::Room,
                RawField::Room,
                format!("{}@{}", key.name, key.campus),
            ));
        }
    };
    let time_slot =
        time_slot(&entry.time).map_err(|source| IngestError::classification(index, source))?;
    let day = day_slot(entry.day).map_err(|source| IngestError::classification(index, source))?;
    let week =
        week_type(entry.week).map_err(|source| IngestError::classification(index, source))?;
    let group = match resolve_group(set, entry) {
        Resolution::Found(id) => id,
        Resolution::Missing(name) => {
            return Err(IngestError::unresolved(
                index,
                EntityKind::StudyGroup,
                RawField::Group,
                name,
            ));
        }
    };

    Ok(NewLesson {
        semester_subject,
        lesson_type,
        group,
        teacher,
        room,
        time_slot,
        day,
        week,
    })
}

/// Materialize lessons for all entries against a complete reference set.
pub fn materialize_lessons<S: ScheduleStore + ?Sized>(
    store: &mut S,
    set: &ReferenceSet,
    entries: &[RawEntry],
    mode: ErrorMode,
) -> Result<MaterializeReport> {
    let span = info_span!("materialize", entries = entries.len());
    let _guard = span.enter();

    let mut drafts = Vec::with_capacity(entries.len());
    let mut skipped = Vec::new();
    for (index, entry) in entries.iter().enumerate() {
        match materialize_entry(set, index, entry) {
            Ok(draft) => drafts.push(draft),
            Err(error) => match mode {
                ErrorMode::FailFast => return Err(error),
                ErrorMode::CollectAndSkip => {
                    warn!(entry = index, %error, "skipping entry");
                    skipped.push(SkippedEntry::from(&error));
                }
            },
        }
    }

    let created = drafts.len();
    let lessons = store.lessons();
    for draft in drafts {
        let id = lessons.create(draft)?;
        debug!(%id, "created lesson");
    }
    info!(created, skipped = skipped.len(), "lesson pass complete");
    Ok(MaterializeReport { created, skipped })
}
