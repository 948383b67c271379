//! Reference ingestion: rooms, teachers and subjects, then semester subjects.
//!
//! Each entity type gets one linear pass over all raw entries. Missing
//! entities are created through the store and added to the reference set
//! straight away, so later entries in the same pass resolve to them.

use sched_model::{
    EntityKind, NewRoom, NewSemesterSubject, NewSubject, NewTeacher, RawEntry, Record, Room,
    SemesterSubject, Subject, Teacher,
};
use sched_store::ScheduleStore;
use tracing::{debug, info, info_span, warn};

use crate::error::Result;
use crate::options::DuplicatePolicy;
use crate::reference_set::ReferenceSet;
use crate::resolver::{Resolution, resolve_room, resolve_subject, resolve_teacher};
use crate::summary::{PassReport, ReferenceReport};

enum Step {
    Created,
    Existing,
}

fn run_pass(
    entity: EntityKind,
    entries: &[RawEntry],
    policy: DuplicatePolicy,
    mut step: impl FnMut(&RawEntry) -> Result<Step>,
) -> Result<PassReport> {
    let span = info_span!("reference_pass", entity = %entity);
    let _guard = span.enter();

    let mut report = PassReport::default();
    for (index, entry) in entries.iter().enumerate() {
        match step(entry)? {
            Step::Created => report.created += 1,
            Step::Existing => {
                report.duplicates += 1;
                if policy == DuplicatePolicy::StopPass {
                    warn!(entry = index, "existing {entity} found, stopping pass");
                    report.stopped_at = Some(index);
                    break;
                }
            }
        }
    }
    info!(
        created = report.created,
        duplicates = report.duplicates,
        "{entity} pass complete"
    );
    Ok(report)
}

pub fn ingest_rooms<S: ScheduleStore + ?Sized>(
    store: &mut S,
    set: &mut ReferenceSet,
    entries: &[RawEntry],
    policy: DuplicatePolicy,
) -> Result<PassReport> {
    run_pass(EntityKind::Room, entries, policy, |entry| {
        match resolve_room(set, entry) {
            Resolution::Found(_) => Ok(Step::Existing),
            Resolution::Missing(key) => {
                let attrs = NewRoom {
                    name: key.name,
                    campus: key.campus,
                };
                let id = store.rooms().create(attrs.clone())?;
                debug!(%id, name = %attrs.name, campus = %attrs.campus, "created room");
                set.insert_room(&Room::from_attrs(id, attrs));
                Ok(Step::Created)
            }
        }
    })
}

pub fn ingest_teachers<S: ScheduleStore + ?Sized>(
    store: &mut S,
    set: &mut ReferenceSet,
    entries: &[RawEntry],
    policy: DuplicatePolicy,
) -> Result<PassReport> {
    run_pass(EntityKind::Teacher, entries, policy, |entry| {
        match resolve_teacher(set, entry) {
            Resolution::Found(_) => Ok(Step::Existing),
            Resolution::Missing(name) => {
                let id = store.teachers().create(NewTeacher { name: name.clone() })?;
                debug!(%id, %name, "created teacher");
                set.insert_teacher(&Teacher { id, name });
                Ok(Step::Created)
            }
        }
    })
}

pub fn ingest_subjects<S: ScheduleStore + ?Sized>(
    store: &mut S,
    set: &mut ReferenceSet,
    entries: &[RawEntry],
    policy: DuplicatePolicy,
) -> Result<PassReport> {
    run_pass(EntityKind::Subject, entries, policy, |entry| {
        match resolve_subject(set, entry) {
            Resolution::Found(_) => Ok(Step::Existing),
            Resolution::Missing(name) => {
                let id = store.subjects().create(NewSubject { name: name.clone() })?;
                debug!(%id, %name, "created subject");
                set.insert_subject(&Subject { id, name });
                Ok(Step::Created)
            }
        }
    })
}

/// Link every stored subject to the active semester, once, with zero quotas.
pub fn ingest_semester_subjects<S: ScheduleStore + ?Sized>(
    store: &mut S,
    set: &mut ReferenceSet,
) -> Result<usize> {
    let semester = set.semester();
    let mut created = 0usize;
    for subject in store.subjects().all() {
        if set.semester_subject(subject.id).is_some() {
            continue;
        }
        let attrs = NewSemesterSubject::zeroed(subject.id, semester);
        let id = store.semester_subjects().create(attrs.clone())?;
        debug!(%id, subject = %subject.name, "created semester subject");
        set.insert_semester_subject(&SemesterSubject::from_attrs(id, attrs));
        created += 1;
    }
    info!(created, "semester subject pass complete");
    Ok(created)
}

/// Run the room, teacher and subject passes, then generate semester subjects.
pub fn ingest_references<S: ScheduleStore + ?Sized>(
    store: &mut S,
    set: &mut ReferenceSet,
    entries: &[RawEntry],
    policy: DuplicatePolicy,
) -> Result<ReferenceReport> {
    let rooms = ingest_rooms(store, set, entries, policy)?;
    let teachers = ingest_teachers(store, set, entries, policy)?;
    let subjects = ingest_subjects(store, set, entries, policy)?;
    let semester_subjects = ingest_semester_subjects(store, set)?;
    Ok(ReferenceReport {
        rooms,
        teachers,
        subjects,
        semester_subjects,
    })
}
