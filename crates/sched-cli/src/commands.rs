use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use sched_core::{
    DuplicatePolicy, EntryInspection, ErrorMode, IngestOptions, ingest, inspect_entries,
};
use sched_ingest::{Seed, install_seed, load_seed, read_entries};
use sched_model::{Lesson, Room, Semester, SemesterSubject, StudyGroup, Subject, Teacher};
use sched_store::InMemoryStore;

use crate::cli::{EntriesArgs, IngestArgs};
use crate::types::IngestRun;

/// Everything an ingestion run leaves in the store.
#[derive(Serialize)]
struct StoreSnapshot<'a> {
    semesters: Vec<&'a Semester>,
    groups: Vec<&'a StudyGroup>,
    rooms: Vec<&'a Room>,
    teachers: Vec<&'a Teacher>,
    subjects: Vec<&'a Subject>,
    semester_subjects: Vec<&'a SemesterSubject>,
    lessons: Vec<&'a Lesson>,
}

impl<'a> StoreSnapshot<'a> {
    fn new(store: &'a InMemoryStore) -> Self {
        Self {
            semesters: store.semesters.iter().collect(),
            groups: store.groups.iter().collect(),
            rooms: store.rooms.iter().collect(),
            teachers: store.teachers.iter().collect(),
            subjects: store.subjects.iter().collect(),
            semester_subjects: store.semester_subjects.iter().collect(),
            lessons: store.lessons.iter().collect(),
        }
    }
}

/// Build ingestion options from CLI flags.
pub fn ingest_options(args: &IngestArgs, seed: &Seed) -> IngestOptions {
    let semester = args
        .semester
        .clone()
        .unwrap_or_else(|| seed.semester.clone());
    IngestOptions::new()
        .with_semester(semester)
        .with_duplicate_policy(if args.stop_on_duplicate {
            DuplicatePolicy::StopPass
        } else {
            DuplicatePolicy::SkipDuplicate
        })
        .with_error_mode(if args.keep_going {
            ErrorMode::CollectAndSkip
        } else {
            ErrorMode::FailFast
        })
}

pub fn run_ingest(args: &IngestArgs) -> Result<IngestRun> {
    let span = info_span!("feed", path = %args.feed.display());
    let _guard = span.enter();

    let entries = read_entries(&args.feed)
        .with_context(|| format!("load feed {}", args.feed.display()))?;
    let seed = match &args.seed {
        Some(path) => load_seed(path).with_context(|| format!("load seed {}", path.display()))?,
        None => Seed::default(),
    };

    let mut store = InMemoryStore::new();
    let seed_report = install_seed(&mut store, &seed).context("install seed")?;
    let options = ingest_options(args, &seed);
    info!(
        entries = entries.len(),
        semester = %options.semester,
        policy = ?options.duplicate_policy,
        mode = ?options.error_mode,
        "starting ingestion"
    );
    let summary = ingest(&mut store, &entries, &options).context("ingest feed")?;

    if let Some(path) = &args.output {
        write_snapshot(&store, path)?;
    }

    Ok(IngestRun {
        feed: args.feed.clone(),
        semester: options.semester,
        seed: seed_report,
        summary,
        output: args.output.clone(),
    })
}

fn write_snapshot(store: &InMemoryStore, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&StoreSnapshot::new(store))
        .context("serialize normalized store")?;
    std::fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), "wrote normalized store");
    Ok(())
}

pub fn run_entries(args: &EntriesArgs) -> Result<Vec<EntryInspection>> {
    let entries = read_entries(&args.feed)
        .with_context(|| format!("load feed {}", args.feed.display()))?;
    let mut inspections = inspect_entries(&entries);
    if args.errors_only {
        inspections.retain(|inspection| inspection.error_count() > 0);
    }
    Ok(inspections)
}
