//! Schedule ingestion core.
//!
//! Normalizes a flat sequence of raw schedule entries into rooms, teachers,
//! subjects, semester subjects and lessons:
//!
//! - [`resolver`]: dedup keys and lookups against a [`ReferenceSet`]
//! - [`references`]: one creating pass per reference entity type
//! - [`materialize`]: one lesson per entry, all foreign keys resolved
//! - [`pipeline`]: the `ingest` entry point running the stages in order
//!
//! # Example
//!
//! ```ignore
//! use sched_core::{IngestOptions, ingest};
//! use sched_store::InMemoryStore;
//!
//! let mut store = InMemoryStore::new();
//! // seed the semester and study groups first
//! let summary = ingest(&mut store, &entries, &IngestOptions::default())?;
//! println!("{} lessons", summary.lessons);
//! ```

mod error;
mod options;
mod summary;

pub mod inspect;
pub mod materialize;
pub mod pipeline;
pub mod reference_set;
pub mod references;
pub mod resolver;

pub use error::{IngestError, Result};
pub use inspect::{EntryInspection, inspect_entries, inspect_entry};
pub use options::{DEFAULT_SEMESTER, DuplicatePolicy, ErrorMode, IngestOptions};
pub use pipeline::ingest;
pub use reference_set::{ReferenceSet, RoomKey};
pub use resolver::Resolution;
pub use summary::{IngestSummary, MaterializeReport, PassReport, ReferenceReport, SkippedEntry};
