//! Schedule feed loading.
//!
//! Boundary crate between files on disk and the ingestion core: reads
//! already-fetched raw entries and installs the seed reference data
//! (course, semester, study groups) into a store.

mod error;

pub mod entries;
pub mod seed;

pub use entries::{FeedFormat, read_entries, read_entries_csv, read_entries_json};
pub use error::{Result, SourceError};
pub use seed::{Seed, SeedReport, install_seed, load_seed};
