use std::path::PathBuf;

use serde::Serialize;

use sched_core::IngestSummary;
use sched_ingest::SeedReport;

#[derive(Debug, Serialize)]
pub struct IngestRun {
    pub feed: PathBuf,
    pub semester: String,
    pub seed: SeedReport,
    pub summary: IngestSummary,
    /// Where the normalized store was written, when requested.
    pub output: Option<PathBuf>,
}
