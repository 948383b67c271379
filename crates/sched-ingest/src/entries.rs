//! Raw entry loading.
//!
//! The feed client that fetches schedules is not part of this crate; it is
//! expected to have dumped the already-fetched entries to a file, either as
//! a JSON array or as CSV with the header
//! `room,teacher,subject_title,place,time,day,week,group`.

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::{debug, info};

use sched_model::RawEntry;

use crate::error::{Result, SourceError};

/// Feed file formats, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedFormat {
    Json,
    Csv,
}

impl FeedFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(|ext| ext.to_str())?;
        if ext.eq_ignore_ascii_case("json") {
            Some(FeedFormat::Json)
        } else if ext.eq_ignore_ascii_case("csv") {
            Some(FeedFormat::Csv)
        } else {
            None
        }
    }
}

/// Read all raw entries from a `.json` or `.csv` feed file, in file order.
pub fn read_entries(path: &Path) -> Result<Vec<RawEntry>> {
    let entries = match FeedFormat::from_path(path) {
        Some(FeedFormat::Json) => read_entries_json(path)?,
        Some(FeedFormat::Csv) => read_entries_csv(path)?,
        None => {
            return Err(SourceError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
    };
    info!(path = %path.display(), entries = entries.len(), "loaded raw entries");
    Ok(entries)
}

pub fn read_entries_json(path: &Path) -> Result<Vec<RawEntry>> {
    let contents = std::fs::read_to_string(path).map_err(|source| SourceError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| SourceError::JsonParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Empty `day`/`week` cells read as missing values.
pub fn read_entries_csv(path: &Path) -> Result<Vec<RawEntry>> {
    let file = File::open(path).map_err(|source| SourceError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(file);

    let mut entries = Vec::new();
    for (index, record) in reader.deserialize::<RawEntry>().enumerate() {
        let entry = record.map_err(|source| SourceError::CsvParse {
            path: path.to_path_buf(),
            line: source
                .position()
                .map_or(index as u64 + 2, |position| position.line()),
            source,
        })?;
        entries.push(entry);
    }
    debug!(path = %path.display(), rows = entries.len(), "parsed CSV feed");
    Ok(entries)
}
