//! Seed reference data: the study course, semester and study groups that
//! must exist before a feed can be ingested.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use sched_model::{NewSemester, NewStudyCourse, NewStudyGroup};
use sched_store::ScheduleStore;

use crate::error::{Result, SourceError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    pub course: String,
    pub semester: String,
    pub groups: Vec<String>,
}

impl Default for Seed {
    /// Placeholder course and semester with groups `M3201`..`M3212`.
    fn default() -> Self {
        Self {
            course: "Fake_Course".to_string(),
            semester: "Fake_Semester".to_string(),
            groups: (1..=12).map(|n| format!("M32{n:02}")).collect(),
        }
    }
}

/// Counts of seed entities created by [`install_seed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub courses: usize,
    pub semesters: usize,
    pub groups: usize,
}

pub fn load_seed(path: &Path) -> Result<Seed> {
    let contents = std::fs::read_to_string(path).map_err(|source| SourceError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| SourceError::JsonParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Create whatever part of the seed the store does not hold yet.
pub fn install_seed<S: ScheduleStore + ?Sized>(store: &mut S, seed: &Seed) -> Result<SeedReport> {
    let mut report = SeedReport::default();

    let existing_course = store
        .courses()
        .find(&|c| c.name == seed.course)
        .first()
        .map(|c| c.id);
    let course = match existing_course {
        Some(id) => id,
        None => {
            report.courses += 1;
            store.courses().create(NewStudyCourse {
                name: seed.course.clone(),
            })?
        }
    };

    if store
        .semesters()
        .find(&|s| s.name == seed.semester)
        .is_empty()
    {
        store.semesters().create(NewSemester {
            name: seed.semester.clone(),
            course,
        })?;
        report.semesters += 1;
    }

    for name in &seed.groups {
        if !store.groups().find(&|g| &g.name == name).is_empty() {
            debug!(group = %name, "study group already present");
            continue;
        }
        store.groups().create(NewStudyGroup {
            name: name.clone(),
            course,
        })?;
        report.groups += 1;
    }

    info!(
        course = %seed.course,
        semester = %seed.semester,
        groups = report.groups,
        "installed seed data"
    );
    Ok(report)
}
