use sched_model::{EntityKind, RawField};
use sched_normalization::ClassificationError;
use sched_store::StoreError;

/// Fatal ingestion errors.
///
/// Entry-level variants carry the index of the raw entry, the field and the
/// offending value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IngestError {
    #[error("entry {entry}: {source}")]
    Classification {
        entry: usize,
        #[source]
        source: ClassificationError,
    },

    #[error("entry {entry}: no {entity} matches {field} {value:?}")]
    Resolution {
        entry: usize,
        entity: EntityKind,
        field: RawField,
        value: String,
    },

    #[error("semester {name:?} does not exist")]
    UnknownSemester { name: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IngestError {
    pub(crate) fn classification(entry: usize, source: ClassificationError) -> Self {
        Self::Classification { entry, source }
    }

    pub(crate) fn unresolved(
        entry: usize,
        entity: EntityKind,
        field: RawField,
        value: impl Into<String>,
    ) -> Self {
        Self::Resolution {
            entry,
            entity,
            field,
            value: value.into(),
        }
    }

    /// Index of the raw entry the error refers to.
    pub fn entry(&self) -> Option<usize> {
        match self {
            Self::Classification { entry, .. } | Self::Resolution { entry, .. } => Some(*entry),
            Self::UnknownSemester { .. } | Self::Store(_) => None,
        }
    }

    pub fn field(&self) -> Option<RawField> {
        match self {
            Self::Classification { source, .. } => Some(source.field),
            Self::Resolution { field, .. } => Some(*field),
            Self::UnknownSemester { .. } | Self::Store(_) => None,
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Classification { source, .. } => Some(&source.value),
            Self::Resolution { value, .. } => Some(value),
            Self::UnknownSemester { name } => Some(name),
            Self::Store(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
