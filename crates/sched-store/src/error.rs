use sched_model::EntityKind;

/// Errors from repository operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A record with the same uniqueness key already exists.
    #[error("duplicate {entity} key {key}")]
    DuplicateKey { entity: EntityKind, key: String },
}

pub type Result<T> = std::result::Result<T, StoreError>;
