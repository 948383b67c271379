use sched_model::RawField;

/// A feed value that maps to no value of the target vocabulary.
///
/// Never retried: the same input always classifies the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized {field} value {value:?}")]
pub struct ClassificationError {
    pub field: RawField,
    pub value: String,
}

impl ClassificationError {
    pub(crate) fn new(field: RawField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}
