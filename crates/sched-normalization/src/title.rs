//! Subject title parsing.
//!
//! Feed titles look like `Algorithms(ЛЕК)`: the subject name followed by a
//! parenthesized lesson-type qualifier.

/// Dedup key of the subject a title refers to: everything before the first
/// `(`, trimmed. A title without a qualifier is its own key.
pub fn subject_key(title: &str) -> &str {
    match title.split_once('(') {
        Some((name, _)) => name.trim(),
        None => title.trim(),
    }
}

/// Text inside the first parenthesized group of a title, as written.
///
/// Returns `None` when the title has no complete `( ... )` group.
pub fn lesson_qualifier(title: &str) -> Option<&str> {
    let (_, rest) = title.split_once('(')?;
    let (inner, _) = rest.split_once(')')?;
    Some(inner)
}
