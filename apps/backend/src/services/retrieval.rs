//! Read-only queries with explicit degraded-store handling.

use crate::db::Store;
use crate::error::Result;
use crate::models::{Flashcard, StudySession};

/// Outcome of a read when the store may be unreachable.
///
/// Callers in scope never see a hard error for an unreachable store; this
/// names that path so tests can assert on it instead of inferring it from
/// an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome<T> {
    /// Rows loaded from the store.
    Loaded(T),
    /// No store connection; the caller serves the empty equivalent.
    Degraded,
}

impl<T> ReadOutcome<T> {
    pub fn is_degraded(&self) -> bool {
        matches!(self, ReadOutcome::Degraded)
    }
}

impl<T: Default> ReadOutcome<T> {
    /// Collapse to the loaded value, or the type's empty value when degraded.
    pub fn or_default(self) -> T {
        match self {
            ReadOutcome::Loaded(value) => value,
            ReadOutcome::Degraded => T::default(),
        }
    }
}

/// All flashcards newest-first, optionally filtered by exact topic.
pub async fn list_flashcards(
    store: &Store,
    topic: Option<&str>,
) -> Result<ReadOutcome<Vec<Flashcard>>> {
    let mut conn = match store.connect().await {
        Ok(conn) => conn,
        Err(err) => {
            tracing::warn!("Store unavailable, serving empty flashcard list: {}", err);
            return Ok(ReadOutcome::Degraded);
        }
    };

    Ok(ReadOutcome::Loaded(conn.list_flashcards(topic).await?))
}

/// All study sessions, newest first.
pub async fn list_sessions(store: &Store) -> Result<ReadOutcome<Vec<StudySession>>> {
    let mut conn = match store.connect().await {
        Ok(conn) => conn,
        Err(err) => {
            tracing::warn!("Store unavailable, serving empty session list: {}", err);
            return Ok(ReadOutcome::Degraded);
        }
    };

    Ok(ReadOutcome::Loaded(conn.list_sessions().await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn or_default_collapses_degraded_to_empty() {
        let degraded: ReadOutcome<Vec<Flashcard>> = ReadOutcome::Degraded;
        assert!(degraded.is_degraded());
        assert!(degraded.or_default().is_empty());
    }

    #[test]
    fn or_default_passes_loaded_rows_through() {
        let loaded = ReadOutcome::Loaded(vec![1, 2, 3]);
        assert!(!loaded.is_degraded());
        assert_eq!(loaded.or_default(), vec![1, 2, 3]);
    }
}
