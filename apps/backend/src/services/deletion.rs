//! Flashcard deletion, the one path that fails loud when the store is down.

use crate::db::Store;
use crate::error::{ApiError, Result};

/// Delete a flashcard by id.
///
/// Reports success whether or not the id existed; no existence check is
/// performed. An unreachable store surfaces as a server error.
pub async fn delete_flashcard(store: &Store, id: i64) -> Result<()> {
    let mut conn = store
        .connect()
        .await
        .map_err(|err| ApiError::StoreUnavailable(err.to_string()))?;

    conn.delete_flashcard(id).await?;
    Ok(())
}
