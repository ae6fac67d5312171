use sea_orm::DbErr;
use serde::Serialize;

use crate::profile::application::ports::outgoing::ProfileStoreError;

/// Serialises a file or show list into its jsonb column value.
pub fn to_json<T: Serialize>(data: &T) -> Result<serde_json::Value, ProfileStoreError> {
    serde_json::to_value(data).map_err(|e| ProfileStoreError::Database(e.to_string()))
}

pub fn map_db_err(e: DbErr) -> ProfileStoreError {
    ProfileStoreError::Database(e.to_string())
}
