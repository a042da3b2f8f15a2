//! SQLite settings store implementation.
//!
//! Implements `SettingsStore` from `ringcraft-core` over a flat,
//! store-wide key namespace. Values are stored as JSON text and
//! deserialized on read; the admin surface writes the whole config blob
//! under one key.

use chrono::Utc;
use sqlx::Row;

use ringcraft_core::settings::SettingsStore;
use ringcraft_types::error::StorageError;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `SettingsStore`.
pub struct SqliteSettingsStore {
    pool: DatabasePool,
}

impl SqliteSettingsStore {
    /// Create a settings store backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

impl SettingsStore for SqliteSettingsStore {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StorageError> {
        let row = sqlx::query("SELECT value FROM storefront_settings WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| StorageError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let value_str: String = row
                    .try_get("value")
                    .map_err(|e| StorageError::Query(e.to_string()))?;
                let value: serde_json::Value = serde_json::from_str(&value_str)
                    .map_err(|e| StorageError::Query(format!("invalid JSON value: {e}")))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &serde_json::Value) -> Result<(), StorageError> {
        let now = Utc::now().to_rfc3339();
        let value_str = serde_json::to_string(value)
            .map_err(|e| StorageError::Query(format!("failed to serialize value: {e}")))?;

        sqlx::query(
            r#"INSERT INTO storefront_settings (key, value, created_at, updated_at)
               VALUES (?, ?, ?, ?)
               ON CONFLICT (key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at"#,
        )
        .bind(key)
        .bind(&value_str)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool.writer)
        .await
        .map_err(|e| StorageError::Query(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM storefront_settings WHERE key = ?")
            .bind(key)
            .execute(&self.pool.writer)
            .await
            .map_err(|e| StorageError::Query(e.to_string()))?;

        Ok(())
    }
}
