//! Settings store trait and typed access to the storefront config blob.
//!
//! The admin surface persists one JSON blob per key; the configurator only
//! ever uses the `ringbuilderconfig` key. Uses RPITIT (native async fn in
//! traits, Rust 2024 edition). Implementations live in ringcraft-infra.

use ringcraft_types::config::{CONFIG_KEY, StorefrontConfig};
use ringcraft_types::error::{ConfigError, StorageError};

/// Generic string-keyed JSON settings storage.
pub trait SettingsStore: Send + Sync {
    /// Get a value by key. Returns None if the key does not exist.
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<serde_json::Value>, StorageError>> + Send;

    /// Set a value for a key (upsert).
    fn set(
        &self,
        key: &str,
        value: &serde_json::Value,
    ) -> impl std::future::Future<Output = Result<(), StorageError>> + Send;

    /// Delete a key. No-op if key does not exist.
    fn delete(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<(), StorageError>> + Send;
}

/// Load the storefront configuration blob.
///
/// A store with no blob yet (fresh install) and a blob that fails to parse
/// both load as the empty default; the latter is logged. Neither is an
/// error to the caller -- an unconfigured flow degrades, it doesn't crash.
pub async fn load_storefront_config<S>(store: &S) -> Result<StorefrontConfig, StorageError>
where
    S: SettingsStore + ?Sized,
{
    match store.get(CONFIG_KEY).await? {
        Some(value) => match serde_json::from_value(value) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!(error = %err, "malformed storefront config blob, using defaults");
                Ok(StorefrontConfig::default())
            }
        },
        None => Ok(StorefrontConfig::default()),
    }
}

/// Replace the storefront configuration blob wholesale.
pub async fn save_storefront_config<S>(
    store: &S,
    config: &StorefrontConfig,
) -> Result<(), ConfigError>
where
    S: SettingsStore + ?Sized,
{
    let value =
        serde_json::to_value(config).map_err(|e| ConfigError::InvalidBlob(e.to_string()))?;
    store.set(CONFIG_KEY, &value).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemorySettings {
        entries: Mutex<HashMap<String, serde_json::Value>>,
    }

    impl SettingsStore for InMemorySettings {
        async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StorageError> {
            Ok(self.entries.lock().unwrap().get(key).cloned())
        }

        async fn set(&self, key: &str, value: &serde_json::Value) -> Result<(), StorageError> {
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), value.clone());
            Ok(())
        }

        async fn delete(&self, key: &str) -> Result<(), StorageError> {
            self.entries.lock().unwrap().remove(key);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_missing_blob_loads_default() {
        let store = InMemorySettings::default();
        let config = load_storefront_config(&store).await.unwrap();
        assert_eq!(config, StorefrontConfig::default());
    }

    #[tokio::test]
    async fn test_save_load_roundtrip() {
        let store = InMemorySettings::default();
        let config = StorefrontConfig {
            base_item_list: Some("engagement-rings".to_string()),
            complete_page: Some("complete-your-ring".to_string()),
            ..Default::default()
        };

        save_storefront_config(&store, &config).await.unwrap();
        let loaded = load_storefront_config(&store).await.unwrap();
        assert_eq!(loaded, config);
    }

    #[tokio::test]
    async fn test_save_replaces_wholesale() {
        let store = InMemorySettings::default();
        let first = StorefrontConfig {
            base_item_list: Some("engagement-rings".to_string()),
            variant_list: Some("start-with-a-diamond".to_string()),
            ..Default::default()
        };
        save_storefront_config(&store, &first).await.unwrap();

        // The second save omits variant_list; it must not survive.
        let second = StorefrontConfig {
            base_item_list: Some("wedding-bands".to_string()),
            ..Default::default()
        };
        save_storefront_config(&store, &second).await.unwrap();

        let loaded = load_storefront_config(&store).await.unwrap();
        assert_eq!(loaded, second);
        assert!(loaded.variant_list.is_none());
    }

    #[tokio::test]
    async fn test_malformed_blob_loads_default() {
        let store = InMemorySettings::default();
        store
            .set(CONFIG_KEY, &serde_json::json!(["not", "an", "object"]))
            .await
            .unwrap();

        let config = load_storefront_config(&store).await.unwrap();
        assert_eq!(config, StorefrontConfig::default());
    }
}
