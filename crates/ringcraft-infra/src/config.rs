//! Service configuration loader for Ringcraft.
//!
//! Reads `config.toml` from the data directory (`~/.ringcraft/` in
//! production) and deserializes it into [`ServiceConfig`]. Falls back to
//! sensible defaults when the file is missing or malformed.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Deployment settings for the Ringcraft service.
///
/// Loaded from `{data_dir}/config.toml`. All fields have defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the builder-data backend.
    #[serde(default = "default_builder_data_url")]
    pub builder_data_url: String,

    /// Host the API binds to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port the API binds to.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_builder_data_url() -> String {
    "http://127.0.0.1:8900".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8780
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            builder_data_url: default_builder_data_url(),
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Resolve the data directory: `RINGCRAFT_DATA_DIR` or `~/.ringcraft`.
pub fn resolve_data_dir() -> PathBuf {
    match std::env::var("RINGCRAFT_DATA_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".ringcraft")
        }
    }
}

/// Load service configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`ServiceConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the
///   default.
pub async fn load_service_config(data_dir: &Path) -> ServiceConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("no config.toml at {}, using defaults", config_path.display());
            return ServiceConfig::default();
        }
        Err(err) => {
            tracing::warn!("failed to read {}: {err}, using defaults", config_path.display());
            return ServiceConfig::default();
        }
    };

    match toml::from_str::<ServiceConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            ServiceConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_service_config(tmp.path()).await;
        assert_eq!(config.builder_data_url, "http://127.0.0.1:8900");
        assert_eq!(config.port, 8780);
    }

    #[tokio::test]
    async fn test_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            r#"
builder_data_url = "https://builder.example.com"
port = 9000
"#,
        )
        .await
        .unwrap();

        let config = load_service_config(tmp.path()).await;
        assert_eq!(config.builder_data_url, "https://builder.example.com");
        assert_eq!(config.port, 9000);
        // Unspecified fields keep their defaults.
        assert_eq!(config.host, "127.0.0.1");
    }

    #[tokio::test]
    async fn test_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_service_config(tmp.path()).await;
        assert_eq!(config.port, 8780);
    }
}
