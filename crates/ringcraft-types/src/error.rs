use thiserror::Error;

/// Errors from the settings store (used by trait definitions in
/// ringcraft-core).
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entry not found")]
    NotFound,
}

/// Errors from the remote builder-data gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("builder-data endpoint returned status {status}")]
    Http { status: u16 },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

/// Errors handling the storefront configuration blob.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration blob: {0}")]
    InvalidBlob(String),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::Query("syntax error".to_string());
        assert_eq!(err.to_string(), "query error: syntax error");
    }

    #[test]
    fn test_gateway_error_display() {
        let err = GatewayError::Http { status: 503 };
        assert_eq!(err.to_string(), "builder-data endpoint returned status 503");
    }

    #[test]
    fn test_config_error_wraps_storage() {
        let err: ConfigError = StorageError::Connection.into();
        assert!(err.to_string().contains("database connection error"));
    }
}
