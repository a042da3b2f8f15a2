//! HTTP builder-data gateway.
//!
//! Calls the builder-data backend's `/data/ring-builder` endpoint and
//! unwraps its `{ "result": ... }` envelope. Absent ids are omitted from
//! the query string; the backend prices whatever subset it is given.

use std::time::Duration;

use serde::Deserialize;

use ringcraft_core::gateway::BuilderDataGateway;
use ringcraft_types::builder_data::BuilderData;
use ringcraft_types::error::GatewayError;

/// `BuilderDataGateway` over the remote pricing backend.
pub struct HttpBuilderDataGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBuilderDataGateway {
    /// Create a gateway against the given backend base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Override the base URL (useful for tests or proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn url(&self) -> String {
        format!("{}/data/ring-builder", self.base_url.trim_end_matches('/'))
    }
}

/// Response envelope the backend wraps every payload in.
#[derive(Debug, Deserialize)]
struct BuilderDataEnvelope {
    result: serde_json::Value,
}

impl BuilderDataGateway for HttpBuilderDataGateway {
    async fn fetch(
        &self,
        base_item_id: Option<&str>,
        variant_id: Option<&str>,
    ) -> Result<BuilderData, GatewayError> {
        let mut params: Vec<(&str, &str)> = Vec::with_capacity(2);
        if let Some(id) = base_item_id {
            params.push(("product_id", id));
        }
        if let Some(id) = variant_id {
            params.push(("variant_id", id));
        }

        let response = self
            .client
            .get(self.url())
            .query(&params)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Http {
                status: status.as_u16(),
            });
        }

        let envelope: BuilderDataEnvelope = response
            .json()
            .await
            .map_err(|e| GatewayError::Deserialization(e.to_string()))?;

        Ok(BuilderData {
            base_item_id: base_item_id.map(str::to_string),
            variant_id: variant_id.map(str::to_string),
            payload: envelope.result,
        })
    }
}
