//! Admin configuration endpoints.
//!
//! Endpoints:
//! - GET /api/v1/admin/config - Read the storefront config blob
//! - PUT /api/v1/admin/config - Replace the blob wholesale
//!
//! The admin screen edits the five feature mappings as one document and
//! saves them in a single write, so the PUT takes the whole blob; there is
//! no per-feature endpoint.

use std::time::Instant;

use axum::Json;
use axum::extract::State;

use ringcraft_core::settings::{load_storefront_config, save_storefront_config};
use ringcraft_types::config::StorefrontConfig;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/admin/config - Read the storefront config blob.
///
/// A store with nothing configured yet returns the empty blob.
pub async fn get_config(
    State(state): State<AppState>,
) -> Result<ApiResponse<StorefrontConfig>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let config = load_storefront_config(state.settings.as_ref()).await?;

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(ApiResponse::success(config, request_id, elapsed))
}

/// PUT /api/v1/admin/config - Replace the storefront config blob.
///
/// Returns the saved blob.
pub async fn update_config(
    State(state): State<AppState>,
    Json(config): Json<StorefrontConfig>,
) -> Result<ApiResponse<StorefrontConfig>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    save_storefront_config(state.settings.as_ref(), &config).await?;
    tracing::info!("storefront configuration updated");

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(ApiResponse::success(config, request_id, elapsed))
}
