//! Storefront endpoints backing the embedded configurator widget.
//!
//! Endpoints:
//! - POST /api/v1/storefront/evaluate     - Run the step-flow evaluation
//! - GET  /api/v1/storefront/builder-data - Fetch combined/priced data
//!
//! The evaluate endpoint is stateless: shopper session state lives in the
//! embedding page's session storage. The page sends its snapshot, the
//! server runs the same mutate-then-read pipeline against a throwaway
//! store, and the page writes the returned effective selections back.

use std::time::Instant;

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use ringcraft_core::flow::{PageEvaluation, PageQuery, evaluate_page_view};
use ringcraft_core::gateway::BuilderDataGateway;
use ringcraft_core::session::SessionSelections;
use ringcraft_core::settings::load_storefront_config;
use ringcraft_infra::session::MemorySessionStore;
use ringcraft_types::builder_data::BuilderData;
use ringcraft_types::page::PageRole;
use ringcraft_types::selection::Selections;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Request body for the evaluate endpoint.
#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    /// The role the hosting page declares for itself.
    pub page_role: PageRole,
    /// The page's session-storage snapshot.
    #[serde(default)]
    pub session: Selections,
    /// A variant id carried by the page URL, if any.
    #[serde(default)]
    pub variant_id: Option<String>,
}

/// POST /api/v1/storefront/evaluate - Run the step-flow evaluation.
pub async fn evaluate(
    State(state): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> Result<ApiResponse<PageEvaluation>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let config = load_storefront_config(state.settings.as_ref()).await?;
    let store = seed_session(&request.session);
    let query = PageQuery {
        variant_id: request.variant_id,
    };

    let evaluation = evaluate_page_view(
        request.page_role,
        &store,
        &query,
        &config.redirect_targets(),
    );

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(ApiResponse::success(evaluation, request_id, elapsed))
}

/// Materialize the page's session snapshot into a throwaway store.
///
/// The base item is recorded before the size so the size survives seeding
/// (recording a base item drops any previously recorded size).
fn seed_session(session: &Selections) -> MemorySessionStore {
    let store = MemorySessionStore::new();
    if let Some(id) = &session.base_item_id {
        store.select_base_item(id);
    }
    if let Some(size) = &session.size {
        store.select_size(size);
    }
    if let Some(id) = &session.variant_id {
        store.select_variant(id);
    }
    store
}

/// Query parameters for the builder-data endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct BuilderDataQuery {
    pub product_id: Option<String>,
    pub variant_id: Option<String>,
}

/// GET /api/v1/storefront/builder-data - Fetch combined/priced data for
/// the current selections from the pricing backend.
pub async fn builder_data(
    State(state): State<AppState>,
    Query(query): Query<BuilderDataQuery>,
) -> Result<ApiResponse<BuilderData>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let data = state
        .gateway
        .fetch(query.product_id.as_deref(), query.variant_id.as_deref())
        .await?;

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(ApiResponse::success(data, request_id, elapsed))
}
