//! Builder-data gateway trait definition.
//!
//! The remote endpoint combines and prices a base item + variant pairing.
//! Uses RPITIT (native async fn in traits, Rust 2024 edition).
//! Implementations live in ringcraft-infra.

use std::sync::Arc;

use ringcraft_types::builder_data::BuilderData;
use ringcraft_types::error::GatewayError;

/// Read-only remote call for combined/priced builder data.
///
/// Either id may be absent: list pages fetch partial data for the steps
/// they can already show. Absent ids are omitted from the request.
pub trait BuilderDataGateway: Send + Sync {
    fn fetch(
        &self,
        base_item_id: Option<&str>,
        variant_id: Option<&str>,
    ) -> impl std::future::Future<Output = Result<BuilderData, GatewayError>> + Send;
}

impl<G: BuilderDataGateway> BuilderDataGateway for Arc<G> {
    fn fetch(
        &self,
        base_item_id: Option<&str>,
        variant_id: Option<&str>,
    ) -> impl std::future::Future<Output = Result<BuilderData, GatewayError>> + Send {
        (**self).fetch(base_item_id, variant_id)
    }
}
