//! HTTP Handlers

use axum::{extract::State, Json};
use serde::Serialize;

use pricing_core::{BasePath, PricingOption};

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub base_path: BasePath,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        base_path: state.catalog.base_path().clone(),
    })
}

/// Pricing menu entries in display order
pub async fn list_pricing(State(state): State<AppState>) -> Json<Vec<PricingOption>> {
    let options = state.catalog.list().to_vec();
    tracing::debug!("Serving {} pricing options", options.len());
    Json(options)
}
