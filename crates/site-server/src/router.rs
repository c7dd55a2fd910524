//! Router
//!
//! All routes live under the catalog's base path so API links and page links
//! share one prefix.

use std::path::Path;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::handlers::{health_check, list_pricing};
use crate::state::AppState;

pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    let base = state.catalog.base_path().clone();

    let index = ServeFile::new(static_dir.join("index.html"));

    // Unknown paths go to index.html so the frontend router can take them
    let frontend = ServeDir::new(static_dir).fallback(index.clone());

    let site = Router::new()
        .route("/health", get(health_check))
        .route("/api/pricing", get(list_pricing))
        .fallback_service(frontend)
        .with_state(state);

    let app = if base.is_root() {
        site
    } else {
        // nest() does not match the bare `{base}/` index URL
        Router::new()
            .route_service(&format!("{base}/"), index)
            .nest(base.as_str(), site)
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    app.layer(cors).layer(TraceLayer::new_for_http())
}
