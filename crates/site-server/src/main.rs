//! studio-site HTTP Server
//!
//! Axum-based server exposing the pricing menu as JSON and serving the
//! compiled WASM frontend, all under the configured base path.

mod handlers;
mod router;
mod state;

use std::path::PathBuf;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pricing_core::PricingCatalog;

use crate::router::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment before anything reads it
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let catalog = PricingCatalog::from_env();
    let base = catalog.base_path().clone();

    tracing::info!("Pricing menu:");
    for option in catalog.list() {
        tracing::info!("  • {:<12} {}", option.name, option.href);
    }

    let static_dir = PathBuf::from(std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".into()));
    if !static_dir.is_dir() {
        tracing::warn!("⚠ Static directory {} not found - frontend disabled", static_dir.display());
        tracing::warn!("  Build site-web to WASM and copy the bundle there");
    }

    let app = build_router(AppState::new(catalog), &static_dir);

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 studio-site running on http://{}{}/", addr, base);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  {}/health       - Health check", base);
    tracing::info!("  GET  {}/api/pricing  - Pricing menu", base);

    axum::serve(listener, app).await?;

    Ok(())
}
