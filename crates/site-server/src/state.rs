//! Application State

use std::sync::Arc;

use pricing_core::PricingCatalog;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Pricing menu, built once at startup
    pub catalog: Arc<PricingCatalog>,
}

impl AppState {
    pub fn new(catalog: PricingCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}
