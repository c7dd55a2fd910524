//! Pricing Catalog
//!
//! Ordered, immutable list of pricing navigation entries.

use crate::base_path::BasePath;
use crate::model::{PricingCategory, PricingOption};
use crate::BASE_PATH_VAR;

/// The pricing menu for one deployment
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PricingCatalog {
    base: BasePath,
    options: Vec<PricingOption>,
}

impl PricingCatalog {
    /// Build the catalog, prefixing every route with `base`
    #[must_use]
    pub fn new(base: BasePath) -> Self {
        let options = PricingCategory::ALL
            .into_iter()
            .map(|category| PricingOption::new(category.name(), base.join(&category.route())))
            .collect();

        Self { base, options }
    }

    /// Build the catalog from `SITE_BASE_PATH` in the process environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the catalog with an injected environment lookup
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: FnOnce(&str) -> Option<String>,
    {
        let raw = lookup(BASE_PATH_VAR);
        let catalog = Self::new(BasePath::resolve(raw.as_deref()));
        tracing::info!(
            base = %catalog.base,
            entries = catalog.options.len(),
            "Pricing catalog ready"
        );
        catalog
    }

    /// Every entry, in display order
    #[must_use]
    pub fn list(&self) -> &[PricingOption] {
        &self.options
    }

    #[must_use]
    pub const fn base_path(&self) -> &BasePath {
        &self.base
    }
}

impl Default for PricingCatalog {
    fn default() -> Self {
        Self::new(BasePath::root())
    }
}
