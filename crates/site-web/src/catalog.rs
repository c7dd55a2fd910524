//! Build-time Pricing Catalog

use std::sync::LazyLock;

use pricing_core::{BasePath, PricingCatalog};

static CATALOG: LazyLock<PricingCatalog> =
    LazyLock::new(|| PricingCatalog::new(BasePath::resolve(option_env!("SITE_BASE_PATH"))));

/// The pricing menu for this build
pub fn catalog() -> &'static PricingCatalog {
    &CATALOG
}

/// Site-relative route prefixed with this build's base path
pub fn link(route: &str) -> String {
    catalog().base_path().join(route)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_share_catalog_base() {
        let base = catalog().base_path().as_str();
        assert!(link("/pricing").starts_with(base));
        for option in catalog().list() {
            assert!(option.href.starts_with(&link("/pricing/")));
        }
    }

    #[test]
    fn test_catalog_is_built_once() {
        assert!(std::ptr::eq(catalog(), catalog()));
    }
}
