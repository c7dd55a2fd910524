//! # pricing-core
//!
//! Pricing navigation catalog for the studio site.
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  SITE_BASE_PATH ──► BasePath ──► PricingCatalog          │
//! │                                   ├─ Portrait  /pricing/portrait
//! │                                   ├─ Ocean     /pricing/ocean
//! │                                   ├─ ...                  │
//! │                                   └─ Photo Tour /pricing/tour
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog is built once from an explicit [`BasePath`] and is read-only
//! afterwards, so it can be shared freely between threads and renderers.

pub mod base_path;
pub mod catalog;
pub mod error;
pub mod model;

pub use base_path::BasePath;
pub use catalog::PricingCatalog;
pub use error::{CatalogError, Result};
pub use model::{PricingCategory, PricingOption};

/// Environment variable holding the deployment sub-path
pub const BASE_PATH_VAR: &str = "SITE_BASE_PATH";
