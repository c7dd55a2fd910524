//! Base Path
//!
//! The URL sub-path the site is deployed under. Hosts hand it in from their
//! environment; an unusable value never blocks rendering and falls back to
//! the site root.

use std::fmt;

use serde::Serialize;

use crate::error::{CatalogError, Result};

/// Normalized deployment prefix: empty, or `/segment[/segment...]` with no
/// trailing slash
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BasePath(String);

impl BasePath {
    /// The site root
    #[must_use]
    pub const fn root() -> Self {
        Self(String::new())
    }

    /// Strictly parse a configured value.
    ///
    /// Surrounding whitespace and trailing slashes are dropped, so `"/app/"`
    /// becomes `/app` and `"/"` becomes the root.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidBasePath`] when the value is a URL, is
    /// relative, or holds whitespace, a query, a fragment or an empty segment.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let value = trimmed.trim_end_matches('/');

        if value.is_empty() {
            return Ok(Self::root());
        }
        if trimmed.contains("://") {
            return Err(CatalogError::invalid_base_path(raw, "must be a path, not a URL"));
        }
        if !value.starts_with('/') {
            return Err(CatalogError::invalid_base_path(raw, "must start with '/'"));
        }
        if value.chars().any(char::is_whitespace) {
            return Err(CatalogError::invalid_base_path(raw, "must not contain whitespace"));
        }
        if value.contains(['?', '#']) {
            return Err(CatalogError::invalid_base_path(
                raw,
                "must not contain a query or fragment",
            ));
        }
        if value.contains("//") {
            return Err(CatalogError::invalid_base_path(raw, "must not contain empty segments"));
        }

        Ok(Self(value.to_string()))
    }

    /// Resolve an optional configured value, defaulting to the root when it
    /// is missing or malformed
    #[must_use]
    pub fn resolve(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            tracing::debug!("No base path configured, serving from site root");
            return Self::root();
        };

        match Self::parse(raw) {
            Ok(base) => {
                tracing::debug!(base = %base, "Resolved base path");
                base
            }
            Err(e) => {
                tracing::warn!("{}; falling back to site root", e);
                Self::root()
            }
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Prefix a site-relative route (which must start with `/`)
    #[must_use]
    pub fn join(&self, route: &str) -> String {
        debug_assert!(route.starts_with('/'), "route must be absolute: {route}");
        format!("{}{}", self.0, route)
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_plain_prefix() {
        assert_eq!(BasePath::parse("/app").unwrap().as_str(), "/app");
        assert_eq!(BasePath::parse("/studio/site").unwrap().as_str(), "/studio/site");
    }

    #[test]
    fn test_parse_normalizes_slashes_and_whitespace() {
        assert_eq!(BasePath::parse("  /app/ ").unwrap().as_str(), "/app");
        assert!(BasePath::parse("/").unwrap().is_root());
        assert!(BasePath::parse("").unwrap().is_root());
        assert!(BasePath::parse("   ").unwrap().is_root());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for raw in [
            "app",
            "https://example.com/app",
            "/my app",
            "/app?x=1",
            "/app#top",
            "/app//site",
        ] {
            assert!(
                matches!(BasePath::parse(raw), Err(CatalogError::InvalidBasePath { .. })),
                "expected {raw:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_resolve_defaults_to_root() {
        assert_eq!(BasePath::resolve(None), BasePath::root());
        assert_eq!(BasePath::resolve(Some("relative/path")), BasePath::root());
        assert_eq!(BasePath::resolve(Some("/app/")).as_str(), "/app");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let base = BasePath::parse("/app/").unwrap();
        assert_eq!(serde_json::to_value(&base).unwrap(), serde_json::json!("/app"));
        assert_eq!(serde_json::to_value(BasePath::root()).unwrap(), serde_json::json!(""));
    }

    #[test]
    fn test_join() {
        assert_eq!(BasePath::root().join("/pricing/ocean"), "/pricing/ocean");
        assert_eq!(
            BasePath::parse("/app").unwrap().join("/pricing/wedding"),
            "/app/pricing/wedding"
        );
    }
}
