//! Error Types for the Pricing Catalog

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Invalid base path {value:?}: {reason}")]
    InvalidBasePath { value: String, reason: &'static str },
}

impl CatalogError {
    pub(crate) fn invalid_base_path(value: &str, reason: &'static str) -> Self {
        Self::InvalidBasePath {
            value: value.to_string(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_value_and_reason() {
        let err = CatalogError::invalid_base_path("app", "must start with '/'");
        assert_eq!(
            err.to_string(),
            "Invalid base path \"app\": must start with '/'"
        );
    }
}
