//! Domain Models
//!
//! The pricing categories offered by the studio and the navigation entry
//! rendered for each of them.

use serde::{Deserialize, Serialize};

/// A pricing category with a dedicated page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingCategory {
    Portrait,
    Ocean,
    Drone,
    Product,
    Event,
    Wedding,
    Canyoning,
    #[serde(rename = "tour")]
    PhotoTour,
}

impl PricingCategory {
    /// All categories in display order
    pub const ALL: [Self; 8] = [
        Self::Portrait,
        Self::Ocean,
        Self::Drone,
        Self::Product,
        Self::Event,
        Self::Wedding,
        Self::Canyoning,
        Self::PhotoTour,
    ];

    /// Label shown in menus
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Portrait => "Portrait",
            Self::Ocean => "Ocean",
            Self::Drone => "Drone",
            Self::Product => "Product",
            Self::Event => "Event",
            Self::Wedding => "Wedding",
            Self::Canyoning => "Canyoning",
            Self::PhotoTour => "Photo Tour",
        }
    }

    /// Final path segment of the category's pricing page
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Ocean => "ocean",
            Self::Drone => "drone",
            Self::Product => "product",
            Self::Event => "event",
            Self::Wedding => "wedding",
            Self::Canyoning => "canyoning",
            Self::PhotoTour => "tour",
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }

    /// Route relative to the site root, e.g. `/pricing/ocean`
    #[must_use]
    pub fn route(self) -> String {
        format!("/pricing/{}", self.slug())
    }
}

/// A navigation entry for one pricing page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingOption {
    /// Human-readable label (e.g., "Photo Tour")
    pub name: String,

    /// Link target including the base path (e.g., "/app/pricing/tour")
    pub href: String,
}

impl PricingOption {
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_slugs_are_unique() {
        let slugs: HashSet<_> = PricingCategory::ALL.iter().map(|c| c.slug()).collect();
        assert_eq!(slugs.len(), PricingCategory::ALL.len());
    }

    #[test]
    fn test_slug_round_trip() {
        for category in PricingCategory::ALL {
            assert_eq!(PricingCategory::from_slug(category.slug()), Some(category));
        }
        assert_eq!(PricingCategory::from_slug("photo-tours"), None);
        assert_eq!(PricingCategory::from_slug("Portrait"), None);
    }

    #[test]
    fn test_photo_tour_uses_short_slug() {
        assert_eq!(PricingCategory::PhotoTour.name(), "Photo Tour");
        assert_eq!(PricingCategory::PhotoTour.route(), "/pricing/tour");
    }

    #[test]
    fn test_category_serializes_as_slug() {
        for category in PricingCategory::ALL {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json, serde_json::json!(category.slug()));
            assert_eq!(serde_json::from_value::<PricingCategory>(json).unwrap(), category);
        }
        assert!(serde_json::from_str::<PricingCategory>("\"photo_tour\"").is_err());
    }

    #[test]
    fn test_option_serializes_as_name_and_href() {
        let option = PricingOption::new("Ocean", "/pricing/ocean");
        let json = serde_json::to_value(&option).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Ocean", "href": "/pricing/ocean" })
        );
    }
}
