//! Vitrine Model
//!
//! Business-showcase content mode: services, gallery, testimonials.

use serde::{Deserialize, Serialize};

/// A service offered by the business
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VitrineService {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Customer testimonial
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub author: String,
    pub text: String,
}

/// Business showcase document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Vitrine {
    #[serde(default)]
    pub business_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub services: Vec<VitrineService>,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Vitrine {
    /// Validate a stored vitrine document; malformed input yields None
    pub fn from_value(value: serde_json::Value) -> Option<Vitrine> {
        serde_json::from_value(value).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value() {
        let vitrine = Vitrine::from_value(json!({
            "businessName": "Atlas Coiffure",
            "services": [{"name": "Cut"}],
            "gallery": ["https://cdn.example.com/a.jpg"]
        }))
        .unwrap();
        assert_eq!(vitrine.business_name, "Atlas Coiffure");
        assert_eq!(vitrine.services.len(), 1);
        assert_eq!(vitrine.services[0].description, "");
    }

    #[test]
    fn test_from_value_malformed() {
        assert!(Vitrine::from_value(json!("nope")).is_none());
    }
}
