//! The product model shared between the backend wire format and the UI.
//!
//! The backend serializes products in camelCase JSON. Two fields need care:
//! `price` and `co2Emission` occasionally arrive as strings (older catalog
//! rows were imported from a spreadsheet) or are missing entirely. Both are
//! deserialized leniently and default to `0.0`, so every arithmetic path in
//! the cart and the suggestion engine can treat them as plain numbers.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::StoreError;

/// A catalog product as returned by `GET /api/products`.
///
/// Products are immutable from the client's perspective: once received they
/// are only ever cloned into the cart or replaced wholesale through the
/// admin CRUD endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Backend-assigned stable identifier.
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Price in currency units. Lenient: numbers, numeric strings, or
    /// absent values all parse; everything unusable becomes `0.0`.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: f64,
    /// Free-text label used as the substitution grouping key.
    #[serde(default)]
    pub category: String,
    /// Estimated footprint in kilograms of CO2. Same leniency as `price`.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub co2_emission: f64,
    #[serde(default)]
    pub is_eco_friendly: bool,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_urls: Option<Vec<String>>,
    /// Hand-curated alternative maintained by the backend. The suggestion
    /// engine ignores it and matches by category instead.
    #[serde(default)]
    pub alternative_product_id: Option<i64>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub stock_quantity: Option<i64>,
}

impl Product {
    /// First image of the gallery, falling back to the legacy single
    /// `imageUrl` field.
    pub fn primary_image(&self) -> Option<&str> {
        self.image_urls
            .as_ref()
            .and_then(|urls| urls.first())
            .or(self.image_url.as_ref())
            .map(String::as_str)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientNumber {
    Number(f64),
    Text(String),
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<LenientNumber>::deserialize(deserializer)?;
    Ok(match raw {
        Some(LenientNumber::Number(n)) => n,
        Some(LenientNumber::Text(s)) => s.trim().parse().unwrap_or(0.0),
        None => 0.0,
    })
}

/// Unvalidated form input for the admin product editor.
///
/// Numeric fields are kept as the raw strings the user typed; `build`
/// validates them and produces a `Product` ready for `POST /api/products/add`
/// or `PUT /api/products/{id}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub co2_emission: String,
    pub is_eco_friendly: bool,
    pub image_url: String,
}

impl ProductDraft {
    /// Validates the draft and builds a `Product` with `id: 0` (the backend
    /// assigns the real identifier on insert).
    pub fn build(&self) -> Result<Product, StoreError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(StoreError::MissingField { field: "name" });
        }
        let category = self.category.trim();
        if category.is_empty() {
            return Err(StoreError::MissingField { field: "category" });
        }
        let price = parse_non_negative(&self.price, "price")?;
        let co2_emission = parse_non_negative(&self.co2_emission, "co2Emission")?;

        let image_url = self.image_url.trim();
        let description = self.description.trim();
        Ok(Product {
            id: 0,
            name: name.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            price,
            category: category.to_string(),
            co2_emission,
            is_eco_friendly: self.is_eco_friendly,
            image_url: (!image_url.is_empty()).then(|| image_url.to_string()),
            image_urls: None,
            alternative_product_id: None,
            brand: None,
            material: None,
            stock_quantity: None,
        })
    }

    /// Pre-fills the form from an existing product, for the edit flow.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            price: format!("{}", product.price),
            category: product.category.clone(),
            co2_emission: format!("{}", product.co2_emission),
            is_eco_friendly: product.is_eco_friendly,
            image_url: product.primary_image().unwrap_or_default().to_string(),
        }
    }
}

fn parse_non_negative(raw: &str, field: &'static str) -> Result<f64, StoreError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| StoreError::InvalidNumber { field })?;
    if value.is_sign_negative() || !value.is_finite() {
        return Err(StoreError::InvalidNumber { field });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_wire_shape() {
        let json = r#"{
            "id": 7,
            "name": "Canvas Tote",
            "price": 12.5,
            "category": "Bags",
            "co2Emission": 1.2,
            "isEcoFriendly": true,
            "imageUrl": "https://cdn.example.com/tote.jpg"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 7);
        assert_eq!(product.category, "Bags");
        assert!(product.is_eco_friendly);
        assert_eq!(product.co2_emission, 1.2);
        assert_eq!(product.primary_image(), Some("https://cdn.example.com/tote.jpg"));
    }

    #[test]
    fn numeric_strings_parse_and_garbage_defaults_to_zero() {
        let json = r#"{"id":1,"name":"A","price":"19.99","co2Emission":"not a number"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, 19.99);
        assert_eq!(product.co2_emission, 0.0);
    }

    #[test]
    fn missing_and_null_numerics_default_to_zero() {
        let json = r#"{"id":2,"name":"B","price":null}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, 0.0);
        assert_eq!(product.co2_emission, 0.0);
    }

    #[test]
    fn gallery_takes_precedence_over_legacy_image_url() {
        let json = r#"{
            "id": 3,
            "name": "C",
            "imageUrl": "legacy.jpg",
            "imageUrls": ["first.jpg", "second.jpg"]
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.primary_image(), Some("first.jpg"));
    }

    #[test]
    fn draft_build_validates_fields() {
        let draft = ProductDraft {
            name: "Bamboo Brush".into(),
            price: "3.50".into(),
            category: "Bathroom".into(),
            co2_emission: "0.4".into(),
            is_eco_friendly: true,
            ..Default::default()
        };
        let product = draft.build().unwrap();
        assert_eq!(product.price, 3.5);
        assert_eq!(product.co2_emission, 0.4);

        let bad_price = ProductDraft {
            price: "-1".into(),
            ..draft.clone()
        };
        assert_eq!(
            bad_price.build(),
            Err(StoreError::InvalidNumber { field: "price" })
        );

        let no_name = ProductDraft {
            name: "   ".into(),
            ..draft
        };
        assert_eq!(no_name.build(), Err(StoreError::MissingField { field: "name" }));
    }
}
