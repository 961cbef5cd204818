//! Catalog product models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// A catalog product.
///
/// Categories are an open set of string labels (`"Handicrafts"`,
/// `"Spices & Food"`, `"Wellness"`, ...). Most fields carry serde defaults:
/// admin-created records are accepted with whatever fields the request
/// supplied, so records on disk may be sparse and must still deserialize.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: f64,
    /// Pre-discount price, shown struck through in the UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(default)]
    pub artisan: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub in_stock: bool,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Build a product from an admin-create request, minting a fresh id and
    /// stamping the creation time.
    #[must_use]
    pub fn create(new: NewProduct, now: DateTime<Utc>) -> Self {
        Self {
            id: ProductId::random(),
            name: new.name,
            category: new.category,
            price: new.price,
            original_price: new.original_price,
            description: new.description,
            image: new.image,
            images: new.images,
            artisan: new.artisan,
            origin: new.origin,
            in_stock: new.in_stock,
            featured: new.featured,
            rating: new.rating,
            reviews: new.reviews,
            created_at: Some(now),
            updated_at: None,
        }
    }

    /// Apply a field-level patch and stamp the update time.
    ///
    /// Only the fields the patch enumerates can change; the id and the
    /// creation timestamp are never patchable.
    pub fn apply(&mut self, patch: ProductPatch, now: DateTime<Utc>) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(original_price) = patch.original_price {
            self.original_price = Some(original_price);
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        if let Some(images) = patch.images {
            self.images = images;
        }
        if let Some(artisan) = patch.artisan {
            self.artisan = artisan;
        }
        if let Some(origin) = patch.origin {
            self.origin = origin;
        }
        if let Some(in_stock) = patch.in_stock {
            self.in_stock = in_stock;
        }
        if let Some(featured) = patch.featured {
            self.featured = featured;
        }
        if let Some(rating) = patch.rating {
            self.rating = Some(rating);
        }
        if let Some(reviews) = patch.reviews {
            self.reviews = Some(reviews);
        }
        self.updated_at = Some(now);
    }
}

/// Request body for the admin create-product endpoint.
///
/// Fields default rather than being required: the endpoint accepts sparse
/// bodies as given (validation is deliberately minimal here).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub artisan: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub in_stock: bool,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub reviews: Option<u32>,
}

/// Field-level update for the admin update-product endpoint.
///
/// Enumerates exactly which fields may be patched; unknown fields in the
/// request body are rejected instead of being silently merged into the
/// stored record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub original_price: Option<f64>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub images: Option<Vec<String>>,
    pub artisan: Option<String>,
    pub origin: Option<String>,
    pub in_stock: Option<bool>,
    pub featured: Option<bool>,
    pub rating: Option<f64>,
    pub reviews: Option<u32>,
}
