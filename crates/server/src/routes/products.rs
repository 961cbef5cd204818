//! Public product catalog route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use tatvaani_core::{Product, ProductId};

use crate::error::{ApiError, Result};
use crate::state::AppState;
use crate::store::Collection;

/// Catalog filter query parameters.
///
/// All filters are optional and conjunctive. Values arrive as raw query
/// strings; empty or unparseable values disable that filter rather than
/// failing the request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    pub category: Option<String>,
    pub search: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub origin: Option<String>,
}

/// List products, optionally filtered.
pub async fn index(
    State(state): State<AppState>,
    Query(filter): Query<ProductFilter>,
) -> Json<Vec<Product>> {
    let products: Vec<Product> = state.store().read_all(Collection::Products).await;
    Json(filter_products(products, &filter))
}

/// List featured products.
pub async fn featured(State(state): State<AppState>) -> Json<Vec<Product>> {
    let products: Vec<Product> = state.store().read_all(Collection::Products).await;
    Json(products.into_iter().filter(|p| p.featured).collect())
}

/// Fetch one product by id.
///
/// # Errors
///
/// Returns 404 for unknown ids. A path segment that is not a valid id is
/// also a 404 - it cannot name any stored product.
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Product>> {
    let id: ProductId = id
        .parse()
        .map_err(|_| ApiError::NotFound("Product".to_owned()))?;

    let products: Vec<Product> = state.store().read_all(Collection::Products).await;
    products
        .into_iter()
        .find(|p| p.id == id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Product".to_owned()))
}

/// Apply catalog filters conjunctively.
///
/// `category` is an exact match; `search` matches name or description
/// case-insensitively; `origin` is a case-insensitive substring match;
/// price bounds are inclusive.
#[must_use]
pub fn filter_products(products: Vec<Product>, filter: &ProductFilter) -> Vec<Product> {
    let search = nonempty(&filter.search).map(str::to_lowercase);
    let origin = nonempty(&filter.origin).map(str::to_lowercase);
    let min_price = nonempty(&filter.min_price).and_then(|v| v.parse::<f64>().ok());
    let max_price = nonempty(&filter.max_price).and_then(|v| v.parse::<f64>().ok());

    products
        .into_iter()
        .filter(|p| match nonempty(&filter.category) {
            Some(category) => p.category == category,
            None => true,
        })
        .filter(|p| match &search {
            Some(needle) => {
                p.name.to_lowercase().contains(needle)
                    || p.description.to_lowercase().contains(needle)
            }
            None => true,
        })
        .filter(|p| min_price.is_none_or(|min| p.price >= min))
        .filter(|p| max_price.is_none_or(|max| p.price <= max))
        .filter(|p| match &origin {
            Some(needle) => p.origin.to_lowercase().contains(needle),
            None => true,
        })
        .collect()
}

/// Treat empty query values the same as absent ones.
fn nonempty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
