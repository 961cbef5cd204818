//! Admin catalog management route handlers.
//!
//! Every handler here requires a bearer token carrying the admin flag;
//! the `AdminUser` extractor rejects everything else before the handler
//! body runs.

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use serde::Serialize;

use tatvaani_core::{NewProduct, Product, ProductId, ProductPatch};

use crate::error::{ApiError, Result};
use crate::middleware::AdminUser;
use crate::state::AppState;
use crate::store::Collection;

/// Acknowledgement body for deletions.
#[derive(Debug, Serialize)]
pub struct DeletedBody {
    pub message: &'static str,
}

/// Create a product.
///
/// # Errors
///
/// Returns 500 if the catalog file cannot be written.
pub async fn create_product(
    AdminUser(claims): AdminUser,
    State(state): State<AppState>,
    Json(new): Json<NewProduct>,
) -> Result<Json<Product>> {
    let mut products: Vec<Product> = state.store().read_all(Collection::Products).await;

    let product = Product::create(new, Utc::now());
    products.push(product.clone());
    state.store().write_all(Collection::Products, &products).await?;

    tracing::info!(product_id = %product.id, admin = %claims.sub, "product created");
    Ok(Json(product))
}

/// Update a product by applying a field-level patch.
///
/// # Errors
///
/// Returns 404 for unknown ids and 500 if the catalog file cannot be
/// written.
pub async fn update_product(
    AdminUser(claims): AdminUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<Product>> {
    let id: ProductId = id
        .parse()
        .map_err(|_| ApiError::NotFound("Product".to_owned()))?;

    let mut products: Vec<Product> = state.store().read_all(Collection::Products).await;
    let product = products
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or_else(|| ApiError::NotFound("Product".to_owned()))?;

    product.apply(patch, Utc::now());
    let updated = product.clone();
    state.store().write_all(Collection::Products, &products).await?;

    tracing::info!(product_id = %id, admin = %claims.sub, "product updated");
    Ok(Json(updated))
}

/// Delete a product.
///
/// Deletion is idempotent: removing an id that is not in the catalog
/// still acknowledges with `Product deleted`.
///
/// # Errors
///
/// Returns 500 if the catalog file cannot be written.
pub async fn delete_product(
    AdminUser(claims): AdminUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedBody>> {
    let products: Vec<Product> = state.store().read_all(Collection::Products).await;

    // An unparseable path segment cannot match anything; the catalog is
    // rewritten unchanged and the delete still acknowledges.
    let remaining: Vec<Product> = match id.parse::<ProductId>() {
        Ok(id) => products.into_iter().filter(|p| p.id != id).collect(),
        Err(_) => products,
    };
    state
        .store()
        .write_all(Collection::Products, &remaining)
        .await?;

    tracing::info!(product_id = %id, admin = %claims.sub, "product deleted");
    Ok(Json(DeletedBody {
        message: "Product deleted",
    }))
}
