//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                     - Health check
//!
//! # Auth
//! POST /api/register               - Register a new user
//! POST /api/login                  - Login with email + password
//!
//! # Products (public)
//! GET  /api/products               - Product listing with filters
//! GET  /api/products/featured      - Featured products only
//! GET  /api/products/{id}          - Product detail
//!
//! # Products (admin, bearer token with admin flag)
//! POST   /api/admin/products       - Create a product
//! PUT    /api/admin/products/{id}  - Update a product
//! DELETE /api/admin/products/{id}  - Delete a product
//!
//! # Orders (bearer token)
//! POST /api/orders                 - Place an order
//! GET  /api/orders                 - List orders (admin: all, else own)
//!
//! # Misc
//! POST /api/contact                - Submit a contact inquiry
//! POST /api/newsletter             - Newsletter subscription ack
//! ```

pub mod admin;
pub mod auth;
pub mod contact;
pub mod newsletter;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
}

/// Create the public product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/featured", get(products::featured))
        .route("/{id}", get(products::show))
}

/// Create the admin product routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/products", post(admin::create_product))
        .route("/products/{id}", put(admin::update_product))
        .route("/products/{id}", delete(admin::delete_product))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new().route("/", post(orders::create).get(orders::list))
}

/// Create all API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .nest("/products", product_routes())
        .nest("/admin", admin_routes())
        .nest("/orders", order_routes())
        .route("/contact", post(contact::submit))
        .route("/newsletter", post(newsletter::subscribe))
}
