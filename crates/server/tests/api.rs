//! Integration tests for the storefront API.
//!
//! These drive the full router via `tower::ServiceExt::oneshot` against a
//! temporary data directory, so every request exercises routing, auth
//! extraction, and the flat-file store together.

#![allow(clippy::unwrap_used)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use secrecy::SecretString;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use tatvaani_server::config::{AuthConfig, ServerConfig};
use tatvaani_server::state::AppState;
use tatvaani_server::store::FileStore;

// =============================================================================
// Test Harness
// =============================================================================

/// Build an app over a fresh temporary data directory with the seeded
/// catalog in place.
async fn test_app() -> (TempDir, Router) {
    let dir = tempfile::tempdir().unwrap();

    let config = ServerConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        data_dir: dir.path().to_path_buf(),
        auth: AuthConfig {
            jwt_secret: SecretString::from("integration-test-secret"),
            using_default_secret: false,
            token_ttl_secs: None,
            admin_email: "admin@tatvaani.com".to_owned(),
        },
    };

    let store = FileStore::new(dir.path());
    store.init().await.unwrap();

    let app = tatvaani_server::app(AppState::new(config, store));
    (dir, app)
}

/// Send a request and return the status plus the parsed JSON body.
async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn get_authed(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn json_authed(method: &str, uri: &str, token: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Register a user and return their bearer token.
async fn register(app: &Router, name: &str, email: &str) -> String {
    let (status, body) = send(
        app,
        post_json(
            "/api/register",
            &json!({ "name": name, "email": email, "password": "hunter22" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_owned()
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_check() {
    let (_dir, app) = test_app().await;
    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// =============================================================================
// Auth
// =============================================================================

#[tokio::test]
async fn test_register_returns_token_and_redacted_user() {
    let (_dir, app) = test_app().await;

    let (status, body) = send(
        &app,
        post_json(
            "/api/register",
            &json!({ "name": "Priya", "email": "priya@example.com", "password": "hunter22" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].as_str().is_some());
    assert_eq!(body["user"]["email"], "priya@example.com");
    assert_eq!(body["user"]["isAdmin"], false);
    // The password hash never leaves the server.
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn test_duplicate_registration_rejected_and_first_token_survives() {
    let (_dir, app) = test_app().await;

    let token = register(&app, "Priya", "priya@example.com").await;

    let (status, body) = send(
        &app,
        post_json(
            "/api/register",
            &json!({ "name": "Imposter", "email": "priya@example.com", "password": "other" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "User already exists");

    // The original account is untouched.
    let (status, _) = send(&app, get_authed("/api/orders", &token)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_login_failures_share_one_shape() {
    let (_dir, app) = test_app().await;
    register(&app, "Priya", "priya@example.com").await;

    let wrong_password = send(
        &app,
        post_json(
            "/api/login",
            &json!({ "email": "priya@example.com", "password": "wrong" }),
        ),
    )
    .await;
    let unknown_email = send(
        &app,
        post_json(
            "/api/login",
            &json!({ "email": "nobody@example.com", "password": "hunter22" }),
        ),
    )
    .await;

    // Unknown email and wrong password are indistinguishable to the caller.
    assert_eq!(wrong_password, unknown_email);
    assert_eq!(wrong_password.0, StatusCode::BAD_REQUEST);
    assert_eq!(wrong_password.1["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_token_status_split() {
    let (_dir, app) = test_app().await;

    // No token at all: 401.
    let (status, _) = send(&app, get("/api/orders")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // A token that does not verify: 403.
    let (status, body) = send(&app, get_authed("/api/orders", "not.a.token")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Invalid token");
}

// =============================================================================
// Product Catalog
// =============================================================================

#[tokio::test]
async fn test_catalog_is_seeded_on_first_run() {
    let (_dir, app) = test_app().await;

    let (status, body) = send(&app, get("/api/products")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 6);

    let (status, body) = send(&app, get("/api/products/featured")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
    assert!(body.as_array().unwrap().iter().all(|p| p["featured"] == true));
}

#[tokio::test]
async fn test_catalog_filters_are_conjunctive() {
    let (_dir, app) = test_app().await;

    let (status, body) = send(&app, get("/api/products?category=Wellness&minPrice=500")).await;
    assert_eq!(status, StatusCode::OK);

    let mut names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    names.sort_unstable();
    assert_eq!(
        names,
        vec![
            "Ayurvedic Turmeric Wellness Tea",
            "Neem & Tulsi Face Care Set"
        ]
    );
}

#[tokio::test]
async fn test_product_detail_and_unknown_ids() {
    let (_dir, app) = test_app().await;

    let (_, listing) = send(&app, get("/api/products")).await;
    let id = listing[0]["id"].as_str().unwrap().to_owned();

    let (status, body) = send(&app, get(&format!("/api/products/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id.as_str());

    // A valid-but-unknown id and a malformed id both come back 404.
    let unknown = uuid::Uuid::new_v4();
    let (status, body) = send(&app, get(&format!("/api/products/{unknown}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Product not found");

    let (status, _) = send(&app, get("/api/products/not-a-uuid")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Admin Catalog Management
// =============================================================================

#[tokio::test]
async fn test_admin_product_lifecycle() {
    let (_dir, app) = test_app().await;
    let admin = register(&app, "Admin", "admin@tatvaani.com").await;

    // Create.
    let (status, created) = send(
        &app,
        json_authed(
            "POST",
            "/api/admin/products",
            &admin,
            &json!({ "name": "Sandalwood Incense", "category": "Wellness", "price": 250.0 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_str().unwrap().to_owned();
    assert!(created["createdAt"].is_string());

    let (_, listing) = send(&app, get("/api/products")).await;
    assert_eq!(listing.as_array().unwrap().len(), 7);

    // Update patches only the named fields.
    let (status, updated) = send(
        &app,
        json_authed(
            "PUT",
            &format!("/api/admin/products/{id}"),
            &admin,
            &json!({ "price": 300.0, "featured": true }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Sandalwood Incense");
    assert_eq!(updated["price"], 300.0);
    assert!(updated["updatedAt"].is_string());

    // Delete acknowledges and the record is gone.
    let (status, body) = send(
        &app,
        json_authed(
            "DELETE",
            &format!("/api/admin/products/{id}"),
            &admin,
            &json!({}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Product deleted");

    let (status, _) = send(&app, get(&format!("/api/products/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_unknown_product_is_404() {
    let (_dir, app) = test_app().await;
    let admin = register(&app, "Admin", "admin@tatvaani.com").await;

    let unknown = uuid::Uuid::new_v4();
    let (status, body) = send(
        &app,
        json_authed(
            "PUT",
            &format!("/api/admin/products/{unknown}"),
            &admin,
            &json!({ "price": 1.0 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Product not found");
}

#[tokio::test]
async fn test_non_admin_cannot_touch_the_catalog() {
    let (_dir, app) = test_app().await;
    let token = register(&app, "Priya", "priya@example.com").await;

    let (_, listing) = send(&app, get("/api/products")).await;
    let id = listing[0]["id"].as_str().unwrap().to_owned();

    let (status, body) = send(
        &app,
        json_authed(
            "DELETE",
            &format!("/api/admin/products/{id}"),
            &token,
            &json!({}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Admin access required");

    // The catalog is untouched.
    let (_, after) = send(&app, get("/api/products")).await;
    assert_eq!(after.as_array().unwrap().len(), 6);
}

// =============================================================================
// Orders
// =============================================================================

#[tokio::test]
async fn test_order_placement_and_visibility() {
    let (_dir, app) = test_app().await;
    let alice = register(&app, "Alice", "alice@example.com").await;
    let bob = register(&app, "Bob", "bob@example.com").await;
    let admin = register(&app, "Admin", "admin@tatvaani.com").await;

    let (_, listing) = send(&app, get("/api/products")).await;
    let product = listing[0].clone();

    let mut item = product.clone();
    item["quantity"] = json!(2);
    let order_body = json!({
        "items": [item],
        "total": product["price"].as_f64().unwrap() * 2.0,
        "shippingAddress": "Default Address"
    });

    let (status, placed) = send(&app, json_authed("POST", "/api/orders", &alice, &order_body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(placed["status"], "pending");
    assert_eq!(placed["items"][0]["quantity"], 2);
    assert_eq!(placed["items"][0]["name"], product["name"]);

    // Alice sees her order; Bob sees nothing; the admin sees everything.
    let (_, alice_orders) = send(&app, get_authed("/api/orders", &alice)).await;
    assert_eq!(alice_orders.as_array().unwrap().len(), 1);

    let (_, bob_orders) = send(&app, get_authed("/api/orders", &bob)).await;
    assert!(bob_orders.as_array().unwrap().is_empty());

    let (_, admin_orders) = send(&app, get_authed("/api/orders", &admin)).await;
    assert_eq!(admin_orders.as_array().unwrap().len(), 1);
}

// =============================================================================
// Contact & Newsletter
// =============================================================================

#[tokio::test]
async fn test_contact_persists_the_inquiry() {
    let (dir, app) = test_app().await;

    let (status, body) = send(
        &app,
        post_json(
            "/api/contact",
            &json!({
                "name": "Priya",
                "email": "priya@example.com",
                "subject": "Shipping",
                "message": "Do you ship to Pune?"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Inquiry submitted successfully");

    let raw = std::fs::read_to_string(dir.path().join("inquiries.json")).unwrap();
    let stored: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored.as_array().unwrap().len(), 1);
    assert_eq!(stored[0]["subject"], "Shipping");
    assert!(stored[0]["createdAt"].is_string());
}

#[tokio::test]
async fn test_newsletter_acknowledges_without_storing() {
    let (dir, app) = test_app().await;

    let (status, body) = send(
        &app,
        post_json("/api/newsletter", &json!({ "email": "priya@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Subscribed to newsletter successfully");

    // No newsletter collection exists on disk.
    assert!(!dir.path().join("newsletter.json").exists());
}
