//! Order route handlers.

use axum::{Json, extract::State};
use chrono::Utc;

use tatvaani_core::{NewOrder, Order};

use crate::error::Result;
use crate::middleware::CurrentUser;
use crate::state::AppState;
use crate::store::Collection;

/// Place an order for the authenticated user.
///
/// The order is stored as submitted - items carry the product snapshot
/// and quantity the client built at checkout time - with a fresh id,
/// `pending` status, and the caller's user id.
///
/// # Errors
///
/// Returns 500 if the orders file cannot be written.
pub async fn create(
    CurrentUser(claims): CurrentUser,
    State(state): State<AppState>,
    Json(new): Json<NewOrder>,
) -> Result<Json<Order>> {
    let mut orders: Vec<Order> = state.store().read_all(Collection::Orders).await;

    let order = Order::place(new, claims.sub, Utc::now());
    orders.push(order.clone());
    state.store().write_all(Collection::Orders, &orders).await?;

    tracing::info!(order_id = %order.id, user_id = %claims.sub, total = order.total, "order placed");
    Ok(Json(order))
}

/// List orders: admins see every order, everyone else only their own.
pub async fn list(CurrentUser(claims): CurrentUser, State(state): State<AppState>) -> Json<Vec<Order>> {
    let orders: Vec<Order> = state.store().read_all(Collection::Orders).await;

    if claims.is_admin {
        Json(orders)
    } else {
        Json(
            orders
                .into_iter()
                .filter(|o| o.user_id == claims.sub)
                .collect(),
        )
    }
}
