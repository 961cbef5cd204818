//! Newsletter signup route handler.

use axum::Json;
use serde::Serialize;

/// Acknowledgement body for newsletter signups.
#[derive(Debug, Serialize)]
pub struct SubscribedBody {
    pub message: &'static str,
}

/// Acknowledge a newsletter signup.
///
/// Nothing is stored; the address would be handed to a mailing service in
/// a fuller deployment.
pub async fn subscribe() -> Json<SubscribedBody> {
    Json(SubscribedBody {
        message: "Subscribed to newsletter successfully",
    })
}
