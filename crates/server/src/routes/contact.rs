//! Contact form route handler.

use axum::{Json, extract::State};
use chrono::Utc;
use serde::Serialize;

use tatvaani_core::{Inquiry, InquiryForm};

use crate::error::Result;
use crate::state::AppState;
use crate::store::Collection;

/// Acknowledgement body for submitted inquiries.
#[derive(Debug, Serialize)]
pub struct SubmittedBody {
    pub message: &'static str,
}

/// Record a contact inquiry.
///
/// The form is stored as given - no email validation here, the inquiry
/// address is just text someone typed into a contact form.
///
/// # Errors
///
/// Returns 500 if the inquiries file cannot be written.
pub async fn submit(
    State(state): State<AppState>,
    Json(form): Json<InquiryForm>,
) -> Result<Json<SubmittedBody>> {
    let mut inquiries: Vec<Inquiry> = state.store().read_all(Collection::Inquiries).await;

    let inquiry = Inquiry::record(form, Utc::now());
    inquiries.push(inquiry);
    state
        .store()
        .write_all(Collection::Inquiries, &inquiries)
        .await?;

    Ok(Json(SubmittedBody {
        message: "Inquiry submitted successfully",
    }))
}
