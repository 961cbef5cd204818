//! Contact-form inquiry models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::InquiryId;

/// A submitted contact inquiry, as persisted in `inquiries.json`.
///
/// Append-only; no read endpoint is exposed. The form fields are stored as
/// given, including the email, which is not validated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: InquiryId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Contact form request body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InquiryForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl Inquiry {
    /// Record a submitted form with a fresh id and timestamp.
    #[must_use]
    pub fn record(form: InquiryForm, now: DateTime<Utc>) -> Self {
        Self {
            id: InquiryId::random(),
            name: form.name,
            email: form.email,
            subject: form.subject,
            message: form.message,
            created_at: now,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_fields_as_given() {
        let inquiry = Inquiry::record(
            InquiryForm {
                name: "Meera".to_owned(),
                email: "not-an-email".to_owned(),
                subject: "Shipping".to_owned(),
                message: "When does my order arrive?".to_owned(),
            },
            Utc::now(),
        );
        // Form fields are not validated; they are stored verbatim.
        assert_eq!(inquiry.email, "not-an-email");
        assert_eq!(inquiry.subject, "Shipping");
    }
}
