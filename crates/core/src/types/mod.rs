//! Core type definitions.

pub mod email;
pub mod id;

pub use email::{Email, EmailError};
pub use id::{InquiryId, OrderId, ProductId, UserId};
