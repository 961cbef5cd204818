//! Tatvaani Core - Shared types library.
//!
//! This crate provides common types used across all Tatvaani components:
//! - `server` - REST API backed by flat JSON files
//! - `client` - Client-side cart and session state
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP. Entity models
//! serialize with the exact camelCase field names used in the persisted
//! JSON collection files, so the server's flat-file store and the API wire
//! format stay byte-compatible with each other.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and emails
//! - [`models`] - Entity models: users, products, orders, inquiries

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
pub mod types;

pub use models::*;
pub use types::*;
