//! Entity models for the four persisted collections.
//!
//! All models serialize with camelCase field names, matching both the API
//! wire format and the flat JSON collection files on disk.

pub mod inquiry;
pub mod order;
pub mod product;
pub mod user;

pub use inquiry::{Inquiry, InquiryForm};
pub use order::{NewOrder, Order, OrderItem, OrderStatus};
pub use product::{NewProduct, Product, ProductPatch};
pub use user::{PublicUser, User};
