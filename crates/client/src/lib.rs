//! Tatvaani Client - Session, cart, and persisted state.
//!
//! This crate holds the client side of the storefront: the authenticated
//! user, the shopping cart, the active view, and a product cache, all
//! behind one explicit [`Session`] object rather than ambient globals.
//!
//! State survives restarts through a [`StateStore`]: a small key-value
//! mirror (token, user, cart under fixed keys) that is rehydrated once
//! when the session is created and written back on every mutation.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod session;
pub mod storage;

pub use cart::Cart;
pub use session::{Session, SessionError, View};
pub use storage::{JsonFileStore, MemoryStore, StateStore, StorageError};
