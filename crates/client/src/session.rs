//! The application session: user, cart, view, and product cache behind
//! one explicit state object.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use tatvaani_core::{NewOrder, Product, ProductId, PublicUser};

use crate::cart::Cart;
use crate::storage::{StateStore, StorageError};

/// Persisted-mirror key for the bearer token.
const TOKEN_KEY: &str = "token";
/// Persisted-mirror key for the authenticated user.
const USER_KEY: &str = "user";
/// Persisted-mirror key for the cart.
const CART_KEY: &str = "cart";

/// Shipping address used at checkout until address collection exists.
const DEFAULT_SHIPPING_ADDRESS: &str = "Default Address";

/// Session errors.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The navigable views of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Home,
    Products,
    Cart,
    Login,
    About,
    Contact,
}

/// The whole client-side application state.
///
/// Holds the authenticated user (or absent), the cart, the active view,
/// and an in-memory product cache. The user, token, and cart are mirrored
/// into the backing [`StateStore`] on every mutation and rehydrated once
/// when the session is created, so they survive restarts; the view and
/// the product cache are ephemeral.
pub struct Session<S: StateStore> {
    store: S,
    user: Option<PublicUser>,
    token: Option<String>,
    cart: Cart,
    view: View,
    products: Vec<Product>,
}

impl<S: StateStore> Session<S> {
    /// Create a session over `store`, rehydrating any persisted state.
    ///
    /// The user is restored only when both the token and the user record
    /// are present. A cart value that fails to parse is discarded rather
    /// than wedging startup.
    #[must_use]
    pub fn load(store: S) -> Self {
        let token = store.get(TOKEN_KEY);
        let user = match (&token, store.get(USER_KEY)) {
            (Some(_), Some(raw)) => serde_json::from_str(&raw).ok(),
            _ => None,
        };
        let cart = store
            .get(CART_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();

        Self {
            store,
            user,
            token,
            cart,
            view: View::default(),
            products: Vec::new(),
        }
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Record a successful login.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the persisted mirror cannot be written.
    pub fn login(&mut self, user: PublicUser, token: String) -> Result<(), SessionError> {
        self.store.set(TOKEN_KEY, &token)?;
        self.store.set(USER_KEY, &serde_json::to_string(&user)?)?;
        self.user = Some(user);
        self.token = Some(token);
        Ok(())
    }

    /// Log out: clears the user, token, and cart, and returns to the home
    /// view.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the persisted mirror cannot be written.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.store.remove(TOKEN_KEY)?;
        self.store.remove(USER_KEY)?;
        self.store.remove(CART_KEY)?;
        self.user = None;
        self.token = None;
        self.cart.clear();
        self.view = View::Home;
        Ok(())
    }

    #[must_use]
    pub fn user(&self) -> Option<&PublicUser> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Add `quantity` of `product` to the cart.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the persisted mirror cannot be written.
    pub fn add_to_cart(&mut self, product: Product, quantity: u32) -> Result<(), SessionError> {
        self.cart.add(product, quantity);
        self.persist_cart()
    }

    /// Set the cart quantity for `product_id`; 0 removes the entry.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the persisted mirror cannot be written.
    pub fn update_quantity(
        &mut self,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<(), SessionError> {
        self.cart.update_quantity(product_id, quantity);
        self.persist_cart()
    }

    /// Remove the cart entry for `product_id`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the persisted mirror cannot be written.
    pub fn remove_from_cart(&mut self, product_id: ProductId) -> Result<(), SessionError> {
        self.cart.remove(product_id);
        self.persist_cart()
    }

    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    fn persist_cart(&mut self) -> Result<(), SessionError> {
        let raw = serde_json::to_string(&self.cart)?;
        self.store.set(CART_KEY, &raw)?;
        Ok(())
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Build the order placement request for the current cart.
    ///
    /// Returns `None` when nobody is logged in - the caller should route
    /// to the login view instead.
    #[must_use]
    pub fn checkout_order(&self) -> Option<NewOrder> {
        self.user.as_ref()?;
        Some(NewOrder {
            items: self.cart.entries().to_vec(),
            total: self.cart.total(),
            shipping_address: DEFAULT_SHIPPING_ADDRESS.to_owned(),
        })
    }

    /// Record a successfully placed order: the cart empties and the
    /// session returns to the home view.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the persisted mirror cannot be written.
    pub fn complete_checkout(&mut self) -> Result<(), SessionError> {
        self.cart.clear();
        self.store.remove(CART_KEY)?;
        self.view = View::Home;
        Ok(())
    }

    // =========================================================================
    // View & Product Cache
    // =========================================================================

    #[must_use]
    pub fn view(&self) -> View {
        self.view
    }

    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    /// Replace the in-memory product cache with a fresh catalog fetch.
    pub fn cache_products(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }
}
