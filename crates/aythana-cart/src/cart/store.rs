//! The persisted cart store.

use aythana_storage::{StorageError, Store};

use crate::cart::{Cart, LineItem, OrderSummary};
use crate::catalog::Catalog;
use crate::display::{refresh_count_display, CountDisplay};
use crate::ids::ProductId;
use crate::money::NumberFormat;
use crate::CartError;

/// Storage key the cart has always been saved under.
pub const DEFAULT_CART_KEY: &str = "aythanaCart";

/// Result of [`CartStore::add_item`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The product was added; holds the updated line.
    Added(LineItem),
    /// The id is not in the catalog. Nothing changed.
    UnknownProduct(ProductId),
}

impl AddOutcome {
    /// Check if the cart changed.
    pub fn is_added(&self) -> bool {
        matches!(self, AddOutcome::Added(_))
    }
}

/// The cart, mirrored to local storage after every change.
///
/// Constructed once by the application context and handed by reference to
/// whatever needs it.
#[derive(Debug)]
pub struct CartStore {
    store: Store,
    key: String,
    catalog: Catalog,
    format: NumberFormat,
    cart: Cart,
}

impl CartStore {
    /// Load the cart persisted under [`DEFAULT_CART_KEY`].
    pub fn load(store: Store, catalog: Catalog) -> Self {
        Self::load_with_key(store, DEFAULT_CART_KEY, catalog)
    }

    /// Load the cart persisted under `key`.
    ///
    /// Missing, unreadable or invalid content yields an empty cart; only a
    /// diagnostic is emitted.
    pub fn load_with_key(store: Store, key: impl Into<String>, catalog: Catalog) -> Self {
        let key = key.into();
        let cart = match read_cart(&store, &key) {
            Ok(Some(cart)) => {
                tracing::debug!(key = %key, items = cart.item_count(), "loaded cart");
                cart
            }
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "ignoring persisted cart");
                Cart::new()
            }
        };

        Self {
            store,
            key,
            catalog,
            format: NumberFormat::default(),
            cart,
        }
    }

    /// Set the number format used for summaries.
    pub fn with_format(mut self, format: NumberFormat) -> Self {
        self.format = format;
        self
    }

    /// Add one unit of a catalog product and persist the cart.
    ///
    /// An unknown id is logged and leaves the cart untouched; it is not an
    /// error. The only errors are quantity overflow and a failed write, in
    /// which case the in-memory cart keeps the change.
    pub fn add_item(&mut self, product_id: ProductId) -> Result<AddOutcome, CartError> {
        let Some(product) = self.catalog.get(product_id) else {
            tracing::error!(product_id = %product_id, "product not found");
            return Ok(AddOutcome::UnknownProduct(product_id));
        };

        let line = self.cart.add_product(product)?.clone();
        tracing::debug!(
            product_id = %product_id,
            quantity = line.quantity,
            "added to cart"
        );

        self.persist()?;
        Ok(AddOutcome::Added(line))
    }

    /// Delete the storage entry and empty the cart.
    ///
    /// If the delete fails the cart is left as it was.
    pub fn clear(&mut self) -> Result<(), CartError> {
        self.store.delete(&self.key)?;
        self.cart.clear();
        tracing::info!(key = %self.key, "cart cleared");
        Ok(())
    }

    /// Build the order summary for the current cart.
    pub fn compute_summary(&self) -> OrderSummary {
        OrderSummary::for_cart(&self.cart, &self.format)
    }

    /// Push the current item count to a display.
    pub fn refresh_count_display<D: CountDisplay + ?Sized>(&self, display: &mut D) {
        refresh_count_display(&self.cart, display);
    }

    /// The current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The product reference set.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The number format used for summaries.
    pub fn format(&self) -> &NumberFormat {
        &self.format
    }

    /// The storage key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying store.
    pub fn store(&self) -> &Store {
        &self.store
    }

    fn persist(&self) -> Result<(), StorageError> {
        self.store.set(&self.key, &self.cart.items())
    }
}

fn read_cart(store: &Store, key: &str) -> Result<Option<Cart>, CartError> {
    match store.get::<Vec<LineItem>>(key)? {
        Some(items) => Ok(Some(Cart::from_items(items)?)),
        None => Ok(None),
    }
}
