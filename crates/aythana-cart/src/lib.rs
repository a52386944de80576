//! Cart store, order summary and checkout hand-off for the Aythana catalog.
//!
//! This crate holds everything a storefront needs that is not drawing:
//!
//! - **Catalog**: the fixed product reference set
//! - **Cart**: line items, the persisted cart store, order summaries
//! - **Checkout**: the hand-off state machine and the WhatsApp / email links
//! - **Display / Feedback**: the item-count badge contract and the transient
//!   "added" acknowledgment on the control that triggered an add
//!
//! The UI layer owns the actual widgets and modals; it plugs in through the
//! [`CountDisplay`](display::CountDisplay), [`AckTarget`](feedback::AckTarget),
//! [`CheckoutPrompt`](checkout::CheckoutPrompt) and
//! [`LinkOpener`](checkout::LinkOpener) traits.
//!
//! # Example
//!
//! ```rust
//! use aythana_cart::prelude::*;
//! use aythana_storage::Store;
//!
//! let mut store = CartStore::load(Store::in_memory(), Catalog::aythana());
//!
//! store.add_item(ProductId::new(1)).unwrap();
//! store.add_item(ProductId::new(1)).unwrap();
//! store.add_item(ProductId::new(3)).unwrap();
//!
//! let summary = store.compute_summary();
//! assert_eq!(summary.total, 8800);
//! assert_eq!(store.cart().item_count(), 3);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod display;
pub mod feedback;

pub use error::CartError;
pub use ids::ProductId;
pub use money::NumberFormat;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CartError;
    pub use crate::ids::ProductId;
    pub use crate::money::NumberFormat;

    // Catalog
    pub use crate::catalog::{Catalog, Product};

    // Cart
    pub use crate::cart::{AddOutcome, Cart, CartStore, LineItem, OrderSummary, DEFAULT_CART_KEY};

    // Checkout
    pub use crate::checkout::{
        checkout, Channel, CheckoutFlow, CheckoutOutcome, CheckoutPrompt, CheckoutState,
        CheckoutUi, ContactDetails, HandoffLink, HandoffLinks, LinkOpener,
    };

    // UI contracts
    pub use crate::display::{refresh_count_display, CountBadge, CountDisplay};
    pub use crate::feedback::{AckControl, AckTarget, Tone, ADDED_LABEL, DEFAULT_ACK_DELAY};
}
