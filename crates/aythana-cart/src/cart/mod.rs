//! Shopping cart module.
//!
//! Contains the cart and its line items, the persisted cart store, and the
//! order summary derived from it.

mod cart;
mod store;
mod summary;

pub use cart::{Cart, LineItem};
pub use store::{AddOutcome, CartStore, DEFAULT_CART_KEY};
pub use summary::{
    OrderSummary, EMPTY_CART_TEXT, SUMMARY_CLOSING, SUMMARY_GREETING, SUMMARY_TOTAL_LABEL,
};
