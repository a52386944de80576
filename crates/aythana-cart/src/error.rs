//! Cart error types.

use aythana_storage::StorageError;
use thiserror::Error;

/// Errors that can occur in cart operations.
///
/// Unknown products and empty-cart checkouts are not errors: they are
/// reported through [`AddOutcome`](crate::cart::AddOutcome) and
/// [`CheckoutOutcome`](crate::checkout::CheckoutOutcome).
#[derive(Error, Debug)]
pub enum CartError {
    /// Reading or writing the persisted cart failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Persisted cart content violates the line item invariants.
    #[error("Invalid cart: {0}")]
    InvalidCart(String),

    /// A product catalog could not be built.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Unsupported locale tag for number formatting.
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// Product id could not be parsed.
    #[error("Invalid product id: {0:?}")]
    InvalidProductId(String),

    /// Unknown hand-off channel name.
    #[error("Unknown channel: {0:?}")]
    UnknownChannel(String),

    /// Invalid checkout state transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidCheckoutTransition { from: String, to: String },

    /// The UI layer failed to answer a prompt.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// A hand-off link could not be opened.
    #[error("Failed to open link: {0}")]
    OpenLink(String),

    /// Quantity arithmetic overflow.
    #[error("Quantity overflow for product {0}")]
    Overflow(u32),
}
