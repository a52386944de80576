//! The UI side of checkout.
//!
//! Checkout never draws anything itself. It asks the UI layer typed
//! questions and gets typed answers back; the UI decides whether that is a
//! modal dialog, a terminal prompt or a scripted answer in a test.

use crate::checkout::{Channel, HandoffLink};
use crate::display::CountDisplay;
use crate::CartError;

/// Blocking questions asked during checkout.
pub trait CheckoutPrompt {
    /// Show a notice the customer must dismiss.
    fn notify(&mut self, message: &str) -> Result<(), CartError>;

    /// Ask which channel to hand the order off to.
    fn choose_channel(&mut self, message: &str) -> Result<Channel, CartError>;

    /// Ask whether to empty the cart.
    fn confirm_clear(&mut self, message: &str) -> Result<bool, CartError>;
}

/// Opens a hand-off link in an external application.
pub trait LinkOpener {
    /// Launch the link. Success only means the launch was attempted; nothing
    /// is known about what happens afterwards.
    fn open_link(&mut self, link: &HandoffLink) -> Result<(), CartError>;
}

/// Everything checkout needs from the UI.
pub trait CheckoutUi: CheckoutPrompt + LinkOpener + CountDisplay {}

impl<T: CheckoutPrompt + LinkOpener + CountDisplay> CheckoutUi for T {}
