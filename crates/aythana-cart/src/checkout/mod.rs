//! Checkout module.
//!
//! Checkout is a hand-off, not a transaction: the order summary is sent to
//! WhatsApp or email through a pre-filled link, and the customer decides
//! whether to keep the cart afterwards.

mod flow;
mod handoff;
mod process;
mod prompt;

pub use flow::{CheckoutFlow, CheckoutState};
pub use handoff::{Channel, ContactDetails, HandoffLink, HandoffLinks, EMAIL_SUBJECT_PREFIX};
pub use process::{
    channel_prompt_message, checkout, CheckoutOutcome, CLEAR_CART_PROMPT, EMPTY_CART_NOTICE,
};
pub use prompt::{CheckoutPrompt, CheckoutUi, LinkOpener};
