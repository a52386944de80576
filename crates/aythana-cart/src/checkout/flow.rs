//! Checkout flow state machine.
//!
//! ```text
//! Idle -> ChannelChoicePrompt -> WhatsAppChosen | EmailChosen
//!      -> ClearConfirmPrompt -> Cleared | Idle
//! ```

use serde::{Deserialize, Serialize};

use crate::checkout::Channel;
use crate::CartError;

/// States of the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckoutState {
    /// No checkout in progress, cart retained.
    Idle,
    /// Waiting for the customer to pick a channel.
    ChannelChoicePrompt,
    /// WhatsApp link handed off.
    WhatsAppChosen,
    /// Email link handed off.
    EmailChosen,
    /// Waiting for the customer to confirm clearing the cart.
    ClearConfirmPrompt,
    /// Cart emptied and storage wiped.
    Cleared,
}

impl CheckoutState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutState::Idle => "idle",
            CheckoutState::ChannelChoicePrompt => "channel_choice_prompt",
            CheckoutState::WhatsAppChosen => "whatsapp_chosen",
            CheckoutState::EmailChosen => "email_chosen",
            CheckoutState::ClearConfirmPrompt => "clear_confirm_prompt",
            CheckoutState::Cleared => "cleared",
        }
    }
}

/// Checkout flow state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutFlow {
    /// Current state.
    pub state: CheckoutState,
    /// Channel picked, once past the channel prompt.
    pub channel: Option<Channel>,
    /// States visited, oldest first, including the current one.
    pub history: Vec<CheckoutState>,
}

impl CheckoutFlow {
    /// Create a flow in `Idle`.
    pub fn new() -> Self {
        Self {
            state: CheckoutState::Idle,
            channel: None,
            history: vec![CheckoutState::Idle],
        }
    }

    /// Start checkout. An empty cart keeps the flow in `Idle`.
    pub fn begin(&mut self, cart_is_empty: bool) -> Result<CheckoutState, CartError> {
        self.expect(CheckoutState::Idle, CheckoutState::ChannelChoicePrompt)?;
        if cart_is_empty {
            return Ok(self.state);
        }
        self.channel = None;
        Ok(self.move_to(CheckoutState::ChannelChoicePrompt))
    }

    /// Record the customer's channel choice.
    pub fn choose(&mut self, channel: Channel) -> Result<CheckoutState, CartError> {
        let next = match channel {
            Channel::WhatsApp => CheckoutState::WhatsAppChosen,
            Channel::Email => CheckoutState::EmailChosen,
        };
        self.expect(CheckoutState::ChannelChoicePrompt, next)?;
        self.channel = Some(channel);
        Ok(self.move_to(next))
    }

    /// Ask whether to clear the cart.
    pub fn ask_clear(&mut self) -> Result<CheckoutState, CartError> {
        if !matches!(
            self.state,
            CheckoutState::WhatsAppChosen | CheckoutState::EmailChosen
        ) {
            return Err(self.invalid(CheckoutState::ClearConfirmPrompt));
        }
        Ok(self.move_to(CheckoutState::ClearConfirmPrompt))
    }

    /// Record the clear confirmation answer.
    pub fn resolve_clear(&mut self, cleared: bool) -> Result<CheckoutState, CartError> {
        let next = if cleared {
            CheckoutState::Cleared
        } else {
            CheckoutState::Idle
        };
        self.expect(CheckoutState::ClearConfirmPrompt, next)?;
        Ok(self.move_to(next))
    }

    /// Check if the flow is at rest (`Idle` or `Cleared`).
    pub fn is_terminal(&self) -> bool {
        matches!(self.state, CheckoutState::Idle | CheckoutState::Cleared)
    }

    fn expect(&self, from: CheckoutState, to: CheckoutState) -> Result<(), CartError> {
        if self.state == from {
            Ok(())
        } else {
            Err(self.invalid(to))
        }
    }

    fn invalid(&self, to: CheckoutState) -> CartError {
        CartError::InvalidCheckoutTransition {
            from: self.state.as_str().to_string(),
            to: to.as_str().to_string(),
        }
    }

    fn move_to(&mut self, next: CheckoutState) -> CheckoutState {
        self.state = next;
        self.history.push(next);
        next
    }
}

impl Default for CheckoutFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_flow_cleared() {
        let mut flow = CheckoutFlow::new();
        assert_eq!(flow.begin(false).unwrap(), CheckoutState::ChannelChoicePrompt);
        assert_eq!(
            flow.choose(Channel::WhatsApp).unwrap(),
            CheckoutState::WhatsAppChosen
        );
        assert_eq!(flow.ask_clear().unwrap(), CheckoutState::ClearConfirmPrompt);
        assert_eq!(flow.resolve_clear(true).unwrap(), CheckoutState::Cleared);

        assert!(flow.is_terminal());
        assert_eq!(flow.channel, Some(Channel::WhatsApp));
        assert_eq!(flow.history.len(), 5);
    }

    #[test]
    fn test_declined_clear_returns_to_idle() {
        let mut flow = CheckoutFlow::new();
        flow.begin(false).unwrap();
        flow.choose(Channel::Email).unwrap();
        flow.ask_clear().unwrap();
        assert_eq!(flow.resolve_clear(false).unwrap(), CheckoutState::Idle);

        // Idle is re-enterable.
        assert_eq!(flow.begin(false).unwrap(), CheckoutState::ChannelChoicePrompt);
    }

    #[test]
    fn test_empty_cart_stays_idle() {
        let mut flow = CheckoutFlow::new();
        assert_eq!(flow.begin(true).unwrap(), CheckoutState::Idle);
        assert_eq!(flow.history, vec![CheckoutState::Idle]);
    }

    #[test]
    fn test_invalid_transitions() {
        let mut flow = CheckoutFlow::new();
        assert!(flow.choose(Channel::WhatsApp).is_err());
        assert!(flow.ask_clear().is_err());
        assert!(flow.resolve_clear(true).is_err());

        flow.begin(false).unwrap();
        assert!(flow.begin(false).is_err());
        assert!(flow.ask_clear().is_err());
    }

    #[test]
    fn test_cleared_is_final() {
        let mut flow = CheckoutFlow::new();
        flow.begin(false).unwrap();
        flow.choose(Channel::WhatsApp).unwrap();
        flow.ask_clear().unwrap();
        flow.resolve_clear(true).unwrap();

        let err = flow.begin(false).unwrap_err();
        assert!(matches!(
            err,
            CartError::InvalidCheckoutTransition { ref from, .. } if from == "cleared"
        ));
    }
}
