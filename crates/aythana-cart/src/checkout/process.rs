//! The checkout operation.

use serde::Serialize;

use crate::cart::{CartStore, OrderSummary};
use crate::checkout::{
    Channel, CheckoutFlow, CheckoutState, CheckoutUi, ContactDetails, HandoffLink, HandoffLinks,
};
use crate::CartError;

/// Notice shown when checking out an empty cart.
pub const EMPTY_CART_NOTICE: &str =
    "El carrito está vacío. Por favor, añade algunos productos antes de finalizar la compra.";

/// Question asked after the hand-off.
pub const CLEAR_CART_PROMPT: &str =
    "¿Desea vaciar el carrito después de enviar el pedido (simulado)?";

/// Result of a checkout run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutOutcome {
    /// Terminal state: `Idle` (cart kept or checkout aborted) or `Cleared`.
    pub state: CheckoutState,
    /// Channel picked, if the flow got that far.
    pub channel: Option<Channel>,
    /// Link handed off, if any.
    pub link: Option<HandoffLink>,
    /// Summary that was sent, if any.
    pub summary: Option<OrderSummary>,
}

impl CheckoutOutcome {
    fn aborted() -> Self {
        Self {
            state: CheckoutState::Idle,
            channel: None,
            link: None,
            summary: None,
        }
    }

    /// Check if checkout stopped before the hand-off.
    pub fn is_aborted(&self) -> bool {
        self.channel.is_none()
    }

    /// Check if the cart was emptied.
    pub fn is_cleared(&self) -> bool {
        self.state == CheckoutState::Cleared
    }
}

/// Message shown with the channel choice.
pub fn channel_prompt_message(summary: &OrderSummary) -> String {
    format!(
        "¡Pedido Listo para Enviar!\n\n\
         Resumen:\n\
         {}\n\n\
         Este es el paso final de la SIMULACIÓN. ¿Cómo desea enviar su pedido?",
        summary.body()
    )
}

/// Hand the current cart off to WhatsApp or email.
///
/// With an empty cart the customer gets [`EMPTY_CART_NOTICE`] and nothing
/// else happens. Otherwise the customer picks a channel, the matching link is
/// opened, and the cart is cleared only if the customer confirms
/// [`CLEAR_CART_PROMPT`]. A link that fails to open is logged and the flow
/// carries on.
pub fn checkout(
    store: &mut CartStore,
    contact: &ContactDetails,
    ui: &mut dyn CheckoutUi,
) -> Result<CheckoutOutcome, CartError> {
    let mut flow = CheckoutFlow::new();

    if flow.begin(store.cart().is_empty())? == CheckoutState::Idle {
        tracing::info!("checkout attempted with empty cart");
        ui.notify(EMPTY_CART_NOTICE)?;
        return Ok(CheckoutOutcome::aborted());
    }

    let summary = store.compute_summary();
    let links = HandoffLinks::build(&summary, contact, store.format());

    let channel = ui.choose_channel(&channel_prompt_message(&summary))?;
    flow.choose(channel)?;

    let link = links.get(channel).clone();
    match ui.open_link(&link) {
        Ok(()) => tracing::info!(channel = %channel, total = summary.total, "order handed off"),
        Err(e) => tracing::warn!(channel = %channel, error = %e, "failed to open hand-off link"),
    }

    flow.ask_clear()?;
    let clear = ui.confirm_clear(CLEAR_CART_PROMPT)?;
    if clear {
        store.clear()?;
        store.refresh_count_display(ui);
    }
    flow.resolve_clear(clear)?;

    Ok(CheckoutOutcome {
        state: flow.state,
        channel: Some(channel),
        link: Some(link),
        summary: Some(summary),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::ids::ProductId;
    use aythana_storage::Store;

    /// Scripted UI that records what it was asked.
    #[derive(Default)]
    struct ScriptedUi {
        channel: Option<Channel>,
        clear: bool,
        fail_open: bool,
        notices: Vec<String>,
        channel_messages: Vec<String>,
        opened: Vec<HandoffLink>,
        badge: Option<(u64, bool)>,
    }

    impl crate::checkout::CheckoutPrompt for ScriptedUi {
        fn notify(&mut self, message: &str) -> Result<(), CartError> {
            self.notices.push(message.to_string());
            Ok(())
        }

        fn choose_channel(&mut self, message: &str) -> Result<Channel, CartError> {
            self.channel_messages.push(message.to_string());
            self.channel
                .ok_or_else(|| CartError::Prompt("no channel scripted".to_string()))
        }

        fn confirm_clear(&mut self, _message: &str) -> Result<bool, CartError> {
            Ok(self.clear)
        }
    }

    impl crate::checkout::LinkOpener for ScriptedUi {
        fn open_link(&mut self, link: &HandoffLink) -> Result<(), CartError> {
            if self.fail_open {
                return Err(CartError::OpenLink("no browser".to_string()));
            }
            self.opened.push(link.clone());
            Ok(())
        }
    }

    impl crate::display::CountDisplay for ScriptedUi {
        fn render(&mut self, count: u64, visible: bool) {
            self.badge = Some((count, visible));
        }
    }

    fn filled_store() -> CartStore {
        let mut store = CartStore::load(Store::in_memory(), Catalog::aythana());
        store.add_item(ProductId::new(1)).unwrap();
        store.add_item(ProductId::new(1)).unwrap();
        store.add_item(ProductId::new(3)).unwrap();
        store
    }

    #[test]
    fn test_empty_cart_notifies_and_aborts() {
        let mut store = CartStore::load(Store::in_memory(), Catalog::aythana());
        let mut ui = ScriptedUi {
            channel: Some(Channel::WhatsApp),
            clear: true,
            ..Default::default()
        };

        let outcome = checkout(&mut store, &ContactDetails::default(), &mut ui).unwrap();

        assert!(outcome.is_aborted());
        assert_eq!(outcome.state, CheckoutState::Idle);
        assert_eq!(ui.notices, vec![EMPTY_CART_NOTICE.to_string()]);
        assert!(ui.channel_messages.is_empty());
        assert!(ui.opened.is_empty());
        assert!(ui.badge.is_none());
    }

    #[test]
    fn test_whatsapp_and_clear() {
        let mut store = filled_store();
        let mut ui = ScriptedUi {
            channel: Some(Channel::WhatsApp),
            clear: true,
            ..Default::default()
        };

        let outcome = checkout(&mut store, &ContactDetails::default(), &mut ui).unwrap();

        assert!(outcome.is_cleared());
        assert_eq!(outcome.channel, Some(Channel::WhatsApp));
        assert_eq!(outcome.summary.as_ref().unwrap().total, 8800);
        assert_eq!(ui.opened.len(), 1);
        assert!(ui.opened[0].url.starts_with("https://wa.me/"));

        assert!(store.cart().is_empty());
        assert!(!store.store().exists(store.key()).unwrap());
        assert_eq!(ui.badge, Some((0, false)));
    }

    #[test]
    fn test_email_and_keep() {
        let mut store = filled_store();
        let before = store.cart().clone();
        let raw_before = store.store().get_raw(store.key()).unwrap();
        let mut ui = ScriptedUi {
            channel: Some(Channel::Email),
            clear: false,
            ..Default::default()
        };

        let outcome = checkout(&mut store, &ContactDetails::default(), &mut ui).unwrap();

        assert_eq!(outcome.state, CheckoutState::Idle);
        assert!(!outcome.is_aborted());
        assert!(ui.opened[0].url.starts_with("mailto:"));
        assert_eq!(store.cart(), &before);
        assert_eq!(store.cart().item_count(), 3);
        assert_eq!(store.store().get_raw(store.key()).unwrap(), raw_before);
        assert!(ui.badge.is_none());
    }

    #[test]
    fn test_channel_message_omits_greeting() {
        let mut store = filled_store();
        let mut ui = ScriptedUi {
            channel: Some(Channel::Email),
            ..Default::default()
        };
        checkout(&mut store, &ContactDetails::default(), &mut ui).unwrap();

        let message = &ui.channel_messages[0];
        assert!(message.starts_with("¡Pedido Listo para Enviar!"));
        assert!(message.contains("2 x Shampoo Nutritivo ($2.500) - Subtotal: $5.000"));
        assert!(!message.contains("Me gustaría hacer un pedido"));
    }

    #[test]
    fn test_open_failure_does_not_abort() {
        let mut store = filled_store();
        let mut ui = ScriptedUi {
            channel: Some(Channel::WhatsApp),
            clear: true,
            fail_open: true,
            ..Default::default()
        };

        let outcome = checkout(&mut store, &ContactDetails::default(), &mut ui).unwrap();
        assert!(outcome.is_cleared());
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_prompt_failure_leaves_cart() {
        let mut store = filled_store();
        let mut ui = ScriptedUi::default();

        let result = checkout(&mut store, &ContactDetails::default(), &mut ui);
        assert!(matches!(result, Err(CartError::Prompt(_))));
        assert_eq!(store.cart().item_count(), 3);
    }
}
