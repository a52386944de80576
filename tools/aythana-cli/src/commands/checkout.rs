//! Send the order via WhatsApp or email.

use anyhow::{bail, Result};
use aythana_cart::cart::CartStore;
use aythana_cart::checkout::{self, CheckoutOutcome, ContactDetails};
use serde::Serialize;

use super::CheckoutArgs;
use crate::context::Context;
use crate::output::Output;
use crate::ui::TerminalUi;

/// JSON shape of a checkout run.
#[derive(Serialize)]
struct CheckoutReport<'a> {
    #[serde(flatten)]
    outcome: &'a CheckoutOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    notice: Option<&'a str>,
}

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_cart_store()?;
    let (outcome, ui) = run_checkout(&args, &mut store, &ctx.config.contact, &ctx.output)?;

    if ctx.output.is_json() {
        ctx.output.json(&CheckoutReport {
            outcome: &outcome,
            notice: ui.notices().last().map(String::as_str),
        });
        return Ok(());
    }

    if let Some(channel) = outcome.channel {
        ctx.output.success(&format!("Pedido enviado por {}", channel.display_name()));
        if let Some(ref link) = outcome.link {
            if ctx.output.is_verbose() && !args.no_open {
                ctx.output.kv("Enlace", &link.url);
            }
        }
        if outcome.is_cleared() {
            ctx.output.info("Carrito vaciado.");
        } else {
            ctx.output.info("El carrito se mantiene.");
        }
    }

    Ok(())
}

/// Run the checkout flow with answers taken from the flags where given.
fn run_checkout(
    args: &CheckoutArgs,
    store: &mut CartStore,
    contact: &ContactDetails,
    output: &Output,
) -> Result<(CheckoutOutcome, TerminalUi)> {
    let mut ui = terminal_ui(args, store.cart().is_empty(), output)?;
    let outcome = checkout::checkout(store, contact, &mut ui)?;
    Ok((outcome, ui))
}

/// Build the UI for a checkout run.
///
/// JSON callers cannot answer prompts: they must name the channel when there
/// is something to send, and without `--clear` the cart is kept.
fn terminal_ui(args: &CheckoutArgs, cart_is_empty: bool, output: &Output) -> Result<TerminalUi> {
    let clear = match args.clear_answer() {
        None if output.is_json() => Some(false),
        answer => answer,
    };
    let channel = match args.channel {
        None if output.is_json() && !cart_is_empty => {
            bail!("--channel is required with --json")
        }
        channel => channel,
    };

    let ui = TerminalUi::new(output.clone())
        .with_channel(channel)
        .with_clear(clear)
        .with_open_links(!args.no_open);

    Ok(match args.open_with {
        Some(ref program) => ui.with_launcher(program.clone()),
        None => ui,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use aythana_cart::catalog::Catalog;
    use aythana_cart::checkout::{Channel, CheckoutState, EMPTY_CART_NOTICE};
    use aythana_cart::ProductId;
    use aythana_storage::Store;

    fn args(channel: Option<Channel>, clear: bool, keep: bool) -> CheckoutArgs {
        CheckoutArgs {
            channel,
            clear,
            keep,
            no_open: true,
            open_with: None,
        }
    }

    fn json_output() -> Output {
        Output::new(false, true)
    }

    fn filled_store() -> CartStore {
        let mut store = CartStore::load(Store::in_memory(), Catalog::aythana());
        store.add_item(ProductId::new(1)).unwrap();
        store.add_item(ProductId::new(3)).unwrap();
        store
    }

    #[test]
    fn test_json_requires_channel() {
        let mut store = filled_store();
        let result = run_checkout(
            &args(None, false, false),
            &mut store,
            &ContactDetails::default(),
            &json_output(),
        );

        assert!(result.is_err());
        assert_eq!(store.cart().item_count(), 2);
    }

    #[test]
    fn test_json_keeps_cart_by_default() {
        let mut store = filled_store();
        let (outcome, _) = run_checkout(
            &args(Some(Channel::WhatsApp), false, false),
            &mut store,
            &ContactDetails::default(),
            &json_output(),
        )
        .unwrap();

        assert_eq!(outcome.state, CheckoutState::Idle);
        assert_eq!(outcome.channel, Some(Channel::WhatsApp));
        assert!(!outcome.is_cleared());
        assert_eq!(store.cart().item_count(), 2);
        assert!(store.store().exists(store.key()).unwrap());
    }

    #[test]
    fn test_json_clear_flag_empties_cart() {
        let mut store = filled_store();
        let (outcome, _) = run_checkout(
            &args(Some(Channel::Email), true, false),
            &mut store,
            &ContactDetails::default(),
            &json_output(),
        )
        .unwrap();

        assert!(outcome.is_cleared());
        assert!(outcome.link.unwrap().url.starts_with("mailto:"));
        assert!(store.cart().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_open_with_runs_given_program() {
        let mut store = filled_store();
        let mut checkout_args = args(Some(Channel::WhatsApp), false, true);
        checkout_args.no_open = false;
        checkout_args.open_with = Some("true".to_string());

        let (outcome, _) = run_checkout(
            &checkout_args,
            &mut store,
            &ContactDetails::default(),
            &json_output(),
        )
        .unwrap();
        assert!(outcome.link.unwrap().url.starts_with("https://wa.me/"));
    }

    #[test]
    fn test_json_empty_cart_reports_notice() {
        let mut store = CartStore::load(Store::in_memory(), Catalog::aythana());
        let (outcome, ui) = run_checkout(
            &args(None, false, false),
            &mut store,
            &ContactDetails::default(),
            &json_output(),
        )
        .unwrap();

        assert!(outcome.is_aborted());
        assert_eq!(ui.notices().to_vec(), vec![EMPTY_CART_NOTICE.to_string()]);

        let report = serde_json::to_value(CheckoutReport {
            outcome: &outcome,
            notice: ui.notices().last().map(String::as_str),
        })
        .unwrap();
        assert_eq!(report["state"], serde_json::json!("Idle"));
        assert_eq!(report["notice"], serde_json::json!(EMPTY_CART_NOTICE));
        assert!(report["channel"].is_null());
    }
}
