//! Interactive shopping session.

use std::time::Duration;

use anyhow::{bail, Context as _, Result};
use aythana_cart::cart::{AddOutcome, CartStore};
use aythana_cart::catalog::Product;
use aythana_cart::checkout;
use aythana_cart::feedback::AckControl;
use dialoguer::Select;
use indicatif::MultiProgress;

use crate::context::Context;
use crate::output::Output;
use crate::ui::{ProductButton, TerminalUi};

enum Action {
    Add(usize),
    Summary,
    Checkout,
    Quit,
}

/// Run the shop command.
pub async fn run(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("shop is interactive and does not support --json");
    }

    let mut store = ctx.open_cart_store()?;
    let delay = ctx.config.ack_delay();
    let products: Vec<_> = store.catalog().iter().cloned().collect();

    let mut ui = TerminalUi::new(ctx.output.clone());
    ctx.output.header("Productos Aythana");
    store.refresh_count_display(&mut ui);

    let mut selected = 0;
    loop {
        let mut items: Vec<String> = products
            .iter()
            .map(|product| {
                format!(
                    "{:<28} {:>8}",
                    product.name,
                    store.format().price(u64::from(product.price))
                )
            })
            .collect();
        items.push("Ver resumen".to_string());
        items.push(format!("Finalizar compra ({})", ui.count));
        items.push("Salir".to_string());

        let choice = Select::new()
            .items(&items)
            .default(selected)
            .interact_opt()
            .context("Failed to read selection")?;
        let Some(choice) = choice else {
            break;
        };
        selected = choice;

        let action = match choice {
            i if i < products.len() => Action::Add(i),
            i if i == products.len() => Action::Summary,
            i if i == products.len() + 1 => Action::Checkout,
            _ => Action::Quit,
        };

        match action {
            Action::Add(index) => {
                if add_and_acknowledge(&mut store, &products[index], &ctx.output, delay)
                    .await?
                    .is_added()
                {
                    store.refresh_count_display(&mut ui);
                }
            }
            Action::Summary => {
                ctx.output.text(&store.compute_summary().text);
            }
            Action::Checkout => {
                let outcome = checkout::checkout(&mut store, &ctx.config.contact, &mut ui)?;
                if let Some(channel) = outcome.channel {
                    ctx.output.success(&format!("Pedido enviado por {}", channel.display_name()));
                }
            }
            Action::Quit => break,
        }
    }

    Ok(())
}

/// Add one unit of `product`, showing the acknowledgment on the product's
/// button line until it reverts.
///
/// The menu is not drawn meanwhile, so the label on screen always matches
/// the button's state.
async fn add_and_acknowledge(
    store: &mut CartStore,
    product: &Product,
    output: &Output,
    delay: Duration,
) -> Result<AddOutcome> {
    let outcome = store.add_item(product.id)?;
    if let AddOutcome::Added(ref item) = outcome {
        tracing::debug!(id = %item.id, quantity = item.quantity, "added from shop");

        let multi = MultiProgress::new();
        let button = AckControl::new(
            ProductButton::new().with_bar(output.button_bar(&multi, &product.name)),
        );
        let _ = button.acknowledge(delay).await;
        button.target().finish();
    }
    Ok(outcome)
}
