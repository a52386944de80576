//! Add products to the cart.

use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::Result;
use aythana_cart::cart::AddOutcome;
use aythana_cart::feedback::AckControl;
use aythana_cart::ProductId;
use indicatif::MultiProgress;
use serde::Serialize;

use super::AddArgs;
use crate::context::Context;
use crate::ui::{ProductButton, TerminalUi};

#[derive(Serialize)]
struct AddReport {
    added: Vec<ProductId>,
    unknown: Vec<ProductId>,
    count: u64,
    total: u64,
}

/// Run the add command.
pub async fn run(args: AddArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_cart_store()?;
    let delay = ctx.config.ack_delay();

    let multi = MultiProgress::new();
    let mut buttons: BTreeMap<ProductId, Arc<AckControl<ProductButton>>> = BTreeMap::new();
    let mut pending = Vec::new();
    let mut report = AddReport {
        added: Vec::new(),
        unknown: Vec::new(),
        count: 0,
        total: 0,
    };

    for id in args.ids {
        match store.add_item(id)? {
            AddOutcome::Added(item) => {
                report.added.push(id);
                if ctx.output.is_json() {
                    continue;
                }

                let button = buttons.entry(id).or_insert_with(|| {
                    let bar = ctx.output.button_bar(&multi, &item.name);
                    AckControl::new(ProductButton::new().with_bar(bar))
                });
                pending.push(button.acknowledge(delay));
            }
            AddOutcome::UnknownProduct(id) => {
                report.unknown.push(id);
                ctx.output.warn(&format!("Producto {} no encontrado en el catálogo", id));
            }
        }
    }

    // Let every acknowledgment revert before the bars are torn down.
    for handle in pending {
        let _ = handle.await;
    }
    for button in buttons.values() {
        button.target().finish();
    }

    report.count = store.cart().item_count();
    report.total = store.cart().total();

    if ctx.output.is_json() {
        ctx.output.json(&report);
        return Ok(());
    }

    let mut ui = TerminalUi::new(ctx.output.clone());
    store.refresh_count_display(&mut ui);
    if !report.added.is_empty() {
        ctx.output
            .kv("Total estimado", &store.format().price(report.total));
    }

    Ok(())
}
