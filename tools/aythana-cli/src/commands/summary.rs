//! Print the order summary.

use anyhow::Result;

use crate::context::Context;

/// Run the summary command.
pub async fn run(ctx: &Context) -> Result<()> {
    let store = ctx.open_cart_store()?;
    let summary = store.compute_summary();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "items": store.cart().items(),
            "count": store.cart().item_count(),
            "total": summary.total,
            "text": summary.text,
        }));
        return Ok(());
    }

    ctx.output.text(&summary.text);
    if !summary.is_empty() {
        ctx.output.debug(&format!(
            "{} item(s) stored under '{}'",
            store.cart().item_count(),
            store.key()
        ));
    }

    Ok(())
}
