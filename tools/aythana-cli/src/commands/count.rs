//! Show the cart item count.

use anyhow::Result;
use aythana_cart::display::CountBadge;

use crate::context::Context;

/// Run the count command.
pub async fn run(ctx: &Context) -> Result<()> {
    let store = ctx.open_cart_store()?;

    let mut badge = CountBadge::default();
    store.refresh_count_display(&mut badge);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "count": badge.count,
            "visible": badge.visible,
        }));
        return Ok(());
    }

    if badge.visible {
        ctx.output.badge(badge.count, badge.visible);
    } else {
        ctx.output.info(aythana_cart::cart::EMPTY_CART_TEXT);
    }

    Ok(())
}
