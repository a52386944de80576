//! List the product catalog.

use anyhow::Result;
use serde::Serialize;

use crate::context::Context;

#[derive(Serialize)]
struct CatalogEntry<'a> {
    id: u32,
    name: &'a str,
    price: u32,
    display_price: String,
}

/// Run the catalog command.
pub async fn run(ctx: &Context) -> Result<()> {
    let catalog = ctx.config.catalog()?;
    let format = ctx.config.number_format()?;

    if ctx.output.is_json() {
        let entries: Vec<CatalogEntry> = catalog
            .iter()
            .map(|p| CatalogEntry {
                id: p.id.get(),
                name: &p.name,
                price: p.price,
                display_price: format.price(u64::from(p.price)),
            })
            .collect();
        ctx.output.json(&entries);
        return Ok(());
    }

    ctx.output.header("Productos Aythana");

    let widths = [4, 28, 10];
    ctx.output.table_row(&["ID", "PRODUCTO", "PRECIO"], &widths);
    for product in catalog.iter() {
        let id = product.id.to_string();
        let price = format.price(u64::from(product.price));
        ctx.output
            .table_row(&[id.as_str(), product.name.as_str(), price.as_str()], &widths);
    }

    ctx.output.info("");
    ctx.output.info("Use `aythana add <id>...` to add products to the cart.");

    Ok(())
}
