//! Stock queries (list, total)

use anyhow::Result;

use super::output::Output;
use crate::domain::Catalog;

/// Show the active products with their 1-based index
pub fn list(output: &Output, catalog: &Catalog) -> Result<()> {
    let listing = catalog.active_items();
    output.verbose_ctx(
        "list",
        &format!("{} of {} items active", listing.len(), catalog.len()),
    );

    if output.is_json() {
        let items: Vec<_> = listing
            .iter()
            .enumerate()
            .map(|(i, item)| {
                serde_json::json!({
                    "index": i + 1,
                    "id": item.id(),
                    "name": item.name(),
                    "price": item.unit_price(),
                    "quantity": item.quantity(),
                })
            })
            .collect();
        output.data(&items);
    } else if listing.is_empty() {
        println!("No products available.");
    } else {
        let p = output.palette();
        println!("{}", p.accent("Available Products:"));
        println!("{:<4} {:<8} {:<30} {:>10} {:>8}", "#", "ID", "NAME", "PRICE", "QTY");
        println!("{}", "-".repeat(64));
        for (i, item) in listing.iter().enumerate() {
            println!(
                "{:<4} {:<8} {:<30} {:>10.2} {:>8}",
                i + 1,
                item.id().to_string(),
                item.name(),
                item.unit_price(),
                item.quantity()
            );
        }
    }

    Ok(())
}

/// Show the total stock over all items
pub fn total(output: &Output, catalog: &Catalog) -> Result<()> {
    let total = catalog.total_quantity();

    if output.is_json() {
        output.data(&serde_json::json!({ "total_quantity": total }));
    } else {
        let p = output.palette();
        println!("{} {}", p.note("Total items in store:"), p.good(&total.to_string()));
    }

    Ok(())
}
