//! One-shot order command

use anyhow::{bail, Result};

use super::output::Output;
use super::receipt::Receipt;
use crate::domain::{Catalog, OrderLine, Selection, ShoppingList};

/// Places an order for `selections` (`<index>:<quantity>`) against `catalog`
///
/// Selections are resolved against the active listing and merged per item
/// before the order is submitted. Selections that would exceed stock are
/// skipped with a warning.
pub fn run(
    output: &Output,
    catalog: &mut Catalog,
    selections: &[String],
    atomic: bool,
) -> Result<()> {
    let mut list = ShoppingList::new();
    let mut warnings = Vec::new();

    {
        let listing = catalog.active_items();
        for raw in selections {
            let selection: Selection = raw.parse()?;
            let line = selection.resolve(&listing)?;
            let item = listing[selection.index - 1];

            output.verbose_ctx("order", &format!("{} -> {}", raw, line));
            if let Err(warning) = list.add(item, line.quantity) {
                output.warn(&format!("Skipping '{}': {}", raw, warning));
                warnings.push(warning.to_string());
            }
        }
    }

    if list.is_empty() {
        bail!("No products selected");
    }

    let lines: Vec<OrderLine> = list.into_lines();
    let result = if atomic {
        catalog.order_atomic(&lines)
    } else {
        catalog.order(&lines)
    };

    let total = match result {
        Ok(total) => total,
        Err(err) if err.is_partial() => {
            bail!("{} ({} earlier line(s) already committed)", err, err.committed)
        }
        Err(err) => return Err(err.into()),
    };

    let receipt = Receipt::new(catalog, &lines, total);
    if output.is_json() {
        output.data(&serde_json::json!({
            "success": true,
            "total": total,
            "receipt": receipt,
            "warnings": warnings,
            "remaining_quantity": catalog.total_quantity(),
        }));
    } else {
        output.success(&format!("Order placed successfully! Total cost: ${}", total));
        print!("{}", receipt.render(output.palette()));
    }

    Ok(())
}
