//! Receipt for a completed order

use chrono::{DateTime, Local};
use serde::Serialize;

use super::output::Palette;
use crate::domain::{Catalog, ItemId, OrderLine};

const WIDTH: usize = 60;

/// One purchased line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReceiptLine {
    pub id: ItemId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub subtotal: f64,
}

/// Summary of an order that went through
#[derive(Debug, Clone, Serialize)]
pub struct Receipt {
    pub issued_at: DateTime<Local>,
    pub lines: Vec<ReceiptLine>,
    pub total: f64,
}

impl Receipt {
    /// Builds a receipt for `lines` after they were committed to `catalog`
    pub fn new(catalog: &Catalog, lines: &[OrderLine], total: f64) -> Self {
        let lines = lines
            .iter()
            .filter_map(|line| {
                let item = catalog.get(line.item)?;
                Some(ReceiptLine {
                    id: item.id(),
                    name: item.name().to_string(),
                    quantity: line.quantity,
                    unit_price: item.unit_price(),
                    subtotal: item.price_for(line.quantity),
                })
            })
            .collect();

        Self {
            issued_at: Local::now(),
            lines,
            total,
        }
    }

    /// Renders the receipt as a text block
    pub fn render(&self, palette: Palette) -> String {
        let rule = "=".repeat(WIDTH);
        let thin = "-".repeat(WIDTH);
        let mut out = String::new();

        out.push_str(&palette.accent(&rule));
        out.push('\n');
        out.push_str(&palette.accent(&format!("{:^WIDTH$}", "STORE RECEIPT")));
        out.push('\n');
        out.push_str(&palette.accent(&rule));
        out.push('\n');
        out.push_str(&format!(
            "{} {}\n\n",
            palette.note("Date:"),
            self.issued_at.format("%Y-%m-%d %H:%M:%S")
        ));
        out.push_str(&palette.accent(&format!(
            "{:<25}{:<10}{:<10}{:<10}",
            "Item", "Qty", "Price", "Subtotal"
        )));
        out.push('\n');
        out.push_str(&thin);
        out.push('\n');

        for line in &self.lines {
            out.push_str(&format!(
                "{:<25}{:<10}{:<10.2}{:<10.2}\n",
                truncate(&line.name, 24),
                line.quantity,
                line.unit_price,
                line.subtotal
            ));
        }

        out.push_str(&thin);
        out.push('\n');
        out.push_str(&palette.good(&format!("{:<45}${:.2}", "TOTAL:", self.total)));
        out.push('\n');
        out.push_str(&palette.accent(&rule));
        out.push('\n');
        out.push_str(&palette.accent(&format!("{:^WIDTH$}", "Thank you for shopping with us!")));
        out.push('\n');
        out.push_str(&palette.accent(&rule));
        out.push('\n');

        out
    }
}

fn truncate(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        name.to_string()
    } else {
        let cut: String = name.chars().take(max - 1).collect();
        format!("{}~", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Item;

    #[test]
    fn receipt_lists_lines_and_total() {
        let mac = Item::new("MacBook Air M2", 1450.0, 100).unwrap();
        let bose = Item::new("Bose QuietComfort Earbuds", 250.0, 500).unwrap();
        let lines = [OrderLine::new(mac.id(), 1), OrderLine::new(bose.id(), 2)];
        let mut catalog = Catalog::new(vec![mac, bose]);

        let total = catalog.order(&lines).unwrap();
        let receipt = Receipt::new(&catalog, &lines, total);

        assert_eq!(receipt.lines.len(), 2);
        assert_eq!(receipt.lines[1].subtotal, 500.0);

        let text = receipt.render(Palette::plain());
        assert!(text.contains("MacBook Air M2"));
        assert!(text.contains("Bose QuietComfort Earbu~"));
        assert!(text.contains("$1950.00"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn truncate_keeps_short_names() {
        assert_eq!(truncate("Pixel", 24), "Pixel");
        assert_eq!(truncate("abcdef", 4), "abc~");
    }
}
