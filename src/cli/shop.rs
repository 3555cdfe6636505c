//! Interactive storefront menu
//!
//! Reads commands line by line and writes prompts and results to any
//! writer, so the loop runs the same against a terminal or a test buffer.
//! Domain errors are reported and the loop continues; only quitting or the
//! end of input stops it.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use super::output::Palette;
use super::receipt::Receipt;
use crate::domain::{
    parse_index, parse_quantity, Catalog, ListUpdate, OrderLine, ShoppingList,
};

const UNKNOWN_PRODUCT: &str = "Product selection should be from the products which are \
available at our store, try again.";

const MENU: [&str; 4] = [
    "List all products in store",
    "Show total amount in store",
    "Make an order",
    "Quit",
];

/// Menu entries, numbered from 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    List,
    Total,
    Order,
    Quit,
}

impl Choice {
    fn from_number(n: usize) -> Option<Self> {
        match n {
            1 => Some(Choice::List),
            2 => Some(Choice::Total),
            3 => Some(Choice::Order),
            4 => Some(Choice::Quit),
            _ => None,
        }
    }
}

/// The interactive shop session
pub struct Shop<R, W> {
    catalog: Catalog,
    input: R,
    out: W,
    palette: Palette,
    atomic: bool,
}

impl<R: BufRead, W: Write> Shop<R, W> {
    pub fn new(catalog: Catalog, input: R, out: W, palette: Palette) -> Self {
        Self {
            catalog,
            input,
            out,
            palette,
            atomic: false,
        }
    }

    /// Places orders all-or-nothing instead of line by line
    pub fn atomic(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }

    /// Runs the menu loop until the shopper quits or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.menu()?;

            let question = self.palette.accent("Please choose a number: ");
            let Some(answer) = prompt(&mut self.input, &mut self.out, &question)? else {
                break;
            };

            let choice = match answer.parse::<usize>() {
                Ok(n) => Choice::from_number(n),
                Err(_) => {
                    let msg = self.palette.error("Invalid input, please enter a number.");
                    writeln!(self.out, "{}", msg)?;
                    continue;
                }
            };

            tracing::debug!(?choice, "Menu selection");
            match choice {
                Some(Choice::List) => self.list_products()?,
                Some(Choice::Total) => self.show_total()?,
                Some(Choice::Order) => self.make_order()?,
                Some(Choice::Quit) => break,
                None => {
                    let msg = self.palette.error("Invalid choice. Please try again.");
                    writeln!(self.out, "{}", msg)?;
                }
            }
        }

        writeln!(
            self.out,
            "{}",
            self.palette.accent("Thank you for shopping with us! Come again soon!")
        )?;
        Ok(())
    }

    fn menu(&mut self) -> io::Result<()> {
        let p = self.palette;
        writeln!(self.out)?;
        writeln!(self.out, "{}", p.accent(&"=".repeat(50)))?;
        writeln!(self.out, "{}", p.good(&format!("{:^50}", "Welcome to the Store")))?;
        writeln!(self.out, "{}", p.accent(&"=".repeat(50)))?;
        for (i, entry) in MENU.iter().enumerate() {
            writeln!(self.out, "{}", p.note(&format!("{}. {}", i + 1, entry)))?;
        }
        writeln!(self.out, "{}", p.accent(&"-".repeat(50)))
    }

    fn list_products(&mut self) -> io::Result<()> {
        let p = self.palette;
        writeln!(self.out, "{}", p.accent(&"-".repeat(50)))?;
        writeln!(self.out, "{}", p.accent("Available Products:"))?;

        let listing = self.catalog.active_items();
        if listing.is_empty() {
            writeln!(self.out, "{}", p.note("No products available."))?;
        }
        for item in listing {
            writeln!(
                self.out,
                "{}, Price: {}, Quantity: {}",
                p.accent(item.name()),
                p.note(&format!("${}", item.unit_price())),
                p.good(&item.quantity().to_string())
            )?;
        }
        Ok(())
    }

    fn show_total(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "{} {}",
            self.palette.note("Total items in store:"),
            self.palette.good(&self.catalog.total_quantity().to_string())
        )
    }

    fn make_order(&mut self) -> io::Result<()> {
        let Shop {
            catalog,
            input,
            out,
            palette: p,
            atomic,
        } = self;

        let mut list = ShoppingList::new();
        {
            let available = catalog.active_items();
            if available.is_empty() {
                writeln!(out, "{}", p.note("No products available."))?;
                return Ok(());
            }

            writeln!(out, "{}", p.accent("Available Products:"))?;
            for (i, item) in available.iter().enumerate() {
                writeln!(
                    out,
                    "{}. {} - ${} (Qty: {})",
                    i + 1,
                    item.name(),
                    item.unit_price(),
                    item.quantity()
                )?;
            }

            loop {
                let question = p.note("Enter product number (or 'done' to finish): ");
                let Some(choice) = prompt(input, out, &question)? else {
                    cancel(&mut list, out, p)?;
                    break;
                };
                if choice.eq_ignore_ascii_case("done") {
                    break;
                }

                let item = match parse_index(&choice) {
                    Ok(n) if n <= available.len() => available[n - 1],
                    _ => {
                        writeln!(out, "{}", p.error(UNKNOWN_PRODUCT))?;
                        continue;
                    }
                };

                let Some(answer) = prompt(input, out, &p.note("Enter quantity: "))? else {
                    cancel(&mut list, out, p)?;
                    break;
                };
                let Ok(quantity) = parse_quantity(&answer) else {
                    writeln!(out, "{}", p.error("Invalid quantity."))?;
                    continue;
                };

                match list.add(item, quantity) {
                    Ok(ListUpdate::Added { .. }) => {}
                    Ok(ListUpdate::Merged { total }) => {
                        let msg =
                            format!("Updated {} to {} units in your order.", item.name(), total);
                        writeln!(out, "{}", p.note(&msg))?;
                    }
                    Err(warning) => writeln!(out, "{}", p.error(&warning.to_string()))?,
                }
            }
        }

        if list.is_empty() {
            return writeln!(out, "{}", p.note("No products selected."));
        }

        let lines: Vec<OrderLine> = list.into_lines();
        let result = if *atomic {
            catalog.order_atomic(&lines)
        } else {
            catalog.order(&lines)
        };

        match result {
            Ok(total) => {
                let msg = format!("Order placed successfully! Total cost: ${}", total);
                writeln!(out)?;
                writeln!(out, "{}", p.good(&msg))?;
                let receipt = Receipt::new(catalog, &lines, total);
                write!(out, "{}", receipt.render(*p))?;
            }
            Err(err) => {
                writeln!(out, "{}", p.error(&format!("Error during order: {}", err)))?;
                if err.is_partial() {
                    let msg = format!(
                        "{} earlier line(s) of this order were already committed.",
                        err.committed
                    );
                    writeln!(out, "{}", p.note(&msg))?;
                }
            }
        }
        Ok(())
    }

    /// Consumes the session and hands back the catalog
    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }
}

/// Drops an order whose input ended before it was confirmed with `done`
fn cancel<W: Write>(list: &mut ShoppingList, out: &mut W, p: &Palette) -> io::Result<()> {
    if !list.is_empty() {
        writeln!(out, "{}", p.note("Input ended before 'done', order discarded."))?;
        list.clear();
    }
    Ok(())
}

/// Writes `question` and reads one trimmed line, `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: &str,
) -> io::Result<Option<String>> {
    write!(out, "{}", question)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(out)?;
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
