//! Caller-side shopping list
//!
//! Collects selections before an order is placed. Picking the same item
//! twice merges into one line, and a merge that would exceed the item's
//! current stock is refused with a warning. [`Catalog::order`] itself never
//! merges lines; this happens before submission.
//!
//! [`Catalog::order`]: super::Catalog::order

use thiserror::Error;

use super::id::ItemId;
use super::item::Item;
use super::order::OrderLine;

/// Result of adding a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListUpdate {
    /// A new line was appended
    Added { quantity: u32 },
    /// An existing line now asks for `total` units
    Merged { total: u32 },
}

/// A selection that was not added to the list
///
/// These are warnings for the shopper, the list stays usable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ListWarning {
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    #[error("Only {available} of {name} available in stock")]
    ExceedsStock { name: String, available: u32 },

    #[error("You cannot order more than {available} units of {name} in total")]
    MergeExceedsStock { name: String, available: u32 },
}

/// Pending order lines, one per distinct item
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShoppingList {
    lines: Vec<OrderLine>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` units of `item`, merging with an existing line
    pub fn add(&mut self, item: &Item, quantity: u32) -> Result<ListUpdate, ListWarning> {
        if quantity == 0 {
            return Err(ListWarning::InvalidQuantity(quantity));
        }

        let available = item.quantity();
        if let Some(line) = self.lines.iter_mut().find(|l| l.item == item.id()) {
            let total = line.quantity.saturating_add(quantity);
            if total > available {
                return Err(ListWarning::MergeExceedsStock {
                    name: item.name().to_string(),
                    available,
                });
            }
            line.quantity = total;
            return Ok(ListUpdate::Merged { total });
        }

        if quantity > available {
            return Err(ListWarning::ExceedsStock {
                name: item.name().to_string(),
                available,
            });
        }

        self.lines.push(OrderLine::new(item.id(), quantity));
        Ok(ListUpdate::Added { quantity })
    }

    /// Returns the requested quantity for `item`, if listed
    pub fn quantity_of(&self, item: ItemId) -> Option<u32> {
        self.lines.iter().find(|l| l.item == item).map(|l| l.quantity)
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<OrderLine> {
        self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Catalog;

    #[test]
    fn add_new_line() {
        let item = Item::new("Google Pixel 7", 500.0, 250).unwrap();
        let mut list = ShoppingList::new();

        assert_eq!(list.add(&item, 2), Ok(ListUpdate::Added { quantity: 2 }));
        assert_eq!(list.lines(), &[OrderLine::new(item.id(), 2)]);
    }

    #[test]
    fn same_item_twice_merges() {
        let item = Item::new("Widget", 10.0, 5).unwrap();
        let mut list = ShoppingList::new();

        list.add(&item, 2).unwrap();
        assert_eq!(list.add(&item, 3), Ok(ListUpdate::Merged { total: 5 }));
        assert_eq!(list.len(), 1);
        assert_eq!(list.quantity_of(item.id()), Some(5));
    }

    #[test]
    fn merge_beyond_stock_is_refused() {
        let item = Item::new("Widget", 10.0, 5).unwrap();
        let mut list = ShoppingList::new();

        list.add(&item, 4).unwrap();
        let warning = list.add(&item, 2).unwrap_err();
        assert_eq!(
            warning,
            ListWarning::MergeExceedsStock {
                name: "Widget".to_string(),
                available: 5
            }
        );
        assert_eq!(list.quantity_of(item.id()), Some(4));
    }

    #[test]
    fn new_line_beyond_stock_is_refused() {
        let item = Item::new("Gadget", 20.0, 1).unwrap();
        let mut list = ShoppingList::new();

        let warning = list.add(&item, 2).unwrap_err();
        assert_eq!(warning.to_string(), "Only 1 of Gadget available in stock");
        assert!(list.is_empty());
    }

    #[test]
    fn zero_quantity_is_refused() {
        let item = Item::new("Gadget", 20.0, 1).unwrap();
        let mut list = ShoppingList::new();
        assert_eq!(list.add(&item, 0), Err(ListWarning::InvalidQuantity(0)));
    }

    #[test]
    fn merged_list_orders_cleanly() {
        let mut catalog = Catalog::new(vec![
            Item::new("A", 1.5, 10).unwrap(),
            Item::new("B", 4.0, 3).unwrap(),
        ]);

        let mut list = ShoppingList::new();
        {
            let listing = catalog.active_items();
            list.add(listing[0], 2).unwrap();
            list.add(listing[1], 1).unwrap();
            list.add(listing[0], 4).unwrap();
        }
        assert_eq!(list.len(), 2);

        let total = catalog.order(list.lines()).unwrap();
        assert_eq!(total, 13.0);
        assert_eq!(catalog.total_quantity(), 6);
    }
}
