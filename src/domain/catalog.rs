//! Catalog of items and the order transaction
//!
//! The catalog owns its items in insertion order. Listings borrow the live
//! items rather than copying them, so a listing taken after an order shows
//! the committed stock.
//!
//! ## Order semantics
//!
//! | Operation | On a failing line |
//! |-----------|-------------------|
//! | [`Catalog::order`] | earlier lines stay committed, later lines are skipped |
//! | [`Catalog::order_atomic`] | nothing is committed |

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::error::{InventoryError, InventoryResult, OrderError};
use super::id::ItemId;
use super::item::Item;
use super::order::OrderLine;

/// Seed data for building an item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSeed {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl ItemSeed {
    pub fn new(name: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Builds a validated item from the seed
    pub fn build(&self) -> InventoryResult<Item> {
        Item::new(&self.name, self.price, self.quantity)
    }
}

/// An ordered collection of items
#[derive(Debug, Default)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Creates a catalog that takes ownership of `items`
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Builds a catalog from seed entries, failing on the first invalid one
    pub fn from_seeds<'a>(seeds: impl IntoIterator<Item = &'a ItemSeed>) -> InventoryResult<Self> {
        let items = seeds
            .into_iter()
            .map(ItemSeed::build)
            .collect::<InventoryResult<Vec<_>>>()?;

        Ok(Self::new(items))
    }

    /// Appends an item
    pub fn add_item(&mut self, item: Item) {
        debug!(item = %item.id(), name = item.name(), "Added item");
        self.items.push(item);
    }

    /// Removes the item with `id`, handing it back if it was present
    pub fn remove_item(&mut self, id: ItemId) -> Option<Item> {
        let pos = self.items.iter().position(|item| item.id() == id)?;
        let item = self.items.remove(pos);
        debug!(item = %id, name = item.name(), "Removed item");
        Some(item)
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over all items, active and inactive
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Returns the stock of all items, including inactive ones
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity())).sum()
    }

    /// Returns the active items in insertion order
    pub fn active_items(&self) -> Vec<&Item> {
        self.items.iter().filter(|item| item.is_active()).collect()
    }

    /// Places an order, committing each line as soon as it is validated
    ///
    /// Returns the total cost of all lines. On failure the lines before the
    /// failing one remain committed (see [`OrderError::committed`]) and the
    /// lines after it are never attempted.
    pub fn order(&mut self, lines: &[OrderLine]) -> Result<f64, OrderError> {
        let mut total = 0.0;

        for (index, line) in lines.iter().enumerate() {
            debug!(
                line = index,
                item = %line.item,
                quantity = line.quantity,
                "Processing order line"
            );

            let result = match self.get_mut(line.item) {
                Some(item) => item.buy(line.quantity),
                None => Err(not_in_catalog(line.item)),
            };

            match result {
                Ok(cost) => total += cost,
                Err(error) => {
                    let err = OrderError {
                        line: index,
                        committed: index,
                        error,
                    };
                    warn!(error = %err, committed = index, "Order stopped");
                    return Err(err);
                }
            }
        }

        info!(lines = lines.len(), total, "Order processed");
        Ok(total)
    }

    /// Places an order only if every line can be satisfied
    ///
    /// Repeated lines for the same item are checked against that item's
    /// stock together. Nothing is mutated unless the whole order succeeds.
    pub fn order_atomic(&mut self, lines: &[OrderLine]) -> Result<f64, OrderError> {
        let mut requested: HashMap<ItemId, u32> = HashMap::new();

        for (index, line) in lines.iter().enumerate() {
            let fail = |error| OrderError {
                line: index,
                committed: 0,
                error,
            };

            let item = self.get(line.item).ok_or_else(|| fail(not_in_catalog(line.item)))?;
            item.check_purchase(line.quantity).map_err(fail)?;

            let sum = requested.entry(line.item).or_insert(0);
            let wanted = sum.saturating_add(line.quantity);
            item.check_purchase(wanted).map_err(fail)?;
            *sum = wanted;
        }

        // Every line was checked against current stock, so buying cannot fail.
        let mut total = 0.0;
        for (index, line) in lines.iter().enumerate() {
            if let Some(item) = self.get_mut(line.item) {
                total += item.buy(line.quantity).map_err(|error| OrderError {
                    line: index,
                    committed: 0,
                    error,
                })?;
            }
        }

        info!(lines = lines.len(), total, "Order processed atomically");
        Ok(total)
    }
}

fn not_in_catalog(id: ItemId) -> InventoryError {
    InventoryError::TypeMismatch {
        expected: "item in this catalog",
        found: id.to_string(),
    }
}

impl FromIterator<Item> for Catalog {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item(name: &str, price: f64, quantity: u32) -> Item {
        Item::new(name, price, quantity).unwrap()
    }

    fn best_buy() -> Catalog {
        Catalog::new(vec![
            item("MacBook Air M2", 1450.0, 100),
            item("Bose QuietComfort Earbuds", 250.0, 500),
            item("Google Pixel 7", 500.0, 250),
        ])
    }

    fn ids(catalog: &Catalog) -> Vec<ItemId> {
        catalog.iter().map(Item::id).collect()
    }

    #[test]
    fn total_quantity_sums_all_items() {
        let catalog = best_buy();
        assert_eq!(catalog.total_quantity(), 850);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn total_quantity_counts_inactive_items() {
        let mut catalog = best_buy();
        let id = ids(&catalog)[0];
        catalog.get_mut(id).unwrap().deactivate();

        assert_eq!(catalog.total_quantity(), 850);
        assert_eq!(catalog.active_items().len(), 2);
    }

    #[test]
    fn add_and_remove() {
        let mut catalog = best_buy();
        let extra = item("Widget", 10.0, 5);
        let extra_id = extra.id();

        catalog.add_item(extra);
        assert_eq!(catalog.total_quantity(), 855);
        assert_eq!(catalog.active_items().last().unwrap().id(), extra_id);

        let removed = catalog.remove_item(extra_id).unwrap();
        assert_eq!(removed.name(), "Widget");
        assert_eq!(catalog.total_quantity(), 850);
        assert!(!catalog.contains(extra_id));
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut catalog = best_buy();
        let stranger = item("Stranger", 1.0, 1);

        assert!(catalog.remove_item(stranger.id()).is_none());
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn duplicate_names_are_distinct_entries() {
        let mut catalog = Catalog::default();
        catalog.add_item(item("Widget", 10.0, 1));
        catalog.add_item(item("Widget", 10.0, 2));

        let listing = catalog.active_items();
        assert_eq!(listing.len(), 2);
        assert_ne!(listing[0].id(), listing[1].id());
        assert_eq!(catalog.total_quantity(), 3);
    }

    #[test]
    fn listing_preserves_order_and_skips_inactive() {
        let mut catalog = best_buy();
        let ids = ids(&catalog);
        let (mac, bose, pixel) = (ids[0], ids[1], ids[2]);
        catalog.get_mut(bose).unwrap().set_quantity(0);

        let listing: Vec<_> = catalog.active_items().iter().map(|i| i.id()).collect();
        assert_eq!(listing, vec![mac, pixel]);
    }

    #[test]
    fn order_widget_scenario() {
        let widget = item("Widget", 10.0, 5);
        let id = widget.id();
        let mut catalog = Catalog::new(vec![widget]);

        assert_eq!(catalog.order(&[OrderLine::new(id, 3)]).unwrap(), 30.0);
        assert_eq!(catalog.get(id).unwrap().quantity(), 2);
        assert!(catalog.get(id).unwrap().is_active());

        let err = catalog.order(&[OrderLine::new(id, 5)]).unwrap_err();
        assert!(matches!(err.error, InventoryError::OutOfStock { requested: 5, available: 2, .. }));
        assert!(!err.is_partial());
        assert_eq!(catalog.get(id).unwrap().quantity(), 2);
    }

    #[test]
    fn order_last_unit_deactivates() {
        let gadget = item("Gadget", 20.0, 1);
        let id = gadget.id();
        let mut catalog = Catalog::new(vec![gadget]);

        assert_eq!(catalog.order(&[OrderLine::new(id, 1)]).unwrap(), 20.0);
        assert!(!catalog.get(id).unwrap().is_active());
        assert!(catalog.active_items().is_empty());
    }

    #[test]
    fn order_sums_lines() {
        let mut catalog = best_buy();
        let ids = ids(&catalog);

        let total = catalog
            .order(&[OrderLine::new(ids[0], 1), OrderLine::new(ids[1], 2)])
            .unwrap();
        assert_eq!(total, 1950.0);
        assert_eq!(catalog.total_quantity(), 847);
    }

    #[test]
    fn empty_order_costs_nothing() {
        let mut catalog = best_buy();
        assert_eq!(catalog.order(&[]).unwrap(), 0.0);
        assert_eq!(catalog.total_quantity(), 850);
    }

    #[test]
    fn order_commits_lines_before_failure() {
        let mut catalog = Catalog::new(vec![
            item("A", 1.0, 10),
            item("B", 2.0, 1),
            item("C", 3.0, 10),
        ]);
        let ids = ids(&catalog);

        let err = catalog
            .order(&[
                OrderLine::new(ids[0], 4),
                OrderLine::new(ids[1], 2),
                OrderLine::new(ids[2], 5),
            ])
            .unwrap_err();

        assert_eq!(err.line, 1);
        assert_eq!(err.committed, 1);
        assert!(err.is_partial());
        assert_eq!(catalog.get(ids[0]).unwrap().quantity(), 6);
        assert_eq!(catalog.get(ids[1]).unwrap().quantity(), 1);
        assert_eq!(catalog.get(ids[2]).unwrap().quantity(), 10);
    }

    #[test]
    fn order_repeated_item_is_processed_line_by_line() {
        let widget = item("Widget", 10.0, 5);
        let id = widget.id();
        let mut catalog = Catalog::new(vec![widget]);

        let err = catalog
            .order(&[OrderLine::new(id, 3), OrderLine::new(id, 3)])
            .unwrap_err();
        assert_eq!(err.line, 1);
        assert_eq!(catalog.get(id).unwrap().quantity(), 2);
    }

    #[test]
    fn order_unknown_item_is_type_mismatch() {
        let mut catalog = best_buy();
        let first = ids(&catalog)[0];
        let removed = catalog.remove_item(first).unwrap();

        let err = catalog.order(&[OrderLine::new(removed.id(), 1)]).unwrap_err();
        assert!(matches!(err.error, InventoryError::TypeMismatch { .. }));
    }

    #[test]
    fn order_zero_quantity_is_invalid() {
        let mut catalog = best_buy();
        let id = ids(&catalog)[2];

        let err = catalog.order(&[OrderLine::new(id, 0)]).unwrap_err();
        assert!(matches!(
            err.error,
            InventoryError::InvalidArgument { field: "quantity", .. }
        ));
    }

    #[test]
    fn atomic_order_commits_nothing_on_failure() {
        let mut catalog = Catalog::new(vec![item("A", 1.0, 10), item("B", 2.0, 1)]);
        let ids = ids(&catalog);

        let err = catalog
            .order_atomic(&[OrderLine::new(ids[0], 4), OrderLine::new(ids[1], 2)])
            .unwrap_err();

        assert_eq!(err.line, 1);
        assert_eq!(err.committed, 0);
        assert_eq!(catalog.total_quantity(), 11);
    }

    #[test]
    fn atomic_order_sums_repeated_lines() {
        let widget = item("Widget", 10.0, 5);
        let id = widget.id();
        let mut catalog = Catalog::new(vec![widget]);

        let err = catalog
            .order_atomic(&[OrderLine::new(id, 3), OrderLine::new(id, 3)])
            .unwrap_err();
        assert!(matches!(err.error, InventoryError::OutOfStock { requested: 6, .. }));
        assert_eq!(catalog.get(id).unwrap().quantity(), 5);

        assert_eq!(
            catalog
                .order_atomic(&[OrderLine::new(id, 2), OrderLine::new(id, 3)])
                .unwrap(),
            50.0
        );
        assert!(!catalog.get(id).unwrap().is_active());
    }

    #[test]
    fn from_seeds_validates() {
        let catalog = Catalog::from_seeds(&[ItemSeed::new("Widget", 10.0, 5)]).unwrap();
        assert_eq!(catalog.total_quantity(), 5);

        let err = Catalog::from_seeds(&[
            ItemSeed::new("Widget", 10.0, 5),
            ItemSeed::new("X", -5.0, 1),
        ])
        .unwrap_err();
        assert!(matches!(err, InventoryError::InvalidArgument { field: "price", .. }));
    }

    proptest! {
        #[test]
        fn stock_follows_a_model_of_purchases(
            stocks in prop::collection::vec(0u32..50, 1..8),
            buys in prop::collection::vec((0usize..8, 1u32..20), 0..20),
        ) {
            let mut catalog: Catalog = stocks
                .iter()
                .map(|&q| Item::new("P", 2.0, q).unwrap())
                .collect();
            let ids = ids(&catalog);
            let mut model = stocks.clone();
            let mut sold_out = vec![false; stocks.len()];

            for (pick, quantity) in buys {
                let slot = pick % ids.len();
                let result = catalog.order(&[OrderLine::new(ids[slot], quantity)]);

                if quantity <= model[slot] {
                    prop_assert_eq!(result, Ok(2.0 * f64::from(quantity)));
                    model[slot] -= quantity;
                    sold_out[slot] |= model[slot] == 0;
                } else {
                    prop_assert!(result.is_err());
                }
            }

            let expected: u64 = model.iter().map(|&q| u64::from(q)).sum();
            prop_assert_eq!(catalog.total_quantity(), expected);

            let listed: Vec<ItemId> = catalog.active_items().iter().map(|i| i.id()).collect();
            let unsold: Vec<ItemId> = ids
                .iter()
                .zip(&sold_out)
                .filter(|&(_, &gone)| !gone)
                .map(|(&id, _)| id)
                .collect();
            prop_assert_eq!(listed, unsold);
        }

        #[test]
        fn failed_line_leaves_earlier_committed_and_later_untouched(
            first in 1u32..20,
            short in 0u32..20,
            last in 1u32..20,
        ) {
            let mut catalog = Catalog::new(vec![
                item("A", 1.0, first),
                item("B", 1.0, short),
                item("C", 1.0, last),
            ]);
            let ids = ids(&catalog);

            let err = catalog
                .order(&[
                    OrderLine::new(ids[0], first),
                    OrderLine::new(ids[1], short + 1),
                    OrderLine::new(ids[2], last),
                ])
                .unwrap_err();

            prop_assert_eq!(err.line, 1);
            prop_assert_eq!(catalog.get(ids[0]).unwrap().quantity(), 0);
            prop_assert_eq!(catalog.get(ids[1]).unwrap().quantity(), short);
            prop_assert_eq!(catalog.get(ids[2]).unwrap().quantity(), last);
        }
    }
}
