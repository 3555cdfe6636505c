//! Item domain model
//!
//! An item is a single catalog entry: a name, a unit price and the stock on
//! hand. Items start out active and are deactivated when their stock hits
//! zero. They never come back on their own; only [`Item::activate`] does that.

use serde::Serialize;
use tracing::debug;

use super::error::{InventoryError, InventoryResult};
use super::id::ItemId;

/// Listing state of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemState {
    Active,
    Inactive,
}

/// A purchasable catalog entry
///
/// Not `Clone`: an [`ItemId`] always names exactly one live item.
#[derive(Debug, PartialEq, Serialize)]
pub struct Item {
    id: ItemId,
    name: String,
    #[serde(rename = "price")]
    unit_price: f64,
    quantity: u32,
    active: bool,
}

impl Item {
    /// Creates a new item
    ///
    /// The name is stored trimmed. The item starts active even when
    /// `quantity` is zero; deactivation only happens on a later stock change.
    ///
    /// # Errors
    /// `InvalidArgument` if the name is blank or the price is negative or
    /// not a finite number.
    pub fn new(name: &str, unit_price: f64, quantity: u32) -> InventoryResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(InventoryError::invalid("name", name, "must not be empty"));
        }
        if !unit_price.is_finite() || unit_price < 0.0 {
            return Err(InventoryError::invalid(
                "price",
                unit_price,
                "must be a non-negative number",
            ));
        }

        Ok(Self {
            id: ItemId::next(),
            name: name.to_string(),
            unit_price,
            quantity,
            active: true,
        })
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    /// Returns the stock on hand
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Sets the stock on hand, deactivating the item when it reaches zero
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        if quantity == 0 {
            self.deactivate();
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn state(&self) -> ItemState {
        if self.active {
            ItemState::Active
        } else {
            ItemState::Inactive
        }
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Returns the price of `quantity` units without touching stock
    pub fn price_for(&self, quantity: u32) -> f64 {
        self.unit_price * f64::from(quantity)
    }

    /// Checks that `quantity` units could be bought right now
    pub(crate) fn check_purchase(&self, quantity: u32) -> InventoryResult<()> {
        if quantity == 0 {
            return Err(InventoryError::invalid(
                "quantity",
                quantity,
                "must be a positive integer",
            ));
        }
        if quantity > self.quantity {
            return Err(InventoryError::OutOfStock {
                item: self.id,
                name: self.name.clone(),
                requested: quantity,
                available: self.quantity,
            });
        }
        Ok(())
    }

    /// Buys `quantity` units and returns their total price
    ///
    /// Stock is only touched once both checks pass.
    ///
    /// # Errors
    /// `InvalidArgument` for a zero quantity, `OutOfStock` when the request
    /// exceeds the stock on hand.
    pub fn buy(&mut self, quantity: u32) -> InventoryResult<f64> {
        self.check_purchase(quantity)?;

        let total = self.price_for(quantity);
        self.set_quantity(self.quantity - quantity);
        debug!(item = %self.id, quantity, remaining = self.quantity, total, "Bought");

        Ok(total)
    }
}
