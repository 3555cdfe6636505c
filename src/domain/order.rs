//! Order lines and their textual forms
//!
//! An [`OrderLine`] pairs an item with a requested quantity. Callers either
//! build lines directly or parse them from text:
//!
//! | Form | Example | Type |
//! |------|---------|------|
//! | `<item-id>:<quantity>` | `i-3:2` | [`OrderLine`] |
//! | `<index>:<quantity>` | `1:2` or `1, 2` | [`Selection`] (1-based listing index) |
//!
//! Both forms accept `:` or `,` as the separator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::{InventoryError, InventoryResult};
use super::id::ItemId;
use super::item::Item;

/// One line of an order request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub item: ItemId,
    pub quantity: u32,
}

impl OrderLine {
    pub fn new(item: ItemId, quantity: u32) -> Self {
        Self { item, quantity }
    }
}

impl fmt::Display for OrderLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.item, self.quantity)
    }
}

impl FromStr for OrderLine {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (item, quantity) = split_pair(s, "expected '<item-id>:<quantity>'")?;

        let item = item.parse::<ItemId>().map_err(|_| InventoryError::TypeMismatch {
            expected: "item id",
            found: item.to_string(),
        })?;

        Ok(Self {
            item,
            quantity: parse_quantity(quantity)?,
        })
    }
}

/// A product picked by its 1-based position in the active listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub index: usize,
    pub quantity: u32,
}

impl Selection {
    /// Resolves the selection against a listing into an order line
    pub fn resolve(&self, listing: &[&Item]) -> InventoryResult<OrderLine> {
        let item = self
            .index
            .checked_sub(1)
            .and_then(|i| listing.get(i))
            .ok_or_else(|| {
                InventoryError::invalid("index", self.index, "must refer to a listed product")
            })?;

        Ok(OrderLine::new(item.id(), self.quantity))
    }
}

impl FromStr for Selection {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (index, quantity) = split_pair(s, "expected '<index>:<quantity>'")?;

        Ok(Self {
            index: parse_index(index)?,
            quantity: parse_quantity(quantity)?,
        })
    }
}

/// Parses a 1-based product number
pub fn parse_index(input: &str) -> InventoryResult<usize> {
    let input = input.trim();
    match input.parse::<usize>() {
        Ok(index) if index > 0 => Ok(index),
        _ => Err(InventoryError::invalid(
            "index",
            input,
            "must be a positive integer",
        )),
    }
}

/// Parses a purchase quantity (a positive integer)
pub fn parse_quantity(input: &str) -> InventoryResult<u32> {
    let input = input.trim();
    match input.parse::<u32>() {
        Ok(quantity) if quantity > 0 => Ok(quantity),
        _ => Err(InventoryError::invalid(
            "quantity",
            input,
            "must be a positive integer",
        )),
    }
}

/// Splits `a:b` / `a,b` into exactly two non-empty parts
fn split_pair<'a>(input: &'a str, reason: &'static str) -> InventoryResult<(&'a str, &'a str)> {
    let parts: Vec<&str> = input.split([':', ',']).map(str::trim).collect();

    match parts.as_slice() {
        [first, second] if !first.is_empty() && !second.is_empty() => Ok((first, second)),
        _ => Err(InventoryError::malformed(input.trim(), reason)),
    }
}
