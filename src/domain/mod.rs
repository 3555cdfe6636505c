//! Domain models for the storefront
//!
//! Contains the inventory and order logic without any I/O concerns.

mod catalog;
mod error;
mod id;
mod item;
mod order;
mod shopping_list;

pub use catalog::{Catalog, ItemSeed};
pub use error::{InventoryError, InventoryResult, OrderError};
pub use id::{IdError, ItemId};
pub use item::{Item, ItemState};
pub use order::{parse_index, parse_quantity, OrderLine, Selection};
pub use shopping_list::{ListUpdate, ListWarning, ShoppingList};
