//! Storefront - a small in-memory retail inventory
//!
//! A catalog of items with stock, aggregate stock reporting, and multi-line
//! order placement, plus a terminal shell to drive it.
//!
//! ```
//! use storefront::{Catalog, Item, OrderLine};
//!
//! let widget = Item::new("Widget", 10.0, 5).unwrap();
//! let id = widget.id();
//! let mut catalog = Catalog::new(vec![widget]);
//!
//! let total = catalog.order(&[OrderLine::new(id, 3)]).unwrap();
//! assert_eq!(total, 30.0);
//! assert_eq!(catalog.total_quantity(), 2);
//! ```

pub mod cli;
pub mod config;
pub mod domain;

pub use domain::{Catalog, InventoryError, Item, ItemId, OrderError, OrderLine, ShoppingList};
