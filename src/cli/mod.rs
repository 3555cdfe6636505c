//! # Command-Line Interface
//!
//! The terminal shell around the inventory core.
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `shop` (default) | Interactive menu: list, total, order, quit |
//! | `list` | Active products with their index |
//! | `total` | Total stock over all items |
//! | `order <index:qty>...` | One-shot order with receipt |
//! | `config` | Effective configuration |
//!
//! ## Output Formats
//!
//! The one-shot commands support `--format`:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! storefront --verbose order 1:2
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod config_cmd;
mod logging;
mod order;
mod output;
mod receipt;
mod shop;
mod stock;

pub use app::{run, Cli, Commands};
pub use logging::setup_tracing;
pub use output::{Output, OutputFormat, Palette};
pub use receipt::{Receipt, ReceiptLine};
pub use shop::Shop;
