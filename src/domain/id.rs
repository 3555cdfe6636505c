//! Item identifiers
//!
//! ID Format: `i-{sequence}` (e.g., `i-12`)
//!
//! Sequences come from a process-wide counter, so every constructed item
//! gets a distinct id even when names repeat.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

static NEXT_ITEM_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("Invalid item ID format: expected 'i-{{number}}', got '{0}'")]
    InvalidItemId(String),
}

/// Item ID in the format `i-{sequence}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(u64);

impl ItemId {
    /// Allocates the next unused ID
    pub(crate) fn next() -> Self {
        Self(NEXT_ITEM_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the numeric sequence of the ID
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "i-{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let seq = s
            .strip_prefix("i-")
            .ok_or_else(|| IdError::InvalidItemId(s.to_string()))?;

        if seq.is_empty() || !seq.chars().all(|c| c.is_ascii_digit()) {
            return Err(IdError::InvalidItemId(s.to_string()));
        }

        seq.parse()
            .map(Self)
            .map_err(|_| IdError::InvalidItemId(s.to_string()))
    }
}

impl TryFrom<String> for ItemId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.to_string()
    }
}
