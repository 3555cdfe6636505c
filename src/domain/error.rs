//! Error types for the inventory domain
//!
//! Every variant carries the offending value and the violated constraint
//! instead of a pre-rendered message. Presentation (color, wording around
//! the message) is left to the caller.

use thiserror::Error;

use super::id::ItemId;

/// Errors raised by [`Item`](super::Item) and [`Catalog`](super::Catalog)
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    /// A scalar input failed a domain constraint
    #[error("Invalid {field} '{value}': {constraint}")]
    InvalidArgument {
        field: &'static str,
        value: String,
        constraint: &'static str,
    },

    /// A structural input is not the expected entity
    #[error("Expected {expected}, got {found}")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },

    /// A compound input does not have the required shape
    #[error("Malformed request '{input}': {reason}")]
    MalformedRequest { input: String, reason: &'static str },

    /// Purchase quantity exceeds the stock of one item
    #[error("Not enough stock for {name} ({item}): requested {requested}, available {available}")]
    OutOfStock {
        item: ItemId,
        name: String,
        requested: u32,
        available: u32,
    },
}

impl InventoryError {
    pub(crate) fn invalid(
        field: &'static str,
        value: impl ToString,
        constraint: &'static str,
    ) -> Self {
        InventoryError::InvalidArgument {
            field,
            value: value.to_string(),
            constraint,
        }
    }

    pub(crate) fn malformed(input: impl Into<String>, reason: &'static str) -> Self {
        InventoryError::MalformedRequest {
            input: input.into(),
            reason,
        }
    }

    /// Short machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            InventoryError::InvalidArgument { .. } => "invalid_argument",
            InventoryError::TypeMismatch { .. } => "type_mismatch",
            InventoryError::MalformedRequest { .. } => "malformed_request",
            InventoryError::OutOfStock { .. } => "out_of_stock",
        }
    }
}

/// Failure of a multi-line order
///
/// `committed` counts the lines applied before `line` failed. With the
/// default partial-commit order those purchases stay in effect.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Order line {} failed: {error}", .line + 1)]
pub struct OrderError {
    /// Zero-based index of the failing line
    pub line: usize,
    /// Lines committed before the failure
    pub committed: usize,
    /// What went wrong on the failing line
    pub error: InventoryError,
}

impl OrderError {
    /// Returns true if earlier lines were applied before the failure
    pub fn is_partial(&self) -> bool {
        self.committed > 0
    }
}

/// Convenience alias for domain results
pub type InventoryResult<T> = Result<T, InventoryError>;
