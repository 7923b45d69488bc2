//! Controller error types

use super::AddressError;
use crate::table::TableName;

/// Errors surfaced by the controller and its setup helpers.
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    /// A malformed element id.
    #[error(transparent)]
    Address(#[from] AddressError),

    /// The element that triggered a handler is not in the document.
    #[error("element '{0}' not found")]
    MissingElement(String),

    /// No items or delete strategy were registered for the table.
    #[error("table '{0}' is not registered")]
    UnregisteredTable(TableName),

    /// A table with this name is already installed on the page.
    #[error("table '{0}' is already installed")]
    DuplicateTable(TableName),

    /// Two table columns share a name.
    #[error("column names are not unique: '{0}'")]
    DuplicateColumn(String),

    /// Invalid configuration document.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Failed to read a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T, E = PanelError> = std::result::Result<T, E>;
