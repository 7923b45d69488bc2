//! Admin panel table selection
//!
//! Checkbox-driven row selection, derived bulk-action state and dispatch of
//! the selected items to per-table delete strategies, over a `paneldom`
//! document.

pub mod config;
pub mod error;
pub mod format;
pub mod page;
pub mod permissions;
pub mod strategy;
pub mod table;
pub mod view;

pub use config::{PanelConfig, RemovalMode};
pub use error::{AddressError, PanelError, Result};
pub use page::{Action, Page};
pub use table::{ItemId, RowIndex, RowKey, TableController, TableName};
