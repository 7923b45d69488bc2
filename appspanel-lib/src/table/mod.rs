//! The table selection controller.
//!
//! - [`RowRegistry`] discovers how many rows a table has.
//! - The aggregator handlers (`on_select_all`, `on_select_row`) keep the
//!   master checkbox, row classes and delete buttons in line with the row
//!   checkboxes.
//! - The dispatcher (`on_delete_clicked`) collects the selected items and
//!   hands them to the table's delete strategy.

mod aggregator;
mod controller;
mod dispatcher;
mod key;
mod registry;

pub use aggregator::SelectionSummary;
pub use controller::TableController;
pub use key::*;
pub use registry::RowRegistry;
