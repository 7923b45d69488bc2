//! Selection aggregation.

use log::{debug, trace};
use paneldom::Document;

use super::controller::TableController;
use super::key::{ElementAddress, RowKey, TableName, checkbox_id, table_name_of};
use crate::error::{AddressError, PanelError, Result};

/// Outcome of one selection recomputation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSummary {
    pub table: TableName,
    /// Row count from the registry.
    pub total: usize,
    /// Row checkboxes actually present in the document.
    pub found: usize,
    /// Row checkboxes present and checked.
    pub selected: usize,
}

impl SelectionSummary {
    /// Whether the bulk-delete buttons ended up enabled.
    pub fn actions_enabled(&self) -> bool {
        self.selected > 0
    }
}

impl TableController {
    /// Handle a change of the master `{table}_select` checkbox.
    pub fn on_select_all(&mut self, doc: &mut Document, master_id: &str) -> Result<SelectionSummary> {
        let table = table_name_of(master_id)?;
        let checked = doc
            .get(master_id)
            .map(|master| master.checked)
            .ok_or_else(|| PanelError::MissingElement(master_id.to_string()))?;
        Ok(self.select_all(doc, &table, checked))
    }

    /// Set every row checkbox of `table` to `checked`.
    ///
    /// Rows whose checkbox is gone are skipped. Delete buttons are enabled
    /// only when selecting and at least one checkbox was found.
    pub fn select_all(&mut self, doc: &mut Document, table: &TableName, checked: bool) -> SelectionSummary {
        let total = self.registry.element_count(doc, table);
        let mut found = 0;

        for index in 0..total {
            let key = RowKey::new(table.clone(), index);
            match doc.get_mut(&key.checkbox_id()) {
                Some(checkbox) => {
                    checkbox.checked = checked;
                    found += 1;
                }
                None => trace!("Checkbox of row {index} in '{table}' is gone"),
            }
            self.mark_row(doc, &key, checked);
        }

        let summary = SelectionSummary {
            table: table.clone(),
            total,
            found,
            selected: if checked { found } else { 0 },
        };
        self.set_delete_buttons_enabled(doc, table, summary.actions_enabled());
        debug!("Select all: {summary:?}");
        summary
    }

    /// Handle a change of a `{table}_select_{n}` row checkbox.
    pub fn on_select_row(&mut self, doc: &mut Document, checkbox_id: &str) -> Result<SelectionSummary> {
        match ElementAddress::parse(checkbox_id)? {
            ElementAddress::RowCheckbox(key) => Ok(self.select_row(doc, &key)),
            _ => Err(AddressError::Unrecognized(checkbox_id.to_string()).into()),
        }
    }

    /// Recompute the table's aggregate state after row `key` changed.
    ///
    /// The master checkbox is checked exactly when every row counted by the
    /// registry is selected; delete buttons are enabled when any row is.
    pub fn select_row(&mut self, doc: &mut Document, key: &RowKey) -> SelectionSummary {
        let table = &key.table;
        let total = self.registry.element_count(doc, table);

        let checked = doc.is_checked(&key.checkbox_id());
        self.mark_row(doc, key, checked);

        let found = (0..total)
            .filter(|&i| doc.contains(&RowKey::new(table.clone(), i).checkbox_id()))
            .count();
        let selected = self.count_selected(doc, table, total);

        if let Some(master) = doc.get_mut(&checkbox_id(table, None)) {
            master.checked = total > 0 && selected == total;
        }

        let summary = SelectionSummary {
            table: table.clone(),
            total,
            found,
            selected,
        };
        self.set_delete_buttons_enabled(doc, table, summary.actions_enabled());
        debug!("Select row {}: {summary:?}", key.index);
        summary
    }
}
