use std::collections::HashMap;

use log::{debug, trace};
use paneldom::Document;

use super::key::{ItemId, RowKey, TableName, delete_button_id};
use super::registry::RowRegistry;
use crate::config::PanelConfig;
use crate::strategy::DeleteStrategy;

/// What the page registered for one table at setup time.
struct TableRegistration {
    items: Vec<ItemId>,
    strategy: Box<dyn DeleteStrategy>,
}

/// Selection state coordinator for every table on a page.
///
/// Holds no element references: each handler looks elements up in the
/// document it is given and drops them before returning.
pub struct TableController {
    pub(super) config: PanelConfig,
    pub(super) registry: RowRegistry,
    tables: HashMap<TableName, TableRegistration>,
}

impl Default for TableController {
    fn default() -> Self {
        Self::new(PanelConfig::default())
    }
}

impl std::fmt::Debug for TableController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut tables: Vec<_> = self.tables.keys().map(TableName::as_str).collect();
        tables.sort_unstable();
        f.debug_struct("TableController")
            .field("config", &self.config)
            .field("registry", &self.registry)
            .field("tables", &tables)
            .finish()
    }
}

impl TableController {
    pub fn new(config: PanelConfig) -> Self {
        Self {
            config,
            registry: RowRegistry::new(),
            tables: HashMap::new(),
        }
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn registry(&self) -> &RowRegistry {
        &self.registry
    }

    // -------------------------------------------------------------------------
    // Registration
    // -------------------------------------------------------------------------

    /// Register the item ids (one per row, in row order) and the delete
    /// strategy of a table. Re-registering replaces both.
    pub fn register(
        &mut self,
        table: TableName,
        items: Vec<ItemId>,
        strategy: impl DeleteStrategy + 'static,
    ) {
        debug!("Registering table '{table}' with {} items", items.len());
        self.tables.insert(
            table,
            TableRegistration {
                items,
                strategy: Box::new(strategy),
            },
        );
    }

    /// Drop a table's registration and cached row count.
    pub fn unregister(&mut self, table: &TableName) -> bool {
        self.registry.reset(table);
        self.tables.remove(table).is_some()
    }

    pub fn is_registered(&self, table: &TableName) -> bool {
        self.tables.contains_key(table)
    }

    pub fn items(&self, table: &TableName) -> Option<&[ItemId]> {
        self.tables.get(table).map(|r| r.items.as_slice())
    }

    // -------------------------------------------------------------------------
    // Row registry
    // -------------------------------------------------------------------------

    pub fn element_count(&mut self, doc: &Document, table: &TableName) -> usize {
        self.registry.element_count(doc, table)
    }

    /// Forget the cached row count, e.g. after rows were added or removed.
    pub fn reset(&mut self, table: &TableName) {
        self.registry.reset(table);
    }

    // -------------------------------------------------------------------------
    // Shared element updates
    // -------------------------------------------------------------------------

    pub(super) fn strategy_mut(
        &mut self,
        table: &TableName,
    ) -> Option<&mut (dyn DeleteStrategy + 'static)> {
        self.tables.get_mut(table).map(|r| &mut *r.strategy)
    }

    /// Ids of the bulk-delete buttons of a table.
    pub fn delete_button_ids(&self, table: &TableName) -> Vec<String> {
        (1..=self.config.delete_buttons)
            .map(|n| delete_button_id(table, n))
            .collect()
    }

    pub(super) fn set_delete_buttons_enabled(
        &self,
        doc: &mut Document,
        table: &TableName,
        enabled: bool,
    ) {
        for id in self.delete_button_ids(table) {
            match doc.get_mut(&id) {
                Some(button) => button.disabled = !enabled,
                None => trace!("Delete button '{id}' not present"),
            }
        }
    }

    pub(super) fn mark_row(&self, doc: &mut Document, key: &RowKey, selected: bool) {
        let id = key.row_id();
        match doc.get_mut(&id) {
            Some(row) => row.class_name = self.config.row_class(selected).to_string(),
            None => trace!("Row '{id}' not present"),
        }
    }

    /// Number of existing, checked row checkboxes among the first `total` rows.
    pub(super) fn count_selected(&self, doc: &Document, table: &TableName, total: usize) -> usize {
        (0..total)
            .filter(|&i| doc.is_checked(&RowKey::new(table.clone(), i).checkbox_id()))
            .count()
    }
}
