//! Bulk delete dispatch.

use log::{debug, warn};
use paneldom::Document;

use super::controller::TableController;
use super::key::{ElementAddress, ItemId, RowKey, TableName};
use crate::error::{AddressError, PanelError, Result};
use crate::strategy::DeleteRequest;

impl TableController {
    /// Handle a click on a `{table}_delete_{n}` button.
    ///
    /// Returns the number of items handed to the table's strategy.
    pub fn on_delete_clicked(&mut self, doc: &mut Document, button_id: &str) -> Result<usize> {
        match ElementAddress::parse(button_id)? {
            ElementAddress::DeleteButton(table, _) => self.delete_selected(doc, &table),
            _ => Err(AddressError::Unrecognized(button_id.to_string()).into()),
        }
    }

    /// Hand the current selection of `table` to its registered strategy.
    ///
    /// An empty selection is dispatched too; the strategy decides what an
    /// empty request means.
    pub fn delete_selected(&mut self, doc: &mut Document, table: &TableName) -> Result<usize> {
        if !self.is_registered(table) {
            return Err(PanelError::UnregisteredTable(table.clone()));
        }
        let selection = self.selected_items(doc, table);
        let request = DeleteRequest::new(table.clone(), selection, self.delete_button_ids(table));
        let count = request.len();
        debug!("Dispatching delete of [{}] in '{table}'", request.target);

        let strategy = self
            .strategy_mut(table)
            .ok_or_else(|| PanelError::UnregisteredTable(table.clone()))?;
        strategy.execute(request, doc);
        Ok(count)
    }

    /// Registered ids of the checked rows of `table`, in row order.
    pub fn selected_items(&mut self, doc: &Document, table: &TableName) -> Vec<ItemId> {
        let total = self.registry.element_count(doc, table);
        let items = self.items(table).unwrap_or_default();

        (0..total)
            .filter(|&i| doc.is_checked(&RowKey::new(table.clone(), i).checkbox_id()))
            .filter_map(|i| match items.get(i) {
                Some(item) => Some(item.clone()),
                None => {
                    warn!("Row {i} of '{table}' is checked but has no registered item");
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use paneldom::Element;

    use super::*;

    fn users() -> TableName {
        TableName::new("users").unwrap()
    }

    fn page(rows: usize) -> Document {
        let mut doc = Document::new();
        doc.append(Element::checkbox().id("users_select"));
        for i in 0..rows {
            doc.append(Element::row().id(format!("users_row_{i}")));
            doc.append(Element::checkbox().id(format!("users_select_{i}")));
        }
        doc.append(Element::button("Delete").id("users_delete_1"));
        doc.append(Element::button("Delete").id("users_delete_2"));
        doc
    }

    fn recording(
        controller: &mut TableController,
        items: &[&str],
    ) -> Rc<RefCell<Vec<DeleteRequest>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        controller.register(
            users(),
            items.iter().map(|&i| ItemId::from(i)).collect(),
            move |request: DeleteRequest, _: &mut Document| sink.borrow_mut().push(request),
        );
        seen
    }

    #[test]
    fn test_dispatches_checked_items_in_row_order() {
        let mut doc = page(3);
        let mut controller = TableController::default();
        let seen = recording(&mut controller, &["u1", "u2", "u3"]);
        doc.get_mut("users_select_2").unwrap().checked = true;
        doc.get_mut("users_select_0").unwrap().checked = true;

        let count = controller.on_delete_clicked(&mut doc, "users_delete_2").unwrap();

        assert_eq!(count, 2);
        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].selection, vec![ItemId::from("u1"), ItemId::from("u3")]);
        assert_eq!(seen[0].target.as_str(), "u1/u3");
        assert_eq!(seen[0].buttons, vec!["users_delete_1", "users_delete_2"]);
    }

    #[test]
    fn test_empty_selection_still_dispatched() {
        let mut doc = page(2);
        let mut controller = TableController::default();
        let seen = recording(&mut controller, &["u1", "u2"]);

        let count = controller.on_delete_clicked(&mut doc, "users_delete_1").unwrap();

        assert_eq!(count, 0);
        assert!(seen.borrow()[0].is_empty());
        assert!(seen.borrow()[0].target.is_empty());
    }

    #[test]
    fn test_zero_rows_dispatches_empty() {
        let mut doc = page(0);
        let mut controller = TableController::default();
        let seen = recording(&mut controller, &[]);

        assert_eq!(controller.delete_selected(&mut doc, &users()).unwrap(), 0);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_skips_missing_checkboxes_and_unregistered_rows() {
        let mut doc = page(3);
        let mut controller = TableController::default();
        let _seen = recording(&mut controller, &["u1", "u2"]);
        controller.element_count(&doc, &users());
        doc.get_mut("users_select_1").unwrap().checked = true;
        doc.get_mut("users_select_2").unwrap().checked = true;
        doc.remove("users_select_1");

        // Row 2 is checked but only two items were registered
        assert!(controller.selected_items(&doc, &users()).is_empty());
    }

    #[test]
    fn test_unregistered_table() {
        let mut doc = page(1);
        let mut controller = TableController::default();

        assert!(matches!(
            controller.on_delete_clicked(&mut doc, "users_delete_1"),
            Err(PanelError::UnregisteredTable(t)) if t == users()
        ));
    }

    #[test]
    fn test_malformed_button_id() {
        let mut doc = page(1);
        let mut controller = TableController::default();

        assert!(matches!(
            controller.on_delete_clicked(&mut doc, "delete"),
            Err(PanelError::Address(AddressError::MissingSeparator(_)))
        ));
    }

    #[test]
    fn test_only_delete_buttons_dispatch() {
        let mut doc = page(1);
        let mut controller = TableController::default();
        let seen = recording(&mut controller, &["u1"]);
        doc.get_mut("users_select_0").unwrap().checked = true;

        for id in ["users_row_0", "users_select_0", "users_select"] {
            assert!(matches!(
                controller.on_delete_clicked(&mut doc, id),
                Err(PanelError::Address(AddressError::Unrecognized(got))) if got == id
            ));
        }
        assert!(seen.borrow().is_empty());
    }
}
