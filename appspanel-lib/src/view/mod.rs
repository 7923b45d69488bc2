//! Table view: sorting records and producing elements that follow the
//! table id convention.

mod column;

pub use column::{Column, Getter, display_value};

use std::cmp::Ordering;
use std::collections::HashSet;

use paneldom::Element;
use serde_json::Value;

use crate::config::PanelConfig;
use crate::error::{PanelError, Result};
use crate::table::{ItemId, RowKey, TableName, checkbox_id, delete_button_id};

/// Label of generated bulk-delete buttons.
pub const DELETE_LABEL: &str = "Delete";

/// Elements of a generated table and the item ids to register for it.
#[derive(Debug, Clone)]
pub struct RenderedTable {
    pub table: TableName,
    /// Elements in document order.
    pub elements: Vec<Element>,
    /// One id per row, in row order.
    pub items: Vec<ItemId>,
}

/// Column layout and sort order of a table.
///
/// The id column provides each row's item id and the default sort order.
#[derive(Debug, Clone)]
pub struct TableView {
    columns: Vec<Column>,
    id_column: Column,
    sortby: Column,
    asc: bool,
}

impl TableView {
    /// Create a view.
    ///
    /// An unknown or absent `sortby` sorts by the id column; `asc`
    /// defaults to ascending.
    pub fn new(
        columns: Vec<Column>,
        id_column: Column,
        sortby: Option<&str>,
        asc: Option<bool>,
    ) -> Result<Self> {
        let mut names = HashSet::new();
        for col in &columns {
            if !names.insert(col.name.as_str()) {
                return Err(PanelError::DuplicateColumn(col.name.clone()));
            }
        }

        let sortby = sortby
            .and_then(|name| columns.iter().find(|c| c.name == name))
            .unwrap_or(&id_column)
            .clone();

        Ok(Self {
            columns,
            id_column,
            sortby,
            asc: asc.unwrap_or(true),
        })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn sortby(&self) -> &Column {
        &self.sortby
    }

    pub fn is_ascending(&self) -> bool {
        self.asc
    }

    /// Stable sort by the sort column. Strings compare case-insensitively.
    pub fn sort(&self, records: &mut [Value]) {
        records.sort_by(|a, b| {
            let ordering = compare_values(&self.sortby.value(a), &self.sortby.value(b));
            if self.asc { ordering } else { ordering.reverse() }
        });
    }

    /// Produce the table's elements for `records`, in the given order.
    ///
    /// Layout: the master checkbox, then for each record its row (cells as
    /// data keyed by column name) and row checkbox, then the delete buttons,
    /// disabled until something is selected.
    pub fn generate(&self, records: &[Value], table: &TableName, config: &PanelConfig) -> RenderedTable {
        let mut elements = Vec::with_capacity(records.len() * 2 + 1 + config.delete_buttons as usize);
        let mut items = Vec::with_capacity(records.len());

        elements.push(Element::checkbox().id(checkbox_id(table, None)));

        for (index, record) in records.iter().enumerate() {
            let key = RowKey::new(table.clone(), index);
            let item = display_value(&self.id_column.value(record));

            let mut row = Element::row()
                .id(key.row_id())
                .value(item.clone())
                .class_name(config.row_class(false));
            for col in &self.columns {
                row = row.data(col.name.clone(), display_value(&col.value(record)));
            }
            elements.push(row);
            elements.push(Element::checkbox().id(key.checkbox_id()).value(item.clone()));
            items.push(ItemId::from(item));
        }

        for n in 1..=config.delete_buttons {
            elements.push(
                Element::button(DELETE_LABEL)
                    .id(delete_button_id(table, n))
                    .disabled(true),
            );
        }

        RenderedTable {
            table: table.clone(),
            elements,
            items,
        }
    }
}

fn value_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

/// Total order over cell values: nulls first, then by kind.
fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::String(a), Value::String(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
        (Value::Number(a), Value::Number(b)) => {
            let a = a.as_f64().unwrap_or(f64::NAN);
            let b = b.as_f64().unwrap_or(f64::NAN);
            a.total_cmp(&b)
        }
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        _ => value_rank(a).cmp(&value_rank(b)),
    }
}

#[cfg(test)]
mod tests {
    use paneldom::ElementKind;
    use serde_json::json;

    use super::*;

    fn users_view(sortby: Option<&str>, asc: Option<bool>) -> TableView {
        TableView::new(
            vec![Column::new("Name", "name"), Column::new("Quota", "quota").with_default(0)],
            Column::new("Login", "login"),
            sortby,
            asc,
        )
        .unwrap()
    }

    fn records() -> Vec<Value> {
        vec![
            json!({"login": "carol", "name": "carol", "quota": 5}),
            json!({"login": "alice", "name": "Bob", "quota": 10}),
            json!({"login": "bob", "name": "alice"}),
        ]
    }

    fn logins(records: &[Value]) -> Vec<&str> {
        records.iter().map(|r| r["login"].as_str().unwrap()).collect()
    }

    #[test]
    fn test_duplicate_columns_rejected() {
        let err = TableView::new(
            vec![Column::new("A", "a"), Column::new("B", "a")],
            Column::new("Id", "id"),
            None,
            None,
        )
        .unwrap_err();
        assert!(matches!(err, PanelError::DuplicateColumn(name) if name == "a"));
    }

    #[test]
    fn test_default_sort_is_id_ascending() {
        let view = users_view(None, None);
        let mut records = records();

        view.sort(&mut records);

        assert_eq!(view.sortby().name, "login");
        assert!(view.is_ascending());
        assert_eq!(logins(&records), vec!["alice", "bob", "carol"]);
    }

    #[test]
    fn test_unknown_sortby_falls_back_to_id() {
        assert_eq!(users_view(Some("nope"), None).sortby().name, "login");
    }

    #[test]
    fn test_sort_is_case_insensitive() {
        let view = users_view(Some("name"), Some(true));
        let mut records = records();

        view.sort(&mut records);

        // alice, Bob, carol
        assert_eq!(logins(&records), vec!["bob", "alice", "carol"]);
    }

    #[test]
    fn test_sort_descending_uses_defaults() {
        let view = users_view(Some("quota"), Some(false));
        let mut records = records();

        view.sort(&mut records);

        // 10, 5, default 0
        assert_eq!(logins(&records), vec!["alice", "carol", "bob"]);
    }

    #[test]
    fn test_generate_follows_id_convention() {
        let view = users_view(None, None);
        let table = TableName::new("users").unwrap();

        let rendered = view.generate(&records()[..2], &table, &PanelConfig::default());

        let ids: Vec<_> = rendered.elements.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "users_select",
                "users_row_0",
                "users_select_0",
                "users_row_1",
                "users_select_1",
                "users_delete_1",
                "users_delete_2",
            ]
        );
        assert_eq!(rendered.items, vec![ItemId::from("carol"), ItemId::from("alice")]);

        let row = &rendered.elements[3];
        assert_eq!(row.kind, ElementKind::Row);
        assert_eq!(row.get_data("name").map(String::as_str), Some("Bob"));
        assert_eq!(row.get_data("quota").map(String::as_str), Some("10"));
        assert_eq!(rendered.elements[4].value.as_deref(), Some("alice"));
        assert!(rendered.elements[5].disabled);
    }

    #[test]
    fn test_generate_empty_table() {
        let view = users_view(None, None);
        let table = TableName::new("users").unwrap();
        let config = PanelConfig::default().with_delete_buttons(1);

        let rendered = view.generate(&[], &table, &config);

        assert_eq!(rendered.elements.len(), 2);
        assert!(rendered.items.is_empty());
    }
}
