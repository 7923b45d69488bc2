//! Delete strategies.
//!
//! The dispatcher never removes anything itself. It hands a
//! [`DeleteRequest`] to the strategy registered for the table, which decides
//! whether and how to remove the selection.

mod confirm;
mod remover;

pub use confirm::{Answer, ConfirmDialog};
pub use remover::{NavigationLog, Navigator, Remover, UrlRemover};

use std::fmt;

use paneldom::Document;

use crate::table::{ItemId, TableName};

/// The selected identifiers joined with `/`, used to address a removal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RemovalTarget(String);

impl RemovalTarget {
    pub fn from_items(items: &[ItemId]) -> Self {
        let parts: Vec<_> = items.iter().map(ItemId::as_str).collect();
        Self(parts.join("/"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RemovalTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything a strategy needs to remove a table's selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    /// Table the selection belongs to.
    pub table: TableName,
    /// Selected item ids in row order. May be empty.
    pub selection: Vec<ItemId>,
    /// `selection` joined with `/`.
    pub target: RemovalTarget,
    /// Ids of the table's bulk-delete buttons.
    pub buttons: Vec<String>,
}

impl DeleteRequest {
    pub fn new(table: TableName, selection: Vec<ItemId>, buttons: Vec<String>) -> Self {
        let target = RemovalTarget::from_items(&selection);
        Self {
            table,
            selection,
            target,
            buttons,
        }
    }

    pub fn len(&self) -> usize {
        self.selection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }

    /// Enable or disable every button of the request that is still present.
    pub fn set_buttons_disabled(&self, doc: &mut Document, disabled: bool) {
        for id in &self.buttons {
            if let Some(button) = doc.get_mut(id) {
                button.disabled = disabled;
            }
        }
    }
}

/// Per-table handler invoked with the current selection.
pub trait DeleteStrategy {
    fn execute(&mut self, request: DeleteRequest, doc: &mut Document);
}

impl<F> DeleteStrategy for F
where
    F: FnMut(DeleteRequest, &mut Document),
{
    fn execute(&mut self, request: DeleteRequest, doc: &mut Document) {
        self(request, doc)
    }
}

#[cfg(test)]
mod tests {
    use paneldom::Element;

    use super::*;

    fn request(items: &[&str]) -> DeleteRequest {
        DeleteRequest::new(
            TableName::new("users").unwrap(),
            items.iter().map(|&i| ItemId::from(i)).collect(),
            vec!["users_delete_1".into(), "users_delete_2".into()],
        )
    }

    #[test]
    fn test_target_joins_with_slash() {
        assert_eq!(request(&["u1", "u3"]).target.as_str(), "u1/u3");
        assert_eq!(request(&["u1"]).target.as_str(), "u1");
        assert!(request(&[]).target.is_empty());
    }

    #[test]
    fn test_set_buttons_disabled_skips_missing() {
        let mut doc = Document::from_elements([Element::button("Delete").id("users_delete_1")]);

        request(&["u1"]).set_buttons_disabled(&mut doc, true);

        assert!(doc.get("users_delete_1").unwrap().disabled);
    }

    #[test]
    fn test_closure_strategy() {
        let mut seen = Vec::new();
        let mut doc = Document::new();
        {
            let mut strategy = |req: DeleteRequest, _: &mut Document| seen.push(req.target);
            strategy.execute(request(&["a", "b"]), &mut doc);
        }
        assert_eq!(seen, vec![RemovalTarget("a/b".into())]);
    }
}
