//! Row count discovery.

use std::collections::HashMap;

use log::debug;
use paneldom::Document;

use super::key::{RowIndex, TableName, row_id};

/// Memoized row counts per table.
///
/// A count is discovered by probing `{table}_row_0`, `{table}_row_1`, ...
/// until the first missing row, then cached. Rows inserted afterwards are
/// not seen until the table is `reset`.
#[derive(Debug, Clone, Default)]
pub struct RowRegistry {
    counts: HashMap<TableName, usize>,
}

impl RowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows in `table`, probing the document on first use.
    pub fn element_count(&mut self, doc: &Document, table: &TableName) -> usize {
        if let Some(&count) = self.counts.get(table) {
            return count;
        }
        let count = (0..)
            .take_while(|&i| doc.contains(&row_id(table, Some(RowIndex(i)))))
            .count();
        debug!("Discovered {count} rows in table '{table}'");
        self.counts.insert(table.clone(), count);
        count
    }

    /// The cached count, if the table was probed already.
    pub fn cached(&self, table: &TableName) -> Option<usize> {
        self.counts.get(table).copied()
    }

    /// Forget the count of one table. Returns the forgotten value.
    pub fn reset(&mut self, table: &TableName) -> Option<usize> {
        self.counts.remove(table)
    }

    pub fn reset_all(&mut self) {
        self.counts.clear();
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use paneldom::Element;

    use super::*;

    fn table(name: &str) -> TableName {
        TableName::new(name).unwrap()
    }

    fn rows(name: &str, n: usize) -> Document {
        Document::from_elements((0..n).map(|i| Element::row().id(format!("{name}_row_{i}"))))
    }

    #[test]
    fn test_counts_sequential_rows() {
        let doc = rows("users", 3);
        let mut registry = RowRegistry::new();

        assert_eq!(registry.element_count(&doc, &table("users")), 3);
        assert_eq!(registry.cached(&table("users")), Some(3));
    }

    #[test]
    fn test_stops_at_first_gap() {
        let mut doc = rows("users", 4);
        doc.remove("users_row_2");
        let mut registry = RowRegistry::new();

        assert_eq!(registry.element_count(&doc, &table("users")), 2);
    }

    #[test]
    fn test_zero_rows() {
        let doc = Document::new();
        let mut registry = RowRegistry::new();

        assert_eq!(registry.element_count(&doc, &table("groups")), 0);
        assert_eq!(registry.cached(&table("groups")), Some(0));
    }

    #[test]
    fn test_second_call_does_not_probe() {
        let doc = rows("users", 3);
        let mut registry = RowRegistry::new();

        let first = registry.element_count(&doc, &table("users"));
        let probes = doc.lookups();
        // Three hits plus the miss that ends the scan
        assert_eq!(probes, 4);

        let second = registry.element_count(&doc, &table("users"));
        assert_eq!(first, second);
        assert_eq!(doc.lookups(), probes);
    }

    #[test]
    fn test_tables_are_independent() {
        let mut doc = rows("users", 2);
        doc.extend(rows("groups", 5).iter().cloned());
        let mut registry = RowRegistry::new();

        assert_eq!(registry.element_count(&doc, &table("users")), 2);
        assert_eq!(registry.element_count(&doc, &table("groups")), 5);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_reset_reprobes() {
        let mut doc = rows("users", 2);
        let mut registry = RowRegistry::new();
        assert_eq!(registry.element_count(&doc, &table("users")), 2);

        doc.append(Element::row().id("users_row_2"));
        assert_eq!(registry.element_count(&doc, &table("users")), 2);

        assert_eq!(registry.reset(&table("users")), Some(2));
        assert_eq!(registry.element_count(&doc, &table("users")), 3);

        registry.reset_all();
        assert!(registry.is_empty());
    }
}
