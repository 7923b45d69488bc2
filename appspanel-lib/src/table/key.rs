//! Typed element addressing.
//!
//! Every element the controller touches is named `{table}_{role}[_{n}]`:
//!
//! | id                  | element                    |
//! |---------------------|----------------------------|
//! | `{table}_select`    | master "select all" box    |
//! | `{table}_select_{n}`| checkbox of row `n`        |
//! | `{table}_row`       | bare row                   |
//! | `{table}_row_{n}`   | row `n`                    |
//! | `{table}_delete_{n}`| bulk-delete button `n`     |
//!
//! Ids are generated from typed keys and only parsed back when an event
//! arrives carrying a raw target id.

use std::fmt;

use crate::error::AddressError;

/// Logical table a family of elements belongs to.
///
/// Non-empty and free of `_`, so the table part of an element id ends at
/// its first `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableName(String);

impl TableName {
    pub fn new(name: impl Into<String>) -> Result<Self, AddressError> {
        let name = name.into();
        if name.is_empty() {
            return Err(AddressError::EmptyTableName(name));
        }
        if name.contains('_') {
            return Err(AddressError::InvalidTableName(name));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Zero-based position of a row within its table, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowIndex(pub usize);

impl RowIndex {
    pub fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for RowIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for RowIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Address of one row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowKey {
    pub table: TableName,
    pub index: RowIndex,
}

impl RowKey {
    pub fn new(table: TableName, index: impl Into<RowIndex>) -> Self {
        Self {
            table,
            index: index.into(),
        }
    }

    pub fn checkbox_id(&self) -> String {
        checkbox_id(&self.table, Some(self.index))
    }

    pub fn row_id(&self) -> String {
        row_id(&self.table, Some(self.index))
    }
}

/// Opaque identifier of the item shown in a row, supplied by the page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parsed form of a table element id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementAddress {
    SelectAll(TableName),
    RowCheckbox(RowKey),
    BareRow(TableName),
    Row(RowKey),
    DeleteButton(TableName, u8),
}

impl ElementAddress {
    /// Parse an element id.
    ///
    /// The table name is everything before the first `_`, so a table name
    /// can never contain `_` on this path.
    pub fn parse(id: &str) -> Result<Self, AddressError> {
        let table = table_name_of(id)?;
        let rest = &id[table.as_str().len() + 1..];
        let invalid_index = || AddressError::InvalidIndex(id.to_string());

        match rest.split_once('_') {
            None => match rest {
                "select" => Ok(Self::SelectAll(table)),
                "row" => Ok(Self::BareRow(table)),
                _ => Err(AddressError::Unrecognized(id.to_string())),
            },
            Some((role, n)) => match role {
                "select" => {
                    let index = parse_index(n).ok_or_else(invalid_index)?;
                    Ok(Self::RowCheckbox(RowKey::new(table, index)))
                }
                "row" => {
                    let index = parse_index(n).ok_or_else(invalid_index)?;
                    Ok(Self::Row(RowKey::new(table, index)))
                }
                "delete" => {
                    let number = n.parse::<u8>().map_err(|_| invalid_index())?;
                    Ok(Self::DeleteButton(table, number))
                }
                _ => Err(AddressError::Unrecognized(id.to_string())),
            },
        }
    }

    pub fn table(&self) -> &TableName {
        match self {
            Self::SelectAll(table) | Self::BareRow(table) | Self::DeleteButton(table, _) => table,
            Self::RowCheckbox(key) | Self::Row(key) => &key.table,
        }
    }

    /// Element id for this address.
    pub fn id(&self) -> String {
        match self {
            Self::SelectAll(table) => checkbox_id(table, None),
            Self::RowCheckbox(key) => key.checkbox_id(),
            Self::BareRow(table) => row_id(table, None),
            Self::Row(key) => key.row_id(),
            Self::DeleteButton(table, n) => delete_button_id(table, *n),
        }
    }
}

fn parse_index(s: &str) -> Option<RowIndex> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<usize>().ok().map(RowIndex)
}

/// Table name of an element id: the part before the first `_`.
pub fn table_name_of(id: &str) -> Result<TableName, AddressError> {
    let (table, _) = id
        .split_once('_')
        .ok_or_else(|| AddressError::MissingSeparator(id.to_string()))?;
    TableName::new(table).map_err(|_| AddressError::EmptyTableName(id.to_string()))
}

/// Row index of an element id: the part after the last `_`.
pub fn index_of(id: &str) -> Result<RowIndex, AddressError> {
    let (_, n) = id
        .rsplit_once('_')
        .ok_or_else(|| AddressError::MissingSeparator(id.to_string()))?;
    parse_index(n).ok_or_else(|| AddressError::InvalidIndex(id.to_string()))
}

/// `{table}_select_{n}`, or the master `{table}_select` when `index` is `None`.
pub fn checkbox_id(table: &TableName, index: Option<RowIndex>) -> String {
    match index {
        Some(index) => format!("{table}_select_{index}"),
        None => format!("{table}_select"),
    }
}

/// `{table}_row_{n}`, or the bare `{table}_row` when `index` is `None`.
pub fn row_id(table: &TableName, index: Option<RowIndex>) -> String {
    match index {
        Some(index) => format!("{table}_row_{index}"),
        None => format!("{table}_row"),
    }
}

/// `{table}_delete_{number}`.
pub fn delete_button_id(table: &TableName, number: u8) -> String {
    format!("{table}_delete_{number}")
}
