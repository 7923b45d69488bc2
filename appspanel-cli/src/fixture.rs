//! Page fixtures: the tables and permission checkboxes a page is built from.
//!
//! ```json
//! {
//!   "tables": [{
//!     "name": "users",
//!     "id_column": { "name": "login" },
//!     "columns": [{ "caption": "Name", "name": "name" }],
//!     "rows": [{ "login": "u1", "name": "Ann" }],
//!     "confirm": { "title": "Delete", "content": "Delete the selected users?" }
//!   }],
//!   "permissions": [{ "id": "perm-edit", "depends_on": "perm-view" }]
//! }
//! ```

use std::fs;
use std::path::Path;

use appspanel_lib::Result as PanelResult;
use appspanel_lib::view::{Column, TableView};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{CliError, Result};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub tables: Vec<TableFixture>,
    #[serde(default)]
    pub permissions: Vec<PermissionFixture>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TableFixture {
    pub name: String,
    pub id_column: ColumnFixture,
    #[serde(default)]
    pub columns: Vec<ColumnFixture>,
    #[serde(default)]
    pub sortby: Option<String>,
    #[serde(default)]
    pub asc: Option<bool>,
    #[serde(default)]
    pub rows: Vec<Value>,
    /// Ask before removing. Without it removal happens on click.
    #[serde(default)]
    pub confirm: Option<ConfirmFixture>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ColumnFixture {
    pub name: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub default: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmFixture {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PermissionFixture {
    pub id: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub depends_on: Option<String>,
}

impl Fixture {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json).map_err(|source| CliError::Fixture {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl TableFixture {
    pub fn view(&self) -> PanelResult<TableView> {
        TableView::new(
            self.columns.iter().map(ColumnFixture::column).collect(),
            self.id_column.column(),
            self.sortby.as_deref(),
            self.asc,
        )
    }
}

impl ColumnFixture {
    pub fn column(&self) -> Column {
        let caption = self.caption.clone().unwrap_or_else(|| self.name.clone());
        let column = Column::new(caption, self.name.clone());
        match &self.default {
            Some(default) => column.with_default(default.clone()),
            None => column,
        }
    }
}
