//! Panel configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How confirmed removals are turned into requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalMode {
    /// One request for all selected items, addressed by the `/`-joined target.
    #[default]
    Joined,
    /// One request per selected item.
    PerItem,
}

/// Presentation and addressing settings for every table on a page.
///
/// Every field has a default, so a config file only needs the values it
/// changes.
///
/// # Example
///
/// ```
/// use appspanel_lib::{PanelConfig, RemovalMode};
///
/// let config = PanelConfig::default()
///     .with_selected_class("data selected")
///     .with_removal_mode(RemovalMode::PerItem);
/// assert_eq!(config.delete_buttons, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Class given to rows whose checkbox is checked.
    ///
    /// Default: `"selected"`
    pub selected_class: String,

    /// Class given to rows whose checkbox is not checked.
    ///
    /// Default: empty
    pub default_class: String,

    /// Number of bulk-delete buttons per table, ids `{table}_delete_1..=n`.
    ///
    /// Default: 2 (one above and one below the table)
    pub delete_buttons: u8,

    /// Template for removal URLs; `{0}` is the removal target.
    ///
    /// Default: `"{0}/remove/"`
    pub remove_template: String,

    /// Template for detail page URLs; `{0}` is the item id.
    ///
    /// Default: `"{0}/details/"`
    pub details_template: String,

    /// How confirmed removals are issued.
    pub removal_mode: RemovalMode,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            selected_class: "selected".into(),
            default_class: String::new(),
            delete_buttons: 2,
            remove_template: "{0}/remove/".into(),
            details_template: "{0}/details/".into(),
            removal_mode: RemovalMode::Joined,
        }
    }
}

impl PanelConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON config document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Sets the selected row class.
    pub fn with_selected_class(mut self, class: impl Into<String>) -> Self {
        self.selected_class = class.into();
        self
    }

    /// Sets the unselected row class.
    pub fn with_default_class(mut self, class: impl Into<String>) -> Self {
        self.default_class = class.into();
        self
    }

    /// Sets the number of delete buttons per table.
    pub fn with_delete_buttons(mut self, count: u8) -> Self {
        self.delete_buttons = count;
        self
    }

    /// Sets the removal URL template.
    pub fn with_remove_template(mut self, template: impl Into<String>) -> Self {
        self.remove_template = template.into();
        self
    }

    /// Sets the details URL template.
    pub fn with_details_template(mut self, template: impl Into<String>) -> Self {
        self.details_template = template.into();
        self
    }

    /// Sets the removal mode.
    pub fn with_removal_mode(mut self, mode: RemovalMode) -> Self {
        self.removal_mode = mode;
        self
    }

    /// Row class for a checked or unchecked row.
    pub fn row_class(&self, selected: bool) -> &str {
        if selected {
            &self.selected_class
        } else {
            &self.default_class
        }
    }
}
