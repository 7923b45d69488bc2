//! Table column definitions.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// Extracts a cell value from a record.
pub type Getter = Arc<dyn Fn(&Value) -> Option<Value> + Send + Sync>;

/// A visible table column.
#[derive(Clone)]
pub struct Column {
    /// Header caption.
    pub caption: String,
    /// Field name; unique within a table.
    pub name: String,
    getter: Option<Getter>,
    /// Value used when the field is missing or null.
    pub default: Value,
}

impl Column {
    pub fn new(caption: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            name: name.into(),
            getter: None,
            default: Value::Null,
        }
    }

    /// Compute the cell from the whole record instead of reading `name`.
    pub fn with_getter(
        mut self,
        getter: impl Fn(&Value) -> Option<Value> + Send + Sync + 'static,
    ) -> Self {
        self.getter = Some(Arc::new(getter));
        self
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = default.into();
        self
    }

    /// The column's value for `record`, falling back to the default.
    pub fn value(&self, record: &Value) -> Value {
        let value = match &self.getter {
            Some(getter) => getter(record),
            None => record.get(&self.name).cloned(),
        };
        match value {
            Some(Value::Null) | None => self.default.clone(),
            Some(value) => value,
        }
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("caption", &self.caption)
            .field("name", &self.name)
            .field("getter", &self.getter.is_some())
            .field("default", &self.default)
            .finish()
    }
}

/// Text shown for a cell value. Strings are shown bare, null as empty.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
