use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// The role an element plays in the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ElementKind {
    /// Plain container.
    #[default]
    Box,
    Checkbox,
    Button,
    Row,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    pub kind: ElementKind,

    // Content
    /// Visible label, e.g. of a button.
    pub text: Option<String>,
    /// Form value. Checkboxes carry the identifier of the item they select.
    pub value: Option<String>,

    // State
    pub checked: bool,
    /// Disabled elements don't fire click or change events.
    pub disabled: bool,
    /// Space separated class list, like the `class` attribute.
    pub class_name: String,

    // Custom data storage (table cells, handler hints, etc.)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            kind: ElementKind::Box,
            text: None,
            value: None,
            checked: false,
            disabled: false,
            class_name: String::new(),
            data: HashMap::new(),
        }
    }
}

impl Element {
    pub fn checkbox() -> Self {
        Self {
            id: generate_id("checkbox"),
            kind: ElementKind::Checkbox,
            ..Default::default()
        }
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self {
            id: generate_id("button"),
            kind: ElementKind::Button,
            text: Some(label.into()),
            ..Default::default()
        }
    }

    pub fn row() -> Self {
        Self {
            id: generate_id("row"),
            kind: ElementKind::Row,
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Content
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    // State
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Check whether `class` is one of the element's classes.
    pub fn has_class(&self, class: &str) -> bool {
        self.class_name.split_whitespace().any(|c| c == class)
    }

    pub fn is_checkbox(&self) -> bool {
        self.kind == ElementKind::Checkbox
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }
}
