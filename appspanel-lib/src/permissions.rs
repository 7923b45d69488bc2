//! Dependent permission checkboxes.
//!
//! A permission can depend on another one: granting "edit" implies "view".
//! While any dependant is checked, the permission it depends on is forced
//! checked and disabled. When the last dependant is unchecked the forced
//! permission is released and restored to the state it had before.

use std::collections::HashMap;

use log::debug;
use paneldom::Document;

#[derive(Debug, Clone, Default)]
pub struct PermissionGroup {
    /// depends_on id -> dependant ids
    dependants: HashMap<String, Vec<String>>,
    /// dependant id -> depends_on id
    depends_on: HashMap<String, String>,
    /// State a checkbox had before dependants forced it on.
    was_checked: HashMap<String, bool>,
}

impl PermissionGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register checkbox `id`, optionally depending on `depends_on`, and
    /// apply the constraint to the current document state.
    pub fn register(&mut self, doc: &mut Document, id: &str, depends_on: Option<&str>) {
        if let Some(target) = depends_on {
            self.dependants
                .entry(target.to_string())
                .or_default()
                .push(id.to_string());
            self.depends_on.insert(id.to_string(), target.to_string());
            if doc.is_checked(id) {
                force(doc, target, true, true);
            }
        }

        if self.any_dependant_checked(doc, id, None) {
            force(doc, id, true, true);
        }
        self.was_checked.insert(id.to_string(), doc.is_checked(id));
    }

    /// Re-apply constraints after checkbox `id` changed.
    pub fn on_change(&mut self, doc: &mut Document, id: &str) {
        let checked = doc.is_checked(id);
        let Some(target) = self.depends_on.get(id).cloned() else {
            // A free checkbox changed by the user: remember it for restores
            if self.dependants.contains_key(id) {
                self.was_checked.insert(id.to_string(), checked);
            }
            return;
        };

        let others_checked = self.any_dependant_checked(doc, &target, Some(id));
        if checked && !others_checked {
            self.was_checked.insert(target.clone(), doc.is_checked(&target));
        }

        let should_disable = checked || others_checked;
        let should_check =
            should_disable || self.was_checked.get(&target).copied().unwrap_or(false);
        debug!("Permission '{target}': checked={should_check} disabled={should_disable}");
        force(doc, &target, should_check, should_disable);
    }

    pub fn depends_on(&self, id: &str) -> Option<&str> {
        self.depends_on.get(id).map(String::as_str)
    }

    fn any_dependant_checked(&self, doc: &Document, target: &str, except: Option<&str>) -> bool {
        self.dependants.get(target).is_some_and(|ids| {
            ids.iter()
                .filter(|d| Some(d.as_str()) != except)
                .any(|d| doc.is_checked(d))
        })
    }
}

fn force(doc: &mut Document, id: &str, checked: bool, disabled: bool) {
    if let Some(el) = doc.get_mut(id) {
        el.checked = checked;
        el.disabled = disabled;
    }
}
