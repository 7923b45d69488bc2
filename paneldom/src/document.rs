//! Flat element store addressed by id.
//!
//! Elements keep document order. Lookups by id are counted so callers can
//! verify how often they touch the document.

use std::cell::Cell;
use std::collections::HashMap;

use log::trace;

use crate::element::{Element, ElementKind};
use crate::event::Event;

#[derive(Debug, Default)]
pub struct Document {
    elements: Vec<Element>,
    index: HashMap<String, usize>,
    lookups: Cell<u64>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_elements(elements: impl IntoIterator<Item = Element>) -> Self {
        let mut doc = Self::new();
        doc.extend(elements);
        doc
    }

    /// Append an element at the end of the document.
    ///
    /// An element with the same id is replaced in place and returned.
    pub fn append(&mut self, element: Element) -> Option<Element> {
        if let Some(&pos) = self.index.get(&element.id) {
            return Some(std::mem::replace(&mut self.elements[pos], element));
        }
        self.index.insert(element.id.clone(), self.elements.len());
        self.elements.push(element);
        None
    }

    pub fn extend(&mut self, elements: impl IntoIterator<Item = Element>) {
        for element in elements {
            self.append(element);
        }
    }

    /// Remove an element, shifting later elements up.
    pub fn remove(&mut self, id: &str) -> Option<Element> {
        let pos = self.index.remove(id)?;
        let removed = self.elements.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Some(removed)
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.record_lookup(id);
        self.index.get(id).map(|&pos| &self.elements[pos])
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.record_lookup(id);
        match self.index.get(id) {
            Some(&pos) => Some(&mut self.elements[pos]),
            None => None,
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.record_lookup(id);
        self.index.contains_key(id)
    }

    /// Whether the element exists and is checked. Missing elements read as unchecked.
    pub fn is_checked(&self, id: &str) -> bool {
        self.get(id).is_some_and(|el| el.checked)
    }

    /// Number of id lookups performed so far.
    pub fn lookups(&self) -> u64 {
        self.lookups.get()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    // User interaction

    /// Simulate a user click.
    ///
    /// Checkboxes toggle and produce a `Change`; other elements produce a
    /// `Click`. Missing or disabled elements produce nothing.
    pub fn click(&mut self, id: &str) -> Option<Event> {
        let element = self.get_mut(id)?;
        if element.disabled {
            trace!("Ignoring click on disabled element '{id}'");
            return None;
        }
        match element.kind {
            ElementKind::Checkbox => {
                element.checked = !element.checked;
                Some(Event::change(id))
            }
            _ => Some(Event::click(id)),
        }
    }

    /// Simulate the user setting a checkbox to `checked`.
    ///
    /// Produces a `Change` only when the state actually flips.
    pub fn set_checked(&mut self, id: &str, checked: bool) -> Option<Event> {
        let element = self.get_mut(id)?;
        if element.disabled || !element.is_checkbox() || element.checked == checked {
            return None;
        }
        element.checked = checked;
        Some(Event::change(id))
    }

    fn record_lookup(&self, id: &str) {
        trace!("Lookup '{id}'");
        self.lookups.set(self.lookups.get() + 1);
    }
}
