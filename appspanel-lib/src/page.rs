//! Page wiring.
//!
//! A [`Page`] owns the document, the table controller and the listener
//! registry of one loaded screen. Events are routed to controller handlers
//! through the listeners installed at setup; unloading the page detaches
//! every listener.

use log::{debug, info, warn};
use paneldom::{Document, Element, Event, EventType, ListenerKey, Listeners};
use serde_json::Value;

use crate::config::PanelConfig;
use crate::error::{PanelError, Result};
use crate::format::format_template;
use crate::permissions::PermissionGroup;
use crate::strategy::{DeleteStrategy, Navigator};
use crate::table::{ItemId, RowKey, TableController, TableName, checkbox_id};
use crate::view::TableView;

/// What a listener does when its event fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Master checkbox changed.
    SelectAll,
    /// Row checkbox changed.
    SelectRow,
    /// Bulk-delete button clicked.
    Delete,
    /// Row clicked: open the item's detail page.
    ShowDetails(ItemId),
    /// Permission checkbox changed.
    Permission,
    /// Page is going away: detach all listeners.
    Unload,
}

pub struct Page {
    document: Document,
    controller: TableController,
    permissions: PermissionGroup,
    listeners: Listeners<Action>,
    navigator: Box<dyn Navigator>,
}

impl Page {
    pub fn new(config: PanelConfig, navigator: impl Navigator + 'static) -> Self {
        Self {
            document: Document::new(),
            controller: TableController::new(config),
            permissions: PermissionGroup::new(),
            listeners: Listeners::new(),
            navigator: Box::new(navigator),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn controller(&self) -> &TableController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut TableController {
        &mut self.controller
    }

    pub fn listeners(&self) -> &Listeners<Action> {
        &self.listeners
    }

    // -------------------------------------------------------------------------
    // Setup
    // -------------------------------------------------------------------------

    /// Render a table into the document, register its items and delete
    /// strategy, and attach its listeners.
    ///
    /// Records are sorted by the view first. Returns the number of rows.
    /// A table name can only be installed once per page.
    pub fn install_table(
        &mut self,
        table: TableName,
        view: &TableView,
        records: &[Value],
        strategy: impl DeleteStrategy + 'static,
    ) -> Result<usize> {
        if self.controller.is_registered(&table) {
            return Err(PanelError::DuplicateTable(table));
        }

        let mut records = records.to_vec();
        view.sort(&mut records);
        let rendered = view.generate(&records, &table, self.controller.config());

        self.document.extend(rendered.elements);
        self.listeners
            .listen(checkbox_id(&table, None), EventType::Change, Action::SelectAll);
        for (index, item) in rendered.items.iter().enumerate() {
            let key = RowKey::new(table.clone(), index);
            self.listeners
                .listen(key.checkbox_id(), EventType::Change, Action::SelectRow);
            self.listeners.listen(
                key.row_id(),
                EventType::Click,
                Action::ShowDetails(item.clone()),
            );
        }
        for id in self.controller.delete_button_ids(&table) {
            self.listeners.listen(id, EventType::Click, Action::Delete);
        }

        let rows = rendered.items.len();
        info!("Installed table '{table}' with {rows} rows");
        self.controller.register(table, rendered.items, strategy);
        Ok(rows)
    }

    /// Add a permission checkbox, optionally depending on another one.
    pub fn add_permission(&mut self, checkbox: Element, depends_on: Option<&str>) {
        let id = checkbox.id.clone();
        self.document.append(checkbox);
        self.permissions.register(&mut self.document, &id, depends_on);
        self.listeners.listen(id, EventType::Change, Action::Permission);
    }

    /// Detach every listener when the page unloads.
    pub fn set_up_unload(&mut self) -> ListenerKey {
        self.listeners.listen_window(EventType::Unload, Action::Unload)
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Click an element as a user would, then dispatch the resulting event.
    pub fn click(&mut self, id: &str) -> Result<usize> {
        match self.document.click(id) {
            Some(event) => self.dispatch(&event),
            None => Ok(0),
        }
    }

    /// Set a checkbox as a user would, then dispatch the resulting event.
    pub fn set_checked(&mut self, id: &str, checked: bool) -> Result<usize> {
        match self.document.set_checked(id, checked) {
            Some(event) => self.dispatch(&event),
            None => Ok(0),
        }
    }

    /// Bind an extra action to events of `event_type` on element `target`.
    pub fn listen(
        &mut self,
        target: impl Into<String>,
        event_type: EventType,
        action: Action,
    ) -> ListenerKey {
        self.listeners.listen(target, event_type, action)
    }

    /// Run every action bound to `event`, in registration order.
    ///
    /// A failing action does not stop the ones after it; the first error is
    /// returned once all have run. Otherwise returns how many actions ran.
    pub fn dispatch(&mut self, event: &Event) -> Result<usize> {
        let actions = self.listeners.matching(event);
        let target = event.target().unwrap_or_default();
        let mut first_error = None;
        for action in &actions {
            debug!("{action:?} <- {event:?}");
            if let Err(e) = self.run(action, target) {
                warn!("{action:?} failed on {event:?}: {e}");
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(actions.len()),
        }
    }

    fn run(&mut self, action: &Action, target: &str) -> Result<()> {
        match action {
            Action::SelectAll => {
                self.controller.on_select_all(&mut self.document, target)?;
            }
            Action::SelectRow => {
                self.controller.on_select_row(&mut self.document, target)?;
            }
            Action::Delete => {
                self.controller.on_delete_clicked(&mut self.document, target)?;
            }
            Action::ShowDetails(item) => {
                self.show_details(item);
            }
            Action::Permission => self.permissions.on_change(&mut self.document, target),
            Action::Unload => {
                self.listeners.remove_all();
            }
        }
        Ok(())
    }

    /// Items currently selected in `table`, in row order.
    pub fn selected_items(&mut self, table: &TableName) -> Vec<ItemId> {
        self.controller.selected_items(&self.document, table)
    }

    /// Open the detail page of `item`. Returns the URL opened.
    pub fn show_details(&mut self, item: &ItemId) -> String {
        let url = format_template(&self.controller.config().details_template, &[item.as_str()]);
        self.navigator.open(&url);
        url
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("elements", &self.document.len())
            .field("controller", &self.controller)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
