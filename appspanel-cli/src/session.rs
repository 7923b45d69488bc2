//! A loaded page plus the handles the CLI needs to drive it.

use std::collections::HashMap;
use std::fmt::Write as _;

use appspanel_lib::strategy::{
    Answer, ConfirmDialog, DeleteRequest, NavigationLog, Remover, UrlRemover,
};
use appspanel_lib::table::checkbox_id;
use appspanel_lib::{PanelConfig, PanelError, Page, TableName};
use log::info;
use paneldom::{Document, Element, Event};

use crate::error::{CliError, Result};
use crate::fixture::Fixture;

pub struct Session {
    page: Page,
    tables: Vec<TableName>,
    dialogs: HashMap<TableName, ConfirmDialog>,
    navigation: NavigationLog,
}

impl Session {
    /// Build the page described by `fixture`.
    ///
    /// Every removal and details URL is recorded instead of opened.
    pub fn new(fixture: Fixture, config: PanelConfig) -> Result<Self> {
        let navigation = NavigationLog::new();
        let mut page = Page::new(config.clone(), navigation.clone());
        let mut tables = Vec::with_capacity(fixture.tables.len());
        let mut dialogs = HashMap::new();

        for table in fixture.tables {
            let name = TableName::new(table.name.clone()).map_err(PanelError::from)?;
            let view = table.view()?;
            let mut remover = UrlRemover::from_config(&config, navigation.clone());

            match table.confirm {
                Some(confirm) => {
                    let dialog = ConfirmDialog::new(confirm.title, confirm.content, remover);
                    page.install_table(name.clone(), &view, &table.rows, dialog.clone())?;
                    dialogs.insert(name.clone(), dialog);
                }
                None => {
                    page.install_table(
                        name.clone(),
                        &view,
                        &table.rows,
                        move |request: DeleteRequest, _: &mut Document| remover.remove(&request),
                    )?;
                }
            }
            tables.push(name);
        }

        for permission in fixture.permissions {
            let checkbox = Element::checkbox()
                .id(permission.id)
                .checked(permission.checked);
            page.add_permission(checkbox, permission.depends_on.as_deref());
        }

        page.set_up_unload();
        info!("Session ready with {} tables", tables.len());

        Ok(Self {
            page,
            tables,
            dialogs,
            navigation,
        })
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub fn tables(&self) -> &[TableName] {
        &self.tables
    }

    /// URLs opened so far.
    pub fn navigation(&self) -> Vec<String> {
        self.navigation.urls()
    }

    pub fn table(&self, name: &str) -> Result<&TableName> {
        self.tables
            .iter()
            .find(|t| t.as_str() == name)
            .ok_or_else(|| CliError::UnknownTable(name.to_string()))
    }

    pub fn dialog(&self, table: &str) -> Result<&ConfirmDialog> {
        let table = self.table(table)?;
        self.dialogs
            .get(table)
            .ok_or_else(|| CliError::UnknownTable(format!("{table} (no confirmation)")))
    }

    /// Answer the pending confirmation of `table`. Returns the number of
    /// items the answer applied to.
    pub fn answer(&mut self, table: &str, answer: Answer) -> Result<usize> {
        let dialog = self.dialog(table)?.clone();
        Ok(dialog
            .answer(answer, self.page.document_mut())
            .map_or(0, |request| request.len()))
    }

    pub fn reset(&mut self, table: &str) -> Result<()> {
        let table = self.table(table)?.clone();
        self.page.controller_mut().reset(&table);
        Ok(())
    }

    pub fn unload(&mut self) -> Result<usize> {
        Ok(self.page.dispatch(&Event::Unload)?)
    }

    /// Human-readable summary of the page state.
    pub fn report(&mut self) -> String {
        let mut out = String::new();
        for table in self.tables.clone() {
            let selected = self.page.selected_items(&table);
            let doc = self.page.document();
            let master = doc.is_checked(&checkbox_id(&table, None));
            let enabled = self
                .page
                .controller()
                .delete_button_ids(&table)
                .iter()
                .filter(|id| doc.get(id).is_some_and(|b| !b.disabled))
                .count();
            let rows = self.page.controller().items(&table).map_or(0, <[_]>::len);

            let _ = writeln!(out, "table {table}: {rows} rows");
            let selected: Vec<&str> = selected.iter().map(|i| i.as_str()).collect();
            let _ = writeln!(out, "  selected: [{}]", selected.join(", "));
            let _ = writeln!(out, "  select all: {}", if master { "checked" } else { "unchecked" });
            let _ = writeln!(out, "  delete buttons enabled: {enabled}");
            if let Some(pending) = self.dialogs.get(&table).and_then(ConfirmDialog::pending) {
                let _ = writeln!(out, "  awaiting confirmation: {}", pending.target);
            }
        }

        for url in self.navigation.urls() {
            let _ = writeln!(out, "opened {url}");
        }
        let _ = writeln!(out, "listeners: {}", self.page.listeners().len());
        out
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("page", &self.page)
            .field("tables", &self.tables)
            .finish_non_exhaustive()
    }
}
