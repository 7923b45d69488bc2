//! Issuing confirmed removals.

use std::sync::{Arc, Mutex};

use log::info;

use super::DeleteRequest;
use crate::config::{PanelConfig, RemovalMode};
use crate::format::format_template;

/// Opens a URL in the current window.
pub trait Navigator: Send {
    fn open(&mut self, url: &str);
}

/// Navigator that records every URL it is asked to open.
///
/// Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct NavigationLog {
    urls: Arc<Mutex<Vec<String>>>,
}

impl NavigationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// URLs opened so far, oldest first.
    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Drain the recorded URLs.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.urls.lock().unwrap_or_else(|e| e.into_inner()))
    }
}

impl Navigator for NavigationLog {
    fn open(&mut self, url: &str) {
        info!("Navigating to {url}");
        self.urls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(url.to_string());
    }
}

/// Carries out a confirmed removal.
pub trait Remover: Send {
    fn remove(&mut self, request: &DeleteRequest);
}

/// Removes by opening removal URLs built from a template.
#[derive(Debug, Clone)]
pub struct UrlRemover<N> {
    template: String,
    mode: RemovalMode,
    navigator: N,
}

impl<N: Navigator> UrlRemover<N> {
    pub fn new(template: impl Into<String>, mode: RemovalMode, navigator: N) -> Self {
        Self {
            template: template.into(),
            mode,
            navigator,
        }
    }

    pub fn from_config(config: &PanelConfig, navigator: N) -> Self {
        Self::new(config.remove_template.clone(), config.removal_mode, navigator)
    }

    /// URLs a request resolves to. Empty selections resolve to nothing.
    pub fn urls_for(&self, request: &DeleteRequest) -> Vec<String> {
        if request.is_empty() {
            return Vec::new();
        }
        match self.mode {
            RemovalMode::Joined => vec![format_template(&self.template, &[request.target.as_str()])],
            RemovalMode::PerItem => request
                .selection
                .iter()
                .map(|item| format_template(&self.template, &[item.as_str()]))
                .collect(),
        }
    }
}

impl<N: Navigator> Remover for UrlRemover<N> {
    fn remove(&mut self, request: &DeleteRequest) {
        for url in self.urls_for(request) {
            self.navigator.open(&url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{ItemId, TableName};

    fn request(items: &[&str]) -> DeleteRequest {
        DeleteRequest::new(
            TableName::new("users").unwrap(),
            items.iter().map(|&i| ItemId::from(i)).collect(),
            Vec::new(),
        )
    }

    #[test]
    fn test_joined_mode_opens_one_url() {
        let log = NavigationLog::new();
        let mut remover = UrlRemover::new("{0}/remove/", RemovalMode::Joined, log.clone());

        remover.remove(&request(&["u1", "u3"]));

        assert_eq!(log.urls(), vec!["u1/u3/remove/"]);
    }

    #[test]
    fn test_per_item_mode_opens_url_per_item() {
        let log = NavigationLog::new();
        let mut remover = UrlRemover::new("{0}/remove/", RemovalMode::PerItem, log.clone());

        remover.remove(&request(&["u1", "u3"]));

        assert_eq!(log.take(), vec!["u1/remove/", "u3/remove/"]);
        assert!(log.urls().is_empty());
    }

    #[test]
    fn test_empty_selection_opens_nothing() {
        let log = NavigationLog::new();
        let mut remover = UrlRemover::from_config(&PanelConfig::default(), log.clone());

        remover.remove(&request(&[]));

        assert!(log.urls().is_empty());
    }
}
