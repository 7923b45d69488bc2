//! Yes/no confirmation before removal.

use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard};

use log::debug;
use paneldom::Document;

use super::{DeleteRequest, DeleteStrategy, Remover};

/// The user's response to a confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

impl FromStr for Answer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yes" | "y" => Ok(Answer::Yes),
            "no" | "n" => Ok(Answer::No),
            other => Err(format!("expected yes or no, got '{other}'")),
        }
    }
}

struct DialogInner {
    title: String,
    content: String,
    pending: Option<DeleteRequest>,
    remover: Box<dyn Remover>,
}

/// A confirmation dialog used as a table's delete strategy.
///
/// Executing it disables the request's buttons and shows the dialog. The
/// page later calls [`answer`](Self::answer): `Yes` hands the request to
/// the remover, `No` re-enables the buttons.
///
/// Clones share state, so one handle can be registered with the controller
/// while the page keeps another to deliver the answer.
#[derive(Clone)]
pub struct ConfirmDialog {
    inner: Arc<Mutex<DialogInner>>,
}

impl ConfirmDialog {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        remover: impl Remover + 'static,
    ) -> Self {
        Self {
            inner: Arc::new(Mutex::new(DialogInner {
                title: title.into(),
                content: content.into(),
                pending: None,
                remover: Box::new(remover),
            })),
        }
    }

    pub fn title(&self) -> String {
        self.lock().title.clone()
    }

    pub fn content(&self) -> String {
        self.lock().content.clone()
    }

    /// The dialog is visible while a request waits for an answer.
    pub fn is_visible(&self) -> bool {
        self.lock().pending.is_some()
    }

    pub fn pending(&self) -> Option<DeleteRequest> {
        self.lock().pending.clone()
    }

    /// Resolve the pending request. Returns it, or `None` if nothing was pending.
    pub fn answer(&self, answer: Answer, doc: &mut Document) -> Option<DeleteRequest> {
        let mut inner = self.lock();
        let request = inner.pending.take()?;
        debug!(
            "Confirmation for table '{}' answered {answer:?} ({} items)",
            request.table,
            request.len()
        );
        match answer {
            Answer::Yes => inner.remover.remove(&request),
            Answer::No => request.set_buttons_disabled(doc, false),
        }
        Some(request)
    }

    fn lock(&self) -> MutexGuard<'_, DialogInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl std::fmt::Debug for ConfirmDialog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("ConfirmDialog")
            .field("title", &inner.title)
            .field("pending", &inner.pending)
            .finish_non_exhaustive()
    }
}

impl DeleteStrategy for ConfirmDialog {
    fn execute(&mut self, request: DeleteRequest, doc: &mut Document) {
        request.set_buttons_disabled(doc, true);
        let mut inner = self.lock();
        if let Some(previous) = inner.pending.replace(request) {
            debug!("Replacing unanswered confirmation for table '{}'", previous.table);
        }
    }
}
