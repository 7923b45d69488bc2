//! CLI error types

use std::path::PathBuf;

use appspanel_lib::PanelError;

/// A script line that could not be parsed or applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {message}")]
pub struct ScriptError {
    pub line: usize,
    pub message: String,
}

impl ScriptError {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Panel(#[from] PanelError),

    #[error("invalid fixture {}: {source}", path.display())]
    Fixture {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("script error: {0}")]
    Script(#[from] ScriptError),

    #[error("unknown table '{0}'")]
    UnknownTable(String),

    #[error("failed to initialize logger: {0}")]
    Logger(String),
}

pub type Result<T, E = CliError> = std::result::Result<T, E>;
