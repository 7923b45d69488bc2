//! Command-line driver for the table selection controller.
//!
//! Loads a page fixture, replays an interaction script against it and
//! reports the resulting state.

pub mod error;
pub mod fixture;
pub mod paths;
pub mod script;
pub mod session;

pub use error::{CliError, Result, ScriptError};
pub use fixture::Fixture;
pub use session::Session;
