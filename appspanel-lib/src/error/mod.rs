//! Error types

mod address;
mod panel;

pub use address::*;
pub use panel::*;
