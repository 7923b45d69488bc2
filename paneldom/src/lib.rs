pub mod document;
pub mod element;
pub mod event;
pub mod listeners;

pub use document::Document;
pub use element::{Element, ElementKind};
pub use event::{Event, EventType};
pub use listeners::{ListenerKey, Listeners};
