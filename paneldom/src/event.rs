/// Event categories listeners subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Change,
    Click,
    Unload,
}

/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A checkbox's checked state changed (the new state is already applied)
    Change { target: String },
    /// An element was activated
    Click { target: String },
    /// The page is going away; window-level, no target
    Unload,
}

impl Event {
    pub fn change(target: impl Into<String>) -> Self {
        Event::Change {
            target: target.into(),
        }
    }

    pub fn click(target: impl Into<String>) -> Self {
        Event::Click {
            target: target.into(),
        }
    }

    pub fn event_type(&self) -> EventType {
        match self {
            Event::Change { .. } => EventType::Change,
            Event::Click { .. } => EventType::Click,
            Event::Unload => EventType::Unload,
        }
    }

    /// Id of the element the event is aimed at, `None` for window events.
    pub fn target(&self) -> Option<&str> {
        match self {
            Event::Change { target } | Event::Click { target } => Some(target),
            Event::Unload => None,
        }
    }
}
