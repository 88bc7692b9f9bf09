//! Interactive trait for components that handle keyboard input
//!
//! The app routes key events to the focused component. The component
//! decides whether to consume them or let them bubble up.

use super::Component;
use crossterm::event::KeyEvent;

/// Result of handling a key event
///
/// Tells the app whether the component consumed the event or
/// if it should bubble up for global handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed by the component
    Yes,
    /// Event was not handled, should bubble up
    No,
}

impl Handled {
    pub fn was_handled(self) -> bool {
        self == Self::Yes
    }
}

impl From<bool> for Handled {
    fn from(handled: bool) -> Self {
        if handled {
            Self::Yes
        } else {
            Self::No
        }
    }
}

/// Trait for components that handle keyboard input
///
/// Event flow:
///
/// ```text
/// KeyEvent
///    │
///    ▼
/// App (global handlers: q, ?, t, y, Tab)
///    │
///    │ if not handled
///    ▼
/// Focused Component (via Interactive trait)
///    │
///    │ returns Handled::Yes or Handled::No
///    ▼
/// App (fallback handlers)
/// ```
pub trait Interactive: Component {
    /// Handle a key event
    ///
    /// Returns `Handled::Yes` if the component consumed the event,
    /// `Handled::No` if it should bubble up to the app.
    fn handle_key(&mut self, key: KeyEvent) -> Handled;

    /// Whether this component can receive focus
    fn focusable(&self) -> bool {
        true
    }

    /// Hint text for the status bar when this component is focused
    fn focus_hint(&self) -> Option<&'static str> {
        None
    }
}
