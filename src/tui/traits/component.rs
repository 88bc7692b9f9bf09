//! Core component trait - the foundation of the UI system
//!
//! Every UI element that can be rendered implements `Component`.
//! This trait provides identity and rendering capability.

use crate::tui::theme::Theme;
use ratatui::{layout::Rect, Frame};

/// Unique identifier for a component
///
/// Used for:
/// - Focus tracking (which component receives input)
/// - Event routing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    /// The greeting list (salutation rows + message region)
    Greetings,
    /// System logs panel
    Logs,
    /// Title bar (non-focusable)
    TitleBar,
    /// Status bar (non-focusable)
    StatusBar,
    /// Toast notification (non-focusable)
    Toast,
}

impl ComponentId {
    /// Whether this component can receive focus
    pub fn is_focusable(&self) -> bool {
        matches!(self, ComponentId::Greetings | ComponentId::Logs)
    }

    /// Cycle to next focusable component (Tab behavior)
    pub fn next_focus(self) -> Self {
        match self {
            Self::Greetings => Self::Logs,
            Self::Logs => Self::Greetings,
            other => other, // Non-focusable stays put
        }
    }

    /// Cycle to previous focusable component (Shift+Tab behavior)
    pub fn prev_focus(self) -> Self {
        // Two focusable components, so the cycle is its own inverse
        self.next_focus()
    }
}

/// Immutable context passed to components during rendering
///
/// Components only see what they need during a render - no access to
/// mutable app state, so rendering stays a pure function of state.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    /// Color theme for styling
    pub theme: &'a Theme,

    /// Which component currently has focus
    pub focus: ComponentId,
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a Theme, focus: ComponentId) -> Self {
        Self { theme, focus }
    }

    /// Check if a component is currently focused
    pub fn is_focused(&self, id: ComponentId) -> bool {
        self.focus == id
    }
}

/// Base trait for all UI components
///
/// A component is anything that can render itself to the terminal.
/// Components that take input also implement `Interactive`.
pub trait Component {
    /// Unique identifier for this component
    fn id(&self) -> ComponentId;

    /// Render the component to the given area
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycle_visits_only_focusable_ids() {
        let mut id = ComponentId::Greetings;
        for _ in 0..4 {
            id = id.next_focus();
            assert!(id.is_focusable());
        }
        // Two focusable components: next twice is identity
        assert_eq!(
            ComponentId::Greetings.next_focus().next_focus(),
            ComponentId::Greetings
        );
    }

    #[test]
    fn non_focusable_ids_stay_put() {
        assert_eq!(ComponentId::TitleBar.next_focus(), ComponentId::TitleBar);
        assert_eq!(ComponentId::StatusBar.prev_focus(), ComponentId::StatusBar);
        assert!(!ComponentId::Toast.is_focusable());
    }
}
