// TUI application state
//
// The root of the UI: the greeting list (the one real view), the logs
// panel, focus tracking, theme, stats, and the quit flag. All state
// changes happen here, synchronously, on the UI task; rendering reads
// the state on the next frame.

use super::components::{GreetingList, LogsPanel, Toast};
use super::input::InputHandler;
use super::theme::{Theme, ThemeKind};
use super::traits::{ComponentId, Handled, Interactive};
use crate::config::Config;
use crate::events::{SaluteEvent, SessionStats};
use crate::logging::LogBuffer;
use ratatui::layout::Rect;
use std::time::Instant;
use tokio::sync::mpsc;

/// Different views the TUI can display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Main, // Greeting list with message region and logs
    Help, // Keybinding reference
}

/// Main application state for the TUI
pub struct App {
    /// The root component: owns the salutations and the selected message
    pub greeting_list: GreetingList,

    /// System logs panel
    pub logs_panel: LogsPanel,

    /// Accumulated session statistics
    pub stats: SessionStats,

    /// Which component currently has focus
    pub focus: ComponentId,

    /// Current view being displayed
    pub view: View,

    /// Current color theme
    pub theme: Theme,
    pub theme_kind: ThemeKind,

    /// Paint the theme background, or keep the terminal's own
    pub use_theme_background: bool,

    /// Active toast notification, if any
    pub toast: Option<Toast>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// When the app started (for uptime display)
    pub start_time: Instant,

    /// Where the greeting list was last rendered (for mouse hit-testing)
    pub greetings_area: Option<Rect>,

    /// Input handler for per-key press behavior
    input: InputHandler,
}

impl App {
    pub fn new(config: &Config, log_buffer: LogBuffer, salute_tx: mpsc::Sender<SaluteEvent>) -> Self {
        let theme_kind = ThemeKind::from_name(&config.theme).unwrap_or_else(|| {
            tracing::warn!("Unknown theme {:?}, using default", config.theme);
            ThemeKind::default()
        });

        Self {
            greeting_list: GreetingList::new(config.salutations.clone(), salute_tx),
            logs_panel: LogsPanel::new(log_buffer),
            stats: SessionStats::default(),
            focus: ComponentId::Greetings,
            view: View::default(),
            theme: theme_kind.theme(),
            theme_kind,
            use_theme_background: config.use_theme_background,
            toast: None,
            should_quit: false,
            start_time: Instant::now(),
            greetings_area: None,
            input: InputHandler::for_app(),
        }
    }

    /// Deliver a received salute: update the stats and hand the payload to
    /// the greeting list. This is the only write path for the message.
    pub fn apply(&mut self, event: SaluteEvent) {
        tracing::debug!("Saluted with {:?}", event.salutation);
        self.stats.record(&event);
        self.greeting_list.on_salute(event.salutation);
    }

    /// Handle a key press - returns true if the action should fire
    pub fn press(&mut self, key: crossterm::event::KeyCode) -> bool {
        self.input.press(key)
    }

    /// Handle a key release
    pub fn release(&mut self, key: crossterm::event::KeyCode) {
        self.input.release(key);
    }

    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    pub fn toggle_help(&mut self) {
        self.view = match self.view {
            View::Main => View::Help,
            View::Help => View::Main,
        };
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next_focus();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev_focus();
    }

    /// Route a key event to the focused component
    pub fn dispatch_to_focused(&mut self, key: crossterm::event::KeyEvent) -> Handled {
        match self.focus {
            ComponentId::Greetings => self.greeting_list.handle_key(key),
            ComponentId::Logs => self.logs_panel.handle_key(key),
            _ => Handled::No,
        }
    }

    /// Status bar hint for the focused component
    pub fn focus_hint(&self) -> &'static str {
        let hint = match self.focus {
            ComponentId::Greetings => self.greeting_list.focus_hint(),
            ComponentId::Logs => self.logs_panel.focus_hint(),
            _ => None,
        };
        hint.unwrap_or("Tab:focus  t:theme  ?:help  q:quit")
    }

    /// Cycle to the next theme
    pub fn next_theme(&mut self) {
        self.theme_kind = self.theme_kind.next();
        self.theme = self.theme_kind.theme();
    }

    /// Cycle to the previous theme
    pub fn prev_theme(&mut self) {
        self.theme_kind = self.theme_kind.prev();
        self.theme = self.theme_kind.theme();
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    /// Uptime formatted as HH:MM:SS
    pub fn uptime(&self) -> String {
        let secs = self.start_time.elapsed().as_secs();
        format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
    }

    /// The current message, for the clipboard
    pub fn copy_message(&self) -> Option<String> {
        self.greeting_list.message().map(str::to_string)
    }

    /// Session stats as pretty JSON, for the clipboard
    pub fn stats_json(&self) -> Option<String> {
        serde_json::to_string_pretty(&self.stats).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> (App, mpsc::Receiver<SaluteEvent>) {
        let (tx, rx) = mpsc::channel(8);
        let app = App::new(&Config::default(), LogBuffer::new(), tx);
        (app, rx)
    }

    #[test]
    fn starts_with_no_message_and_greetings_focused() {
        let (app, _rx) = test_app();
        assert!(app.greeting_list.message().is_none());
        assert_eq!(app.focus, ComponentId::Greetings);
        assert_eq!(app.view, View::Main);
        assert_eq!(app.stats.total_salutes, 0);
    }

    #[test]
    fn apply_updates_message_and_stats() {
        let (mut app, _rx) = test_app();

        app.apply(SaluteEvent::new("Hola"));
        assert_eq!(app.greeting_list.message(), Some("Hola"));
        assert_eq!(app.stats.total_salutes, 1);

        app.apply(SaluteEvent::new("Gutentag"));
        app.apply(SaluteEvent::new("Gutentag"));
        assert_eq!(app.greeting_list.message(), Some("Gutentag"));
        assert_eq!(app.stats.total_salutes, 3);
        assert_eq!(app.stats.distinct_words(), 2);
    }

    #[test]
    fn help_toggles_back_and_forth() {
        let (mut app, _rx) = test_app();
        app.toggle_help();
        assert_eq!(app.view, View::Help);
        app.toggle_help();
        assert_eq!(app.view, View::Main);
    }

    #[test]
    fn theme_cycling_round_trips() {
        let (mut app, _rx) = test_app();
        let start = app.theme_kind;
        app.next_theme();
        assert_ne!(app.theme_kind, start);
        app.prev_theme();
        assert_eq!(app.theme_kind, start);
    }

    #[test]
    fn unknown_config_theme_falls_back_to_default() {
        let (tx, _rx) = mpsc::channel(8);
        let config = Config {
            theme: "Chartreuse".to_string(),
            ..Config::default()
        };
        let app = App::new(&config, LogBuffer::new(), tx);
        assert_eq!(app.theme_kind, ThemeKind::default());
    }

    #[test]
    fn copy_message_mirrors_the_selection() {
        let (mut app, _rx) = test_app();
        assert!(app.copy_message().is_none());

        app.apply(SaluteEvent::new("Bonjour"));
        assert_eq!(app.copy_message().as_deref(), Some("Bonjour"));
    }
}
