// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup (the mount/unmount of the root view)
// - Event loop (keyboard and mouse input, timer ticks, salute events)
// - Rendering the UI

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod theme;
pub mod traits;
pub mod ui;

use crate::config::Config;
use crate::events::SaluteEvent;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::{App, View};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the TUI
///
/// Mounts the greeting list as the root view: sets up the terminal, runs
/// the event loop, and restores the terminal when done.
pub async fn run_tui(
    config: Config,
    log_buffer: LogBuffer,
    salute_tx: mpsc::Sender<SaluteEvent>,
    mut salute_rx: mpsc::Receiver<SaluteEvent>,
) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(&config, log_buffer, salute_tx);
    tracing::info!(
        "Mounted greeting list with {} salutations",
        app.greeting_list.salutations().len()
    );

    let result = run_event_loop(&mut terminal, &mut app, &mut salute_rx).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Multiplexes three event sources with tokio::select!:
/// 1. Keyboard and mouse input
/// 2. Timer ticks (periodic redraws)
/// 3. Salute notifications from greeting items
///
/// State mutation happens inline in the loop; the next draw reflects it.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    salute_rx: &mut mpsc::Receiver<SaluteEvent>,
) -> Result<()> {
    // Periodic redraws (5 FPS keeps the uptime and log tail fresh)
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            // Periodic tick for redrawing
            _ = tick_interval.tick() => {}

            // A greeting item was activated: deliver the salute
            Some(salute) = salute_rx.recv() => {
                app.apply(salute);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Global → Focused component → Fallback
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if handle_global_keys(app, &key_event) {
        return;
    }

    match key_event.kind {
        KeyEventKind::Press => {
            if !app.press(key_event.code) {
                return;
            }

            match key_event.code {
                KeyCode::Tab => app.focus_next(),
                KeyCode::BackTab => app.focus_prev(),
                KeyCode::Esc => {
                    // In help, Esc returns to the main view; otherwise the
                    // focused panel gets a chance to clear its own state
                    if app.view == View::Help {
                        app.set_view(View::Main);
                    } else {
                        app.dispatch_to_focused(key_event);
                    }
                }
                _ => {
                    if app.view == View::Main {
                        app.dispatch_to_focused(key_event);
                    }
                }
            }
        }
        KeyEventKind::Release => {
            app.release(key_event.code);
        }
        _ => {}
    }
}

/// Handle mouse input
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    match mouse_event.kind {
        // A click on a greeting row activates that item
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(area) = app.greetings_area {
                app.greeting_list
                    .hit(area, mouse_event.column, mouse_event.row);
            }
        }
        // Scroll wheel moves the focused panel's selection
        MouseEventKind::ScrollUp => {
            let key_event = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
            app.dispatch_to_focused(key_event);
        }
        MouseEventKind::ScrollDown => {
            let key_event = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
            app.dispatch_to_focused(key_event);
        }
        _ => {}
    }
}

/// Handle global keys - returns true if handled
/// Global keys work the same regardless of current view
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    if key_event.kind != KeyEventKind::Press {
        return false;
    }

    let key = key_event.code;

    match key {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            if app.press(key) {
                app.should_quit = true;
            }
            true
        }
        // Help
        KeyCode::Char('?') => {
            if app.press(key) {
                app.toggle_help();
            }
            true
        }
        // Theme cycling
        KeyCode::Char('t') => {
            if app.press(key) {
                app.next_theme();
                app.show_toast(format!("Theme: {}", app.theme_kind.name()));
            }
            true
        }
        KeyCode::Char('T') => {
            if app.press(key) {
                app.prev_theme();
                app.show_toast(format!("Theme: {}", app.theme_kind.name()));
            }
            true
        }
        // Copy to clipboard: y = message text, Y = stats JSON
        KeyCode::Char('y') => {
            if app.press(key) {
                if let Some(text) = app.copy_message() {
                    if clipboard::copy_to_clipboard(&text).is_ok() {
                        app.show_toast("✓ Copied to clipboard");
                    } else {
                        app.show_toast("✗ Failed to copy");
                    }
                }
            }
            true
        }
        KeyCode::Char('Y') => {
            if app.press(key) {
                if let Some(json) = app.stats_json() {
                    if clipboard::copy_to_clipboard(&json).is_ok() {
                        app.show_toast("✓ Copied stats to clipboard");
                    } else {
                        app.show_toast("✗ Failed to copy");
                    }
                }
            }
            true
        }
        _ => false,
    }
}
