// Frame composition - called on every draw
//
// Shell layout, top to bottom: title bar, greeting list (with its message
// region), logs panel, status bar. The help view replaces the content
// rows; the toast overlays everything.

use super::app::{App, View};
use super::components::{status_bar, title_bar};
use super::traits::{Component, RenderContext};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &mut App) {
    // Theme background across the whole frame (respects the config toggle)
    if app.use_theme_background {
        let bg = Block::default().style(Style::default().bg(app.theme.bg));
        f.render_widget(bg, f.area());
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(8),    // Greeting list + message region
            Constraint::Length(8), // Logs panel
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Record where the greeting list lands for mouse hit-testing
    app.greetings_area = if app.view == View::Main {
        Some(chunks[1])
    } else {
        None
    };

    title_bar::render(f, chunks[0], app);

    match app.view {
        View::Main => {
            let ctx = RenderContext::new(&app.theme, app.focus);
            app.greeting_list.render(f, chunks[1], &ctx);
            app.logs_panel.render(f, chunks[2], &ctx);
        }
        View::Help => {
            render_help(f, chunks[1].union(chunks[2]), app);
        }
    }

    status_bar::render(f, chunks[3], app);

    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }
    app.clear_expired_toast();
}

fn render_help(f: &mut Frame, area: Rect, app: &App) {
    let lines = [
        "",
        "  ↑/↓, j/k      select a salutation",
        "  Enter, Space  salute with the selected word",
        "  click         salute with the clicked word",
        "  g/G           jump to first/last",
        "  Tab           switch focus (greetings ↔ logs)",
        "  t/T           next/previous theme",
        "  y             copy the current message",
        "  Y             copy session stats as JSON",
        "  ?             toggle this help",
        "  q             quit",
    ];

    let help = Paragraph::new(lines.join("\n"))
        .style(app.theme.base_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.theme.border_style(true))
                .title(format!(" Help ── theme: {} ", app.theme_kind.name())),
        );

    f.render_widget(help, area);
}
