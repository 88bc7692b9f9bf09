// Status bar component
//
// Renders session statistics at the bottom: uptime, salute counts, and
// the focused panel's key hints.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let stats = &app.stats;

    let status_text = format!(
        " {} │ 👋 {} │ 🌐 {} words │ {}",
        app.uptime(),
        stats.total_salutes,
        stats.distinct_words(),
        app.focus_hint(),
    );

    let status = Paragraph::new(status_text)
        .style(app.theme.status_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.theme.border_style(false)),
        );

    f.render_widget(status, area);
}
