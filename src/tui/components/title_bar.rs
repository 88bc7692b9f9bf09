// Title bar component
//
// Renders the app name, with the selected message echoed as the current
// topic once one exists.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let title_text = match app.greeting_list.message() {
        Some(message) => format!(" 👋 salut ──── {}", message),
        None => " 👋 salut".to_string(),
    };

    let title = Paragraph::new(title_text)
        .style(app.theme.title_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.theme.border_style(false))
                .title_top(ratatui::text::Line::from(" ? ").right_aligned()),
        );

    f.render_widget(title, area);
}
