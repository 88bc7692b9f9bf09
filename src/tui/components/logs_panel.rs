//! Logs panel - scrollable view over the in-memory log buffer
//!
//! Holds a handle to the shared LogBuffer and reads a fresh snapshot each
//! frame. Follows the newest entry until the user scrolls, then stays
//! locked to the chosen position; Esc returns to follow mode.

use crate::logging::{LogBuffer, LogLevel};
use crate::tui::theme::Theme;
use crate::tui::traits::{Component, ComponentId, Handled, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub struct LogsPanel {
    buffer: LogBuffer,

    /// Top visible entry when scrolled; None = follow the newest entry
    offset: Option<usize>,
}

impl LogsPanel {
    pub fn new(buffer: LogBuffer) -> Self {
        Self {
            buffer,
            offset: None,
        }
    }

    fn scroll_up(&mut self) {
        let top = self.offset.unwrap_or_else(|| self.buffer.len());
        self.offset = Some(top.saturating_sub(1));
    }

    fn scroll_down(&mut self) {
        if let Some(top) = self.offset {
            let next = top + 1;
            if next >= self.buffer.len() {
                // Scrolled past the end: back to follow mode
                self.offset = None;
            } else {
                self.offset = Some(next);
            }
        }
    }

    fn level_color(level: LogLevel, theme: &Theme) -> Style {
        let color = match level {
            LogLevel::Error => theme.log_error,
            LogLevel::Warn => theme.log_warn,
            LogLevel::Info => theme.log_info,
            LogLevel::Debug => theme.log_debug,
            LogLevel::Trace => theme.log_trace,
        };
        Style::default().fg(color)
    }
}

impl Component for LogsPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Logs
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let focused = ctx.is_focused(self.id());
        let entries = self.buffer.entries();
        let height = area.height.saturating_sub(2) as usize;

        let start = match self.offset {
            Some(top) => top.min(entries.len()),
            None => entries.len().saturating_sub(height),
        };
        let end = (start + height).min(entries.len());

        let items: Vec<ListItem> = entries[start..end]
            .iter()
            .map(|entry| {
                let line = Line::from(vec![
                    Span::styled(
                        entry.timestamp.format("%H:%M:%S ").to_string(),
                        Style::default().fg(ctx.theme.log_trace),
                    ),
                    Span::styled(
                        format!("{:5} ", entry.level.as_str()),
                        Self::level_color(entry.level, ctx.theme),
                    ),
                    Span::styled(entry.message.clone(), ctx.theme.base_style()),
                ]);
                ListItem::new(line)
            })
            .collect();

        let title = if self.offset.is_some() {
            format!(" Logs ({}/{}) [scroll] ", start + 1, entries.len())
        } else {
            format!(" Logs ({}) ", entries.len())
        };

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(ctx.theme.border_style(focused))
                .title(title),
        );
        f.render_widget(list, area);
    }
}

impl Interactive for LogsPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_up();
                Handled::Yes
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_down();
                Handled::Yes
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.offset = Some(0);
                Handled::Yes
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.offset = None;
                Handled::Yes
            }
            KeyCode::Esc => {
                // Clear scroll lock if any, otherwise let the app handle it
                if self.offset.is_some() {
                    self.offset = None;
                    Handled::Yes
                } else {
                    Handled::No
                }
            }
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:scroll  g/G:top/end  Esc:follow")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogEntry;
    use chrono::Utc;
    use crossterm::event::KeyModifiers;

    fn panel_with_entries(count: usize) -> LogsPanel {
        let buffer = LogBuffer::new();
        for i in 0..count {
            buffer.add(LogEntry {
                timestamp: Utc::now(),
                level: LogLevel::Info,
                message: format!("entry {}", i),
            });
        }
        LogsPanel::new(buffer)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn starts_in_follow_mode() {
        let panel = panel_with_entries(5);
        assert!(panel.offset.is_none());
    }

    #[test]
    fn scrolling_up_locks_then_esc_returns_to_follow() {
        let mut panel = panel_with_entries(5);

        assert!(panel.handle_key(key(KeyCode::Up)).was_handled());
        assert_eq!(panel.offset, Some(4));

        assert!(panel.handle_key(key(KeyCode::Esc)).was_handled());
        assert!(panel.offset.is_none());

        // Nothing left to clear: Esc bubbles up
        assert_eq!(panel.handle_key(key(KeyCode::Esc)), Handled::No);
    }

    #[test]
    fn scrolling_past_the_end_resumes_following() {
        let mut panel = panel_with_entries(3);

        panel.handle_key(key(KeyCode::Home));
        assert_eq!(panel.offset, Some(0));

        for _ in 0..5 {
            panel.handle_key(key(KeyCode::Down));
        }
        assert!(panel.offset.is_none());
    }
}
