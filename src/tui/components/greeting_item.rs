//! Greeting item - one salutation rendered as an activatable link
//!
//! The item borrows its word from the greeting list for the duration of
//! one render cycle and owns nothing. Activation emits exactly one salute
//! notification carrying the word; nothing else happens.

use crate::events::SaluteEvent;
use crate::tui::theme::Theme;
use ratatui::text::{Line, Span};
use tokio::sync::mpsc;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// A single salutation row
#[derive(Debug, Clone, Copy)]
pub struct GreetingItem<'a> {
    salutation: &'a str,
}

impl<'a> GreetingItem<'a> {
    pub fn new(salutation: &'a str) -> Self {
        Self { salutation }
    }

    /// The label shown for this item. An empty salutation yields the
    /// degenerate ", World!" label, which is fine - the container only
    /// ever passes elements of its own list.
    pub fn label(&self) -> String {
        format!("{}, World!", self.salutation)
    }

    /// Build the display line for this item, truncated to fit `max_width`
    /// terminal columns (unicode display width, not byte length).
    pub fn to_line(&self, theme: &Theme, selected: bool, focused: bool, max_width: usize) -> Line<'static> {
        let mut label = self.label();

        if label.width() > max_width {
            // Leave one column for the ellipsis
            let target = max_width.saturating_sub(1);
            let mut used = 0;
            let mut cut = 0;
            for (i, c) in label.char_indices() {
                let w = c.width().unwrap_or(0);
                if used + w > target {
                    break;
                }
                used += w;
                cut = i + c.len_utf8();
            }
            label.truncate(cut);
            label.push('…');
        }

        let style = if selected && focused {
            theme.selected_style()
        } else {
            theme.link_style()
        };

        Line::from(Span::styled(label, style))
    }

    /// Emit the salute notification for this item: exactly one event per
    /// activation, carrying the salutation as payload.
    pub fn salute(&self, tx: &mpsc::Sender<SaluteEvent>) {
        if tx.try_send(SaluteEvent::new(self.salutation)).is_err() {
            tracing::warn!("salute channel full, dropping activation");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_salutation_comma_world() {
        assert_eq!(GreetingItem::new("Hello").label(), "Hello, World!");
        assert_eq!(GreetingItem::new("Gutentag").label(), "Gutentag, World!");
    }

    #[test]
    fn empty_salutation_renders_degenerate_label() {
        assert_eq!(GreetingItem::new("").label(), ", World!");
    }

    #[test]
    fn activation_emits_exactly_one_event() {
        let (tx, mut rx) = mpsc::channel(8);

        GreetingItem::new("Hola").salute(&tx);

        let event = rx.try_recv().expect("one salute expected");
        assert_eq!(event.salutation, "Hola");
        assert!(rx.try_recv().is_err(), "no second event expected");
    }

    #[test]
    fn repeated_activations_emit_one_event_each() {
        let (tx, mut rx) = mpsc::channel(8);
        let item = GreetingItem::new("Bonjour");

        item.salute(&tx);
        item.salute(&tx);

        assert_eq!(rx.try_recv().unwrap().salutation, "Bonjour");
        assert_eq!(rx.try_recv().unwrap().salutation, "Bonjour");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn long_labels_truncate_with_ellipsis() {
        let theme = Theme::dark();
        let line = GreetingItem::new("Hello").to_line(&theme, false, false, 8);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "Hello, …");
    }
}
