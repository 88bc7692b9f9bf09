//! Greeting list - the container component
//!
//! Owns the salutation list (fixed after construction, only ever iterated)
//! and the selected message. Renders one greeting item per word, in list
//! order, with the message region below. The only write path for the
//! message is `on_salute`, so whenever it is set it equals some element
//! of the list.

use super::greeting_item::GreetingItem;
use crate::events::SaluteEvent;
use crate::tui::traits::{Component, ComponentId, Handled, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use tokio::sync::mpsc;

/// Height of the message region (one line plus borders)
const MESSAGE_HEIGHT: u16 = 3;

pub struct GreetingList {
    /// The salutation words, in display order. Never mutated.
    salutations: Vec<String>,

    /// The selected message. None until the first salute arrives.
    message: Option<String>,

    /// Currently highlighted row
    selected: usize,

    /// Output channel: items send their salute notifications here
    tx: mpsc::Sender<SaluteEvent>,
}

impl GreetingList {
    pub fn new(salutations: Vec<String>, tx: mpsc::Sender<SaluteEvent>) -> Self {
        Self {
            salutations,
            message: None,
            selected: 0,
            tx,
        }
    }

    pub fn salutations(&self) -> &[String] {
        &self.salutations
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The salute handler: a plain assignment, no validation,
    /// last-write-wins.
    pub fn on_salute(&mut self, salutation: String) {
        self.message = Some(salutation);
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.salutations.len() {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.salutations.len().saturating_sub(1);
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Activate the highlighted row: the item emits its salute
    fn activate_selected(&self) {
        if let Some(word) = self.salutations.get(self.selected) {
            GreetingItem::new(word).salute(&self.tx);
        }
    }

    /// Resolve a mouse click inside `area` to an item row and activate it.
    /// Returns true if a row was activated.
    pub fn hit(&mut self, area: Rect, column: u16, row: u16) -> bool {
        let (list_area, _) = Self::split(area);

        // Inside the list block, past the borders
        let inner_x = list_area.x + 1..list_area.x + list_area.width.saturating_sub(1);
        let inner_y = list_area.y + 1..list_area.y + list_area.height.saturating_sub(1);
        if !inner_x.contains(&column) || !inner_y.contains(&row) {
            return false;
        }

        let idx = (row - list_area.y - 1) as usize;
        if idx >= self.salutations.len() {
            return false;
        }

        self.selected = idx;
        self.activate_selected();
        true
    }

    /// Vertical split: item rows on top, message region below
    fn split(area: Rect) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(MESSAGE_HEIGHT)])
            .split(area);
        (chunks[0], chunks[1])
    }
}

impl Component for GreetingList {
    fn id(&self) -> ComponentId {
        ComponentId::Greetings
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let focused = ctx.is_focused(self.id());
        let (list_area, message_area) = Self::split(area);

        let content_width = list_area.width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = self
            .salutations
            .iter()
            .enumerate()
            .map(|(idx, word)| {
                let line = GreetingItem::new(word).to_line(
                    ctx.theme,
                    idx == self.selected,
                    focused,
                    content_width,
                );
                ListItem::new(line)
            })
            .collect();

        let title = format!(" Greetings ({}) ", self.salutations.len());
        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(ctx.theme.border_style(focused))
                .title(title),
        );
        f.render_widget(list, list_area);

        // Message region: empty until the first salute arrives
        let message = Paragraph::new(self.message.as_deref().unwrap_or(""))
            .style(ctx.theme.message_style())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(ctx.theme.border_style(false))
                    .title(" Message "),
            );
        f.render_widget(message, message_area);
    }
}

impl Interactive for GreetingList {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                Handled::Yes
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Handled::Yes
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.select_first();
                Handled::Yes
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.select_last();
                Handled::Yes
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.activate_selected();
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:select  Enter/Space:salute  y:copy message")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn default_words() -> Vec<String> {
        ["Hello", "Hola", "Bonjour", "Gutentag"]
            .iter()
            .map(|w| w.to_string())
            .collect()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn message_starts_absent() {
        let (tx, _rx) = mpsc::channel(8);
        let list = GreetingList::new(default_words(), tx);
        assert!(list.message().is_none());
        assert_eq!(list.selected(), 0);
    }

    #[test]
    fn salute_handler_is_last_write_wins() {
        let (tx, _rx) = mpsc::channel(8);
        let mut list = GreetingList::new(default_words(), tx);

        list.on_salute("Hola".to_string());
        assert_eq!(list.message(), Some("Hola"));

        list.on_salute("Gutentag".to_string());
        assert_eq!(list.message(), Some("Gutentag"));

        // Repeating the same word leaves the message unchanged
        list.on_salute("Gutentag".to_string());
        assert_eq!(list.message(), Some("Gutentag"));
    }

    #[test]
    fn activation_round_trips_through_the_channel() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut list = GreetingList::new(default_words(), tx);

        // Click item 1, then item 3, then item 3 again
        for idx in [1, 3, 3] {
            list.select_first();
            for _ in 0..idx {
                list.select_next();
            }
            assert!(list.handle_key(key(KeyCode::Enter)).was_handled());

            let event = rx.try_recv().expect("one salute per activation");
            list.on_salute(event.salutation);
        }

        assert_eq!(list.message(), Some("Gutentag"));
        assert!(rx.try_recv().is_err(), "exactly one event per activation");
    }

    #[test]
    fn message_only_ever_holds_list_elements() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut list = GreetingList::new(default_words(), tx);

        for _ in 0..default_words().len() {
            assert!(list.handle_key(key(KeyCode::Char(' '))).was_handled());
            let event = rx.try_recv().unwrap();
            assert!(list.salutations().contains(&event.salutation));
            list.on_salute(event.salutation);
            list.select_next();
        }
    }

    #[test]
    fn selection_clamps_at_both_ends() {
        let (tx, _rx) = mpsc::channel(8);
        let mut list = GreetingList::new(default_words(), tx);

        list.select_prev();
        assert_eq!(list.selected(), 0);

        for _ in 0..10 {
            list.select_next();
        }
        assert_eq!(list.selected(), 3);

        list.select_first();
        assert_eq!(list.selected(), 0);
        list.select_last();
        assert_eq!(list.selected(), 3);
    }

    #[test]
    fn empty_list_never_emits() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut list = GreetingList::new(Vec::new(), tx);

        assert!(list.handle_key(key(KeyCode::Enter)).was_handled());
        assert!(rx.try_recv().is_err());
        assert!(list.message().is_none());
    }

    #[test]
    fn click_activates_the_clicked_row() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut list = GreetingList::new(default_words(), tx);
        let area = Rect::new(0, 0, 30, 12);

        // Row 0 sits just inside the list border at y = 1
        assert!(list.hit(area, 5, 1 + 2));
        assert_eq!(rx.try_recv().unwrap().salutation, "Bonjour");
        assert_eq!(list.selected(), 2);

        // The border itself is not a row
        assert!(!list.hit(area, 5, 0));
        // Below the last item: inside the block but no row there
        assert!(!list.hit(area, 5, 1 + 6));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn unhandled_keys_bubble_up() {
        let (tx, _rx) = mpsc::channel(8);
        let mut list = GreetingList::new(default_words(), tx);
        assert_eq!(list.handle_key(key(KeyCode::Char('x'))), Handled::No);
        assert_eq!(list.handle_key(key(KeyCode::Esc)), Handled::No);
    }
}
