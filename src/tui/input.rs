// Input handling with per-key behaviors
//
// Two kinds of keys:
// - Once: fire on the press transition only, with a debounce fallback for
//   terminals that never send release events
// - Repeat: fire on press, then again at an interval once the initial
//   delay has passed (hold-to-repeat for navigation)

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Debounce window for Once keys on terminals without release events
const ONCE_DEBOUNCE: Duration = Duration::from_millis(150);

/// How a key behaves while held
#[derive(Debug, Clone, Copy)]
pub enum KeyBehavior {
    /// Fire once per press (Enter, Esc, q, ...)
    Once,

    /// Fire on press, then repeat after the initial delay
    Repeat {
        initial_delay: Duration,
        repeat_interval: Duration,
    },
}

impl KeyBehavior {
    /// Standard navigation repeat (arrow keys, j/k)
    pub fn navigation() -> Self {
        Self::Repeat {
            initial_delay: Duration::from_millis(500),
            repeat_interval: Duration::from_millis(50),
        }
    }

    /// Faster repeat for page jumps
    pub fn paging() -> Self {
        Self::Repeat {
            initial_delay: Duration::from_millis(300),
            repeat_interval: Duration::from_millis(30),
        }
    }
}

/// Live state of one pressed key
#[derive(Debug)]
struct Pressed {
    since: Instant,
    last_fired: Instant,
}

/// Tracks pressed keys and decides when a press should fire
pub struct InputHandler {
    behaviors: HashMap<KeyCode, KeyBehavior>,
    pressed: HashMap<KeyCode, Pressed>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            behaviors: HashMap::new(),
            pressed: HashMap::new(),
        }
    }

    pub fn bind(&mut self, key: KeyCode, behavior: KeyBehavior) {
        self.behaviors.insert(key, behavior);
    }

    pub fn bind_all(&mut self, keys: &[KeyCode], behavior: KeyBehavior) {
        for key in keys {
            self.bind(*key, behavior);
        }
    }

    /// Record a press event. Returns true if the action should fire now.
    pub fn press(&mut self, key: KeyCode) -> bool {
        let now = Instant::now();
        let behavior = self.behaviors.get(&key).copied().unwrap_or(KeyBehavior::Once);

        match self.pressed.get_mut(&key) {
            // Key already held: fire only if the behavior's timing allows
            Some(state) => match behavior {
                KeyBehavior::Once => {
                    if now.duration_since(state.last_fired) >= ONCE_DEBOUNCE {
                        state.last_fired = now;
                        true
                    } else {
                        false
                    }
                }
                KeyBehavior::Repeat {
                    initial_delay,
                    repeat_interval,
                } => {
                    let held = now.duration_since(state.since);
                    let idle = now.duration_since(state.last_fired);
                    if held >= initial_delay && idle >= repeat_interval {
                        state.last_fired = now;
                        true
                    } else {
                        false
                    }
                }
            },
            // Fresh press always fires
            None => {
                self.pressed.insert(
                    key,
                    Pressed {
                        since: now,
                        last_fired: now,
                    },
                );
                true
            }
        }
    }

    /// Record a release event
    pub fn release(&mut self, key: KeyCode) {
        self.pressed.remove(&key);
    }

    /// Handler preconfigured with this app's key bindings
    pub fn for_app() -> Self {
        let mut handler = Self::new();

        // Navigation - hold to repeat
        handler.bind_all(
            &[
                KeyCode::Up,
                KeyCode::Down,
                KeyCode::Char('j'),
                KeyCode::Char('k'),
            ],
            KeyBehavior::navigation(),
        );

        // Page jumps - faster repeat
        handler.bind_all(
            &[
                KeyCode::PageUp,
                KeyCode::PageDown,
                KeyCode::Home,
                KeyCode::End,
            ],
            KeyBehavior::paging(),
        );

        // Action keys - once per press
        handler.bind_all(
            &[
                KeyCode::Enter,
                KeyCode::Esc,
                KeyCode::Tab,
                KeyCode::BackTab,
                KeyCode::Char(' '),
                // Quit
                KeyCode::Char('q'),
                KeyCode::Char('Q'),
                // Theme cycling
                KeyCode::Char('t'),
                KeyCode::Char('T'),
                // Clipboard
                KeyCode::Char('y'),
                KeyCode::Char('Y'),
                // List jumps
                KeyCode::Char('g'),
                KeyCode::Char('G'),
                // Help
                KeyCode::Char('?'),
            ],
            KeyBehavior::Once,
        );

        handler
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::for_app()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn once_keys_fire_on_press_transition_only() {
        let mut handler = InputHandler::new();
        handler.bind(KeyCode::Enter, KeyBehavior::Once);

        assert!(handler.press(KeyCode::Enter));
        // Held: no further fires inside the debounce window
        assert!(!handler.press(KeyCode::Enter));
        assert!(!handler.press(KeyCode::Enter));

        handler.release(KeyCode::Enter);
        assert!(handler.press(KeyCode::Enter));
    }

    #[test]
    fn repeat_keys_honor_delay_then_interval() {
        let mut handler = InputHandler::new();
        handler.bind(
            KeyCode::Down,
            KeyBehavior::Repeat {
                initial_delay: Duration::from_millis(100),
                repeat_interval: Duration::from_millis(50),
            },
        );

        // First press fires immediately
        assert!(handler.press(KeyCode::Down));
        // Within the initial delay: quiet
        assert!(!handler.press(KeyCode::Down));

        thread::sleep(Duration::from_millis(110));
        assert!(handler.press(KeyCode::Down));

        // Within the repeat interval: quiet again
        assert!(!handler.press(KeyCode::Down));
        thread::sleep(Duration::from_millis(60));
        assert!(handler.press(KeyCode::Down));
    }

    #[test]
    fn unbound_keys_default_to_once() {
        let mut handler = InputHandler::new();
        assert!(handler.press(KeyCode::Char('x')));
        assert!(!handler.press(KeyCode::Char('x')));
    }
}
