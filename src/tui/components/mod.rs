// Components module - the UI building blocks
//
// - Greeting item: one salutation rendered as an activatable link
// - Greeting list: the container owning the words and the message
// - Logs panel: system log entries from the capture buffer
// - Title bar / status bar: shell chrome rendered in every view
// - Toast: transient feedback overlay

pub mod greeting_item;
pub mod greeting_list;
pub mod logs_panel;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use greeting_list::GreetingList;
pub use logs_panel::LogsPanel;
pub use toast::Toast;
