//! Services the launcher provides to the plugin.

use crate::models::Icon;

pub trait Host {
    /// Show a transient notification.
    fn show_msg(&mut self, title: &str, body: &str, icon: Icon);

    fn copy_to_clipboard(&mut self, text: &str) -> Result<(), String>;
}
