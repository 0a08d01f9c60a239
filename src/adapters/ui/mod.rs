pub mod banner;
pub mod progress;
pub mod tui;

use crate::domain::Identity;

/// Prints the welcome banner and applies the theme for all subsequent inquire prompts.
/// Call once at startup (e.g. in main after tracing init).
pub fn init_ui(identity: &Identity) {
    banner::print_welcome(identity);
    tui::apply_theme();
}
