//! Terminal presentation for the CLI

pub mod context;
pub mod terminal;
pub mod views;

use layoutgen::config::ConfigWarning;

use context::UiContext;

/// Unknown config keys go to stderr; they never fail the command.
pub fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    for warning in warnings {
        eprintln!("{}", views::render_config_warning(warning, ui.color));
    }
}
