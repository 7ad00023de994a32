pub mod cli;
pub mod game;
pub mod models;
pub mod utils;

use std::sync::OnceLock;

use models::settings::Settings;

/// Process-wide configuration, installed once at startup.
pub static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Read the installed settings, falling back to defaults so library code
/// and tests never depend on startup order.
pub fn settings() -> &'static Settings {
    SETTINGS.get_or_init(Settings::default)
}
