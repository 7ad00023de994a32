use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Runtime configuration. Values come from code defaults, overlaid by an
/// optional `git-trunfo.toml` next to the binary and `TRUNFO_*`
/// environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub api_base_url: String,
    /// Second-seat username that selects an unattended opponent.
    pub cpu_sentinel: String,
    /// Account whose repositories back the unattended seat.
    pub cpu_account: String,
    pub battle_start_delay_ms: u64,
    pub resolve_delay_ms: u64,
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.github.com".to_string(),
            cpu_sentinel: "cpu".to_string(),
            cpu_account: "google".to_string(),
            battle_start_delay_ms: 600,
            resolve_delay_ms: 1200,
            request_timeout_secs: 10,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Settings, ConfigError> {
        let defaults = Settings::default();
        Config::builder()
            .set_default("api_base_url", defaults.api_base_url)?
            .set_default("cpu_sentinel", defaults.cpu_sentinel)?
            .set_default("cpu_account", defaults.cpu_account)?
            .set_default("battle_start_delay_ms", defaults.battle_start_delay_ms)?
            .set_default("resolve_delay_ms", defaults.resolve_delay_ms)?
            .set_default("request_timeout_secs", defaults.request_timeout_secs)?
            .add_source(File::with_name("git-trunfo").required(false))
            .add_source(Environment::with_prefix("TRUNFO"))
            .build()?
            .try_deserialize()
    }
}
