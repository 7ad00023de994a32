use std::io::Error;

use git_trunfo::models::settings::Settings;
use git_trunfo::utils::logger::Logger;
use git_trunfo::{cli, logger, SETTINGS};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let settings = Settings::load().unwrap_or_else(|error| {
        logger!(WARN, "Falling back to default settings: {}", error);
        Settings::default()
    });
    let _ = SETTINGS.set(settings);

    cli::run().await
}
