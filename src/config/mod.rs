// src/config/mod.rs
pub mod cli;
pub mod env;
pub mod settings;

pub use cli::Cli;
pub use settings::Config;

use crate::error::ManifestError;

/// Loads the configuration from the environment (and `.env` if present).
pub fn load_config() -> Result<Config, ManifestError> {
    dotenv::dotenv().ok(); // Load .env file if present, ignore errors

    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
