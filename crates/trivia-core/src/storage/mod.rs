mod config;

pub use config::{Config, DisplayConfig, QuizConfig};

use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Returns `<config dir>/trivia[-dev]/` based on TRIVIA_ENV.
///
/// Set TRIVIA_ENV=dev to use the development directory, or TRIVIA_CONFIG_DIR
/// to point somewhere else entirely.
///
/// # Errors
/// Returns an error if no config directory can be determined or if creating
/// it fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("TRIVIA_CONFIG_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
            let env = std::env::var("TRIVIA_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("trivia-dev")
            } else {
                base_dir.join("trivia")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
