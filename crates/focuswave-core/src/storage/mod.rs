mod config;
mod store;

pub use config::Config;
pub use store::{JsonStore, RecordStore, UserRecord};

use std::path::PathBuf;

/// Returns `~/.config/focuswave[-dev]/` based on FOCUSWAVE_ENV.
///
/// Set FOCUSWAVE_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if the data directory cannot be created.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("FOCUSWAVE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("focuswave-dev")
    } else {
        base_dir.join("focuswave")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
