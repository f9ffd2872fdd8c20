//! ms-config: settings file format and validation.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{ValidationError, validate_settings};

use std::path::Path;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Load settings, resolve relative directories against the file's own
/// directory, and validate.
pub fn load_yaml(path: &Path) -> ConfigResult<Settings> {
    let content = std::fs::read_to_string(path)?;
    let mut settings: Settings = serde_yaml::from_str(&content)?;
    if let Some(base) = path.parent() {
        settings.resolve_relative_to(base);
    }
    validate_settings(&settings)?;
    Ok(settings)
}

pub fn save_yaml(path: &Path, settings: &Settings) -> ConfigResult<()> {
    validate_settings(settings)?;
    let content = serde_yaml::to_string(settings)?;
    std::fs::write(path, content)?;
    Ok(())
}
