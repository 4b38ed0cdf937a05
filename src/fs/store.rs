//! Load and save `dependabot.yml` documents.

use super::atomic::atomic_write_file;
use crate::config::ConfigDocument;
use crate::error::{ConfigError, Result};
use std::path::Path;

/// Conventional location of the configuration file, relative to the repo root.
pub const DEFAULT_CONFIG_PATH: &str = ".github/dependabot.yml";

/// Read and parse a document.
///
/// # Returns
///
/// * `Ok(ConfigDocument)` - The parsed document (not validated)
/// * `Err(ConfigError::Io)` - The file could not be read
/// * `Err(ConfigError::Decode)` - The file is not a well-formed document
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<ConfigDocument> {
    let path = path.as_ref();

    let content = std::fs::read(path).map_err(|e| {
        ConfigError::Io(format!(
            "failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })?;

    ConfigDocument::from_slice(&content)
}

/// Render a document and write it atomically.
pub fn save_document<P: AsRef<Path>>(path: P, doc: &ConfigDocument) -> Result<()> {
    let yaml = doc.to_yaml()?;
    atomic_write_file(path, &yaml)
}
