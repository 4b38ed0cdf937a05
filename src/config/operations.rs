//! Document mutation, queries, and YAML conversion.

use super::model::{ConfigDocument, UpdateEntry};
use crate::error::{ConfigError, Result};

impl ConfigDocument {
    /// Append an update entry. No validation is performed.
    pub fn add_update(&mut self, entry: UpdateEntry) {
        self.updates.push(entry);
    }

    /// Whether any entry uses exactly `ecosystem` (case-sensitive).
    pub fn has_package_ecosystem(&self, ecosystem: &str) -> bool {
        self.updates
            .iter()
            .any(|u| u.package_ecosystem == ecosystem)
    }

    /// Parse a document from a YAML string.
    ///
    /// Unknown fields are silently ignored. Enumerations and required fields
    /// are not checked; call [`ConfigDocument::validate`] for that.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| ConfigError::Decode(format!("invalid dependabot config YAML: {}", e)))
    }

    /// Parse a document from raw bytes supplied by a file-access layer.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_yaml::from_slice(bytes)
            .map_err(|e| ConfigError::Decode(format!("invalid dependabot config YAML: {}", e)))
    }

    /// Serialize the document to YAML.
    ///
    /// Keys follow the schema order, absent optional fields are omitted.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::Encode(e.to_string()))
    }
}
