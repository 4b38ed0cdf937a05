//! Implementation of the `init` command.

use crate::cli::InitArgs;
use dependabot_config::config::ConfigDocument;
use dependabot_config::error::{ConfigError, Result};
use dependabot_config::fs::save_document;
use std::path::Path;

/// Write an empty document to `file`.
pub fn cmd_init(file: &Path, args: InitArgs) -> Result<()> {
    if file.exists() && !args.force {
        return Err(ConfigError::UserError(format!(
            "'{}' already exists.\n\nUse --force to overwrite it, or `add` to extend it.",
            file.display()
        )));
    }

    save_document(file, &ConfigDocument::new())?;
    println!("Created {}", file.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dependabot_config::fs::load_document;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_empty_document() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join(".github/dependabot.yml");

        cmd_init(&file, InitArgs { force: false }).unwrap();

        let doc = load_document(&file).unwrap();
        assert_eq!(doc, ConfigDocument::new());
    }

    #[test]
    fn test_init_refuses_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("dependabot.yml");
        fs::write(&file, "version: 2\nupdates: []\n# keep me\n").unwrap();

        let err = cmd_init(&file, InitArgs { force: false }).unwrap_err();
        assert!(matches!(err, ConfigError::UserError(_)));
        assert!(err.to_string().contains("already exists"));

        let content = fs::read_to_string(&file).unwrap();
        assert!(content.contains("# keep me"));
    }

    #[test]
    fn test_init_force_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("dependabot.yml");
        fs::write(&file, "version: 1\n").unwrap();

        cmd_init(&file, InitArgs { force: true }).unwrap();

        let doc = load_document(&file).unwrap();
        assert_eq!(doc.version, 2);
    }
}
