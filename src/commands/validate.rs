//! Implementation of the `validate` command.

use dependabot_config::error::{ConfigError, Result};
use dependabot_config::fs::load_document;
use std::path::Path;

/// Load `file` and report every validation issue.
///
/// Exits with the validation failure code when any issue is found.
pub fn cmd_validate(file: &Path) -> Result<()> {
    let doc = load_document(file)?;
    let issues = doc.validate();

    if issues.is_empty() {
        println!(
            "OK: {} is valid ({} update entries)",
            file.display(),
            doc.updates.len()
        );
        return Ok(());
    }

    for issue in &issues {
        println!("  {}", issue);
    }

    Err(ConfigError::Validation(format!(
        "{} issue(s) found in '{}'",
        issues.len(),
        file.display()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dependabot_config::exit_codes;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_clean_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("dependabot.yml");
        fs::write(
            &file,
            "version: 2\nupdates:\n- package-ecosystem: cargo\n  directory: /\n  schedule:\n    interval: weekly\n    day: monday\n",
        )
        .unwrap();

        assert!(cmd_validate(&file).is_ok());
    }

    #[test]
    fn test_validate_reports_issues() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("dependabot.yml");
        fs::write(
            &file,
            "version: 2\nupdates:\n- package-ecosystem: yarn\n  directory: /\n  schedule:\n    interval: daily\n",
        )
        .unwrap();

        let err = cmd_validate(&file).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_FAILURE);
        assert!(err.to_string().contains("1 issue(s)"));
    }

    #[test]
    fn test_validate_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = cmd_validate(&temp_dir.path().join("missing.yml")).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::IO_FAILURE);
    }
}
