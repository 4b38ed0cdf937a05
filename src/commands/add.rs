//! Implementation of the `add` command.

use crate::cli::AddArgs;
use dependabot_config::config::{ConfigDocument, ScheduleSpec, UpdateEntry};
use dependabot_config::error::{ConfigError, Result};
use dependabot_config::fs::{load_document, save_document};
use std::path::Path;

/// Append a validated update entry to the document at `file`.
///
/// Unlike the library, which leaves uniqueness to the caller, this command
/// refuses a second entry for the same ecosystem and directory.
pub fn cmd_add(file: &Path, args: AddArgs) -> Result<()> {
    let entry = build_entry(args)?;

    let mut doc = if file.exists() {
        load_document(file)?
    } else {
        ConfigDocument::new()
    };

    if doc
        .updates
        .iter()
        .any(|u| u.package_ecosystem == entry.package_ecosystem && u.directory == entry.directory)
    {
        return Err(ConfigError::UserError(format!(
            "an update entry for '{}' in '{}' already exists in '{}'",
            entry.package_ecosystem,
            entry.directory,
            file.display()
        )));
    }

    let summary = format!(
        "Added {} ({}) for '{}' to {}",
        entry.package_ecosystem,
        entry.schedule.interval,
        entry.directory,
        file.display()
    );

    doc.add_update(entry);
    save_document(file, &doc)?;

    println!("{}", summary);
    Ok(())
}

/// Build an entry from CLI arguments, rejecting invalid enumeration values.
fn build_entry(args: AddArgs) -> Result<UpdateEntry> {
    let mut schedule = ScheduleSpec::new(&args.interval)?;
    schedule.day = args.day;
    schedule.time = args.time;
    schedule.timezone = args.timezone;

    let mut entry = UpdateEntry::new(args.ecosystem, args.directory, schedule);
    for label in args.labels {
        entry.add_label(label);
    }
    for reviewer in args.reviewers {
        entry.add_reviewer(reviewer);
    }
    for assignee in args.assignees {
        entry.add_assignee(assignee);
    }
    entry.open_pull_requests_limit = args.open_pull_requests_limit;
    entry.target_branch = args.target_branch;

    let mut scratch = ConfigDocument::new();
    scratch.add_update(entry);
    let issues = scratch.validate();
    if !issues.is_empty() {
        let details: Vec<String> = issues.iter().map(|i| format!("  {}", i)).collect();
        return Err(ConfigError::Validation(format!(
            "refusing to add invalid entry:\n{}",
            details.join("\n")
        )));
    }

    Ok(scratch.updates.remove(0))
}
