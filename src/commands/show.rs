//! Implementation of the `show` command.

use crate::cli::ShowArgs;
use dependabot_config::config::{ConfigDocument, UpdateEntry};
use dependabot_config::error::{ConfigError, Result};
use dependabot_config::fs::load_document;
use std::path::Path;

/// Print the document at `file` as a summary or as JSON.
pub fn cmd_show(file: &Path, args: ShowArgs) -> Result<()> {
    let doc = load_document(file)?;

    if args.json {
        let json = serde_json::to_string_pretty(&doc)
            .map_err(|e| ConfigError::Encode(format!("failed to serialize config to JSON: {}", e)))?;
        println!("{}", json);
    } else {
        print!("{}", format_summary(&doc));
    }

    Ok(())
}

fn format_summary(doc: &ConfigDocument) -> String {
    let mut out = format!("version: {}\n", doc.version);

    if doc.updates.is_empty() {
        out.push_str("(no update entries)\n");
        return out;
    }

    out.push_str(&format!(
        "{:>3}  {:<16} {:<24} {}\n",
        "#", "ECOSYSTEM", "DIRECTORY", "SCHEDULE"
    ));
    for (index, entry) in doc.updates.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}  {:<16} {:<24} {}\n",
            index,
            entry.package_ecosystem,
            entry.directory,
            describe_schedule(entry)
        ));
        if let Some(labels) = &entry.labels
            && !labels.is_empty()
        {
            out.push_str(&format!("     labels: {}\n", labels.join(", ")));
        }
        if let Some(reviewers) = &entry.reviewers
            && !reviewers.is_empty()
        {
            out.push_str(&format!("     reviewers: {}\n", reviewers.join(", ")));
        }
    }

    out
}

fn describe_schedule(entry: &UpdateEntry) -> String {
    let schedule = &entry.schedule;
    let mut text = schedule.interval.clone();
    if let Some(day) = &schedule.day {
        text.push_str(&format!(" on {}", day));
    }
    if let Some(time) = &schedule.time {
        text.push_str(&format!(" at {}", time));
    }
    if let Some(timezone) = &schedule.timezone {
        text.push_str(&format!(" ({})", timezone));
    }
    text
}
