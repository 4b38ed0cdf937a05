//! Opt-in semantic checks over a whole document.
//!
//! Parsing never rejects unknown enumeration values; callers that want strict
//! documents run [`ConfigDocument::validate`] and decide what to do with the
//! returned issues.

use super::model::{ConfigDocument, UpdateEntry};
use super::types::{
    SCHEMA_VERSION, ScheduleInterval, is_valid_package_ecosystem, is_valid_schedule_interval,
    is_valid_schedule_interval_day,
};
use regex::Regex;
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

static SCHEDULE_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").expect("valid time regex"));

/// A single problem found by [`ConfigDocument::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Index into `updates`, or `None` for document-level issues.
    pub entry: Option<usize>,
    /// YAML path of the offending field, relative to the entry.
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    fn document(field: &str, message: String) -> Self {
        Self {
            entry: None,
            field: field.to_string(),
            message,
        }
    }

    fn entry(index: usize, field: &str, message: String) -> Self {
        Self {
            entry: Some(index),
            field: field.to_string(),
            message,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.entry {
            Some(i) => write!(f, "updates[{}].{}: {}", i, self.field, self.message),
            None => write!(f, "{}: {}", self.field, self.message),
        }
    }
}

impl ConfigDocument {
    /// Check enumerations, schedule consistency and entry uniqueness.
    ///
    /// Returns issues in document order; an empty vector means the document is
    /// valid. Duplicate (`package-ecosystem`, `directory`) pairs are reported
    /// on the later entry.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if self.version != SCHEMA_VERSION {
            issues.push(ValidationIssue::document(
                "version",
                format!(
                    "unsupported version {} (expected {})",
                    self.version, SCHEMA_VERSION
                ),
            ));
        }

        let mut seen: HashSet<(&str, &str)> = HashSet::new();
        for (index, entry) in self.updates.iter().enumerate() {
            validate_entry(index, entry, &mut issues);

            let key = (entry.package_ecosystem.as_str(), entry.directory.as_str());
            if !seen.insert(key) {
                issues.push(ValidationIssue::entry(
                    index,
                    "directory",
                    format!(
                        "duplicate entry for package-ecosystem '{}' in directory '{}'",
                        entry.package_ecosystem, entry.directory
                    ),
                ));
            }
        }

        issues
    }

    /// Convenience wrapper: true when [`ConfigDocument::validate`] finds nothing.
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

fn validate_entry(index: usize, entry: &UpdateEntry, issues: &mut Vec<ValidationIssue>) {
    if !is_valid_package_ecosystem(&entry.package_ecosystem) {
        issues.push(ValidationIssue::entry(
            index,
            "package-ecosystem",
            format!("unknown package ecosystem '{}'", entry.package_ecosystem),
        ));
    }

    if entry.directory.is_empty() {
        issues.push(ValidationIssue::entry(
            index,
            "directory",
            "directory must be set".to_string(),
        ));
    }

    let schedule = &entry.schedule;
    if !is_valid_schedule_interval(&schedule.interval) {
        issues.push(ValidationIssue::entry(
            index,
            "schedule.interval",
            format!("unknown schedule interval '{}'", schedule.interval),
        ));
    }

    if let Some(day) = &schedule.day {
        if !is_valid_schedule_interval_day(day) {
            issues.push(ValidationIssue::entry(
                index,
                "schedule.day",
                format!("unknown schedule day '{}'", day),
            ));
        }
        if schedule.interval != ScheduleInterval::Weekly.as_str() {
            issues.push(ValidationIssue::entry(
                index,
                "schedule.day",
                format!(
                    "day is only used with a weekly interval (interval is '{}')",
                    schedule.interval
                ),
            ));
        }
    }

    if let Some(time) = &schedule.time
        && !SCHEDULE_TIME.is_match(time)
    {
        issues.push(ValidationIssue::entry(
            index,
            "schedule.time",
            format!("time '{}' must be formatted as HH:MM", time),
        ));
    }
}
