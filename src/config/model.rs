//! Document tree for `dependabot.yml`.
//!
//! Field declaration order is the serialization order. Optional fields are
//! `Option`s that are skipped when `None`, so an absent field never appears in
//! rendered output while `Some(vec![])` still renders as an empty sequence.

use super::types::{SCHEMA_VERSION, ScheduleInterval, is_valid_schedule_interval};
use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};

/// A complete dependency-update configuration document.
///
/// Unknown keys in the YAML are ignored for forward compatibility. Mutation is
/// append-only; see [`ConfigDocument::add_update`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDocument {
    /// Schema version. Preserved as read; new documents use [`SCHEMA_VERSION`].
    #[serde(default)]
    pub version: i64,

    /// Update entries in the order they were added.
    #[serde(default)]
    pub updates: Vec<UpdateEntry>,
}

impl ConfigDocument {
    /// Create an empty document at the supported schema version.
    pub fn new() -> Self {
        Self {
            version: SCHEMA_VERSION,
            updates: Vec::new(),
        }
    }
}

impl Default for ConfigDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// One monitored ecosystem/directory pair.
///
/// String values are emitted as YAML 1.2 plain scalars where possible, so a
/// label such as `yes` or `on` renders unquoted. YAML 1.1 readers (including
/// the one GitHub uses for `dependabot.yml`) read those as booleans; quote them
/// by hand if the file is consumed outside this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct UpdateEntry {
    #[serde(default)]
    pub package_ecosystem: String,

    #[serde(default)]
    pub directory: String,

    #[serde(default)]
    pub schedule: ScheduleSpec,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow: Option<Vec<AllowRule>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignees: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_message: Option<CommitMessageSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore: Option<Vec<IgnoreRule>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestone: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_pull_requests_limit: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_request_branch_name: Option<PullRequestBranchNameSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rebase_strategy: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewers: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_branch: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub versioning_strategy: Option<String>,
}

impl UpdateEntry {
    /// Create an entry with only the required fields set.
    ///
    /// The ecosystem is not checked; use
    /// [`is_valid_package_ecosystem`](super::is_valid_package_ecosystem) first
    /// if that matters to the caller.
    pub fn new(
        package_ecosystem: impl Into<String>,
        directory: impl Into<String>,
        schedule: ScheduleSpec,
    ) -> Self {
        Self {
            package_ecosystem: package_ecosystem.into(),
            directory: directory.into(),
            schedule,
            ..Self::default()
        }
    }

    pub fn add_allow(&mut self, rule: AllowRule) {
        self.allow.get_or_insert_with(Vec::new).push(rule);
    }

    pub fn add_assignee(&mut self, assignee: impl Into<String>) {
        self.assignees
            .get_or_insert_with(Vec::new)
            .push(assignee.into());
    }

    pub fn add_ignore(&mut self, rule: IgnoreRule) {
        self.ignore.get_or_insert_with(Vec::new).push(rule);
    }

    pub fn add_label(&mut self, label: impl Into<String>) {
        self.labels.get_or_insert_with(Vec::new).push(label.into());
    }

    pub fn add_reviewer(&mut self, reviewer: impl Into<String>) {
        self.reviewers
            .get_or_insert_with(Vec::new)
            .push(reviewer.into());
    }

    pub fn with_commit_message(mut self, commit_message: CommitMessageSpec) -> Self {
        self.commit_message = Some(commit_message);
        self
    }

    pub fn with_milestone(mut self, milestone: i64) -> Self {
        self.milestone = Some(milestone);
        self
    }

    pub fn with_open_pull_requests_limit(mut self, limit: i64) -> Self {
        self.open_pull_requests_limit = Some(limit);
        self
    }

    pub fn with_pull_request_branch_name(mut self, branch_name: PullRequestBranchNameSpec) -> Self {
        self.pull_request_branch_name = Some(branch_name);
        self
    }

    pub fn with_rebase_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.rebase_strategy = Some(strategy.into());
        self
    }

    pub fn with_target_branch(mut self, branch: impl Into<String>) -> Self {
        self.target_branch = Some(branch.into());
        self
    }

    pub fn with_versioning_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.versioning_strategy = Some(strategy.into());
        self
    }
}

/// When an ecosystem is checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSpec {
    #[serde(default)]
    pub interval: String,

    /// Only meaningful for weekly schedules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,

    /// Time of day as `HH:MM`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    /// IANA timezone name, e.g. `Europe/Berlin`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl ScheduleSpec {
    /// Create a schedule with only `interval` set.
    ///
    /// # Returns
    ///
    /// * `Ok(ScheduleSpec)` - `interval` is `daily`, `weekly` or `monthly`
    /// * `Err(ConfigError::Validation)` - any other value
    pub fn new(interval: &str) -> Result<Self> {
        if !is_valid_schedule_interval(interval) {
            return Err(ConfigError::Validation(format!(
                "schedule interval '{}' is not valid (expected one of: {})",
                interval,
                ScheduleInterval::ALL
                    .iter()
                    .map(|i| i.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )));
        }

        Ok(Self {
            interval: interval.to_string(),
            ..Self::default()
        })
    }

    pub fn with_day(mut self, day: impl Into<String>) -> Self {
        self.day = Some(day.into());
        self
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }
}

impl From<ScheduleInterval> for ScheduleSpec {
    fn from(interval: ScheduleInterval) -> Self {
        Self {
            interval: interval.into(),
            ..Self::default()
        }
    }
}

/// Restricts updates to matching dependencies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AllowRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependency_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependency_type: Option<String>,
}

impl AllowRule {
    /// Empty arguments leave the corresponding field unset.
    pub fn new(dependency_name: &str, dependency_type: &str) -> Self {
        Self {
            dependency_name: non_empty(dependency_name),
            dependency_type: non_empty(dependency_type),
        }
    }
}

/// Excludes dependencies (optionally only some versions) from updates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct IgnoreRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependency_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub versions: Option<Vec<String>>,
}

impl IgnoreRule {
    /// An empty name or version list leaves the corresponding field unset.
    pub fn new(dependency_name: &str, versions: Vec<String>) -> Self {
        Self {
            dependency_name: non_empty(dependency_name),
            versions: if versions.is_empty() {
                None
            } else {
                Some(versions)
            },
        }
    }

    pub fn add_version(&mut self, version: impl Into<String>) {
        self.versions
            .get_or_insert_with(Vec::new)
            .push(version.into());
    }
}

/// Commit message conventions for generated pull requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CommitMessageSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix_development: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<String>,
}

impl CommitMessageSpec {
    pub fn new(prefix: &str, prefix_development: &str, include: &str) -> Self {
        Self {
            prefix: non_empty(prefix),
            prefix_development: non_empty(prefix_development),
            include: non_empty(include),
        }
    }
}

/// Separator used when generating pull request branch names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestBranchNameSpec {
    #[serde(default)]
    pub separator: String,
}

impl PullRequestBranchNameSpec {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
