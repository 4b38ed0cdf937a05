//! Typed model of the `dependabot.yml` dependency-update configuration.
//!
//! This module holds the document tree, its builder helpers, the closed
//! enumerations with their validators, and YAML conversion. Reading is
//! forward-compatible (unknown keys are ignored) and never validates
//! enumerations; validation is always an explicit call.

mod model;
mod operations;
pub mod types;
mod validate;


// Re-export public API
pub use model::{
    AllowRule, CommitMessageSpec, ConfigDocument, IgnoreRule, PullRequestBranchNameSpec,
    ScheduleSpec, UpdateEntry,
};
pub use types::{
    PackageEcosystem, SCHEMA_VERSION, ScheduleDay, ScheduleInterval, is_valid_package_ecosystem,
    is_valid_schedule_interval, is_valid_schedule_interval_day,
};
pub use validate::ValidationIssue;
