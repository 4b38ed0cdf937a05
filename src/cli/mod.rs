//! CLI argument parsing for dependabot-config.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use dependabot_config::fs::DEFAULT_CONFIG_PATH;
use std::path::PathBuf;

/// Create, extend and check `dependabot.yml` dependency-update configuration.
#[derive(Parser, Debug)]
#[command(name = "dependabot-config")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an empty configuration file.
    ///
    /// Refuses to overwrite an existing file unless `--force` is given.
    Init(InitArgs),

    /// Append an update entry for one ecosystem and directory.
    ///
    /// The ecosystem, interval, day and time are validated before the
    /// file is touched. Creates the file if it does not exist yet.
    Add(AddArgs),

    /// Check the configuration file for invalid values.
    ///
    /// Reports unknown ecosystems, intervals and days, malformed times,
    /// and duplicate ecosystem/directory pairs.
    Validate,

    /// Show the configured update entries.
    Show(ShowArgs),

    /// List the supported package ecosystems.
    Ecosystems,
}

/// Arguments for the `init` command.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Overwrite an existing configuration file.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `add` command.
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Package ecosystem to monitor (e.g., npm, gomod, github-actions).
    #[arg(short, long)]
    pub ecosystem: String,

    /// Directory containing the manifest, relative to the repository root.
    #[arg(short, long, default_value = "/")]
    pub directory: String,

    /// How often to check for updates (daily, weekly, monthly).
    #[arg(short, long, default_value = "weekly")]
    pub interval: String,

    /// Day of the week for weekly checks.
    #[arg(long)]
    pub day: Option<String>,

    /// Time of day to check, as HH:MM.
    #[arg(long)]
    pub time: Option<String>,

    /// IANA timezone for `--time`.
    #[arg(long)]
    pub timezone: Option<String>,

    /// Labels to set on pull requests.
    #[arg(long = "label", value_delimiter = ',')]
    pub labels: Vec<String>,

    /// Reviewers to request on pull requests.
    #[arg(long = "reviewer", value_delimiter = ',')]
    pub reviewers: Vec<String>,

    /// Assignees for pull requests.
    #[arg(long = "assignee", value_delimiter = ',')]
    pub assignees: Vec<String>,

    /// Maximum number of open pull requests.
    #[arg(long)]
    pub open_pull_requests_limit: Option<i64>,

    /// Branch to create pull requests against.
    #[arg(long)]
    pub target_branch: Option<String>,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Print the document as JSON instead of a summary.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_init_uses_default_path() {
        let cli = Cli::try_parse_from(["dependabot-config", "init"]).unwrap();
        assert_eq!(cli.file, PathBuf::from(".github/dependabot.yml"));
        if let Command::Init(args) = cli.command {
            assert!(!args.force);
        } else {
            panic!("Expected Init command");
        }
    }

    #[test]
    fn parse_global_file_flag() {
        let cli =
            Cli::try_parse_from(["dependabot-config", "validate", "--file", "custom.yml"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("custom.yml"));
        assert!(matches!(cli.command, Command::Validate));
    }

    #[test]
    fn parse_add_minimal() {
        let cli = Cli::try_parse_from(["dependabot-config", "add", "--ecosystem", "npm"]).unwrap();
        if let Command::Add(args) = cli.command {
            assert_eq!(args.ecosystem, "npm");
            assert_eq!(args.directory, "/");
            assert_eq!(args.interval, "weekly");
            assert!(args.day.is_none());
            assert!(args.labels.is_empty());
        } else {
            panic!("Expected Add command");
        }
    }

    #[test]
    fn parse_add_full() {
        let cli = Cli::try_parse_from([
            "dependabot-config",
            "add",
            "-e",
            "gomod",
            "-d",
            "/api",
            "-i",
            "weekly",
            "--day",
            "monday",
            "--time",
            "06:00",
            "--timezone",
            "UTC",
            "--label",
            "deps,go",
            "--reviewer",
            "alice",
            "--assignee",
            "bob",
            "--open-pull-requests-limit",
            "5",
            "--target-branch",
            "develop",
        ])
        .unwrap();
        if let Command::Add(args) = cli.command {
            assert_eq!(args.ecosystem, "gomod");
            assert_eq!(args.directory, "/api");
            assert_eq!(args.day.as_deref(), Some("monday"));
            assert_eq!(args.time.as_deref(), Some("06:00"));
            assert_eq!(args.timezone.as_deref(), Some("UTC"));
            assert_eq!(args.labels, vec!["deps", "go"]);
            assert_eq!(args.reviewers, vec!["alice"]);
            assert_eq!(args.assignees, vec!["bob"]);
            assert_eq!(args.open_pull_requests_limit, Some(5));
            assert_eq!(args.target_branch.as_deref(), Some("develop"));
        } else {
            panic!("Expected Add command");
        }
    }

    #[test]
    fn parse_add_requires_ecosystem() {
        assert!(Cli::try_parse_from(["dependabot-config", "add"]).is_err());
    }

    #[test]
    fn parse_show_json() {
        let cli = Cli::try_parse_from(["dependabot-config", "show", "--json"]).unwrap();
        if let Command::Show(args) = cli.command {
            assert!(args.json);
        } else {
            panic!("Expected Show command");
        }
    }

    #[test]
    fn parse_ecosystems() {
        let cli = Cli::try_parse_from(["dependabot-config", "ecosystems"]).unwrap();
        assert!(matches!(cli.command, Command::Ecosystems));
    }
}
