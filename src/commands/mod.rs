//! Command implementations for dependabot-config.
//!
//! Each command receives the resolved configuration file path so it can be
//! exercised against a temporary directory in tests.

mod add;
mod init;
mod show;
mod validate;

use crate::cli::{Cli, Command};
use dependabot_config::config::PackageEcosystem;
use dependabot_config::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Init(args) => init::cmd_init(&cli.file, args),
        Command::Add(args) => add::cmd_add(&cli.file, args),
        Command::Validate => validate::cmd_validate(&cli.file),
        Command::Show(args) => show::cmd_show(&cli.file, args),
        Command::Ecosystems => cmd_ecosystems(),
    }
}

fn cmd_ecosystems() -> Result<()> {
    for ecosystem in PackageEcosystem::ALL {
        println!("{}", ecosystem);
    }
    Ok(())
}
