//! Typed builder and YAML codec for `dependabot.yml` configuration.
//!
//! The [`config`] module is the document core: a typed tree with append-only
//! builders, closed-set validators and round-trip YAML conversion. The
//! [`fs`] module is the file-access layer used by the CLI.
//!
//! ```
//! use dependabot_config::config::{ConfigDocument, ScheduleSpec, UpdateEntry};
//!
//! let mut doc = ConfigDocument::new();
//! doc.add_update(UpdateEntry::new("gomod", "/", ScheduleSpec::new("daily")?));
//!
//! assert_eq!(
//!     doc.to_yaml()?,
//!     "version: 2\nupdates:\n- package-ecosystem: gomod\n  directory: /\n  schedule:\n    interval: daily\n"
//! );
//! # Ok::<(), dependabot_config::error::ConfigError>(())
//! ```

pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
