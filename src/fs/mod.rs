//! File-access layer for configuration documents.
//!
//! The document core never touches the filesystem; this module reads raw text
//! for `ConfigDocument::from_yaml` and persists `ConfigDocument::to_yaml`
//! output with an atomic write.

pub mod atomic;
mod store;

pub use atomic::atomic_write_file;
pub use store::{DEFAULT_CONFIG_PATH, load_document, save_document};
