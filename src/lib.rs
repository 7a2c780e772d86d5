//! todo - personal todo list library
//!
//! Core of the `todo` CLI: a task table kept in a single CSV file, addressed
//! by 1-based positions that stay dense across deletions.
//!
//! # Module Organization
//!
//! - `atomic`: Write-temp-then-rename file replacement
//! - `cli`: Command-line interface using clap
//! - `codec`: CSV encoding of the task table
//! - `config`: Configuration loading from `config.toml`
//! - `error`: Error types and result aliases
//! - `output`: Human and JSON output
//! - `paths`: Default task file and config locations
//! - `store`: Read-modify-write operations on the task file
//! - `task`: The task record

pub mod atomic;
pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod output;
pub mod paths;
pub mod store;
pub mod task;

pub use error::{Error, Result};
pub use store::TaskStore;
pub use task::Task;
