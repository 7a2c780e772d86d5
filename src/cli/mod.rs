//! Command-line interface for todo
//!
//! This module defines the CLI structure using clap derive macros.
//! Each subcommand is defined in its own submodule; the `Commands` enum is
//! the whole command table.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::output::OutputOptions;
use crate::paths;
use crate::store::TaskStore;

mod add;
mod delete;
mod done;
mod list;
mod update;

/// todo - a personal todo list kept in a CSV file
#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the task file (defaults to the user data directory)
    #[arg(long, global = true, env = "TODO_FILE")]
    pub file: Option<PathBuf>,

    /// Path to the config file (defaults to the user config directory)
    #[arg(long, global = true, env = "TODO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging when RUST_LOG is not set
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new todo
    Add {
        /// Title words, joined with single spaces
        words: Vec<String>,
    },

    /// List all todos
    #[command(visible_alias = "ls")]
    List,

    /// Delete a todo by its position
    #[command(visible_alias = "rm")]
    Delete {
        /// 1-based position as shown by `todo list`
        position: String,
    },

    /// Mark a todo as done
    Done {
        /// 1-based position as shown by `todo list`
        position: String,
    },

    /// Replace the title of a todo
    #[command(visible_alias = "u")]
    Update {
        /// 1-based position as shown by `todo list`
        position: String,

        /// New title words, joined with single spaces
        words: Vec<String>,
    },
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let config = self.load_config()?;
        let data_file = paths::resolve_data_file(self.file.as_deref(), &config)?;
        debug!(path = %data_file.display(), "using task file");

        let store = TaskStore::new(data_file);
        let output = OutputOptions {
            json: self.json || config.output.json,
            quiet: self.quiet,
        };

        match self.command {
            Commands::Add { words } => add::run(add::AddOptions {
                words,
                store,
                output,
            }),
            Commands::List => list::run(list::ListOptions { store, output }),
            Commands::Delete { position } => delete::run(delete::DeleteOptions {
                position,
                store,
                output,
            }),
            Commands::Done { position } => done::run(done::DoneOptions {
                position,
                store,
                output,
            }),
            Commands::Update { position, words } => update::run(update::UpdateOptions {
                position,
                words,
                store,
                output,
            }),
        }
    }

    fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::load(path),
            None => match paths::default_config_file() {
                Ok(path) => Config::load_or_default(&path),
                // Without a home directory there is no default config to read
                Err(_) => Ok(Config::default()),
            },
        }
    }
}
