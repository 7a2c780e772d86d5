#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub const HEADER: &str = "Index,Title,Done\n";

/// An isolated home with its own data and config directories.
pub struct TestHome {
    dir: TempDir,
}

impl TestHome {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn data_home(&self) -> PathBuf {
        self.dir.path().join("data")
    }

    pub fn config_home(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    /// Task file passed explicitly with `--file`
    pub fn task_file(&self) -> PathBuf {
        self.dir.path().join("todo.csv")
    }

    pub fn write_tasks(&self, contents: &str) -> std::io::Result<PathBuf> {
        let path = self.task_file();
        fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn read_tasks(&self) -> std::io::Result<String> {
        fs::read_to_string(self.task_file())
    }

    pub fn write_config(&self, contents: &str) -> std::io::Result<PathBuf> {
        let dir = self.config_home().join("Todo");
        fs::create_dir_all(&dir)?;
        let path = dir.join("config.toml");
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// `todo` with a clean environment rooted in this home; no `--file`.
    pub fn bare_cmd(&self) -> Command {
        let mut cmd = todo_cmd();
        cmd.current_dir(self.path())
            .env("HOME", self.path())
            .env("XDG_DATA_HOME", self.data_home())
            .env("XDG_CONFIG_HOME", self.config_home())
            .env_remove("TODO_FILE")
            .env_remove("TODO_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }

    /// `todo --file <home>/todo.csv`
    pub fn cmd(&self) -> Command {
        let mut cmd = self.bare_cmd();
        cmd.arg("--file").arg(self.task_file());
        cmd
    }
}

pub fn todo_cmd() -> Command {
    Command::cargo_bin("todo").expect("binary")
}
