//! The task record and the small parsing helpers around it.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single todo as stored in the task file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// 1-based, dense position; reassigned when an earlier task is deleted
    pub position: usize,
    pub title: String,
    pub done: bool,
}

impl Task {
    pub fn new(position: usize, title: impl Into<String>) -> Self {
        Self {
            position,
            title: title.into(),
            done: false,
        }
    }
}

/// Join command-line words into a title with single spaces.
///
/// Words are kept as given, including empty words and inner whitespace.
pub fn join_title<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(|word| word.as_ref())
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Parse a user-supplied position argument.
///
/// Only the format is checked here; range checks happen against the
/// current task count inside the store.
pub fn parse_position(raw: &str) -> Result<usize> {
    let trimmed = raw.trim();
    let position: usize = trimmed
        .parse()
        .map_err(|_| Error::InvalidIndex(raw.to_string()))?;
    if position == 0 {
        return Err(Error::InvalidIndex(raw.to_string()));
    }
    Ok(position)
}

/// Textual form of the done flag as written to disk
pub fn done_to_str(done: bool) -> &'static str {
    if done {
        "true"
    } else {
        "false"
    }
}

pub fn done_from_str(raw: &str) -> Option<bool> {
    match raw.trim() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
