//! Shared output formatting for todo CLI commands.

use serde::Serialize;

use crate::codec::HEADER;
use crate::error::{Error, JsonError, Result};
use crate::task::{done_to_str, Task};

pub const SCHEMA_VERSION: &str = "todo.v1";

#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub json: bool,
    pub quiet: bool,
}

#[derive(Debug, Clone)]
pub struct HumanOutput {
    header: String,
    summary: Vec<(String, String)>,
    details: Vec<String>,
}

impl HumanOutput {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            summary: Vec::new(),
            details: Vec::new(),
        }
    }

    pub fn push_summary(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.summary.push((key.into(), value.into()));
    }

    pub fn push_detail(&mut self, value: impl Into<String>) {
        self.details.push(value.into());
    }
}

pub fn emit_success<T: Serialize>(
    options: OutputOptions,
    command: &str,
    data: &T,
    human: Option<&HumanOutput>,
) -> Result<()> {
    if options.json {
        #[derive(Serialize)]
        struct Envelope<'a, T: Serialize> {
            schema_version: &'static str,
            command: &'a str,
            status: &'static str,
            data: &'a T,
        }

        let payload = Envelope {
            schema_version: SCHEMA_VERSION,
            command,
            status: "success",
            data,
        };

        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if options.quiet {
        return Ok(());
    }

    if let Some(human) = human {
        println!("{}", format_human(human));
    }

    Ok(())
}

pub fn emit_error(command: &str, err: &Error, json: bool) -> Result<()> {
    let hint = error_hint(err);
    if json {
        #[derive(Serialize)]
        struct Envelope<'a> {
            schema_version: &'static str,
            command: &'a str,
            status: &'static str,
            error: JsonError,
            #[serde(skip_serializing_if = "Option::is_none")]
            hint: Option<String>,
        }

        let payload = Envelope {
            schema_version: SCHEMA_VERSION,
            command,
            status: "error",
            error: JsonError::from(err),
            hint,
        };

        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    eprintln!("error: {err}");
    if let Some(hint) = hint {
        eprintln!("hint: {hint}");
    }
    Ok(())
}

pub fn format_human(output: &HumanOutput) -> String {
    let mut lines = Vec::new();
    lines.push(output.header.clone());

    if !output.summary.is_empty() {
        lines.push(String::new());
        for (key, value) in &output.summary {
            lines.push(format!("- {key}: {value}"));
        }
    }

    if !output.details.is_empty() {
        lines.push(String::new());
        lines.extend(output.details.iter().cloned());
    }

    lines.join("\n")
}

/// Render tasks as a left-aligned table, each column padded to its widest cell.
pub fn render_table(tasks: &[Task]) -> Vec<String> {
    let rows: Vec<[String; 3]> = std::iter::once(HEADER.map(String::from))
        .chain(tasks.iter().map(|task| {
            [
                task.position.to_string(),
                task.title.clone(),
                done_to_str(task.done).to_string(),
            ]
        }))
        .collect();

    let mut widths = [0usize; 3];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    rows.iter()
        .map(|row| {
            row.iter()
                .zip(widths)
                .map(|(cell, width)| format!("{cell:<width$}"))
                .collect::<Vec<_>>()
                .join(" ")
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Best-effort command name for error reporting, before clap has parsed.
pub fn infer_command_name_from_args() -> String {
    let mut expects_value = false;

    for arg in std::env::args().skip(1) {
        if expects_value {
            expects_value = false;
            continue;
        }
        if arg == "--file" || arg == "--config" {
            expects_value = true;
            continue;
        }
        if arg.starts_with('-') {
            continue;
        }
        return canonical_command(&arg).to_string();
    }

    "todo".to_string()
}

fn canonical_command(name: &str) -> &str {
    match name {
        "rm" => "delete",
        "u" => "update",
        "ls" => "list",
        other => other,
    }
}

fn error_hint(err: &Error) -> Option<String> {
    match err {
        Error::OutOfRange { count: 0, .. } => Some("todo add <title>".to_string()),
        Error::OutOfRange { .. } => Some("todo list".to_string()),
        Error::InvalidIndex(_) => Some("positions are whole numbers starting at 1".to_string()),
        Error::Parse { .. } => Some("fix or remove the malformed row, then retry".to_string()),
        Error::InvalidConfig(_) | Error::TomlParse(_) => {
            Some("fix config.toml then retry".to_string())
        }
        _ => None,
    }
}
