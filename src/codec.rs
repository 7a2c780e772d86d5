//! CSV encoding of the task table
//!
//! The file layout is a fixed header row followed by one row per task:
//!
//! ```text
//! Index,Title,Done
//! 1,Buy milk,false
//! 2,Write report,true
//! ```

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::error::{Error, Result};
use crate::task::{done_from_str, done_to_str, Task};

/// Header row written at the top of every task file
pub const HEADER: [&str; 3] = ["Index", "Title", "Done"];

/// Decode a task file.
///
/// Empty input decodes to an empty list; a file without even a header is
/// treated as a fresh store.
pub fn decode(bytes: &[u8]) -> Result<Vec<Task>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut records = reader.records();
    let header = match records.next() {
        Some(record) => record?,
        None => return Ok(Vec::new()),
    };
    check_header(&header)?;

    let mut tasks = Vec::new();
    for record in records {
        let record = record?;
        tasks.push(decode_row(&record)?);
    }
    Ok(tasks)
}

/// Encode tasks, header first.
pub fn encode(tasks: &[Task]) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(HEADER)?;
    for task in tasks {
        let position = task.position.to_string();
        writer.write_record([position.as_str(), task.title.as_str(), done_to_str(task.done)])?;
    }
    writer
        .into_inner()
        .map_err(|err| Error::Io(err.into_error()))
}

fn check_header(record: &StringRecord) -> Result<()> {
    let matches = record.len() == HEADER.len()
        && record
            .iter()
            .zip(HEADER)
            .all(|(field, expected)| field.trim() == expected);
    if matches {
        return Ok(());
    }
    Err(Error::Parse {
        line: line_of(record),
        reason: format!(
            "expected header {:?}, found {:?}",
            HEADER.join(","),
            record.iter().collect::<Vec<_>>().join(",")
        ),
    })
}

fn decode_row(record: &StringRecord) -> Result<Task> {
    let line = line_of(record);
    if record.len() != HEADER.len() {
        return Err(Error::Parse {
            line,
            reason: format!("expected {} fields, found {}", HEADER.len(), record.len()),
        });
    }

    let raw_position = &record[0];
    let position = raw_position
        .trim()
        .parse::<usize>()
        .map_err(|_| Error::Parse {
            line,
            reason: format!("invalid index value {raw_position:?}"),
        })?;

    let raw_done = &record[2];
    let done = done_from_str(raw_done).ok_or_else(|| Error::Parse {
        line,
        reason: format!("invalid done value {raw_done:?}"),
    })?;

    Ok(Task {
        position,
        title: record[1].to_string(),
        done,
    })
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|pos| pos.line()).unwrap_or(0)
}
