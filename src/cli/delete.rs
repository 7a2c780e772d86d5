//! todo delete command implementation
//!
//! Removes one todo; every later todo moves up one position.

use tracing::info;

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::store::TaskStore;
use crate::task::parse_position;

/// Options for `todo delete`
pub struct DeleteOptions {
    pub position: String,
    pub store: TaskStore,
    pub output: OutputOptions,
}

pub fn run(options: DeleteOptions) -> Result<()> {
    let position = parse_position(&options.position)?;
    let removed = options.store.delete(position)?;
    info!(position, "todo removed");

    let mut human = HumanOutput::new("Todo Removed");
    human.push_summary("position", removed.position.to_string());
    human.push_summary("title", removed.title.clone());

    emit_success(options.output, "delete", &removed, Some(&human))
}
