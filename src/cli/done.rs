//! todo done command implementation

use tracing::info;

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::store::TaskStore;
use crate::task::parse_position;

/// Options for `todo done`
pub struct DoneOptions {
    pub position: String,
    pub store: TaskStore,
    pub output: OutputOptions,
}

pub fn run(options: DoneOptions) -> Result<()> {
    let position = parse_position(&options.position)?;
    let task = options.store.mark_done(position)?;
    info!(position, "todo marked done");

    let mut human = HumanOutput::new("Todo Done");
    human.push_summary("position", task.position.to_string());
    human.push_summary("title", task.title.clone());

    emit_success(options.output, "done", &task, Some(&human))
}
