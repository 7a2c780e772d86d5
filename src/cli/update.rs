//! todo update command implementation

use tracing::info;

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::store::TaskStore;
use crate::task::parse_position;

/// Options for `todo update`
pub struct UpdateOptions {
    pub position: String,
    pub words: Vec<String>,
    pub store: TaskStore,
    pub output: OutputOptions,
}

pub fn run(options: UpdateOptions) -> Result<()> {
    let position = parse_position(&options.position)?;
    let task = options.store.update_text(position, &options.words)?;
    info!(position, "todo updated");

    let mut human = HumanOutput::new("Todo Updated");
    human.push_summary("position", task.position.to_string());
    human.push_summary("title", task.title.clone());
    human.push_summary("done", task.done.to_string());

    emit_success(options.output, "update", &task, Some(&human))
}
