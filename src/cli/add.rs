//! todo add command implementation

use tracing::info;

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::store::TaskStore;

/// Options for `todo add`
pub struct AddOptions {
    pub words: Vec<String>,
    pub store: TaskStore,
    pub output: OutputOptions,
}

pub fn run(options: AddOptions) -> Result<()> {
    let task = options.store.append(&options.words)?;
    info!(position = task.position, "todo added");

    let mut human = HumanOutput::new("Todo Added");
    human.push_summary("position", task.position.to_string());
    human.push_summary("title", task.title.clone());

    emit_success(options.output, "add", &task, Some(&human))
}
