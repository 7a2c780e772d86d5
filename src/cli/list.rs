//! todo list command implementation

use serde::Serialize;

use crate::error::Result;
use crate::output::{emit_success, render_table, HumanOutput, OutputOptions};
use crate::store::TaskStore;
use crate::task::Task;

/// Options for `todo list`
pub struct ListOptions {
    pub store: TaskStore,
    pub output: OutputOptions,
}

#[derive(Serialize)]
struct ListReport {
    total: usize,
    tasks: Vec<Task>,
}

pub fn run(options: ListOptions) -> Result<()> {
    let tasks = options.store.list()?;

    let mut human = HumanOutput::new(format!("{} todo(s)", tasks.len()));
    for line in render_table(&tasks) {
        human.push_detail(line);
    }

    let report = ListReport {
        total: tasks.len(),
        tasks,
    };

    emit_success(options.output, "list", &report, Some(&human))
}
