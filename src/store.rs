//! Task store
//!
//! Owns every read and write of the task file. Each operation loads the whole
//! file, transforms the ordered task list in memory and writes the whole list
//! back with [`write_atomic`]. Nothing is cached between calls; the file is
//! the only source of truth.
//!
//! Positions are 1-based and dense. They are reassigned on every write, so
//! deleting a task shifts every later task down by one.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::atomic::write_atomic;
use crate::codec;
use crate::error::{Error, Result};
use crate::task::{join_title, Task};

#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All tasks in position order. A missing or empty file is an empty list.
    pub fn list(&self) -> Result<Vec<Task>> {
        self.load()
    }

    /// Append a new open task built from `words`.
    ///
    /// Creates the file (and its directory) on first use.
    pub fn append<S: AsRef<str>>(&self, words: &[S]) -> Result<Task> {
        let mut tasks = self.load()?;
        let task = Task::new(tasks.len() + 1, join_title(words));
        tasks.push(task.clone());
        self.persist(&mut tasks)?;
        debug!(path = %self.path.display(), position = task.position, "appended task");
        Ok(task)
    }

    /// Remove the task at `position` and close the gap it leaves.
    ///
    /// Returns the removed task as it was before removal.
    pub fn delete(&self, position: usize) -> Result<Task> {
        let mut tasks = self.load()?;
        let slot = slot_for(&tasks, position)?;
        let removed = tasks.remove(slot);
        self.persist(&mut tasks)?;
        debug!(
            path = %self.path.display(),
            position,
            remaining = tasks.len(),
            "deleted task"
        );
        Ok(removed)
    }

    /// Mark the task at `position` as done. Already-done tasks stay done.
    pub fn mark_done(&self, position: usize) -> Result<Task> {
        self.modify(position, |task| task.done = true)
    }

    /// Replace the title of the task at `position`, keeping its done flag.
    ///
    /// Leading and trailing whitespace of the joined title is dropped.
    pub fn update_text<S: AsRef<str>>(&self, position: usize, words: &[S]) -> Result<Task> {
        let title = join_title(words).trim().to_string();
        self.modify(position, move |task| task.title = title)
    }

    fn modify(&self, position: usize, change: impl FnOnce(&mut Task)) -> Result<Task> {
        let mut tasks = self.load()?;
        let slot = slot_for(&tasks, position)?;
        change(&mut tasks[slot]);
        self.persist(&mut tasks)?;
        debug!(path = %self.path.display(), position, "updated task");
        Ok(tasks[slot].clone())
    }

    fn load(&self) -> Result<Vec<Task>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "task file missing; treating as empty");
                return Ok(Vec::new());
            }
            Err(err) => return Err(Error::Io(err)),
        };
        let mut tasks = codec::decode(&bytes)?;
        // Rows are addressed by file order, so report them that way too
        renumber(&mut tasks);
        Ok(tasks)
    }

    fn persist(&self, tasks: &mut [Task]) -> Result<()> {
        renumber(tasks);
        let bytes = codec::encode(tasks)?;
        write_atomic(&self.path, &bytes)
    }
}

fn renumber(tasks: &mut [Task]) {
    for (idx, task) in tasks.iter_mut().enumerate() {
        task.position = idx + 1;
    }
}

/// Map a 1-based position onto an index into `tasks`.
fn slot_for(tasks: &[Task], position: usize) -> Result<usize> {
    if position == 0 || position > tasks.len() {
        return Err(Error::OutOfRange {
            position,
            count: tasks.len(),
        });
    }
    Ok(position - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_store() -> (tempfile::TempDir, TaskStore) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = TaskStore::new(dir.path().join("Todo").join("todo.csv"));
        (dir, store)
    }

    fn seed(store: &TaskStore, contents: &str) {
        fs::create_dir_all(store.path().parent().expect("parent")).expect("dirs");
        fs::write(store.path(), contents).expect("seed");
    }

    fn titles(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|task| task.title.as_str()).collect()
    }

    fn positions(tasks: &[Task]) -> Vec<usize> {
        tasks.iter().map(|task| task.position).collect()
    }

    #[test]
    fn append_to_fresh_store_creates_file_with_header() {
        let (_dir, store) = setup_store();

        let task = store.append(&["Buy", "milk"]).expect("append");
        assert_eq!(task, Task::new(1, "Buy milk"));

        let contents = fs::read_to_string(store.path()).expect("read");
        assert_eq!(contents, "Index,Title,Done\n1,Buy milk,false\n");
    }

    #[test]
    fn append_with_no_words_gives_empty_title() {
        let (_dir, store) = setup_store();
        let words: [&str; 0] = [];
        let task = store.append(&words).expect("append");
        assert_eq!(task.title, "");
        assert_eq!(store.list().expect("list"), vec![task]);
    }

    #[test]
    fn append_uses_parsed_count_for_position() {
        let (_dir, store) = setup_store();
        seed(&store, "Index,Title,Done\n1,A,false\n\n2,B,true\n");

        let task = store.append(&["C"]).expect("append");
        assert_eq!(task.position, 3);
    }

    #[test]
    fn append_heals_zero_byte_file() {
        let (_dir, store) = setup_store();
        seed(&store, "");

        let task = store.append(&["A"]).expect("append");
        assert_eq!(task.position, 1);
        let contents = fs::read_to_string(store.path()).expect("read");
        assert!(contents.starts_with("Index,Title,Done\n"));
    }

    #[test]
    fn list_of_missing_file_is_empty_and_does_not_create_it() {
        let (_dir, store) = setup_store();
        assert!(store.list().expect("list").is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn delete_reindexes_following_tasks() {
        let (_dir, store) = setup_store();
        for title in ["A", "B", "C"] {
            store.append(&[title]).expect("append");
        }

        let removed = store.delete(2).expect("delete");
        assert_eq!(removed, Task::new(2, "B"));

        let tasks = store.list().expect("list");
        assert_eq!(titles(&tasks), vec!["A", "C"]);
        assert_eq!(positions(&tasks), vec![1, 2]);
    }

    #[test]
    fn delete_returns_done_state() {
        let (_dir, store) = setup_store();
        seed(&store, "Index,Title,Done\n1,Learn Go,true\n2,Write tests,false\n");

        let removed = store.delete(1).expect("delete");
        assert_eq!(
            removed,
            Task {
                position: 1,
                title: "Learn Go".to_string(),
                done: true,
            }
        );
        assert_eq!(store.list().expect("list"), vec![Task::new(1, "Write tests")]);
    }

    #[test]
    fn delete_last_task_keeps_header() {
        let (_dir, store) = setup_store();
        store.append(&["only"]).expect("append");
        store.delete(1).expect("delete");

        let contents = fs::read_to_string(store.path()).expect("read");
        assert_eq!(contents, "Index,Title,Done\n");
    }

    #[test]
    fn out_of_range_leaves_file_untouched() {
        let (_dir, store) = setup_store();
        store.append(&["A"]).expect("append");
        store.append(&["B"]).expect("append");
        let before = fs::read(store.path()).expect("read");

        for result in [
            store.delete(5),
            store.delete(0),
            store.mark_done(3),
            store.update_text(9, &["x"]),
        ] {
            assert!(matches!(
                result,
                Err(Error::OutOfRange { count: 2, .. })
            ));
        }
        assert_eq!(fs::read(store.path()).expect("read"), before);
    }

    #[test]
    fn mutations_on_missing_file_do_not_create_it() {
        let (_dir, store) = setup_store();
        assert!(matches!(
            store.mark_done(1),
            Err(Error::OutOfRange { position: 1, count: 0 })
        ));
        assert!(!store.path().exists());
    }

    #[test]
    fn mark_done_is_idempotent() {
        let (_dir, store) = setup_store();
        store.append(&["A"]).expect("append");

        let first = store.mark_done(1).expect("done");
        let after_first = fs::read(store.path()).expect("read");
        let second = store.mark_done(1).expect("done again");

        assert!(first.done);
        assert_eq!(first, second);
        assert_eq!(fs::read(store.path()).expect("read"), after_first);
    }

    #[test]
    fn update_text_replaces_title_only() {
        let (_dir, store) = setup_store();
        store.append(&["A"]).expect("append");
        store.mark_done(1).expect("done");

        let updated = store.update_text(1, &["New", "Title"]).expect("update");
        assert_eq!(
            updated,
            Task {
                position: 1,
                title: "New Title".to_string(),
                done: true,
            }
        );
    }

    #[test]
    fn append_keeps_words_verbatim() {
        let (_dir, store) = setup_store();

        let spaced = store.append(&["a", "", "b"]).expect("append");
        let indented = store.append(&["  indented", "x"]).expect("append");
        assert_eq!(spaced.title, "a  b");
        assert_eq!(indented.title, "  indented x");
        assert_eq!(
            titles(&store.list().expect("list")),
            vec!["a  b", "  indented x"]
        );
    }

    #[test]
    fn update_text_trims_only_the_ends() {
        let (_dir, store) = setup_store();
        store.append(&["A"]).expect("append");

        let updated = store
            .update_text(1, &["  New", "", "Title  "])
            .expect("update");
        assert_eq!(updated.title, "New  Title");
    }

    #[test]
    fn list_reports_file_order_positions() {
        let (_dir, store) = setup_store();
        seed(&store, "Index,Title,Done\n1,A,false\n4,B,false\n9,C,true\n");

        let tasks = store.list().expect("list");
        assert_eq!(positions(&tasks), vec![1, 2, 3]);
        assert_eq!(titles(&tasks), vec!["A", "B", "C"]);

        let removed = store.delete(2).expect("delete");
        assert_eq!(removed, Task::new(2, "B"));
        assert_eq!(
            fs::read_to_string(store.path()).expect("read"),
            "Index,Title,Done\n1,A,false\n2,C,true\n"
        );
    }

    #[test]
    fn malformed_row_aborts_without_writing() {
        let (_dir, store) = setup_store();
        let contents = "Index,Title,Done\n1,A,false\nnope,B,false\n";
        seed(&store, contents);

        assert!(matches!(store.list(), Err(Error::Parse { line: 3, .. })));
        assert!(matches!(store.append(&["C"]), Err(Error::Parse { .. })));
        assert_eq!(fs::read_to_string(store.path()).expect("read"), contents);
    }
}
