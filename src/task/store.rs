//! Task storage - flat file persistence, one record per line

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::error::{Result, TaskError};
use super::model::Task;

pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Open the store at `path`, creating an empty file if there is none yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if !path.exists() {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| TaskError::io(parent, e))?;
            }
            fs::write(&path, "").map_err(|e| TaskError::io(&path, e))?;
            debug!("Created empty task file at {}", path.display());
            return Ok(Self {
                path,
                tasks: Vec::new(),
            });
        }

        let content = fs::read_to_string(&path).map_err(|e| TaskError::io(&path, e))?;
        let tasks = parse_records(&content)?;
        debug!("Loaded {} tasks from {}", tasks.len(), path.display());

        Ok(Self { path, tasks })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a task at the end of the list
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// All tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks not yet done, each paired with its index in the full list
    pub fn pending(&self) -> Vec<(usize, &Task)> {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_pending())
            .collect()
    }

    /// Mark the task at `index` (0-based, full list) as done
    pub fn mark_done(&mut self, index: usize) -> Result<&Task> {
        let len = self.tasks.len();
        let task = self
            .tasks
            .get_mut(index)
            .ok_or(TaskError::IndexOutOfRange { index, len })?;
        task.mark_done();
        Ok(&*task)
    }

    /// Rewrite the whole file from the in-memory list
    pub fn save(&self) -> Result<()> {
        if self.path.exists() {
            let backup_path = backup_path(&self.path);
            if let Err(e) = fs::copy(&self.path, &backup_path) {
                warn!("Failed to create backup: {}", e);
            }
        }

        fs::write(&self.path, render_records(&self.tasks))
            .map_err(|e| TaskError::io(&self.path, e))?;
        debug!("Saved {} tasks to {}", self.tasks.len(), self.path.display());
        Ok(())
    }
}

fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}

/// Parse file content in order. Blank lines are skipped.
fn parse_records(content: &str) -> Result<Vec<Task>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            Task::from_line(line).map_err(|e| match e {
                TaskError::MalformedRecord {
                    fields, content, ..
                } => TaskError::MalformedRecord {
                    line: i + 1,
                    fields,
                    content,
                },
                other => other,
            })
        })
        .collect()
}

fn render_records(tasks: &[Task]) -> String {
    let mut output = String::new();
    for task in tasks {
        output.push_str(&task.to_line());
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn task(description: &str, due: &str) -> Task {
        Task::new(description, due).unwrap()
    }

    #[test]
    fn test_open_missing_file_creates_it() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("nested").join("tasks.txt");

        let store = TaskStore::open(&path)?;

        assert!(store.is_empty());
        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path)?, "");
        Ok(())
    }

    #[test]
    fn test_open_reads_records_in_order() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("tasks.txt");
        fs::write(&path, "first;mon;False\nsecond;tue;True\nthird;wed;False\n")?;

        let store = TaskStore::open(&path)?;

        let names: Vec<&str> = store.tasks().iter().map(|t| t.description.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
        assert!(store.tasks()[1].done);
        Ok(())
    }

    #[test]
    fn test_open_skips_blank_lines() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("tasks.txt");
        fs::write(&path, "\na;b;False\n   \nc;d;True\n\n")?;

        let store = TaskStore::open(&path)?;
        assert_eq!(store.len(), 2);
        Ok(())
    }

    #[test]
    fn test_open_reports_malformed_line_number() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("tasks.txt");
        fs::write(&path, "a;b;False\n\nbroken line\n")?;

        match TaskStore::open(&path) {
            Err(TaskError::MalformedRecord { line, fields, .. }) => {
                assert_eq!(line, 3);
                assert_eq!(fields, 1);
            }
            Err(other) => panic!("expected MalformedRecord, got {other}"),
            Ok(_) => panic!("expected MalformedRecord, got a store"),
        }
        Ok(())
    }

    #[test]
    fn test_pending_keeps_full_list_indices() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let mut store = TaskStore::open(temp.path().join("tasks.txt"))?;
        store.add(task("a", "1"));
        store.add(task("b", "2"));
        store.add(task("c", "3"));
        store.mark_done(1)?;

        let pending: Vec<(usize, &str)> = store
            .pending()
            .into_iter()
            .map(|(i, t)| (i, t.description.as_str()))
            .collect();
        assert_eq!(pending, vec![(0, "a"), (2, "c")]);
        Ok(())
    }

    #[test]
    fn test_mark_done_out_of_range() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let mut store = TaskStore::open(temp.path().join("tasks.txt"))?;
        store.add(task("a", "1"));

        assert!(matches!(
            store.mark_done(1),
            Err(TaskError::IndexOutOfRange { index: 1, len: 1 })
        ));
        assert!(store.tasks()[0].is_pending());
        Ok(())
    }

    #[test]
    fn test_save_then_open_preserves_tasks() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("tasks.txt");

        let mut store = TaskStore::open(&path)?;
        store.add(task("Write report", "Friday"));
        store.add(task("Call Bob", "2024-01-02"));
        store.mark_done(0)?;
        store.save()?;

        assert_eq!(
            fs::read_to_string(&path)?,
            "Write report;Friday;True\nCall Bob;2024-01-02;False\n"
        );

        let reopened = TaskStore::open(&path)?;
        assert_eq!(reopened.tasks(), store.tasks());
        Ok(())
    }

    #[test]
    fn test_save_writes_backup_of_previous_content() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("tasks.txt");
        fs::write(&path, "old;x;False\n")?;

        let mut store = TaskStore::open(&path)?;
        store.add(task("new", "y"));
        store.save()?;

        let backup = fs::read_to_string(temp.path().join("tasks.txt.bak"))?;
        assert_eq!(backup, "old;x;False\n");
        Ok(())
    }
}
