//! Task data model

use serde::Serialize;
use std::fmt;

use super::error::{Result, TaskError};

/// Field separator in a stored record
pub const DELIMITER: char = ';';

const DONE_TEXT: &str = "True";
const PENDING_TEXT: &str = "False";

/// A task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    /// What needs doing
    pub description: String,

    /// Due date as the user typed it; never parsed
    pub due_date: String,

    /// Completion flag
    pub done: bool,
}

impl Task {
    /// Create a new pending task
    pub fn new(description: impl Into<String>, due_date: impl Into<String>) -> Result<Self> {
        let description = description.into();
        let due_date = due_date.into();

        check_field("description", &description)?;
        check_field("due date", &due_date)?;

        Ok(Self {
            description,
            due_date,
            done: false,
        })
    }

    /// Mark task as done
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn is_pending(&self) -> bool {
        !self.done
    }

    /// Label used in listings
    pub fn status_label(&self) -> &'static str {
        if self.done {
            "Done"
        } else {
            "Pending"
        }
    }

    /// Format as a stored record: `description;due_date;True|False`
    pub fn to_line(&self) -> String {
        let status = if self.done { DONE_TEXT } else { PENDING_TEXT };
        format!(
            "{}{d}{}{d}{}",
            self.description,
            self.due_date,
            status,
            d = DELIMITER
        )
    }

    /// Parse a stored record. Only the text `True` marks a task done.
    ///
    /// Just the line ending is stripped; whitespace inside the description
    /// and due date is kept as written.
    pub fn from_line(line: &str) -> Result<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let fields: Vec<&str> = line.split(DELIMITER).collect();

        match fields.as_slice() {
            [description, due_date, status] => Ok(Self {
                description: description.to_string(),
                due_date: due_date.to_string(),
                done: status.trim() == DONE_TEXT,
            }),
            _ => Err(TaskError::MalformedRecord {
                line: 0,
                fields: fields.len(),
                content: line.to_string(),
            }),
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (due: {}) - {}",
            self.description,
            self.due_date,
            self.status_label()
        )
    }
}

fn check_field(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TaskError::EmptyField(field));
    }
    if value.contains([DELIMITER, '\n', '\r']) {
        return Err(TaskError::InvalidCharacter {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_is_pending() {
        let task = Task::new("Buy milk", "2024-05-01").unwrap();
        assert!(task.is_pending());
        assert_eq!(task.status_label(), "Pending");
    }

    #[test]
    fn test_mark_done_is_idempotent() {
        let mut task = Task::new("Buy milk", "tomorrow").unwrap();
        task.mark_done();
        task.mark_done();
        assert!(task.done);
        assert!(!task.is_pending());
    }

    #[test]
    fn test_new_rejects_empty_fields() {
        assert!(matches!(
            Task::new("", "tomorrow"),
            Err(TaskError::EmptyField("description"))
        ));
        assert!(matches!(
            Task::new("Buy milk", "   "),
            Err(TaskError::EmptyField("due date"))
        ));
    }

    #[test]
    fn test_new_rejects_delimiter_and_newlines() {
        assert!(matches!(
            Task::new("milk; eggs", "tomorrow"),
            Err(TaskError::InvalidCharacter { field: "description", .. })
        ));
        assert!(matches!(
            Task::new("milk", "mon\ntue"),
            Err(TaskError::InvalidCharacter { field: "due date", .. })
        ));
    }

    #[test]
    fn test_to_line() {
        let mut task = Task::new("Write report", "Friday").unwrap();
        assert_eq!(task.to_line(), "Write report;Friday;False");

        task.mark_done();
        assert_eq!(task.to_line(), "Write report;Friday;True");
    }

    #[test]
    fn test_from_line_status_text() {
        assert!(Task::from_line("a;b;True").unwrap().done);
        assert!(!Task::from_line("a;b;False").unwrap().done);
        // Anything other than the exact literal is pending
        assert!(!Task::from_line("a;b;true").unwrap().done);
        assert!(!Task::from_line("a;b;yes").unwrap().done);
    }

    #[test]
    fn test_from_line_strips_only_line_ending() {
        let task = Task::from_line("  Call Bob ; 2024-01-02 ;True\r\n").unwrap();
        assert_eq!(task.description, "  Call Bob ");
        assert_eq!(task.due_date, " 2024-01-02 ");
        assert!(task.done);
    }

    #[test]
    fn test_line_keeps_leading_whitespace() {
        for description in ["  indented", "trailing  ", "\u{c}form feed", "\u{85}nel"] {
            let task = Task::new(description, "mon").unwrap();
            assert_eq!(Task::from_line(&task.to_line()).unwrap(), task);
        }
    }

    #[test]
    fn test_from_line_wrong_field_count() {
        match Task::from_line("only;two") {
            Err(TaskError::MalformedRecord { fields, content, .. }) => {
                assert_eq!(fields, 2);
                assert_eq!(content, "only;two");
            }
            other => panic!("expected MalformedRecord, got {:?}", other),
        }
        assert!(Task::from_line("a;b;c;d").is_err());
    }

    #[test]
    fn test_display() {
        let mut task = Task::new("Pay rent", "1st").unwrap();
        assert_eq!(task.to_string(), "Pay rent (due: 1st) - Pending");
        task.mark_done();
        assert_eq!(task.to_string(), "Pay rent (due: 1st) - Done");
    }
}
