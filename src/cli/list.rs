//! `tasks list` command implementation

use anyhow::Result;
use clap::Args;
use crossterm::style::{style, Color, Stylize};
use serde::Serialize;
use std::io::IsTerminal;
use std::path::PathBuf;

use crate::config::Config;
use crate::task::Task;

const TABLE_COL_NUMBER: usize = 4;
const TABLE_COL_STATUS: usize = 8;
const TABLE_COL_DUE: usize = 16;
const TABLE_COL_DESCRIPTION: usize = 48;

#[derive(Args, Default)]
pub struct ListArgs {
    /// Only show tasks that are not done yet
    #[arg(short, long)]
    pending: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct TaskJson<'a> {
    number: usize,
    #[serde(flatten)]
    task: &'a Task,
}

struct TableStyle {
    color: bool,
    show_index: bool,
}

/// Rows to show: 1-based number in the full list plus the task.
pub fn select_rows(tasks: &[Task], pending_only: bool) -> Vec<(usize, &Task)> {
    tasks
        .iter()
        .enumerate()
        .filter(|(_, t)| !pending_only || t.is_pending())
        .map(|(i, t)| (i + 1, t))
        .collect()
}

fn print_table_header(table: &TableStyle) {
    let mut header = String::new();
    let mut width = TABLE_COL_STATUS + TABLE_COL_DUE + TABLE_COL_DESCRIPTION + 2;
    if table.show_index {
        header.push_str(&format!("{:<w$} ", "#", w = TABLE_COL_NUMBER));
        width += TABLE_COL_NUMBER + 1;
    }
    header.push_str(&format!(
        "{:<ws$} {:<wd$} DESCRIPTION",
        "STATUS",
        "DUE",
        ws = TABLE_COL_STATUS,
        wd = TABLE_COL_DUE
    ));
    println!("{}", header);
    println!("{}", "-".repeat(width));
}

fn print_table_row(table: &TableStyle, number: usize, task: &Task) {
    let status = format!("{:<w$}", task.status_label(), w = TABLE_COL_STATUS);
    let status = if table.color {
        let color = if task.done { Color::Green } else { Color::Red };
        style(status).with(color).to_string()
    } else {
        status
    };

    let due = super::truncate(&task.due_date, TABLE_COL_DUE);
    let description = super::truncate(&task.description, TABLE_COL_DESCRIPTION);

    if table.show_index {
        print!("{:<w$} ", number, w = TABLE_COL_NUMBER);
    }
    println!("{} {:<wd$} {}", status, due, description, wd = TABLE_COL_DUE);
}

pub async fn run(file: Option<PathBuf>, config: &Config, args: ListArgs) -> Result<()> {
    let store = super::open_store(file, config)?;
    let rows = select_rows(store.tasks(), args.pending);

    if args.json {
        let tasks: Vec<TaskJson> = rows
            .iter()
            .map(|(number, task)| TaskJson {
                number: *number,
                task,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    if rows.is_empty() {
        if args.pending && !store.is_empty() {
            println!("Nothing pending.");
        } else {
            println!("No tasks yet. Add one with `tasks add <DESCRIPTION> <DUE>`.");
        }
        return Ok(());
    }

    let table = TableStyle {
        color: config.display.color && std::io::stdout().is_terminal(),
        show_index: config.display.show_index,
    };

    print_table_header(&table);
    for (number, task) in &rows {
        print_table_row(&table, *number, task);
    }

    let pending = store.pending().len();
    println!("\nTotal: {} tasks, {} pending", store.len(), pending);

    Ok(())
}
