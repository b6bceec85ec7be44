//! `tasks add` command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use crate::config::Config;
use crate::task::Task;

#[derive(Args)]
pub struct AddArgs {
    /// What needs doing
    description: String,

    /// Due date, free text (e.g. 2024-06-01, "next friday")
    due: String,
}

pub async fn run(file: Option<PathBuf>, config: &Config, args: AddArgs) -> Result<()> {
    let task = Task::new(args.description.trim(), args.due.trim())?;

    let mut store = super::open_store(file, config)?;
    store.add(task.clone());
    store
        .save()
        .with_context(|| format!("Failed to save tasks to {}", store.path().display()))?;
    info!("Added task #{}", store.len());

    println!("Added #{}: {}", store.len(), task);
    Ok(())
}
