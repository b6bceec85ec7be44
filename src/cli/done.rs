//! `tasks done` command implementation

use anyhow::{bail, Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use crate::config::Config;

#[derive(Args)]
pub struct DoneArgs {
    /// Task number as shown by `tasks list`
    number: usize,
}

/// Convert a 1-based list number into a store index.
pub fn number_to_index(number: usize, len: usize) -> Result<usize> {
    if number == 0 || number > len {
        if len == 0 {
            bail!("No task #{}: the list is empty", number);
        }
        bail!("No task #{}: choose a number between 1 and {}", number, len);
    }
    Ok(number - 1)
}

pub async fn run(file: Option<PathBuf>, config: &Config, args: DoneArgs) -> Result<()> {
    let mut store = super::open_store(file, config)?;
    let index = number_to_index(args.number, store.len())?;

    let description = store.mark_done(index)?.description.clone();
    store
        .save()
        .with_context(|| format!("Failed to save tasks to {}", store.path().display()))?;
    info!("Marked task #{} done", args.number);

    println!("Task '{}' marked as done", description);
    Ok(())
}
