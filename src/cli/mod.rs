//! CLI command implementations

pub mod add;
pub mod definition;
pub mod done;
pub mod list;

pub use definition::{Cli, Commands};

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::debug;

use crate::config::Config;
use crate::task::TaskStore;

/// Resolve the task file: explicit flag/env first, then config, then default.
pub fn resolve_tasks_path(file: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    match file {
        Some(path) => Ok(path),
        None => config.tasks_path(),
    }
}

pub fn open_store(file: Option<PathBuf>, config: &Config) -> Result<TaskStore> {
    let path = resolve_tasks_path(file, config)?;
    debug!("Using task file {}", path.display());
    TaskStore::open(&path).with_context(|| format!("Failed to open tasks at {}", path.display()))
}

pub async fn run_path(file: Option<PathBuf>, config: &Config) -> Result<()> {
    println!("{}", resolve_tasks_path(file, config)?.display());
    Ok(())
}

pub fn truncate(s: &str, max: usize) -> String {
    let count = s.chars().count();
    if count <= max {
        s.to_string()
    } else if max <= 3 {
        s.chars().take(max).collect()
    } else {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    }
}
