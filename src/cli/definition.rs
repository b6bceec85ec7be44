//! Top-level clap definitions for the `tasks` binary

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::add::AddArgs;
use super::done::DoneArgs;
use super::list::ListArgs;

#[derive(Parser)]
#[command(name = "tasks")]
#[command(about = "Record tasks with a due date, list them and mark them done")]
#[command(version)]
pub struct Cli {
    /// Task file to use instead of the configured one
    #[arg(long, global = true, env = "TASKLIST_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    #[command(alias = "new")]
    Add(AddArgs),

    /// List tasks (default when no command is given)
    #[command(alias = "ls")]
    List(ListArgs),

    /// Mark a task as done
    Done(DoneArgs),

    /// Print the task file location
    Path,

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
