//! xtask - build helpers for the `tasks` binary: CLI reference and completions

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate_to, Shell};
use std::fs;
use std::path::{Path, PathBuf};

use tasklist::cli::Cli;

const BIN_NAME: &str = "tasks";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build helpers for tasklist")]
struct Xtask {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the command reference to docs/cli/reference.md
    GenDocs {
        #[arg(long, default_value = "docs/cli")]
        out_dir: PathBuf,
    },

    /// Write completion scripts for every supported shell
    GenCompletions {
        #[arg(long, default_value = "target/completions")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().command {
        Commands::GenDocs { out_dir } => write_reference(&out_dir),
        Commands::GenCompletions { out_dir } => write_completions(&out_dir),
    }
}

fn write_reference(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let path = out_dir.join("reference.md");
    fs::write(&path, clap_markdown::help_markdown::<Cli>())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Wrote {}", path.display());
    Ok(())
}

fn write_completions(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let mut command = Cli::command();
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell] {
        let path = generate_to(shell, &mut command, BIN_NAME, out_dir)
            .with_context(|| format!("Failed to write {} completions", shell))?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}
