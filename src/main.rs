//! tasks - record tasks with a due date and mark them done

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tasklist::cli::{self, Cli, Commands};
use tasklist::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::var("TASKLIST_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("tasklist=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();

    // Completions don't need config or the task file.
    if let Some(Commands::Completion { shell }) = cli.command {
        generate(shell, &mut Cli::command(), "tasks", &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::load()?;
    let file = cli.file;

    match cli.command {
        Some(Commands::Add(args)) => cli::add::run(file, &config, args).await,
        Some(Commands::List(args)) => cli::list::run(file, &config, args).await,
        Some(Commands::Done(args)) => cli::done::run(file, &config, args).await,
        Some(Commands::Path) => cli::run_path(file, &config).await,
        None => cli::list::run(file, &config, cli::list::ListArgs::default()).await,
        Some(Commands::Completion { .. }) => unreachable!(),
    }
}
