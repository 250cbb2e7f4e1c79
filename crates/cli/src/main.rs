use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

mod cli;

use cli::{Cli, Commands};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // stdout carries the hook response, so logs go to stderr.
    // "error" by default keeps swallowed enrichment failures quiet; "debug" with --verbose
    let log_level = if cli.verbose { "debug" } else { "error" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Hooks are short-lived; a single-threaded runtime is enough for the git probes
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async_main(cli))
}

async fn async_main(cli: Cli) -> Result<ExitCode> {
    let config = cli.config.as_deref();
    match cli.command {
        Commands::Run(args) => crate::cli::hook::run(args, config).await,
        Commands::Install(args) => crate::cli::install::run(args).map(|_| ExitCode::SUCCESS),
        Commands::Config(args) => crate::cli::config::run(args, config).map(|_| ExitCode::SUCCESS),
    }
}
