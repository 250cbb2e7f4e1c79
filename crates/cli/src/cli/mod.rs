pub mod config;
pub mod hook;
pub mod install;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hookguard_core::env::HOOKGUARD_CONFIG;

#[derive(Parser)]
#[command(name = "hookguard")]
#[command(author, version, about = "Lifecycle hooks for AI coding assistants", long_about = None)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file to use instead of the project/global lookup
    #[arg(short, long, global = true, env = HOOKGUARD_CONFIG)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one hook: JSON payload on stdin, response on stdout
    Run(hook::RunArgs),

    /// Print the settings.json `hooks` block registering every hook
    Install(install::InstallArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}
