use std::path::Path;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use hookguard_core::Config;
use hookguard_core::paths::{project_config_file, resolve_project_root};

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write the commented default config to the project config path
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Print the effective configuration as TOML
    Show,

    /// Print the config file that would be loaded
    Path,
}

pub fn run(args: ConfigArgs, explicit: Option<&Path>) -> Result<()> {
    let root = resolve_project_root(None);
    match args.command {
        ConfigCommands::Init { force } => init(explicit, &root, force),
        ConfigCommands::Show => show(explicit, &root),
        ConfigCommands::Path => path(explicit, &root),
    }
}

fn init(explicit: Option<&Path>, root: &Path, force: bool) -> Result<()> {
    let target = explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| project_config_file(root));

    if force && target.exists() {
        std::fs::remove_file(&target)
            .with_context(|| format!("Failed to remove {}", target.display()))?;
    }
    Config::write_template(&target)
        .with_context(|| format!("Failed to write {}", target.display()))?;

    println!("Created {}", target.display());
    Ok(())
}

fn show(explicit: Option<&Path>, root: &Path) -> Result<()> {
    let config = Config::load(explicit, root);
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

fn path(explicit: Option<&Path>, root: &Path) -> Result<()> {
    match Config::resolve_path(explicit, root) {
        Some(path) => println!("{}", path.display()),
        None => println!("(none, using defaults)"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_refuses_to_overwrite_without_force() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("hookguard.toml");
        std::fs::write(&target, "# mine").unwrap();

        assert!(init(Some(target.as_path()), temp.path(), false).is_err());
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "# mine");

        init(Some(target.as_path()), temp.path(), true).unwrap();
        let written = Config::load_from(&target).unwrap();
        assert_eq!(written, Config::default());
    }

    #[test]
    fn test_init_creates_project_config() {
        let temp = TempDir::new().unwrap();
        init(None, temp.path(), false).unwrap();
        assert!(project_config_file(temp.path()).exists());
    }

    #[test]
    fn test_effective_config_serializes() {
        let config = Config::load(None, TempDir::new().unwrap().path());
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains("[git]"));
    }
}
