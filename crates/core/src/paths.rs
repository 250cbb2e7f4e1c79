//! Path resolution for the project root and config files

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::env::CLAUDE_PROJECT_DIR;

/// Project-local config file, relative to the project root
pub const PROJECT_CONFIG_FILE: &str = ".claude/hookguard.toml";

/// Resolve the project root for this invocation.
///
/// 1. `CLAUDE_PROJECT_DIR`, exported by the host
/// 2. the payload's `cwd`
/// 3. the process working directory
pub fn resolve_project_root(cwd_hint: Option<&str>) -> PathBuf {
    let from_env = std::env::var(CLAUDE_PROJECT_DIR)
        .ok()
        .filter(|s| !s.is_empty());
    root_from(from_env.as_deref(), cwd_hint)
}

fn root_from(env_dir: Option<&str>, cwd_hint: Option<&str>) -> PathBuf {
    env_dir
        .or(cwd_hint)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

pub fn project_config_file(root: &Path) -> PathBuf {
    root.join(PROJECT_CONFIG_FILE)
}

/// `~/.config/hookguard/config.toml` on Linux, platform equivalent elsewhere.
pub fn global_config_file() -> Option<PathBuf> {
    ProjectDirs::from("dev", "hookguard", "hookguard")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Expand `~` and anchor relative paths at `root`.
pub fn resolve_under(root: &Path, configured: &str) -> PathBuf {
    let expanded = PathBuf::from(shellexpand::tilde(configured).as_ref());
    if expanded.is_absolute() {
        expanded
    } else {
        root.join(expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_dir_wins_over_cwd() {
        assert_eq!(
            root_from(Some("/from/env"), Some("/from/payload")),
            PathBuf::from("/from/env")
        );
        assert_eq!(
            root_from(None, Some("/from/payload")),
            PathBuf::from("/from/payload")
        );
    }

    #[test]
    fn test_falls_back_to_current_dir() {
        let root = root_from(None, None);
        assert!(!root.as_os_str().is_empty());
    }

    #[test]
    fn test_resolve_under() {
        let root = Path::new("/repo");
        assert_eq!(resolve_under(root, "memory"), PathBuf::from("/repo/memory"));
        assert_eq!(resolve_under(root, "/abs/notes"), PathBuf::from("/abs/notes"));
    }

    #[test]
    fn test_project_config_file() {
        assert_eq!(
            project_config_file(Path::new("/repo")),
            PathBuf::from("/repo/.claude/hookguard.toml")
        );
    }
}
