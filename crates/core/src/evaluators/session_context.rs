//! Re-inject project memory at session start and after compaction (`SessionStart`).
//!
//! The context block is assembled from independent pieces, each of which may
//! be unavailable:
//!
//! 1. environment facts (working directory, branch, working-tree counts, stack)
//! 2. one block per configured memory-file section, in config order
//! 3. the previous session's handoff from the session cache
//!
//! Nothing here can fail the invocation; a missing piece is left out, and if
//! every piece is missing no output is written.

use std::path::Path;

use crate::config::MemoryConfig;
use crate::contract::{HookEvent, HookOutput};
use crate::memory::MemoryStore;
use crate::stack::detect_stack;
use crate::vcs::{VcsProbe, WorkingTreeStatus};

/// Facts derived from the project root and version control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentFacts {
    pub working_dir: Option<String>,
    pub branch: Option<String>,
    pub status: Option<WorkingTreeStatus>,
    pub stack: Vec<&'static str>,
}

impl EnvironmentFacts {
    pub async fn gather(root: &Path, vcs: &dyn VcsProbe) -> Self {
        Self {
            working_dir: Some(root.display().to_string()),
            branch: vcs.current_branch().await,
            status: vcs.status().await,
            stack: detect_stack(root),
        }
    }

    pub fn render(&self) -> Option<String> {
        let mut lines = Vec::new();
        if let Some(dir) = &self.working_dir {
            lines.push(format!("  - Working directory: {dir}"));
        }
        if let Some(branch) = &self.branch {
            lines.push(format!("  - Branch: {branch}"));
        }
        if let Some(status) = &self.status {
            if status.is_clean() {
                lines.push("  - Working tree: clean".to_string());
            } else {
                lines.push(format!(
                    "  - Working tree: {} modified, {} untracked",
                    status.modified, status.untracked
                ));
            }
        }
        if !self.stack.is_empty() {
            lines.push(format!("  - Stack: {}", self.stack.join(", ")));
        }

        if lines.is_empty() {
            return None;
        }
        Some(format!("Environment:\n{}", lines.join("\n")))
    }
}

pub fn evaluate(
    env: &EnvironmentFacts,
    store: &MemoryStore,
    memory: &MemoryConfig,
) -> Option<HookOutput> {
    let mut blocks: Vec<String> = Vec::new();
    blocks.extend(env.render());
    blocks.extend(memory.sections.iter().filter_map(|rule| store.section(rule)));
    blocks.extend(
        store
            .handoff(&memory.cache_file)
            .and_then(|handoff| handoff.render()),
    );

    if blocks.is_empty() {
        return None;
    }
    Some(HookOutput::context(HookEvent::SessionStart, blocks.join("\n\n")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vcs::MockVcsProbe;
    use std::fs;
    use tempfile::TempDir;

    fn memory_fixture() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("MEMORY.md"),
            "# Memory\n\n## Session Notes\n- one\n- two\n- three\n\n## Other\n- not injected\n",
        )
        .unwrap();
        fs::write(
            temp.path().join("POLARIS.md"),
            "## North Star\nReliable hooks.\n## Current Focus\n<!-- fill in -->\n",
        )
        .unwrap();
        fs::write(
            temp.path().join("session-cache.json"),
            r#"{"lastSession":{"done":"config loader","next":"install command"}}"#,
        )
        .unwrap();
        temp
    }

    #[tokio::test]
    async fn test_gather_environment() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Cargo.toml"), "[package]").unwrap();

        let mut vcs = MockVcsProbe::new();
        vcs.expect_current_branch()
            .returning(|| Some("feature/hooks".to_string()));
        vcs.expect_status().returning(|| {
            Some(WorkingTreeStatus {
                modified: 2,
                untracked: 1,
            })
        });

        let env = EnvironmentFacts::gather(temp.path(), &vcs).await;
        let rendered = env.render().unwrap();
        assert!(rendered.starts_with("Environment:\n  - Working directory: "));
        assert!(rendered.contains("  - Branch: feature/hooks"));
        assert!(rendered.contains("  - Working tree: 2 modified, 1 untracked"));
        assert!(rendered.ends_with("  - Stack: Rust"));
    }

    #[tokio::test]
    async fn test_unavailable_vcs_omits_lines() {
        let temp = TempDir::new().unwrap();
        let mut vcs = MockVcsProbe::new();
        vcs.expect_current_branch().returning(|| None);
        vcs.expect_status().returning(|| None);

        let env = EnvironmentFacts::gather(temp.path(), &vcs).await;
        let rendered = env.render().unwrap();
        assert!(!rendered.contains("Branch"));
        assert!(!rendered.contains("Working tree"));
        assert!(!rendered.contains("Stack"));
    }

    #[test]
    fn test_clean_tree_rendering() {
        let env = EnvironmentFacts {
            status: Some(WorkingTreeStatus::default()),
            ..Default::default()
        };
        assert_eq!(env.render().unwrap(), "Environment:\n  - Working tree: clean");
    }

    #[test]
    fn test_full_context_block() {
        let temp = memory_fixture();
        let env = EnvironmentFacts {
            working_dir: Some("/repo".to_string()),
            branch: Some("main".to_string()),
            ..Default::default()
        };

        let out = evaluate(&env, &MemoryStore::new(temp.path()), &MemoryConfig::default()).unwrap();
        assert_eq!(out.hook_specific_output.hook_event_name, HookEvent::SessionStart);
        assert_eq!(
            out.hook_specific_output.additional_context.as_deref(),
            Some(
                "Environment:\n  - Working directory: /repo\n  - Branch: main\n\n\
                 Recent session notes:\n- one\n- two\n- three\n\n\
                 Polaris:\nReliable hooks.\n\n\
                 Last session handoff:\n  - Done: config loader\n  - Next: install command"
            )
        );
    }

    #[test]
    fn test_nothing_available_means_no_output() {
        let temp = TempDir::new().unwrap();
        let out = evaluate(
            &EnvironmentFacts::default(),
            &MemoryStore::new(temp.path().join("missing")),
            &MemoryConfig::default(),
        );
        assert!(out.is_none());
    }

    #[test]
    fn test_identical_state_gives_identical_output() {
        let temp = memory_fixture();
        let store = MemoryStore::new(temp.path());
        let env = EnvironmentFacts::default();
        let first = evaluate(&env, &store, &MemoryConfig::default()).unwrap();
        let second = evaluate(&env, &store, &MemoryConfig::default()).unwrap();
        assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
    }
}
