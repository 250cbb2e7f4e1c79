//! Version-control queries used to enrich hook output.
//!
//! Every query is optional: `None` means "unavailable" (not a repository,
//! git missing, timed out) and the caller leaves that fact out.

mod git;

pub use git::GitCli;

use async_trait::async_trait;

/// Summary of `git status --porcelain`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkingTreeStatus {
    pub modified: usize,
    pub untracked: usize,
}

impl WorkingTreeStatus {
    /// Classify porcelain lines by their leading marker: `??` is untracked,
    /// anything else is a change to a tracked path.
    pub fn parse(porcelain: &str) -> Self {
        porcelain
            .lines()
            .filter(|line| !line.trim().is_empty())
            .fold(Self::default(), |mut acc, line| {
                if line.starts_with("??") {
                    acc.untracked += 1;
                } else {
                    acc.modified += 1;
                }
                acc
            })
    }

    pub fn is_clean(&self) -> bool {
        self.modified == 0 && self.untracked == 0
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VcsProbe: Send + Sync {
    /// Current branch name, or `None` outside a repository
    async fn current_branch(&self) -> Option<String>;

    /// Working-tree status, or `None` when the query failed
    async fn status(&self) -> Option<WorkingTreeStatus>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_porcelain() {
        let status = WorkingTreeStatus::parse(" M src/lib.rs\nM  Cargo.toml\n?? notes.txt\nA  new.rs\n?? tmp/\n");
        assert_eq!(
            status,
            WorkingTreeStatus {
                modified: 3,
                untracked: 2
            }
        );
        assert!(!status.is_clean());
    }

    #[test]
    fn test_parse_clean_tree() {
        assert!(WorkingTreeStatus::parse("").is_clean());
        assert!(WorkingTreeStatus::parse("\n  \n").is_clean());
    }
}
