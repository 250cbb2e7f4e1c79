//! `git` subprocess probe with a per-query timeout

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, warn};

use super::{VcsProbe, WorkingTreeStatus};

/// Runs `git` in the project root. Each query is killed once `timeout`
/// elapses.
#[derive(Debug, Clone)]
pub struct GitCli {
    workdir: PathBuf,
    timeout: Duration,
}

impl GitCli {
    pub fn new(workdir: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            workdir: workdir.into(),
            timeout,
        }
    }

    /// Stdout of a successful `git` run, `None` otherwise.
    async fn run(&self, args: &[&str]) -> Option<String> {
        let result = timeout(
            self.timeout,
            Command::new("git")
                .args(args)
                .current_dir(&self.workdir)
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::null())
                .kill_on_drop(true)
                .output(),
        )
        .await;

        match result {
            Ok(Ok(output)) if output.status.success() => String::from_utf8(output.stdout).ok(),
            Ok(Ok(output)) => {
                debug!(
                    "git {} exited with code {}",
                    args.join(" "),
                    output.status.code().unwrap_or(-1)
                );
                None
            }
            Ok(Err(e)) => {
                debug!("Failed to spawn git: {}", e);
                None
            }
            Err(_) => {
                warn!(
                    "git {} timed out after {}ms",
                    args.join(" "),
                    self.timeout.as_millis()
                );
                None
            }
        }
    }
}

#[async_trait]
impl VcsProbe for GitCli {
    async fn current_branch(&self) -> Option<String> {
        let out = self.run(&["rev-parse", "--abbrev-ref", "HEAD"]).await?;
        let branch = out.trim();
        match branch {
            "" => None,
            "HEAD" => Some("HEAD (detached)".to_string()),
            name => Some(name.to_string()),
        }
    }

    async fn status(&self) -> Option<WorkingTreeStatus> {
        let out = self.run(&["status", "--porcelain"]).await?;
        Some(WorkingTreeStatus::parse(&out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_outside_repository_is_unavailable() {
        let temp = TempDir::new().unwrap();
        let git = GitCli::new(temp.path(), Duration::from_secs(3));
        assert!(git.status().await.is_none());
        assert!(git.current_branch().await.is_none());
    }

    #[tokio::test]
    async fn test_zero_timeout_is_unavailable() {
        let temp = TempDir::new().unwrap();
        let git = GitCli::new(temp.path(), Duration::ZERO);
        assert!(git.status().await.is_none());
    }

    #[tokio::test]
    async fn test_missing_workdir_is_unavailable() {
        let git = GitCli::new("/nonexistent/workspace", Duration::from_secs(3));
        assert!(git.current_branch().await.is_none());
    }
}
