//! Hook evaluation engine

use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Config;
use crate::contract::{HookInput, HookKind, HookOutput, MalformedInputPolicy, read_input};
use crate::error::Result;
use crate::evaluators::{
    block_secrets, commit_reminder, post_commit, session_context, skill_evaluator, tdd_guard,
};
use crate::memory::MemoryStore;
use crate::paths::resolve_project_root;
use crate::rules::Rules;
use crate::vcs::{GitCli, VcsProbe};

/// Read and decode the payload under `kind`'s malformed-input policy.
///
/// `Ok(None)` means the hook should exit quietly without evaluating.
/// Errors are only returned for [`MalformedInputPolicy::Fatal`] hooks.
pub fn decode_input<R: Read>(kind: HookKind, reader: R) -> Result<Option<HookInput>> {
    let decoded = read_input(reader).and_then(|raw| HookInput::parse(&raw));
    match decoded {
        Ok(input) => Ok(Some(input)),
        Err(e) => match kind.malformed_input() {
            MalformedInputPolicy::Fatal => Err(e),
            MalformedInputPolicy::Silent => {
                debug!("Hook '{}' ignoring malformed input: {}", kind, e);
                Ok(None)
            }
            MalformedInputPolicy::Ignore => Ok(Some(HookInput::default())),
        },
    }
}

/// Everything one invocation needs: config, compiled rules, project root and
/// a version-control probe.
pub struct HookEngine {
    config: Config,
    rules: Rules,
    project_root: PathBuf,
    vcs: Box<dyn VcsProbe>,
}

impl HookEngine {
    /// Engine backed by the `git` CLI in `project_root`.
    pub fn new(config: Config, project_root: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        let vcs = Box::new(GitCli::new(&project_root, config.git_timeout()));
        Self::with_vcs(config, project_root, vcs)
    }

    pub fn with_vcs(config: Config, project_root: impl Into<PathBuf>, vcs: Box<dyn VcsProbe>) -> Self {
        let rules = Rules::from_config(&config);
        Self {
            config,
            rules,
            project_root: project_root.into(),
            vcs,
        }
    }

    /// Resolve the project root from the payload and load its config.
    pub fn for_input(input: &HookInput, explicit_config: Option<&Path>) -> Self {
        let root = resolve_project_root(input.cwd());
        let config = Config::load(explicit_config, &root);
        Self::new(config, root)
    }

    /// Run the evaluator for `kind`. `None` means "no opinion".
    pub async fn evaluate(&self, kind: HookKind, input: &HookInput) -> Option<HookOutput> {
        debug!("Running hook '{}' for tool '{}'", kind, input.tool_name());
        let output = match kind {
            HookKind::BlockSecrets => block_secrets::evaluate(input, &self.rules.secrets),
            HookKind::TddGuard => tdd_guard::evaluate(input, &self.rules.source),
            HookKind::SkillEvaluator => skill_evaluator::evaluate(input, &self.rules.skills),
            HookKind::CommitReminder => {
                commit_reminder::evaluate(input, &self.rules.test_commands, self.vcs.as_ref()).await
            }
            HookKind::PostCommitLessons => post_commit::evaluate(input, &self.rules.git_commit),
            HookKind::SessionContext => {
                let env =
                    session_context::EnvironmentFacts::gather(&self.project_root, self.vcs.as_ref())
                        .await;
                let store = MemoryStore::new(self.config.memory_dir(&self.project_root));
                session_context::evaluate(&env, &store, &self.config.memory)
            }
        };

        match &output {
            Some(out) if out.is_deny() => debug!("Hook '{}' denied the operation", kind),
            Some(_) => debug!("Hook '{}' produced advisory output", kind),
            None => debug!("Hook '{}' has no opinion", kind),
        }
        output
    }
}
