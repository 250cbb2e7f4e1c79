//! The hooks this binary ships

use std::fmt;
use std::str::FromStr;

use super::event::HookEvent;
use crate::error::HookError;

/// One entry per hook the host can be configured to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookKind {
    BlockSecrets,
    TddGuard,
    SkillEvaluator,
    CommitReminder,
    PostCommitLessons,
    SessionContext,
}

/// What a hook does when stdin is not valid JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedInputPolicy {
    /// Diagnostic on stderr, non-zero exit
    Fatal,
    /// No output, exit zero
    Silent,
    /// Carry on with an empty payload
    Ignore,
}

impl HookKind {
    pub const ALL: [HookKind; 6] = [
        HookKind::BlockSecrets,
        HookKind::TddGuard,
        HookKind::SkillEvaluator,
        HookKind::CommitReminder,
        HookKind::PostCommitLessons,
        HookKind::SessionContext,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            HookKind::BlockSecrets => "block-secrets",
            HookKind::TddGuard => "tdd-guard",
            HookKind::SkillEvaluator => "skill-evaluator",
            HookKind::CommitReminder => "commit-reminder",
            HookKind::PostCommitLessons => "post-commit-lessons",
            HookKind::SessionContext => "session-context",
        }
    }

    pub fn event(&self) -> HookEvent {
        match self {
            HookKind::BlockSecrets | HookKind::TddGuard | HookKind::SkillEvaluator => {
                HookEvent::PreToolUse
            }
            HookKind::CommitReminder | HookKind::PostCommitLessons => HookEvent::PostToolUse,
            HookKind::SessionContext => HookEvent::SessionStart,
        }
    }

    /// Host-side matcher the hook is registered under.
    pub fn matcher(&self) -> &'static str {
        match self {
            HookKind::BlockSecrets | HookKind::TddGuard => "Edit|Write",
            HookKind::SkillEvaluator | HookKind::CommitReminder | HookKind::PostCommitLessons => {
                "Bash"
            }
            HookKind::SessionContext => "startup|compact",
        }
    }

    pub fn malformed_input(&self) -> MalformedInputPolicy {
        match self {
            HookKind::BlockSecrets | HookKind::TddGuard | HookKind::SkillEvaluator => {
                MalformedInputPolicy::Fatal
            }
            HookKind::CommitReminder | HookKind::PostCommitLessons => MalformedInputPolicy::Silent,
            HookKind::SessionContext => MalformedInputPolicy::Ignore,
        }
    }
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HookKind {
    type Err = HookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HookKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| HookError::UnknownHook(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for kind in HookKind::ALL {
            assert_eq!(kind.name().parse::<HookKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = "rm-rf".parse::<HookKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown hook 'rm-rf'");
    }

    #[test]
    fn test_only_pre_tool_hooks_are_fatal_on_bad_input() {
        for kind in HookKind::ALL {
            let fatal = kind.malformed_input() == MalformedInputPolicy::Fatal;
            assert_eq!(fatal, kind.event() == HookEvent::PreToolUse, "{kind}");
        }
    }
}
