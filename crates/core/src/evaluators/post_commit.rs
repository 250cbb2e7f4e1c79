//! Post-commit checkpoint: prompt for lessons worth saving (`PostToolUse`, Bash).

use crate::contract::{HookEvent, HookInput, HookOutput};
use crate::rules::PatternSet;

pub const CHECKPOINT: &str = "POST-COMMIT CHECKPOINT: A commit just succeeded.\n\
Quickly evaluate:\n\
1. Did this commit reveal a non-obvious lesson, platform quirk, or debugging pattern?\n\
2. Was a key technical decision made that should be recorded in memory/MEMORY.md?\n\
If yes: update memory/MEMORY.md or memory/patterns.md now.\n\
If nothing notable: continue without interruption.";

/// Fires on `git commit` whose exit code is 0 or was not reported at all.
/// Unlike the commit reminder, an unreported code counts as success.
pub fn evaluate(input: &HookInput, git_commit: &PatternSet) -> Option<HookOutput> {
    if !git_commit.is_match(input.command()) {
        return None;
    }
    if !input.exit_status().succeeded_or_unreported() {
        return None;
    }
    Some(HookOutput::context(HookEvent::PostToolUse, CHECKPOINT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::defaults::GIT_COMMIT_PATTERN;
    use serde_json::{Value, json};

    fn commit(tool_result: Value) -> HookInput {
        HookInput::from_value(json!({
            "tool_input": {"command": "git commit -m 'feat: parser'"},
            "tool_result": tool_result,
        }))
    }

    fn pattern() -> PatternSet {
        PatternSet::compile_lenient(&[GIT_COMMIT_PATTERN])
    }

    #[test]
    fn test_successful_commit() {
        let out = evaluate(&commit(json!({"exitCode": 0})), &pattern()).unwrap();
        let context = out.hook_specific_output.additional_context.unwrap();
        assert!(context.starts_with("POST-COMMIT CHECKPOINT"));
        assert_eq!(context.lines().count(), 6);
    }

    #[test]
    fn test_unreported_exit_code_counts_as_success() {
        assert!(evaluate(&commit(json!({})), &pattern()).is_some());
        assert!(evaluate(&commit(json!({"exitCode": null})), &pattern()).is_some());
        assert!(evaluate(&commit(Value::Null), &pattern()).is_some());
    }

    #[test]
    fn test_failed_or_malformed_exit_code() {
        assert!(evaluate(&commit(json!({"exitCode": 1})), &pattern()).is_none());
        assert!(evaluate(&commit(json!({"exit_code": "0"})), &pattern()).is_none());
    }

    #[test]
    fn test_other_commands() {
        let input = HookInput::from_value(json!({
            "tool_input": {"command": "git commit-tree HEAD^{tree}"},
            "tool_result": {"exitCode": 0},
        }));
        // `commit-tree` still contains the word `commit` at a boundary.
        assert!(evaluate(&input, &pattern()).is_some());

        let input = HookInput::from_value(json!({
            "tool_input": {"command": "git log --oneline"},
            "tool_result": {"exitCode": 0},
        }));
        assert!(evaluate(&input, &pattern()).is_none());
    }
}
