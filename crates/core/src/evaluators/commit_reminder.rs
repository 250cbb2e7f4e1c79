//! Suggest committing after a green test run on a dirty tree (`PostToolUse`, Bash).

use crate::contract::{HookEvent, HookInput, HookOutput};
use crate::rules::PatternSet;
use crate::vcs::VcsProbe;

pub const REMINDER: &str = "Tests passed with uncommitted changes. \
Consider suggesting /commit if this is a natural breakpoint \
(TDD GREEN, refactor complete, or logical unit done).";

/// Requires a test command, an exit code of exactly 0 and a non-clean
/// working tree. A failed status query suppresses the reminder.
pub async fn evaluate(
    input: &HookInput,
    test_commands: &PatternSet,
    vcs: &dyn VcsProbe,
) -> Option<HookOutput> {
    if !test_commands.is_match(input.command()) {
        return None;
    }
    if !input.exit_status().succeeded() {
        return None;
    }
    let status = vcs.status().await?;
    if status.is_clean() {
        return None;
    }
    Some(HookOutput::context(HookEvent::PostToolUse, REMINDER))
}
