//! Suggest a skill when a raw command overlaps with one (`PreToolUse`, Bash).

use tracing::debug;

use crate::contract::{HookEvent, HookInput, HookOutput};
use crate::rules::TriggerTable;

/// At most one suggestion per command: the first matching trigger.
pub fn evaluate(input: &HookInput, triggers: &TriggerTable) -> Option<HookOutput> {
    let trigger = triggers.first_match(input.command())?;
    debug!("Command overlaps with skill {}", trigger.skill);
    Some(HookOutput::message(
        HookEvent::PreToolUse,
        format!("Skill suggestion: {}", trigger.message),
    ))
}
