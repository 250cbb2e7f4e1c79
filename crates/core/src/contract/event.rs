//! Host lifecycle events a hook can answer

use serde::{Deserialize, Serialize};

/// Lifecycle points at which the host invokes a hook.
///
/// Serialized with the host's own spelling (`"PreToolUse"`), which is also the
/// value echoed back in `hookSpecificOutput.hookEventName`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HookEvent {
    /// Before a tool executes. The only event whose answer can cancel it.
    PreToolUse,
    /// After a tool completes (read-only)
    PostToolUse,
    /// Session startup, resume or post-compaction
    SessionStart,
}

impl HookEvent {
    /// Get the event name as the host spells it
    pub fn event_name(&self) -> &'static str {
        match self {
            HookEvent::PreToolUse => "PreToolUse",
            HookEvent::PostToolUse => "PostToolUse",
            HookEvent::SessionStart => "SessionStart",
        }
    }
}

impl std::fmt::Display for HookEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.event_name())
    }
}
