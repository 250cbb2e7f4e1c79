//! Hook response envelope

use std::io::Write;

use serde::{Deserialize, Serialize};

use super::event::HookEvent;

/// The single JSON object a hook may write to stdout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookOutput {
    #[serde(rename = "hookSpecificOutput")]
    pub hook_specific_output: HookSpecificOutput,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookSpecificOutput {
    pub hook_event_name: HookEvent,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission_decision: Option<PermissionDecision>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission_decision_reason: Option<String>,

    /// Shown to the user in the host UI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Injected into the model's context
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_context: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionDecision {
    /// Cancel the pending tool call
    Deny,
}

impl HookOutput {
    fn empty(event: HookEvent) -> Self {
        Self {
            hook_specific_output: HookSpecificOutput {
                hook_event_name: event,
                permission_decision: None,
                permission_decision_reason: None,
                message: None,
                additional_context: None,
            },
        }
    }

    /// Blocking answer to a `PreToolUse` event.
    pub fn deny(reason: impl Into<String>) -> Self {
        let mut out = Self::empty(HookEvent::PreToolUse);
        out.hook_specific_output.permission_decision = Some(PermissionDecision::Deny);
        out.hook_specific_output.permission_decision_reason = Some(reason.into());
        out
    }

    /// Advisory message shown in the UI.
    pub fn message(event: HookEvent, message: impl Into<String>) -> Self {
        let mut out = Self::empty(event);
        out.hook_specific_output.message = Some(message.into());
        out
    }

    /// Advisory text added to the model's context.
    pub fn context(event: HookEvent, context: impl Into<String>) -> Self {
        let mut out = Self::empty(event);
        out.hook_specific_output.additional_context = Some(context.into());
        out
    }

    pub fn is_deny(&self) -> bool {
        self.hook_specific_output.permission_decision == Some(PermissionDecision::Deny)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Write the response, if any, as one compact document.
pub fn write_output<W: Write>(mut writer: W, output: Option<&HookOutput>) -> std::io::Result<()> {
    let Some(output) = output else {
        return Ok(());
    };
    serde_json::to_writer(&mut writer, output)?;
    writer.flush()
}
