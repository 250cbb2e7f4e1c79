//! Hook payload decoding

use std::io::Read;

use serde_json::Value;

use crate::error::{HookError, Result};

/// The JSON document the host pipes to a hook.
///
/// The payload shape is owned by the host and grows over time, so it is kept
/// as a raw [`Value`] and read through lenient accessors. Any field may be
/// missing or carry an unexpected type; accessors then report it as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HookInput {
    raw: Value,
}

/// What the host reported about a finished tool's exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// No `exitCode`/`exit_code` key, or an explicit `null`
    Absent,
    /// An integral exit code
    Code(i64),
    /// Present but not an integer (e.g. `"0"`)
    Malformed,
}

impl ExitStatus {
    /// Strict success: the code was reported and equals zero.
    pub fn succeeded(&self) -> bool {
        matches!(self, ExitStatus::Code(0))
    }

    /// Success, or no code reported at all.
    pub fn succeeded_or_unreported(&self) -> bool {
        matches!(self, ExitStatus::Code(0) | ExitStatus::Absent)
    }

    fn classify(value: &Value) -> Self {
        match value {
            Value::Null => ExitStatus::Absent,
            Value::Number(n) => {
                if let Some(code) = n.as_i64() {
                    ExitStatus::Code(code)
                } else if let Some(f) = n.as_f64()
                    && f.is_finite()
                    && f.fract() == 0.0
                {
                    ExitStatus::Code(f as i64)
                } else {
                    ExitStatus::Malformed
                }
            }
            _ => ExitStatus::Malformed,
        }
    }
}

impl HookInput {
    /// Decode a complete payload. Any well-formed JSON document is accepted.
    pub fn parse(text: &str) -> Result<Self> {
        let raw: Value = serde_json::from_str(text)?;
        Ok(Self { raw })
    }

    pub fn from_value(raw: Value) -> Self {
        Self { raw }
    }

    pub fn tool_name(&self) -> &str {
        self.raw
            .get("tool_name")
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    /// Working directory the host reported, if any
    pub fn cwd(&self) -> Option<&str> {
        self.raw
            .get("cwd")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// A string field of `tool_input`, or `""` when missing.
    pub fn tool_input_str(&self, key: &str) -> &str {
        self.raw
            .get("tool_input")
            .and_then(|t| t.get(key))
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    pub fn file_path(&self) -> &str {
        self.tool_input_str("file_path")
    }

    pub fn command(&self) -> &str {
        self.tool_input_str("command")
    }

    /// The completed tool's result object. `tool_response` is read when the
    /// host does not send `tool_result`.
    pub fn tool_result(&self) -> Option<&Value> {
        ["tool_result", "tool_response"]
            .into_iter()
            .filter_map(|key| self.raw.get(key))
            .find(|v| !v.is_null())
    }

    /// Exit code of the completed tool: `exitCode` first, then `exit_code`.
    pub fn exit_status(&self) -> ExitStatus {
        let Some(result) = self.tool_result() else {
            return ExitStatus::Absent;
        };
        ["exitCode", "exit_code"]
            .into_iter()
            .filter_map(|key| result.get(key))
            .find(|v| !v.is_null())
            .map(ExitStatus::classify)
            .unwrap_or(ExitStatus::Absent)
    }
}

/// Buffer the whole payload before decoding; payloads are single tool calls.
pub fn read_input<R: Read>(mut reader: R) -> Result<String> {
    let mut buf = String::new();
    reader
        .read_to_string(&mut buf)
        .map_err(HookError::ReadInput)?;
    Ok(buf)
}
