//! Session handoff cache (`session-cache.json`)

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
struct SessionCache {
    #[serde(rename = "lastSession", default)]
    last_session: Option<Value>,
}

/// What the previous session left for the next one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Handoff {
    pub done: Option<String>,
    pub decisions: Option<String>,
    pub next: Option<String>,
    pub gotchas: Option<String>,
}

/// Strings as-is, string arrays joined; empty or other values are ignored.
fn text_of(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let parts: Vec<&str> = items
                .iter()
                .filter_map(Value::as_str)
                .filter(|s| !s.trim().is_empty())
                .collect();
            (!parts.is_empty()).then(|| parts.join("; "))
        }
        _ => None,
    }
}

impl Handoff {
    /// Parse the cache file. `None` for invalid JSON or a missing `lastSession`.
    pub fn parse(json: &str) -> Option<Self> {
        let cache: SessionCache = serde_json::from_str(json).ok()?;
        let last = cache.last_session?;
        if !last.is_object() {
            return None;
        }
        Some(Self {
            done: text_of(last.get("done")),
            decisions: text_of(last.get("decisions")),
            next: text_of(last.get("next")),
            gotchas: text_of(last.get("gotchas")),
        })
    }

    /// `Last session handoff:` block, or `None` when every field is empty.
    pub fn render(&self) -> Option<String> {
        let parts: Vec<String> = [
            ("Done", &self.done),
            ("Decisions", &self.decisions),
            ("Next", &self.next),
            ("Gotchas", &self.gotchas),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.as_ref().map(|v| format!("  - {label}: {v}")))
        .collect();

        if parts.is_empty() {
            return None;
        }
        Some(format!("Last session handoff:\n{}", parts.join("\n")))
    }
}
