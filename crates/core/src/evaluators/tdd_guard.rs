//! Soft TDD reminder when editing application source (`PreToolUse`, Edit/Write).

use super::base_name;
use crate::contract::{HookEvent, HookInput, HookOutput};
use crate::rules::SourceRules;

pub fn evaluate(input: &HookInput, rules: &SourceRules) -> Option<HookOutput> {
    let path = input.file_path().replace('\\', "/");
    if !rules.is_source_file(&path) {
        return None;
    }
    Some(HookOutput::message(
        HookEvent::PreToolUse,
        format!(
            "TDD reminder: editing {} — have you written a failing test first? Use /tdd for the Red-Green-Refactor workflow.",
            base_name(&path)
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TddConfig;
    use serde_json::json;

    fn write(path: &str) -> HookInput {
        HookInput::from_value(json!({"tool_name": "Write", "tool_input": {"file_path": path}}))
    }

    #[test]
    fn test_source_edit_gets_reminder() {
        let out = evaluate(&write("/repo/src/engine/parser.rs"), &SourceRules::default()).unwrap();
        assert_eq!(
            out.hook_specific_output.message.as_deref(),
            Some(
                "TDD reminder: editing parser.rs — have you written a failing test first? Use /tdd for the Red-Green-Refactor workflow."
            )
        );
        assert!(!out.is_deny());
    }

    #[test]
    fn test_windows_paths_are_normalized() {
        let out = evaluate(&write("C:\\repo\\lib\\util.ts"), &SourceRules::default()).unwrap();
        assert!(out.hook_specific_output.message.unwrap().contains("editing util.ts"));
    }

    #[test]
    fn test_tests_docs_and_config_are_exempt() {
        let rules = SourceRules::default();
        for path in [
            "/repo/src/parser.test.ts",
            "/repo/src/__tests__/parser.ts",
            "/repo/app/tests/models.py",
            "/repo/src/vite.config.ts",
            "/repo/src/setup.py",
            "/repo/docs/src/example.rs",
            "/repo/memory/src/note.js",
            "/repo/src/styles.css",
            "/repo/main.go",
            "",
        ] {
            assert!(evaluate(&write(path), &rules).is_none(), "{path}");
        }
    }

    #[test]
    fn test_configured_layout() {
        let rules = SourceRules::from_config(&TddConfig {
            src_dirs: vec!["/pkg/".into()],
            excluded: vec!["_test.".into()],
            extensions: vec![".go".into()],
        });
        assert!(evaluate(&write("/repo/pkg/server.go"), &rules).is_some());
        assert!(evaluate(&write("/repo/pkg/server_test.go"), &rules).is_none());
        assert!(evaluate(&write("/repo/src/server.rs"), &rules).is_none());
    }
}
