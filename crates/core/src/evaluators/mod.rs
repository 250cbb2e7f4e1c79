//! One evaluator per hook.
//!
//! Evaluators map a decoded payload (plus read-only rule tables and optional
//! filesystem or VCS queries) to at most one [`HookOutput`]. They never fail:
//! anything unavailable simply contributes nothing.
//!
//! [`HookOutput`]: crate::contract::HookOutput

pub mod block_secrets;
pub mod commit_reminder;
pub mod post_commit;
pub mod session_context;
pub mod skill_evaluator;
pub mod tdd_guard;

/// Final path component, splitting on both `/` and `\`.
/// Trailing separators are ignored (`"a/b/"` → `"b"`).
pub(crate) fn base_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches(['/', '\\']);
    trimmed
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("/repo/config/secrets.yaml"), "secrets.yaml");
        assert_eq!(base_name("C:\\repo\\.env"), ".env");
        assert_eq!(base_name(".env.local"), ".env.local");
        assert_eq!(base_name("/repo/dir/"), "dir");
        assert_eq!(base_name(""), "");
        assert_eq!(base_name("/"), "");
    }
}
