//! Hard block on writes to secret files (`PreToolUse`, Edit/Write).

use super::base_name;
use crate::contract::{HookInput, HookOutput};
use crate::rules::SecretRules;

pub fn evaluate(input: &HookInput, rules: &SecretRules) -> Option<HookOutput> {
    let base = base_name(input.file_path());
    if !rules.is_blocked(base) {
        return None;
    }
    Some(HookOutput::deny(format!(
        "Blocked: {base} is a protected secret file. Edit manually if needed."
    )))
}
