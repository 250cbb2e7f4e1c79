use anyhow::Result;
use clap::Args;
use hookguard_core::HookKind;
use hookguard_core::contract::HookEvent;
use serde_json::{Map, Value, json};

#[derive(Args, Debug)]
pub struct InstallArgs {
    /// Command the host should invoke (a name on PATH or an absolute path)
    #[arg(long, default_value = "hookguard")]
    pub binary: String,
}

pub fn run(args: InstallArgs) -> Result<()> {
    let settings = json!({ "hooks": hooks_block(&args.binary) });
    println!("{}", serde_json::to_string_pretty(&settings)?);
    eprintln!("Merge the block above into .claude/settings.json");
    Ok(())
}

/// Groups every hook under its event, one matcher entry per hook, in
/// registration order.
fn hooks_block(binary: &str) -> Value {
    let mut events = Map::new();
    for event in [HookEvent::PreToolUse, HookEvent::PostToolUse, HookEvent::SessionStart] {
        let entries: Vec<Value> = HookKind::ALL
            .iter()
            .filter(|kind| kind.event() == event)
            .map(|kind| {
                json!({
                    "matcher": kind.matcher(),
                    "hooks": [{
                        "type": "command",
                        "command": format!("{binary} run {}", kind.name()),
                    }],
                })
            })
            .collect();
        events.insert(event.event_name().to_string(), Value::Array(entries));
    }
    Value::Object(events)
}
