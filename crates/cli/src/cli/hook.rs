use std::io::{self, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use hookguard_core::contract::write_output;
use hookguard_core::engine::decode_input;
use hookguard_core::{HookEngine, HookKind};
use tracing::debug;

/// Exit status for a fatal payload error
const EXIT_FATAL: u8 = 1;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Hook to run (block-secrets, tdd-guard, skill-evaluator, commit-reminder,
    /// post-commit-lessons, session-context)
    pub hook: HookKind,
}

pub async fn run(args: RunArgs, config: Option<&Path>) -> Result<ExitCode> {
    let status = execute(
        args.hook,
        config,
        io::stdin().lock(),
        io::stdout().lock(),
        io::stderr().lock(),
    )
    .await;
    Ok(ExitCode::from(status))
}

/// One hook invocation over explicit streams. Returns the process exit status.
async fn execute<R: Read, W: Write, E: Write>(
    kind: HookKind,
    config: Option<&Path>,
    stdin: R,
    stdout: W,
    mut stderr: E,
) -> u8 {
    let input = match decode_input(kind, stdin) {
        Ok(Some(input)) => input,
        Ok(None) => return 0,
        Err(e) => {
            let _ = writeln!(stderr, "{kind} hook error: {e}");
            return EXIT_FATAL;
        }
    };

    let engine = HookEngine::for_input(&input, config);
    let output = engine.evaluate(kind, &input).await;

    // A closed stdout does not change the exit status.
    if let Err(e) = write_output(stdout, output.as_ref()) {
        debug!("Failed to write {} response: {}", kind, e);
    }

    0
}
