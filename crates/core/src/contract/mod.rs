//! The hook request/response contract.
//!
//! Every hook follows the same shape: buffer stdin until EOF, decode one JSON
//! document ([`HookInput`]), evaluate, and write at most one [`HookOutput`].
//! The host reads `hookSpecificOutput` fields verbatim; writing nothing means
//! "no opinion".

mod event;
mod input;
mod kind;
mod output;

pub use event::HookEvent;
pub use input::{ExitStatus, HookInput, read_input};
pub use kind::{HookKind, MalformedInputPolicy};
pub use output::{HookOutput, HookSpecificOutput, PermissionDecision, write_output};
