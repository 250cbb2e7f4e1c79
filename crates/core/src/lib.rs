//! hookguard core: the shared contract behind every lifecycle hook.
//!
//! A hook reads one JSON payload from the host, runs a single evaluator over
//! it and answers with at most one JSON object. This crate holds everything
//! except the process plumbing: payload and response types, the compiled-in
//! rule tables, the evaluators, the read-only memory store and the bounded
//! version-control probe.

pub mod config;
pub mod contract;
pub mod engine;
pub mod env;
pub mod error;
pub mod evaluators;
pub mod memory;
pub mod paths;
pub mod rules;
pub mod stack;
pub mod vcs;

pub use config::Config;
pub use contract::{HookEvent, HookInput, HookKind, HookOutput};
pub use engine::HookEngine;
pub use error::{HookError, Result};
