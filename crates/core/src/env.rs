//! Environment variable constants used throughout the application.
//!
//! Centralized definition of the variables hookguard reads so the names are
//! not scattered as string literals.

/// Configuration file path override (CLI arg default env)
pub const HOOKGUARD_CONFIG: &str = "HOOKGUARD_CONFIG";

/// Project root exported by the host for every hook invocation
pub const CLAUDE_PROJECT_DIR: &str = "CLAUDE_PROJECT_DIR";
