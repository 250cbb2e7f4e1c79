//! Rule tables compiled from configuration.
//!
//! Tables are ordered data evaluated in sequence; callers that need a single
//! answer take the first match. Compilation never fails: an invalid pattern
//! from the config file is logged and dropped so one typo cannot disable a
//! hook.

pub mod defaults;

use regex::Regex;
use tracing::warn;

use crate::config::{Config, SecretsConfig, TddConfig, TriggerConfig};
use crate::error::{HookError, Result};

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| HookError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// An ordered set of regexes matched with "any".
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<Regex>,
}

impl PatternSet {
    /// Compile every pattern, skipping (and logging) the invalid ones.
    pub fn compile_lenient<S: AsRef<str>>(patterns: &[S]) -> Self {
        let patterns = patterns
            .iter()
            .filter_map(|p| match compile(p.as_ref()) {
                Ok(re) => Some(re),
                Err(e) => {
                    warn!("Skipping rule: {}", e);
                    None
                }
            })
            .collect();
        Self { patterns }
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(text))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// A skill suggestion fired by a command pattern.
#[derive(Debug, Clone)]
pub struct Trigger {
    pattern: Regex,
    pub skill: String,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct TriggerTable {
    triggers: Vec<Trigger>,
}

impl TriggerTable {
    pub fn compile_lenient(defs: &[TriggerConfig]) -> Self {
        let triggers = defs
            .iter()
            .filter_map(|def| match compile(&def.pattern) {
                Ok(pattern) => Some(Trigger {
                    pattern,
                    skill: def.skill.clone(),
                    message: def.message.clone(),
                }),
                Err(e) => {
                    warn!("Skipping skill trigger for {}: {}", def.skill, e);
                    None
                }
            })
            .collect();
        Self { triggers }
    }

    /// First trigger whose pattern matches, in table order.
    pub fn first_match(&self, command: &str) -> Option<&Trigger> {
        self.triggers.iter().find(|t| t.pattern.is_match(command))
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }
}

/// Protected file names. Compiled-in names are always present.
#[derive(Debug, Clone)]
pub struct SecretRules {
    names: Vec<String>,
    env_prefix: &'static str,
}

impl SecretRules {
    pub fn from_config(config: &SecretsConfig) -> Self {
        let mut names: Vec<String> = defaults::BLOCKED_FILENAMES
            .iter()
            .map(|s| s.to_string())
            .collect();
        for extra in &config.extra_blocked {
            if !extra.is_empty() && !names.contains(extra) {
                names.push(extra.clone());
            }
        }
        Self {
            names,
            env_prefix: defaults::ENV_FILE_PREFIX,
        }
    }

    pub fn is_blocked(&self, base_name: &str) -> bool {
        if base_name.is_empty() {
            return false;
        }
        self.names.iter().any(|n| n == base_name) || base_name.starts_with(self.env_prefix)
    }
}

impl Default for SecretRules {
    fn default() -> Self {
        Self::from_config(&SecretsConfig::default())
    }
}

/// Which paths count as application source for the TDD reminder.
#[derive(Debug, Clone)]
pub struct SourceRules {
    dirs: Vec<String>,
    excluded: Vec<String>,
    extensions: Vec<String>,
}

impl SourceRules {
    pub fn from_config(config: &TddConfig) -> Self {
        Self {
            dirs: config.src_dirs.clone(),
            excluded: config.excluded.clone(),
            extensions: config.extensions.clone(),
        }
    }

    /// `path` must already use `/` separators.
    pub fn is_source_file(&self, path: &str) -> bool {
        let in_source_dir = self.dirs.iter().any(|d| path.contains(d.as_str()));
        let excluded = self.excluded.iter().any(|p| path.contains(p.as_str()));
        let has_source_ext = self.extensions.iter().any(|e| path.ends_with(e.as_str()));
        in_source_dir && !excluded && has_source_ext
    }
}

impl Default for SourceRules {
    fn default() -> Self {
        Self::from_config(&TddConfig::default())
    }
}

/// Every table the evaluators consult, compiled once per invocation.
#[derive(Debug, Clone)]
pub struct Rules {
    pub secrets: SecretRules,
    pub source: SourceRules,
    pub skills: TriggerTable,
    pub test_commands: PatternSet,
    pub git_commit: PatternSet,
}

impl Rules {
    pub fn from_config(config: &Config) -> Self {
        Self {
            secrets: SecretRules::from_config(&config.secrets),
            source: SourceRules::from_config(&config.tdd),
            skills: TriggerTable::compile_lenient(&config.skills.triggers),
            test_commands: PatternSet::compile_lenient(&config.tests.patterns),
            git_commit: PatternSet::compile_lenient(&[defaults::GIT_COMMIT_PATTERN]),
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
