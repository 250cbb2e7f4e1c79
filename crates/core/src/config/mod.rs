use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, error, warn};

use crate::error::{HookError, Result};
use crate::paths::{global_config_file, project_config_file, resolve_under};
use crate::rules::defaults;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub secrets: SecretsConfig,

    #[serde(default)]
    pub tdd: TddConfig,

    #[serde(default)]
    pub skills: SkillsConfig,

    #[serde(default)]
    pub tests: TestsConfig,

    #[serde(default)]
    pub memory: MemoryConfig,

    #[serde(default)]
    pub git: GitConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecretsConfig {
    /// Additional protected file names (exact base-name match).
    /// The compiled-in names always stay blocked.
    #[serde(default)]
    pub extra_blocked: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TddConfig {
    #[serde(default = "default_src_dirs")]
    pub src_dirs: Vec<String>,

    #[serde(default = "default_excluded")]
    pub excluded: Vec<String>,

    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillsConfig {
    /// Ordered; the first matching trigger wins
    #[serde(default = "default_skill_triggers")]
    pub triggers: Vec<TriggerConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerConfig {
    pub pattern: String,
    pub skill: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestsConfig {
    /// Regexes recognising a test-suite run
    #[serde(default = "default_test_patterns")]
    pub patterns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// Memory directory, relative to the project root unless absolute
    #[serde(default = "default_memory_dir")]
    pub dir: String,

    /// Session handoff cache inside the memory directory
    #[serde(default = "default_cache_file")]
    pub cache_file: String,

    #[serde(default = "default_memory_sections")]
    pub sections: Vec<SectionRule>,
}

/// One `## <heading>` section of a memory file injected at session start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionRule {
    pub file: String,
    pub heading: String,
    pub label: String,

    /// Keep only top-level `- ` bullet lines
    #[serde(default)]
    pub bullets_only: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitConfig {
    /// Upper bound for each git query in milliseconds
    #[serde(default = "default_git_timeout")]
    pub timeout_ms: u64,
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
fn default_src_dirs() -> Vec<String> {
    to_strings(defaults::SOURCE_DIRS)
}
fn default_excluded() -> Vec<String> {
    to_strings(defaults::EXCLUDED_PATH_MARKERS)
}
fn default_extensions() -> Vec<String> {
    to_strings(defaults::SOURCE_EXTENSIONS)
}
fn default_test_patterns() -> Vec<String> {
    to_strings(defaults::TEST_COMMAND_PATTERNS)
}
fn default_skill_triggers() -> Vec<TriggerConfig> {
    defaults::SKILL_TRIGGERS
        .iter()
        .map(|t| TriggerConfig {
            pattern: t.pattern.to_string(),
            skill: t.skill.to_string(),
            message: t.message.to_string(),
        })
        .collect()
}
fn default_memory_dir() -> String {
    defaults::MEMORY_DIR.to_string()
}
fn default_cache_file() -> String {
    defaults::SESSION_CACHE_FILE.to_string()
}
fn default_memory_sections() -> Vec<SectionRule> {
    defaults::MEMORY_SECTIONS
        .iter()
        .map(|s| SectionRule {
            file: s.file.to_string(),
            heading: s.heading.to_string(),
            label: s.label.to_string(),
            bullets_only: s.bullets_only,
        })
        .collect()
}
fn default_git_timeout() -> u64 {
    defaults::GIT_TIMEOUT_MS
}

impl Default for TddConfig {
    fn default() -> Self {
        Self {
            src_dirs: default_src_dirs(),
            excluded: default_excluded(),
            extensions: default_extensions(),
        }
    }
}

impl Default for SkillsConfig {
    fn default() -> Self {
        Self {
            triggers: default_skill_triggers(),
        }
    }
}

impl Default for TestsConfig {
    fn default() -> Self {
        Self {
            patterns: default_test_patterns(),
        }
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            dir: default_memory_dir(),
            cache_file: default_cache_file(),
            sections: default_memory_sections(),
        }
    }
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_git_timeout(),
        }
    }
}

impl Config {
    /// Resolve and load the config for a project. Never fails: read and parse
    /// errors are reported and the compiled-in defaults are used, except that
    /// a well-formed `[secrets]` table is still honoured.
    pub fn load(explicit: Option<&Path>, project_root: &Path) -> Self {
        let Some(path) = Self::resolve_path(explicit, project_root) else {
            return Config::default();
        };

        match Self::load_from(&path) {
            Ok(config) => {
                debug!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                error!("{}; using defaults", e);
                let mut config = Config::default();
                if let Some(secrets) = Self::salvage_secrets(&path) {
                    warn!("Keeping [secrets] from {}", path.display());
                    config.secrets = secrets;
                }
                config
            }
        }
    }

    /// The `[secrets]` table alone, for files that fail to load as a whole.
    /// An invalid section elsewhere must not shrink the denylist.
    fn salvage_secrets(path: &Path) -> Option<SecretsConfig> {
        let content = fs::read_to_string(path).ok()?;
        let mut table: toml::Table = toml::from_str(&content).ok()?;
        let secrets = table.remove("secrets")?;
        match secrets.try_into::<SecretsConfig>() {
            Ok(secrets) => Some(secrets),
            Err(e) => {
                error!("Invalid [secrets] in {}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| HookError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| HookError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Config file for this invocation, if any:
    /// 1. explicit path (`--config` / `HOOKGUARD_CONFIG`), even if missing
    /// 2. `<root>/.claude/hookguard.toml`
    /// 3. the global config file
    pub fn resolve_path(explicit: Option<&Path>, project_root: &Path) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }

        let project = project_config_file(project_root);
        if project.exists() {
            return Some(project);
        }

        global_config_file().filter(|p| p.exists())
    }

    /// Write the commented template. Refuses to overwrite an existing file.
    pub fn write_template(path: &Path) -> Result<()> {
        if path.exists() {
            return Err(HookError::Io(std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                format!("{} already exists", path.display()),
            )));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_CONFIG_TEMPLATE)?;
        Ok(())
    }

    pub fn memory_dir(&self, project_root: &Path) -> PathBuf {
        resolve_under(project_root, &self.memory.dir)
    }

    pub fn git_timeout(&self) -> Duration {
        Duration::from_millis(self.git.timeout_ms)
    }
}

/// Config template with every default spelled out (used by `config init`)
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# hookguard configuration
# Every key is optional; omitted keys keep their built-in defaults.

[secrets]
# Extra file names to protect. secrets.yaml, secrets.json, config.json,
# .claude.json and any .env* file are always blocked.
extra_blocked = []

[tdd]
src_dirs = ["/src/", "/lib/", "/app/", "src/", "lib/", "app/"]
excluded = ["/tests/", "/test/", "/__tests__/", ".test.", ".spec.", ".config.", "setup.", "/docs/", "/scripts/", "/memory/"]
extensions = [".ts", ".js", ".py", ".go", ".rs", ".java", ".tsx", ".jsx"]

[tests]
# Commands that count as a test run for the commit reminder
patterns = [
    '\bnpx\s+(vitest|jest)\b',
    '\bpytest\b',
    '\bgo\s+test\b',
    '\bcargo\s+test\b',
    '\b(?:npm|pnpm|yarn|bun)\s+(?:run\s+)?test\b',
    '\bmake\s+test\b',
    '\bdotnet\s+test\b',
    '\bmvn\s+test\b',
    '\bgradle\s+test\b',
]

# Skill suggestions, first match wins. Add one block per skill.
[[skills.triggers]]
pattern = '\bgit\s+commit\b'
skill = "/commit"
message = "Detected raw git commit. Consider using /commit for the quality-gated workflow (secret scan, slop scan, format, tests)."

[[skills.triggers]]
pattern = '\bgit\s+add\s+(?:-A|\.)(?:\s|$)'
skill = "/commit"
message = "Detected git add -A or git add . — /commit stages files selectively and runs safety checks first."

[memory]
# Relative to the project root unless absolute; ~ is expanded
dir = "memory"
cache_file = "session-cache.json"

[[memory.sections]]
file = "MEMORY.md"
heading = "Session Notes"
label = "Recent session notes"
bullets_only = true

[[memory.sections]]
file = "POLARIS.md"
heading = "North Star"
label = "Polaris"

[[memory.sections]]
file = "POLARIS.md"
heading = "Current Focus"
label = "Current focus"

[[memory.sections]]
file = "SCRATCHPAD.md"
heading = "Active"
label = "Scratchpad"

[git]
timeout_ms = 3000
"#;
