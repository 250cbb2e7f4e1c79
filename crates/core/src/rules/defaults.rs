//! Compiled-in rule tables.
//!
//! Config can replace the advisory tables and extend the secret denylist,
//! but never shrink the denylist.

/// File names that may never be written by a tool (exact base-name match).
pub const BLOCKED_FILENAMES: &[&str] = &["secrets.yaml", "secrets.json", "config.json", ".claude.json"];

/// Any base name starting with this is an environment file (`.env`, `.env.local`, ...).
pub const ENV_FILE_PREFIX: &str = ".env";

/// Path fragments marking application source.
pub const SOURCE_DIRS: &[&str] = &["/src/", "/lib/", "/app/", "src/", "lib/", "app/"];

/// Path fragments that exempt a file from the TDD reminder.
pub const EXCLUDED_PATH_MARKERS: &[&str] = &[
    "/tests/",
    "/test/",
    "/__tests__/",
    ".test.",
    ".spec.",
    ".config.",
    "setup.",
    "/docs/",
    "/scripts/",
    "/memory/",
];

pub const SOURCE_EXTENSIONS: &[&str] = &[".ts", ".js", ".py", ".go", ".rs", ".java", ".tsx", ".jsx"];

/// Commands that run a test suite.
pub const TEST_COMMAND_PATTERNS: &[&str] = &[
    r"\bnpx\s+(vitest|jest)\b",
    r"\bpytest\b",
    r"\bgo\s+test\b",
    r"\bcargo\s+test\b",
    r"\b(?:npm|pnpm|yarn|bun)\s+(?:run\s+)?test\b",
    r"\bmake\s+test\b",
    r"\bdotnet\s+test\b",
    r"\bmvn\s+test\b",
    r"\bgradle\s+test\b",
];

pub const GIT_COMMIT_PATTERN: &str = r"\bgit\s+commit\b";

/// A raw command that has a skill covering it.
pub struct SkillTriggerDef {
    pub pattern: &'static str,
    pub skill: &'static str,
    pub message: &'static str,
}

/// Ordered: the first matching trigger wins.
pub const SKILL_TRIGGERS: &[SkillTriggerDef] = &[
    SkillTriggerDef {
        pattern: r"\bgit\s+commit\b",
        skill: "/commit",
        message: "Detected raw git commit. Consider using /commit for the quality-gated workflow (secret scan, slop scan, format, tests).",
    },
    SkillTriggerDef {
        pattern: r"\bgit\s+add\s+(?:-A|\.)(?:\s|$)",
        skill: "/commit",
        message: "Detected git add -A or git add . — /commit stages files selectively and runs safety checks first.",
    },
];

/// A named section of a memory file to inject at session start.
pub struct MemorySectionDef {
    pub file: &'static str,
    pub heading: &'static str,
    pub label: &'static str,
    pub bullets_only: bool,
}

pub const MEMORY_SECTIONS: &[MemorySectionDef] = &[
    MemorySectionDef {
        file: "MEMORY.md",
        heading: "Session Notes",
        label: "Recent session notes",
        bullets_only: true,
    },
    MemorySectionDef {
        file: "POLARIS.md",
        heading: "North Star",
        label: "Polaris",
        bullets_only: false,
    },
    MemorySectionDef {
        file: "POLARIS.md",
        heading: "Current Focus",
        label: "Current focus",
        bullets_only: false,
    },
    MemorySectionDef {
        file: "SCRATCHPAD.md",
        heading: "Active",
        label: "Scratchpad",
        bullets_only: false,
    },
];

pub const MEMORY_DIR: &str = "memory";

pub const SESSION_CACHE_FILE: &str = "session-cache.json";

/// Marker files (glob patterns, relative to the project root) and the stack they imply.
pub const STACK_MARKERS: &[(&str, &str)] = &[
    ("Cargo.toml", "Rust"),
    ("package.json", "Node.js"),
    ("tsconfig.json", "TypeScript"),
    ("pyproject.toml", "Python"),
    ("requirements.txt", "Python"),
    ("setup.py", "Python"),
    ("go.mod", "Go"),
    ("pom.xml", "JVM"),
    ("build.gradle", "JVM"),
    ("build.gradle.kts", "JVM"),
    ("Gemfile", "Ruby"),
    ("composer.json", "PHP"),
    ("*.csproj", ".NET"),
    ("*.sln", ".NET"),
];

/// Upper bound for each git query.
pub const GIT_TIMEOUT_MS: u64 = 3000;
