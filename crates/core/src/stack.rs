//! Best-effort technology stack guess from marker files

use std::path::Path;

use glob::Pattern;

use crate::rules::defaults::STACK_MARKERS;

/// Stacks whose marker file exists directly under `root`, in marker order
/// and without duplicates.
pub fn detect_stack(root: &Path) -> Vec<&'static str> {
    let mut found: Vec<&'static str> = Vec::new();
    for (marker, stack) in STACK_MARKERS {
        if found.contains(stack) {
            continue;
        }
        if marker_present(root, marker) {
            found.push(*stack);
        }
    }
    found
}

fn marker_present(root: &Path, marker: &str) -> bool {
    if !marker.contains('*') {
        return root.join(marker).is_file();
    }

    let base = Pattern::escape(&root.to_string_lossy());
    let pattern = format!("{}/{}", base.trim_end_matches('/'), marker);
    match glob::glob(&pattern) {
        Ok(mut paths) => paths.any(|p| p.map(|p| p.is_file()).unwrap_or(false)),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_detects_in_marker_order() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "{}").unwrap();
        fs::write(temp.path().join("Cargo.toml"), "").unwrap();
        fs::write(temp.path().join("tsconfig.json"), "{}").unwrap();

        assert_eq!(detect_stack(temp.path()), vec!["Rust", "Node.js", "TypeScript"]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("pyproject.toml"), "").unwrap();
        fs::write(temp.path().join("requirements.txt"), "").unwrap();
        assert_eq!(detect_stack(temp.path()), vec!["Python"]);
    }

    #[test]
    fn test_glob_marker() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Api.csproj"), "<Project/>").unwrap();
        assert_eq!(detect_stack(temp.path()), vec![".NET"]);
    }

    #[test]
    fn test_directories_are_not_markers() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("go.mod")).unwrap();
        assert!(detect_stack(temp.path()).is_empty());
    }
}
