//! Style Enforcement Tests
//!
//! Production code must not silence dead-code or unwrap lints. Test code is exempt.

use std::fs;
use std::path::{Path, PathBuf};

/// Workspace crates whose `src/` trees are production code.
const PRODUCTION_CRATES: &[&str] = &[
    "tubefind-core",
    "tubefind-search",
    "tubefind-web",
    "tubefind-cli",
];

#[derive(Debug)]
struct StyleViolation {
    file_path: PathBuf,
    line_number: usize,
    context: String,
}

fn collect_rust_files(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rust_files(&path, files);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
}

/// Lines before the first `#[cfg(test)]` are production code.
fn production_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .take_while(|(_, line)| !line.trim_start().starts_with("#[cfg(test)]"))
        .map(|(index, line)| (index + 1, line))
}

fn find_violations(patterns: &[&str]) -> Vec<StyleViolation> {
    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..");
    let mut files = Vec::new();
    for krate in PRODUCTION_CRATES {
        collect_rust_files(&workspace_root.join(krate).join("src"), &mut files);
    }
    assert!(!files.is_empty(), "no production sources found");

    let mut violations = Vec::new();
    for file_path in files {
        // The mock provider only compiles for tests
        if file_path.ends_with("providers/mock.rs") {
            continue;
        }
        let content = fs::read_to_string(&file_path).unwrap();
        for (line_number, line) in production_lines(&content) {
            if line.trim_start().starts_with("//") {
                continue;
            }
            if patterns.iter().any(|pattern| line.contains(pattern)) {
                violations.push(StyleViolation {
                    file_path: file_path.clone(),
                    line_number,
                    context: line.trim().to_string(),
                });
            }
        }
    }
    violations
}

#[test]
fn test_no_dead_code_allowances() {
    let violations = find_violations(&["allow(dead_code)"]);
    assert!(violations.is_empty(), "dead code allowances: {violations:#?}");
}

#[test]
fn test_no_unwrap_in_production_code() {
    let violations = find_violations(&[".unwrap()", ".expect("]);
    assert!(violations.is_empty(), "unwrap/expect in production code: {violations:#?}");
}
