//! Architecture tests for source file size.
//!
//! Files above `WARNING_THRESHOLD` lines of code are reported; files above
//! `FAILURE_THRESHOLD` fail the build unless listed in `EXCLUDED_FILES`.
//!
//! Invariants:
//! - Only `.rs` files under `crates/` are checked; `target/` is skipped.
//! - Blank lines and `//` comment lines do not count.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

const WARNING_THRESHOLD: usize = 500;
const FAILURE_THRESHOLD: usize = 800;

/// (path suffix, justification) pairs for files allowed past the failure threshold.
const EXCLUDED_FILES: &[(&str, &str)] = &[];

#[test]
fn file_size_limits() {
    let workspace_root = find_workspace_root();
    let crates_dir = workspace_root.join("crates");
    assert!(crates_dir.exists(), "crates/ not found at {crates_dir:?}");

    let mut failures = Vec::new();
    let mut checked = 0usize;

    for path in rust_files(&crates_dir) {
        checked += 1;
        let loc = count_loc(&fs::read_to_string(&path).unwrap_or_default());
        let relative = path.strip_prefix(&workspace_root).unwrap_or(&path);
        let relative = relative.to_string_lossy().replace('\\', "/");

        let excluded = EXCLUDED_FILES
            .iter()
            .any(|(suffix, _)| relative.ends_with(suffix));

        if loc > FAILURE_THRESHOLD && !excluded {
            failures.push(format!("  - {relative}: {loc} lines"));
        } else if loc > WARNING_THRESHOLD {
            eprintln!("[architecture] {relative}: {loc} LOC exceeds {WARNING_THRESHOLD}");
        }
    }

    assert!(checked > 0, "no Rust files found under {crates_dir:?}");
    assert!(
        failures.is_empty(),
        "Files exceeding {FAILURE_THRESHOLD} LOC must be split or excluded with a justification:\n{}",
        failures.join("\n")
    );
}

fn rust_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| e.file_name() != "target")
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "rs"))
        .collect()
}

fn count_loc(content: &str) -> usize {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("//"))
        .count()
}

fn find_workspace_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .ancestors()
        .find(|dir| {
            fs::read_to_string(dir.join("Cargo.toml"))
                .map(|content| content.contains("[workspace]"))
                .unwrap_or(false)
        })
        .map(Path::to_path_buf)
        .unwrap_or(manifest_dir)
}

#[test]
fn test_count_loc_skips_comments_and_blanks() {
    let source = r#"//! Module docs

/// Item docs
fn main() {
    let x = 5; // trailing comment

    // standalone comment
    println!("{x}");
}
"#;
    assert_eq!(count_loc(source), 4);
}

#[test]
fn test_rust_files_skips_target() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::create_dir_all(dir.path().join("target/debug")).unwrap();
    fs::write(dir.path().join("src/lib.rs"), "pub fn f() {}\n").unwrap();
    fs::write(dir.path().join("target/debug/build.rs"), "fn g() {}\n").unwrap();
    fs::write(dir.path().join("src/notes.txt"), "not rust\n").unwrap();

    let files = rust_files(dir.path());
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("src/lib.rs"));
}

#[test]
fn test_excluded_files_have_justifications() {
    for (pattern, justification) in EXCLUDED_FILES {
        assert!(!pattern.is_empty());
        assert!(!justification.is_empty(), "missing justification for {pattern}");
    }
}
