//! Hygiene — enforces coding standards at test time
//!
//! Scans the production sources under `src/` for patterns the project keeps
//! out of shipped code. Each pattern has a budget; a budget only ever
//! shrinks. Test modules (`*_test.rs`) and the scripted test transport are
//! exempt.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    reason: &'static str,
}

const BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, reason: "panics in the browser tab" },
    Budget { pattern: ".expect(", max: 0, reason: "panics in the browser tab" },
    Budget { pattern: "panic!(", max: 0, reason: "panics in the browser tab" },
    Budget { pattern: "unreachable!(", max: 0, reason: "panics in the browser tab" },
    Budget { pattern: "todo!(", max: 0, reason: "unfinished stub" },
    Budget { pattern: "unimplemented!(", max: 0, reason: "unfinished stub" },
    Budget { pattern: "let _ =", max: 0, reason: "discards a result without looking" },
    // Build-time config parsing, error-body sniffing, browser confirm dialog.
    Budget { pattern: ".ok()", max: 3, reason: "drops an error value" },
    Budget { pattern: "#[allow(dead_code)]", max: 0, reason: "hides unused code" },
    Budget { pattern: "println!(", max: 0, reason: "bypasses the log facade" },
    Budget { pattern: "eprintln!(", max: 0, reason: "bypasses the log facade" },
    Budget { pattern: "dbg!(", max: 0, reason: "debug leftover" },
    Budget { pattern: "futures::executor", max: 0, reason: "blocks the single browser thread" },
];

struct SourceFile {
    path: String,
    content: String,
}

fn source_files(root: &str) -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new(root), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        if path.extension().is_none_or(|ext| ext != "rs") {
            continue;
        }
        let path = path.to_string_lossy().to_string();
        if path.ends_with("_test.rs") || path.ends_with("fake.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn describe(hits: &[(String, usize)]) -> String {
    hits.iter().map(|(path, count)| format!("  {path}: {count}")).collect::<Vec<_>>().join("\n")
}

#[test]
fn sources_are_found() {
    let files = source_files("src");
    assert!(files.iter().any(|file| file.path.ends_with("session.rs")), "scanner found no session store");
}

#[test]
fn pattern_budgets_hold() {
    let files = source_files("src");
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, count)| count).sum();
        if count > budget.max {
            failures.push(format!(
                "`{}` ({}): found {count}, max {}\n{}",
                budget.pattern,
                budget.reason,
                budget.max,
                describe(&found)
            ));
        }
    }
    assert!(failures.is_empty(), "budgets exceeded:\n{}", failures.join("\n"));
}

#[test]
fn only_the_app_root_writes_the_session_signal() {
    for dir in ["src/components", "src/pages"] {
        let files = source_files(dir);
        for pattern in ["session.set(", "session.update("] {
            let found = hits(&files, pattern);
            assert!(found.is_empty(), "`{pattern}` outside the store mirror:\n{}", describe(&found));
        }
    }
}
