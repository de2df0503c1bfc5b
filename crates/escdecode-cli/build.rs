use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Short commit hash and commit date for `escdecode --version`.
///
/// Both fall back to the package version when the crate is built outside a
/// git checkout (e.g. from a published tarball).
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=ESCDECODE_BUILD_COMMIT");
    watch_git_head();

    let fallback = format!("v{}", env::var("CARGO_PKG_VERSION").unwrap_or_default());
    let commit = env::var("ESCDECODE_BUILD_COMMIT")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .or_else(|| git(&["rev-parse", "--short=10", "HEAD"]))
        .unwrap_or_else(|| fallback.clone());
    let date = git(&["show", "-s", "--format=%cs", "HEAD"]).unwrap_or(fallback);

    println!("cargo:rustc-env=ESCDECODE_BUILD_COMMIT={commit}");
    println!("cargo:rustc-env=ESCDECODE_BUILD_DATE={date}");
}

/// Rebuild when HEAD moves, including commits on the checked-out branch.
fn watch_git_head() {
    let Some(git_dir) = git(&["rev-parse", "--absolute-git-dir"]).map(PathBuf::from) else {
        return;
    };
    let head = git_dir.join("HEAD");
    println!("cargo:rerun-if-changed={}", head.display());
    if let Some(branch_ref) = current_ref(&head) {
        println!("cargo:rerun-if-changed={}", git_dir.join(branch_ref).display());
    }
}

fn current_ref(head: &Path) -> Option<String> {
    let contents = fs::read_to_string(head).ok()?;
    contents
        .strip_prefix("ref: ")
        .map(|branch| branch.trim().to_string())
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let value = String::from_utf8(output.stdout).ok()?.trim().to_string();
    (!value.is_empty()).then_some(value)
}
