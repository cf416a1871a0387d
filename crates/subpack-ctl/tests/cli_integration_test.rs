//! Integration tests for the subpack CLI.
//!
//! Creates realistic package roots in temp directories and drives the
//! compiled binary end to end: flags → config file → library → filesystem.
//!
//! `HOME` is pointed at the temp directory for every spawn so a user-global
//! `~/.config/subpack.toml` on the host can't leak into the tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Get the path to the compiled subpack-ctl binary.
fn subpack_ctl_bin() -> PathBuf {
    // In integration tests, CARGO_BIN_EXE_<name> gives the path to the binary
    PathBuf::from(env!("CARGO_BIN_EXE_subpack-ctl"))
}

/// Run subpack-ctl with the given args from the given working directory.
fn run_subpack_ctl(work_dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(subpack_ctl_bin())
        .args(args)
        .current_dir(work_dir)
        .env("HOME", work_dir)
        .output()
        .expect("Failed to execute subpack-ctl")
}

/// Create a package root with a manifest and the given source files.
fn create_package_root(name: &str, sources: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("package.json"),
        format!(r#"{{"name": "{name}", "version": "1.0.0"}}"#),
    )
    .unwrap();

    let src = dir.path().join("src");
    fs::create_dir(&src).unwrap();
    for source in sources {
        fs::write(src.join(source), "export default 1\n").unwrap();
    }

    dir
}

fn read_descriptor(root: &Path, module: &str) -> serde_json::Value {
    let text = fs::read_to_string(root.join(module).join("package.json")).unwrap();
    serde_json::from_str(&text).unwrap()
}

// ==========================================================================
// Generate
// ==========================================================================

#[test]
fn test_generate_creates_proxies() {
    let root = create_package_root("acme", &["foo.js", "bar.ts", "index.js"]);

    let output = run_subpack_ctl(root.path(), &["generate"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert!(root.path().join("foo/package.json").is_file());
    assert!(root.path().join("bar/package.json").is_file());
    assert!(!root.path().join("index").exists());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("foo"));
    assert!(stdout.contains("bar"));
    assert!(stdout.contains("Generated 2 proxy packages"));
}

#[test]
fn test_generate_flags_flow_into_descriptors() {
    let root = create_package_root("acme", &["foo.js"]);

    let output = run_subpack_ctl(
        root.path(),
        &[
            "generate",
            "--cjs-dir",
            "dist/cjs",
            "--es-dir",
            "dist/esm",
            "--types-dir",
            "dist/types",
        ],
    );
    assert!(output.status.success());

    let foo = read_descriptor(root.path(), "foo");
    assert_eq!(foo["main"], "../dist/cjs/foo.js");
    assert_eq!(foo["module"], "../dist/esm/foo.js");
    assert_eq!(foo["types"], "../dist/types/foo.d.ts");
}

#[test]
fn test_generate_reads_project_config_file() {
    let root = create_package_root("acme", &["foo.js"]);
    fs::write(
        root.path().join(".subpack.toml"),
        "cjs-dir = \"out/cjs\"\nes-dir = \"out/esm\"\n",
    )
    .unwrap();

    let output = run_subpack_ctl(root.path(), &["generate"]);
    assert!(output.status.success());

    let foo = read_descriptor(root.path(), "foo");
    assert_eq!(foo["main"], "../out/cjs/foo.js");
    assert_eq!(foo["module"], "../out/esm/foo.js");
}

#[test]
fn test_flags_win_over_config_file() {
    let root = create_package_root("acme", &["foo.js"]);
    fs::write(root.path().join(".subpack.toml"), "cjs-dir = \"out/cjs\"\n").unwrap();

    let output = run_subpack_ctl(root.path(), &["generate", "--cjs-dir", "flag/cjs"]);
    assert!(output.status.success());

    let foo = read_descriptor(root.path(), "foo");
    assert_eq!(foo["main"], "../flag/cjs/foo.js");
}

#[test]
fn test_generate_with_explicit_cwd() {
    let root = create_package_root("acme", &["foo.js"]);
    let elsewhere = TempDir::new().unwrap();

    let cwd = root.path().to_str().unwrap();
    let output = run_subpack_ctl(elsewhere.path(), &["generate", "--cwd", cwd]);
    assert!(output.status.success());

    assert!(root.path().join("foo/package.json").is_file());
    assert!(!elsewhere.path().join("foo").exists());
}

#[test]
fn test_generate_fails_without_manifest() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("src");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("foo.js"), "export default 1\n").unwrap();

    let output = run_subpack_ctl(dir.path(), &["generate"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("package.json"));
}

// ==========================================================================
// Clean
// ==========================================================================

#[test]
fn test_generate_then_clean_round_trip() {
    let root = create_package_root("acme", &["foo.js", "bar.ts"]);

    let output = run_subpack_ctl(root.path(), &["generate"]);
    assert!(output.status.success());
    assert!(root.path().join("foo").is_dir());

    let output = run_subpack_ctl(root.path(), &["clean"]);
    assert!(output.status.success());

    assert!(!root.path().join("foo").exists());
    assert!(!root.path().join("bar").exists());
    assert!(root.path().join("src/foo.js").is_file());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Cleaned 2 proxy packages"));
}

#[test]
fn test_clean_without_proxies_succeeds() {
    let root = create_package_root("acme", &["foo.js"]);

    let output = run_subpack_ctl(root.path(), &["clean"]);
    assert!(output.status.success());
}
