// End-to-end tests driving the built binary against a fake home directory.
//
// The documents folder is resolved from HOME on Linux, so these only run there.
#![cfg(target_os = "linux")]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

struct TestHome {
    temp_dir: TempDir,
    work: PathBuf,
}

impl TestHome {
    fn new(versions: &[&str]) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let work = temp_dir.path().join("work");
        fs::create_dir_all(&work).unwrap();
        for version in versions {
            fs::create_dir_all(temp_dir.path().join("Documents/maya").join(version)).unwrap();
        }
        Self { temp_dir, work }
    }

    fn maya_dir(&self, version: &str) -> PathBuf {
        self.temp_dir.path().join("Documents/maya").join(version)
    }

    fn module_file(&self, version: &str) -> PathBuf {
        self.maya_dir(version).join("modules/PivotTool.mod")
    }
}

fn run_command(args: &[&str], home: &TestHome) -> (bool, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_pivot-install"))
        .args(args)
        .env("HOME", home.temp_dir.path())
        // No user-dirs.dirs here, so the documents folder falls back to $HOME/Documents
        .env("XDG_CONFIG_HOME", home.temp_dir.path().join(".config"))
        .env_remove("RUST_LOG")
        .current_dir(&home.work)
        .output()
        .expect("Failed to execute command");

    let success = output.status.success();
    let stdout = String::from_utf8(output.stdout).unwrap_or_default();
    let stderr = String::from_utf8(output.stderr).unwrap_or_default();
    (success, stdout, stderr)
}

fn canonical(path: &Path) -> String {
    fs::canonicalize(path).unwrap().display().to_string()
}

#[test]
fn test_install_writes_descriptor_for_targeted_versions() {
    let home = TestHome::new(&["2016", "2018"]);

    let (success, stdout, stderr) = run_command(&[], &home);

    assert!(success, "Install should succeed. stdout: {}, stderr: {}", stdout, stderr);
    assert!(
        stdout.contains("Installing module for '2018'..."),
        "Expected install message in output: {}",
        stdout
    );
    assert!(!stdout.contains("'2016'"), "2016 is not a target: {}", stdout);
    assert!(stdout.contains("Done!"), "Expected 'Done!' in output: {}", stdout);

    let content = fs::read_to_string(home.module_file("2018")).unwrap();
    assert_eq!(
        content,
        format!("+ PivotTool 1.0.0.0 {}\n", canonical(&home.work))
    );
    assert!(!home.maya_dir("2016").join("modules").exists());
    assert!(!home.maya_dir("2019").exists());
}

#[test]
fn test_install_reports_directory_creation_once() {
    let home = TestHome::new(&["2019"]);

    let (success, stdout, _) = run_command(&[], &home);
    assert!(success);
    assert!(
        stdout.contains("Created directory"),
        "Expected directory creation in output: {}",
        stdout
    );

    let (success, stdout, _) = run_command(&[], &home);
    assert!(success);
    assert!(
        !stdout.contains("Created directory"),
        "modules already exists on rerun: {}",
        stdout
    );
}

#[test]
fn test_rerun_is_idempotent() {
    let home = TestHome::new(&["2018", "2019"]);

    run_command(&[], &home);
    let first = fs::read_to_string(home.module_file("2018")).unwrap();
    run_command(&[], &home);
    let second = fs::read_to_string(home.module_file("2018")).unwrap();

    assert_eq!(first, second);
    assert_eq!(second.lines().count(), 1);
}

#[test]
fn test_no_maya_installed() {
    let home = TestHome::new(&[]);

    let (success, stdout, stderr) = run_command(&[], &home);

    assert!(success, "Nothing to install is not an error. stderr: {}", stderr);
    assert!(
        stderr.contains("No targeted Maya user directories found"),
        "Expected warning in stderr: {}",
        stderr
    );
    assert!(stdout.contains("Done!"));
}

#[test]
fn test_dry_run_writes_nothing() {
    let home = TestHome::new(&["2018"]);

    let (success, stdout, _) = run_command(&["--dry-run"], &home);

    assert!(success);
    assert!(stdout.contains("[DRY RUN]"), "Expected dry run banner: {}", stdout);
    assert!(stdout.contains("Would write"), "Expected preview: {}", stdout);
    assert!(!home.maya_dir("2018").join("modules").exists());
}

#[test]
fn test_json_report() {
    let home = TestHome::new(&["2017", "2019"]);

    let (success, stdout, stderr) = run_command(&["--json"], &home);
    assert!(success, "stderr: {}", stderr);

    let report: serde_json::Value = serde_json::from_str(&stdout)
        .unwrap_or_else(|e| panic!("Output should be JSON ({}): {}", e, stdout));
    assert_eq!(report["schema_version"], 1);
    assert_eq!(report["dry_run"], false);
    assert_eq!(report["discovered"], serde_json::json!(["2017", "2019"]));
    assert_eq!(report["installed"].as_array().unwrap().len(), 1);
    assert_eq!(report["installed"][0]["version"], "2019");
    assert_eq!(report["installed"][0]["created_modules_dir"], true);
    assert!(home.module_file("2019").exists());
}

#[test]
fn test_modules_path_blocked_by_file_fails() {
    let home = TestHome::new(&["2018"]);
    fs::write(home.maya_dir("2018").join("modules"), "not a directory").unwrap();

    let (success, _, stderr) = run_command(&[], &home);

    assert!(!success, "Install should fail when modules is a file");
    assert!(
        stderr.contains("Failed to create directory"),
        "Expected failing path in stderr: {}",
        stderr
    );
}

#[test]
fn test_descriptor_write_failure_leaves_partial_state() {
    let home = TestHome::new(&["2018", "2019"]);
    fs::create_dir_all(home.module_file("2018")).unwrap();

    let (success, _, stderr) = run_command(&[], &home);

    assert!(!success, "Install should fail when the descriptor path is a directory");
    assert!(
        stderr.contains("Failed to write"),
        "Expected failing path in stderr: {}",
        stderr
    );
    assert!(home.maya_dir("2018").join("modules").is_dir());
    assert!(!home.module_file("2019").exists());
}

#[test]
fn test_rejects_arguments() {
    let home = TestHome::new(&[]);

    let (success, _, stderr) = run_command(&["2018"], &home);

    assert!(!success);
    assert!(stderr.contains("unexpected argument"), "stderr: {}", stderr);
}
