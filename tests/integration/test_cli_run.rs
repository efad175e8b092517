use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn testcopy(current_dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("testcopy"));
    cmd.current_dir(current_dir)
        .env_remove("TESTCOPY_WORKFLOWS_DIR")
        .env_remove("RUST_LOG");
    cmd
}

fn seed_workflows(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    for name in ["orchestrator.json", "ingestion.json"] {
        fs::copy(fixture(name), dir.join(name)).unwrap();
    }
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_zero_config_run_uses_workflows_dir() {
    let workspace = TempDir::new().unwrap();
    let workflows = workspace.path().join("workflows");
    seed_workflows(&workflows);

    testcopy(workspace.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            "Creating TestCopy workflows with Chat Trigger",
        ))
        .stdout(predicate::str::contains("Processing: orchestrator"))
        .stdout(predicate::str::contains(
            "Replaced webhook node 'Webhook' with Chat Trigger",
        ))
        .stdout(predicate::str::contains(
            "No webhook node found in ingestion",
        ))
        .stdout(predicate::str::contains(
            "Successfully created 2/2 test copies",
        ));

    let orchestrator = read_json(&workflows.join("orchestrator_TestCopy.json"));
    assert_eq!(orchestrator["name"], "Orchestrator _TestCopy");
    assert_eq!(
        orchestrator["nodes"][0]["type"],
        "@n8n/n8n-nodes-langchain.chatTrigger"
    );
    assert_eq!(orchestrator["nodes"][1], read_json(&fixture("orchestrator.json"))["nodes"][1]);

    let ingestion = fs::read_to_string(workflows.join("ingestion_TestCopy.json")).unwrap();
    assert!(ingestion.starts_with("{\n  \"name\": \"Ingestion — documents _TestCopy\","));
}

#[test]
fn test_malformed_input_exits_one_and_continues() {
    let workspace = TempDir::new().unwrap();
    let workflows = workspace.path().join("workflows");
    seed_workflows(&workflows);
    fs::write(workflows.join("orchestrator.json"), "{\"name\": \"broken\",").unwrap();

    testcopy(workspace.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("JSON error in orchestrator.json:"))
        .stdout(predicate::str::contains(
            "Successfully created 1/2 test copies",
        ));

    assert!(!workflows.join("orchestrator_TestCopy.json").exists());
    assert!(workflows.join("ingestion_TestCopy.json").exists());
}

#[test]
fn test_missing_workflows_exit_one() {
    let workspace = TempDir::new().unwrap();

    testcopy(workspace.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Successfully created 0/2 test copies",
        ));
}

#[test]
fn test_workflows_dir_flag() {
    let workspace = TempDir::new().unwrap();
    let workflows = workspace.path().join("n8n").join("flows");
    seed_workflows(&workflows);

    testcopy(workspace.path())
        .arg("--workflows-dir")
        .arg("n8n/flows")
        .assert()
        .code(0);

    assert!(workflows.join("orchestrator_TestCopy.json").exists());
}

#[test]
fn test_workflows_dir_env() {
    let workspace = TempDir::new().unwrap();
    let workflows = workspace.path().join("elsewhere");
    seed_workflows(&workflows);

    testcopy(workspace.path())
        .env("TESTCOPY_WORKFLOWS_DIR", &workflows)
        .assert()
        .code(0);

    assert!(workflows.join("ingestion_TestCopy.json").exists());
}

#[test]
fn test_config_file_sets_dir_and_file_logging() {
    let workspace = TempDir::new().unwrap();
    seed_workflows(&workspace.path().join("configured"));
    fs::write(
        workspace.path().join("testcopy.toml"),
        "[workflows]\ndir = \"configured\"\n\n[logging]\nenable_file = true\ndefault_level = \"info\"\nconsole_output = \"none\"\n",
    )
    .unwrap();

    testcopy(workspace.path())
        .assert()
        .code(0)
        .stderr(predicate::str::is_empty());

    let log = fs::read_to_string(
        workspace
            .path()
            .join(".testcopy")
            .join("logs")
            .join("testcopy.log"),
    )
    .unwrap();
    assert!(log.contains("All 2 test copies created"));
}

#[test]
fn test_invalid_config_exits_two() {
    let workspace = TempDir::new().unwrap();
    fs::write(workspace.path().join("testcopy.toml"), "[workflows\n").unwrap();

    testcopy(workspace.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to parse config file"));
}

#[test]
fn test_help_lists_options() {
    let workspace = TempDir::new().unwrap();

    testcopy(workspace.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--workflows-dir"))
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--verbose"))
        .stdout(predicate::str::contains("orchestrator_TestCopy.json"))
        .stdout(predicate::str::contains("testcopy --workflows-dir ./n8n/workflows"))
        .stdout(predicate::str::contains("Configuration:"))
        .stdout(predicate::str::contains("Output Options:"));
}

#[test]
fn test_misspelled_log_level_exits_two() {
    let workspace = TempDir::new().unwrap();
    seed_workflows(&workspace.path().join("workflows"));
    fs::write(
        workspace.path().join("testcopy.toml"),
        "[logging]\ndefault_level = \"warning\"\n",
    )
    .unwrap();

    testcopy(workspace.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("'warning' is not a level"));

    assert!(!workspace
        .path()
        .join("workflows")
        .join("orchestrator_TestCopy.json")
        .exists());
}

#[test]
fn test_version_flag() {
    let workspace = TempDir::new().unwrap();

    testcopy(workspace.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
