use serial_test::serial;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use workflow_testcopy::core::config::loader::WORKFLOWS_DIR_ENV;
use workflow_testcopy::core::config::ConfigLoader;
use workflow_testcopy::logging::config::LoggingConfig;
use workflow_testcopy::logging::ConsoleOutput;

#[test]
#[serial]
fn test_full_config_file() {
    env::remove_var(WORKFLOWS_DIR_ENV);
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("testcopy.toml"),
        r#"
[workflows]
dir = "n8n/workflows"

[logging]
default_level = "info"
console_output = "stdout"
enable_file = true
log_dir = "logs"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load(temp_dir.path(), None).unwrap();
    assert_eq!(
        config.workflows.resolve_dir(temp_dir.path(), None),
        temp_dir.path().join("n8n/workflows")
    );

    let logging = LoggingConfig::from_section(config.logging.as_ref(), false).unwrap();
    assert_eq!(logging.default_level, "info");
    assert_eq!(logging.console_output, ConsoleOutput::Stdout);
    assert!(logging.enable_file);
    assert_eq!(logging.log_dir, Some(PathBuf::from("logs")));
}

#[test]
#[serial]
fn test_explicit_config_path_relative_to_base() {
    env::remove_var(WORKFLOWS_DIR_ENV);
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("conf")).unwrap();
    fs::write(
        temp_dir.path().join("conf").join("custom.toml"),
        "[workflows]\ndir = \"/abs/workflows\"\n",
    )
    .unwrap();

    let config = ConfigLoader::load(temp_dir.path(), Some(Path::new("conf/custom.toml"))).unwrap();
    assert_eq!(
        config.workflows.resolve_dir(temp_dir.path(), None),
        PathBuf::from("/abs/workflows")
    );
}

#[test]
#[serial]
fn test_blank_env_is_ignored() {
    let temp_dir = TempDir::new().unwrap();
    env::set_var(WORKFLOWS_DIR_ENV, "  ");
    let config = ConfigLoader::load(temp_dir.path(), None).unwrap();
    env::remove_var(WORKFLOWS_DIR_ENV);

    assert!(config.workflows.dir.is_none());
}

#[test]
#[serial]
fn test_unknown_console_output_rejected() {
    env::remove_var(WORKFLOWS_DIR_ENV);
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("testcopy.toml"),
        "[logging]\nconsole_output = \"syslog\"\n",
    )
    .unwrap();

    assert!(ConfigLoader::load(temp_dir.path(), None).is_err());
}
