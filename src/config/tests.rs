//! Tests for config functionality.

use crate::config::{DEFAULT_TARGET_NAME, ExecConfig};
use crate::error::ExecError;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = ExecConfig::default();

    assert_eq!(config.working_directory, PathBuf::from("workspace"));
    assert_eq!(config.default_target_name, "code.py");
    assert_eq!(config.default_target_name, DEFAULT_TARGET_NAME);
    assert!(config.events_log.is_none());
    assert!(config.extra.is_empty());

    #[cfg(windows)]
    {
        assert_eq!(config.interpreter, "python");
        assert_eq!(config.shell, "cmd");
        assert_eq!(config.shell_flag, "/C");
    }
    #[cfg(not(windows))]
    {
        assert_eq!(config.interpreter, "python3");
        assert_eq!(config.shell, "sh");
        assert_eq!(config.shell_flag, "-c");
    }
}

#[test]
fn test_parse_empty_yaml() {
    let config = ExecConfig::from_yaml("").unwrap();
    assert_eq!(config, ExecConfig::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
working_directory: /srv/agent/work
interpreter: python3.12
"#;
    let config = ExecConfig::from_yaml(yaml).unwrap();

    assert_eq!(config.working_directory, PathBuf::from("/srv/agent/work"));
    assert_eq!(config.interpreter, "python3.12");

    // Unspecified values should use defaults
    assert_eq!(config.default_target_name, "code.py");
    assert_eq!(config.shell, ExecConfig::default().shell);
}

#[test]
fn test_parse_yaml_without_working_directory_uses_default() {
    let config = ExecConfig::from_yaml("interpreter: node\n").unwrap();

    assert_eq!(config.interpreter, "node");
    assert_eq!(config.working_directory, PathBuf::from("workspace"));
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
working_directory: data
interpreter: node
shell: bash
shell_flag: -lc
default_target_name: main.js
events_log: logs/events.ndjson
"#;
    let config = ExecConfig::from_yaml(yaml).unwrap();

    assert_eq!(config.working_directory, PathBuf::from("data"));
    assert_eq!(config.interpreter, "node");
    assert_eq!(config.shell, "bash");
    assert_eq!(config.shell_flag, "-lc");
    assert_eq!(config.default_target_name, "main.js");
    assert_eq!(
        config.events_log,
        Some(PathBuf::from("logs/events.ndjson"))
    );
}

#[test]
fn test_unknown_fields_are_preserved() {
    let yaml = r#"
interpreter: python3
sandbox_profile: strict
"#;
    let config = ExecConfig::from_yaml(yaml).unwrap();
    assert!(config.extra.contains_key("sandbox_profile"));

    let round_tripped = config.to_yaml().unwrap();
    assert!(round_tripped.contains("sandbox_profile: strict"));
}

#[test]
fn test_invalid_yaml_is_config_error() {
    let err = ExecConfig::from_yaml("interpreter: [unclosed").unwrap_err();
    assert!(matches!(err, ExecError::Config(_)));
    assert!(err.to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_validation_rejects_empty_interpreter() {
    let err = ExecConfig::from_yaml("interpreter: \"  \"").unwrap_err();
    assert!(err.to_string().contains("interpreter must not be empty"));
}

#[test]
fn test_validation_rejects_empty_working_directory() {
    let err = ExecConfig::from_yaml("working_directory: \"\"").unwrap_err();
    assert!(err.to_string().contains("working_directory must not be empty"));
}

#[test]
fn test_validation_rejects_empty_shell() {
    let config = ExecConfig {
        shell: String::new(),
        ..ExecConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("shell must not be empty"));
}

#[test]
fn test_validation_rejects_nul_in_default_target() {
    let config = ExecConfig {
        default_target_name: "code\0.py".to_string(),
        ..ExecConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("NUL"));
}

#[test]
fn test_load_or_default_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = ExecConfig::load_or_default(temp_dir.path().join("coderun.yaml")).unwrap();
    assert_eq!(config, ExecConfig::default());
}

#[test]
fn test_load_reads_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("coderun.yaml");
    std::fs::write(&path, "working_directory: scratch\n").unwrap();

    let config = ExecConfig::load(&path).unwrap();
    assert_eq!(config.working_directory, PathBuf::from("scratch"));

    let config = ExecConfig::load_or_default(&path).unwrap();
    assert_eq!(config.working_directory, PathBuf::from("scratch"));
}

#[test]
fn test_load_missing_file_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = ExecConfig::load(temp_dir.path().join("nope.yaml")).unwrap_err();
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn test_with_working_directory() {
    let config = ExecConfig::with_working_directory("/tmp/run");
    assert_eq!(config.working_directory, PathBuf::from("/tmp/run"));
    assert_eq!(config.default_target_name, "code.py");
}
