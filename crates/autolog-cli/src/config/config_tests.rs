#![allow(non_snake_case)]

use super::*;

// Config parsing tests

#[test]
fn Config___from_str___parses_full_config() {
    let toml = r#"
[output]
dir = "build/generated/autolog"
package = "frc.robot"
depfile = "build/autolog.d"

[kotlin]
log_table = "com.example.LogTable"
loggable_inputs = "com.example.LoggableInputs"
access = "accessors"
"#;

    let config = Config::from_str(toml).unwrap();

    assert_eq!(
        config.output.dir.as_deref(),
        Some(Path::new("build/generated/autolog"))
    );
    assert_eq!(config.output.package.as_deref(), Some("frc.robot"));
    assert_eq!(config.output.depfile.as_deref(), Some(Path::new("build/autolog.d")));
    assert_eq!(config.kotlin.log_table, "com.example.LogTable");
    assert_eq!(config.kotlin.access, AccessStyle::Accessors);
}

#[test]
fn Config___from_str___empty_uses_defaults() {
    let config = Config::from_str("").unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.kotlin.log_table, DEFAULT_LOG_TABLE);
    assert_eq!(config.kotlin.loggable_inputs, DEFAULT_LOGGABLE_INPUTS);
    assert_eq!(config.kotlin.access, AccessStyle::Property);
}

#[test]
fn Config___from_str___partial_kotlin_section_keeps_other_defaults() {
    let config = Config::from_str("[kotlin]\naccess = \"accessors\"\n").unwrap();

    assert_eq!(config.kotlin.log_table, DEFAULT_LOG_TABLE);
    assert_eq!(config.kotlin.access, AccessStyle::Accessors);
}

#[test]
fn Config___from_str___unknown_access_style_fails() {
    let result = Config::from_str("[kotlin]\naccess = \"reflection\"\n");

    assert!(result.is_err());
}

#[test]
fn Config___from_str___invalid_toml_fails() {
    let result = Config::from_str("[output\ndir = ");

    assert!(result.is_err());
}

#[test]
fn Config___from_file___missing_file_fails_with_path() {
    let err = Config::from_file("does/not/exist/autolog.toml").unwrap_err();

    assert!(err.to_string().contains("does/not/exist/autolog.toml"));
}

// Config validation tests

#[test]
fn Config___validate___defaults_are_valid() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn Config___validate___empty_log_table_fails() {
    let mut config = Config::default();
    config.kotlin.log_table = String::new();

    let err = config.validate().unwrap_err();

    assert!(err.to_string().contains("kotlin.log_table"));
}

#[test]
fn Config___validate___malformed_package_fails() {
    let mut config = Config::default();
    config.output.package = Some("frc..robot".into());

    assert!(config.validate().is_err());
}

#[test]
fn KotlinSection___options___carries_all_settings() {
    let section = KotlinSection {
        log_table: "a.Table".into(),
        loggable_inputs: "a.Inputs".into(),
        access: AccessStyle::Accessors,
    };

    let options = section.options();

    assert_eq!(options.log_table, "a.Table");
    assert_eq!(options.loggable_inputs, "a.Inputs");
    assert_eq!(options.access, AccessStyle::Accessors);
}
