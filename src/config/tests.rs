use super::Config;
use crate::exit_codes;
use tempfile::TempDir;

#[test]
fn default_config_is_valid() {
    let config = Config::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.namespace, "ns");
    assert_eq!(config.class_suffix, "Class");
    assert_eq!(config.test_class_suffix, "Test");
    assert!(config.templates.is_empty());
    assert!(config.write_events_log);
}

#[test]
fn empty_yaml_yields_defaults() {
    let config: Config = serde_yaml::from_str("{}").unwrap();
    assert_eq!(config.namespace, "ns");
    assert!(config.write_events_log);
}

#[test]
fn partial_yaml_fills_missing_fields() {
    let yaml = "namespace: myproject\n";
    let config: Config = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.namespace, "myproject");
    assert_eq!(config.test_class_suffix, "Test");
}

#[test]
fn unknown_fields_are_preserved() {
    let yaml = "namespace: foo\nfuture_option: 42\n";
    let config: Config = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.namespace, "foo");
    assert!(config.extra.contains_key("future_option"));
}

#[test]
fn yaml_round_trip() {
    let mut config = Config::default();
    config.namespace = "round".to_string();
    config
        .templates
        .insert("test_source".to_string(), "my_test.cpp".to_string());

    let yaml = config.to_yaml().unwrap();
    let parsed: Config = serde_yaml::from_str(&yaml).unwrap();

    assert_eq!(parsed.namespace, "round");
    assert_eq!(
        parsed.templates.get("test_source").map(String::as_str),
        Some("my_test.cpp")
    );
}

#[test]
fn load_reads_and_validates() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("joist.yaml");
    std::fs::write(&path, "namespace: loaded\nwrite_events_log: false\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.namespace, "loaded");
    assert!(!config.write_events_log);
}

#[test]
fn load_fails_for_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = Config::load(dir.path().join("absent.yaml")).unwrap_err();
    assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
}

#[test]
fn load_fails_for_malformed_yaml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("joist.yaml");
    std::fs::write(&path, "namespace: [unclosed\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("failed to parse"));
}

#[test]
fn validate_rejects_bad_namespace() {
    let mut config = Config::default();
    config.namespace = "my project".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn validate_rejects_bad_suffix() {
    let mut config = Config::default();
    config.test_class_suffix = "Test-Suffix".to_string();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("test_class_suffix"));
}

#[test]
fn validate_rejects_unknown_template_role() {
    let mut config = Config::default();
    config
        .templates
        .insert("not_a_role".to_string(), "file.txt".to_string());
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("not_a_role"));
}

#[test]
fn resolve_explicit_path_must_exist() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.yaml");
    assert!(Config::resolve(Some(&missing)).is_err());
}
