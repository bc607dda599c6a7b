//! Configuration tests.
//!
//! Checks the defaults and that partial JSON documents deserialize with
//! every omitted field falling back to its default.

use sapsim_core::Config;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert!(!config.general.trace_instructions);
    assert_eq!(config.general.max_steps, 0);
}

#[test]
fn test_json_deserialization() {
    let config: Config = serde_json::from_str(
        r#"{"general": {"trace_instructions": true, "max_steps": 100}}"#,
    )
    .unwrap();
    assert!(config.general.trace_instructions);
    assert_eq!(config.general.max_steps, 100);
}

#[test]
fn test_partial_json_falls_back_to_defaults() {
    let config: Config = serde_json::from_str(r#"{}"#).unwrap();
    assert!(!config.general.trace_instructions);
    assert_eq!(config.general.max_steps, 0);

    let config: Config =
        serde_json::from_str(r#"{"general": {"trace_instructions": true}}"#).unwrap();
    assert!(config.general.trace_instructions);
    assert_eq!(config.general.max_steps, 0);
}
