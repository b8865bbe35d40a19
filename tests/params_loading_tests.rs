//! Integration tests for reading filter options from JSON and YAML params

use sieve::prelude::*;
use std::io::Write;
use std::sync::Once;

static TRACING: Once = Once::new();

/// Route `RUST_LOG=sieve=trace` output through the test harness
fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

#[test]
fn test_yaml_file_drives_string_filter() {
    init_tracing();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
required: false
min: 3
max: 12
regex: "^[a-z0-9_]+$"
default: guest
"#
    )
    .unwrap();

    let params = Params::from_yaml_file(file.path()).unwrap();

    assert_eq!(
        filter_string_with("neo_42", &params),
        Filtered::Valid("neo_42".to_string())
    );
    assert_eq!(
        filter_string_with("No Spaces", &params),
        Filtered::Valid("guest".to_string())
    );
    assert_eq!(
        filter_string_with(RawValue::Null, &params),
        Filtered::Valid("guest".to_string())
    );
}

#[test]
fn test_missing_yaml_file_is_io_error() {
    let err = Params::from_yaml_file("/definitely/not/here.yaml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_broken_documents_are_config_errors() {
    assert!(matches!(
        Params::from_json_str("{\"min\": "),
        Err(ConfigError::Json(_))
    ));
    assert!(matches!(
        Params::from_yaml_str("min: [1, 2"),
        Err(ConfigError::Yaml(_))
    ));
    assert!(matches!(
        Params::from_yaml_str("- 1\n- 2\n"),
        Err(ConfigError::NotAMap { found: "array" })
    ));
}

#[test]
fn test_malformed_option_values_never_fail() {
    init_tracing();
    let params = Params::from_json_str(
        r#"{"min": "ten", "max": null, "allow": 16, "default": 1.5, "colour": "blue"}"#,
    )
    .unwrap();

    assert_eq!(filter_int_with("7", &params), Filtered::Valid(7));
    assert_eq!(filter_int_with("0x10", &params), Filtered::Invalid);
    assert_eq!(filter_int_with("x", &params), Filtered::Invalid);
}

#[test]
fn test_json_params_for_each_filter() {
    init_tracing();
    let float = Params::from_json_str(r#"{"decimal": ",", "default": 0.0}"#).unwrap();
    assert_eq!(filter_float_with("12,5", &float), Filtered::Valid(12.5));
    assert_eq!(filter_float_with("12.5", &float), Filtered::Valid(0.0));

    let boolean = Params::from_json_str(r#"{"strict_null": true}"#).unwrap();
    assert_eq!(filter_bool_with(RawValue::Null, &boolean), Filtered::Invalid);
    assert_eq!(filter_bool_with("no", &boolean), Filtered::Valid(false));

    let dates = Params::from_json_str(r#"{"min": "2000-01-01", "default": "2000-01-01"}"#).unwrap();
    let expected = DateTime::parse_from_rfc3339("2000-01-01T00:00:00+00:00").unwrap();
    assert_eq!(filter_datetime_with("1999-12-31", &dates), Filtered::Valid(expected));
}

#[test]
fn test_raw_values_from_a_document() {
    // Typed JSON values go straight into the filters
    let raw: Vec<RawValue> = serde_json::from_str(r#"["42", 42, 42.0, true, null]"#).unwrap();
    let options = IntOptions::default();
    let results: Vec<Filtered<i64>> = raw.into_iter().map(|v| filter_int(v, &options)).collect();
    assert_eq!(
        results,
        vec![
            Filtered::Valid(42),
            Filtered::Valid(42),
            Filtered::Valid(42),
            Filtered::Valid(1),
            Filtered::Invalid,
        ]
    );
}
