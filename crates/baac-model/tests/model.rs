//! Tests for baac-model types.

use std::path::PathBuf;

use baac_model::{DatasetPaths, InputEncoding, RecordKind, RowErrorPolicy, RunConfig};

#[test]
fn run_config_reads_from_toml() {
    let text = r#"
year = 2009
row_errors = "skip"
input_encoding = "latin-1"

[datasets.characteristics]
input = "original_csv/caracteristiques_2009.csv"
output = "new_csv/NEW_caracteristiques_2009.csv"

[datasets.vehicles]
input = "original_csv/vehicules_2009.csv"
output = "new_csv/NEW_vehicules_2009.csv"
"#;
    let config: RunConfig = toml::from_str(text).expect("parse config");
    assert_eq!(config.year, 2009);
    assert_eq!(config.row_errors, RowErrorPolicy::Skip);
    assert_eq!(config.input_encoding, InputEncoding::Latin1);
    assert_eq!(config.datasets.len(), 2);
    assert_eq!(
        config.dataset(RecordKind::Vehicles),
        Some(&DatasetPaths {
            input: PathBuf::from("original_csv/vehicules_2009.csv"),
            output: PathBuf::from("new_csv/NEW_vehicules_2009.csv"),
        })
    );
}

#[test]
fn run_config_defaults_when_fields_missing() {
    let config: RunConfig = toml::from_str("").expect("parse empty config");
    assert_eq!(config, RunConfig::default());
    assert_eq!(config.year, 2009);
    assert_eq!(config.row_errors, RowErrorPolicy::FailFast);
    assert_eq!(config.input_encoding, InputEncoding::Utf8);
}

#[test]
fn record_kind_serializes_lowercase() {
    let json = serde_json::to_string(&RecordKind::Characteristics).expect("serialize kind");
    assert_eq!(json, "\"characteristics\"");
}

#[test]
fn unknown_kind_in_config_is_rejected() {
    let text = r#"
[datasets.accidents]
input = "a.csv"
output = "b.csv"
"#;
    assert!(toml::from_str::<RunConfig>(text).is_err());
}
