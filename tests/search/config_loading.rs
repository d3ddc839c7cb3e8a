//! Settings files: widget JSON in, validated configuration out.

use std::io::Write;
use std::path::Path;

use column_suggest::{Algorithm, Normalization, SearchConfig, SearchError};
use tempfile::NamedTempFile;

fn settings_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_loads_widget_settings() {
    let file = settings_file(
        r#"{
            "googleSheetId": "1AbC",
            "columnIndex": "2",
            "algorithm": "subsequence",
            "threshold": "0.25",
            "maxResults": 10,
            "minCharRequired": "2",
            "tokenize": "false",
            "normalization": "lowercase"
        }"#,
    );
    let config = SearchConfig::from_path(file.path()).unwrap();
    assert_eq!(config.algorithm, Algorithm::Subsequence);
    assert_eq!(config.threshold, 0.25);
    assert_eq!(config.max_results, 10);
    assert_eq!(config.min_char_required, 2);
    assert!(!config.tokenize);
    assert_eq!(config.normalization, Normalization::Lowercase);
    // unspecified keys keep their defaults
    assert_eq!(config.distance, 100);
    assert!(config.match_all_tokens);
}

#[test]
fn test_empty_object_is_default() {
    let file = settings_file("{}");
    assert_eq!(SearchConfig::from_path(file.path()).unwrap(), SearchConfig::default());
}

#[test]
fn test_malformed_json_is_config_error() {
    let file = settings_file(r#"{"threshold": }"#);
    let err = SearchConfig::from_path(file.path()).unwrap_err();
    assert!(matches!(err, SearchError::Config(_)));
    assert!(err.is_configuration());
}

#[test]
fn test_wrong_value_type_is_config_error() {
    let err = SearchConfig::from_json(r#"{"maxResults": "lots"}"#).unwrap_err();
    assert!(matches!(err, SearchError::Config(_)));
    let err = SearchConfig::from_json(r#"{"tokenize": "maybe"}"#).unwrap_err();
    assert!(matches!(err, SearchError::Config(_)));
}

#[test]
fn test_loaded_settings_are_validated() {
    let err = SearchConfig::from_json(r#"{"maxResults": 0}"#).unwrap_err();
    assert!(matches!(err, SearchError::ZeroMaxResults));

    let err = SearchConfig::from_json(r#"{"algorithm": "subsequence", "threshold": 1}"#).unwrap_err();
    assert!(matches!(err, SearchError::ThresholdRejectsAll { .. }));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = SearchConfig::from_path(Path::new("/no/such/settings.json")).unwrap_err();
    assert!(matches!(err, SearchError::Io { .. }));
    assert!(!err.is_configuration());
    assert!(err.to_string().contains("/no/such/settings.json"));
}
