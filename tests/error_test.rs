use texta_core::{Result, TextaError};

#[test]
fn test_error_display() {
    let err = TextaError::ModelNotAvailable("bigscience/bloom".to_string());
    assert!(err.to_string().contains("bigscience/bloom"));
    assert!(err.to_string().contains("not available"));
}

#[test]
fn test_json_error_wraps() {
    let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err: TextaError = json_err.into();
    assert!(matches!(err, TextaError::Json(_)));
    assert!(err.to_string().starts_with("JSON error"));
}

#[test]
fn test_result_alias() {
    fn returns_error() -> Result<()> {
        Err(TextaError::ModelNotAvailable("none".into()))
    }
    assert!(returns_error().is_err());
}
