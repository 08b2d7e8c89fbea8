use super::*;
use serde_json::json;

#[test]
fn defaults_match_documented_parameters() {
    let req = ExportRequest::default();
    assert_eq!(req.directory, None);
    assert_eq!(req.prefix, None);
    assert_eq!(req.formats, vec!["png".to_string()]);
    assert!(req.writer_options.is_empty());
    assert!(req.overwrite);
    assert_eq!(req.conflict_mode, ConflictMode::Raise);
    assert!(!req.debug);
    assert_eq!(req.stack_level, 1);
}

#[test]
fn conflict_mode_parsing() {
    assert_eq!("raise".parse::<ConflictMode>().unwrap(), ConflictMode::Raise);
    assert_eq!("add_num".parse::<ConflictMode>().unwrap(), ConflictMode::AddNum);
    assert_eq!("add-num".parse::<ConflictMode>().unwrap(), ConflictMode::AddNum);

    let err = "bogus".parse::<ConflictMode>().unwrap_err();
    assert!(matches!(err, SavefigsError::Config(_)));
    assert!(err.to_string().contains("invalid conflict mode 'bogus'"));
}

#[test]
fn missing_directory_is_a_config_error() {
    let req = ExportRequest::new().directory("target/definitely/not/here");
    let err = req.resolve_directory().unwrap_err();
    assert!(matches!(err, SavefigsError::Config(_)));
    assert!(err.to_string().contains("invalid directory"));
}

#[test]
fn default_directory_is_cwd() {
    let dir = ExportRequest::new().resolve_directory().unwrap();
    assert_eq!(dir, std::env::current_dir().unwrap());
}

#[test]
fn formats_must_be_present_and_non_empty() {
    let empty = ExportRequest::new().formats(Vec::<String>::new());
    assert!(matches!(
        empty.validate_formats(),
        Err(SavefigsError::Config(_))
    ));
    let blank = ExportRequest::new().formats(["png", ""]);
    assert!(matches!(
        blank.validate_formats(),
        Err(SavefigsError::Config(_))
    ));
    assert!(ExportRequest::new().formats(["png", "svg"]).validate_formats().is_ok());
}

#[test]
fn config_overrides_request_fields() {
    let json = r#"{
        "formats": ["svg"],
        "overwrite": false,
        "conflict_mode": "add_num",
        "writer_options": { "dpi": 300 }
    }"#;
    let cfg = ExportConfig::from_reader(json.as_bytes()).unwrap();
    let req = cfg.apply_to(ExportRequest::new().prefix("keep_"));

    assert_eq!(req.formats, vec!["svg".to_string()]);
    assert!(!req.overwrite);
    assert_eq!(req.conflict_mode, ConflictMode::AddNum);
    assert_eq!(req.writer_options["dpi"], json!(300));
    assert_eq!(req.prefix.as_deref(), Some("keep_"));
}

#[test]
fn config_with_bogus_conflict_mode_is_a_config_error() {
    let json = r#"{ "conflict_mode": "bogus" }"#;
    let err = ExportConfig::from_reader(json.as_bytes()).unwrap_err();
    assert!(matches!(err, SavefigsError::Config(_)));
}

#[test]
fn config_rejects_unknown_fields() {
    let json = r#"{ "clobber": false }"#;
    assert!(ExportConfig::from_reader(json.as_bytes()).is_err());
}
