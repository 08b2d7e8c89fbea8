use super::*;
use serde_json::json;

#[test]
fn defaults_are_applied_without_user_options() {
    let (merged, dropped) = merge_writer_options(&WriterOptions::new());
    assert_eq!(merged, default_writer_options());
    assert_eq!(merged["dpi"], json!(200));
    assert_eq!(merged["transparent"], json!(true));
    assert_eq!(merged["bbox_inches"], json!("tight"));
    assert_eq!(merged["pad_inches"], json!(0.05));
    assert!(dropped.is_empty());
}

#[test]
fn user_options_override_and_extend_defaults() {
    let mut user = WriterOptions::new();
    user.insert("dpi".to_string(), json!(72));
    user.insert("facecolor".to_string(), json!("white"));

    let (merged, dropped) = merge_writer_options(&user);
    assert_eq!(merged["dpi"], json!(72));
    assert_eq!(merged["facecolor"], json!("white"));
    assert_eq!(merged["transparent"], json!(true));
    assert!(dropped.is_empty());
}

#[test]
fn format_key_is_dropped_and_reported() {
    let mut user = WriterOptions::new();
    user.insert("format".to_string(), json!("pdf"));

    let (merged, dropped) = merge_writer_options(&user);
    assert!(!merged.contains_key("format"));
    assert_eq!(dropped, vec!["format".to_string()]);
}
