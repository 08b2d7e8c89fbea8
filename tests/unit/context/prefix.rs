use super::*;
use std::path::PathBuf;

#[test]
fn explicit_prefix_is_returned_unchanged() {
    let caller = PathBuf::from("/work/analysis.py");
    assert_eq!(resolve_prefix(Some("hihi"), Some(&caller)), "hihi");
    assert_eq!(resolve_prefix(Some(""), Some(&caller)), "");
}

#[test]
fn caller_stem_becomes_prefix() {
    let caller = PathBuf::from("tests/sample_script.py");
    assert_eq!(resolve_prefix(None, Some(&caller)), "sample_script_");
}

#[test]
fn only_last_extension_is_stripped() {
    let caller = PathBuf::from("/data/run.v2.json");
    assert_eq!(resolve_prefix(None, Some(&caller)), "run.v2_");
}

#[test]
fn no_caller_means_no_prefix() {
    assert_eq!(resolve_prefix(None, None), "");
}

#[test]
fn stem_of_root_is_none() {
    assert_eq!(stem_of(Path::new("/")), None);
    assert_eq!(stem_of(Path::new("a/b/plot.svg")).as_deref(), Some("plot"));
}
