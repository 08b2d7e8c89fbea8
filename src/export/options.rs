use std::collections::BTreeMap;

/// Options forwarded to the graphics engine's save call.
pub type WriterOptions = BTreeMap<String, serde_json::Value>;

/// Keys that never reach the engine: the format comes from the export format list.
pub const DROPPED_OPTION_KEYS: &[&str] = &["format"];

/// Default writer options applied under any user overrides.
///
/// | key           | value     |
/// | ------------- | --------- |
/// | `dpi`         | `200`     |
/// | `transparent` | `true`    |
/// | `bbox_inches` | `"tight"` |
/// | `pad_inches`  | `0.05`    |
pub fn default_writer_options() -> WriterOptions {
    let mut opts = WriterOptions::new();
    opts.insert("dpi".to_string(), serde_json::json!(200));
    opts.insert("transparent".to_string(), serde_json::json!(true));
    opts.insert("bbox_inches".to_string(), serde_json::json!("tight"));
    opts.insert("pad_inches".to_string(), serde_json::json!(0.05));
    opts
}

/// Layer `user` over the defaults and strip [`DROPPED_OPTION_KEYS`].
///
/// Returns the merged options and the keys that were dropped, in key order.
pub fn merge_writer_options(user: &WriterOptions) -> (WriterOptions, Vec<String>) {
    let mut merged = default_writer_options();
    merged.extend(user.iter().map(|(k, v)| (k.clone(), v.clone())));

    let mut dropped = Vec::new();
    for key in DROPPED_OPTION_KEYS {
        if merged.remove(*key).is_some() {
            dropped.push((*key).to_string());
        }
    }
    (merged, dropped)
}

#[cfg(test)]
#[path = "../../tests/unit/export/options.rs"]
mod tests;
