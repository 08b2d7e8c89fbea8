use std::path::Path;

/// File name of `path` without directory and without its last extension.
pub fn stem_of(path: &Path) -> Option<String> {
    path.file_stem().map(|s| s.to_string_lossy().into_owned())
}

/// Resolve the effective file-name prefix for one export call.
///
/// - An explicit prefix wins, even when empty.
/// - Otherwise a caller path contributes `"{stem}_"`.
/// - Otherwise there is no prefix.
pub fn resolve_prefix(explicit: Option<&str>, caller: Option<&Path>) -> String {
    if let Some(prefix) = explicit {
        return prefix.to_string();
    }
    match caller.and_then(stem_of) {
        Some(stem) => format!("{stem}_"),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/context/prefix.rs"]
mod tests;
