use std::path::{Path, PathBuf};

use crate::figure::model::Figure;

/// Zero-padding width for positional stems.
///
/// `floor(log10(count)) + 1` for a non-empty set, `0` otherwise, so that generated names sort
/// lexicographically in figure order.
pub fn pad_width(count: usize) -> usize {
    if count == 0 {
        0
    } else {
        count.ilog10() as usize + 1
    }
}

/// Stem for one figure: its label, or `fig` plus the zero-padded index.
pub fn figure_stem(figure: &Figure, width: usize) -> String {
    if figure.label().is_empty() {
        format!("fig{:0width$}", figure.index())
    } else {
        figure.label().to_string()
    }
}

/// Prefixed stem for one figure.
pub fn full_stem(prefix: &str, figure: &Figure, width: usize) -> String {
    format!("{prefix}{}", figure_stem(figure, width))
}

/// `dir/stem.format`, or `dir/stem_n.format` with a numeric suffix.
///
/// The extension is appended, so a stem containing dots is kept whole.
pub fn candidate_path(dir: &Path, stem: &str, format: &str, suffix: Option<u64>) -> PathBuf {
    match suffix {
        Some(n) => dir.join(format!("{stem}_{n}.{format}")),
        None => dir.join(format!("{stem}.{format}")),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/naming.rs"]
mod tests;
