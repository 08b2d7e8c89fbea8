use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::foundation::error::{SavefigsError, SavefigsResult};
use crate::render::svg_engine::SvgEngine;

/// One figure listed in a [`FigureManifest`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestEntry {
    /// Figure label; empty for positional naming.
    #[serde(default)]
    pub label: String,
    /// SVG file, relative to the manifest.
    pub svg: PathBuf,
}

/// JSON list of figures to open.
///
/// ```json
/// { "figures": [ { "label": "loss", "svg": "loss.svg" }, { "svg": "scatter.svg" } ] }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FigureManifest {
    /// Figures in opening order.
    pub figures: Vec<ManifestEntry>,
}

impl FigureManifest {
    /// Parse a manifest from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> SavefigsResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| SavefigsError::figure(format!("parse figure manifest JSON: {e}")))
    }

    /// Parse a manifest from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SavefigsResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SavefigsError::figure(format!("open figure manifest '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Open every listed figure in `engine`, resolving files against `root`.
    pub fn open_into(&self, root: &Path, engine: &mut SvgEngine) -> SavefigsResult<()> {
        for entry in &self.figures {
            engine.add_svg_file(entry.label.clone(), root.join(&entry.svg))?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/manifest.rs"]
mod tests;
