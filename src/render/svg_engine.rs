use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;

use crate::export::options::WriterOptions;
use crate::figure::model::{Figure, GraphicsEngine};
use crate::foundation::error::{SavefigsError, SavefigsResult};
use crate::render::raster::{RasterSettings, encode_pixmap, raster_format, render_pixmap};

/// An open figure backed by an SVG document.
#[derive(Clone)]
pub struct SvgFigure {
    figure: Figure,
    source: Arc<Vec<u8>>,
    tree: Arc<usvg::Tree>,
}

impl SvgFigure {
    /// Index and label.
    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    /// The SVG document as loaded.
    pub fn source(&self) -> &[u8] {
        &self.source
    }

    /// Parsed document.
    pub fn tree(&self) -> &usvg::Tree {
        &self.tree
    }
}

impl fmt::Debug for SvgFigure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SvgFigure")
            .field("figure", &self.figure)
            .field("source_len", &self.source.len())
            .finish_non_exhaustive()
    }
}

/// Graphics engine over SVG figures.
///
/// Figure indices are assigned on insertion, one past the highest open index.
pub struct SvgEngine {
    figures: Vec<SvgFigure>,
    fontdb: Arc<usvg::fontdb::Database>,
}

impl fmt::Debug for SvgEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SvgEngine")
            .field("figures", &self.figures)
            .field("font_faces", &self.fontdb.len())
            .finish()
    }
}

impl Default for SvgEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgEngine {
    /// Engine with no figures and an empty font database.
    pub fn new() -> Self {
        Self {
            figures: Vec::new(),
            fontdb: Arc::new(usvg::fontdb::Database::new()),
        }
    }

    /// Engine whose figures resolve text against the system fonts.
    pub fn with_system_fonts() -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        Self {
            figures: Vec::new(),
            fontdb: Arc::new(db),
        }
    }

    /// Open a figure from SVG bytes and return its index.
    pub fn add_svg(&mut self, label: impl Into<String>, bytes: Vec<u8>) -> SavefigsResult<u32> {
        self.insert(label.into(), bytes, None)
    }

    /// Open a figure from an SVG file and return its index.
    ///
    /// Relative references inside the document resolve against the file's directory.
    pub fn add_svg_file(
        &mut self,
        label: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> SavefigsResult<u32> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            SavefigsError::figure(format!("read svg '{}': {e}", path.display()))
        })?;
        self.insert(label.into(), bytes, path.parent().map(Path::to_path_buf))
    }

    /// Open figures, in insertion order.
    pub fn figures(&self) -> &[SvgFigure] {
        &self.figures
    }

    fn insert(
        &mut self,
        label: String,
        bytes: Vec<u8>,
        resources_dir: Option<PathBuf>,
    ) -> SavefigsResult<u32> {
        let opts = usvg::Options {
            resources_dir,
            fontdb: Arc::clone(&self.fontdb),
            ..Default::default()
        };
        let tree = usvg::Tree::from_data(&bytes, &opts)
            .map_err(|e| SavefigsError::figure(format!("parse svg: {e}")))?;

        let index = self
            .figures
            .iter()
            .map(|f| f.figure.index())
            .max()
            .map_or(1, |max| max + 1);
        self.figures.push(SvgFigure {
            figure: Figure::new(index, label)?,
            source: Arc::new(bytes),
            tree: Arc::new(tree),
        });
        Ok(index)
    }

    fn find(&self, index: u32) -> Option<&SvgFigure> {
        self.figures.iter().find(|f| f.figure.index() == index)
    }
}

impl GraphicsEngine for SvgEngine {
    fn open_figures(&self) -> Vec<Figure> {
        self.figures.iter().map(|f| f.figure.clone()).collect()
    }

    fn save_figure(
        &mut self,
        figure: &Figure,
        path: &Path,
        format: &str,
        options: &WriterOptions,
    ) -> anyhow::Result<()> {
        let fig = self
            .find(figure.index())
            .with_context(|| format!("figure {} is not open", figure.index()))?;

        if format.eq_ignore_ascii_case("svg") {
            std::fs::write(path, fig.source.as_slice())
                .with_context(|| format!("write svg '{}'", path.display()))?;
        } else if let Some(raster) = raster_format(format) {
            let settings = RasterSettings::from_options(options)?;
            let pixmap = render_pixmap(&fig.tree, &settings)?;
            encode_pixmap(&pixmap, path, raster)?;
        } else {
            anyhow::bail!("unsupported output format '{format}'");
        }

        tracing::debug!(figure = figure.index(), format, path = %path.display(), "saved figure");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg_engine.rs"]
mod tests;
