use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::export::options::WriterOptions;
use crate::figure::model::{Figure, GraphicsEngine};
use crate::foundation::error::SavefigsResult;

/// One `save_figure` call captured by [`RecordingEngine`].
#[derive(Clone, Debug, PartialEq)]
pub struct SaveCall {
    /// Index of the saved figure.
    pub figure: u32,
    /// Destination path.
    pub path: PathBuf,
    /// Requested format.
    pub format: String,
    /// Writer options passed along.
    pub options: WriterOptions,
}

/// In-memory engine for tests and debugging.
///
/// Every save writes a one-line placeholder file so that later existence checks observe it, and
/// is recorded in call order.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    figures: Vec<Figure>,
    calls: Vec<SaveCall>,
    fail_format: Option<String>,
}

impl RecordingEngine {
    /// Create an engine with no open figures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with the given open figures.
    pub fn with_figures(figures: Vec<Figure>) -> Self {
        Self {
            figures,
            ..Self::default()
        }
    }

    /// Create an engine with `count` unlabeled figures numbered from 1.
    pub fn unlabeled(count: u32) -> SavefigsResult<Self> {
        let figures = (1..=count)
            .map(Figure::unlabeled)
            .collect::<SavefigsResult<Vec<_>>>()?;
        Ok(Self::with_figures(figures))
    }

    /// Open another figure.
    pub fn push_figure(&mut self, figure: Figure) {
        self.figures.push(figure);
    }

    /// Make every save in `format` fail as an encoder would for an unsupported format.
    pub fn fail_on_format(mut self, format: impl Into<String>) -> Self {
        self.fail_format = Some(format.into());
        self
    }

    /// Captured save calls, in order.
    pub fn calls(&self) -> &[SaveCall] {
        &self.calls
    }
}

impl GraphicsEngine for RecordingEngine {
    fn open_figures(&self) -> Vec<Figure> {
        self.figures.clone()
    }

    fn save_figure(
        &mut self,
        figure: &Figure,
        path: &Path,
        format: &str,
        options: &WriterOptions,
    ) -> anyhow::Result<()> {
        if self.fail_format.as_deref() == Some(format) {
            anyhow::bail!("format '{format}' is not supported");
        }
        std::fs::write(path, format!("figure {} as {format}\n", figure.index()))
            .with_context(|| format!("write '{}'", path.display()))?;
        self.calls.push(SaveCall {
            figure: figure.index(),
            path: path.to_path_buf(),
            format: format.to_string(),
            options: options.clone(),
        });
        Ok(())
    }
}
