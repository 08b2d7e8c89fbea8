use std::path::Path;

use crate::export::options::WriterOptions;
use crate::foundation::error::{SavefigsError, SavefigsResult};

/// An open figure as reported by a [`GraphicsEngine`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Figure {
    index: u32,
    label: String,
}

impl Figure {
    /// Create a figure; `index` must be positive.
    pub fn new(index: u32, label: impl Into<String>) -> SavefigsResult<Self> {
        if index == 0 {
            return Err(SavefigsError::figure("figure index must be positive"));
        }
        Ok(Self {
            index,
            label: label.into(),
        })
    }

    /// Create a figure without a label.
    pub fn unlabeled(index: u32) -> SavefigsResult<Self> {
        Self::new(index, "")
    }

    /// Positive index, unique among open figures.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Human-readable label; empty when unset.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// The graphics engine that owns figures and encodes them to files.
///
/// Ordering contract: `open_figures` returns figures in a stable order (usually creation order),
/// and export names and saves them in that order.
pub trait GraphicsEngine {
    /// Currently open figures, in order.
    fn open_figures(&self) -> Vec<Figure>;

    /// Write `figure` to `path` in `format` using `options`.
    ///
    /// Errors are surfaced to the export caller as [`SavefigsError::Writer`] without change.
    fn save_figure(
        &mut self,
        figure: &Figure,
        path: &Path,
        format: &str,
        options: &WriterOptions,
    ) -> anyhow::Result<()>;
}

#[cfg(test)]
#[path = "../../tests/unit/figure/model.rs"]
mod tests;
