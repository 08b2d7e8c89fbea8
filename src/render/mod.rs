//! SVG-backed graphics engine.
//!
//! Figures are held as parsed SVG documents. `svg` output writes the document back unchanged;
//! raster formats are drawn with `resvg` and encoded with `image`.

/// JSON figure manifests.
pub mod manifest;
/// Rasterisation and raster encoding.
pub mod raster;
/// The [`crate::GraphicsEngine`] implementation.
pub mod svg_engine;

pub use manifest::{FigureManifest, ManifestEntry};
pub use raster::{RasterSettings, raster_format, render_pixmap};
pub use svg_engine::{SvgEngine, SvgFigure};
