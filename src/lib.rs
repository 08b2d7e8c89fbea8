//! savefigs writes every open figure to disk under a deterministic, collision-free name.
//!
//! # Naming
//!
//! Each figure gets a stem: its label if it has one, otherwise `fig` plus its index zero-padded
//! to the digit count of the number of open figures (`fig01` .. `fig10`). The stem is prefixed
//! with an explicit prefix, or with `"{caller_stem}_"` when the invoking file is known, and
//! expanded over the requested formats as `{dir}/{prefix}{stem}.{format}`.
//!
//! # Conflicts
//!
//! With `overwrite` on (the default) existing files are replaced. With it off, a taken path
//! either fails the call ([`ConflictMode::Raise`]) or gets the first free `_2`, `_3`, ...
//! suffix ([`ConflictMode::AddNum`]). Paths claimed earlier in the same call always count as
//! taken, so no two outputs of one call share a path.
//!
//! # Getting started
//!
//! ```no_run
//! use savefigs::{ExportRequest, SvgEngine, export};
//!
//! let mut engine = SvgEngine::new();
//! engine.add_svg("", std::fs::read("plot.svg")?)?;
//! let report = export(
//!     &mut engine,
//!     &ExportRequest::new().directory("figures").formats(["png", "svg"]),
//! )?;
//! for path in report.paths() {
//!     println!("{}", path.display());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Caller context and prefix resolution.
pub mod context;
/// Export planning and execution.
pub mod export;
/// Figures and the graphics engine boundary.
pub mod figure;
/// SVG-backed graphics engine.
pub mod render;

pub use crate::context::{
    CallerContext, ExecutableCaller, HistoryCaller, StaticCaller, resolve_prefix,
};
pub use crate::export::{
    ConflictMode, ExportConfig, ExportPlan, ExportReport, ExportRequest, OutputPlanEntry,
    WriterOptions, default_writer_options, export, export_with_caller, plan_exports,
};
pub use crate::figure::{Figure, GraphicsEngine, RecordingEngine, SaveCall};
pub use crate::foundation::diagnostics::Diagnostics;
pub use crate::foundation::error::{SavefigsError, SavefigsResult};
pub use crate::render::{FigureManifest, SvgEngine};
