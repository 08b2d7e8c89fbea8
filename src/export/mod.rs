//! Export planning: names every (figure, format) pair, resolves collisions, and drives saves.

/// Figure and output naming rules.
pub mod naming;
/// Writer option defaults and merging.
pub mod options;
/// Export orchestration.
pub mod planner;
/// Export request, conflict mode, and JSON configuration.
pub mod request;
/// Collision resolution against disk and earlier claims.
pub mod resolve;

pub use naming::{candidate_path, figure_stem, full_stem, pad_width};
pub use options::{WriterOptions, default_writer_options, merge_writer_options};
pub use planner::{
    ExportPlan, ExportReport, OutputPlanEntry, export, export_with_caller, plan_exports,
};
pub use request::{ConflictMode, ExportConfig, ExportRequest};
pub use resolve::PathResolver;
