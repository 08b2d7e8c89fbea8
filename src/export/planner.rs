use std::path::{Path, PathBuf};

use crate::context::caller::CallerContext;
use crate::context::prefix::resolve_prefix;
use crate::export::naming::{full_stem, pad_width};
use crate::export::options::{WriterOptions, merge_writer_options};
use crate::export::request::ExportRequest;
use crate::export::resolve::PathResolver;
use crate::figure::model::{Figure, GraphicsEngine};
use crate::foundation::diagnostics::Diagnostics;
use crate::foundation::error::SavefigsResult;

/// Final output location of one (figure, format) pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPlanEntry {
    /// Index of the figure.
    pub figure: u32,
    /// Destination directory.
    pub directory: PathBuf,
    /// Prefixed stem before collision resolution.
    pub stem: String,
    /// Output format, also the file extension.
    pub format: String,
    /// Resolved path; unique within one plan.
    pub path: PathBuf,
}

/// Dry-run result of [`plan_exports`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportPlan {
    /// Effective prefix.
    pub prefix: String,
    /// Entries in save order: figures in engine order, formats in list order.
    pub entries: Vec<OutputPlanEntry>,
}

/// Result of a completed [`export`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExportReport {
    /// Effective prefix.
    pub prefix: String,
    /// Writer options passed to every save.
    pub options: WriterOptions,
    /// Saved outputs, in save order.
    pub saved: Vec<OutputPlanEntry>,
    /// Non-fatal warnings emitted during the call.
    pub warnings: Vec<String>,
}

impl ExportReport {
    /// Saved file paths, in save order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.saved.iter().map(|e| e.path.as_path())
    }
}

/// Per-call state derived from the request before any figure is visited.
struct Prepared {
    directory: PathBuf,
    prefix: String,
    options: WriterOptions,
    warnings: Vec<String>,
    diag: Diagnostics,
}

fn prepare(request: &ExportRequest) -> SavefigsResult<Prepared> {
    let diag = Diagnostics::new(request.debug);

    let directory = request.resolve_directory()?;
    request.validate_formats()?;

    match &request.caller_path {
        Some(p) => diag.detail(format_args!("caller file: '{}'", p.display())),
        None => diag.detail(format_args!("caller file: none (or not detected)")),
    }
    let prefix = resolve_prefix(request.prefix.as_deref(), request.caller_path.as_deref());
    diag.detail(format_args!("stem prefix: {prefix:?}"));

    let (options, dropped) = merge_writer_options(&request.writer_options);
    let mut warnings = Vec::with_capacity(dropped.len());
    for key in dropped {
        let msg = format!("writer option `{key}` dropped");
        diag.warn(&msg);
        warnings.push(msg);
    }
    diag.detail(format_args!("writer options: {options:?}"));

    Ok(Prepared {
        directory,
        prefix,
        options,
        warnings,
        diag,
    })
}

/// Resolve every (figure, format) pair in order and hand each entry to `visit`.
///
/// Stops at the first error, whether from resolution or from `visit`.
fn visit_pairs<F>(
    figures: &[Figure],
    request: &ExportRequest,
    prepared: &Prepared,
    mut visit: F,
) -> SavefigsResult<()>
where
    F: FnMut(&Figure, OutputPlanEntry) -> SavefigsResult<()>,
{
    let width = pad_width(figures.len());
    let mut resolver = PathResolver::new(request.overwrite, request.conflict_mode);

    for figure in figures {
        let stem = full_stem(&prepared.prefix, figure, width);
        for format in &request.formats {
            let path = resolver.resolve(&prepared.directory, &stem, format)?;
            prepared.diag.detail(format_args!(
                "figure {} ({format}) -> '{}'",
                figure.index(),
                path.display()
            ));
            let entry = OutputPlanEntry {
                figure: figure.index(),
                directory: prepared.directory.clone(),
                stem: stem.clone(),
                format: format.clone(),
                path,
            };
            visit(figure, entry)?;
        }
    }
    Ok(())
}

/// Compute the output plan for `figures` without saving anything.
///
/// The plan is the one [`export`] would follow against the current state of the directory.
#[tracing::instrument(skip_all, fields(figures = figures.len()))]
pub fn plan_exports(figures: &[Figure], request: &ExportRequest) -> SavefigsResult<ExportPlan> {
    let prepared = prepare(request)?;
    let mut entries = Vec::with_capacity(figures.len() * request.formats.len());
    visit_pairs(figures, request, &prepared, |_, entry| {
        entries.push(entry);
        Ok(())
    })?;
    Ok(ExportPlan {
        prefix: prepared.prefix,
        entries,
    })
}

/// Save every open figure of `engine` in every requested format.
///
/// Pairs are resolved and saved one at a time. The first failure ends the call and files saved
/// before it stay on disk.
#[tracing::instrument(skip_all, fields(formats = ?request.formats, overwrite = request.overwrite))]
pub fn export(
    engine: &mut dyn GraphicsEngine,
    request: &ExportRequest,
) -> SavefigsResult<ExportReport> {
    let prepared = prepare(request)?;
    let figures = engine.open_figures();
    prepared
        .diag
        .detail(format_args!("{} open figure(s)", figures.len()));

    let mut saved = Vec::with_capacity(figures.len() * request.formats.len());
    visit_pairs(&figures, request, &prepared, |figure, entry| {
        engine.save_figure(figure, &entry.path, &entry.format, &prepared.options)?;
        saved.push(entry);
        Ok(())
    })?;

    Ok(ExportReport {
        prefix: prepared.prefix,
        options: prepared.options,
        saved,
        warnings: prepared.warnings,
    })
}

/// [`export`], asking `caller` for the invoking file when the request names neither a prefix
/// nor a caller path.
pub fn export_with_caller(
    engine: &mut dyn GraphicsEngine,
    request: &ExportRequest,
    caller: &dyn CallerContext,
) -> SavefigsResult<ExportReport> {
    if request.prefix.is_some() || request.caller_path.is_some() {
        return export(engine, request);
    }
    let mut request = request.clone();
    request.caller_path = caller.caller_path(request.stack_level);
    export(engine, &request)
}
