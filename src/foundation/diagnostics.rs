use std::fmt;

/// Per-call diagnostic sink.
///
/// Verbosity is chosen for a single export call (from [`crate::ExportRequest::debug`]) instead of
/// being configured process-wide. Details go out as `info` events when verbose and as `trace`
/// events otherwise; warnings are always emitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Diagnostics {
    verbose: bool,
}

impl Diagnostics {
    /// Create a sink; `verbose` promotes progress details to `info`.
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Whether progress details are promoted to `info`.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Emit a progress detail.
    pub fn detail(&self, args: fmt::Arguments<'_>) {
        if self.verbose {
            tracing::info!("{args}");
        } else {
            tracing::trace!("{args}");
        }
    }

    /// Emit a non-fatal warning.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }
}
