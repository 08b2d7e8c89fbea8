use std::path::{Path, PathBuf};

/// Source of the "invoking file" used to derive a default prefix.
///
/// How the path is found is up to the implementation. Export only consumes the result.
pub trait CallerContext {
    /// Return the invoking file, skipping `skip_levels` call levels, or `None` when unknown.
    fn caller_path(&self, skip_levels: usize) -> Option<PathBuf>;
}

impl<F> CallerContext for F
where
    F: Fn(usize) -> Option<PathBuf>,
{
    fn caller_path(&self, skip_levels: usize) -> Option<PathBuf> {
        self(skip_levels)
    }
}

/// Classification of a raw caller-source name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallerSource {
    /// A real file whose stem can name outputs.
    File(PathBuf),
    /// REPL input, `-c` strings, notebook cells: nothing to derive a stem from.
    Interactive,
}

/// Classify a caller-source name against the system temp directory.
pub fn classify_source(name: &str) -> CallerSource {
    classify_source_in(name, &std::env::temp_dir())
}

/// Classify a caller-source name against an explicit temp directory.
///
/// Pseudo sources are written in angle brackets (`<stdin>`, `<string>`, `<ipython-input-5-..>`).
/// Notebook kernels compile cells into `<tmp>/ipykernel_<pid>/<hash>.py`.
pub fn classify_source_in(name: &str, tmp_dir: &Path) -> CallerSource {
    if name.is_empty() || name.starts_with('<') {
        return CallerSource::Interactive;
    }
    let path = PathBuf::from(name);
    let kernel_cell = path
        .parent()
        .filter(|dir| {
            dir.file_name()
                .is_some_and(|n| n.to_string_lossy().starts_with("ipykernel_"))
        })
        .and_then(Path::parent)
        .is_some_and(|grand| grand == tmp_dir);
    if kernel_cell {
        CallerSource::Interactive
    } else {
        CallerSource::File(path)
    }
}

/// Caller context with a fixed answer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticCaller {
    path: Option<PathBuf>,
}

impl StaticCaller {
    /// Always report `path`.
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// Never report a caller.
    pub fn none() -> Self {
        Self::default()
    }

    /// Report the file named by a raw caller-source string, if it names one.
    pub fn from_source(name: &str) -> Self {
        match classify_source(name) {
            CallerSource::File(path) => Self::new(Some(path)),
            CallerSource::Interactive => Self::none(),
        }
    }
}

impl CallerContext for StaticCaller {
    fn caller_path(&self, _skip_levels: usize) -> Option<PathBuf> {
        self.path.clone()
    }
}

/// Substring the final history entry must contain for the history to be searched.
pub const CALL_MARKER: &str = "savefigs(";

/// Path of the most recent `runfile('<path>', wdir=...)` entry in a session history.
///
/// Entries are oldest first. Both quote styles are accepted and `wdir` is optional.
pub fn last_runfile(history: &[String]) -> Option<PathBuf> {
    history.iter().rev().find_map(|cmd| parse_runfile(cmd))
}

fn parse_runfile(cmd: &str) -> Option<PathBuf> {
    let args = cmd.trim().strip_prefix("runfile(")?;
    let first = match args.split_once(", wdir=") {
        Some((first, _)) => first,
        None => args.strip_suffix(')')?,
    };
    let first = first.trim();
    let path = ['\'', '"']
        .iter()
        .find_map(|q| first.strip_prefix(*q)?.strip_suffix(*q))?;
    (!path.is_empty()).then(|| PathBuf::from(path))
}

/// Caller context for interactive sessions that ran a script with `runfile`.
///
/// A real source file wins. For interactive sources the session history is searched, but only
/// when its final entry is the export call itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistoryCaller {
    source: String,
    history: Vec<String>,
}

impl HistoryCaller {
    /// Pair a raw caller-source name with the session history, oldest entry first.
    pub fn new(source: impl Into<String>, history: Vec<String>) -> Self {
        Self {
            source: source.into(),
            history,
        }
    }
}

impl CallerContext for HistoryCaller {
    fn caller_path(&self, _skip_levels: usize) -> Option<PathBuf> {
        if let CallerSource::File(path) = classify_source(&self.source) {
            return Some(path);
        }
        let last = self.history.last()?;
        if !last.contains(CALL_MARKER) {
            tracing::debug!(last = %last, "last history entry is not an export call, skipping history");
            return None;
        }
        let found = last_runfile(&self.history);
        match &found {
            Some(path) => tracing::debug!(path = %path.display(), "caller file found in session history"),
            None => tracing::debug!("no runfile entry in session history"),
        }
        found
    }
}

/// Caller context reporting the running executable.
///
/// Compiled programs have no script file; the executable plays that role, so a binary named
/// `analysis` exports `analysis_fig1.png`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExecutableCaller;

impl CallerContext for ExecutableCaller {
    fn caller_path(&self, _skip_levels: usize) -> Option<PathBuf> {
        std::env::current_exe().ok()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/context/caller.rs"]
mod tests;
