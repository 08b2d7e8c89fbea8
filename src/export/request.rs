use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::export::options::WriterOptions;
use crate::foundation::error::{SavefigsError, SavefigsResult};

/// What to do when a computed output path is already taken and overwriting is off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictMode {
    /// Fail the export with [`SavefigsError::Conflict`].
    #[default]
    Raise,
    /// Append `_2`, `_3`, ... to the stem until a free path is found.
    #[serde(alias = "add-num")]
    AddNum,
}

impl ConflictMode {
    /// Canonical name, as accepted by [`FromStr`] and serde.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Raise => "raise",
            Self::AddNum => "add_num",
        }
    }
}

impl fmt::Display for ConflictMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConflictMode {
    type Err = SavefigsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raise" => Ok(Self::Raise),
            "add_num" | "add-num" => Ok(Self::AddNum),
            other => Err(SavefigsError::config(format!(
                "invalid conflict mode '{other}' (expected 'raise' or 'add_num')"
            ))),
        }
    }
}

/// Parameters of one export call.
///
/// `Default` gives: current directory, prefix derived from the caller, `["png"]`, no writer
/// options, overwrite on, [`ConflictMode::Raise`], quiet diagnostics, stack level 1.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportRequest {
    /// Destination directory; `None` means the current working directory. Must exist.
    pub directory: Option<PathBuf>,
    /// Explicit prefix. `Some("")` asks for no prefix at all.
    pub prefix: Option<String>,
    /// Invoking file, used for the prefix when `prefix` is `None`.
    pub caller_path: Option<PathBuf>,
    /// Output formats, e.g. `png`, `svg`. Saved in list order.
    pub formats: Vec<String>,
    /// Options layered over [`crate::default_writer_options`].
    pub writer_options: WriterOptions,
    /// Replace files that existed before the call.
    pub overwrite: bool,
    /// Policy when a path is taken and cannot be replaced.
    pub conflict_mode: ConflictMode,
    /// Promote progress diagnostics to `info` for this call.
    pub debug: bool,
    /// Call levels a [`crate::CallerContext`] should skip.
    pub stack_level: usize,
}

impl Default for ExportRequest {
    fn default() -> Self {
        Self {
            directory: None,
            prefix: None,
            caller_path: None,
            formats: vec!["png".to_string()],
            writer_options: WriterOptions::new(),
            overwrite: true,
            conflict_mode: ConflictMode::Raise,
            debug: false,
            stack_level: 1,
        }
    }
}

impl ExportRequest {
    /// Request with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the destination directory.
    pub fn directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.directory = Some(dir.into());
        self
    }

    /// Set an explicit prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Set the invoking file.
    pub fn caller_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.caller_path = Some(path.into());
        self
    }

    /// Replace the format list.
    pub fn formats<I, S>(mut self, formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.formats = formats.into_iter().map(Into::into).collect();
        self
    }

    /// Add or replace one writer option.
    pub fn writer_option(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.writer_options.insert(key.into(), value);
        self
    }

    /// Set the overwrite flag.
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Set the conflict mode.
    pub fn conflict_mode(mut self, mode: ConflictMode) -> Self {
        self.conflict_mode = mode;
        self
    }

    /// Set diagnostic verbosity.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Set the number of call levels a caller context skips.
    pub fn stack_level(mut self, level: usize) -> Self {
        self.stack_level = level;
        self
    }

    /// Resolve and check the destination directory.
    pub fn resolve_directory(&self) -> SavefigsResult<PathBuf> {
        let dir = match &self.directory {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().map_err(|e| {
                SavefigsError::config(format!("invalid directory: current directory: {e}"))
            })?,
        };
        if !dir.is_dir() {
            return Err(SavefigsError::config(format!(
                "invalid directory: '{}' must be an existing directory",
                dir.display()
            )));
        }
        Ok(dir)
    }

    /// Check that at least one format is requested and none is empty.
    pub fn validate_formats(&self) -> SavefigsResult<()> {
        if self.formats.is_empty() {
            return Err(SavefigsError::config("at least one format is required"));
        }
        if self.formats.iter().any(|f| f.trim().is_empty()) {
            return Err(SavefigsError::config("formats must be non-empty strings"));
        }
        Ok(())
    }
}

/// JSON configuration file for exports.
///
/// Every field is optional; present fields override the request they are applied to.
///
/// ```json
/// { "directory": "figures", "formats": ["png", "svg"], "overwrite": false,
///   "conflict_mode": "add_num", "writer_options": { "dpi": 300 } }
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// Destination directory.
    pub directory: Option<PathBuf>,
    /// Explicit prefix.
    pub prefix: Option<String>,
    /// Output formats.
    pub formats: Option<Vec<String>>,
    /// Writer options merged into the request's options.
    pub writer_options: WriterOptions,
    /// Overwrite flag.
    pub overwrite: Option<bool>,
    /// Conflict mode.
    pub conflict_mode: Option<ConflictMode>,
    /// Diagnostic verbosity.
    pub debug: Option<bool>,
}

impl ExportConfig {
    /// Parse a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> SavefigsResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| SavefigsError::config(format!("parse export config JSON: {e}")))
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SavefigsResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SavefigsError::config(format!("open export config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Override `request` with every field present in this configuration.
    pub fn apply_to(self, mut request: ExportRequest) -> ExportRequest {
        if let Some(dir) = self.directory {
            request.directory = Some(dir);
        }
        if let Some(prefix) = self.prefix {
            request.prefix = Some(prefix);
        }
        if let Some(formats) = self.formats {
            request.formats = formats;
        }
        request.writer_options.extend(self.writer_options);
        if let Some(overwrite) = self.overwrite {
            request.overwrite = overwrite;
        }
        if let Some(mode) = self.conflict_mode {
            request.conflict_mode = mode;
        }
        if let Some(debug) = self.debug {
            request.debug = debug;
        }
        request
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/request.rs"]
mod tests;
