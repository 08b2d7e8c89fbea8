use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::export::naming::candidate_path;
use crate::export::request::ConflictMode;
use crate::foundation::error::{SavefigsError, SavefigsResult};

/// Collision resolver for one export call.
///
/// A path is taken when it was already claimed earlier in the same call, or when it exists on
/// disk and overwriting is off. Claims hold regardless of the overwrite flag, so two pairs of one
/// call never share a final path.
#[derive(Debug)]
pub struct PathResolver {
    claimed: HashSet<PathBuf>,
    overwrite: bool,
    mode: ConflictMode,
}

impl PathResolver {
    /// Create a resolver with no claims.
    pub fn new(overwrite: bool, mode: ConflictMode) -> Self {
        Self {
            claimed: HashSet::new(),
            overwrite,
            mode,
        }
    }

    /// Whether `path` cannot be used as-is.
    pub fn is_taken(&self, path: &Path) -> bool {
        self.claimed.contains(path) || (!self.overwrite && path.exists())
    }

    /// Resolve and claim the final path for `stem` in `format` under `dir`.
    ///
    /// Under [`ConflictMode::AddNum`] the suffix scan starts at `2` (the taken path counts as the
    /// first) and only moves upwards; lower free numbers are not revisited.
    pub fn resolve(&mut self, dir: &Path, stem: &str, format: &str) -> SavefigsResult<PathBuf> {
        let candidate = candidate_path(dir, stem, format, None);
        let path = if !self.is_taken(&candidate) {
            candidate
        } else {
            match self.mode {
                ConflictMode::Raise if self.claimed.contains(&candidate) => {
                    return Err(SavefigsError::duplicate_output(candidate));
                }
                ConflictMode::Raise => return Err(SavefigsError::conflict(candidate)),
                ConflictMode::AddNum => {
                    let mut n = 2;
                    loop {
                        let numbered = candidate_path(dir, stem, format, Some(n));
                        if !self.is_taken(&numbered) {
                            break numbered;
                        }
                        n += 1;
                    }
                }
            }
        };
        self.claimed.insert(path.clone());
        Ok(path)
    }

    /// Paths claimed so far.
    pub fn claimed(&self) -> usize {
        self.claimed.len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/resolve.rs"]
mod tests;
