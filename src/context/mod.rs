//! Caller context: turns "where was export invoked from" into a file-name prefix.
//!
//! Detecting the invoking file is the job of a [`CallerContext`]; the prefix rule itself is the
//! pure [`resolve_prefix`].

/// Caller-context collaborators.
pub mod caller;
/// Prefix resolution.
pub mod prefix;

pub use caller::{
    CallerContext, CallerSource, ExecutableCaller, HistoryCaller, StaticCaller, classify_source,
    last_runfile,
};
pub use prefix::{resolve_prefix, stem_of};
