//! Error kinds the core must distinguish.
//!
//! Everything recoverable at the word or run level (an unusable bidi
//! result, a hyphenator with no loaded pattern for a locale) is handled
//! locally by substituting a documented safe default and reporting it
//! through `tracing::warn!` — neither ever appears as an [`Error`]
//! variant here. Only structural violations of the `MeasuredText`
//! invariants, and a shaping backend that fails outright, are surfaced.

use std::fmt;

use crate::text::Range;

/// Errors `compute_breaks`/`break_into_lines` can return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A run's range lies outside `[0, len)`.
    InvalidRange { run_index: usize, range: Range, len: usize },
    /// Runs do not cover the paragraph contiguously.
    NonContiguousRuns { run_index: usize, expected_start: usize, run_start: usize },
    /// The shaping backend reported a failure. Shaping is expected to
    /// always succeed, so this is always fatal for the paragraph; it
    /// also stands in for allocator-level out-of-memory, which this
    /// crate cannot distinguish from a caller-reported failure.
    ShapingFailed { run_index: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidRange { run_index, range, len } => write!(
                f,
                "run {run_index} has range {range:?} outside of the paragraph (len {len})"
            ),
            Error::NonContiguousRuns { run_index, expected_start, run_start } => write!(
                f,
                "run {run_index} starts at {run_start}, but the previous run ended at {expected_start}"
            ),
            Error::ShapingFailed { run_index } => {
                write!(f, "shaping backend failed while measuring run {run_index}")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Convenience alias for engine results.
pub type Result<T> = std::result::Result<T, Error>;
