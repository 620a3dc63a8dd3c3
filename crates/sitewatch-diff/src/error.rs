//! Error types for the diff crate.
//!
//! Diff computation itself is total and never fails; errors only arise when
//! selecting an algorithm by name.

/// Errors that can occur when configuring the diff engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiffError {
    /// The algorithm name is not one of `line`, `word` or `character`.
    #[error("unknown diff algorithm: {0}")]
    UnknownAlgorithm(String),
}
