use thiserror::Error;

/// Inputs no strategy will search under. An empty result here would be
/// indistinguishable from "pattern legitimately not found", so both
/// conditions surface as errors instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("pattern must not be empty")]
    EmptyPattern,
    #[error("pattern length {pattern} exceeds text length {text}")]
    PatternTooLong { pattern: usize, text: usize },
}
