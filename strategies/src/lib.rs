mod bm;
mod error;
mod horspool;
mod naive;

pub mod highlight;
pub mod tables;

pub use bm::BoyerMoore;
pub use error::SearchError;
pub use horspool::Horspool;
pub use naive::Naive;

/// Everything a single search produced: the match positions and what the
/// scan paid to find them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Start indices of every match, ascending, duplicate-free.
    pub occurrences: Vec<usize>,
    /// Symbol equality tests performed while sliding the pattern over the
    /// text. Preprocessing comparisons are not included.
    pub comparisons: u64,
}

pub trait SearchStrategy {
    /// Identifier used in reports.
    fn name(&self) -> &'static str;

    fn search_bytes(&self, text: &[u8], pattern: &[u8]) -> Result<SearchOutcome, SearchError>;

    fn search(&self, text: &str, pattern: &str) -> Result<SearchOutcome, SearchError> {
        let text_bytes = text.as_bytes();
        let pattern_bytes = pattern.as_bytes();
        self.search_bytes(text_bytes, pattern_bytes)
    }
}

/// Shared input policy: an empty pattern or a pattern longer than the text
/// is an error from every strategy, never a silent empty result.
pub(crate) fn check_inputs(text: &[u8], pattern: &[u8]) -> Result<(), SearchError> {
    if pattern.is_empty() {
        return Err(SearchError::EmptyPattern);
    }
    if pattern.len() > text.len() {
        return Err(SearchError::PatternTooLong {
            pattern: pattern.len(),
            text: text.len(),
        });
    }
    Ok(())
}
