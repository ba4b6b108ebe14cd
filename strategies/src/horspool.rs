use log::debug;

use crate::tables::{BadCharTable, NullSink, TableSink};
use crate::{SearchError, SearchOutcome, SearchStrategy, check_inputs};

/// Right-to-left scan that skips on the bad-character rule alone.
pub struct Horspool;

impl Horspool {
    /// Same as [`SearchStrategy::search_bytes`], but hands the finished
    /// bad-character table to `sink` before scanning starts.
    pub fn search_with_tables(
        &self,
        text: &[u8],
        pattern: &[u8],
        sink: &mut dyn TableSink,
    ) -> Result<SearchOutcome, SearchError> {
        horspool_search(text, pattern, sink)
    }
}

impl SearchStrategy for Horspool {
    fn name(&self) -> &'static str {
        "horspool"
    }

    fn search_bytes(&self, text: &[u8], pattern: &[u8]) -> Result<SearchOutcome, SearchError> {
        horspool_search(text, pattern, &mut NullSink)
    }
}

fn horspool_search(
    text: &[u8],
    pattern: &[u8],
    sink: &mut dyn TableSink,
) -> Result<SearchOutcome, SearchError> {
    check_inputs(text, pattern)?;

    let n = text.len();
    let m = pattern.len();

    let table = BadCharTable::build(pattern);
    sink.bad_char(pattern, &table);
    debug!("bad-character table built, m={}", m);

    let mut occurrences = Vec::new();
    let mut comparisons = 0u64;
    let mut s = 0usize;

    while s <= n - m {
        let mut j = m;
        while j > 0 {
            comparisons += 1;
            if pattern[j - 1] != text[s + j - 1] {
                break;
            }
            j -= 1;
        }

        if j == 0 {
            occurrences.push(s);
            s += match_advance(&table, text, s, m);
        } else {
            s += mismatch_advance(&table, text[s + j - 1], j - 1);
        }
    }

    Ok(SearchOutcome {
        occurrences,
        comparisons,
    })
}

/// Shift after a mismatch at window offset `at`. The clamp keeps the scan
/// moving when the rightmost occurrence of the symbol sits at or beyond
/// `at`; symbols missing from the pattern realign just past the mismatch.
fn mismatch_advance(table: &BadCharTable, symbol: u8, at: usize) -> usize {
    match table.last_occurrence(symbol) {
        Some(last) if last < at => at - last,
        Some(_) => 1,
        None => at + 1,
    }
}

/// Shift after a full match, keyed on the first symbol past the window.
/// A single step when that symbol is absent from the pattern or the
/// window already touches the end of the text.
fn match_advance(table: &BadCharTable, text: &[u8], s: usize, m: usize) -> usize {
    match text.get(s + m) {
        Some(&next) => match table.last_occurrence(next) {
            Some(last) => (m - last).max(1),
            None => 1,
        },
        None => 1,
    }
}
