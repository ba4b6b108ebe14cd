use log::debug;

use crate::tables::{NullSink, SuffixTables, TableSink};
use crate::{SearchError, SearchOutcome, SearchStrategy, check_inputs};

/// Boyer-Moore scan driven by the strong-suffix/good-suffix shift table.
/// Compares right to left and realigns on the widest reusable border of
/// the matched suffix.
pub struct BoyerMoore;

impl BoyerMoore {
    /// Same as [`SearchStrategy::search_bytes`], but hands the finished
    /// shift tables to `sink` before scanning starts.
    pub fn search_with_tables(
        &self,
        text: &[u8],
        pattern: &[u8],
        sink: &mut dyn TableSink,
    ) -> Result<SearchOutcome, SearchError> {
        bm_search(text, pattern, sink)
    }
}

impl SearchStrategy for BoyerMoore {
    fn name(&self) -> &'static str {
        "boyer-moore"
    }

    fn search_bytes(&self, text: &[u8], pattern: &[u8]) -> Result<SearchOutcome, SearchError> {
        bm_search(text, pattern, &mut NullSink)
    }
}

fn bm_search(
    text: &[u8],
    pattern: &[u8],
    sink: &mut dyn TableSink,
) -> Result<SearchOutcome, SearchError> {
    check_inputs(text, pattern)?;

    let n = text.len();
    let m = pattern.len();

    let tables = SuffixTables::build(pattern);
    sink.suffix(pattern, &tables);
    debug!("good-suffix tables built, m={}", m);

    let mut occurrences = Vec::new();
    let mut comparisons = 0u64;
    let mut s = 0usize;

    while s <= n - m {
        // j is one past the next pattern index to compare; the window has
        // already matched on [j, m).
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
            // Realign on the widest border. Once the next window would
            // overrun the text a plain step ends the scan.
            s += if s + m < n { tables.shift[0] } else { 1 };
        } else {
            s += tables.shift[j];
        }
    }

    Ok(SearchOutcome {
        occurrences,
        comparisons,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_single_occurrence() {
        let outcome = bm_search(b"ABAAABCD", b"ABC", &mut NullSink).unwrap();
        assert_eq!(outcome.occurrences, vec![4]);
        // four immediate mismatches on the last symbol, then a full match
        assert_eq!(outcome.comparisons, 7);
    }

    #[test]
    fn finds_overlapping_occurrences() {
        let outcome = bm_search(b"AAAA", b"AA", &mut NullSink).unwrap();
        assert_eq!(outcome.occurrences, vec![0, 1, 2]);
        assert_eq!(outcome.comparisons, 6);
    }

    #[test]
    fn finds_match_at_the_very_end() {
        let outcome = bm_search(b"ababcabcabababd", b"ababd", &mut NullSink).unwrap();
        assert_eq!(outcome.occurrences, vec![10]);
    }

    #[test]
    fn reports_nothing_for_absent_pattern() {
        let outcome = bm_search(b"hello world", b"rust", &mut NullSink).unwrap();
        assert!(outcome.occurrences.is_empty());
    }

    #[test]
    fn pattern_as_long_as_text_matches_at_most_once() {
        let outcome = bm_search(b"ABC", b"ABC", &mut NullSink).unwrap();
        assert_eq!(outcome.occurrences, vec![0]);

        let outcome = bm_search(b"ABD", b"ABC", &mut NullSink).unwrap();
        assert!(outcome.occurrences.is_empty());
    }

    #[test]
    fn sink_sees_the_tables_once() {
        struct Counting(usize);
        impl TableSink for Counting {
            fn suffix(&mut self, pattern: &[u8], tables: &SuffixTables) {
                assert_eq!(pattern, b"ABC");
                assert_eq!(tables.shift, vec![3, 3, 3, 1]);
                self.0 += 1;
            }
        }

        let mut sink = Counting(0);
        bm_search(b"ABAAABCD", b"ABC", &mut sink).unwrap();
        assert_eq!(sink.0, 1);
    }

    #[test]
    fn rejects_empty_pattern() {
        assert_eq!(
            bm_search(b"abc", b"", &mut NullSink),
            Err(SearchError::EmptyPattern)
        );
    }

    #[test]
    fn rejects_oversized_pattern() {
        assert_eq!(
            bm_search(b"ab", b"abc", &mut NullSink),
            Err(SearchError::PatternTooLong {
                pattern: 3,
                text: 2
            })
        );
    }
}
