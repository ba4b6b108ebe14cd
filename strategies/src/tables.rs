use log::debug;

/// Rightmost occurrence of each byte in the pattern. Entries are
/// `Option`-typed so "absent" can never be mistaken for index 0; for
/// duplicate symbols the last occurrence wins.
pub struct BadCharTable {
    last: [Option<usize>; 256],
}

impl BadCharTable {
    pub fn build(pattern: &[u8]) -> Self {
        let mut last = [None; 256];
        for (i, &b) in pattern.iter().enumerate() {
            last[b as usize] = Some(i);
        }
        Self { last }
    }

    pub fn last_occurrence(&self, symbol: u8) -> Option<usize> {
        self.last[symbol as usize]
    }

    /// Bytes that occur in the pattern, with their rightmost index.
    pub fn entries(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.last
            .iter()
            .enumerate()
            .filter_map(|(byte, last)| last.map(|i| (byte as u8, i)))
    }
}

/// Good-suffix shift table plus the border-position table it is derived
/// from. Both are `m + 1` long. `shift[j + 1]` is the advancement after a
/// mismatch at pattern index `j`; `shift[0]` is the advancement after a
/// full match. Every entry is >= 1.
pub struct SuffixTables {
    pub shift: Vec<usize>,
    pub border_pos: Vec<usize>,
}

impl SuffixTables {
    pub fn build(pattern: &[u8]) -> Self {
        let m = pattern.len();
        let mut shift: Vec<Option<usize>> = vec![None; m + 1];
        let mut border_pos = vec![0usize; m + 1];

        // Strong-suffix pass: walk the pattern right to left chasing
        // borders; the first shift recorded for an entry is the minimal
        // valid realignment, so later candidates must not overwrite it.
        let mut i = m;
        let mut j = m + 1;
        border_pos[i] = j;

        while i > 0 {
            while j <= m && pattern[i - 1] != pattern[j - 1] {
                if shift[j].is_none() {
                    shift[j] = Some(j - i);
                }
                j = border_pos[j];
            }
            i -= 1;
            j -= 1;
            border_pos[i] = j;
        }

        // Fallback pass: entries the strong-suffix rule left open shift by
        // the widest border of the whole pattern, chained through
        // border_pos so narrower borders take over further right.
        let mut j = border_pos[0];
        for (i, slot) in shift.iter_mut().enumerate() {
            if slot.is_none() {
                *slot = Some(j);
            }
            if i == j {
                j = border_pos[j];
            }
        }

        let shift = shift
            .into_iter()
            .map(|slot| slot.expect("fallback pass fills every shift entry"))
            .collect();

        Self { shift, border_pos }
    }
}

/// Receives the finished preprocessing tables, once per search, right
/// after they are built. Keeps diagnostics out of the scan itself.
pub trait TableSink {
    fn bad_char(&mut self, _pattern: &[u8], _table: &BadCharTable) {}
    fn suffix(&mut self, _pattern: &[u8], _tables: &SuffixTables) {}
}

/// Discards every table.
pub struct NullSink;

impl TableSink for NullSink {}

/// Reports table contents through `log` at debug level.
pub struct LogSink;

impl TableSink for LogSink {
    fn bad_char(&mut self, pattern: &[u8], table: &BadCharTable) {
        debug!(
            "bad-character table for {:?}:",
            String::from_utf8_lossy(pattern)
        );
        for (byte, last) in table.entries() {
            debug!("  {}: {}", byte.escape_ascii(), last);
        }
    }

    fn suffix(&mut self, pattern: &[u8], tables: &SuffixTables) {
        debug!(
            "good-suffix shifts for {:?}: {:?}",
            String::from_utf8_lossy(pattern),
            tables.shift
        );
        debug!("border positions: {:?}", tables.border_pos);
    }
}
