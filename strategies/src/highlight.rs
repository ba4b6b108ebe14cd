//! Wraps match spans in visible markers.

const MARK_OPEN: &[u8] = b"<mark>";
const MARK_CLOSE: &[u8] = b"</mark>";

/// Wrap every `[occ, occ + pattern_len)` span of `text` in
/// `<mark>`/`</mark>`. `occurrences` must be ascending start indices into
/// `text`; spans are wrapped back to front so a marker never shifts a
/// span that is still pending. Overlapping occurrences are each wrapped
/// independently, markers from an inner span and all.
pub fn highlight_bytes(text: &[u8], pattern_len: usize, occurrences: &[usize]) -> Vec<u8> {
    let spans: Vec<(usize, usize)> = occurrences.iter().map(|&occ| (occ, pattern_len)).collect();
    highlight_spans(text, &spans)
}

pub fn highlight(text: &str, pattern_len: usize, occurrences: &[usize]) -> String {
    let marked = highlight_bytes(text.as_bytes(), pattern_len, occurrences);
    String::from_utf8_lossy(&marked).into_owned()
}

/// Apply `(start, len)` spans collected from several patterns over the
/// same text in one back-to-front pass. Spans may arrive in any order.
pub fn highlight_spans(text: &[u8], spans: &[(usize, usize)]) -> Vec<u8> {
    let mut sorted: Vec<(usize, usize)> = spans.to_vec();
    sorted.sort_unstable();

    let mut out = text.to_vec();
    for &(start, len) in sorted.iter().rev() {
        let end = start + len;
        debug_assert!(end <= out.len(), "span reaches outside the text");
        out.splice(end..end, MARK_CLOSE.iter().copied());
        out.splice(start..start, MARK_OPEN.iter().copied());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_a_single_span() {
        assert_eq!(highlight("xxAAxx", 2, &[2]), "xx<mark>AA</mark>xx");
    }

    #[test]
    fn no_occurrences_returns_the_text_unchanged() {
        assert_eq!(highlight("nothing to see", 4, &[]), "nothing to see");
    }

    #[test]
    fn wraps_disjoint_spans_without_shifting_earlier_ones() {
        assert_eq!(
            highlight("the cat and the dog", 3, &[0, 12]),
            "<mark>the</mark> cat and <mark>the</mark> dog"
        );
    }

    #[test]
    fn span_at_the_very_end_is_closed() {
        assert_eq!(highlight("say abc", 3, &[4]), "say <mark>abc</mark>");
    }

    #[test]
    fn spans_of_different_patterns_interleave() {
        let marked = highlight_spans(b"one two three", &[(8, 5), (0, 3)]);
        assert_eq!(marked, b"<mark>one</mark> two <mark>three</mark>");
    }

    #[test]
    fn bytes_and_str_paths_agree() {
        let text = "abcabc";
        let via_bytes = highlight_bytes(text.as_bytes(), 3, &[0, 3]);
        assert_eq!(highlight(text, 3, &[0, 3]).as_bytes(), &via_bytes[..]);
    }
}
