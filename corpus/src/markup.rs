//! Plain-text extraction from HTML-ish markup.

/// Strip tags and decode the common entities, leaving only text content.
/// `<script>` and `<style>` elements are dropped wholesale, comments too.
/// The result is what the searches (and highlight offsets) operate on.
pub fn strip_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find(['<', '&']) {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        if rest.starts_with('<') {
            rest = after_tag(rest);
        } else {
            let (decoded, remaining) = decode_entity(rest);
            out.push_str(decoded);
            rest = remaining;
        }
    }
    out.push_str(rest);
    out
}

/// Advance past the tag starting at `rest` (which begins with `<`),
/// including the whole element body for the non-text containers.
fn after_tag(rest: &str) -> &str {
    if let Some(comment) = rest.strip_prefix("<!--") {
        return match comment.find("-->") {
            Some(end) => &comment[end + 3..],
            None => "",
        };
    }

    let name = tag_name(rest);
    let body = match rest.find('>') {
        Some(end) => &rest[end + 1..],
        None => "",
    };

    for container in ["script", "style"] {
        if name.eq_ignore_ascii_case(container) {
            return skip_container(body, container);
        }
    }
    body
}

fn tag_name(rest: &str) -> &str {
    let inner = &rest[1..];
    let inner = inner.strip_prefix('/').unwrap_or(inner);
    let end = inner
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(inner.len());
    &inner[..end]
}

/// Skip everything up to and including the closing tag of `name`.
/// An unterminated container swallows the rest of the input.
fn skip_container<'a>(body: &'a str, name: &str) -> &'a str {
    let lower = body.to_ascii_lowercase();
    let closing = format!("</{}", name);
    match lower.find(&closing) {
        Some(pos) => {
            let tail = &body[pos..];
            match tail.find('>') {
                Some(end) => &tail[end + 1..],
                None => "",
            }
        }
        None => "",
    }
}

/// Decode one `&...;` entity at the start of `rest`. Unknown or
/// unterminated entities pass through verbatim.
fn decode_entity(rest: &str) -> (&'static str, &str) {
    let limit = rest.len().min(8);
    let semi = match rest.as_bytes()[..limit].iter().position(|&b| b == b';') {
        Some(pos) => pos,
        None => return ("&", &rest[1..]),
    };

    let decoded = match &rest[1..semi] {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" | "#39" => "'",
        "nbsp" | "#160" => " ",
        _ => return ("&", &rest[1..]),
    };

    (decoded, &rest[semi + 1..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_simple_tags() {
        let html = "<HTML><BODY>WHICH_FINALLY_HALTS. _ _ AT_THAT POINT </BODY></HTML>";
        assert_eq!(strip_markup(html), "WHICH_FINALLY_HALTS. _ _ AT_THAT POINT ");
    }

    #[test]
    fn keeps_text_between_nested_elements() {
        let html = "<p>To be, <b>or not</b> to be</p>";
        assert_eq!(strip_markup(html), "To be, or not to be");
    }

    #[test]
    fn drops_script_and_style_bodies() {
        let html = "a<script>var x = '<b>not text</b>';</script>b<style>p { color: red }</style>c";
        assert_eq!(strip_markup(html), "abc");
    }

    #[test]
    fn drops_comments() {
        assert_eq!(strip_markup("a<!-- hidden <b> -->b"), "ab");
    }

    #[test]
    fn decodes_common_entities() {
        assert_eq!(
            strip_markup("Tom &amp; Jerry &lt;3 &quot;cheese&quot;&nbsp;"),
            "Tom & Jerry <3 \"cheese\" "
        );
    }

    #[test]
    fn unknown_entity_passes_through() {
        assert_eq!(strip_markup("&bogus; &x"), "&bogus; &x");
    }

    #[test]
    fn attributes_do_not_leak_into_text() {
        let html = r#"<a href="http://example.com/?q=1">link</a>"#;
        assert_eq!(strip_markup(html), "link");
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(strip_markup("no markup here"), "no markup here");
    }

    #[test]
    fn unterminated_tag_swallows_the_tail() {
        assert_eq!(strip_markup("before<a unterminated"), "before");
    }
}
