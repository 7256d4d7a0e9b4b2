//! Markup escaping
//!
//! Highlighting rules are written against escaped text, so escaping
//! happens exactly once, before any pattern runs. Entities contain no
//! digits, so number rules never match inside one.

/// Pattern matching any entity produced by [`escape_html`]
///
/// Rules whose character classes include `&` or `;` alternate with this
/// first so they step over entities instead of splitting them.
pub const ENTITY: &str = r"&(?:amp|lt|gt|quot|apos);";

/// Escape the reserved markup characters `& < > " '`
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

/// Reverse [`escape_html`] for text bound for a terminal
pub fn unescape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        let decoded = [
            ("&amp;", '&'),
            ("&lt;", '<'),
            ("&gt;", '>'),
            ("&quot;", '"'),
            ("&apos;", '\''),
        ]
        .into_iter()
        .find(|(entity, _)| rest.starts_with(entity));
        match decoded {
            Some((entity, c)) => {
                out.push(c);
                rest = &rest[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_reserved() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html(r#"a & "b" 'c'"#), "a &amp; &quot;b&quot; &apos;c&apos;");
    }

    #[test]
    fn test_escape_passthrough() {
        assert_eq!(escape_html(""), "");
        assert_eq!(escape_html("plain text ünïcode"), "plain text ünïcode");
    }

    #[test]
    fn test_entity_pattern_covers_escapes() {
        let entity = regex::Regex::new(ENTITY).unwrap();
        let escaped = escape_html("&<>\"'");
        assert_eq!(entity.replace_all(&escaped, ""), "");
    }

    #[test]
    fn test_unescape_reverses_escape() {
        let raw = r#"if (a < b && c > "d") { x = 'e'; } &nbsp;"#;
        assert_eq!(unescape_html(&escape_html(raw)), raw);
        assert_eq!(unescape_html("a & b"), "a & b");
        assert_eq!(unescape_html("&lt;&lt"), "<&lt");
    }

    #[test]
    fn test_escape_is_not_idempotent() {
        // Running twice double-encodes, which is why callers escape once
        assert_eq!(escape_html(&escape_html("&")), "&amp;amp;");
    }
}
