//! Token highlighter
//!
//! Every rule is scanned over the whole (escaped) text, the candidates are
//! merged with earliest-start interval selection, and the surviving
//! matches are wrapped in category markers. Text outside matches passes
//! through untouched.

use std::borrow::Cow;
use std::fmt::Write;

use super::escape::escape_html;
use super::interval::{select_non_overlapping, Interval};
use super::rules::Rule;
use super::tokens::Category;

/// A kept match: byte span into the scanned text plus the rule that found it
#[derive(Debug, Clone, Copy)]
pub struct Match<'t, 'r> {
    pub start: usize,
    pub end: usize,
    pub text: &'t str,
    pub rule: &'r Rule,
}

impl Match<'_, '_> {
    pub fn category(&self) -> Category {
        self.rule.category
    }

    /// Matched text after the rule's transform
    pub fn display_text(&self) -> Cow<'_, str> {
        self.rule.display_text(self.text)
    }
}

/// Find the non-overlapping matches of `rules` in `text`
///
/// Rule order is priority: when two candidates start at the same offset,
/// the earlier-declared rule wins. Otherwise the earlier start wins and
/// any candidate overlapping a kept match is dropped.
pub fn find_matches<'t, 'r>(text: &'t str, rules: &'r [Rule]) -> Vec<Match<'t, 'r>> {
    let candidates: Vec<Interval<&Rule>> = rules
        .iter()
        .enumerate()
        .flat_map(|(rank, rule)| {
            rule.find_all(text)
                .into_iter()
                .map(move |(start, end)| Interval::new(start, end, rank, rule))
        })
        .collect();

    select_non_overlapping(candidates)
        .into_iter()
        .map(|i| Match {
            start: i.start,
            end: i.end,
            text: &text[i.start..i.end],
            rule: i.value,
        })
        .collect()
}

/// Reassemble `text` with each match emitted through `emit`
///
/// `matches` must be sorted and non-overlapping, as returned by
/// [`find_matches`] on the same text.
pub fn highlight_with<F>(text: &str, matches: &[Match<'_, '_>], mut emit: F) -> String
where
    F: FnMut(&mut String, &Match<'_, '_>),
{
    let mut out = String::with_capacity(text.len() + matches.len() * 32);
    let mut cursor = 0;
    for m in matches {
        out.push_str(&text[cursor..m.start]);
        emit(&mut out, m);
        cursor = m.end;
    }
    out.push_str(&text[cursor..]);
    out
}

/// Push a match wrapped in its HTML category marker
pub fn push_span(out: &mut String, m: &Match<'_, '_>) {
    let _ = write!(
        out,
        "<span class=\"token {}\">{}</span>",
        m.category().css_class(),
        m.display_text()
    );
}

/// Highlight `text` as HTML using `rules`
///
/// The text is escaped once, up front; rule patterns see the escaped form.
/// With no rules the result is just the escaped text.
pub fn highlight(text: &str, rules: &[Rule]) -> String {
    let escaped = escape_html(text);
    let matches = find_matches(&escaped, rules);
    highlight_with(&escaped, &matches, push_span)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::rules::Transform;
    use regex::Regex;

    fn rule(name: &str, pattern: &str, category: Category) -> Rule {
        Rule::new(name, pattern, category).unwrap()
    }

    fn strip_markers(html: &str) -> String {
        // Escaped text never contains a literal '<', so every tag is a marker
        Regex::new(r"<[^>]*>").unwrap().replace_all(html, "").into_owned()
    }

    fn sample_rules() -> Vec<Rule> {
        vec![
            rule("comment", r"--.*", Category::Comment),
            rule("string", r"&quot;.*?&quot;", Category::String),
            rule("keyword", r"\b(?:local|function|end)\b", Category::Keyword),
            rule("number", r"\b\d+\b", Category::Number),
        ]
    }

    #[test]
    fn test_no_rules_returns_escaped() {
        assert_eq!(highlight("a < b && c", &[]), "a &lt; b &amp;&amp; c");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(highlight("", &sample_rules()), "");
    }

    #[test]
    fn test_no_match_returns_escaped() {
        assert_eq!(highlight("x + y", &sample_rules()), "x + y");
    }

    #[test]
    fn test_markup_is_escaped() {
        let out = highlight("<script>alert(1)</script>", &sample_rules());
        assert!(out.contains("&lt;script&gt;"));
        assert!(!out.contains("<script>"));
    }

    #[test]
    fn test_wraps_matches_in_order() {
        let out = highlight("local x = 1 -- set x", &sample_rules());
        assert_eq!(
            out,
            "<span class=\"token keyword\">local</span> x = \
             <span class=\"token number\">1</span> \
             <span class=\"token comment\">-- set x</span>"
        );
    }

    #[test]
    fn test_number_inside_string_not_double_wrapped() {
        let out = highlight(r#"x = "abc 42""#, &sample_rules());
        assert_eq!(
            out,
            "x = <span class=\"token string\">&quot;abc 42&quot;</span>"
        );
    }

    #[test]
    fn test_equal_start_earlier_rule_wins() {
        let rules = vec![
            rule("short", r"ab", Category::Keyword),
            rule("long", r"abcd", Category::String),
        ];
        assert_eq!(
            highlight("abcd", &rules),
            "<span class=\"token keyword\">ab</span>cd"
        );

        let reversed = vec![
            rule("long", r"abcd", Category::String),
            rule("short", r"ab", Category::Keyword),
        ];
        assert_eq!(
            highlight("abcd", &reversed),
            "<span class=\"token string\">abcd</span>"
        );
    }

    #[test]
    fn test_earlier_start_wins_over_rule_order() {
        let rules = vec![
            rule("number", r"\d+", Category::Number),
            rule("comment", r"--.*", Category::Comment),
        ];
        assert_eq!(
            highlight("-- 12", &rules),
            "<span class=\"token comment\">-- 12</span>"
        );
    }

    #[test]
    fn test_transform_applies_after_selection() {
        let rules = vec![rule("keyword", r"(?i)\bselect\b", Category::Keyword)
            .with_transform(Transform::Uppercase)];
        assert_eq!(
            highlight("select a", &rules),
            "<span class=\"token keyword\">SELECT</span> a"
        );
    }

    #[test]
    fn test_every_character_appears_once() {
        let inputs = [
            "",
            "local s = \"a -- b\" -- trailing 12",
            "function f(x) return x + 10 end",
            "<b>&'quoted'</b> 3 -- ünïcode",
        ];
        let rules = sample_rules();
        for input in inputs {
            let out = highlight(input, &rules);
            assert_eq!(strip_markers(&out), escape_html(input), "input: {input}");
        }
    }

    #[test]
    fn test_deterministic() {
        let rules = sample_rules();
        let text = "local a = \"1\" -- 2\nfunction b() end";
        assert_eq!(highlight(text, &rules), highlight(text, &rules));
    }

    #[test]
    fn test_find_matches_sorted_and_disjoint() {
        let rules = sample_rules();
        let matches = find_matches("local x = 1 -- 2 end", &rules);
        for pair in matches.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
        assert_eq!(matches.last().map(|m| m.category()), Some(Category::Comment));
    }

    #[test]
    fn test_highlight_with_custom_marker() {
        let rules = sample_rules();
        let text = "local x";
        let matches = find_matches(text, &rules);
        let out = highlight_with(text, &matches, |out, m| {
            out.push('[');
            out.push_str(&m.display_text());
            out.push(']');
        });
        assert_eq!(out, "[local] x");
    }
}
