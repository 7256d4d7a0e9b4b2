//! Pattern rules for syntax highlighting
//!
//! This module defines the rule type used to classify substrings of a
//! code block. Each rule is scanned independently over the whole text;
//! the highlighter merges the results.

use std::borrow::Cow;

use regex::Regex;
use tracing::warn;

use super::tokens::Category;

/// Name of the capture group that narrows a match to a sub-span
///
/// The regex crate has no look-around, so a rule such as "attribute name
/// followed by `=`" matches the `=` and marks the name with `(?P<tok>...)`.
pub const TOKEN_GROUP: &str = "tok";

/// Post-processing applied to matched text before wrapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Upper-case the matched text (SQL keywords)
    Uppercase,
}

impl Transform {
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            Transform::Uppercase => Cow::Owned(text.to_uppercase()),
        }
    }
}

/// A (category, pattern) highlighting rule
pub struct Rule {
    /// Name for debugging
    pub name: String,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Category to assign to matches
    pub category: Category,
    /// Optional transform of the matched text
    pub transform: Option<Transform>,
    has_token_group: bool,
}

impl Rule {
    /// Create a new rule
    ///
    /// Returns `None` (and logs a warning) if the pattern does not compile.
    pub fn new(name: &str, pattern: &str, category: Category) -> Option<Self> {
        match Regex::new(pattern) {
            Ok(regex) => {
                let has_token_group = regex.capture_names().any(|n| n == Some(TOKEN_GROUP));
                Some(Self {
                    name: name.to_string(),
                    pattern: regex,
                    category,
                    transform: None,
                    has_token_group,
                })
            }
            Err(err) => {
                warn!(rule = name, error = %err, "skipping rule with invalid pattern");
                None
            }
        }
    }

    /// Builder: transform matched text before wrapping
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Find every non-overlapping occurrence of this rule in `text`
    ///
    /// Returns byte spans in ascending order. Empty matches are skipped,
    /// and a scan that does not advance is pushed forward one character.
    pub fn find_all(&self, text: &str) -> Vec<(usize, usize)> {
        let mut found = Vec::new();
        let mut pos = 0;

        while pos <= text.len() {
            let Some(caps) = self.pattern.captures_at(text, pos) else {
                break;
            };
            let Some(whole) = caps.get(0) else {
                break;
            };

            let span = if self.has_token_group {
                caps.name(TOKEN_GROUP).map(|m| (m.start(), m.end()))
            } else {
                Some((whole.start(), whole.end()))
            };
            if let Some((start, end)) = span {
                if end > start {
                    found.push((start, end));
                }
            }

            if whole.end() > pos {
                pos = whole.end();
            } else {
                // Zero-length match at the scan position
                pos = match text[pos..].chars().next() {
                    Some(c) => pos + c.len_utf8(),
                    None => break,
                };
            }
        }

        found
    }

    /// Matched text after the rule's transform, if any
    pub fn display_text<'a>(&self, matched: &'a str) -> Cow<'a, str> {
        match self.transform {
            Some(transform) => transform.apply(matched),
            None => Cow::Borrowed(matched),
        }
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .field("category", &self.category)
            .field("transform", &self.transform)
            .finish()
    }
}
