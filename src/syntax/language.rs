//! Language definitions for syntax highlighting
//!
//! A LanguageDefinition is a name, the fence tags and file extensions that
//! select it, and an ordered rule list. Declaration order is priority.

use super::highlight::{find_matches, highlight, Match};
use super::rules::Rule;

/// A complete language definition for syntax highlighting
#[derive(Debug)]
pub struct LanguageDefinition {
    /// Language name (e.g., "Lua", "JavaScript")
    pub name: String,
    /// Fence tags, lower-case (e.g., ["js", "javascript"])
    pub aliases: Vec<String>,
    /// File extensions (e.g., ["js", "mjs"])
    pub extensions: Vec<String>,
    /// Rules in priority order (earliest declared wins ties)
    pub rules: Vec<Rule>,
}

impl LanguageDefinition {
    /// Create a new empty language definition
    ///
    /// The lower-cased name is always accepted as a fence tag.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            aliases: vec![name.to_lowercase()],
            extensions: Vec::new(),
            rules: Vec::new(),
        }
    }

    /// Add a fence tag
    pub fn add_alias(&mut self, alias: &str) {
        let alias = alias.to_lowercase();
        if !self.aliases.contains(&alias) {
            self.aliases.push(alias);
        }
    }

    /// Add a file extension
    pub fn add_extension(&mut self, ext: &str) {
        self.extensions.push(ext.to_string());
    }

    /// Append a rule; it ranks below every rule added before it
    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Check if a fence tag selects this language
    pub fn matches_tag(&self, tag: &str) -> bool {
        self.aliases.iter().any(|a| a.eq_ignore_ascii_case(tag))
    }

    /// Highlight a code block as HTML
    pub fn highlight(&self, code: &str) -> String {
        highlight(code, &self.rules)
    }

    /// Kept matches over already-escaped text (for non-HTML output)
    pub fn matches<'t>(&self, escaped: &'t str) -> Vec<Match<'t, '_>> {
        find_matches(escaped, &self.rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::tokens::Category;

    fn create_test_language() -> LanguageDefinition {
        let mut lang = LanguageDefinition::new("Test");
        lang.add_alias("tst");
        lang.add_extension("test");

        if let Some(rule) = Rule::new("line_comment", r"//.*", Category::Comment) {
            lang.add_rule(rule);
        }
        if let Some(rule) = Rule::new("number", r"\b\d+\b", Category::Number) {
            lang.add_rule(rule);
        }
        lang
    }

    #[test]
    fn test_simple_highlighting() {
        let lang = create_test_language();
        assert_eq!(
            lang.highlight("let x = 42;"),
            "let x = <span class=\"token number\">42</span>;"
        );
    }

    #[test]
    fn test_comment_hides_number() {
        let lang = create_test_language();
        assert_eq!(
            lang.highlight("code // 42"),
            "code <span class=\"token comment\">// 42</span>"
        );
    }

    #[test]
    fn test_tags() {
        let lang = create_test_language();
        assert!(lang.matches_tag("test"));
        assert!(lang.matches_tag("TST"));
        assert!(!lang.matches_tag("rust"));

        let mut lang = lang;
        lang.add_alias("Tst");
        assert_eq!(lang.aliases, vec!["test", "tst"]);
    }

    #[test]
    fn test_matches_on_escaped_text() {
        let lang = create_test_language();
        let matches = lang.matches("a &lt; 1");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].text, "1");
    }
}
