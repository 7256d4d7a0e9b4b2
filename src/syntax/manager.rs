//! Syntax highlighting manager
//!
//! This module provides the SyntaxManager that maps fence tags and file
//! extensions to language definitions and highlights code blocks.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use super::builtin;
use super::escape::escape_html;
use super::language::LanguageDefinition;

/// Main syntax highlighting manager
///
/// Holds only compiled rule sets, so a shared reference can be used from
/// several threads at once.
pub struct SyntaxManager {
    /// Loaded language definitions
    languages: HashMap<String, LanguageDefinition>,
    /// Fence tag to language name mapping
    alias_map: HashMap<String, String>,
    /// Extension to language name mapping
    extension_map: HashMap<String, String>,
    /// Whether syntax highlighting is enabled
    pub enabled: bool,
}

impl SyntaxManager {
    /// Create a new syntax manager with built-in languages
    pub fn new() -> Self {
        let mut manager = Self::empty();
        for lang in builtin::all_languages() {
            manager.add_language(lang);
        }
        manager
    }

    /// Create a manager with no languages
    pub fn empty() -> Self {
        Self {
            languages: HashMap::new(),
            alias_map: HashMap::new(),
            extension_map: HashMap::new(),
            enabled: true,
        }
    }

    /// Add a language definition
    pub fn add_language(&mut self, lang: LanguageDefinition) {
        let name = lang.name.clone();
        for alias in &lang.aliases {
            self.alias_map.insert(alias.to_lowercase(), name.clone());
        }
        for ext in &lang.extensions {
            self.extension_map.insert(ext.to_lowercase(), name.clone());
        }
        self.languages.insert(name, lang);
    }

    /// Find a language by fence tag (case-insensitive)
    pub fn find_by_tag(&self, tag: &str) -> Option<&LanguageDefinition> {
        let name = self.alias_map.get(&tag.trim().to_lowercase())?;
        self.languages.get(name)
    }

    /// Detect language from filename
    pub fn detect_language(&self, filename: &Path) -> Option<&LanguageDefinition> {
        let ext = filename.extension()?.to_str()?.to_lowercase();
        let name = self.extension_map.get(&ext)?;
        self.languages.get(name)
    }

    /// Get a language definition by name
    pub fn get_language(&self, name: &str) -> Option<&LanguageDefinition> {
        self.languages.get(name)
    }

    /// Highlight a code block tagged `tag` as HTML
    ///
    /// Unknown tags, and a disabled manager, yield the escaped code with no
    /// wrapping.
    pub fn highlight_code(&self, tag: Option<&str>, code: &str) -> String {
        if !self.enabled {
            return escape_html(code);
        }
        match tag.and_then(|t| self.find_by_tag(t)) {
            Some(lang) => lang.highlight(code),
            None => {
                debug!(tag = ?tag, "no rule set for code block, emitting plain text");
                escape_html(code)
            }
        }
    }

    /// List available languages
    pub fn list_languages(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.languages.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Toggle syntax highlighting on/off
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }
}

impl Default for SyntaxManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_tag() {
        let manager = SyntaxManager::new();

        assert_eq!(manager.find_by_tag("lua").map(|l| l.name.as_str()), Some("Lua"));
        assert_eq!(manager.find_by_tag("js").map(|l| l.name.as_str()), Some("JavaScript"));
        assert_eq!(manager.find_by_tag("JavaScript").map(|l| l.name.as_str()), Some("JavaScript"));
        assert_eq!(manager.find_by_tag("json").map(|l| l.name.as_str()), Some("JSON"));
        assert_eq!(manager.find_by_tag("SQL").map(|l| l.name.as_str()), Some("SQL"));
        assert_eq!(manager.find_by_tag("xml").map(|l| l.name.as_str()), Some("HTML"));
        assert!(manager.find_by_tag("cobol").is_none());
    }

    #[test]
    fn test_detect_language() {
        let manager = SyntaxManager::new();
        let name = |p: &str| manager.detect_language(Path::new(p)).map(|l| l.name.clone());

        assert_eq!(name("init.lua"), Some("Lua".to_string()));
        assert_eq!(name("app.MJS"), Some("JavaScript".to_string()));
        assert_eq!(name("package.json"), Some("JSON".to_string()));
        assert_eq!(name("schema.sql"), Some("SQL".to_string()));
        assert_eq!(name("index.html"), Some("HTML".to_string()));
        assert_eq!(name("no_extension"), None);
    }

    #[test]
    fn test_unknown_language_falls_back_to_escaped() {
        let manager = SyntaxManager::new();
        assert_eq!(manager.highlight_code(Some("cobol"), "a < b"), "a &lt; b");
        assert_eq!(manager.highlight_code(None, "<p>"), "&lt;p&gt;");
    }

    #[test]
    fn test_highlight_known_language() {
        let manager = SyntaxManager::new();
        let out = manager.highlight_code(Some("lua"), "return nil");
        assert_eq!(
            out,
            "<span class=\"token keyword\">return</span> <span class=\"token boolean\">nil</span>"
        );
    }

    #[test]
    fn test_toggle_disables_highlighting() {
        let mut manager = SyntaxManager::new();
        manager.toggle();
        assert!(!manager.enabled);
        assert_eq!(manager.highlight_code(Some("lua"), "return"), "return");
        manager.toggle();
        assert!(manager.highlight_code(Some("lua"), "return").contains("token keyword"));
    }

    #[test]
    fn test_list_languages() {
        let manager = SyntaxManager::new();
        assert_eq!(manager.list_languages(), vec!["HTML", "JSON", "JavaScript", "Lua", "SQL"]);
        assert!(SyntaxManager::empty().list_languages().is_empty());
    }

    #[test]
    fn test_shared_across_threads() {
        let manager = SyntaxManager::new();
        let code = "local t = { 1, 2 } -- table";
        let expected = manager.highlight_code(Some("lua"), code);
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| manager.highlight_code(Some("lua"), code)))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
