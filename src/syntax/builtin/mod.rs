//! Built-in language definitions
//!
//! Rule sets for the languages the viewer highlights. Every pattern runs
//! against escaped text, so quotes appear as `&quot;` / `&apos;` and
//! angle brackets as `&lt;` / `&gt;`.

mod html;
mod javascript;
mod json;
mod lua;
mod sql;

use super::language::LanguageDefinition;

/// Double-quoted string with backslash escapes
pub(crate) const DOUBLE_QUOTED: &str = r"&quot;(?:\\.|[^\\&\n]|&(?:amp|lt|gt|apos);)*&quot;";

/// Single-quoted string with backslash escapes
pub(crate) const SINGLE_QUOTED: &str = r"&apos;(?:\\.|[^\\&\n]|&(?:amp|lt|gt|quot);)*&apos;";

/// Get all built-in language definitions
pub fn all_languages() -> Vec<LanguageDefinition> {
    vec![
        lua::lua_language(),
        javascript::javascript_language(),
        json::json_language(),
        sql::sql_language(),
        html::html_language(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        // Rule::new drops rules that fail to compile; none should be missing
        let expected = [("Lua", 10), ("JavaScript", 13), ("JSON", 6), ("SQL", 10), ("HTML", 7)];
        let languages = all_languages();
        for (name, count) in expected {
            let lang = languages.iter().find(|l| l.name == name).unwrap();
            assert_eq!(lang.rules.len(), count, "{name}");
        }
    }

    #[test]
    fn test_quoted_strings_stop_at_closing_quote() {
        let re = regex::Regex::new(DOUBLE_QUOTED).unwrap();
        let text = r"&quot;a&quot;, &quot;b\&quot;c&quot;";
        let found: Vec<_> = re.find_iter(text).map(|m| m.as_str()).collect();
        assert_eq!(found, vec!["&quot;a&quot;", r"&quot;b\&quot;c&quot;"]);

        let re = regex::Regex::new(SINGLE_QUOTED).unwrap();
        assert_eq!(
            re.find("x = &apos;it&quot;s&apos; y").map(|m| m.as_str()),
            Some("&apos;it&quot;s&apos;")
        );
    }
}
