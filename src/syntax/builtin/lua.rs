//! Lua language definition

use super::{DOUBLE_QUOTED, SINGLE_QUOTED};
use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::Rule;
use crate::syntax::tokens::Category;

/// Create Lua language definition
pub fn lua_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("Lua");
    lang.add_extension("lua");

    // Comments (block before line, both start with --)
    if let Some(rule) = Rule::new("block_comment", r"(?s)--\[\[.*?\]\]", Category::Comment) {
        lang.add_rule(rule);
    }
    if let Some(rule) = Rule::new("line_comment", r"--.*", Category::Comment) {
        lang.add_rule(rule);
    }

    // Strings
    if let Some(rule) = Rule::new("long_string", r"(?s)\[\[.*?\]\]", Category::String) {
        lang.add_rule(rule);
    }
    if let Some(rule) = Rule::new("double_string", DOUBLE_QUOTED, Category::String) {
        lang.add_rule(rule);
    }
    if let Some(rule) = Rule::new("single_string", SINGLE_QUOTED, Category::String) {
        lang.add_rule(rule);
    }

    let keywords = r"\b(?:and|break|do|else|elseif|end|for|function|goto|if|in|local|not|or|repeat|return|then|until|while)\b";
    if let Some(rule) = Rule::new("keyword", keywords, Category::Keyword) {
        lang.add_rule(rule);
    }

    if let Some(rule) = Rule::new("constant", r"\b(?:true|false|nil)\b", Category::Boolean) {
        lang.add_rule(rule);
    }

    let number = r"\b(?:0[xX][0-9a-fA-F]+|\d+(?:\.\d+)?(?:[eE][+-]?\d+)?)\b";
    if let Some(rule) = Rule::new("number", number, Category::Number) {
        lang.add_rule(rule);
    }

    // Comparisons match the escaped `&lt;` / `&gt;` as a whole
    let operator = r"==|~=|&lt;=|&gt;=|\.\.\.?|&lt;|&gt;|[+\-*/%^#=]";
    if let Some(rule) = Rule::new("operator", operator, Category::Operator) {
        lang.add_rule(rule);
    }

    // Function calls and definitions: name followed by (
    if let Some(rule) = Rule::new("function", r"(?P<tok>[A-Za-z_][\w.:]*)\s*\(", Category::Function) {
        lang.add_rule(rule);
    }

    lang
}
