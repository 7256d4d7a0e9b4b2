//! SQL language definition
//!
//! Keywords match case-insensitively and are rendered upper-case.

use super::{DOUBLE_QUOTED, SINGLE_QUOTED};
use crate::syntax::escape::ENTITY;
use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::{Rule, Transform};
use crate::syntax::tokens::Category;

/// Create SQL language definition
pub fn sql_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("SQL");
    lang.add_alias("mysql");
    lang.add_alias("postgres");
    lang.add_alias("postgresql");
    lang.add_alias("sqlite");
    lang.add_extension("sql");

    // Comments
    if let Some(rule) = Rule::new("line_comment", r"--.*", Category::Comment) {
        lang.add_rule(rule);
    }
    if let Some(rule) = Rule::new("block_comment", r"(?s)/\*.*?\*/", Category::Comment) {
        lang.add_rule(rule);
    }

    if let Some(rule) = Rule::new("string", SINGLE_QUOTED, Category::String) {
        lang.add_rule(rule);
    }

    // "quoted identifiers"
    if let Some(rule) = Rule::new("identifier", DOUBLE_QUOTED, Category::Variable) {
        lang.add_rule(rule);
    }

    let keywords = r"(?i)\b(?:add|all|alter|and|as|asc|begin|between|by|case|commit|create|default|delete|desc|distinct|drop|else|end|exists|foreign|from|full|group|having|in|index|inner|insert|into|is|join|key|left|like|limit|not|null|offset|on|or|order|outer|primary|references|right|rollback|select|set|table|then|union|unique|update|values|view|when|where)\b";
    if let Some(rule) = Rule::new("keyword", keywords, Category::Keyword) {
        lang.add_rule(rule.with_transform(Transform::Uppercase));
    }

    let functions = r"(?i)\b(?P<tok>avg|cast|coalesce|count|length|lower|max|min|now|sum|upper)\s*\(";
    if let Some(rule) = Rule::new("builtin", functions, Category::Builtin) {
        lang.add_rule(rule);
    }

    if let Some(rule) = Rule::new("boolean", r"(?i)\b(?:true|false)\b", Category::Boolean) {
        lang.add_rule(rule);
    }

    if let Some(rule) = Rule::new("number", r"\b\d+(?:\.\d+)?\b", Category::Number) {
        lang.add_rule(rule);
    }

    let operators = r"&lt;&gt;|&lt;=|&gt;=|!=|&lt;|&gt;|\|\||[=+\-*/%]";
    if let Some(rule) = Rule::new("operator", operators, Category::Operator) {
        lang.add_rule(rule);
    }

    let punctuation = format!(r"{ENTITY}|(?P<tok>[(),;.])");
    if let Some(rule) = Rule::new("punctuation", &punctuation, Category::Punctuation) {
        lang.add_rule(rule);
    }

    lang
}
