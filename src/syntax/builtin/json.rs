//! JSON language definition

use super::DOUBLE_QUOTED;
use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::Rule;
use crate::syntax::tokens::Category;

/// Create JSON language definition
pub fn json_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("JSON");
    lang.add_alias("jsonc");
    lang.add_alias("json5");
    lang.add_extension("json");

    // Object keys: a string followed by a colon
    let property = format!(r"(?P<tok>{DOUBLE_QUOTED})\s*:");
    if let Some(rule) = Rule::new("property", &property, Category::Property) {
        lang.add_rule(rule);
    }

    if let Some(rule) = Rule::new("string", DOUBLE_QUOTED, Category::String) {
        lang.add_rule(rule);
    }

    let number = r"-?\b\d+(?:\.\d+)?(?:[eE][+-]?\d+)?\b";
    if let Some(rule) = Rule::new("number", number, Category::Number) {
        lang.add_rule(rule);
    }

    if let Some(rule) = Rule::new("boolean", r"\b(?:true|false)\b", Category::Boolean) {
        lang.add_rule(rule);
    }
    if let Some(rule) = Rule::new("null", r"\bnull\b", Category::Null) {
        lang.add_rule(rule);
    }

    if let Some(rule) = Rule::new("punctuation", r"[{}\[\],:]", Category::Punctuation) {
        lang.add_rule(rule);
    }

    lang
}
