//! HTML language definition

use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::Rule;
use crate::syntax::tokens::Category;

/// Create HTML language definition (also used for XML and SVG)
pub fn html_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("HTML");
    lang.add_alias("xml");
    lang.add_alias("svg");
    lang.add_alias("xhtml");
    lang.add_alias("markup");
    lang.add_extension("html");
    lang.add_extension("htm");
    lang.add_extension("xml");
    lang.add_extension("svg");

    if let Some(rule) = Rule::new("comment", r"(?s)&lt;!--.*?--&gt;", Category::Comment) {
        lang.add_rule(rule);
    }

    if let Some(rule) = Rule::new("doctype", r"(?i)&lt;!doctype\b[^&]*&gt;", Category::Builtin) {
        lang.add_rule(rule);
    }

    // `<` or `</` directly before a tag name
    if let Some(rule) = Rule::new("tag_open", r"(?P<tok>&lt;/?)[A-Za-z]", Category::Punctuation) {
        lang.add_rule(rule);
    }

    if let Some(rule) = Rule::new("tag_name", r"&lt;/?(?P<tok>[A-Za-z][\w:-]*)", Category::Tag) {
        lang.add_rule(rule);
    }

    let value = r"=\s*(?P<tok>&quot;(?:[^&]|&(?:amp|lt|gt|apos);)*&quot;|&apos;(?:[^&]|&(?:amp|lt|gt|quot);)*&apos;)";
    if let Some(rule) = Rule::new("attr_value", value, Category::AttrValue) {
        lang.add_rule(rule);
    }

    // Only names followed by a quoted value, so `a=b` in text is left alone.
    // Text that reads like `a="b"` outside a tag still matches.
    let name = r"(?P<tok>[A-Za-z_:][\w:.-]*)\s*=\s*(?:&quot;|&apos;)";
    if let Some(rule) = Rule::new("attr_name", name, Category::AttrName) {
        lang.add_rule(rule);
    }

    if let Some(rule) = Rule::new("tag_close", r"/?&gt;", Category::Punctuation) {
        lang.add_rule(rule);
    }

    lang
}
