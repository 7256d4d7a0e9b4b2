//! JavaScript language definition

use super::{DOUBLE_QUOTED, SINGLE_QUOTED};
use crate::syntax::escape::ENTITY;
use crate::syntax::language::LanguageDefinition;
use crate::syntax::rules::Rule;
use crate::syntax::tokens::Category;

/// Create JavaScript language definition
pub fn javascript_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("JavaScript");
    lang.add_alias("js");
    lang.add_alias("jsx");
    lang.add_alias("mjs");
    lang.add_alias("node");
    lang.add_extension("js");
    lang.add_extension("mjs");
    lang.add_extension("cjs");
    lang.add_extension("jsx");

    // Comments
    if let Some(rule) = Rule::new("block_comment", r"(?s)/\*.*?\*/", Category::Comment) {
        lang.add_rule(rule);
    }
    if let Some(rule) = Rule::new("line_comment", r"//.*", Category::Comment) {
        lang.add_rule(rule);
    }

    // Strings
    if let Some(rule) = Rule::new("template_string", r"(?s)`(?:\\.|[^\\`])*`", Category::String) {
        lang.add_rule(rule);
    }
    if let Some(rule) = Rule::new("double_string", DOUBLE_QUOTED, Category::String) {
        lang.add_rule(rule);
    }
    if let Some(rule) = Rule::new("single_string", SINGLE_QUOTED, Category::String) {
        lang.add_rule(rule);
    }

    let keywords = r"\b(?:async|await|break|case|catch|class|const|continue|debugger|default|delete|do|else|export|extends|finally|for|from|function|if|import|in|instanceof|let|new|of|return|static|super|switch|this|throw|try|typeof|var|void|while|with|yield)\b";
    if let Some(rule) = Rule::new("keyword", keywords, Category::Keyword) {
        lang.add_rule(rule);
    }

    if let Some(rule) = Rule::new("boolean", r"\b(?:true|false)\b", Category::Boolean) {
        lang.add_rule(rule);
    }
    if let Some(rule) = Rule::new("null", r"\b(?:null|undefined|NaN)\b", Category::Null) {
        lang.add_rule(rule);
    }

    let number = r"\b(?:0[xX][0-9a-fA-F]+|0[bB][01]+|0[oO][0-7]+|\d+(?:\.\d+)?(?:[eE][+-]?\d+)?)n?\b";
    if let Some(rule) = Rule::new("number", number, Category::Number) {
        lang.add_rule(rule);
    }

    let globals = r"\b(?:console|window|document|globalThis|Math|JSON|Promise|Object|Array)\b";
    if let Some(rule) = Rule::new("builtin", globals, Category::Builtin) {
        lang.add_rule(rule);
    }

    if let Some(rule) = Rule::new("function", r"(?P<tok>[A-Za-z_$][\w$]*)\s*\(", Category::Function) {
        lang.add_rule(rule);
    }

    // Entity forms first so `&amp;&amp;` is one operator, not `&amp;` twice
    let operators = r"=&gt;|===|!==|==|!=|&lt;=|&gt;=|&amp;&amp;|\|\||\?\?|\+\+|--|&lt;&lt;|&gt;&gt;|[+\-*/%]=?|&lt;|&gt;|&amp;|[=!?:|^~]";
    if let Some(rule) = Rule::new("operator", operators, Category::Operator) {
        lang.add_rule(rule);
    }

    let punctuation = format!(r"{ENTITY}|(?P<tok>[{{}}()\[\];,.])");
    if let Some(rule) = Rule::new("punctuation", &punctuation, Category::Punctuation) {
        lang.add_rule(rule);
    }

    lang
}
