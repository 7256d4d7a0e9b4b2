//! Syntax highlighting module
//!
//! Regex rule sets per language, merged into non-overlapping spans and
//! rendered as HTML category markers (or terminal colours).

mod builtin;
mod escape;
mod highlight;
mod interval;
mod language;
mod manager;
mod rules;
mod style;
mod tokens;

pub use escape::{escape_html, unescape_html};
pub use highlight::{find_matches, highlight, highlight_with, push_span, Match};
pub use interval::{select_non_overlapping, Interval};
pub use language::LanguageDefinition;
pub use manager::SyntaxManager;
pub use rules::{Rule, Transform};
pub use style::{Color, Style};
pub use tokens::Category;
