//! Token categories for syntax highlighting
//!
//! This module defines the semantic categories a rule can assign to a
//! match, their CSS class names and their colours in each theme.

use super::style::{Color, Style};
use crate::theme::Theme;

/// Semantic category of a highlighted span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Comments (`--`, `//`, `/* */`, `<!-- -->`)
    Comment,
    /// String literals
    String,
    /// Numeric literals
    Number,
    /// Language keywords
    Keyword,
    /// `true` / `false`
    Boolean,
    /// `null`, `nil`, `undefined`
    Null,
    /// Function names at call sites
    Function,
    /// Operators (+, -, ==, etc.)
    Operator,
    /// Punctuation (braces, brackets, commas)
    Punctuation,
    /// Object keys (JSON properties)
    Property,
    /// Markup tag names
    Tag,
    /// Markup attribute names
    AttrName,
    /// Markup attribute values
    AttrValue,
    /// Built-in functions and doctype declarations
    Builtin,
    /// Variables and parameters
    Variable,
}

impl Category {
    /// Every category, in stylesheet order
    pub const ALL: [Category; 15] = [
        Category::Comment,
        Category::String,
        Category::Number,
        Category::Keyword,
        Category::Boolean,
        Category::Null,
        Category::Function,
        Category::Operator,
        Category::Punctuation,
        Category::Property,
        Category::Tag,
        Category::AttrName,
        Category::AttrValue,
        Category::Builtin,
        Category::Variable,
    ];

    /// CSS class used in the category marker
    pub fn css_class(&self) -> &'static str {
        match self {
            Category::Comment => "comment",
            Category::String => "string",
            Category::Number => "number",
            Category::Keyword => "keyword",
            Category::Boolean => "boolean",
            Category::Null => "null",
            Category::Function => "function",
            Category::Operator => "operator",
            Category::Punctuation => "punctuation",
            Category::Property => "property",
            Category::Tag => "tag",
            Category::AttrName => "attr-name",
            Category::AttrValue => "attr-value",
            Category::Builtin => "builtin",
            Category::Variable => "variable",
        }
    }

    /// Style for this category in the given theme
    pub fn style(&self, theme: Theme) -> Style {
        match theme {
            Theme::Light => self.light_style(),
            Theme::Dark => self.dark_style(),
        }
    }

    fn light_style(&self) -> Style {
        match self {
            Category::Comment => Style::fg(Color::rgb(0xa0, 0xa1, 0xa7)).with_italic(),
            Category::String | Category::AttrValue => Style::fg(Color::rgb(0x50, 0xa1, 0x4f)),
            Category::Number | Category::Boolean | Category::Null => {
                Style::fg(Color::rgb(0x98, 0x68, 0x01))
            }
            Category::Keyword => Style::fg(Color::rgb(0xa6, 0x26, 0xa4)).with_bold(),
            Category::Function => Style::fg(Color::rgb(0x40, 0x78, 0xf2)),
            Category::Operator => Style::fg(Color::rgb(0x01, 0x84, 0xbc)),
            Category::Punctuation => Style::fg(Color::rgb(0x38, 0x3a, 0x42)),
            Category::Property | Category::Tag => Style::fg(Color::rgb(0xe4, 0x56, 0x49)),
            Category::AttrName => Style::fg(Color::rgb(0x98, 0x68, 0x01)),
            Category::Builtin => Style::fg(Color::rgb(0xc1, 0x84, 0x01)),
            Category::Variable => Style::fg(Color::rgb(0xe4, 0x56, 0x49)),
        }
    }

    fn dark_style(&self) -> Style {
        match self {
            Category::Comment => Style::fg(Color::rgb(0x5c, 0x63, 0x70)).with_italic(),
            Category::String | Category::AttrValue => Style::fg(Color::rgb(0x98, 0xc3, 0x79)),
            Category::Number | Category::Boolean | Category::Null => {
                Style::fg(Color::rgb(0xd1, 0x9a, 0x66))
            }
            Category::Keyword => Style::fg(Color::rgb(0xc6, 0x78, 0xdd)).with_bold(),
            Category::Function => Style::fg(Color::rgb(0x61, 0xaf, 0xef)),
            Category::Operator => Style::fg(Color::rgb(0x56, 0xb6, 0xc2)),
            Category::Punctuation => Style::fg(Color::rgb(0xab, 0xb2, 0xbf)),
            Category::Property | Category::Tag => Style::fg(Color::rgb(0xe0, 0x6c, 0x75)),
            Category::AttrName => Style::fg(Color::rgb(0xd1, 0x9a, 0x66)),
            Category::Builtin => Style::fg(Color::rgb(0xe5, 0xc0, 0x7b)),
            Category::Variable => Style::fg(Color::rgb(0xe0, 0x6c, 0x75)),
        }
    }
}
