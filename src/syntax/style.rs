//! Style types for highlighted output
//!
//! One palette drives both the generated stylesheet and the terminal
//! renderer, so the two outputs agree on colours.

use std::fmt;

/// 24-bit colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex notation (`#rrggbb`)
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground colour (None = inherit)
    pub fg: Option<Color>,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
}

impl Style {
    /// Create a style with just foreground colour
    pub fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            ..Default::default()
        }
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// CSS declarations for this style, e.g. `color: #a626a4; font-weight: bold;`
    pub fn to_css(&self) -> String {
        let mut decls = Vec::new();
        if let Some(fg) = self.fg {
            decls.push(format!("color: {};", fg.hex()));
        }
        if self.bold {
            decls.push("font-weight: bold;".to_string());
        }
        if self.italic {
            decls.push("font-style: italic;".to_string());
        }
        decls.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_default() {
        let style = Style::default();
        assert!(style.is_default());
        assert_eq!(style.to_css(), "");
    }

    #[test]
    fn test_style_builders() {
        let style = Style::fg(Color::rgb(0xa6, 0x26, 0xa4)).with_bold().with_italic();
        assert!(!style.is_default());
        assert_eq!(
            style.to_css(),
            "color: #a626a4; font-weight: bold; font-style: italic;"
        );
    }

    #[test]
    fn test_color_hex() {
        assert_eq!(Color::rgb(0, 0x0f, 0xff).hex(), "#000fff");
        assert_eq!(Color::rgb(1, 2, 3).to_string(), "#010203");
    }
}
