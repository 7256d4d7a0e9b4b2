//! Light/dark theme
//!
//! The page stylesheet carries both palettes; the `dark` class on `<body>`
//! selects between them.

use std::fmt;
use std::fmt::Write;
use std::str::FromStr;

use crate::error::ViewerError;
use crate::syntax::Category;

/// Page theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Map a persisted dark-mode flag to a theme
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }

    /// The other theme
    pub fn toggle(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = ViewerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(ViewerError::UnknownTheme(s.to_string())),
        }
    }
}

const BASE_CSS: &str = "\
body { margin: 0; display: flex; font-family: system-ui, sans-serif; background: #ffffff; color: #24292f; }
body.dark { background: #1e2127; color: #d7dae0; }
nav { min-width: 14rem; padding: 1rem; border-right: 1px solid #d0d7de; }
body.dark nav { border-right-color: #3e4451; }
.nav-link { display: block; padding: 0.25rem 0; color: inherit; text-decoration: none; }
.nav-link.active { font-weight: bold; text-decoration: underline; }
#markdown-content { flex: 1; padding: 1rem 2rem; max-width: 60rem; }
pre { padding: 0.75rem; overflow-x: auto; background: #f6f8fa; }
body.dark pre { background: #282c34; }
";

/// Generate the stylesheet for pages and highlighted code
pub fn stylesheet() -> String {
    let mut css = String::from(BASE_CSS);
    for category in Category::ALL {
        let class = category.css_class();
        let _ = writeln!(css, ".token.{class} {{ {} }}", category.style(Theme::Light).to_css());
    }
    for category in Category::ALL {
        let class = category.css_class();
        let _ = writeln!(
            css,
            "body.dark .token.{class} {{ {} }}",
            category.style(Theme::Dark).to_css()
        );
    }
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
    }

    #[test]
    fn test_dark_flag() {
        assert_eq!(Theme::from_dark_flag(true), Theme::Dark);
        assert_eq!(Theme::from_dark_flag(false), Theme::Light);
        assert!(Theme::Dark.is_dark());
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_parse() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(" Light ".parse::<Theme>().unwrap(), Theme::Light);
        assert!(matches!("blue".parse::<Theme>(), Err(ViewerError::UnknownTheme(_))));
    }

    #[test]
    fn test_stylesheet_covers_every_category() {
        let css = stylesheet();
        for category in Category::ALL {
            let class = category.css_class();
            assert!(css.contains(&format!("\n.token.{class} {{")), "{class}");
            assert!(css.contains(&format!("body.dark .token.{class} {{")), "{class}");
        }
        assert!(css.contains(".nav-link.active"));
    }
}
