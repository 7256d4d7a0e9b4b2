//! Terminal output of highlighted code using crossterm

use std::io::Write;

use crossterm::queue;
use crossterm::style::{Attribute, Color as TermColor, ContentStyle, Print, PrintStyledContent};

use crate::error::Result;
use crate::syntax::{escape_html, unescape_html, LanguageDefinition, Style};
use crate::theme::Theme;

/// Convert a palette style to a crossterm style
fn content_style(style: Style) -> ContentStyle {
    let mut content = ContentStyle::new();
    if let Some(fg) = style.fg {
        content.foreground_color = Some(TermColor::Rgb {
            r: fg.r,
            g: fg.g,
            b: fg.b,
        });
    }
    if style.bold {
        content.attributes.set(Attribute::Bold);
    }
    if style.italic {
        content.attributes.set(Attribute::Italic);
    }
    content
}

/// Write `code` to `out` with highlighted spans coloured for `theme`
///
/// Matching runs on the escaped text (rules are written for it); output is
/// unescaped again, so the terminal sees the original characters.
pub fn write_highlighted<W: Write>(
    out: &mut W,
    code: &str,
    lang: Option<&LanguageDefinition>,
    theme: Theme,
) -> Result<()> {
    let escaped = escape_html(code);
    let matches = lang.map(|l| l.matches(&escaped)).unwrap_or_default();

    let mut cursor = 0;
    for m in &matches {
        queue!(out, Print(unescape_html(&escaped[cursor..m.start])))?;
        let styled = content_style(m.category().style(theme)).apply(unescape_html(&m.display_text()));
        queue!(out, PrintStyledContent(styled))?;
        cursor = m.end;
    }
    queue!(out, Print(unescape_html(&escaped[cursor..])))?;
    out.flush()?;
    Ok(())
}
