//! Markdown rendering
//!
//! Markdown goes through pulldown-cmark; fenced code blocks are pulled out
//! of the event stream and replaced with highlighted HTML.

use pulldown_cmark::{html, CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::syntax::{escape_html, SyntaxManager};

/// Rendered Markdown document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub html: String,
    /// Plain text of the first level-1 heading
    pub title: Option<String>,
}

fn options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_FOOTNOTES);
    options
}

/// Language tag of a fence info string (`lua title="x"` -> `lua`)
fn fence_tag(info: &str) -> Option<&str> {
    info.split(|c: char| c.is_whitespace() || c == ',')
        .find(|word| !word.is_empty())
}

fn code_block_html(tag: Option<&str>, code: &str, manager: &SyntaxManager) -> String {
    let body = manager.highlight_code(tag, code);
    match tag {
        Some(tag) => {
            let class = escape_html(tag);
            format!(
                "<pre class=\"language-{class}\"><code class=\"language-{class}\">{body}</code></pre>\n"
            )
        }
        None => format!("<pre><code>{body}</code></pre>\n"),
    }
}

/// Render Markdown to HTML, highlighting fenced code blocks
pub fn render_markdown(markdown: &str, manager: &SyntaxManager) -> Rendered {
    let mut events = Vec::new();
    // (tag, collected text) while inside a fenced block
    let mut code: Option<(Option<String>, String)> = None;
    let mut heading: Option<String> = None;
    let mut title = None;

    for event in Parser::new_ext(markdown, options()) {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
                code = Some((fence_tag(&info).map(str::to_string), String::new()));
            }
            Event::Text(text) if code.is_some() => {
                if let Some((_, buf)) = code.as_mut() {
                    buf.push_str(&text);
                }
            }
            Event::End(TagEnd::CodeBlock) if code.is_some() => {
                if let Some((tag, buf)) = code.take() {
                    let html = code_block_html(tag.as_deref(), &buf, manager);
                    events.push(Event::Html(html.into()));
                }
            }
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) if title.is_none() => {
                heading = Some(String::new());
                events.push(event);
            }
            Event::End(TagEnd::Heading(HeadingLevel::H1)) if heading.is_some() => {
                title = heading.take().map(|h| h.trim().to_string());
                events.push(event);
            }
            other => {
                if let (Some(h), Event::Text(text) | Event::Code(text)) = (heading.as_mut(), &other) {
                    h.push_str(text);
                }
                events.push(other);
            }
        }
    }

    let mut out = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut out, events.into_iter());
    Rendered { html: out, title }
}
