//! Navigation state and page assembly
//!
//! All view state lives in a ViewState value that callers pass around;
//! nothing here is global. Pages are complete static HTML documents.

use std::collections::HashSet;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::loader::{load_document, DocumentSource};
use crate::syntax::{escape_html, SyntaxManager};
use crate::theme::{stylesheet, Theme};

/// Stylesheet file written next to the pages
pub const STYLESHEET_NAME: &str = "theme.css";

/// Landing page, a copy of the first link's page
pub const INDEX_PAGE: &str = "index.html";

/// A navigation entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    /// Markdown document this link loads
    pub path: PathBuf,
}

impl NavLink {
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }

    /// Build a link labelled with the document's file stem
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let label = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { label, path }
    }

    /// File stem the page is named after (`docs/intro.md` -> `intro`)
    fn page_stem(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "page".to_string())
    }
}

/// Navigation and theme state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub links: Vec<NavLink>,
    /// Index into `links` of the active entry
    pub active: Option<usize>,
    pub theme: Theme,
}

impl ViewState {
    pub fn new(links: Vec<NavLink>, theme: Theme) -> Self {
        Self {
            links,
            active: None,
            theme,
        }
    }

    /// Make `index` the only active link
    ///
    /// Out-of-range indices leave the state unchanged.
    pub fn select(&mut self, index: usize) -> Option<&NavLink> {
        if index >= self.links.len() {
            return None;
        }
        self.active = Some(index);
        self.links.get(index)
    }

    /// Select the link whose document is `path`
    pub fn select_path(&mut self, path: &Path) -> Option<&NavLink> {
        let index = self.links.iter().position(|l| l.path == path)?;
        self.select(index)
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Switch theme and return the new one
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggle();
        self.theme
    }

    /// Output file name for each link, in link order
    ///
    /// Links sharing a file stem get `-2`, `-3`, ... suffixes in order.
    /// Names are compared case-insensitively, and `index.html` is never
    /// handed out since it is the landing page.
    pub fn page_names(&self) -> Vec<String> {
        let mut used = HashSet::from([INDEX_PAGE.to_string()]);
        self.links
            .iter()
            .map(|link| {
                let stem = link.page_stem();
                let mut name = format!("{stem}.html");
                let mut n = 2;
                while !used.insert(name.to_lowercase()) {
                    name = format!("{stem}-{n}.html");
                    n += 1;
                }
                name
            })
            .collect()
    }
}

fn nav_html(state: &ViewState) -> String {
    let mut nav = String::from("<nav>\n");
    let pages = state.page_names();
    for (i, (link, page)) in state.links.iter().zip(&pages).enumerate() {
        let class = if state.active == Some(i) {
            "nav-link active"
        } else {
            "nav-link"
        };
        let _ = writeln!(
            nav,
            "  <a class=\"{class}\" href=\"{}\" data-md=\"{}\">{}</a>",
            escape_html(page),
            escape_html(&link.path.to_string_lossy()),
            escape_html(&link.label)
        );
    }
    nav.push_str("</nav>\n");
    nav
}

/// Render a complete HTML page for the current state
///
/// `body` is already-rendered HTML; `title` is plain text.
pub fn render_page(state: &ViewState, title: &str, body: &str, stylesheet_href: &str) -> String {
    let body_class = if state.theme.is_dark() { " class=\"dark\"" } else { "" };
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{}</title>\n\
         <link rel=\"stylesheet\" href=\"{}\">\n\
         </head>\n\
         <body{body_class}>\n\
         {}\
         <main id=\"markdown-content\">\n\
         {body}\
         </main>\n\
         </body>\n\
         </html>\n",
        escape_html(title),
        escape_html(stylesheet_href),
        nav_html(state),
    )
}

/// Render every linked document into `out_dir`
///
/// Documents that fail to load get an error page. Only output errors
/// abort the build. The first page is also written as `index.html`.
/// Returns the written page paths.
pub fn build_site(
    state: &mut ViewState,
    source: &dyn DocumentSource,
    manager: &SyntaxManager,
    out_dir: &Path,
    site_title: &str,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;
    fs::write(out_dir.join(STYLESHEET_NAME), stylesheet())?;

    let pages = state.page_names();
    let mut written = Vec::with_capacity(pages.len() + 1);
    for (index, page_name) in pages.iter().enumerate() {
        let Some(link) = state.select(index).cloned() else {
            continue;
        };
        let doc = load_document(source, manager, &link.path);
        let title = match &doc.title {
            Some(heading) => format!("{heading} - {site_title}"),
            None => format!("{} - {site_title}", link.label),
        };

        let page = render_page(state, &title, &doc.html, STYLESHEET_NAME);
        let target = out_dir.join(page_name);
        fs::write(&target, &page)?;
        info!(page = %target.display(), failed = doc.failed, "wrote page");
        written.push(target);

        if index == 0 {
            let landing = out_dir.join(INDEX_PAGE);
            fs::write(&landing, &page)?;
            written.push(landing);
        }
    }
    Ok(written)
}
