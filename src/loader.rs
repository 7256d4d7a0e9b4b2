//! Document loading
//!
//! Fetches Markdown source and turns it into a page body. A document that
//! cannot be loaded still produces a body: an inline error message.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Result, ViewerError};
use crate::render::render_markdown;
use crate::syntax::{escape_html, SyntaxManager};

/// Something that can produce Markdown text for a document path
pub trait DocumentSource {
    fn fetch(&self, path: &Path) -> Result<String>;
}

/// Reads documents from the filesystem
#[derive(Debug, Clone, Default)]
pub struct FsSource {
    /// Directory that relative paths resolve against
    root: Option<PathBuf>,
}

impl FsSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative document paths against `root`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl DocumentSource for FsSource {
    fn fetch(&self, path: &Path) -> Result<String> {
        let full = self.resolve(path);
        debug!(path = %full.display(), "reading document");
        fs::read_to_string(&full).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => ViewerError::FileNotFound(full.display().to_string()),
            _ => ViewerError::Io(err),
        })
    }
}

/// A loaded page body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDocument {
    pub html: String,
    /// First level-1 heading, if the document loaded and has one
    pub title: Option<String>,
    /// Whether the body is an error message
    pub failed: bool,
}

/// Fetch and render a document, or render the failure message
pub fn load_document(
    source: &dyn DocumentSource,
    manager: &SyntaxManager,
    path: &Path,
) -> LoadedDocument {
    match source.fetch(path) {
        Ok(markdown) => {
            let rendered = render_markdown(&markdown, manager);
            LoadedDocument {
                html: rendered.html,
                title: rendered.title,
                failed: false,
            }
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "failed to load document");
            LoadedDocument {
                html: error_body(path, &err),
                title: None,
                failed: true,
            }
        }
    }
}

/// Inline error message shown in place of a document
pub fn error_body(path: &Path, err: &ViewerError) -> String {
    let message = format!("Failed to load {}: {}", path.display(), err);
    format!(
        "<p class=\"load-error\" style=\"color:red;\">Error loading markdown file: {}</p>\n",
        escape_html(&message)
    )
}
