//! docview - static Markdown documentation viewer
//!
//! Renders Markdown documents to themed HTML pages, highlighting fenced
//! code blocks with per-language regex rule sets.

pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod render;
pub mod syntax;
pub mod terminal;
pub mod theme;
pub mod view;

pub use error::{Result, ViewerError};
