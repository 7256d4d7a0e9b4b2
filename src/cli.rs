//! Command line interface

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::theme::Theme;

#[derive(Parser, Debug)]
#[command(
    name = "docview",
    version,
    about = "Render Markdown documentation to themed HTML with highlighted code blocks"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file to use instead of ~/.docview.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render documents to HTML pages with a shared navigation bar
    Render {
        /// Markdown files; defaults to the [[nav]] entries of the config
        docs: Vec<PathBuf>,

        /// Output directory
        #[arg(long, short)]
        out: Option<PathBuf>,

        /// Page theme; defaults to the saved preference
        #[arg(long)]
        theme: Option<Theme>,

        /// Site title
        #[arg(long)]
        title: Option<String>,

        /// Directory that relative document paths resolve against
        #[arg(long)]
        root: Option<PathBuf>,
    },

    /// Highlight a single source file (or stdin)
    Highlight {
        /// Source file; reads stdin when absent
        file: Option<PathBuf>,

        /// Language tag; detected from the file extension when absent
        #[arg(long, short)]
        lang: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,
    },

    /// Show or change the saved theme
    Theme {
        #[arg(value_enum)]
        action: Option<ThemeAction>,
    },

    /// List languages with highlighting rules
    Languages,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// HTML with category markers
    Html,
    /// ANSI-coloured terminal output
    Ansi,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeAction {
    Light,
    Dark,
    Toggle,
}

impl ThemeAction {
    /// Theme after applying this action to `current`
    pub fn apply(&self, current: Theme) -> Theme {
        match self {
            ThemeAction::Light => Theme::Light,
            ThemeAction::Dark => Theme::Dark,
            ThemeAction::Toggle => current.toggle(),
        }
    }
}
