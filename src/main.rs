//! docview - static Markdown documentation viewer

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use docview::cli::{Cli, Command, OutputFormat};
use docview::config::Config;
use docview::error::{Result, ViewerError};
use docview::loader::FsSource;
use docview::syntax::{escape_html, LanguageDefinition, SyntaxManager};
use docview::terminal::write_highlighted;
use docview::view::{build_site, NavLink, ViewState};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    let config = Config::load(config_path);

    match cli.command {
        Command::Render {
            docs,
            out,
            theme,
            title,
            root,
        } => {
            let links: Vec<NavLink> = if docs.is_empty() {
                config.nav_links()
            } else {
                docs.into_iter().map(NavLink::from_path).collect()
            };
            if links.is_empty() {
                return Err(ViewerError::Message(
                    "no documents given and no [[nav]] entries in the config file".to_string(),
                ));
            }

            let mut state = ViewState::new(links, theme.unwrap_or_else(|| config.theme()));
            let source = match root {
                Some(root) => FsSource::with_root(root),
                None => FsSource::new(),
            };
            let out_dir = out.unwrap_or_else(|| config.out_dir.clone());
            let title = title.unwrap_or_else(|| config.title.clone());

            let manager = SyntaxManager::new();
            let written = build_site(&mut state, &source, &manager, &out_dir, &title)?;
            for page in &written {
                println!("{}", page.display());
            }
            info!(pages = written.len(), out_dir = %out_dir.display(), "render complete");
        }

        Command::Highlight { file, lang, format } => {
            let manager = SyntaxManager::new();
            let code = read_input(file.as_ref())?;
            let language = resolve_language(&manager, lang.as_deref(), file.as_ref())?;

            let stdout = io::stdout();
            let mut out = stdout.lock();
            match format {
                OutputFormat::Html => {
                    let html = match language {
                        Some(language) => language.highlight(&code),
                        None => escape_html(&code),
                    };
                    out.write_all(html.as_bytes())?;
                    out.flush()?;
                }
                OutputFormat::Ansi => {
                    write_highlighted(&mut out, &code, language, config.theme())?;
                }
            }
        }

        Command::Theme { action } => match action {
            None => println!("{}", config.theme()),
            Some(action) => {
                let mut config = config;
                let theme = action.apply(config.theme());
                config.set_theme(theme);
                config.save(config_path)?;
                println!("{}", theme);
            }
        },

        Command::Languages => {
            let manager = SyntaxManager::new();
            for name in manager.list_languages() {
                if let Some(language) = manager.get_language(name) {
                    println!("{:<12} {}", language.name, language.aliases.join(", "));
                }
            }
        }
    }

    Ok(())
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => ViewerError::FileNotFound(path.display().to_string()),
            _ => ViewerError::Io(err),
        }),
        None => {
            let mut code = String::new();
            io::stdin().read_to_string(&mut code)?;
            Ok(code)
        }
    }
}

/// An explicit tag must be known; detection from the extension may miss
fn resolve_language<'m>(
    manager: &'m SyntaxManager,
    lang: Option<&str>,
    file: Option<&PathBuf>,
) -> Result<Option<&'m LanguageDefinition>> {
    match lang {
        Some(tag) => manager
            .find_by_tag(tag)
            .map(Some)
            .ok_or_else(|| ViewerError::UnknownLanguage(tag.to_string())),
        None => Ok(file.and_then(|path| manager.detect_language(path))),
    }
}
