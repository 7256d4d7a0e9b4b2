//! Configuration file support
//!
//! Loads settings from ~/.docview.toml (or %USERPROFILE%\.docview.toml on
//! Windows). The theme preference is written back here, so it persists
//! between runs.
//!
//! Example:
//! ```text
//! # docview configuration
//! dark-mode = true
//! title = "Project Docs"
//! out-dir = "site"
//!
//! [[nav]]
//! label = "Introduction"
//! path = "docs/intro.md"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::theme::Theme;
use crate::view::NavLink;

/// A navigation entry as written in the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    pub label: String,
    pub path: PathBuf,
}

impl From<&NavEntry> for NavLink {
    fn from(entry: &NavEntry) -> Self {
        NavLink::new(entry.label.clone(), entry.path.clone())
    }
}

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Whether pages use the dark theme
    pub dark_mode: bool,
    /// Site title shown in every page title
    pub title: String,
    /// Where `render` writes pages
    pub out_dir: PathBuf,
    /// Documents to render when none are given on the command line
    pub nav: Vec<NavEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dark_mode: false,
            title: "Documentation".to_string(),
            out_dir: PathBuf::from("site"),
            nav: Vec::new(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".docview.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".docview.toml"))
        }
    }

    /// Load configuration, falling back to defaults
    ///
    /// A missing file is normal; an unreadable or malformed one is logged
    /// and ignored.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path.map(Path::to_path_buf).or_else(Self::config_path) else {
            return Config::default();
        };

        match Self::read(&path) {
            Ok(Some(config)) => {
                debug!(path = %path.display(), "loaded config");
                config
            }
            Ok(None) => Config::default(),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "ignoring unusable config file");
                Config::default()
            }
        }
    }

    /// Read a config file; `Ok(None)` if it does not exist
    pub fn read(path: &Path) -> Result<Option<Self>> {
        match fs::read_to_string(path) {
            Ok(contents) => Ok(Some(Self::parse(&contents)?)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Save current configuration to `path` (or the default location)
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let Some(path) = path.map(Path::to_path_buf).or_else(Self::config_path) else {
            return Ok(());
        };
        let contents = format!("# docview configuration\n\n{}", toml::to_string_pretty(self)?);
        fs::write(&path, contents)?;
        info!(path = %path.display(), "saved config");
        Ok(())
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark_flag(self.dark_mode)
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.dark_mode = theme.is_dark();
    }

    /// Navigation links from the config file
    pub fn nav_links(&self) -> Vec<NavLink> {
        self.nav.iter().map(NavLink::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let contents = r#"
# Comment
dark-mode = true
title = "Project Docs"

[[nav]]
label = "Intro"
path = "docs/intro.md"
        "#;

        let config = Config::parse(contents).unwrap();
        assert!(config.dark_mode);
        assert_eq!(config.title, "Project Docs");
        assert_eq!(config.out_dir, PathBuf::from("site"));
        assert_eq!(config.nav_links(), vec![NavLink::new("Intro", "docs/intro.md")]);
    }

    #[test]
    fn test_parse_empty_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Config::parse("dark-mode = \"maybe\"").is_err());
        assert!(Config::parse("not toml at all [").is_err());
    }

    #[test]
    fn test_theme_flag() {
        let mut config = Config::default();
        assert_eq!(config.theme(), Theme::Light);
        config.set_theme(Theme::Dark);
        assert!(config.dark_mode);
        assert_eq!(config.theme(), Theme::Dark);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docview.toml");

        let mut config = Config::default();
        config.set_theme(Theme::Dark);
        config.nav.push(NavEntry {
            label: "API".to_string(),
            path: PathBuf::from("api.md"),
        });
        config.save(Some(path.as_path())).unwrap();

        assert_eq!(Config::load(Some(path.as_path())), config);
    }

    #[test]
    fn test_load_missing_or_malformed_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("none.toml");
        assert_eq!(Config::load(Some(missing.as_path())), Config::default());
        assert!(Config::read(&missing).unwrap().is_none());

        let broken = dir.path().join("broken.toml");
        fs::write(&broken, "dark-mode = [").unwrap();
        assert_eq!(Config::load(Some(broken.as_path())), Config::default());
    }
}
