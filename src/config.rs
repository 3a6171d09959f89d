use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::output::chart::DEFAULT_CHART_PATH;
use crate::topics::source::{BundledSource, DirectorySource};
use crate::topics::traits::DictionarySource;

/// Default terminal bar chart width, in cells.
pub const DEFAULT_CHART_WIDTH: usize = 30;

/// Where dictionaries will be read from.
#[derive(Debug, Clone, PartialEq)]
pub enum DictionaryLocation {
    /// `TOPICAL_DICT_DIR`, or the per-user config directory when it exists.
    Directory(PathBuf),
    /// The dictionaries compiled into the binary.
    Bundled,
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. CLI flags
/// override the output paths.
#[derive(Debug, Clone)]
pub struct Config {
    /// Explicit dictionary directory (TOPICAL_DICT_DIR)
    pub dictionary_dir: Option<PathBuf>,
    /// Text report destination (TOPICAL_REPORT_PATH, default report.txt)
    pub report_path: PathBuf,
    /// Optional JSON export destination (TOPICAL_JSON_PATH)
    pub json_path: Option<PathBuf>,
    /// PNG statistics chart destination (TOPICAL_CHART_PATH, default statistics.png)
    pub chart_path: PathBuf,
    /// Terminal bar chart width (TOPICAL_CHART_WIDTH, default 30)
    pub chart_width: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default; only a malformed chart width is an error.
    pub fn load() -> Result<Self> {
        let chart_width = match env::var("TOPICAL_CHART_WIDTH") {
            Ok(raw) => parse_chart_width(&raw)?,
            Err(_) => DEFAULT_CHART_WIDTH,
        };

        Ok(Self {
            dictionary_dir: env::var("TOPICAL_DICT_DIR")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            report_path: env::var("TOPICAL_REPORT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("report.txt")),
            json_path: env::var("TOPICAL_JSON_PATH").ok().map(PathBuf::from),
            chart_path: env::var("TOPICAL_CHART_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_CHART_PATH)),
            chart_width,
        })
    }

    /// Check that an explicitly configured dictionary directory exists.
    /// A missing directory would silently degrade every topic to defaults.
    pub fn require_dictionary_dir(&self) -> Result<()> {
        if let Some(dir) = &self.dictionary_dir {
            if !dir.is_dir() {
                anyhow::bail!(
                    "TOPICAL_DICT_DIR is set to {}, which is not a directory.\n\
                     Point it at a directory of <topic>.txt files, or unset it to use \
                     the bundled dictionaries.",
                    dir.display()
                );
            }
        }
        Ok(())
    }

    /// Resolve where dictionaries come from: TOPICAL_DICT_DIR, then
    /// `<config dir>/topical/dictionaries` if present, then the bundle.
    pub fn dictionary_location(&self) -> DictionaryLocation {
        if let Some(dir) = &self.dictionary_dir {
            return DictionaryLocation::Directory(dir.clone());
        }
        match user_dictionary_dir() {
            Some(dir) if dir.is_dir() => DictionaryLocation::Directory(dir),
            _ => DictionaryLocation::Bundled,
        }
    }

    /// Build the dictionary source for the resolved location.
    pub fn dictionary_source(&self) -> Box<dyn DictionarySource> {
        match self.dictionary_location() {
            DictionaryLocation::Directory(dir) => Box::new(DirectorySource::new(dir)),
            DictionaryLocation::Bundled => Box::new(BundledSource),
        }
    }
}

/// Per-user dictionary directory, e.g. `~/.config/topical/dictionaries`.
pub fn user_dictionary_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("topical").join("dictionaries"))
}

fn parse_chart_width(raw: &str) -> Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(0) | Err(_) => {
            anyhow::bail!("TOPICAL_CHART_WIDTH must be a positive integer, got '{raw}'")
        }
        Ok(width) => Ok(width),
    }
}
