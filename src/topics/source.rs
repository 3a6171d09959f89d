// Dictionary sources: a directory of `<id>.txt` files, or the copies of
// `dictionaries/` compiled into the binary.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use super::topic::Topic;
use super::traits::DictionarySource;

/// Reads dictionaries from `<dir>/<id>.txt`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, topic: Topic) -> PathBuf {
        self.dir.join(topic.resource_name())
    }
}

impl DictionarySource for DirectorySource {
    fn read(&self, topic: Topic) -> Result<Option<String>> {
        let path = self.path_for(topic);
        if !path.exists() {
            debug!(path = %path.display(), "Dictionary file not present");
            return Ok(None);
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read dictionary {}", path.display()))?;
        Ok(Some(content))
    }

    fn describe(&self) -> String {
        self.dir.display().to_string()
    }
}

/// The dictionaries shipped in the repository's `dictionaries/` directory,
/// embedded at compile time.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSource;

impl BundledSource {
    fn text(topic: Topic) -> &'static str {
        match topic {
            Topic::Medicine => include_str!("../../dictionaries/medicine.txt"),
            Topic::History => include_str!("../../dictionaries/history.txt"),
            Topic::Programming => include_str!("../../dictionaries/programming.txt"),
            Topic::Networks => include_str!("../../dictionaries/networks.txt"),
            Topic::Cryptography => include_str!("../../dictionaries/cryptography.txt"),
            Topic::Finance => include_str!("../../dictionaries/finance.txt"),
        }
    }
}

impl DictionarySource for BundledSource {
    fn read(&self, topic: Topic) -> Result<Option<String>> {
        Ok(Some(Self::text(topic).to_string()))
    }

    fn describe(&self) -> String {
        "bundled dictionaries".to_string()
    }
}
