// Dictionary source trait: where a topic's dictionary text comes from.
//
// The store doesn't care whether dictionaries live in a directory, inside the
// binary, or in a test fixture. Anything that can hand back the raw text of
// `<id>.txt` for a topic plugs in here.

use anyhow::Result;

use super::topic::Topic;

/// Supplies the raw text of per-topic dictionary resources.
pub trait DictionarySource {
    /// Read the dictionary resource for `topic`.
    ///
    /// `Ok(None)` means the resource does not exist. `Err` means it exists
    /// but could not be read (I/O failure, invalid UTF-8).
    fn read(&self, topic: Topic) -> Result<Option<String>>;

    /// Short description for log lines, e.g. the directory path.
    fn describe(&self) -> String;
}
