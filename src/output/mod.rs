// Output formatting: terminal display, report files and the PNG chart.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

pub mod chart;
pub mod report;
pub mod terminal;

/// Create the parent directory of `path` if it has one and it is missing.
pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }
    Ok(())
}

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Unlike byte slicing (`&text[..120]`), this respects UTF-8 character boundaries
/// and will never panic on Cyrillic or other multi-byte text.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

/// Number of filled bar cells for `value` on a scale where `max` fills
/// `width` cells. Non-zero values always get at least one cell.
pub fn bar_cells(value: u32, max: u32, width: usize) -> usize {
    if max == 0 || value == 0 {
        return 0;
    }
    let filled = (f64::from(value) / f64::from(max) * width as f64).round() as usize;
    filled.clamp(1, width)
}
