// Report files: a human-readable text report and a JSON export.
//
// Both read the AnalysisResult through its accessors only.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use super::ensure_parent_dir;
use crate::topics::{AnalysisResult, Topic};

/// Render the text report for `result`.
pub fn render_report(
    result: &AnalysisResult,
    source: &Path,
    generated_at: DateTime<Utc>,
) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "=== ОТЧЕТ АНАЛИЗА ТЕКСТА ===");
    let _ = writeln!(out);
    let _ = writeln!(out, "Источник: {}", source.display());
    let _ = writeln!(
        out,
        "Дата: {}",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    let _ = writeln!(out, "Всего слов в тексте: {}", result.total_words());
    let _ = writeln!(out);

    let _ = writeln!(out, "--- Статистика по тематикам ---");
    for topic in Topic::ALL {
        let _ = writeln!(
            out,
            "{}: {} совпадений ({:.2}%)",
            topic.display_name(),
            result.score(topic),
            result.percentage(topic)
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "--- Детализация совпадений ---");
    for topic in Topic::ALL {
        let matches = result.matches(topic);
        if matches.is_empty() {
            continue;
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{}:", topic.display_name());
        for (term, count) in matches {
            let _ = writeln!(out, "  {term}: {count}");
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "=== РЕЗУЛЬТАТ: {} ===",
        result.top_topic().display_name()
    );
    out
}

/// Write the text report to `path`, creating parent directories as needed.
pub fn write_report(result: &AnalysisResult, source: &Path, path: &Path) -> Result<()> {
    let report = render_report(result, source, Utc::now());
    write_file(path, &report)?;
    info!(path = %path.display(), "Report saved");
    Ok(())
}

/// JSON shape of an exported result.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub source: String,
    pub generated_at: DateTime<Utc>,
    pub total_words: usize,
    pub top_topic: Topic,
    pub topics: Vec<JsonTopic<'a>>,
}

#[derive(Debug, Serialize)]
pub struct JsonTopic<'a> {
    pub topic: Topic,
    pub display_name: &'static str,
    pub score: u32,
    pub percentage: f64,
    pub matches: &'a BTreeMap<String, u32>,
}

impl<'a> JsonReport<'a> {
    pub fn new(result: &'a AnalysisResult, source: &Path, generated_at: DateTime<Utc>) -> Self {
        Self {
            source: source.display().to_string(),
            generated_at,
            total_words: result.total_words(),
            top_topic: result.top_topic(),
            topics: Topic::ALL
                .into_iter()
                .map(|topic| JsonTopic {
                    topic,
                    display_name: topic.display_name(),
                    score: result.score(topic),
                    percentage: result.percentage(topic),
                    matches: result.matches(topic),
                })
                .collect(),
        }
    }
}

/// Write the JSON export to `path`, creating parent directories as needed.
pub fn write_json(result: &AnalysisResult, source: &Path, path: &Path) -> Result<()> {
    let report = JsonReport::new(result, source, Utc::now());
    let json = serde_json::to_string_pretty(&report)?;
    write_file(path, &json)?;
    info!(path = %path.display(), "JSON export saved");
    Ok(())
}

/// Path for the `index`-th (1-based) of several output files sharing one
/// configured destination: `report.txt` becomes `report-2.txt`.
pub fn numbered_path(base: &Path, index: usize) -> PathBuf {
    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report".to_string());
    let name = match base.extension() {
        Some(ext) => format!("{stem}-{index}.{}", ext.to_string_lossy()),
        None => format!("{stem}-{index}"),
    };
    base.with_file_name(name)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}
