// Colored terminal output for analysis results and dictionaries.
//
// main.rs delegates all display formatting here.

use std::path::Path;

use colored::Colorize;

use crate::topics::dictionary::{DictionaryOrigin, DictionaryStore};
use crate::topics::{AnalysisResult, Topic};

/// How many matched terms to list per topic in the summary.
const MAX_TERMS_SHOWN: usize = 8;

/// Display the headline result for one document plus its strongest evidence.
pub fn display_summary(path: &Path, result: &AnalysisResult) {
    let top = result.top_topic();

    println!(
        "\n{}",
        format!("=== {} ===", path.display()).bold()
    );
    println!(
        "  Topic:       {}",
        top.display_name().bright_green().bold()
    );
    println!("  Total words: {}", result.total_words());
    println!(
        "  Matches:     {} ({:.2}%)",
        result.score(top),
        result.percentage(top)
    );

    if result.score(top) == 0 {
        println!(
            "  {}",
            "No dictionary terms found; the topic above is only the default.".yellow()
        );
        return;
    }

    let mut terms: Vec<(&String, &u32)> = result.matches(top).iter().collect();
    terms.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    let shown: Vec<String> = terms
        .iter()
        .take(MAX_TERMS_SHOWN)
        .map(|(term, count)| format!("{} ({count})", super::truncate_chars(term, 40)))
        .collect();
    println!("  Evidence:    {}", shown.join(", ").dimmed());
}

/// Display per-topic scores as a horizontal bar chart, scaled so the highest
/// score fills `width` cells.
pub fn display_chart(result: &AnalysisResult, width: usize) {
    let max = result.scores().values().copied().max().unwrap_or(0);
    let top = result.top_topic();

    println!("\n  {}", "Scores by topic".bold());

    for topic in Topic::ALL {
        let score = result.score(topic);
        let filled = super::bar_cells(score, max, width);
        let bar = format!(
            "[{}{}]",
            "=".repeat(filled),
            " ".repeat(width.saturating_sub(filled))
        );

        let colored_bar = if topic == top && score > 0 {
            bar.bright_green()
        } else if score > 0 {
            bar.bright_yellow()
        } else {
            bar.dimmed()
        };

        println!(
            "  {:<18} {} {:>5} {:>7.2}%",
            topic.display_name(),
            colored_bar,
            score,
            result.percentage(topic)
        );
    }
}

/// Display where each topic's vocabulary came from and how big it is.
pub fn display_dictionaries(store: &DictionaryStore, source: &str) {
    println!("\n{}", format!("=== Dictionaries ({source}) ===").bold());
    println!(
        "  {:<14} {:<18} {:>6} {:>8}  Origin",
        "Id".dimmed(),
        "Topic".dimmed(),
        "Roots".dimmed(),
        "Phrases".dimmed(),
    );
    println!("  {}", "-".repeat(60).dimmed());

    for (topic, dictionary) in store.iter() {
        let origin = match dictionary.origin() {
            DictionaryOrigin::Resource => "resource".green(),
            DictionaryOrigin::Default => "built-in defaults".yellow(),
        };
        println!(
            "  {:<14} {:<18} {:>6} {:>8}  {}",
            topic.id(),
            topic.display_name(),
            dictionary.roots().len(),
            dictionary.phrases().len(),
            origin
        );
    }
}
