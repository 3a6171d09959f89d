use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use topical::config::Config;
use topical::ingest::{self, IngestError, SUPPORTED_EXTENSIONS};
use topical::output::{chart, report, terminal};
use topical::topics::stemmer::stem;
use topical::topics::{DictionaryStore, TopicAnalyzer};

/// Topical: find out what a document is about.
///
/// Counts stemmed words and key phrases from per-topic dictionaries and
/// reports the topic with the most evidence.
#[derive(Parser)]
#[command(name = "topical", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one or more documents and write a report for each
    Analyze {
        /// Documents to analyze (.txt)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Where to write the text report (default: TOPICAL_REPORT_PATH or report.txt)
        #[arg(long)]
        report: Option<PathBuf>,

        /// Also export the result as JSON to this path
        #[arg(long)]
        json: Option<PathBuf>,

        /// Where to save the PNG chart (default: TOPICAL_CHART_PATH or statistics.png)
        #[arg(long = "chart", value_name = "PATH")]
        png: Option<PathBuf>,

        /// Skip the terminal bar chart
        #[arg(long)]
        no_chart: bool,
    },

    /// Show how words are stemmed
    Stem {
        /// Words to stem
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Show where each topic's dictionary was loaded from
    Dictionaries,

    /// Read text from stdin and print the top topic id
    Classify,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("topical=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            files,
            report,
            json,
            png,
            no_chart,
        } => {
            let config = Config::load()?;
            config.require_dictionary_dir()?;
            let analyzer = build_analyzer(&config);

            let report_base = report.unwrap_or_else(|| config.report_path.clone());
            let json_base = json.or_else(|| config.json_path.clone());
            let chart_base = png.unwrap_or_else(|| config.chart_path.clone());
            let multiple = files.len() > 1;

            let pb = if multiple {
                let pb = ProgressBar::new(files.len() as u64);
                pb.set_style(
                    ProgressStyle::default_bar()
                        .template("  [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                        .expect("valid template")
                        .progress_chars("=> "),
                );
                Some(pb)
            } else {
                None
            };

            let mut failed = 0usize;
            for (i, path) in files.iter().enumerate() {
                if let Some(pb) = &pb {
                    pb.set_message(path.display().to_string());
                }

                let text = match ingest::read_document(path) {
                    Ok(text) => text,
                    Err(e) => {
                        failed += 1;
                        warn!(path = %path.display(), error = %e, "Skipping document");
                        let print = || print_ingest_error(&e);
                        match &pb {
                            Some(pb) => pb.suspend(print),
                            None => print(),
                        }
                        if let Some(pb) = &pb {
                            pb.inc(1);
                        }
                        continue;
                    }
                };

                let result = analyzer.analyze(&text);

                let (report_path, json_path, chart_path) = if multiple {
                    (
                        report::numbered_path(&report_base, i + 1),
                        json_base.as_deref().map(|p| report::numbered_path(p, i + 1)),
                        report::numbered_path(&chart_base, i + 1),
                    )
                } else {
                    (report_base.clone(), json_base.clone(), chart_base.clone())
                };

                report::write_report(&result, path, &report_path)?;
                if let Some(json_path) = &json_path {
                    report::write_json(&result, path, json_path)?;
                }
                chart::write_chart(&result, &chart_path)?;

                let print = || {
                    terminal::display_summary(path, &result);
                    if !no_chart {
                        terminal::display_chart(&result, config.chart_width);
                    }
                    println!("\n  Report saved: {}", report_path.display());
                    println!("  Chart saved:  {}", chart_path.display());
                    if let Some(json_path) = &json_path {
                        println!("  JSON saved:   {}", json_path.display());
                    }
                };
                match &pb {
                    Some(pb) => pb.suspend(print),
                    None => print(),
                }

                if let Some(pb) = &pb {
                    pb.inc(1);
                }
            }

            if let Some(pb) = pb {
                pb.finish_and_clear();
            }

            if failed > 0 {
                anyhow::bail!(
                    "{failed} of {} documents could not be analyzed",
                    files.len()
                );
            }
            info!(documents = files.len(), "Analysis finished");
        }

        Commands::Stem { words } => {
            for word in &words {
                println!("  {:<24} -> {}", word, stem(word).bold());
            }
        }

        Commands::Dictionaries => {
            let config = Config::load()?;
            config.require_dictionary_dir()?;
            let source = config.dictionary_source();
            let store = DictionaryStore::load(source.as_ref());
            terminal::display_dictionaries(&store, &source.describe());
        }

        Commands::Classify => {
            let config = Config::load()?;
            config.require_dictionary_dir()?;
            let analyzer = build_analyzer(&config);

            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read text from stdin")?;

            let result = analyzer.analyze(&text);
            println!("{}", result.top_topic().id());
        }
    }

    Ok(())
}

/// Load dictionaries from the configured source and wrap them in an analyzer.
fn build_analyzer(config: &Config) -> TopicAnalyzer {
    let source = config.dictionary_source();
    info!(source = %source.describe(), "Loading dictionaries");
    let store = DictionaryStore::load(source.as_ref());
    TopicAnalyzer::new(Arc::new(store))
}

/// Print a user-facing explanation for a document that couldn't be read.
fn print_ingest_error(error: &IngestError) {
    eprintln!("{} {}", "Error:".red().bold(), error);
    match error {
        IngestError::NotFound(_) => {
            eprintln!("  Check that the path is spelled correctly.");
        }
        IngestError::NotAFile(path) => {
            eprintln!("  {} is a directory or special file.", display_name(path));
        }
        IngestError::UnsupportedFormat { .. } => {
            let formats: Vec<String> = SUPPORTED_EXTENSIONS
                .iter()
                .map(|e| format!(".{e}"))
                .collect();
            eprintln!("  Supported formats: {}", formats.join(", "));
            eprintln!("  Save legacy .doc files as .docx or plain text first.");
        }
        IngestError::Docx { .. } => {
            eprintln!("  The .docx archive is damaged or has no document body.");
        }
        IngestError::Io { .. } => {
            eprintln!("  The file may be damaged, unreadable, or not UTF-8 text.");
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
