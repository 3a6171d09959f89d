// PNG bar chart of per-topic scores, one bar per topic in declaration order.

use std::path::Path;

use anyhow::{Context, Result};
use plotters::prelude::*;
use tracing::info;

use super::ensure_parent_dir;
use crate::topics::{AnalysisResult, Topic};

/// Image size in pixels.
pub const CHART_SIZE: (u32, u32) = (800, 600);

/// Default chart destination when neither a flag nor TOPICAL_CHART_PATH is set.
pub const DEFAULT_CHART_PATH: &str = "statistics.png";

/// Draw the score chart for `result` and save it as a PNG at `path`.
pub fn write_chart(result: &AnalysisResult, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    draw(result, path).with_context(|| format!("Failed to draw chart {}", path.display()))?;
    info!(path = %path.display(), "Chart saved");
    Ok(())
}

fn draw(result: &AnalysisResult, path: &Path) -> Result<()> {
    let topics = Topic::ALL;
    let max = topics.iter().map(|t| result.score(*t)).max().unwrap_or(0);
    // Headroom above the tallest bar; an all-zero result still gets an axis.
    let y_top = max + max / 10 + 1;

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Статистика по тематикам", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d((0u32..topics.len() as u32).into_segmented(), 0u32..y_top)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(topics.len())
        .x_label_formatter(&|value: &SegmentValue<u32>| match value {
            SegmentValue::CenterOf(i) => topics
                .get(*i as usize)
                .map(|t| t.display_name().to_string())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .x_desc("Тематика")
        .y_desc("Количество совпадений")
        .axis_desc_style(("sans-serif", 16))
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(BLUE.mix(0.7).filled())
            .margin(20)
            .data(
                topics
                    .iter()
                    .enumerate()
                    .map(|(i, t)| (i as u32, result.score(*t))),
            ),
    )?;

    root.present()?;
    Ok(())
}
