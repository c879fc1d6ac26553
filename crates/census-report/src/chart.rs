//! Bar and pie chart rendering with the `plotters` bitmap backend.

use std::path::Path;

use anyhow::{Context, Result, bail};
use plotters::prelude::{
    BLACK, BitMapBackend, ChartBuilder, Color, IntoDrawingArea, IntoFont, Pie, RGBColor,
    Rectangle, WHITE,
};

use crate::counts::LabelledCounts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Pie,
}

const SERIES_COLORS: [RGBColor; 8] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
];

fn series_color(index: usize) -> RGBColor {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

/// Render a label/count distribution as a PNG chart.
pub fn render_chart(
    counts: &LabelledCounts,
    kind: ChartKind,
    title: &str,
    path: &Path,
) -> Result<()> {
    if counts.is_empty() {
        bail!("no data to chart for column {}", counts.column);
    }
    match kind {
        ChartKind::Bar => render_bar_chart(counts, title, path),
        ChartKind::Pie => render_pie_chart(counts, title, path),
    }
    .with_context(|| format!("render chart: {}", path.display()))
}

fn render_bar_chart(counts: &LabelledCounts, title: &str, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let y_max = counts.counts.iter().copied().max().unwrap_or(0).max(1);
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 32))
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(56)
        .build_cartesian_2d(0usize..counts.labels.len(), 0u64..y_max + y_max / 10 + 1)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(counts.labels.len() + 1)
        .x_label_formatter(&|idx| counts.labels.get(*idx).cloned().unwrap_or_default())
        .y_desc("Records")
        .draw()?;
    chart.draw_series(counts.counts.iter().enumerate().map(|(idx, &count)| {
        Rectangle::new(
            [(idx, 0u64), (idx + 1, count)],
            series_color(idx).mix(0.7).filled(),
        )
    }))?;
    root.present()?;
    Ok(())
}

fn render_pie_chart(counts: &LabelledCounts, title: &str, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, (800, 640)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(title, ("sans-serif", 32))?;
    let sizes: Vec<f64> = counts.counts.iter().map(|&count| count as f64).collect();
    let colors: Vec<RGBColor> = (0..sizes.len()).map(series_color).collect();
    let mut pie = Pie::new(&(400, 300), &220.0, &sizes, &colors, &counts.labels);
    pie.label_style(("sans-serif", 18).into_font().color(&BLACK));
    root.draw(&pie)?;
    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_counts_cannot_be_charted() {
        let counts = LabelledCounts {
            column: "SEX".to_string(),
            labels: Vec::new(),
            counts: Vec::new(),
        };
        let dir = tempfile::tempdir().unwrap();

        let result = render_chart(&counts, ChartKind::Bar, "Sex", &dir.path().join("sex.png"));

        assert!(result.is_err());
    }
}
