//! Static Chart Renderer
//! Writes the probability distribution bar chart to a PNG file with plotters.
//!
//! Layout:
//! 1. Caption: "Probability Distribution (1–{ceiling})"
//! 2. Bars per number, the highlighted number drawn in red
//! 3. Axis descriptions "Number" / "Probability"

use super::BarSeries;
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;
use tracing::info;

const BAR: RGBColor = RGBColor(52, 152, 219);
const HIGHLIGHT: RGBColor = RGBColor(231, 76, 60);

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Nothing to draw: the table has no numbers")]
    Empty,
    #[error("Failed to render chart: {0}")]
    Render(String),
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render `series` to a PNG at `path`.
    pub fn render_png(
        series: &BarSeries,
        highlight: Option<u32>,
        path: &Path,
        size: (u32, u32),
    ) -> Result<(), ChartError> {
        if series.is_empty() {
            return Err(ChartError::Empty);
        }

        let root = BitMapBackend::new(path, size).into_drawing_area();
        root.fill(&WHITE).map_err(Self::render_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!("Probability Distribution (1–{})", series.ceiling),
                ("sans-serif", 20),
            )
            .margin(10)
            .x_label_area_size(35)
            .y_label_area_size(55)
            .build_cartesian_2d(0.5f64..(series.ceiling as f64 + 0.5), 0f64..series.y_max)
            .map_err(Self::render_err)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc("Number")
            .y_desc("Probability")
            .y_label_formatter(&|y| format!("{:.2}", y))
            .draw()
            .map_err(Self::render_err)?;

        chart
            .draw_series(series.bars.iter().map(|&(number, probability)| {
                let x = number as f64;
                let color = if highlight == Some(number) { HIGHLIGHT } else { BAR };
                Rectangle::new([(x - 0.4, 0.0), (x + 0.4, probability)], color.filled())
            }))
            .map_err(Self::render_err)?;

        root.present().map_err(Self::render_err)?;

        info!(path = %path.display(), "chart image written");
        Ok(())
    }

    fn render_err<E: std::fmt::Display>(err: E) -> ChartError {
        ChartError::Render(err.to_string())
    }
}
