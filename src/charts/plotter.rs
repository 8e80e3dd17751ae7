//! Chart Plotter Module
//! Interactive probability bar chart using egui_plot.

use super::BarSeries;
use egui::Color32;
use egui_plot::{Bar, BarChart, Plot};

pub const BAR_COLOR: Color32 = Color32::from_rgb(52, 152, 219); // Blue
pub const HIGHLIGHT_COLOR: Color32 = Color32::from_rgb(231, 76, 60); // Red

/// Draws the probability distribution with egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Color for the bar of `number`; the selected number stands out.
    pub fn bar_color(number: u32, highlight: Option<u32>) -> Color32 {
        if highlight == Some(number) {
            HIGHLIGHT_COLOR
        } else {
            BAR_COLOR
        }
    }

    /// Draw the bar chart. X-axis: number, Y-axis: probability.
    pub fn draw_bar_chart(
        ui: &mut egui::Ui,
        series: &BarSeries,
        highlight: Option<u32>,
        height: f32,
    ) {
        let bars: Vec<Bar> = series
            .bars
            .iter()
            .map(|&(number, probability)| {
                Bar::new(number as f64, probability)
                    .width(0.8)
                    .name(format!("Number {}", number))
                    .fill(Self::bar_color(number, highlight))
            })
            .collect();

        Plot::new("probability_distribution")
            .height(height)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .x_axis_label("Number")
            .y_axis_label("Probability")
            .include_x(0.5)
            .include_x(series.ceiling as f64 + 0.5)
            .include_y(0.0)
            .include_y(series.y_max)
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).color(BAR_COLOR).name("Probability"));
            });
    }
}
