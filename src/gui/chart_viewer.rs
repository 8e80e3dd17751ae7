//! Chart Viewer Widget
//! Central panel: query result, insights and the probability bar chart.

use crate::charts::{BarSeries, ChartPlotter};
use crate::engine::ProbabilityAnswer;
use crate::report::Insights;
use egui::{RichText, ScrollArea};

const CHART_HEIGHT: f32 = 240.0;
const PLACEHOLDER: &str = "Choose a number then click \"Check Probability\"";

/// Result, insight and chart display.
pub struct ChartViewer {
    series: BarSeries,
    insight_lines: Vec<String>,
    /// Chart capability; when off a note replaces the plot.
    show_chart: bool,
    answer: Option<ProbabilityAnswer>,
}

impl ChartViewer {
    pub fn new(series: BarSeries, insights: &Insights, show_chart: bool) -> Self {
        Self {
            series,
            insight_lines: insights.lines(),
            show_chart,
            answer: None,
        }
    }

    pub fn set_answer(&mut self, answer: ProbabilityAnswer) {
        self.answer = Some(answer);
    }

    pub fn answer(&self) -> Option<&ProbabilityAnswer> {
        self.answer.as_ref()
    }

    pub fn series(&self) -> &BarSeries {
        &self.series
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.label(RichText::new("Result:").size(16.0).strong());
                ui.add_space(5.0);
                match &self.answer {
                    Some(answer) => ui.label(RichText::new(answer.to_string()).size(13.0)),
                    None => ui.label(RichText::new(PLACEHOLDER).size(13.0)),
                };

                ui.add_space(12.0);
                ui.separator();

                ui.label(RichText::new("Insights:").size(16.0).strong());
                ui.add_space(5.0);
                for line in &self.insight_lines {
                    ui.label(line);
                }

                ui.add_space(12.0);
                ui.separator();

                ui.label(
                    RichText::new(format!(
                        "Probability Distribution (1–{}):",
                        self.series.ceiling
                    ))
                    .size(15.0)
                    .strong(),
                );
                ui.add_space(5.0);

                if self.show_chart {
                    let highlight = self.answer.as_ref().map(|a| a.target);
                    ChartPlotter::draw_bar_chart(ui, &self.series, highlight, CHART_HEIGHT);
                } else {
                    ui.label(
                        RichText::new("Bar chart disabled. Set show_chart = true to enable it.")
                            .italics(),
                    );
                }
            });
    }
}
