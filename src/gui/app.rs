//! Day Probability Main Application
//! Main window with control panel and result/chart viewer.

use crate::charts::{BarSeries, StaticChartRenderer};
use crate::config::Settings;
use crate::engine::ReachabilityTable;
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction, Status};
use crate::heading::pick_heading;
use crate::report::{Insights, Report};
use egui::{RichText, SidePanel, TopBottomPanel, Visuals};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

const CHART_IMAGE_SIZE: (u32, u32) = (920, 260);

/// Main application window.
pub struct DayProbabilityApp {
    table: Arc<ReachabilityTable>,
    settings: Settings,
    heading: String,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
}

impl DayProbabilityApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        table: Arc<ReachabilityTable>,
        settings: Settings,
        heading_seed: u64,
    ) -> Self {
        let insights = Insights::from_table(&table);
        let series = BarSeries::from_table(&table);

        let app = Self {
            heading: pick_heading(heading_seed),
            control_panel: ControlPanel::new(
                table.ceiling(),
                settings.default_selection,
                settings.dark_mode,
            ),
            chart_viewer: ChartViewer::new(series, &insights, settings.show_chart),
            table,
            settings,
        };
        app.apply_visuals(&cc.egui_ctx);
        app
    }

    fn apply_visuals(&self, ctx: &egui::Context) {
        if self.control_panel.dark_mode {
            ctx.set_visuals(Visuals::dark());
        } else {
            ctx.set_visuals(Visuals::light());
        }
    }

    fn handle_check_probability(&mut self) {
        match self.table.query(self.control_panel.selection) {
            Ok(answer) => {
                self.control_panel.set_status(Status::Info(format!(
                    "Checked number {}",
                    answer.target
                )));
                self.chart_viewer.set_answer(answer);
            }
            Err(e) => {
                warn!(error = %e, "invalid selection");
                self.control_panel.set_status(Status::Error(e.to_string()));
            }
        }
    }

    /// Handle CSV export - ask for a destination and write the full report
    fn handle_export_csv(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV files", &["csv"])
            .add_filter("All files", &["*"])
            .set_title("Save probabilities to CSV")
            .set_file_name(&self.settings.export_file_name)
            .save_file()
        else {
            return; // User cancelled
        };

        let report = Report::from_table(&self.table);
        match report.export(&path) {
            Ok(()) => self.export_succeeded("CSV exported to", path),
            Err(e) => self
                .control_panel
                .set_status(Status::Error(format!("Failed to save CSV: {}", e))),
        }
    }

    /// Handle chart export - render the bar chart to a PNG
    fn handle_export_chart(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG image", &["png"])
            .set_title("Save chart as PNG")
            .set_file_name("day_probabilities.png")
            .save_file()
        else {
            return;
        };

        let highlight = self.chart_viewer.answer().map(|a| a.target);
        match StaticChartRenderer::render_png(
            self.chart_viewer.series(),
            highlight,
            &path,
            CHART_IMAGE_SIZE,
        ) {
            Ok(()) => self.export_succeeded("Chart saved to", path),
            Err(e) => {
                warn!(error = %e, "chart export failed");
                self.control_panel
                    .set_status(Status::Error(format!("Failed to save chart: {}", e)));
            }
        }
    }

    fn export_succeeded(&mut self, what: &str, path: PathBuf) {
        self.control_panel
            .set_status(Status::Success(format!("{}: {}", what, path.display())));
        self.control_panel.last_export = Some(path);
    }

    fn handle_open_last_export(&mut self) {
        let Some(path) = self.control_panel.last_export.clone() else {
            return;
        };
        if let Err(e) = open::that(&path) {
            warn!(path = %path.display(), error = %e, "failed to open export");
            self.control_panel.set_status(Status::Error(format!(
                "Could not open {}: {}",
                path.display(),
                e
            )));
        }
    }
}

impl eframe::App for DayProbabilityApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        TopBottomPanel::top("heading").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.label(RichText::new(&self.heading).size(22.0).strong());
            ui.label(format!(
                "Select a number (1–{}) to see its probability based on days 1–{}.",
                self.table.ceiling(),
                self.table.source_count()
            ));
            ui.add_space(6.0);
        });

        SidePanel::left("control_panel")
            .min_width(260.0)
            .max_width(300.0)
            .show(ctx, |ui| {
                let action = self.control_panel.show(ui);

                match action {
                    ControlPanelAction::CheckProbability => self.handle_check_probability(),
                    ControlPanelAction::ExportCsv => self.handle_export_csv(),
                    ControlPanelAction::ExportChart => self.handle_export_chart(),
                    ControlPanelAction::OpenLastExport => self.handle_open_last_export(),
                    ControlPanelAction::ToggleDarkMode => {
                        info!(dark_mode = self.control_panel.dark_mode, "theme changed");
                        self.apply_visuals(ctx);
                    }
                    ControlPanelAction::None => {}
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}
