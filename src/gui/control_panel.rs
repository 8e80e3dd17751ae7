//! Control Panel Widget
//! Left side panel with the number dropdown, actions and status line.

use egui::{Color32, ComboBox, RichText};
use std::path::PathBuf;

/// Outcome shown in the status line.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Ready,
    Info(String),
    Success(String),
    Error(String),
}

impl Status {
    fn color(&self) -> Color32 {
        match self {
            Status::Ready | Status::Info(_) => Color32::GRAY,
            Status::Success(_) => Color32::from_rgb(40, 167, 69),
            Status::Error(_) => Color32::from_rgb(220, 53, 69),
        }
    }

    fn text(&self) -> &str {
        match self {
            Status::Ready => "Ready",
            Status::Info(msg) | Status::Success(msg) | Status::Error(msg) => msg,
        }
    }
}

/// Left side control panel.
pub struct ControlPanel {
    ceiling: u32,
    pub selection: u32,
    pub dark_mode: bool,
    pub status: Status,
    /// Most recent successful export, offered for opening.
    pub last_export: Option<PathBuf>,
}

impl ControlPanel {
    pub fn new(ceiling: u32, selection: u32, dark_mode: bool) -> Self {
        Self {
            ceiling,
            selection: selection.clamp(1, ceiling.max(1)),
            dark_mode,
            status: Status::Ready,
            last_export: None,
        }
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.label(RichText::new("🔢 Choose number").size(14.0).strong());
        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ComboBox::from_id_salt("number_select")
                .selected_text(self.selection.to_string())
                .width(80.0)
                .show_ui(ui, |ui| {
                    for n in 1..=self.ceiling {
                        ui.selectable_value(&mut self.selection, n, n.to_string());
                    }
                });

            ui.add_space(10.0);
            if ui.checkbox(&mut self.dark_mode, "Dark mode").changed() {
                action = ControlPanelAction::ToggleDarkMode;
            }
        });

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Action Buttons =====
        ui.vertical_centered(|ui| {
            let check = egui::Button::new(RichText::new("▶ Check Probability").size(16.0))
                .min_size(egui::vec2(200.0, 35.0));
            if ui.add(check).clicked() {
                action = ControlPanelAction::CheckProbability;
            }

            ui.add_space(8.0);

            let export = egui::Button::new(RichText::new("📄 Export All to CSV").size(14.0))
                .min_size(egui::vec2(200.0, 30.0));
            if ui.add(export).clicked() {
                action = ControlPanelAction::ExportCsv;
            }

            ui.add_space(8.0);

            let chart = egui::Button::new(RichText::new("🖼 Export Chart PNG").size(14.0))
                .min_size(egui::vec2(200.0, 30.0));
            if ui.add(chart).clicked() {
                action = ControlPanelAction::ExportChart;
            }

            ui.add_space(8.0);

            ui.add_enabled_ui(self.last_export.is_some(), |ui| {
                if ui.button("Open last export").clicked() {
                    action = ControlPanelAction::OpenLastExport;
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(5.0);

        ui.label(
            RichText::new(self.status.text())
                .size(11.0)
                .color(self.status.color()),
        );

        action
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    CheckProbability,
    ExportCsv,
    ExportChart,
    OpenLastExport,
    ToggleDarkMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_selection_is_clamped_into_range() {
        assert_eq!(ControlPanel::new(65, 60, false).selection, 60);
        assert_eq!(ControlPanel::new(65, 0, false).selection, 1);
        assert_eq!(ControlPanel::new(10, 60, false).selection, 10);
    }

    #[test]
    fn status_text_and_colors() {
        assert_eq!(Status::Ready.text(), "Ready");
        assert_eq!(Status::Error("boom".into()).text(), "boom");
        assert_ne!(
            Status::Error(String::new()).color(),
            Status::Success(String::new()).color()
        );
    }
}
