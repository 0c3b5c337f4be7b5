//! Filter Panel Widget
//! Left side panel with the type selector, export and status.

use crate::data::TitleKind;
use egui::{Color32, ComboBox, RichText};

/// Left side panel with the content filter.
pub struct FilterPanel {
    pub kinds: Vec<TitleKind>,
    pub selected: Option<TitleKind>,
    pub status: String,
}

impl Default for FilterPanel {
    fn default() -> Self {
        Self {
            kinds: Vec::new(),
            selected: None,
            status: "Ready".to_string(),
        }
    }
}

impl FilterPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update available types after the dataset is loaded; selects the first.
    pub fn update_kinds(&mut self, kinds: Vec<TitleKind>) {
        self.selected = kinds.first().copied();
        self.kinds = kinds;
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    /// Draw the filter panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> FilterPanelAction {
        let mut action = FilterPanelAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🎬 Netflix Insights")
                    .size(22.0)
                    .color(crate::charts::ACCENT_COLOR),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Filter Section =====
        ui.label(RichText::new("🔎 Filter Content").size(14.0).strong());
        ui.add_space(5.0);

        let selected_text = self
            .selected
            .map(|k| k.to_string())
            .unwrap_or_else(|| "-".to_string());

        ui.horizontal(|ui| {
            ui.label("Select Type:");
            ComboBox::from_id_salt("title_kind")
                .width(120.0)
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    for kind in &self.kinds {
                        if ui
                            .selectable_label(self.selected == Some(*kind), kind.as_str())
                            .clicked()
                            && self.selected != Some(*kind)
                        {
                            self.selected = Some(*kind);
                            action = FilterPanelAction::KindChanged;
                        }
                    }
                });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Export =====
        ui.vertical_centered(|ui| {
            ui.add_enabled_ui(self.selected.is_some(), |ui| {
                let button =
                    egui::Button::new(RichText::new("⬇ Download Filtered Dataset").size(14.0))
                        .min_size(egui::vec2(200.0, 30.0));
                if ui.add(button).clicked() {
                    action = FilterPanelAction::Export;
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(5.0);

        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }
}

/// Actions triggered by the filter panel
#[derive(Debug, Clone, PartialEq)]
pub enum FilterPanelAction {
    None,
    KindChanged,
    Export,
}
