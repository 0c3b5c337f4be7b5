//! Netflix Insights Dashboard
//! Main window with the filter panel and the insights page.

use crate::charts::{TrendPlotter, ACCENT_COLOR};
use crate::config::ViewerConfig;
use crate::gui::{FilterPanel, FilterPanelAction, PosterGrid};
use crate::viewer::{Catalog, RankKey, Subset};
use egui::{ComboBox, RichText, ScrollArea, SidePanel};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;

/// Dataset loading result from background thread
enum LoadResult {
    Complete(Catalog),
    Error(String),
}

/// Main application window.
pub struct DashboardApp {
    config: ViewerConfig,
    filter_panel: FilterPanel,

    /// Session snapshot, loaded once
    catalog: Option<Catalog>,
    subset: Option<Subset>,
    selected_title: String,

    // Async loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: ViewerConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let mut app = Self {
            config,
            filter_panel: FilterPanel::new(),
            catalog: None,
            subset: None,
            selected_title: String::new(),
            load_rx: None,
            is_loading: false,
        };
        app.start_loading();
        app
    }

    /// Load the cleaned dataset in a background thread
    fn start_loading(&mut self) {
        let path = self.config.data.clone();
        self.filter_panel
            .set_status(&format!("Loading {}...", path.display()));
        self.is_loading = true;

        let (tx, rx) = channel();
        self.load_rx = Some(rx);

        thread::spawn(move || {
            let result = match Catalog::load(&path) {
                Ok(catalog) => LoadResult::Complete(catalog),
                Err(e) => LoadResult::Error(e.to_string()),
            };
            let _ = tx.send(result);
        });
    }

    /// Check for loading results
    fn check_load_results(&mut self) {
        let Some(rx) = self.load_rx.take() else {
            return;
        };

        match rx.try_recv() {
            Ok(LoadResult::Complete(catalog)) => {
                self.filter_panel.update_kinds(catalog.kinds());
                self.filter_panel
                    .set_status(&format!("Loaded {} titles", catalog.len()));
                self.catalog = Some(catalog);
                self.is_loading = false;
                self.apply_filter();
            }
            Ok(LoadResult::Error(error)) => {
                tracing::error!(%error, "failed to load dataset");
                self.filter_panel.set_status(&format!("Error: {}", error));
                self.is_loading = false;
            }
            Err(TryRecvError::Empty) => {
                self.load_rx = Some(rx);
            }
            Err(TryRecvError::Disconnected) => {
                self.filter_panel.set_status("Error: loader stopped unexpectedly");
                self.is_loading = false;
            }
        }
    }

    /// Rebuild the subset for the selected type
    fn apply_filter(&mut self) {
        let (Some(catalog), Some(kind)) = (&self.catalog, self.filter_panel.selected) else {
            return;
        };

        match catalog.filter(kind) {
            Ok(subset) => {
                self.selected_title = subset
                    .titles()
                    .first()
                    .map(|t| t.to_string())
                    .unwrap_or_default();
                self.filter_panel
                    .set_status(&format!("{} {} titles", subset.records().len(), kind));
                self.subset = Some(subset);
            }
            Err(e) => {
                self.subset = None;
                self.filter_panel.set_status(&format!("Error: {}", e));
            }
        }
    }

    /// Save the current subset as CSV
    fn handle_export(&mut self) {
        let Some(subset) = &self.subset else {
            self.filter_panel.set_status("No data to export");
            return;
        };

        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .set_file_name(&self.config.export_name)
            .save_file()
        else {
            return; // User cancelled
        };

        match subset.export_csv(&path) {
            Ok(()) => self
                .filter_panel
                .set_status(&format!("Exported to {}", path.display())),
            Err(e) => self.filter_panel.set_status(&format!("Error: {}", e)),
        }
    }

    fn section_header(ui: &mut egui::Ui, text: &str) {
        ui.add_space(16.0);
        ui.label(RichText::new(text).size(20.0).strong().color(ACCENT_COLOR));
        ui.add_space(8.0);
    }

    fn metric(ui: &mut egui::Ui, label: &str, value: String) {
        ui.vertical(|ui| {
            ui.label(RichText::new(label).size(12.0).color(egui::Color32::GRAY));
            ui.label(RichText::new(value).size(26.0).strong());
        });
    }

    /// Draw the page for one subset; returns a clicked poster URL
    fn show_insights(
        ui: &mut egui::Ui,
        subset: &Subset,
        config: &ViewerConfig,
        selected_title: &mut String,
    ) -> Option<String> {
        let mut clicked = None;

        // ===== Platform Overview =====
        Self::section_header(ui, "📊 Platform Overview");
        let summary = subset.summary();
        let no_data = || "No data".to_string();
        ui.columns(3, |cols| {
            Self::metric(&mut cols[0], "Total Titles", summary.count.to_string());
            Self::metric(
                &mut cols[1],
                "Avg IMDb",
                summary.mean_imdb.map(|v| format!("{:.2}", v)).unwrap_or_else(no_data),
            );
            Self::metric(
                &mut cols[2],
                "Top IMDb",
                summary.max_imdb.map(|v| format!("{:.1}", v)).unwrap_or_else(no_data),
            );
        });

        // ===== Top Rated =====
        Self::section_header(ui, &format!("🔥 Top {} Highest Rated", config.top_n));
        let top = subset.top_n(config.top_n, RankKey::ImdbScore, true);
        if top.is_empty() {
            ui.label("No data");
        } else if let Some(url) = PosterGrid::show(ui, &top, &config.poster_base) {
            clicked = Some(url);
        }

        // ===== Recommendations =====
        Self::section_header(ui, "🤖 Smart Recommendation Engine");
        let titles = subset.titles();
        ui.horizontal(|ui| {
            ui.label("Choose a title:");
            ComboBox::from_id_salt("selected_title")
                .width(320.0)
                .selected_text(selected_title.as_str())
                .show_ui(ui, |ui| {
                    for title in &titles {
                        ui.selectable_value(selected_title, title.to_string(), *title);
                    }
                });
        });

        if !selected_title.is_empty() {
            ui.add_space(8.0);
            ui.label(RichText::new("🎯 Recommended For You").size(16.0).strong());
            match subset.recommend(selected_title.as_str(), config.tolerance, config.recommend_limit) {
                Ok(recs) if recs.is_empty() => {
                    ui.colored_label(
                        egui::Color32::from_rgb(243, 156, 18),
                        "No close matches found. Try another title.",
                    );
                }
                Ok(recs) => {
                    if let Some(url) = PosterGrid::show(ui, &recs, &config.poster_base) {
                        clicked = Some(url);
                    }
                }
                Err(e) => {
                    ui.colored_label(egui::Color32::from_rgb(220, 53, 69), e.to_string());
                }
            }
        }

        // ===== Trend =====
        Self::section_header(ui, "📅 Content Growth Over Time");
        TrendPlotter::draw_year_trend(ui, subset.kind().as_str(), &subset.year_histogram());

        clicked
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load_results();

        // Request repaint while loading
        if self.is_loading {
            ctx.request_repaint();
        }

        // Left panel - Filter Panel
        SidePanel::left("filter_panel")
            .min_width(240.0)
            .max_width(300.0)
            .show(ctx, |ui| match self.filter_panel.show(ui) {
                FilterPanelAction::KindChanged => self.apply_filter(),
                FilterPanelAction::Export => self.handle_export(),
                FilterPanelAction::None => {}
            });

        // Central panel - Insights
        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(subset) = &self.subset else {
                let text = if self.is_loading { "Loading..." } else { "No Data" };
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new(text).size(20.0));
                });
                return;
            };

            ui.label(
                RichText::new("🎬 Netflix Premium Intelligence Dashboard")
                    .size(26.0)
                    .strong()
                    .color(ACCENT_COLOR),
            );
            ui.label("Content insights & recommendation engine");

            let clicked = ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    Self::show_insights(ui, subset, &self.config, &mut self.selected_title)
                })
                .inner;

            if let Some(url) = clicked {
                if let Err(e) = open::that(&url) {
                    tracing::warn!(%url, error = %e, "failed to open poster");
                }
            }
        });
    }
}

/// Open the dashboard window.
pub fn launch(config: ViewerConfig) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([1100.0, 700.0])
            .with_title("Netflix Insights"),
        ..Default::default()
    };

    eframe::run_native(
        "Netflix Insights",
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, config)))),
    )
}
