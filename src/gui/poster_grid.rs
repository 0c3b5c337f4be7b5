//! Poster Grid Widget
//! Rows of title cards with a rating badge and a placeholder poster link.

use crate::charts::ACCENT_COLOR;
use crate::viewer::{poster_url, TitleRecord};
use egui::{Color32, RichText};

/// Card layout
const CARDS_PER_ROW: usize = 5;
const CARD_WIDTH: f32 = 170.0;
const CARD_SPACING: f32 = 12.0;

/// Grid of title cards.
pub struct PosterGrid;

impl PosterGrid {
    /// Draw the cards, five per row. Returns the poster URL of a clicked card.
    pub fn show(ui: &mut egui::Ui, records: &[&TitleRecord], poster_base: &str) -> Option<String> {
        let mut clicked = None;

        for row in records.chunks(CARDS_PER_ROW) {
            ui.horizontal(|ui| {
                for record in row {
                    if let Some(url) = Self::draw_card(ui, record, poster_base) {
                        clicked = Some(url);
                    }
                    ui.add_space(CARD_SPACING);
                }
            });
            ui.add_space(CARD_SPACING);
        }

        clicked
    }

    fn draw_card(ui: &mut egui::Ui, record: &TitleRecord, poster_base: &str) -> Option<String> {
        let mut clicked = None;

        egui::Frame::none()
            .rounding(12.0)
            .fill(Color32::from_rgb(20, 20, 20))
            .stroke(egui::Stroke::new(1.0, Color32::from_gray(60)))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.set_width(CARD_WIDTH);
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        // Rating badge
                        egui::Frame::none()
                            .rounding(8.0)
                            .fill(ACCENT_COLOR)
                            .inner_margin(egui::Margin::symmetric(8.0, 4.0))
                            .show(ui, |ui| {
                                ui.label(
                                    RichText::new(format!("⭐ {}", record.imdb_score))
                                        .size(12.0)
                                        .strong()
                                        .color(Color32::WHITE),
                                );
                            });
                        ui.label(
                            RichText::new(record.release_year.to_string())
                                .size(11.0)
                                .color(Color32::GRAY),
                        );
                    });

                    ui.add_space(6.0);
                    ui.label(RichText::new(&record.title).size(14.0).strong());
                    if let Some(genres) = &record.genres {
                        ui.label(RichText::new(genres).size(11.0).color(Color32::GRAY));
                    }

                    ui.add_space(4.0);
                    if ui.link("🖼 Poster").clicked() {
                        clicked = Some(poster_url(poster_base, &record.title));
                    }
                });
            });

        clicked
    }
}
