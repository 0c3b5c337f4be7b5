//! Trend Chart Module
//! Release-year line chart using egui_plot.

use egui::{Color32, RichText};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};
use std::collections::BTreeMap;

/// Netflix red (#E50914).
pub const ACCENT_COLOR: Color32 = Color32::from_rgb(229, 9, 20);

const CHART_HEIGHT: f32 = 260.0;

/// Draws the "content growth over time" chart.
pub struct TrendPlotter;

impl TrendPlotter {
    /// Plot points (year, count) in ascending year order.
    pub fn year_points(histogram: &BTreeMap<i64, usize>) -> Vec<[f64; 2]> {
        histogram
            .iter()
            .map(|(year, count)| [*year as f64, *count as f64])
            .collect()
    }

    /// Draw titles-per-year as a line with point markers.
    pub fn draw_year_trend(ui: &mut egui::Ui, id: &str, histogram: &BTreeMap<i64, usize>) {
        if histogram.is_empty() {
            ui.label(RichText::new("No data").color(Color32::GRAY));
            return;
        }

        let points = Self::year_points(histogram);

        Plot::new(format!("trend_{}", id))
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .x_axis_label("Release year")
            .y_axis_label("Titles")
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::new(points.clone()))
                        .color(ACCENT_COLOR)
                        .width(2.0)
                        .name("Titles"),
                );
                plot_ui.points(
                    Points::new(PlotPoints::new(points))
                        .color(ACCENT_COLOR)
                        .radius(2.5),
                );
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_points_follow_histogram_order() {
        let mut histogram = BTreeMap::new();
        histogram.insert(2021, 4);
        histogram.insert(1998, 1);
        assert_eq!(
            TrendPlotter::year_points(&histogram),
            vec![[1998.0, 1.0], [2021.0, 4.0]]
        );
    }
}
