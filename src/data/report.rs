//! Cleaning report rendered as the fixed-format text log and, optionally, JSON.

use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;

pub const REPORT_HEADER: &str = "NETFLIX DATA CLEANING REPORT";

/// Median imputation applied to one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Imputation {
    pub column: String,
    /// Median of the column's non-null values, `None` if it had none.
    pub median: Option<f64>,
    /// Number of null values replaced by the median.
    pub filled: usize,
}

/// Outcome of one cleaning run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleaningReport {
    /// (rows, columns) of the raw dataset.
    pub original_shape: (usize, usize),
    /// (rows, columns) of the cleaned dataset.
    pub cleaned_shape: (usize, usize),
    pub dropped_untitled: usize,
    pub duplicates_removed: usize,
    pub current_year: i32,
    pub imputations: Vec<Imputation>,
    /// Null count per column after cleaning, in column order.
    pub null_counts: Vec<(String, usize)>,
}

impl CleaningReport {
    /// Total nulls left in the cleaned dataset.
    pub fn remaining_nulls(&self) -> usize {
        self.null_counts.iter().map(|(_, n)| n).sum()
    }

    /// Human-readable report.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", REPORT_HEADER);
        let _ = writeln!(out, "{}", "-".repeat(29));
        let _ = writeln!(
            out,
            "Original Shape: ({}, {})",
            self.original_shape.0, self.original_shape.1
        );
        let _ = writeln!(
            out,
            "Cleaned Shape: ({}, {})",
            self.cleaned_shape.0, self.cleaned_shape.1
        );

        let _ = writeln!(out, "\nRows Dropped (missing title): {}", self.dropped_untitled);
        let _ = writeln!(out, "Duplicate Rows Removed: {}", self.duplicates_removed);
        let _ = writeln!(out, "Content Age Reference Year: {}", self.current_year);

        let _ = writeln!(out, "\nMedian Imputation:");
        for imp in &self.imputations {
            let median = imp
                .median
                .map(|m| m.to_string())
                .unwrap_or_else(|| "n/a".to_string());
            let _ = writeln!(
                out,
                "{:<24}median={:<12} filled={}",
                imp.column, median, imp.filled
            );
        }

        let _ = writeln!(out, "\nMissing Values After Cleaning:");
        let width = self
            .null_counts
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0)
            + 4;
        for (name, count) in &self.null_counts {
            let _ = writeln!(out, "{:<width$}{}", name, count, width = width);
        }

        out
    }

    /// Write the text report.
    pub fn write_text(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.render())
    }

    /// Write the JSON rendering of the report.
    pub fn write_json(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CleaningReport {
        CleaningReport {
            original_shape: (5, 13),
            cleaned_shape: (3, 15),
            dropped_untitled: 1,
            duplicates_removed: 1,
            current_year: 2025,
            imputations: vec![Imputation {
                column: "imdb_score".to_string(),
                median: Some(6.5),
                filled: 2,
            }],
            null_counts: vec![("title".to_string(), 0), ("genres".to_string(), 1)],
        }
    }

    #[test]
    fn test_render_has_fixed_sections() {
        let text = sample().render();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(REPORT_HEADER));
        assert!(text.contains("Original Shape: (5, 13)"));
        assert!(text.contains("Cleaned Shape: (3, 15)"));
        assert!(text.contains("Missing Values After Cleaning:"));
        assert!(text.contains("imdb_score              median=6.5          filled=2"));
        assert!(text.lines().any(|l| l.starts_with("genres") && l.ends_with('1')));
    }

    #[test]
    fn test_remaining_nulls() {
        assert_eq!(sample().remaining_nulls(), 1);
    }

    #[test]
    fn test_json_rendering() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["original_shape"], serde_json::json!([5, 13]));
        assert_eq!(json["imputations"][0]["median"], serde_json::json!(6.5));
    }
}
