//! Statistics Calculator Module
//! Handles column medians for imputation and the score aggregates shown by
//! the viewer.

use polars::prelude::*;
use rayon::prelude::*;
use statrs::statistics::Statistics;
use std::collections::HashMap;

/// Medians of a set of numeric columns, computed in one pass before any
/// column is filled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnMedians {
    medians: HashMap<String, Option<f64>>,
}

impl ColumnMedians {
    /// Median of a column, `None` when it had no non-null values.
    pub fn get(&self, column: &str) -> Option<f64> {
        self.medians.get(column).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.medians.len()
    }

    pub fn is_empty(&self) -> bool {
        self.medians.is_empty()
    }
}

/// Handles statistical calculations with multi-threading support.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Median of the finite values, `None` for an empty input. Even-length
    /// inputs average the two middle values.
    pub fn median(values: &[f64]) -> Option<f64> {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
        let n = sorted.len();
        if n == 0 {
            return None;
        }
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let median = if n % 2 == 0 {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        } else {
            sorted[n / 2]
        };
        Some(median)
    }

    /// Arithmetic mean, `None` for an empty input.
    pub fn mean(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        Some(values.iter().mean())
    }

    /// Maximum value, `None` for an empty input.
    pub fn max(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        Some(Statistics::max(values.iter()))
    }

    /// Round to `places` decimals, ties to even on the exact binary value
    /// (`round_to(0.125, 2) == 0.12`).
    pub fn round_to(value: f64, places: u32) -> f64 {
        // Fixed-precision formatting rounds the exact value, ties to even.
        format!("{:.*}", places as usize, value)
            .parse()
            .unwrap_or(value)
    }

    /// Get the non-null values of a column as f64.
    pub fn get_column_values(df: &DataFrame, column: &str) -> PolarsResult<Vec<f64>> {
        let values = df.column(column)?.cast(&DataType::Float64)?;
        let values = values
            .f64()?
            .into_iter()
            .flatten()
            .filter(|v| !v.is_nan())
            .collect();
        Ok(values)
    }

    /// Compute the median of every listed column in parallel.
    ///
    /// Each median depends only on its own column's non-null values, so the
    /// result is the same whatever order the fills are applied in afterwards.
    pub fn compute_medians_parallel(
        df: &DataFrame,
        columns: &[&str],
    ) -> PolarsResult<ColumnMedians> {
        let medians = columns
            .par_iter()
            .map(|column| {
                let values = Self::get_column_values(df, column)?;
                Ok::<_, PolarsError>((column.to_string(), Self::median(&values)))
            })
            .collect::<PolarsResult<HashMap<_, _>>>()?;

        Ok(ColumnMedians { medians })
    }
}
