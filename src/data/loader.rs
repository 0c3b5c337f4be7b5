//! CSV Data Loader Module
//! Handles reading and writing title datasets using Polars.

use polars::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Input file not readable: {0}")]
    MissingFile(PathBuf),
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Number of rows scanned to infer column types.
const INFER_SCHEMA_ROWS: usize = 10000;

/// Reads and writes title datasets.
pub struct DataLoader;

impl DataLoader {
    /// Load a CSV file using Polars.
    ///
    /// Malformed values are reported as errors rather than nulled out so the
    /// numeric coercion steps see every bad cell.
    pub fn load_csv(path: &Path) -> Result<DataFrame, LoaderError> {
        if File::open(path).is_err() {
            return Err(LoaderError::MissingFile(path.to_path_buf()));
        }

        let df = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
            .finish()?
            .collect()?;

        tracing::debug!(
            path = %path.display(),
            rows = df.height(),
            columns = df.width(),
            "loaded csv"
        );
        Ok(df)
    }

    /// Write a DataFrame as CSV with a header row, creating parent directories.
    pub fn write_csv(df: &DataFrame, path: &Path) -> Result<(), LoaderError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let mut out = df.clone();
        let file = File::create(path)?;
        CsvWriter::new(file)
            .include_header(true)
            .finish(&mut out)?;

        tracing::debug!(path = %path.display(), rows = out.height(), "wrote csv");
        Ok(())
    }

    /// Get list of column names of a DataFrame.
    pub fn get_columns(df: &DataFrame) -> Vec<String> {
        df.get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Get sorted unique non-null values from a column.
    pub fn get_unique_values(df: &DataFrame, column: &str) -> Vec<String> {
        let mut values: Vec<String> = df
            .column(column)
            .ok()
            .and_then(|col| col.cast(&DataType::String).ok())
            .and_then(|col| col.unique().ok())
            .map(|unique| {
                let series = unique.as_materialized_series();
                (0..series.len())
                    .filter_map(|i| {
                        let val = series.get(i).ok()?;
                        if val.is_null() {
                            None
                        } else {
                            Some(val.to_string().trim_matches('"').to_string())
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();
        values.sort();
        values
    }
}
