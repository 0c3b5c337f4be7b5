//! Viewer module - read-only queries over the cleaned dataset

mod catalog;
mod poster;
pub mod queries;
mod record;

pub use catalog::{Catalog, Subset};
pub use poster::{poster_url, DEFAULT_POSTER_BASE};
pub use queries::{RankKey, Summary};
pub use record::TitleRecord;

use crate::data::LoaderError;
use polars::prelude::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Input file not readable: {0}")]
    MissingFile(PathBuf),
    #[error("Row {row} has no valid '{column}' value")]
    MalformedRow { row: usize, column: String },
    #[error("Title '{0}' is not in the current selection")]
    UnknownTitle(String),
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<LoaderError> for ViewerError {
    fn from(err: LoaderError) -> Self {
        match err {
            LoaderError::MissingFile(path) => ViewerError::MissingFile(path),
            LoaderError::CsvError(e) => ViewerError::PolarsError(e),
            LoaderError::Io(e) => ViewerError::Io(e),
        }
    }
}
