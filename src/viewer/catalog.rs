//! Session snapshot of the cleaned dataset.

use crate::data::schema::{self, TitleKind};
use crate::data::DataLoader;
use crate::viewer::queries::{self, RankKey, Summary};
use crate::viewer::{TitleRecord, ViewerError};
use polars::prelude::*;
use std::collections::BTreeMap;
use std::path::Path;

/// Immutable snapshot of the cleaned dataset, loaded once per session.
#[derive(Debug, Clone)]
pub struct Catalog {
    df: DataFrame,
    records: Vec<TitleRecord>,
}

impl Catalog {
    /// Load the cleaned CSV.
    pub fn load(path: &Path) -> Result<Self, ViewerError> {
        let df = DataLoader::load_csv(path)?;
        Self::from_frame(df)
    }

    pub fn from_frame(df: DataFrame) -> Result<Self, ViewerError> {
        let records = TitleRecord::from_frame(&df)?;
        tracing::info!(titles = records.len(), "catalog loaded");
        Ok(Self { df, records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[TitleRecord] {
        &self.records
    }

    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    /// Title types present in the dataset, sorted.
    pub fn kinds(&self) -> Vec<TitleKind> {
        let mut kinds: Vec<TitleKind> = self.records.iter().map(|r| r.kind).collect();
        kinds.sort();
        kinds.dedup();
        kinds
    }

    /// Records whose type equals `kind`, in dataset order.
    pub fn filter(&self, kind: TitleKind) -> Result<Subset, ViewerError> {
        let df = self
            .df
            .clone()
            .lazy()
            .filter(col(schema::TYPE).eq(lit(kind.as_str())))
            .collect()?;

        let records = self
            .records
            .iter()
            .filter(|r| r.kind == kind)
            .cloned()
            .collect();

        Ok(Subset { kind, df, records })
    }
}

/// The records of one title type, with the matching DataFrame rows for export.
#[derive(Debug, Clone)]
pub struct Subset {
    kind: TitleKind,
    df: DataFrame,
    records: Vec<TitleRecord>,
}

impl Subset {
    pub fn kind(&self) -> TitleKind {
        self.kind
    }

    pub fn records(&self) -> &[TitleRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn summary(&self) -> Summary {
        queries::summary(&self.records)
    }

    pub fn top_n(&self, n: usize, key: RankKey, descending: bool) -> Vec<&TitleRecord> {
        queries::top_n(&self.records, n, key, descending)
    }

    pub fn recommend(
        &self,
        selected_title: &str,
        tolerance: f64,
        limit: usize,
    ) -> Result<Vec<&TitleRecord>, ViewerError> {
        queries::recommend(&self.records, selected_title, tolerance, limit)
    }

    pub fn year_histogram(&self) -> BTreeMap<i64, usize> {
        queries::year_histogram(&self.records)
    }

    pub fn titles(&self) -> Vec<&str> {
        queries::distinct_titles(&self.records)
    }

    /// Write the subset as CSV with the cleaned dataset's columns.
    pub fn export_csv(&self, path: &Path) -> Result<(), ViewerError> {
        DataLoader::write_csv(&self.df, path)?;
        tracing::info!(path = %path.display(), rows = self.df.height(), "exported subset");
        Ok(())
    }
}
