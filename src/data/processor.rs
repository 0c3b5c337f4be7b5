//! Data Processor Module
//! Runs the fixed cleaning sequence over a raw titles dataset:
//! drop → fill categorical → fix seasons → impute numeric → cast types →
//! derive features → normalize text → dedupe.

use crate::data::loader::{DataLoader, LoaderError};
use crate::data::normalize::normalize_list_field;
use crate::data::report::{CleaningReport, Imputation};
use crate::data::schema::{self, TitleKind};
use crate::stats::StatsCalculator;
use chrono::Datelike;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("Input file not readable: {0}")]
    MissingFile(PathBuf),
    #[error("Required column '{0}' is missing")]
    MissingColumn(String),
    #[error("Column '{column}' has {rows} value(s) that cannot be coerced to a number")]
    TypeCoercion { column: String, rows: usize },
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<LoaderError> for CleanError {
    fn from(err: LoaderError) -> Self {
        match err {
            LoaderError::MissingFile(path) => CleanError::MissingFile(path),
            LoaderError::CsvError(e) => CleanError::PolarsError(e),
            LoaderError::Io(e) => CleanError::Io(e),
        }
    }
}

/// Text columns normalized to the String dtype before cleaning.
const TEXT_COLUMNS: [&str; 7] = [
    schema::TITLE,
    schema::TYPE,
    schema::AGE_CERTIFICATION,
    schema::DESCRIPTION,
    schema::IMDB_ID,
    schema::GENRES,
    schema::PRODUCTION_COUNTRIES,
];

/// Cleaned dataset together with its report.
#[derive(Debug, Clone)]
pub struct CleanedDataset {
    pub df: DataFrame,
    pub report: CleaningReport,
}

/// The cleaning pipeline. The reference year for `content_age` is captured
/// once, when the pipeline is built.
#[derive(Debug, Clone, Copy)]
pub struct CleaningPipeline {
    current_year: i32,
}

impl Default for CleaningPipeline {
    fn default() -> Self {
        Self::new(chrono::Local::now().year())
    }
}

impl CleaningPipeline {
    pub fn new(current_year: i32) -> Self {
        Self { current_year }
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    /// Clean `input`, write the cleaned CSV to `output` and the text report to
    /// `report_path`.
    pub fn run_files(
        &self,
        input: &Path,
        output: &Path,
        report_path: &Path,
    ) -> Result<CleaningReport, CleanError> {
        let raw = DataLoader::load_csv(input)?;
        let cleaned = self.run(raw)?;

        DataLoader::write_csv(&cleaned.df, output)?;
        cleaned.report.write_text(report_path)?;

        info!(
            output = %output.display(),
            report = %report_path.display(),
            rows = cleaned.df.height(),
            "cleaning complete"
        );
        Ok(cleaned.report)
    }

    /// Run every step in order over an in-memory dataset.
    pub fn run(&self, raw: DataFrame) -> Result<CleanedDataset, CleanError> {
        let original_shape = raw.shape();
        Self::check_required_columns(&raw)?;

        let df = Self::conform_text_columns(raw)?;

        let before = df.height();
        let df = Self::drop_untitled(df)?;
        let dropped_untitled = before - df.height();
        info!(stage = "drop_untitled", rows = df.height(), dropped = dropped_untitled);

        let df = Self::fill_categoricals(df)?;
        info!(stage = "fill_categoricals", rows = df.height());

        let df = Self::fix_seasons(df)?;
        info!(stage = "fix_seasons", rows = df.height());

        let (df, imputations) = Self::impute_numeric(df)?;
        info!(stage = "impute_numeric", rows = df.height());

        let df = Self::cast_integer_columns(df)?;
        info!(stage = "cast_integer_columns", rows = df.height());

        let df = self.derive_features(df)?;
        info!(stage = "derive_features", rows = df.height(), year = self.current_year);

        let df = Self::normalize_text(df)?;
        info!(stage = "normalize_text", rows = df.height());

        let before = df.height();
        let df = Self::deduplicate(df)?;
        let duplicates_removed = before - df.height();
        info!(stage = "deduplicate", rows = df.height(), removed = duplicates_removed);

        let null_counts = df
            .get_columns()
            .iter()
            .map(|c| (c.name().to_string(), c.null_count()))
            .collect();

        let report = CleaningReport {
            original_shape,
            cleaned_shape: df.shape(),
            dropped_untitled,
            duplicates_removed,
            current_year: self.current_year,
            imputations,
            null_counts,
        };

        Ok(CleanedDataset { df, report })
    }

    fn check_required_columns(df: &DataFrame) -> Result<(), CleanError> {
        for name in schema::REQUIRED_COLUMNS {
            if df.column(name).is_err() {
                return Err(CleanError::MissingColumn(name.to_string()));
            }
        }
        Ok(())
    }

    /// Columns that held only nulls or digits may have been inferred as
    /// numeric; text steps need them as strings.
    fn conform_text_columns(df: DataFrame) -> Result<DataFrame, CleanError> {
        let exprs: Vec<Expr> = TEXT_COLUMNS
            .iter()
            .map(|name| col(*name).cast(DataType::String))
            .collect();
        Ok(df.lazy().with_columns(exprs).collect()?)
    }

    /// Step 1: drop records whose title is null or empty.
    pub fn drop_untitled(df: DataFrame) -> Result<DataFrame, CleanError> {
        let df = df
            .lazy()
            .filter(
                col(schema::TITLE)
                    .is_not_null()
                    .and(col(schema::TITLE).neq(lit(""))),
            )
            .collect()?;
        Ok(df)
    }

    /// Step 2: replace missing categorical values with their sentinel.
    pub fn fill_categoricals(df: DataFrame) -> Result<DataFrame, CleanError> {
        let exprs: Vec<Expr> = schema::CATEGORICAL_SENTINELS
            .iter()
            .map(|(name, sentinel)| {
                col(*name)
                    .cast(DataType::String)
                    .fill_null(lit(*sentinel))
            })
            .collect();
        Ok(df.lazy().with_columns(exprs).collect()?)
    }

    /// Step 3: movies have no seasons; any other missing value becomes 0.
    ///
    /// A non-numeric seasons value on a row that keeps its seasons is a
    /// coercion error.
    pub fn fix_seasons(df: DataFrame) -> Result<DataFrame, CleanError> {
        let is_movie = col(schema::TYPE)
            .eq(lit(TitleKind::Movie.as_str()))
            .fill_null(lit(false));

        let unparsed = df
            .clone()
            .lazy()
            .select([is_movie
                .clone()
                .not()
                .and(col(schema::SEASONS).is_not_null())
                .and(col(schema::SEASONS).cast(DataType::Float64).is_null())
                .alias("unparsed")])
            .collect()?;
        let bad_rows = unparsed
            .column("unparsed")?
            .bool()?
            .into_iter()
            .filter(|v| *v == Some(true))
            .count();
        if bad_rows > 0 {
            return Err(CleanError::TypeCoercion {
                column: schema::SEASONS.to_string(),
                rows: bad_rows,
            });
        }

        let seasons = when(is_movie)
            .then(lit(0.0))
            .otherwise(col(schema::SEASONS).cast(DataType::Float64))
            .fill_null(lit(0.0))
            .alias(schema::SEASONS);
        Ok(df.lazy().with_column(seasons).collect()?)
    }

    /// Step 4: fill missing score/vote values with the column median.
    ///
    /// All medians are computed from the untouched columns before any fill is
    /// applied.
    pub fn impute_numeric(mut df: DataFrame) -> Result<(DataFrame, Vec<Imputation>), CleanError> {
        for name in schema::NUMERIC_COLUMNS {
            Self::coerce_column(&mut df, name, &DataType::Float64, true)?;
        }

        let medians = StatsCalculator::compute_medians_parallel(&df, &schema::NUMERIC_COLUMNS)?;

        let mut imputations = Vec::with_capacity(schema::NUMERIC_COLUMNS.len());
        let mut fills = Vec::new();
        for name in schema::NUMERIC_COLUMNS {
            let missing = Self::missing_count(&df, name)?;
            let median = medians.get(name);
            debug!(column = name, ?median, missing, "median imputation");

            if let Some(m) = median {
                fills.push(col(name).fill_null(lit(m)).fill_nan(lit(m)));
            }
            imputations.push(Imputation {
                column: name.to_string(),
                median,
                filled: if median.is_some() { missing } else { 0 },
            });
        }

        let df = if fills.is_empty() {
            df
        } else {
            df.lazy().with_columns(fills).collect()?
        };
        Ok((df, imputations))
    }

    /// Step 5: coerce release_year, imdb_votes and seasons to integers.
    pub fn cast_integer_columns(mut df: DataFrame) -> Result<DataFrame, CleanError> {
        for name in schema::INTEGER_COLUMNS {
            Self::coerce_column(&mut df, name, &DataType::Int64, false)?;
        }
        Ok(df)
    }

    /// Step 6: add content_age and average_score.
    pub fn derive_features(&self, df: DataFrame) -> Result<DataFrame, CleanError> {
        let df = df
            .lazy()
            .with_columns([
                (lit(self.current_year as i64) - col(schema::RELEASE_YEAR))
                    .alias(schema::CONTENT_AGE),
                ((col(schema::IMDB_SCORE) + col(schema::TMDB_SCORE)) / lit(2.0))
                    .alias(schema::AVERAGE_SCORE),
            ])
            .collect()?;
        Ok(df)
    }

    /// Step 7: strip list punctuation from genres and production_countries.
    pub fn normalize_text(mut df: DataFrame) -> Result<DataFrame, CleanError> {
        for name in schema::LIST_COLUMNS {
            let text = df.column(name)?.cast(&DataType::String)?;
            let values: Vec<Option<String>> = text
                .str()?
                .into_iter()
                .map(|v| v.map(normalize_list_field))
                .collect();
            df.with_column(Column::new(name.into(), values))?;
        }
        Ok(df)
    }

    /// Step 8: remove exact duplicate rows, keeping the first occurrence.
    pub fn deduplicate(df: DataFrame) -> Result<DataFrame, CleanError> {
        let df = df
            .lazy()
            .unique_stable(None, UniqueKeepStrategy::First)
            .collect()?;
        Ok(df)
    }

    /// Cast a column to a numeric dtype, failing on any value the cast turns
    /// into null. With `allow_nulls` unset, pre-existing nulls fail too.
    fn coerce_column(
        df: &mut DataFrame,
        name: &str,
        dtype: &DataType,
        allow_nulls: bool,
    ) -> Result<(), CleanError> {
        let original = df.column(name)?;
        let nulls_before = original.null_count();

        let mut coerced = original.cast(&DataType::Float64)?;
        if dtype != &DataType::Float64 {
            coerced = coerced.cast(dtype)?;
        }

        let bad_rows = if allow_nulls {
            coerced.null_count().saturating_sub(nulls_before)
        } else {
            coerced.null_count()
        };
        if bad_rows > 0 {
            return Err(CleanError::TypeCoercion {
                column: name.to_string(),
                rows: bad_rows,
            });
        }

        df.with_column(coerced)?;
        Ok(())
    }

    /// Null or NaN entries of a Float64 column.
    fn missing_count(df: &DataFrame, name: &str) -> Result<usize, CleanError> {
        let count = df
            .column(name)?
            .f64()?
            .into_iter()
            .filter(|v| v.map_or(true, f64::is_nan))
            .count();
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f64_values(df: &DataFrame, name: &str) -> Vec<Option<f64>> {
        df.column(name).unwrap().f64().unwrap().into_iter().collect()
    }

    fn i64_values(df: &DataFrame, name: &str) -> Vec<Option<i64>> {
        df.column(name).unwrap().i64().unwrap().into_iter().collect()
    }

    fn str_values(df: &DataFrame, name: &str) -> Vec<Option<String>> {
        df.column(name)
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .map(|v| v.map(str::to_string))
            .collect()
    }

    #[test]
    fn test_drop_untitled_removes_null_and_empty() {
        let df = df!("title" => &[Some("A"), None, Some(""), Some("B")]).unwrap();
        let df = CleaningPipeline::drop_untitled(df).unwrap();
        assert_eq!(
            str_values(&df, "title"),
            vec![Some("A".to_string()), Some("B".to_string())]
        );
    }

    #[test]
    fn test_fill_categoricals_uses_distinct_sentinels() {
        let df = df!(
            "age_certification" => &[None, Some("PG")],
            "description" => &[None::<&str>, None],
            "imdb_id" => &[Some("tt1"), None]
        )
        .unwrap();
        let df = CleaningPipeline::fill_categoricals(df).unwrap();

        assert_eq!(
            str_values(&df, "age_certification"),
            vec![Some("Unknown".to_string()), Some("PG".to_string())]
        );
        assert_eq!(
            str_values(&df, "description"),
            vec![Some("No description".to_string()); 2]
        );
        assert_eq!(
            str_values(&df, "imdb_id"),
            vec![Some("tt1".to_string()), Some("Not Available".to_string())]
        );
    }

    #[test]
    fn test_fix_seasons_zeroes_movies_and_fills_nulls() {
        let df = df!(
            "type" => &["MOVIE", "SHOW", "SHOW", "MOVIE"],
            "seasons" => &[Some(3.0), None, Some(2.0), None]
        )
        .unwrap();
        let df = CleaningPipeline::fix_seasons(df).unwrap();
        assert_eq!(
            f64_values(&df, "seasons"),
            vec![Some(0.0), Some(0.0), Some(2.0), Some(0.0)]
        );
    }

    #[test]
    fn test_fix_seasons_rejects_text_on_shows() {
        let df = df!(
            "type" => &["SHOW", "SHOW"],
            "seasons" => &[Some("2"), Some("two")]
        )
        .unwrap();
        let err = CleaningPipeline::fix_seasons(df).unwrap_err();
        assert!(matches!(
            err,
            CleanError::TypeCoercion { ref column, rows: 1 } if column == "seasons"
        ));
    }

    #[test]
    fn test_fix_seasons_zeroes_movie_text() {
        let df = df!(
            "type" => &[Some("MOVIE"), Some("SHOW"), None],
            "seasons" => &[Some("n/a"), Some("4"), None]
        )
        .unwrap();
        let df = CleaningPipeline::fix_seasons(df).unwrap();
        assert_eq!(
            f64_values(&df, "seasons"),
            vec![Some(0.0), Some(4.0), Some(0.0)]
        );
    }

    #[test]
    fn test_impute_numeric_uses_pre_fill_median() {
        let df = df!(
            "imdb_score" => &[Some(6.0), None, Some(7.0), None],
            "imdb_votes" => &[Some(100.0), Some(300.0), None, Some(200.0)],
            "tmdb_score" => &[Some(5.0), Some(5.0), Some(5.0), Some(5.0)],
            "tmdb_popularity" => &[None::<f64>, None, None, Some(1.5)]
        )
        .unwrap();
        let (df, imputations) = CleaningPipeline::impute_numeric(df).unwrap();

        assert_eq!(
            f64_values(&df, "imdb_score"),
            vec![Some(6.0), Some(6.5), Some(7.0), Some(6.5)]
        );
        assert_eq!(f64_values(&df, "imdb_votes")[2], Some(200.0));
        assert_eq!(f64_values(&df, "tmdb_popularity"), vec![Some(1.5); 4]);

        let score = &imputations[0];
        assert_eq!(score.column, "imdb_score");
        assert_eq!(score.median, Some(6.5));
        assert_eq!(score.filled, 2);
        assert_eq!(imputations[2].filled, 0);
    }

    #[test]
    fn test_impute_numeric_medians_do_not_depend_on_column_order() {
        // Filling one column must not shift another column's median.
        let df = df!(
            "imdb_score" => &[Some(1.0), None, Some(9.0)],
            "imdb_votes" => &[None, Some(10.0), Some(30.0)],
            "tmdb_score" => &[Some(2.0), Some(4.0), None],
            "tmdb_popularity" => &[Some(3.0), None, None]
        )
        .unwrap();
        let medians =
            StatsCalculator::compute_medians_parallel(&df, &schema::NUMERIC_COLUMNS).unwrap();
        let (filled, _) = CleaningPipeline::impute_numeric(df).unwrap();

        assert_eq!(f64_values(&filled, "imdb_score")[1], medians.get("imdb_score"));
        assert_eq!(f64_values(&filled, "imdb_votes")[0], medians.get("imdb_votes"));
        assert_eq!(f64_values(&filled, "tmdb_score")[2], medians.get("tmdb_score"));
        assert_eq!(f64_values(&filled, "tmdb_popularity")[2], Some(3.0));
    }

    #[test]
    fn test_impute_numeric_rejects_text() {
        let df = df!(
            "imdb_score" => &[Some("7.1"), Some("great")],
            "imdb_votes" => &[1.0, 2.0],
            "tmdb_score" => &[1.0, 2.0],
            "tmdb_popularity" => &[1.0, 2.0]
        )
        .unwrap();
        let err = CleaningPipeline::impute_numeric(df).unwrap_err();
        assert!(matches!(
            err,
            CleanError::TypeCoercion { ref column, rows: 1 } if column == "imdb_score"
        ));
    }

    #[test]
    fn test_cast_integer_columns() {
        let df = df!(
            "release_year" => &[2001.0, 1999.0],
            "imdb_votes" => &[150.0, 42.0],
            "seasons" => &[0.0, 3.0]
        )
        .unwrap();
        let df = CleaningPipeline::cast_integer_columns(df).unwrap();
        assert_eq!(i64_values(&df, "release_year"), vec![Some(2001), Some(1999)]);
        assert_eq!(i64_values(&df, "seasons"), vec![Some(0), Some(3)]);
        assert_eq!(df.column("imdb_votes").unwrap().dtype(), &DataType::Int64);
    }

    #[test]
    fn test_cast_integer_columns_fails_on_null() {
        let df = df!(
            "release_year" => &[Some(2001.0), None],
            "imdb_votes" => &[1.0, 2.0],
            "seasons" => &[0.0, 0.0]
        )
        .unwrap();
        let err = CleaningPipeline::cast_integer_columns(df).unwrap_err();
        assert!(matches!(
            err,
            CleanError::TypeCoercion { ref column, rows: 1 } if column == "release_year"
        ));
    }

    #[test]
    fn test_derive_features_uses_captured_year() {
        let df = df!(
            "release_year" => &[2000i64, 2020],
            "imdb_score" => &[7.0, 8.0],
            "tmdb_score" => &[6.0, 9.0]
        )
        .unwrap();
        let df = CleaningPipeline::new(2025).derive_features(df).unwrap();
        assert_eq!(i64_values(&df, "content_age"), vec![Some(25), Some(5)]);
        assert_eq!(f64_values(&df, "average_score"), vec![Some(6.5), Some(8.5)]);
    }

    #[test]
    fn test_normalize_text_keeps_nulls() {
        let df = df!(
            "genres" => &[Some("['Drama', 'Comedy']"), None],
            "production_countries" => &[Some("['US']"), Some("[]")]
        )
        .unwrap();
        let df = CleaningPipeline::normalize_text(df).unwrap();
        assert_eq!(
            str_values(&df, "genres"),
            vec![Some("drama, comedy".to_string()), None]
        );
        assert_eq!(
            str_values(&df, "production_countries"),
            vec![Some("us".to_string()), Some(String::new())]
        );
    }

    #[test]
    fn test_deduplicate_keeps_first_in_order() {
        let df = df!(
            "title" => &["B", "A", "B", "C"],
            "imdb_score" => &[1.0, 2.0, 1.0, 3.0]
        )
        .unwrap();
        let df = CleaningPipeline::deduplicate(df).unwrap();
        assert_eq!(
            str_values(&df, "title"),
            vec![
                Some("B".to_string()),
                Some("A".to_string()),
                Some("C".to_string())
            ]
        );
    }

    #[test]
    fn test_missing_required_column() {
        let df = df!("title" => &["A"]).unwrap();
        let err = CleaningPipeline::new(2025).run(df).unwrap_err();
        assert!(matches!(err, CleanError::MissingColumn(ref c) if c == "type"));
    }
}
