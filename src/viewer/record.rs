//! Typed view of one cleaned title row.

use crate::data::schema::{self, TitleKind};
use crate::viewer::ViewerError;
use polars::prelude::*;
use serde::Serialize;

/// One title of the cleaned dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleRecord {
    /// Position in the source dataset; ties in rankings keep this order.
    pub row: usize,
    pub id: Option<String>,
    pub title: String,
    pub kind: TitleKind,
    pub age_certification: Option<String>,
    pub genres: Option<String>,
    pub production_countries: Option<String>,
    pub release_year: i64,
    pub seasons: i64,
    pub imdb_score: f64,
    pub imdb_votes: i64,
    pub tmdb_score: f64,
    pub tmdb_popularity: f64,
    pub content_age: i64,
    pub average_score: f64,
}

impl TitleRecord {
    /// Extract the rows of a cleaned DataFrame. Rows whose type is null or
    /// not exactly `MOVIE`/`SHOW` are left out.
    pub fn from_frame(df: &DataFrame) -> Result<Vec<TitleRecord>, ViewerError> {
        let ids = optional_strings(df, schema::ID)?;
        let titles = strings(df, schema::TITLE)?;
        let kinds = strings(df, schema::TYPE)?;
        let certifications = strings(df, schema::AGE_CERTIFICATION)?;
        let genres = strings(df, schema::GENRES)?;
        let countries = strings(df, schema::PRODUCTION_COUNTRIES)?;
        let release_years = integers(df, schema::RELEASE_YEAR)?;
        let seasons = integers(df, schema::SEASONS)?;
        let imdb_scores = floats(df, schema::IMDB_SCORE)?;
        let imdb_votes = integers(df, schema::IMDB_VOTES)?;
        let tmdb_scores = floats(df, schema::TMDB_SCORE)?;
        let popularity = floats(df, schema::TMDB_POPULARITY)?;
        let ages = integers(df, schema::CONTENT_AGE)?;
        let averages = floats(df, schema::AVERAGE_SCORE)?;

        let mut records = Vec::with_capacity(df.height());
        for row in 0..df.height() {
            // Rows outside MOVIE/SHOW can never match a type filter.
            let Some(kind) = kinds[row].as_deref().and_then(|k| k.parse::<TitleKind>().ok())
            else {
                tracing::warn!(row, kind = ?kinds[row], "skipping title with unrecognized type");
                continue;
            };
            let title = required(titles[row].clone(), row, schema::TITLE)?;

            records.push(TitleRecord {
                row,
                id: ids[row].clone(),
                title,
                kind,
                age_certification: certifications[row].clone(),
                genres: genres[row].clone(),
                production_countries: countries[row].clone(),
                release_year: required(release_years[row], row, schema::RELEASE_YEAR)?,
                seasons: required(seasons[row], row, schema::SEASONS)?,
                imdb_score: required(imdb_scores[row], row, schema::IMDB_SCORE)?,
                imdb_votes: required(imdb_votes[row], row, schema::IMDB_VOTES)?,
                tmdb_score: required(tmdb_scores[row], row, schema::TMDB_SCORE)?,
                tmdb_popularity: required(popularity[row], row, schema::TMDB_POPULARITY)?,
                content_age: required(ages[row], row, schema::CONTENT_AGE)?,
                average_score: required(averages[row], row, schema::AVERAGE_SCORE)?,
            });
        }
        Ok(records)
    }
}

fn malformed(row: usize, column: &str) -> ViewerError {
    ViewerError::MalformedRow {
        row,
        column: column.to_string(),
    }
}

fn required<T>(value: Option<T>, row: usize, column: &str) -> Result<T, ViewerError> {
    value.ok_or_else(|| malformed(row, column))
}

fn strings(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>, ViewerError> {
    let column = df.column(name)?.cast(&DataType::String)?;
    let values = column
        .str()?
        .into_iter()
        .map(|v| v.filter(|s| !s.is_empty()).map(str::to_string))
        .collect();
    Ok(values)
}

fn optional_strings(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>, ViewerError> {
    if df.column(name).is_err() {
        return Ok(vec![None; df.height()]);
    }
    strings(df, name)
}

fn floats(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>, ViewerError> {
    let column = df.column(name)?.cast(&DataType::Float64)?;
    Ok(column.f64()?.into_iter().collect())
}

fn integers(df: &DataFrame, name: &str) -> Result<Vec<Option<i64>>, ViewerError> {
    let column = df.column(name)?.cast(&DataType::Int64)?;
    Ok(column.i64()?.into_iter().collect())
}
