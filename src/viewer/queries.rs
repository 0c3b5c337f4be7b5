//! Read-only queries over a slice of title records.
//!
//! Every function is pure: the records are an immutable snapshot and results
//! borrow from it.

use crate::stats::StatsCalculator;
use crate::viewer::{TitleRecord, ViewerError};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// Maximum score distance for a recommendation, inclusive.
pub const DEFAULT_TOLERANCE: f64 = 1.0;
/// Maximum number of recommendations returned.
pub const DEFAULT_RECOMMEND_LIMIT: usize = 5;
/// Size of the "highest rated" list.
pub const DEFAULT_TOP_N: usize = 10;

/// Headline metrics of a selection. `mean_imdb`/`max_imdb` are `None` when
/// the selection is empty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    /// Mean IMDb score rounded to 2 decimals.
    pub mean_imdb: Option<f64>,
    /// Highest IMDb score rounded to 1 decimal.
    pub max_imdb: Option<f64>,
}

impl Summary {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Numeric column a ranking is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum RankKey {
    #[default]
    ImdbScore,
    ImdbVotes,
    TmdbScore,
    TmdbPopularity,
    AverageScore,
    ReleaseYear,
}

impl RankKey {
    pub const ALL: [RankKey; 6] = [
        RankKey::ImdbScore,
        RankKey::ImdbVotes,
        RankKey::TmdbScore,
        RankKey::TmdbPopularity,
        RankKey::AverageScore,
        RankKey::ReleaseYear,
    ];

    pub fn value(&self, record: &TitleRecord) -> f64 {
        match self {
            RankKey::ImdbScore => record.imdb_score,
            RankKey::ImdbVotes => record.imdb_votes as f64,
            RankKey::TmdbScore => record.tmdb_score,
            RankKey::TmdbPopularity => record.tmdb_popularity,
            RankKey::AverageScore => record.average_score,
            RankKey::ReleaseYear => record.release_year as f64,
        }
    }

    pub fn column(&self) -> &'static str {
        use crate::data::schema;
        match self {
            RankKey::ImdbScore => schema::IMDB_SCORE,
            RankKey::ImdbVotes => schema::IMDB_VOTES,
            RankKey::TmdbScore => schema::TMDB_SCORE,
            RankKey::TmdbPopularity => schema::TMDB_POPULARITY,
            RankKey::AverageScore => schema::AVERAGE_SCORE,
            RankKey::ReleaseYear => schema::RELEASE_YEAR,
        }
    }
}

impl fmt::Display for RankKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl std::str::FromStr for RankKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RankKey::ALL
            .into_iter()
            .find(|key| key.column() == s)
            .ok_or_else(|| format!("unknown rank key '{}'", s))
    }
}

/// Count, mean and max IMDb score.
pub fn summary(records: &[TitleRecord]) -> Summary {
    let scores: Vec<f64> = records.iter().map(|r| r.imdb_score).collect();
    Summary {
        count: records.len(),
        mean_imdb: StatsCalculator::mean(&scores).map(|m| StatsCalculator::round_to(m, 2)),
        max_imdb: StatsCalculator::max(&scores).map(|m| StatsCalculator::round_to(m, 1)),
    }
}

/// The first `n` records ordered by `key`. Equal keys keep their original
/// order; fewer than `n` records are returned as-is.
pub fn top_n(records: &[TitleRecord], n: usize, key: RankKey, descending: bool) -> Vec<&TitleRecord> {
    rank(records.iter().collect(), n, key, descending)
}

fn rank(mut ranked: Vec<&TitleRecord>, n: usize, key: RankKey, descending: bool) -> Vec<&TitleRecord> {
    // Vec::sort_by is stable.
    ranked.sort_by(|a, b| {
        let ord = key
            .value(a)
            .partial_cmp(&key.value(b))
            .unwrap_or(Ordering::Equal);
        if descending {
            ord.reverse()
        } else {
            ord
        }
    });
    ranked.truncate(n);
    ranked
}

/// Titles with the same genre string as `selected_title` whose IMDb score is
/// within `tolerance` of it, best first, at most `limit`.
///
/// An empty result means no close match. A title that is not in `records`
/// is an error.
pub fn recommend<'a>(
    records: &'a [TitleRecord],
    selected_title: &str,
    tolerance: f64,
    limit: usize,
) -> Result<Vec<&'a TitleRecord>, ViewerError> {
    let selected = records
        .iter()
        .find(|r| r.title == selected_title)
        .ok_or_else(|| ViewerError::UnknownTitle(selected_title.to_string()))?;

    // Titles without genres never match, not even each other.
    let Some(genre) = selected.genres.as_deref() else {
        return Ok(Vec::new());
    };

    let candidates: Vec<&TitleRecord> = records
        .iter()
        .filter(|r| {
            r.genres.as_deref() == Some(genre)
                && r.title != selected_title
                && (r.imdb_score - selected.imdb_score).abs() <= tolerance
        })
        .collect();

    Ok(rank(candidates, limit, RankKey::ImdbScore, true))
}

/// Number of titles per release year, ascending by year.
pub fn year_histogram(records: &[TitleRecord]) -> BTreeMap<i64, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.release_year).or_insert(0) += 1;
    }
    counts
}

/// Distinct titles in order of first appearance.
pub fn distinct_titles(records: &[TitleRecord]) -> Vec<&str> {
    let mut seen = std::collections::HashSet::new();
    records
        .iter()
        .map(|r| r.title.as_str())
        .filter(|t| seen.insert(*t))
        .collect()
}
