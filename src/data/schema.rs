//! Column names and fixed values of the titles dataset.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const ID: &str = "id";
pub const TITLE: &str = "title";
pub const TYPE: &str = "type";
pub const DESCRIPTION: &str = "description";
pub const RELEASE_YEAR: &str = "release_year";
pub const AGE_CERTIFICATION: &str = "age_certification";
pub const GENRES: &str = "genres";
pub const PRODUCTION_COUNTRIES: &str = "production_countries";
pub const SEASONS: &str = "seasons";
pub const IMDB_ID: &str = "imdb_id";
pub const IMDB_SCORE: &str = "imdb_score";
pub const IMDB_VOTES: &str = "imdb_votes";
pub const TMDB_POPULARITY: &str = "tmdb_popularity";
pub const TMDB_SCORE: &str = "tmdb_score";

// Derived
pub const CONTENT_AGE: &str = "content_age";
pub const AVERAGE_SCORE: &str = "average_score";

/// Columns the raw dataset must provide.
pub const REQUIRED_COLUMNS: [&str; 13] = [
    TITLE,
    TYPE,
    AGE_CERTIFICATION,
    DESCRIPTION,
    IMDB_ID,
    SEASONS,
    RELEASE_YEAR,
    IMDB_SCORE,
    IMDB_VOTES,
    TMDB_SCORE,
    TMDB_POPULARITY,
    GENRES,
    PRODUCTION_COUNTRIES,
];

/// Categorical columns and the sentinel written in place of a missing value.
pub const CATEGORICAL_SENTINELS: [(&str, &str); 3] = [
    (AGE_CERTIFICATION, "Unknown"),
    (DESCRIPTION, "No description"),
    (IMDB_ID, "Not Available"),
];

/// Score/vote columns imputed with their median.
pub const NUMERIC_COLUMNS: [&str; 4] = [IMDB_SCORE, IMDB_VOTES, TMDB_SCORE, TMDB_POPULARITY];

/// Columns coerced to integers after imputation.
pub const INTEGER_COLUMNS: [&str; 3] = [RELEASE_YEAR, IMDB_VOTES, SEASONS];

/// Legacy pseudo-list columns (`"['a', 'b']"`).
pub const LIST_COLUMNS: [&str; 2] = [GENRES, PRODUCTION_COUNTRIES];

/// Content type of a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TitleKind {
    Movie,
    Show,
}

impl TitleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TitleKind::Movie => "MOVIE",
            TitleKind::Show => "SHOW",
        }
    }

    /// Lenient parse for user input: surrounding blanks and case are ignored.
    pub fn parse_loose(s: &str) -> Result<Self, String> {
        s.trim().to_ascii_uppercase().parse()
    }
}

impl fmt::Display for TitleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact parse of a dataset value; only `MOVIE` and `SHOW` are accepted, the
/// same strings the cleaner and the catalog filter compare against.
impl FromStr for TitleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MOVIE" => Ok(TitleKind::Movie),
            "SHOW" => Ok(TitleKind::Show),
            other => Err(format!("unknown title type '{}'", other)),
        }
    }
}
