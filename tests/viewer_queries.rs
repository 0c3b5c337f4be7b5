mod common;

use netflix_insights::data::{CleaningPipeline, DataLoader};
use netflix_insights::viewer::{Catalog, RankKey, ViewerError};
use netflix_insights::TitleKind;
use std::path::PathBuf;
use tempfile::TempDir;

fn cleaned_fixture(dir: &TempDir) -> PathBuf {
    let input = common::write_raw(dir.path());
    let output = dir.path().join("cleaned_netflix.csv");
    CleaningPipeline::new(common::YEAR)
        .run_files(&input, &output, &dir.path().join("cleaning_log.txt"))
        .unwrap();
    output
}

#[test]
fn catalog_lists_both_kinds() {
    let dir = TempDir::new().unwrap();
    let catalog = Catalog::load(&cleaned_fixture(&dir)).unwrap();

    assert_eq!(catalog.len(), 5);
    assert_eq!(catalog.kinds(), vec![TitleKind::Movie, TitleKind::Show]);
}

#[test]
fn movie_subset_metrics() {
    let dir = TempDir::new().unwrap();
    let catalog = Catalog::load(&cleaned_fixture(&dir)).unwrap();
    let movies = catalog.filter(TitleKind::Movie).unwrap();

    let summary = movies.summary();
    assert_eq!(summary.count, 3);
    assert_eq!(summary.mean_imdb, Some(7.17));
    assert_eq!(summary.max_imdb, Some(8.0));

    let histogram: Vec<(i64, usize)> = movies.year_histogram().into_iter().collect();
    assert_eq!(histogram, vec![(2000, 1), (2015, 1), (2020, 1)]);
}

#[test]
fn top_n_returns_everything_when_short() {
    let dir = TempDir::new().unwrap();
    let catalog = Catalog::load(&cleaned_fixture(&dir)).unwrap();
    let movies = catalog.filter(TitleKind::Movie).unwrap();

    let top: Vec<&str> = movies
        .top_n(10, RankKey::ImdbScore, true)
        .iter()
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(top, vec!["Alpha", "Delta", "X"]);
}

#[test]
fn recommendations_share_genres_within_tolerance() {
    let dir = TempDir::new().unwrap();
    let catalog = Catalog::load(&cleaned_fixture(&dir)).unwrap();
    let movies = catalog.filter(TitleKind::Movie).unwrap();

    // X (6.5) is 1.5 away from Alpha (8.0); Delta (7.0) is exactly 1.0 away.
    let recs: Vec<&str> = movies
        .recommend("Alpha", 1.0, 5)
        .unwrap()
        .iter()
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(recs, vec!["Delta"]);

    let shows = catalog.filter(TitleKind::Show).unwrap();
    assert!(shows.recommend("Gamma", 1.0, 5).unwrap().is_empty());
    assert!(matches!(
        shows.recommend("Alpha", 1.0, 5),
        Err(ViewerError::UnknownTitle(_))
    ));
}

#[test]
fn export_keeps_cleaned_columns() {
    let dir = TempDir::new().unwrap();
    let catalog = Catalog::load(&cleaned_fixture(&dir)).unwrap();
    let shows = catalog.filter(TitleKind::Show).unwrap();

    let path = dir.path().join("exports").join("filtered_netflix_data.csv");
    shows.export_csv(&path).unwrap();

    let exported = DataLoader::load_csv(&path).unwrap();
    assert_eq!(exported.height(), 2);
    assert_eq!(
        DataLoader::get_columns(&exported),
        DataLoader::get_columns(catalog.dataframe())
    );
    assert_eq!(
        DataLoader::get_unique_values(&exported, "type"),
        vec!["SHOW".to_string()]
    );
}

#[test]
fn missing_dataset_is_reported() {
    let dir = TempDir::new().unwrap();
    let result = Catalog::load(&dir.path().join("cleaned_netflix.csv"));
    assert!(matches!(result, Err(ViewerError::MissingFile(_))));
}

#[test]
fn off_label_types_stay_out_of_every_subset() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("titles.csv");
    let raw = format!(
        "{}{}{}",
        common::RAW_TITLES,
        "tm7,Epsilon,Movie,Odd casing,2019,PG,80,['drama'],['US'],4,tt0000007,6.1,50,2.0,6.0\n",
        "tm8,Zeta,,No type at all,2012,PG,80,['drama'],['US'],,tt0000008,6.2,60,2.0,6.0\n"
    );
    std::fs::write(&input, raw).unwrap();
    let output = dir.path().join("cleaned_netflix.csv");
    CleaningPipeline::new(common::YEAR)
        .run_files(&input, &output, &dir.path().join("cleaning_log.txt"))
        .unwrap();

    let catalog = Catalog::load(&output).unwrap();
    assert_eq!(catalog.dataframe().height(), 7);
    assert_eq!(catalog.len(), 5);
    assert_eq!(catalog.kinds(), vec![TitleKind::Movie, TitleKind::Show]);

    let movies = catalog.filter(TitleKind::Movie).unwrap();
    assert!(movies.records().iter().all(|r| r.seasons == 0));
    assert!(movies.records().iter().all(|r| r.title != "Epsilon"));

    let path = dir.path().join("movies.csv");
    movies.export_csv(&path).unwrap();
    assert_eq!(
        DataLoader::load_csv(&path).unwrap().height(),
        movies.records().len()
    );
}
