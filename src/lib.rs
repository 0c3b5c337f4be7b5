//! Netflix Insights - titles cleaning pipeline & insights dashboard.
//!
//! - [`data`]: loads the raw titles CSV and runs the fixed cleaning sequence,
//!   producing the cleaned CSV and a cleaning report
//! - [`viewer`]: read-only queries (filter, summary, rankings,
//!   recommendations, year histogram) over the cleaned dataset
//! - [`gui`]: the interactive dashboard built on those queries
//!
//! # Example
//!
//! ```no_run
//! use netflix_insights::data::{CleaningPipeline, TitleKind};
//! use netflix_insights::viewer::Catalog;
//! use std::path::Path;
//!
//! let report = CleaningPipeline::default()
//!     .run_files(
//!         Path::new("titles.csv"),
//!         Path::new("cleaned_netflix.csv"),
//!         Path::new("cleaning_log.txt"),
//!     )
//!     .unwrap();
//! println!("{}", report.render());
//!
//! let catalog = Catalog::load(Path::new("cleaned_netflix.csv")).unwrap();
//! let shows = catalog.filter(TitleKind::Show).unwrap();
//! println!("{:?}", shows.summary());
//! ```

pub mod charts;
pub mod cli;
pub mod config;
pub mod data;
pub mod gui;
pub mod logging;
pub mod stats;
pub mod viewer;

pub use config::Config;
pub use data::{CleaningPipeline, CleaningReport, TitleKind};
pub use viewer::{Catalog, Subset, TitleRecord};
