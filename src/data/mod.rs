//! Data module - CSV loading and the cleaning pipeline

mod loader;
mod normalize;
mod processor;
mod report;
pub mod schema;

pub use loader::{DataLoader, LoaderError};
pub use normalize::normalize_list_field;
pub use processor::{CleanError, CleanedDataset, CleaningPipeline};
pub use report::{CleaningReport, Imputation, REPORT_HEADER};
pub use schema::TitleKind;
