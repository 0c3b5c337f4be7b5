//! Stats module - column medians and score aggregates

mod calculator;

pub use calculator::{ColumnMedians, StatsCalculator};
