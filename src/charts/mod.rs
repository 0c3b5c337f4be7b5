//! Charts module - Chart rendering

mod trend;

pub use trend::{TrendPlotter, ACCENT_COLOR};
