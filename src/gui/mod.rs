//! GUI module - User interface components

mod app;
mod filter_panel;
mod poster_grid;

pub use app::{launch, DashboardApp};
pub use filter_panel::{FilterPanel, FilterPanelAction};
pub use poster_grid::PosterGrid;
