//! Application constants and configuration

pub const APP_NAME: &str = "Periodic Table";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Bundled element dataset
pub const EMBEDDED_DATASET: &str = include_str!("../assets/periodic_table.json");

/// Periods
pub const GRID_ROWS: usize = 7;
/// Groups
pub const GRID_COLS: usize = 18;

/// Footnote-row anchors kept in the main grid
pub const LANTHANUM: u32 = 57;
pub const ACTINIUM: u32 = 89;

/// Blank spacers before the first tile of a footnote row
pub const SERIES_LEADING_SPACERS: usize = 2;
