//! Reporting dashboard: period presets and display formatting

pub mod ports;
pub mod range;
pub mod service;
pub mod summary;

pub use range::{DateRange, RangePreset};
pub use service::{DashboardService, DashboardView};
pub use summary::{DashboardDisplay, RankedService, StatLine, StatusLine, WeekdayTotal};
