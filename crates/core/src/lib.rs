//! # SalonLite Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The appointment board grid and time indicator
//! - Availability resolution and the month calendar
//! - Dashboard display, directory search and form validation
//! - Port/adapter interfaces (traits) and the services that drive them
//!
//! ## Architecture Principles
//! - Only depends on `salonlite-common` and `salonlite-domain`
//! - No HTTP or platform code
//! - All external dependencies via traits
//! - View state is plain data recomputed from fetched records

pub mod availability;
pub mod board;
pub mod dashboard;
pub mod directory;
pub mod forms;
pub mod freshness;
pub mod session;

// Re-export specific items to avoid ambiguity
pub use availability::ports::ScheduleRepository;
pub use availability::{ScheduleCalendarView, ScheduleService, TechSchedule};
pub use board::ports::AppointmentRepository;
pub use board::{build_grid, BoardGeometry, BoardGrid, BoardService, BoardView};
pub use dashboard::ports::DashboardSource;
pub use dashboard::{DashboardDisplay, DashboardService, DashboardView, RangePreset};
pub use directory::ports::{CustomerRepository, SavedServiceRepository, TechnicianRepository};
pub use directory::{DirectoryService, DirectoryView, HistoryView};
pub use freshness::{ApplyOutcome, LoadState, RequestGeneration, RequestTicket};
pub use session::{SessionGateway, SessionService};
