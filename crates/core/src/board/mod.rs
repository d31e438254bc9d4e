//! Appointment board: slot axis, placement grid, time indicator, view state

pub mod grid;
pub mod indicator;
pub mod ports;
pub mod service;
pub mod slots;
pub mod view;

pub use grid::{
    build_grid, BoardGrid, Cell, Column, NewAppointmentTarget, Placement, ServiceRef, Unplaced,
    UnplacedReason,
};
pub use indicator::BoardGeometry;
pub use service::BoardService;
pub use slots::{day_slots, display_12h, slot_index, slot_span, TimeSlot};
pub use view::{BoardData, BoardSnapshot, BoardView, CellSummary};
