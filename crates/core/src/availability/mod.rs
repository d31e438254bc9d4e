//! Technician availability: override resolution, month calendar, writes

pub mod calendar;
pub mod ports;
pub mod resolver;
pub mod service;

pub use calendar::{shift_month, CalendarDay, MonthCalendar, ScheduleCalendarView};
pub use resolver::{latest_covering, resolve, TechSchedule};
pub use service::ScheduleService;
