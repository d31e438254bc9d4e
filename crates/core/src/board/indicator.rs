//! Current-time indicator and initial scroll position

use chrono::{NaiveTime, Timelike};
use salonlite_domain::constants::{DAY_END_HOUR, DAY_START_HOUR, SLOT_MINUTES};
use salonlite_domain::BoardConfig;

use super::slots::slot_index_floor;

/// Pixel geometry of the rendered board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    pub row_height_px: u32,
    pub header_height_px: u32,
}

impl Default for BoardGeometry {
    fn default() -> Self {
        BoardConfig::default().into()
    }
}

impl From<BoardConfig> for BoardGeometry {
    fn from(config: BoardConfig) -> Self {
        Self { row_height_px: config.row_height_px, header_height_px: config.header_height_px }
    }
}

impl BoardGeometry {
    /// Vertical offset of the "now" line, or `None` outside [06:00, 18:00).
    pub fn current_time_offset(&self, now: NaiveTime) -> Option<f64> {
        if now.hour() < DAY_START_HOUR || now.hour() >= DAY_END_HOUR {
            return None;
        }
        let minutes = f64::from((now.hour() - DAY_START_HOUR) * 60 + now.minute())
            + f64::from(now.second()) / 60.0;
        Some(
            minutes / f64::from(SLOT_MINUTES) * f64::from(self.row_height_px)
                + f64::from(self.header_height_px),
        )
    }

    /// Scroll position that brings the current slot to the top.
    pub fn scroll_offset(&self, now: NaiveTime) -> Option<u32> {
        slot_index_floor(now).map(|slot| slot as u32 * self.row_height_px)
    }

    /// Row the indicator falls in, for text rendering.
    pub fn current_slot(&self, now: NaiveTime) -> Option<usize> {
        slot_index_floor(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn absent_outside_working_window() {
        let geometry = BoardGeometry::default();
        assert_eq!(geometry.current_time_offset(at(5, 59, 59)), None);
        assert_eq!(geometry.current_time_offset(at(18, 0, 0)), None);
        assert_eq!(geometry.current_time_offset(at(23, 10, 0)), None);
        assert_eq!(geometry.scroll_offset(at(19, 0, 0)), None);
    }

    #[test]
    fn offset_matches_row_geometry() {
        let geometry = BoardGeometry::default();
        assert_eq!(geometry.current_time_offset(at(6, 0, 0)), Some(45.0));
        assert_eq!(geometry.current_time_offset(at(6, 15, 0)), Some(66.0));
        assert_eq!(geometry.current_time_offset(at(7, 0, 0)), Some(45.0 + 4.0 * 21.0));
    }

    #[test]
    fn offset_increases_through_the_day() {
        let geometry = BoardGeometry::default();
        let mut previous = f64::MIN;
        for minute in 0..(12 * 60) {
            for second in [0, 30] {
                let now = at(6 + minute / 60, minute % 60, second);
                let offset = geometry.current_time_offset(now).unwrap();
                assert!(offset > previous, "offset must grow at {now}");
                previous = offset;
            }
        }
    }

    #[test]
    fn scroll_rounds_down_to_slot() {
        let geometry = BoardGeometry::default();
        assert_eq!(geometry.scroll_offset(at(9, 14, 0)), Some(12 * 21));
        assert_eq!(geometry.current_slot(at(17, 59, 0)), Some(47));
    }
}
