//! The fixed 15-minute slot axis of the appointment board

use chrono::{NaiveTime, Timelike};
use salonlite_domain::constants::{DAY_END_HOUR, DAY_START_HOUR, SLOT_COUNT, SLOT_MINUTES};
use serde::Serialize;

/// One row of the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    pub index: usize,
    pub time: NaiveTime,
    /// 12-hour form, e.g. `6:00 AM`, `12:30 PM`
    pub display: String,
}

impl TimeSlot {
    /// `HH:MM`, the key service start times are matched against.
    pub fn key(&self) -> String {
        self.time.format("%H:%M").to_string()
    }

    pub fn is_hour_mark(&self) -> bool {
        self.time.minute() == 0
    }

    pub fn is_half_hour(&self) -> bool {
        self.time.minute() == 30
    }

    /// Row labels are only printed on the hour and half hour.
    pub fn shows_label(&self) -> bool {
        self.is_hour_mark() || self.is_half_hour()
    }
}

/// 06:00 through 17:45, 48 slots.
pub fn day_slots() -> Vec<TimeSlot> {
    (0..SLOT_COUNT)
        .filter_map(|index| {
            let minutes = DAY_START_HOUR * 60 + index as u32 * SLOT_MINUTES;
            let time = NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)?;
            Some(TimeSlot { index, time, display: display_12h(time) })
        })
        .collect()
}

/// `13:15` -> `1:15 PM`; noon stays `12:00 PM`.
pub fn display_12h(time: NaiveTime) -> String {
    let hour = time.hour();
    let shown = match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    let meridiem = if hour >= 12 { "PM" } else { "AM" };
    format!("{}:{:02} {}", shown, time.minute(), meridiem)
}

/// Row index of a start time, seconds discarded.
///
/// `None` when the time is not on a 15-minute boundary or falls outside
/// [06:00, 18:00).
pub fn slot_index(time: NaiveTime) -> Option<usize> {
    let minutes = minutes_since_open(time)?;
    if minutes % SLOT_MINUTES != 0 {
        return None;
    }
    Some((minutes / SLOT_MINUTES) as usize)
}

/// Row containing `time`, rounding down to the slot boundary.
pub fn slot_index_floor(time: NaiveTime) -> Option<usize> {
    minutes_since_open(time).map(|minutes| (minutes / SLOT_MINUTES) as usize)
}

/// Number of rows a service of `duration_minutes` covers (ceiling).
pub fn slot_span(duration_minutes: u32) -> usize {
    duration_minutes.div_ceil(SLOT_MINUTES) as usize
}

fn minutes_since_open(time: NaiveTime) -> Option<u32> {
    let minutes = time.hour() * 60 + time.minute();
    let open = DAY_START_HOUR * 60;
    let close = DAY_END_HOUR * 60;
    (open..close).contains(&minutes).then(|| minutes - open)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn axis_runs_from_six_to_quarter_to_six() {
        let slots = day_slots();
        assert_eq!(slots.len(), 48);
        assert_eq!(slots[0].key(), "06:00");
        assert_eq!(slots[0].display, "6:00 AM");
        assert_eq!(slots[24].display, "12:00 PM");
        assert_eq!(slots[47].key(), "17:45");
        assert_eq!(slots[47].display, "5:45 PM");
    }

    #[test]
    fn labels_only_on_hour_and_half_hour() {
        let labelled: Vec<_> = day_slots().into_iter().filter(TimeSlot::shows_label).collect();
        assert_eq!(labelled.len(), 24);
        assert!(labelled.iter().all(|s| s.time.minute() % 30 == 0));
    }

    #[test]
    fn span_is_ceiling_of_quarter_hours() {
        assert_eq!(slot_span(15), 1);
        assert_eq!(slot_span(30), 2);
        assert_eq!(slot_span(37), 3);
        assert_eq!(slot_span(0), 0);
        assert_eq!(slot_span(1), 1);
    }

    #[test]
    fn slot_index_requires_alignment_and_window() {
        assert_eq!(slot_index(at(6, 0)), Some(0));
        assert_eq!(slot_index(NaiveTime::from_hms_opt(9, 15, 42).unwrap()), Some(13));
        assert_eq!(slot_index(at(9, 10)), None);
        assert_eq!(slot_index(at(5, 45)), None);
        assert_eq!(slot_index(at(18, 0)), None);
        assert_eq!(slot_index_floor(at(9, 10)), Some(12));
    }
}
