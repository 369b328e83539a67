//! Conversion between vertical timeline offsets and times of day.
//!
//! The timeline is a fixed 60 pixels per hour. The renderer and the drag
//! handler both go through this module so a block drawn while dragging lands
//! exactly where the committed block is drawn afterwards.

use availability_core::models::{AvailabilityBlock, start_of_day};
use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Height of one hour row in pixels.
pub const HOUR_HEIGHT: f64 = 60.0;

pub const HOURS_PER_DAY: u32 = 24;

/// Full height of the rendered day.
pub const TIMELINE_HEIGHT: f64 = HOUR_HEIGHT * HOURS_PER_DAY as f64;

/// Maps pointer offsets on one day's timeline to times on that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeline {
    date: NaiveDate,
    time_interval: u32,
}

impl Timeline {
    pub fn new(date: NaiveDate, time_interval: u32) -> Self {
        Self {
            date,
            time_interval: time_interval.max(1),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time_interval(&self) -> u32 {
        self.time_interval
    }

    /// Converts a vertical offset into a time on the viewed day.
    ///
    /// Whole hours are taken as-is and the remaining minutes are rounded to
    /// the nearest multiple of the time interval. Offsets outside the drawn
    /// day are clamped to it, so the result lies between midnight and the
    /// following midnight inclusive.
    pub fn y_to_time(&self, y: f64) -> NaiveDateTime {
        let y = if y.is_finite() {
            y.clamp(0.0, TIMELINE_HEIGHT)
        } else {
            0.0
        };

        let total_minutes = y / HOUR_HEIGHT * 60.0;
        let hours = (total_minutes / 60.0).floor();
        let interval = f64::from(self.time_interval);
        let minutes = ((total_minutes % 60.0) / interval).round() * interval;

        // Rounding to a long interval can overshoot the end of the day.
        let day_minutes = (hours * 60.0 + minutes).min(f64::from(HOURS_PER_DAY * 60));

        start_of_day(self.date) + Duration::minutes(day_minutes as i64)
    }
}

/// Vertical offset of a time of day, measured from midnight of its own date.
pub fn time_to_y(time: NaiveDateTime) -> f64 {
    offset_from(start_of_day(time.date()), time)
}

/// Top and bottom offsets of a block.
///
/// Both ends are measured from midnight of the day the block starts on, so
/// a block running until the following midnight reaches the bottom of the
/// timeline instead of wrapping to the top.
pub fn block_extent(block: &AvailabilityBlock) -> (f64, f64) {
    let base = start_of_day(block.start_time.date());
    (time_to_y(block.start_time), offset_from(base, block.end_time))
}

fn offset_from(base: NaiveDateTime, time: NaiveDateTime) -> f64 {
    let minutes = (time - base).num_seconds() as f64 / 60.0;
    minutes / 60.0 * HOUR_HEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use rstest::rstest;

    fn wednesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 12).unwrap()
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        wednesday().and_time(NaiveTime::from_hms_opt(h, m, 0).unwrap())
    }

    #[rstest]
    #[case(0.0, 30, at(0, 0))]
    #[case(120.0, 30, at(2, 0))]
    #[case(150.0, 30, at(2, 30))]
    #[case(134.0, 30, at(2, 0))]
    #[case(136.0, 30, at(2, 30))]
    #[case(170.0, 30, at(3, 0))]
    #[case(127.0, 15, at(2, 0))]
    #[case(128.0, 15, at(2, 15))]
    #[case(601.0, 20, at(10, 0))]
    fn test_y_to_time_rounds_to_interval(
        #[case] y: f64,
        #[case] interval: u32,
        #[case] expected: NaiveDateTime,
    ) {
        let timeline = Timeline::new(wednesday(), interval);
        assert_eq!(timeline.y_to_time(y), expected);
    }

    #[test]
    fn test_y_to_time_clamps_to_day() {
        let timeline = Timeline::new(wednesday(), 30);

        assert_eq!(timeline.y_to_time(-45.0), at(0, 0));
        assert_eq!(timeline.y_to_time(f64::NAN), at(0, 0));
        assert_eq!(timeline.y_to_time(5000.0), at(0, 0) + Duration::days(1));

        let coarse = Timeline::new(wednesday(), 90);
        assert_eq!(coarse.y_to_time(1439.0), at(0, 0) + Duration::days(1));
    }

    #[rstest]
    #[case(90, 1439.0)]
    #[case(90, 1420.0)]
    #[case(120, 1439.0)]
    #[case(300, 1400.0)]
    fn test_y_to_time_long_interval_stays_in_day(#[case] interval: u32, #[case] y: f64) {
        let timeline = Timeline::new(wednesday(), interval);
        let end_of_day = at(0, 0) + Duration::days(1);

        assert!(timeline.y_to_time(y) <= end_of_day);
    }

    #[test]
    fn test_time_to_y() {
        assert_eq!(time_to_y(at(0, 0)), 0.0);
        assert_eq!(time_to_y(at(9, 30)), 570.0);
        assert_eq!(time_to_y(at(23, 45)), 1425.0);
    }

    #[test]
    fn test_block_extent_reaches_bottom_at_midnight() {
        let block = AvailabilityBlock::new(at(23, 0), at(0, 0) + Duration::days(1), 30);

        assert_eq!(block_extent(&block), (1380.0, TIMELINE_HEIGHT));
    }
}
