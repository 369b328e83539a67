use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::schedule::start_of_day;

/// A contiguous range of a day during which the schedule owner is available.
///
/// `slot_duration_minutes` is the granularity bookable slots are divided
/// into. It is a display attribute and is not checked against the span of
/// the block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityBlock {
    pub id: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub slot_duration_minutes: u32,
}

impl AvailabilityBlock {
    /// Creates a block with a freshly generated id.
    pub fn new(
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        slot_duration_minutes: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            start_time,
            end_time,
            slot_duration_minutes,
        }
    }

    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }

    /// True when the block spans no time at all.
    pub fn is_empty(&self) -> bool {
        self.start_time == self.end_time
    }

    /// Returns the block with start and end swapped if end precedes start.
    pub fn normalized(mut self) -> Self {
        if self.end_time < self.start_time {
            std::mem::swap(&mut self.start_time, &mut self.end_time);
        }
        self
    }

    /// Moves the block onto `date`, keeping its time of day.
    ///
    /// Both ends are measured from midnight of the day the block starts on,
    /// so a block ending at 24:00 still ends at the following midnight of
    /// the target date. Id and slot duration are kept as they are.
    pub fn retimed_onto(&self, date: NaiveDate) -> Self {
        let source_midnight = start_of_day(self.start_time.date());
        let target_midnight = start_of_day(date);

        Self {
            id: self.id.clone(),
            start_time: target_midnight + (self.start_time - source_midnight),
            end_time: target_midnight + (self.end_time - source_midnight),
            slot_duration_minutes: self.slot_duration_minutes,
        }
    }
}
