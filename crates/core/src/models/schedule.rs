use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::block::AvailabilityBlock;

/// Formats the date-key a day is stored under, e.g. `"2024-06-12"`.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Midnight at the start of `date`.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Availability blocks keyed by calendar day.
///
/// Serializes as a JSON object whose keys are date-keys in `YYYY-MM-DD`
/// form. Each day's list is kept in ascending start order by the widget;
/// a day whose last block was deleted keeps an empty entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    days: BTreeMap<NaiveDate, Vec<AvailabilityBlock>>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blocks stored for `date`, or an empty slice when the day has no entry.
    pub fn blocks_for(&self, date: NaiveDate) -> &[AvailabilityBlock] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Replaces the whole entry for `date`.
    pub fn set_day(&mut self, date: NaiveDate, blocks: Vec<AvailabilityBlock>) {
        self.days.insert(date, blocks);
    }

    pub fn contains_day(&self, date: NaiveDate) -> bool {
        self.days.contains_key(&date)
    }

    pub fn find_block(&self, date: NaiveDate, id: &str) -> Option<&AvailabilityBlock> {
        self.blocks_for(date).iter().find(|block| block.id == id)
    }

    pub fn days(&self) -> impl Iterator<Item = (&NaiveDate, &Vec<AvailabilityBlock>)> {
        self.days.iter()
    }

    /// Number of day entries, including empty ones.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl From<BTreeMap<NaiveDate, Vec<AvailabilityBlock>>> for Schedule {
    fn from(days: BTreeMap<NaiveDate, Vec<AvailabilityBlock>>) -> Self {
        Self { days }
    }
}

/// Sorts blocks by ascending start time, keeping the relative order of
/// blocks that start together.
pub fn sort_by_start(blocks: &mut [AvailabilityBlock]) {
    blocks.sort_by_key(|block| block.start_time);
}
