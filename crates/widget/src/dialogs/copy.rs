use std::collections::BTreeSet;

use availability_core::{
    errors::{CalendarError, CalendarResult},
    models::{Schedule, date_key},
};
use chrono::{Datelike, Duration, NaiveDate};
use tracing::{debug, info};

/// Button labels for weekdays, indexed from Sunday.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Weekday of `date` counted from Sunday (0) to Saturday (6).
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// The date in the same Sunday-started week as `current` that falls on
/// `weekday`.
pub fn target_date(current: NaiveDate, weekday: u32) -> NaiveDate {
    current - Duration::days(i64::from(weekday_index(current))) + Duration::days(i64::from(weekday))
}

#[derive(Debug, Default)]
pub struct CopyDialog {
    visible: bool,
    selected: BTreeSet<u32>,
}

impl CopyDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.visible = true;
    }

    /// Hides the dialog. The weekday selection survives until applied.
    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn is_open(&self) -> bool {
        self.visible
    }

    pub fn is_selected(&self, weekday: u32) -> bool {
        self.selected.contains(&weekday)
    }

    /// Selected weekdays in ascending order.
    pub fn selected_days(&self) -> Vec<u32> {
        self.selected.iter().copied().collect()
    }

    pub fn can_apply(&self) -> bool {
        !self.selected.is_empty()
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Selects or deselects `weekday`.
    ///
    /// # Errors
    ///
    /// * `CalendarError::Validation` - `weekday` is not in 0..=6 or is the
    ///   weekday of `current`
    pub fn toggle_day(&mut self, weekday: u32, current: NaiveDate) -> CalendarResult<()> {
        if weekday > 6 {
            return Err(CalendarError::Validation(format!(
                "Weekday must be between 0 and 6, got {}",
                weekday
            )));
        }
        if weekday == weekday_index(current) {
            return Err(CalendarError::Validation(
                "Cannot copy a day's schedule onto itself".to_string(),
            ));
        }

        if !self.selected.remove(&weekday) {
            self.selected.insert(weekday);
        }
        debug!(weekday, selected = ?self.selected, "Toggled copy target");
        Ok(())
    }

    /// Builds the schedule with `current`'s blocks copied onto every
    /// selected weekday of the same week, then closes the dialog and clears
    /// the selection.
    ///
    /// Target days are overwritten, not merged. Block ids are carried over
    /// unchanged.
    ///
    /// # Errors
    ///
    /// * `CalendarError::Validation` - No weekday is selected
    /// * `CalendarError::NothingToCopy` - `current` has no blocks
    ///
    /// The dialog stays open on error.
    pub fn apply(&mut self, schedule: &Schedule, current: NaiveDate) -> CalendarResult<Schedule> {
        if self.selected.is_empty() {
            return Err(CalendarError::Validation(
                "Select at least one day to copy to".to_string(),
            ));
        }

        let source = schedule.blocks_for(current);
        if source.is_empty() {
            return Err(CalendarError::NothingToCopy);
        }

        let mut updated = schedule.clone();
        for &weekday in &self.selected {
            let target = target_date(current, weekday);
            let blocks = source.iter().map(|block| block.retimed_onto(target)).collect();
            info!(from = %date_key(current), to = %date_key(target), "Copying day schedule");
            updated.set_day(target, blocks);
        }

        self.visible = false;
        self.selected.clear();
        Ok(updated)
    }
}
