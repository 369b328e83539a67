//! # Schedule Store
//!
//! Holds the widget's copy of the schedule. Every committing change goes
//! through [`ScheduleStore::update_day`] or [`ScheduleStore::replace`], and
//! both hand the complete updated mapping to the host's observer before
//! returning. The host owns persistence; the store never retries or rolls
//! back.

use availability_core::models::{AvailabilityBlock, Schedule, date_key};
use chrono::NaiveDate;
use tracing::info;

/// Receives the full schedule after every committed change.
pub trait ScheduleObserver {
    fn on_schedule_update(&mut self, schedule: &Schedule);
}

/// Adapts a closure into a [`ScheduleObserver`].
///
/// # Example
///
/// ```
/// use availability_core::models::Schedule;
/// use availability_widget::store::{FnObserver, ScheduleStore};
///
/// let mut updates = 0;
/// let mut store = ScheduleStore::new(Schedule::new(), FnObserver(|_: &Schedule| updates += 1));
/// store.replace(Schedule::new());
/// drop(store);
/// assert_eq!(updates, 1);
/// ```
pub struct FnObserver<F>(pub F);

impl<F> ScheduleObserver for FnObserver<F>
where
    F: FnMut(&Schedule),
{
    fn on_schedule_update(&mut self, schedule: &Schedule) {
        (self.0)(schedule)
    }
}

pub struct ScheduleStore<O> {
    schedule: Schedule,
    observer: O,
}

impl<O: ScheduleObserver> ScheduleStore<O> {
    /// Seeds the store. Seeding does not notify the observer.
    pub fn new(initial: Schedule, observer: O) -> Self {
        Self {
            schedule: initial,
            observer,
        }
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn blocks_for(&self, date: NaiveDate) -> &[AvailabilityBlock] {
        self.schedule.blocks_for(date)
    }

    /// Replaces one day's block list and notifies the observer.
    pub fn update_day(&mut self, date: NaiveDate, blocks: Vec<AvailabilityBlock>) {
        info!(day = %date_key(date), blocks = blocks.len(), "Updating day schedule");
        self.schedule.set_day(date, blocks);
        self.notify();
    }

    /// Swaps in a whole new mapping and notifies the observer once.
    pub fn replace(&mut self, schedule: Schedule) {
        info!(days = schedule.len(), "Replacing schedule");
        self.schedule = schedule;
        self.notify();
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    fn notify(&mut self) {
        self.observer.on_schedule_update(&self.schedule);
    }
}
