#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use availability_core::models::{AvailabilityBlock, Schedule};
use availability_widget::{AvailabilityCalendar, CalendarProps, FnObserver};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

pub type Updates = Rc<RefCell<Vec<Schedule>>>;
pub type RecordingCalendar = AvailabilityCalendar<FnObserver<Box<dyn FnMut(&Schedule)>>>;

/// 2024-06-12, a Wednesday
pub fn wednesday() -> NaiveDate {
    day(2024, 6, 12)
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn at(date: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
    date.and_time(NaiveTime::from_hms_opt(h, m, 0).expect("valid time"))
}

pub fn block(id: &str, date: NaiveDate, start: (u32, u32), end: (u32, u32), slot: u32) -> AvailabilityBlock {
    AvailabilityBlock {
        id: id.to_string(),
        start_time: at(date, start.0, start.1),
        end_time: at(date, end.0, end.1),
        slot_duration_minutes: slot,
    }
}

/// Builds a calendar whose observer records every schedule it is handed.
pub fn recording_calendar(props: CalendarProps) -> (RecordingCalendar, Updates) {
    let updates: Updates = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&updates);
    let observer: Box<dyn FnMut(&Schedule)> = Box::new(move |schedule: &Schedule| {
        sink.borrow_mut().push(schedule.clone());
    });

    let calendar = AvailabilityCalendar::new(props, FnObserver(observer))
        .expect("Failed to mount calendar");
    (calendar, updates)
}
