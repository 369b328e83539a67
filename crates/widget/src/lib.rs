//! # Availability Widget
//!
//! A headless day-view calendar for drawing and editing availability blocks.
//! The widget owns its interactive state and produces plain layout values;
//! the host toolkit paints them and feeds pointer and button events back in.
//!
//! ## Architecture
//!
//! - **Calendar**: The widget instance and its interaction methods
//! - **Store**: The schedule mapping and the observer notified on every commit
//! - **Gesture**: Drag-to-create state machine
//! - **Dialogs**: Edit and copy dialog state
//! - **Geometry**: Pixel and time-of-day conversion shared by drag and render
//! - **Render**: Pure layout of the timeline and dialogs
//! - **Config**: Slot options, rounding interval and theme

/// Widget instance and event dispatch
pub mod calendar;
/// Configuration with defaults and environment loading
pub mod config;
/// Edit and copy dialog state
pub mod dialogs;
/// Offset and time-of-day conversion
pub mod geometry;
/// Drag-to-create gesture handling
pub mod gesture;
/// Layout of the timeline and dialogs
pub mod render;
/// Schedule state and change notification
pub mod store;

pub mod mock;

pub use calendar::{AvailabilityCalendar, CalendarEvent, CalendarProps};
pub use store::{FnObserver, ScheduleObserver};
