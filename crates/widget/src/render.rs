//! # Timeline Renderer
//!
//! Turns widget state into plain layout values the host toolkit can paint:
//! hour rows, positioned block rectangles and the contents of both dialogs.
//! Nothing in here holds state.

use std::fmt;

use availability_core::models::{AvailabilityBlock, ResolvedTheme};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::dialogs::{WEEKDAY_LABELS, weekday_index};
use crate::geometry::{HOUR_HEIGHT, HOURS_PER_DAY, TIMELINE_HEIGHT, block_extent};

pub const COPY_BUTTON_LABEL: &str = "Copy Day's Schedule";
pub const EDIT_DIALOG_TITLE: &str = "Edit Availability";
pub const SLOT_DURATION_TITLE: &str = "Slot Duration";
pub const COPY_DIALOG_TITLE: &str = "Copy Today's Schedule To...";

/// One labelled hour of the timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourRow {
    pub hour: u32,
    pub label: String,
    pub top: f64,
    pub height: f64,
    pub line_color: String,
}

/// A block positioned on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockRect {
    pub id: String,
    pub top: f64,
    pub height: f64,
    /// e.g. `9:00 AM - 9:30 AM`
    pub time_label: String,
    /// e.g. `30 min slots`
    pub slots_label: String,
    /// Set for the block of a drag still in progress.
    pub provisional: bool,
    pub fill_color: String,
    pub border_color: String,
    pub text_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineLayout {
    pub total_height: f64,
    pub font_family: Option<String>,
    pub rows: Vec<HourRow>,
    pub blocks: Vec<BlockRect>,
}

/// A selectable button in one of the dialogs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleButton {
    pub label: String,
    pub value: u32,
    pub selected: bool,
    pub disabled: bool,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditDialogView {
    pub title: String,
    /// e.g. `From: 9:00 AM To: 9:30 AM`
    pub range_label: String,
    pub slot_title: String,
    pub slot_buttons: Vec<ToggleButton>,
    pub actions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyDialogView {
    pub title: String,
    pub day_buttons: Vec<ToggleButton>,
    pub apply_enabled: bool,
    pub actions: Vec<String>,
}

/// Everything the host needs to paint the widget for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarView<'a> {
    pub header: Option<&'a str>,
    pub copy_button_label: &'static str,
    pub timeline: TimelineLayout,
    pub edit_dialog: Option<EditDialogView>,
    pub copy_dialog: Option<CopyDialogView>,
    pub alert: Option<&'a str>,
    pub footer: Option<&'a str>,
}

/// Lays out the 24 hour rows and every block with a positive height.
///
/// The provisional block, if any, is drawn after the saved ones.
pub fn render_timeline(
    blocks: &[AvailabilityBlock],
    provisional: Option<&AvailabilityBlock>,
    theme: &ResolvedTheme,
) -> TimelineLayout {
    let rows = (0..HOURS_PER_DAY)
        .map(|hour| HourRow {
            hour,
            label: hour_label(hour),
            top: f64::from(hour) * HOUR_HEIGHT,
            height: HOUR_HEIGHT,
            line_color: theme.timeline_line_color.clone(),
        })
        .collect();

    let saved = blocks.iter().map(|block| (block, false));
    let drawing = provisional.into_iter().map(|block| (block, true));

    let blocks = saved
        .chain(drawing)
        .filter_map(|(block, provisional)| block_rect(block, provisional, theme))
        .collect();

    TimelineLayout {
        total_height: TIMELINE_HEIGHT,
        font_family: theme.font_family.clone(),
        rows,
        blocks,
    }
}

fn block_rect(block: &AvailabilityBlock, provisional: bool, theme: &ResolvedTheme) -> Option<BlockRect> {
    let (top, bottom) = block_extent(block);
    let height = (bottom - top).max(0.0);
    if height <= 0.0 {
        return None;
    }

    Some(BlockRect {
        id: block.id.clone(),
        top,
        height,
        time_label: format!(
            "{} - {}",
            clock_label(block.start_time),
            clock_label(block.end_time)
        ),
        slots_label: format!("{} min slots", block.slot_duration_minutes),
        provisional,
        fill_color: theme.availability_block_color.clone(),
        border_color: theme.primary_color.clone(),
        text_color: theme.primary_color.clone(),
    })
}

pub fn render_edit_dialog(
    block: &AvailabilityBlock,
    slot_duration_options: &[u32],
    theme: &ResolvedTheme,
) -> EditDialogView {
    let slot_buttons = slot_duration_options
        .iter()
        .map(|&minutes| ToggleButton {
            label: format!("{} min", minutes),
            value: minutes,
            selected: block.slot_duration_minutes == minutes,
            disabled: false,
            color: theme.primary_color.clone(),
        })
        .collect();

    EditDialogView {
        title: EDIT_DIALOG_TITLE.to_string(),
        range_label: format!(
            "From: {} To: {}",
            clock_label(block.start_time),
            clock_label(block.end_time)
        ),
        slot_title: SLOT_DURATION_TITLE.to_string(),
        slot_buttons,
        actions: vec!["Delete".to_string(), "Cancel".to_string(), "Save".to_string()],
    }
}

/// Weekday buttons for the copy dialog. The current date's weekday is
/// disabled.
pub fn render_copy_dialog(selected: &[u32], current_date: NaiveDate, theme: &ResolvedTheme) -> CopyDialogView {
    let today = weekday_index(current_date);
    let day_buttons = (0u32..)
        .zip(WEEKDAY_LABELS)
        .map(|(weekday, label)| ToggleButton {
            label: label.to_string(),
            value: weekday,
            selected: selected.contains(&weekday),
            disabled: weekday == today,
            color: theme.primary_color.clone(),
        })
        .collect();

    CopyDialogView {
        title: COPY_DIALOG_TITLE.to_string(),
        day_buttons,
        apply_enabled: !selected.is_empty(),
        actions: vec!["Cancel".to_string(), "Apply".to_string()],
    }
}

/// `12 AM`, `1 AM`, ... `11 PM`
pub fn hour_label(hour: u32) -> String {
    let time = NaiveTime::MIN + Duration::hours(i64::from(hour % HOURS_PER_DAY));
    time.format("%-I %p").to_string()
}

/// `9:00 AM`
pub fn clock_label(time: NaiveDateTime) -> String {
    time.format("%-I:%M %p").to_string()
}

impl fmt::Display for TimelineLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let bottom = row.top + row.height;
            let marks: Vec<&str> = self
                .blocks
                .iter()
                .filter(|block| block.top < bottom && block.top + block.height > row.top)
                .map(|block| if block.provisional { "~" } else { "#" })
                .collect();
            writeln!(f, "{:>5} | {}", row.label, marks.concat())?;
        }
        for block in &self.blocks {
            writeln!(f, "{} ({}) [{}]", block.time_label, block.slots_label, block.id)?;
        }
        Ok(())
    }
}
