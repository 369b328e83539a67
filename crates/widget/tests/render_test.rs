mod common;

use availability_core::models::{Schedule, Theme};
use availability_widget::{
    CalendarProps,
    config::WidgetConfig,
    geometry::{HOUR_HEIGHT, TIMELINE_HEIGHT},
    render::{render_timeline, COPY_DIALOG_TITLE, EDIT_DIALOG_TITLE},
};
use pretty_assertions::assert_eq;

use common::{block, day, recording_calendar, wednesday};

#[test]
fn test_timeline_has_24_hour_rows() {
    let layout = render_timeline(&[], None, &Theme::default().resolve());

    assert_eq!(layout.rows.len(), 24);
    assert_eq!(layout.rows[0].label, "12 AM");
    assert_eq!(layout.rows[13].label, "1 PM");
    assert_eq!(layout.rows[23].top, 23.0 * HOUR_HEIGHT);
    assert_eq!(layout.total_height, TIMELINE_HEIGHT);
    assert!(layout.rows.iter().all(|row| row.line_color == "#e0e0e0"));
    assert!(layout.blocks.is_empty());
}

#[test]
fn test_blocks_are_positioned_by_time() {
    let blocks = [block("a", wednesday(), (9, 0), (9, 30), 30)];
    let layout = render_timeline(&blocks, None, &Theme::default().resolve());

    let rect = &layout.blocks[0];
    assert_eq!(rect.id, "a");
    assert_eq!(rect.top, 540.0);
    assert_eq!(rect.height, 30.0);
    assert_eq!(rect.time_label, "9:00 AM - 9:30 AM");
    assert_eq!(rect.slots_label, "30 min slots");
    assert_eq!(rect.fill_color, "rgba(98, 0, 238, 0.2)");
    assert_eq!(rect.border_color, "#6200ee");
    assert!(!rect.provisional);
}

#[test]
fn test_non_positive_heights_are_not_drawn() {
    let blocks = [
        block("empty", wednesday(), (9, 0), (9, 0), 30),
        block("reversed", wednesday(), (11, 0), (10, 0), 30),
        block("kept", wednesday(), (12, 0), (12, 15), 15),
    ];
    let layout = render_timeline(&blocks, None, &Theme::default().resolve());

    let ids: Vec<&str> = layout.blocks.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["kept"]);
    assert!(layout.blocks.iter().all(|b| b.height > 0.0));
}

#[test]
fn test_provisional_block_follows_drag() {
    let (mut calendar, _updates) = recording_calendar(CalendarProps::new(wednesday()));

    calendar.drag_start(120.0);
    assert!(calendar.view().timeline.blocks.is_empty());

    calendar.drag_move(240.0);
    let view = calendar.view();
    let rect = &view.timeline.blocks[0];
    assert!(rect.provisional);
    assert_eq!((rect.top, rect.height), (120.0, 120.0));
    assert_eq!(rect.time_label, "2:00 AM - 4:00 AM");
}

#[test]
fn test_theme_overrides_reach_layout() {
    let config = WidgetConfig {
        theme: Theme {
            primary_color: Some("#123456".to_string()),
            font_family: Some("Inter".to_string()),
            ..Theme::default()
        },
        ..WidgetConfig::default()
    };
    let mut schedule = Schedule::new();
    schedule.set_day(wednesday(), vec![block("a", wednesday(), (9, 0), (10, 0), 30)]);
    let (calendar, _updates) = recording_calendar(
        CalendarProps::new(wednesday())
            .with_config(config)
            .with_initial_schedule(schedule)
            .with_header("Availability")
            .with_footer("Changes are saved automatically"),
    );

    let view = calendar.view();
    assert_eq!(view.header, Some("Availability"));
    assert_eq!(view.footer, Some("Changes are saved automatically"));
    assert_eq!(view.copy_button_label, "Copy Day's Schedule");
    assert_eq!(view.timeline.font_family.as_deref(), Some("Inter"));
    assert_eq!(view.timeline.blocks[0].text_color, "#123456");
    assert_eq!(view.timeline.blocks[0].fill_color, "rgba(98, 0, 238, 0.2)");
}

#[test]
fn test_edit_dialog_view() {
    let mut schedule = Schedule::new();
    schedule.set_day(wednesday(), vec![block("a", wednesday(), (13, 0), (14, 30), 45)]);
    let (mut calendar, _updates) =
        recording_calendar(CalendarProps::new(wednesday()).with_initial_schedule(schedule));

    assert!(calendar.view().edit_dialog.is_none());
    calendar.tap_block("a").expect("a is saved");

    let dialog = calendar.view().edit_dialog.expect("edit dialog should render");
    assert_eq!(dialog.title, EDIT_DIALOG_TITLE);
    assert_eq!(dialog.range_label, "From: 1:00 PM To: 2:30 PM");
    let labels: Vec<&str> = dialog.slot_buttons.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["15 min", "20 min", "30 min", "45 min", "60 min"]);
    let selected: Vec<u32> = dialog
        .slot_buttons
        .iter()
        .filter(|b| b.selected)
        .map(|b| b.value)
        .collect();
    assert_eq!(selected, vec![45]);
    assert_eq!(dialog.actions, vec!["Delete", "Cancel", "Save"]);
}

#[test]
fn test_copy_dialog_view() {
    let (mut calendar, _updates) = recording_calendar(CalendarProps::new(wednesday()));

    assert!(calendar.view().copy_dialog.is_none());
    calendar.open_copy_dialog();
    let dialog = calendar.view().copy_dialog.expect("copy dialog should render");
    assert_eq!(dialog.title, COPY_DIALOG_TITLE);
    assert!(!dialog.apply_enabled);
    let disabled: Vec<&str> = dialog
        .day_buttons
        .iter()
        .filter(|b| b.disabled)
        .map(|b| b.label.as_str())
        .collect();
    assert_eq!(disabled, vec!["Wed"]);

    calendar.toggle_copy_day(2).expect("Tuesday is selectable");
    let dialog = calendar.view().copy_dialog.expect("copy dialog should render");
    assert!(dialog.apply_enabled);
    assert!(dialog.day_buttons[2].selected);
}

#[test]
fn test_text_rendering_marks_block_hours() {
    let blocks = [block("a", day(2024, 6, 12), (9, 0), (10, 30), 30)];
    let text = render_timeline(&blocks, None, &Theme::default().resolve()).to_string();

    assert!(text.contains(" 9 AM | #"));
    assert!(text.contains("10 AM | #"));
    assert!(text.contains("11 AM | \n"));
    assert!(text.contains("9:00 AM - 10:30 AM (30 min slots) [a]"));
}
