//! # Availability Calendar
//!
//! The widget instance. It owns all interactive state for one day view and
//! exposes one method per user interaction. Each method runs to completion,
//! including the commit and the observer call, before it returns, so the
//! schedule the host sees always reflects the last finished interaction.
//!
//! ## Interaction flow
//!
//! 1. `drag_start` / `drag_move` / `drag_end` draw a provisional block
//! 2. Releasing a non-empty drag opens the edit dialog on that block
//! 3. `save_block` / `delete_block` commit the displayed day and notify the observer
//! 4. `apply_copy` overwrites the selected weekdays of the same week and notifies once
//!
//! While a dialog is open the timeline does not react to drags.

use availability_core::{
    errors::{CalendarError, CalendarResult},
    models::{AvailabilityBlock, ResolvedTheme, Schedule, date_key},
};
use chrono::NaiveDate;
use eyre::{Result, WrapErr};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::config::WidgetConfig;
use crate::dialogs::{CopyDialog, EditDialog};
use crate::geometry::Timeline;
use crate::gesture::DragGesture;
use crate::render::{self, CalendarView};
use crate::store::{ScheduleObserver, ScheduleStore};

/// Inputs a host supplies when mounting the widget.
#[derive(Debug, Clone)]
pub struct CalendarProps {
    /// Day whose schedule is displayed and edited
    pub current_date: NaiveDate,

    /// Schedule to seed the widget with. Only read at construction.
    pub initial_schedule: Option<Schedule>,

    pub config: WidgetConfig,

    /// Opaque fragment shown above the timeline
    pub header: Option<String>,

    /// Opaque fragment shown below the timeline
    pub footer: Option<String>,
}

impl CalendarProps {
    pub fn new(current_date: NaiveDate) -> Self {
        Self {
            current_date,
            initial_schedule: None,
            config: WidgetConfig::default(),
            header: None,
            footer: None,
        }
    }

    pub fn with_initial_schedule(mut self, schedule: Schedule) -> Self {
        self.initial_schedule = Some(schedule);
        self
    }

    pub fn with_config(mut self, config: WidgetConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }
}

/// A user interaction, in the form hosts and scripted sessions deliver it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CalendarEvent {
    DragStart { y: f64 },
    DragMove { y: f64 },
    DragEnd { y: f64 },
    TapBlock { id: String },
    SelectSlotDuration { minutes: u32 },
    Save,
    Delete,
    Cancel,
    OpenCopy,
    ToggleCopyDay { weekday: u32 },
    ApplyCopy,
    CloseCopy,
    DismissAlert,
    SetDate { date: NaiveDate },
}

pub struct AvailabilityCalendar<O> {
    current_date: NaiveDate,
    config: WidgetConfig,
    theme: ResolvedTheme,
    store: ScheduleStore<O>,
    gesture: DragGesture,
    edit: EditDialog,
    copy: CopyDialog,
    alert: Option<String>,
    header: Option<String>,
    footer: Option<String>,
}

impl<O: ScheduleObserver> AvailabilityCalendar<O> {
    /// Mounts the widget.
    ///
    /// # Errors
    ///
    /// Returns an error if `props.config` fails validation.
    pub fn new(props: CalendarProps, observer: O) -> Result<Self> {
        props
            .config
            .validate()
            .wrap_err("Invalid calendar configuration")?;

        let theme = props.config.theme.resolve();
        let initial = props.initial_schedule.unwrap_or_default();
        info!(day = %date_key(props.current_date), days = initial.len(), "Mounting availability calendar");

        Ok(Self {
            current_date: props.current_date,
            config: props.config,
            theme,
            store: ScheduleStore::new(initial, observer),
            gesture: DragGesture::new(),
            edit: EditDialog::new(),
            copy: CopyDialog::new(),
            alert: None,
            header: props.header,
            footer: props.footer,
        })
    }

    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    /// Switches the displayed day.
    ///
    /// Any drag in progress is dropped, both dialogs close, the copy
    /// selection is cleared and a pending alert is dismissed, so nothing
    /// keeps referring to the previous day.
    pub fn set_current_date(&mut self, date: NaiveDate) {
        if date == self.current_date {
            return;
        }

        info!(from = %date_key(self.current_date), to = %date_key(date), "Changing displayed day");
        self.current_date = date;
        self.gesture.cancel();
        self.edit.cancel();
        self.copy.close();
        self.copy.clear_selection();
        self.alert = None;
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn theme(&self) -> &ResolvedTheme {
        &self.theme
    }

    pub fn schedule(&self) -> &Schedule {
        self.store.schedule()
    }

    /// Blocks of the displayed day in ascending start order.
    pub fn todays_blocks(&self) -> &[AvailabilityBlock] {
        self.store.blocks_for(self.current_date)
    }

    pub fn timeline(&self) -> Timeline {
        Timeline::new(self.current_date, self.config.time_interval)
    }

    pub fn provisional_block(&self) -> Option<&AvailabilityBlock> {
        self.gesture.provisional()
    }

    pub fn editing_block(&self) -> Option<&AvailabilityBlock> {
        self.edit.block()
    }

    pub fn is_edit_dialog_open(&self) -> bool {
        self.edit.is_open()
    }

    pub fn is_copy_dialog_open(&self) -> bool {
        self.copy.is_open()
    }

    pub fn copy_selection(&self) -> Vec<u32> {
        self.copy.selected_days()
    }

    /// Message the host should show the user, if any.
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn observer(&self) -> &O {
        self.store.observer()
    }

    pub fn observer_mut(&mut self) -> &mut O {
        self.store.observer_mut()
    }

    // --- Drag-to-create ---

    pub fn drag_start(&mut self, y: f64) {
        if self.modal_open() {
            debug!("Ignoring drag while a dialog is open");
            return;
        }
        let timeline = self.timeline();
        self.gesture
            .start(&timeline, y, self.config.default_slot_duration());
    }

    pub fn drag_move(&mut self, y: f64) {
        let timeline = self.timeline();
        self.gesture.update(&timeline, y);
    }

    /// Ends the drag. A drag that covered some time opens the edit dialog.
    pub fn drag_end(&mut self, y: f64) {
        let timeline = self.timeline();
        if let Some(block) = self.gesture.release(&timeline, y) {
            self.edit.open(block);
        }
    }

    // --- Edit dialog ---

    /// Opens the edit dialog on a saved block of the displayed day.
    ///
    /// A drag in progress is dropped. Taps are ignored while the copy
    /// dialog is open.
    ///
    /// # Errors
    ///
    /// * `CalendarError::NotFound` - The displayed day has no block with `id`
    pub fn tap_block(&mut self, id: &str) -> CalendarResult<()> {
        if self.copy.is_open() {
            debug!(id, "Ignoring tap while the copy dialog is open");
            return Ok(());
        }
        self.gesture.cancel();

        let block = self
            .store
            .schedule()
            .find_block(self.current_date, id)
            .cloned()
            .ok_or_else(|| CalendarError::NotFound(format!("Block {} not found", id)))?;

        self.edit.open(block);
        Ok(())
    }

    pub fn select_slot_duration(&mut self, minutes: u32) -> CalendarResult<()> {
        self.edit
            .select_slot_duration(minutes, &self.config.slot_duration_options)
    }

    /// Commits the edited block to the displayed day and closes the dialog.
    pub fn save_block(&mut self) {
        if let Some(blocks) = self.edit.save(self.store.blocks_for(self.current_date)) {
            self.store.update_day(self.current_date, blocks);
        }
    }

    /// Removes the edited block from the displayed day and closes the dialog.
    ///
    /// The observer is notified even when the block was never saved.
    pub fn delete_block(&mut self) {
        if let Some(blocks) = self.edit.delete(self.store.blocks_for(self.current_date)) {
            self.store.update_day(self.current_date, blocks);
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit.cancel();
    }

    // --- Copy dialog ---

    pub fn open_copy_dialog(&mut self) {
        self.gesture.cancel();
        self.copy.open();
    }

    pub fn close_copy_dialog(&mut self) {
        self.copy.close();
    }

    pub fn toggle_copy_day(&mut self, weekday: u32) -> CalendarResult<()> {
        self.copy.toggle_day(weekday, self.current_date)
    }

    /// Copies the displayed day onto the selected weekdays and commits.
    ///
    /// # Errors
    ///
    /// * `CalendarError::NothingToCopy` - The displayed day has no blocks.
    ///   The alert text is also kept for [`AvailabilityCalendar::alert`].
    /// * `CalendarError::Validation` - No weekday is selected
    pub fn apply_copy(&mut self) -> CalendarResult<()> {
        match self.copy.apply(self.store.schedule(), self.current_date) {
            Ok(schedule) => {
                self.store.replace(schedule);
                Ok(())
            }
            Err(err @ CalendarError::NothingToCopy) => {
                warn!(day = %date_key(self.current_date), "Nothing to copy");
                self.alert = Some(err.to_string());
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    /// Routes one event to the matching interaction method.
    pub fn dispatch(&mut self, event: CalendarEvent) -> CalendarResult<()> {
        debug!(?event, "Dispatching calendar event");
        match event {
            CalendarEvent::DragStart { y } => self.drag_start(y),
            CalendarEvent::DragMove { y } => self.drag_move(y),
            CalendarEvent::DragEnd { y } => self.drag_end(y),
            CalendarEvent::TapBlock { id } => self.tap_block(&id)?,
            CalendarEvent::SelectSlotDuration { minutes } => self.select_slot_duration(minutes)?,
            CalendarEvent::Save => self.save_block(),
            CalendarEvent::Delete => self.delete_block(),
            CalendarEvent::Cancel => self.cancel_edit(),
            CalendarEvent::OpenCopy => self.open_copy_dialog(),
            CalendarEvent::ToggleCopyDay { weekday } => self.toggle_copy_day(weekday)?,
            CalendarEvent::ApplyCopy => self.apply_copy()?,
            CalendarEvent::CloseCopy => self.close_copy_dialog(),
            CalendarEvent::DismissAlert => self.dismiss_alert(),
            CalendarEvent::SetDate { date } => self.set_current_date(date),
        }
        Ok(())
    }

    // --- Rendering ---

    pub fn view(&self) -> CalendarView<'_> {
        let timeline = render::render_timeline(
            self.todays_blocks(),
            self.gesture.provisional(),
            &self.theme,
        );

        let edit_dialog = self.edit.block().map(|block| {
            render::render_edit_dialog(block, &self.config.slot_duration_options, &self.theme)
        });

        let copy_dialog = self.copy.is_open().then(|| {
            render::render_copy_dialog(&self.copy.selected_days(), self.current_date, &self.theme)
        });

        CalendarView {
            header: self.header.as_deref(),
            copy_button_label: render::COPY_BUTTON_LABEL,
            timeline,
            edit_dialog,
            copy_dialog,
            alert: self.alert.as_deref(),
            footer: self.footer.as_deref(),
        }
    }

    fn modal_open(&self) -> bool {
        self.edit.is_open() || self.copy.is_open()
    }
}
