use availability_core::{
    errors::{CalendarError, CalendarResult},
    models::{AvailabilityBlock, sort_by_start},
};
use tracing::debug;

/// State of the edit dialog. It is open exactly while a block is held.
///
/// Save and delete do not touch the schedule themselves; they return the
/// day's new block list for the caller to commit.
#[derive(Debug, Default)]
pub struct EditDialog {
    editing: Option<AvailabilityBlock>,
}

impl EditDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the dialog on `block`, replacing whatever was being edited.
    pub fn open(&mut self, block: AvailabilityBlock) {
        debug!(id = %block.id, "Opening edit dialog");
        self.editing = Some(block);
    }

    pub fn is_open(&self) -> bool {
        self.editing.is_some()
    }

    pub fn block(&self) -> Option<&AvailabilityBlock> {
        self.editing.as_ref()
    }

    /// Changes the slot duration of the block being edited.
    ///
    /// # Errors
    ///
    /// * `CalendarError::NotFound` - No block is being edited
    /// * `CalendarError::Validation` - `minutes` is not one of `options`
    pub fn select_slot_duration(&mut self, minutes: u32, options: &[u32]) -> CalendarResult<()> {
        let block = self
            .editing
            .as_mut()
            .ok_or_else(|| CalendarError::NotFound("No block is being edited".to_string()))?;

        if !options.contains(&minutes) {
            return Err(CalendarError::Validation(format!(
                "{} min is not an offered slot duration",
                minutes
            )));
        }

        block.slot_duration_minutes = minutes;
        Ok(())
    }

    /// Closes the dialog and returns `today` with the edited block in place
    /// of any block sharing its id, sorted by start time.
    pub fn save(&mut self, today: &[AvailabilityBlock]) -> Option<Vec<AvailabilityBlock>> {
        let edited = self.editing.take()?;

        let mut blocks: Vec<AvailabilityBlock> = today
            .iter()
            .filter(|block| block.id != edited.id)
            .cloned()
            .collect();
        blocks.push(edited);
        sort_by_start(&mut blocks);

        Some(blocks)
    }

    /// Closes the dialog and returns `today` without the edited block.
    pub fn delete(&mut self, today: &[AvailabilityBlock]) -> Option<Vec<AvailabilityBlock>> {
        let edited = self.editing.take()?;

        Some(
            today
                .iter()
                .filter(|block| block.id != edited.id)
                .cloned()
                .collect(),
        )
    }

    /// Closes the dialog, dropping any unsaved changes.
    pub fn cancel(&mut self) {
        self.editing = None;
    }
}
