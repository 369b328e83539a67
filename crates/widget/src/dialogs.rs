//! Modal dialogs of the calendar: editing one block, and copying a day's
//! blocks onto other weekdays.

pub mod copy;
pub mod edit;

pub use copy::{CopyDialog, WEEKDAY_LABELS, target_date, weekday_index};
pub use edit::EditDialog;
