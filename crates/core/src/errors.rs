use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalendarError {
    /// Raised when the copy dialog is applied on a day without blocks.
    #[error("No schedule to copy for today.")]
    NothingToCopy,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),
}

pub type CalendarResult<T> = Result<T, CalendarError>;
