use availability_core::errors::{CalendarError, CalendarResult};

#[test]
fn test_calendar_error_display() {
    let nothing = CalendarError::NothingToCopy;
    let validation = CalendarError::Validation("Invalid slot duration".to_string());
    let not_found = CalendarError::NotFound("Block abc not found".to_string());

    assert_eq!(nothing.to_string(), "No schedule to copy for today.");
    assert_eq!(
        validation.to_string(),
        "Validation error: Invalid slot duration"
    );
    assert_eq!(
        not_found.to_string(),
        "Resource not found: Block abc not found"
    );
}

#[test]
fn test_calendar_result() {
    let result: CalendarResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: CalendarResult<i32> = Err(CalendarError::NothingToCopy);
    assert!(matches!(result, Err(CalendarError::NothingToCopy)));
}

#[test]
fn test_error_converts_into_eyre_friendly_box() {
    let boxed: Box<dyn std::error::Error + Send + Sync> =
        Box::new(CalendarError::Validation("bad".to_string()));

    assert!(boxed.to_string().contains("bad"));
}
