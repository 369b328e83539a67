use std::{env, fs};

use availability_core::models::Schedule;
use availability_widget::{
    AvailabilityCalendar, CalendarEvent, CalendarProps, FnObserver, config::WidgetConfig,
};
use chrono::NaiveDate;
use color_eyre::eyre::{Result, WrapErr, eyre};
use dotenv::dotenv;
use serde::Deserialize;
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

/// A recorded session: the day shown, an optional seed and the user's events.
#[derive(Debug, Deserialize)]
struct Session {
    current_date: NaiveDate,
    #[serde(default)]
    initial_schedule: Option<Schedule>,
    #[serde(default)]
    header: Option<String>,
    #[serde(default)]
    footer: Option<String>,
    events: Vec<CalendarEvent>,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = WidgetConfig::from_env()?;

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let path = env::args()
        .nth(1)
        .ok_or_else(|| eyre!("Usage: availability-replay <session.json>"))?;
    let raw = fs::read_to_string(&path).wrap_err_with(|| format!("Failed to read {}", path))?;
    let session: Session =
        serde_json::from_str(&raw).wrap_err_with(|| format!("Failed to parse session {}", path))?;

    let mut props = CalendarProps::new(session.current_date).with_config(config);
    props.initial_schedule = session.initial_schedule;
    props.header = session.header;
    props.footer = session.footer;

    let mut updates = 0usize;
    let observer = FnObserver(|schedule: &Schedule| {
        updates += 1;
        info!(days = schedule.len(), "Schedule updated");
    });
    let mut calendar = AvailabilityCalendar::new(props, observer)?;

    info!(events = session.events.len(), "Replaying session");
    for event in session.events {
        if let Err(err) = calendar.dispatch(event.clone()) {
            warn!(?event, "Event rejected: {}", err);
        }
    }

    {
        let view = calendar.view();
        if let Some(header) = view.header {
            println!("{}", header);
        }
        print!("{}", view.timeline);
        if let Some(footer) = view.footer {
            println!("{}", footer);
        }
        if let Some(alert) = view.alert {
            println!("! {}", alert);
        }
    }
    println!("{}", serde_json::to_string_pretty(calendar.schedule())?);

    drop(calendar);
    info!(updates, "Session finished");

    Ok(())
}
