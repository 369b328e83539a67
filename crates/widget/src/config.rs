//! # Widget Configuration Module
//!
//! This module holds the knobs a host can set on the availability calendar
//! and loads them from environment variables when the host prefers that.
//!
//! ## Environment Variables
//!
//! - `CALENDAR_SLOT_DURATIONS`: Comma-separated slot durations in minutes
//!   (default: "15,20,30,45,60"). The first entry is used for new blocks.
//! - `CALENDAR_TIME_INTERVAL`: Rounding step in minutes for drag gestures (default: 30)
//! - `CALENDAR_PRIMARY_COLOR`, `CALENDAR_ACCENT_COLOR`, `CALENDAR_BLOCK_COLOR`,
//!   `CALENDAR_LINE_COLOR`, `CALENDAR_FONT_FAMILY`: Theme overrides
//! - `LOG_LEVEL`: Logging level (default: "info")

use availability_core::models::Theme;
use eyre::{Result, WrapErr, eyre};
use std::env;
use tracing::Level;

/// Slot durations offered when the host does not configure any.
pub const DEFAULT_SLOT_DURATIONS: [u32; 5] = [15, 20, 30, 45, 60];

/// Minutes that drag positions are rounded to by default.
pub const DEFAULT_TIME_INTERVAL: u32 = 30;

/// Configuration for one calendar widget instance
///
/// # Example
///
/// ```
/// use availability_widget::config::WidgetConfig;
///
/// let config = WidgetConfig::default();
/// assert_eq!(config.default_slot_duration(), 15);
/// assert_eq!(config.time_interval, 30);
/// ```
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    /// Slot durations the edit dialog offers, in display order
    pub slot_duration_options: Vec<u32>,

    /// Granularity in minutes that drag positions snap to
    pub time_interval: u32,

    /// Cosmetic overrides, resolved against defaults when the widget is built
    pub theme: Theme,

    /// Log level for hosts that let the widget configure logging
    pub log_level: Level,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            slot_duration_options: DEFAULT_SLOT_DURATIONS.to_vec(),
            time_interval: DEFAULT_TIME_INTERVAL,
            theme: Theme::default(),
            log_level: Level::INFO,
        }
    }
}

impl WidgetConfig {
    /// Creates a WidgetConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - `CALENDAR_SLOT_DURATIONS` contains an entry that is not a number
    /// - `CALENDAR_TIME_INTERVAL` cannot be parsed as a number
    /// - the resulting configuration fails [`WidgetConfig::validate`]
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let slot_duration_options = match lookup("CALENDAR_SLOT_DURATIONS") {
            Some(raw) => parse_durations(&raw).wrap_err("Invalid CALENDAR_SLOT_DURATIONS value")?,
            None => DEFAULT_SLOT_DURATIONS.to_vec(),
        };

        let time_interval = lookup("CALENDAR_TIME_INTERVAL")
            .unwrap_or_else(|| DEFAULT_TIME_INTERVAL.to_string())
            .trim()
            .parse()
            .wrap_err("Invalid CALENDAR_TIME_INTERVAL value")?;

        let theme = Theme {
            primary_color: lookup("CALENDAR_PRIMARY_COLOR"),
            accent_color: lookup("CALENDAR_ACCENT_COLOR"),
            availability_block_color: lookup("CALENDAR_BLOCK_COLOR"),
            timeline_line_color: lookup("CALENDAR_LINE_COLOR"),
            font_family: lookup("CALENDAR_FONT_FAMILY"),
        };

        let log_level = match lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        let config = Self {
            slot_duration_options,
            time_interval,
            theme,
            log_level,
        };
        config.validate()?;

        Ok(config)
    }

    /// Checks that the slot options and the time interval are usable.
    pub fn validate(&self) -> Result<()> {
        if self.slot_duration_options.is_empty() {
            return Err(eyre!("At least one slot duration option is required"));
        }
        if self.slot_duration_options.contains(&0) {
            return Err(eyre!("Slot durations must be positive"));
        }
        for (index, minutes) in self.slot_duration_options.iter().enumerate() {
            if self.slot_duration_options[..index].contains(minutes) {
                return Err(eyre!("Slot duration {} min is listed twice", minutes));
            }
        }
        if self.time_interval == 0 {
            return Err(eyre!("Time interval must be positive"));
        }

        Ok(())
    }

    /// Slot duration assigned to newly drawn blocks.
    pub fn default_slot_duration(&self) -> u32 {
        self.slot_duration_options
            .first()
            .copied()
            .unwrap_or(DEFAULT_SLOT_DURATIONS[0])
    }
}

fn parse_durations(raw: &str) -> Result<Vec<u32>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u32>()
                .wrap_err_with(|| format!("'{}' is not a number of minutes", s))
        })
        .collect()
}
