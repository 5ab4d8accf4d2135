pub mod check;
pub mod config;
pub mod slots;
pub mod update;

use std::io::Read;
use std::path::Path;

use clap::Args;
use slotkeeper_core::{Config, Event, ParseError, ProductivityHour, UserPreferences, WorkingHours};

/// Preference flags shared by the scheduling commands.
///
/// Anything left unset falls back to the persisted config. A missing config
/// file means defaults; a malformed one is reported as an error.
#[derive(Args, Debug, Default)]
pub struct PreferenceArgs {
    /// Working hours as HH:mm-HH:mm (e.g. "08:00-18:00")
    #[arg(long)]
    pub working_hours: Option<String>,
    /// Comma-separated productivity hours (e.g. "09,10")
    #[arg(long, value_delimiter = ',')]
    pub productivity_hours: Vec<String>,
}

impl PreferenceArgs {
    pub fn resolve(&self) -> Result<UserPreferences, Box<dyn std::error::Error>> {
        let mut prefs = Config::read()?.user_preferences();

        if let Some(raw) = &self.working_hours {
            let (start, end) = raw
                .split_once('-')
                .ok_or_else(|| format!("invalid working hours '{raw}': expected HH:mm-HH:mm"))?;
            prefs = prefs.with_working_hours(WorkingHours::parse(start.trim(), end.trim())?);
        }

        if !self.productivity_hours.is_empty() {
            let hours = self
                .productivity_hours
                .iter()
                .map(|h| ProductivityHour::parse(h.trim()))
                .collect::<Result<Vec<_>, _>>()?;
            prefs = prefs.with_productivity_hours(hours);
        }

        Ok(prefs)
    }
}

/// Read the calendar's event list. `-` reads stdin.
pub fn read_events(path: &str) -> Result<Vec<Event>, Box<dyn std::error::Error>> {
    let content = if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|e| format!("cannot read {path}: {e}"))?
    };

    let events: Vec<Event> = serde_json::from_str(&content)?;
    for event in &events {
        check_range(event)?;
    }
    tracing::debug!(count = events.len(), source = path, "loaded events");
    Ok(events)
}

/// Parse a single event from inline JSON or a file path.
pub fn read_event(raw: &str) -> Result<Event, Box<dyn std::error::Error>> {
    let content = if raw.trim_start().starts_with('{') {
        raw.to_string()
    } else if Path::new(raw).exists() {
        std::fs::read_to_string(raw)?
    } else {
        return Err(format!("event is neither inline JSON nor a readable file: {raw}").into());
    };

    let event: Event = serde_json::from_str(&content)?;
    check_range(&event)?;
    Ok(event)
}

fn check_range(event: &Event) -> Result<(), ParseError> {
    if event.end_time <= event.start_time {
        return Err(ParseError::InvalidRange {
            start: event.start_time.to_string(),
            end: event.end_time.to_string(),
        });
    }
    Ok(())
}

pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
