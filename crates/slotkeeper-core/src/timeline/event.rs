//! Calendar event types as supplied by the calling application.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::clock::ClockTime;
use super::slot::TimeSlot;
use crate::error::ParseError;

/// Relative importance of an event, used only to decide what moves first.
///
/// Variants are declared in ascending rank so the derived `Ord` matches
/// `low < medium < high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!("unknown priority: {other}")),
        }
    }
}

/// Stable category identifier, distinct from the display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    pub const STUDY: &'static str = "study";
    pub const WORK: &'static str = "work";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Work and study events prefer productivity hours when relocated.
    pub fn is_focus(&self) -> bool {
        self.0 == Self::STUDY || self.0 == Self::WORK
    }
}

/// Event category with display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(id),
            name: name.into(),
            color: None,
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::new("personal", "Personal")
    }
}

/// A calendar event owned by the caller. The engine only reads these and
/// hands back moved copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: NaiveDate,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub priority: Priority,
}

impl Event {
    /// Create an event with the default category and medium priority.
    ///
    /// `start_time < end_time` is the caller's contract; use
    /// [`try_new`](Self::try_new) to have it checked.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        date: NaiveDate,
        start_time: ClockTime,
        end_time: ClockTime,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            date,
            start_time,
            end_time,
            category: Category::default(),
            priority: Priority::default(),
        }
    }

    /// Create an event, rejecting an empty or inverted time range.
    pub fn try_new(
        id: impl Into<String>,
        title: impl Into<String>,
        date: NaiveDate,
        start_time: ClockTime,
        end_time: ClockTime,
    ) -> Result<Self, ParseError> {
        TimeSlot::try_new(date, start_time, end_time)?;
        Ok(Self::new(id, title, date, start_time, end_time))
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// The interval this event occupies.
    pub fn slot(&self) -> TimeSlot {
        TimeSlot::new(self.date, self.start_time, self.end_time)
    }

    pub fn duration_minutes(&self) -> u32 {
        self.slot().duration_minutes()
    }

    /// A copy of this event moved to `slot`. Id, title, category and
    /// priority are unchanged.
    pub fn moved_to(&self, slot: TimeSlot) -> Self {
        Self {
            date: slot.date,
            start_time: slot.start_time,
            end_time: slot.end_time,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_orders_low_to_high() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::Medium < Priority::High);
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn only_work_and_study_are_focus_categories() {
        assert!(CategoryId::new("work").is_focus());
        assert!(CategoryId::new("study").is_focus());
        assert!(!CategoryId::new("personal").is_focus());
        assert!(!CategoryId::new("Work").is_focus());
    }

    #[test]
    fn deserializes_front_end_json() {
        let json = r##"{
            "id": "evt-1",
            "title": "Standup",
            "date": "2025-01-01",
            "startTime": "09:00",
            "endTime": "09:15",
            "category": { "id": "work", "name": "Work", "color": "#3b82f6" },
            "priority": "high"
        }"##;

        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.id, "evt-1");
        assert_eq!(event.duration_minutes(), 15);
        assert!(event.category.id.is_focus());
        assert_eq!(event.priority, Priority::High);
    }

    #[test]
    fn missing_category_and_priority_fall_back_to_defaults() {
        let json = r#"{"id":"a","title":"Lunch","date":"2025-01-01","startTime":"12:00","endTime":"13:00"}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.priority, Priority::Medium);
        assert_eq!(event.category.id.as_str(), "personal");
    }

    #[test]
    fn moved_to_keeps_identity() {
        let date = "2025-01-01".parse().unwrap();
        let event = Event::new(
            "a",
            "Gym",
            date,
            ClockTime::parse("09:00").unwrap(),
            ClockTime::parse("10:00").unwrap(),
        )
        .with_priority(Priority::Low);

        let target = TimeSlot::starting_at(date, ClockTime::parse("15:00").unwrap(), 60);
        let moved = event.moved_to(target);
        assert_eq!(moved.id, "a");
        assert_eq!(moved.title, "Gym");
        assert_eq!(moved.priority, Priority::Low);
        assert_eq!(moved.slot(), target);
    }

    #[test]
    fn try_new_rejects_inverted_times() {
        let date = "2025-01-01".parse().unwrap();
        let ten = ClockTime::parse("10:00").unwrap();
        let nine = ClockTime::parse("09:00").unwrap();
        assert!(Event::try_new("a", "Bad", date, ten, nine).is_err());
    }
}
