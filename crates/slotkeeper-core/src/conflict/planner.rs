//! Rearrangement planner.
//!
//! Proposes new slots for events that conflict with a new or edited event:
//! - Lower-priority events are moved first
//! - Work and study events prefer declared productivity hours
//! - Events with no open slot on their day are left out of the plan

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::preferences::UserPreferences;
use crate::timeline::{ClockTime, Event, FreeSlotFinder, TimeSlot};

/// Why a particular slot was chosen for a moved event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RearrangementReason {
    /// Slot starts in one of the user's productivity hours
    ProductivityHour,
    /// Earliest open slot of sufficient length
    EarliestOpenSlot,
}

impl RearrangementReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProductivityHour => "Moved into a productivity hour",
            Self::EarliestOpenSlot => "Moved to the earliest open slot",
        }
    }
}

/// A proposed move for one conflicting event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RearrangementSuggestion {
    pub original_event: Event,
    pub new_start_time: ClockTime,
    pub new_end_time: ClockTime,
    pub reason: RearrangementReason,
    /// Human-readable summary naming the event that made room necessary
    pub note: String,
}

impl RearrangementSuggestion {
    fn new(original_event: &Event, slot: TimeSlot, reason: RearrangementReason, anchor: &Event) -> Self {
        let note = format!(
            "{} ({} priority) to {}-{} to make room for \"{}\"",
            reason.as_str(),
            original_event.priority,
            slot.start_time,
            slot.end_time,
            anchor.title
        );
        Self {
            original_event: original_event.clone(),
            new_start_time: slot.start_time,
            new_end_time: slot.end_time,
            reason,
            note,
        }
    }

    pub fn new_slot(&self) -> TimeSlot {
        TimeSlot::new(self.original_event.date, self.new_start_time, self.new_end_time)
    }

    /// The original event moved to its suggested slot.
    pub fn to_event(&self) -> Event {
        self.original_event.moved_to(self.new_slot())
    }
}

/// Choose among open slots for `event`.
///
/// Work and study events take the first slot starting in a productivity hour
/// when any are declared; everything else takes the earliest slot.
pub(crate) fn choose_slot(
    event: &Event,
    candidates: &[TimeSlot],
    preferences: &UserPreferences,
) -> Option<(TimeSlot, RearrangementReason)> {
    if event.category.id.is_focus() {
        if let Some(slot) = candidates.iter().find(|s| preferences.is_productive(s)) {
            return Some((*slot, RearrangementReason::ProductivityHour));
        }
    }
    candidates
        .first()
        .map(|slot| (*slot, RearrangementReason::EarliestOpenSlot))
}

/// Plans moves for conflicting events
pub struct RearrangementPlanner {
    preferences: UserPreferences,
}

impl RearrangementPlanner {
    /// Create a planner with default preferences
    pub fn new() -> Self {
        Self {
            preferences: UserPreferences::default(),
        }
    }

    /// Create with explicit preferences
    pub fn with_preferences(preferences: UserPreferences) -> Self {
        Self { preferences }
    }

    /// Propose a new slot for each conflicting event.
    ///
    /// # Arguments
    /// * `anchor` - The new or edited event; only its title is used
    /// * `conflicts` - Events to relocate
    /// * `all_events` - Occupancy used for each event's own free-slot search
    ///
    /// # Returns
    /// One suggestion per event that could be moved, lowest priority first.
    /// Events with no open slot on their day are omitted.
    pub fn plan(
        &self,
        anchor: &Event,
        conflicts: &[&Event],
        all_events: &[Event],
    ) -> Vec<RearrangementSuggestion> {
        let finder = FreeSlotFinder::new().with_working_hours(self.preferences.working_hours());

        let mut ordered: Vec<&Event> = conflicts.to_vec();
        // Stable: equal priorities keep their conflict order
        ordered.sort_by_key(|e| e.priority);

        ordered
            .into_iter()
            .filter_map(|event| {
                let candidates = finder.find_slots(
                    event.date,
                    event.duration_minutes(),
                    all_events,
                    Some(event.id.as_str()),
                );
                match choose_slot(event, &candidates, &self.preferences) {
                    Some((slot, reason)) => {
                        debug!(event_id = %event.id, slot = %slot, ?reason, "planned move");
                        Some(RearrangementSuggestion::new(event, slot, reason, anchor))
                    }
                    None => {
                        debug!(event_id = %event.id, "no open slot for conflicting event");
                        None
                    }
                }
            })
            .collect()
    }
}

impl Default for RearrangementPlanner {
    fn default() -> Self {
        Self::new()
    }
}
