//! Conflict resolution for event creation and event edits.

use tracing::{debug, info};

use super::finder::find_conflicts;
use super::planner::{choose_slot, RearrangementPlanner, RearrangementSuggestion};
use super::result::{ConflictDetectionResult, ResolutionStrategy, SuggestedResolution};
use crate::preferences::UserPreferences;
use crate::timeline::{Event, FreeSlotFinder};

/// Decides how to handle a new or edited event that collides with the
/// caller's calendar. Pure: nothing passed in is modified.
pub struct ConflictResolver {
    preferences: UserPreferences,
}

impl ConflictResolver {
    /// Create a resolver with default preferences
    pub fn new() -> Self {
        Self {
            preferences: UserPreferences::default(),
        }
    }

    /// Create with explicit preferences
    pub fn with_preferences(preferences: UserPreferences) -> Self {
        Self { preferences }
    }

    pub fn preferences(&self) -> &UserPreferences {
        &self.preferences
    }

    /// Check a new event against `existing_events`.
    ///
    /// The new event is moved to an open slot when one exists. Otherwise the
    /// conflicting events are rearranged around it. When neither works the
    /// result carries a manual-resolution message.
    pub fn detect_and_resolve(
        &self,
        new_event: &Event,
        existing_events: &[Event],
    ) -> ConflictDetectionResult {
        let proposed = new_event.slot();
        let conflicts = find_conflicts(&proposed, existing_events, None);
        if conflicts.is_empty() {
            debug!(event_id = %new_event.id, "no conflicts");
            return ConflictDetectionResult::no_conflict();
        }
        debug!(event_id = %new_event.id, conflicts = conflicts.len(), "conflicts found");

        let conflicting_events: Vec<Event> = conflicts.iter().map(|e| (*e).clone()).collect();

        // 1. Try moving the new event itself
        let candidates = FreeSlotFinder::new()
            .with_working_hours(self.preferences.working_hours())
            .find_slots(
                new_event.date,
                new_event.duration_minutes(),
                existing_events,
                None,
            );
        if let Some((slot, reason)) = choose_slot(new_event, &candidates, &self.preferences) {
            info!(event_id = %new_event.id, slot = %slot, ?reason, "relocating new event");
            let message = format!(
                "\"{}\" conflicts with {}. Suggested moving it to {}-{}.",
                new_event.title,
                describe_events(&conflicting_events),
                slot.start_time,
                slot.end_time
            );
            return ConflictDetectionResult::with_resolution(
                conflicting_events,
                SuggestedResolution {
                    strategy: ResolutionStrategy::RelocateNewEvent,
                    rearranged_events: Vec::new(),
                    new_event_slot: slot,
                    message,
                },
            );
        }

        // 2. Keep the new event where it is and move what is in the way
        let planner = RearrangementPlanner::with_preferences(self.preferences.clone());
        let suggestions = planner.plan(new_event, &conflicts, existing_events);
        rearranged_or_manual(new_event, conflicting_events, suggestions)
    }

    /// Check an edited event against `existing_events`.
    ///
    /// The edit is treated as intentional: the edited event is never moved.
    /// Only the other conflicting events are rearranged.
    pub fn check_update(
        &self,
        updated_event: &Event,
        existing_events: &[Event],
    ) -> ConflictDetectionResult {
        let proposed = updated_event.slot();
        let conflicts = find_conflicts(&proposed, existing_events, Some(updated_event.id.as_str()));
        if conflicts.is_empty() {
            debug!(event_id = %updated_event.id, "no conflicts after edit");
            return ConflictDetectionResult::no_conflict();
        }
        debug!(event_id = %updated_event.id, conflicts = conflicts.len(), "edit conflicts found");

        let conflicting_events: Vec<Event> = conflicts.iter().map(|e| (*e).clone()).collect();
        let others: Vec<Event> = existing_events
            .iter()
            .filter(|e| e.id != updated_event.id)
            .cloned()
            .collect();

        let planner = RearrangementPlanner::with_preferences(self.preferences.clone());
        let suggestions = planner.plan(updated_event, &conflicts, &others);
        rearranged_or_manual(updated_event, conflicting_events, suggestions)
    }
}

impl Default for ConflictResolver {
    fn default() -> Self {
        Self::new()
    }
}

fn rearranged_or_manual(
    anchor: &Event,
    conflicting_events: Vec<Event>,
    suggestions: Vec<RearrangementSuggestion>,
) -> ConflictDetectionResult {
    if suggestions.is_empty() {
        info!(event_id = %anchor.id, "no automatic resolution");
        let message = format!(
            "Couldn't find a suitable alternative time for {}. Please resolve the conflict with \"{}\" manually.",
            describe_events(&conflicting_events),
            anchor.title
        );
        return ConflictDetectionResult::with_resolution(
            conflicting_events,
            SuggestedResolution {
                strategy: ResolutionStrategy::Manual,
                rearranged_events: Vec::new(),
                new_event_slot: anchor.slot(),
                message,
            },
        );
    }

    info!(event_id = %anchor.id, moved = suggestions.len(), "rearranging conflicting events");
    let details: Vec<String> = suggestions
        .iter()
        .map(|s| format!("\"{}\" to {}-{}", s.original_event.title, s.new_start_time, s.new_end_time))
        .collect();
    let message = format!(
        "Keeping \"{}\" at {}-{}. Suggested moving {}.",
        anchor.title,
        anchor.start_time,
        anchor.end_time,
        details.join(", ")
    );

    ConflictDetectionResult::with_resolution(
        conflicting_events,
        SuggestedResolution {
            strategy: ResolutionStrategy::RearrangeExisting,
            rearranged_events: suggestions.iter().map(|s| s.to_event()).collect(),
            new_event_slot: anchor.slot(),
            message,
        },
    )
}

fn describe_events(events: &[Event]) -> String {
    match events {
        [single] => format!("\"{}\"", single.title),
        many => format!("{} events", many.len()),
    }
}

/// Convenience function for the create path.
pub fn detect_and_resolve_conflicts(
    new_event: &Event,
    existing_events: &[Event],
    preferences: Option<&UserPreferences>,
) -> ConflictDetectionResult {
    ConflictResolver::with_preferences(preferences.cloned().unwrap_or_default())
        .detect_and_resolve(new_event, existing_events)
}

/// Convenience function for the update path.
pub fn check_event_update_conflicts(
    updated_event: &Event,
    existing_events: &[Event],
    preferences: Option<&UserPreferences>,
) -> ConflictDetectionResult {
    ConflictResolver::with_preferences(preferences.cloned().unwrap_or_default())
        .check_update(updated_event, existing_events)
}
